//! Credit-weighted CGPA and completed-credit computation.
//!
//! A grade qualifies when it is present and non-zero; absent or zero grades
//! mean "not yet graded" and never contribute to either metric.

/// One graded enrollment joined to its course credit weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedEnrollment {
    /// Course credit weight.
    pub credit: f64,
    /// Numeric grade, if one has been recorded.
    pub grade: Option<f64>,
}

impl GradedEnrollment {
    /// Build an enrollment from a credit weight and optional grade.
    #[must_use]
    pub const fn new(credit: f64, grade: Option<f64>) -> Self {
        Self { credit, grade }
    }

    fn qualifying_grade(&self) -> Option<(f64, f64)> {
        self.grade
            .filter(|grade| *grade != 0.0)
            .map(|grade| (self.credit, grade))
    }
}

/// Computed academic standing for one student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademicStanding {
    /// Credit-weighted grade average rounded to two decimal places.
    pub cgpa: f64,
    /// Sum of qualifying credit weights, truncated toward zero.
    pub credit_completed: i32,
}

impl AcademicStanding {
    /// Compute a standing from a student's enrollments.
    ///
    /// Returns `None` when no enrollment qualifies or the qualifying credit
    /// weights sum to zero. Callers treat that as "nothing to record".
    ///
    /// # Examples
    /// ```
    /// use cgpa_refresh::domain::{AcademicStanding, GradedEnrollment};
    ///
    /// let enrollments = [
    ///     GradedEnrollment::new(3.0, Some(8.0)),
    ///     GradedEnrollment::new(2.0, Some(0.0)),
    /// ];
    /// let standing = AcademicStanding::from_enrollments(&enrollments).unwrap();
    /// assert_eq!(standing.credit_completed, 3);
    /// assert_eq!(standing.cgpa, 8.0);
    /// ```
    #[must_use]
    pub fn from_enrollments<'a, I>(enrollments: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GradedEnrollment>,
    {
        let (total_credits, weighted_sum) = enrollments
            .into_iter()
            .filter_map(GradedEnrollment::qualifying_grade)
            .fold((0.0_f64, 0.0_f64), |(credits, weighted), (credit, grade)| {
                (credits + credit, weighted + credit * grade)
            });

        if total_credits == 0.0 {
            return None;
        }

        Some(Self {
            cgpa: round_to_hundredths(weighted_sum / total_credits),
            credit_completed: truncate_credits(total_credits),
        })
    }
}

/// Round to two decimal places using the exact binary value.
///
/// Scaling by 100 first can manufacture a `.5` tie the stored value does not
/// have: a quotient held just above 3.825 scales to exactly 382.5. Formatting
/// rounds the exact value, ties to even.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "completed credits are stored as a 32-bit integer; the cast saturates"
)]
fn truncate_credits(total_credits: f64) -> i32 {
    total_credits.trunc() as i32
}
