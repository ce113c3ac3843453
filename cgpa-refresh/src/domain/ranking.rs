//! Competition-style ranking within a session cohort.

/// A student's standing as read for cohort ranking.
///
/// Rows arrive pre-sorted by `(cgpa DESC, credit_completed DESC)` with
/// PostgreSQL ordering, so `None` CGPAs lead the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortStanding {
    /// Student row identifier.
    pub student_id: String,
    /// Recorded CGPA, if any.
    pub cgpa: Option<f64>,
    /// Recorded completed credits, if any.
    pub credit_completed: Option<i32>,
}

/// Position computed for one student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionAssignment {
    /// Student row identifier.
    pub student_id: String,
    /// 1-based rank within the cohort; 0 for leading rows without a CGPA.
    pub position: u32,
}

/// Assign positions to an ordered cohort.
///
/// Students with the same CGPA as the preceding row share its position; the
/// next distinct CGPA takes its own 1-based row index, leaving a gap after
/// every tie group (`1, 2, 2, 4`).
///
/// Ranking starts from "no CGPA seen" at position 0, so rows without a CGPA
/// at the head of the cohort keep position 0.
///
/// # Examples
/// ```
/// use cgpa_refresh::domain::{CohortStanding, assign_positions};
///
/// let cohort: Vec<_> = [9.0, 8.5, 8.5, 8.0]
///     .into_iter()
///     .enumerate()
///     .map(|(idx, cgpa)| CohortStanding {
///         student_id: format!("s{idx}"),
///         cgpa: Some(cgpa),
///         credit_completed: Some(30),
///     })
///     .collect();
/// let positions: Vec<u32> = assign_positions(&cohort)
///     .into_iter()
///     .map(|assignment| assignment.position)
///     .collect();
/// assert_eq!(positions, vec![1, 2, 2, 4]);
/// ```
#[must_use]
pub fn assign_positions(cohort: &[CohortStanding]) -> Vec<PositionAssignment> {
    let mut previous_cgpa: Option<f64> = None;
    let mut position = 0_u32;

    (1_u32..)
        .zip(cohort)
        .map(|(index, student)| {
            if student.cgpa != previous_cgpa {
                position = index;
            }
            previous_cgpa = student.cgpa;
            PositionAssignment {
                student_id: student.student_id.clone(),
                position,
            }
        })
        .collect()
}
