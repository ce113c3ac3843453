//! Unit coverage for the standing refresh service.

use std::sync::Arc;

use mockall::Sequence;
use rstest::{fixture, rstest};

use super::StandingRefreshService;
use crate::domain::ports::{
    MockStandingRepository, StandingRefreshCommand, StandingRefreshRequest,
    StandingRepositoryError, StandingWriteSummary, StudentEnrollments,
};
use crate::domain::{AcademicStanding, ErrorCode, GradedEnrollment};

const PREFIX: &str = "2023831";

#[fixture]
fn request() -> StandingRefreshRequest {
    StandingRefreshRequest {
        reg_no_prefix: PREFIX.to_owned(),
    }
}

fn student(user_id: &str, enrollments: Vec<GradedEnrollment>) -> StudentEnrollments {
    StudentEnrollments {
        user_id: user_id.to_owned(),
        reg_no: format!("{PREFIX}{user_id}"),
        enrollments,
    }
}

fn make_service(repository: MockStandingRepository) -> StandingRefreshService<MockStandingRepository> {
    StandingRefreshService::new(Arc::new(repository))
}

#[rstest]
#[tokio::test]
async fn refresh_persists_computed_standings_and_skips_ungraded_students(
    request: StandingRefreshRequest,
) {
    let mut repository = MockStandingRepository::new();
    let mut sequence = Sequence::new();
    repository
        .expect_load_student_enrollments()
        .times(1)
        .in_sequence(&mut sequence)
        .withf(|prefix| prefix == PREFIX)
        .return_once(|_| {
            Ok(vec![
                student(
                    "u1",
                    vec![
                        GradedEnrollment::new(3.0, Some(8.0)),
                        GradedEnrollment::new(3.0, Some(0.0)),
                    ],
                ),
                student("u2", vec![GradedEnrollment::new(4.0, Some(0.0))]),
                student("u3", Vec::new()),
                student(
                    "u4",
                    vec![
                        GradedEnrollment::new(2.0, Some(3.0)),
                        GradedEnrollment::new(2.0, Some(4.0)),
                    ],
                ),
            ])
        });
    repository
        .expect_persist_standings()
        .times(1)
        .in_sequence(&mut sequence)
        .withf(|updates| {
            updates.len() == 2
                && updates.iter().any(|update| {
                    update.user_id == "u1"
                        && update.standing
                            == AcademicStanding {
                                cgpa: 8.0,
                                credit_completed: 3,
                            }
                })
                && updates.iter().any(|update| {
                    update.user_id == "u4"
                        && update.standing
                            == AcademicStanding {
                                cgpa: 3.5,
                                credit_completed: 4,
                            }
                })
        })
        .return_once(|_| {
            Ok(StandingWriteSummary {
                updated: 1,
                inserted: 1,
            })
        });

    let outcome = make_service(repository)
        .refresh(request)
        .await
        .expect("refresh should succeed");

    assert_eq!(outcome.students_scanned, 4);
    assert_eq!(outcome.standings_updated, 1);
    assert_eq!(outcome.standings_inserted, 1);
    assert_eq!(outcome.students_skipped, 2);
}

#[rstest]
#[tokio::test]
async fn refresh_with_no_matching_students_commits_an_empty_batch(
    request: StandingRefreshRequest,
) {
    let mut repository = MockStandingRepository::new();
    repository
        .expect_load_student_enrollments()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    repository
        .expect_persist_standings()
        .times(1)
        .withf(|updates| updates.is_empty())
        .return_once(|_| Ok(StandingWriteSummary::default()));

    let outcome = make_service(repository)
        .refresh(request)
        .await
        .expect("refresh should succeed");

    assert_eq!(outcome.students_scanned, 0);
    assert_eq!(outcome.students_skipped, 0);
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[tokio::test]
async fn refresh_rejects_blank_prefix_before_touching_storage(#[case] prefix: &str) {
    let mut repository = MockStandingRepository::new();
    repository.expect_load_student_enrollments().times(0);
    repository.expect_persist_standings().times(0);

    let error = make_service(repository)
        .refresh(StandingRefreshRequest {
            reg_no_prefix: prefix.to_owned(),
        })
        .await
        .expect_err("blank prefix should fail");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn load_failure_aborts_before_writing(request: StandingRefreshRequest) {
    let mut repository = MockStandingRepository::new();
    repository
        .expect_load_student_enrollments()
        .times(1)
        .return_once(|_| Err(StandingRepositoryError::connection("refused")));
    repository.expect_persist_standings().times(0);

    let error = make_service(repository)
        .refresh(request)
        .await
        .expect_err("load failure should propagate");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.message().contains("refused"));
}

#[rstest]
#[tokio::test]
async fn write_failure_is_reported_as_service_unavailable(request: StandingRefreshRequest) {
    let mut repository = MockStandingRepository::new();
    repository
        .expect_load_student_enrollments()
        .times(1)
        .return_once(|_| Ok(vec![student("u1", vec![GradedEnrollment::new(3.0, Some(9.0))])]));
    repository
        .expect_persist_standings()
        .times(1)
        .return_once(|_| Err(StandingRepositoryError::query("unique violation")));

    let error = make_service(repository)
        .refresh(request)
        .await
        .expect_err("write failure should propagate");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.message().contains("unique violation"));
}
