use common::jobs::{ConversionJob, PollDirective, POLL_INTERVAL_MS};
use common::model::job::JobStatus;

#[test]
fn submission_starts_pending() {
    let job = ConversionJob::submitted("task-1");
    assert_eq!(job.id(), "task-1");
    assert_eq!(job.status(), JobStatus::Pending);
    assert!(job.status().is_in_flight());
}

#[test]
fn in_flight_statuses_keep_polling() {
    let mut job = ConversionJob::submitted("task-1");

    // The gateway may report pending and processing in any order and for
    // any number of polls; none of them stop the loop.
    for reported in [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Processing,
        JobStatus::Pending,
        JobStatus::Processing,
    ] {
        assert_eq!(job.observe(reported), PollDirective::Continue);
        assert_eq!(job.status(), reported);
    }
}

#[test]
fn no_attempt_cap() {
    let mut job = ConversionJob::submitted("task-1");
    for _ in 0..1_000 {
        assert_eq!(job.observe(JobStatus::Processing), PollDirective::Continue);
    }
    assert_eq!(job.status(), JobStatus::Processing);
}

#[test]
fn completion_stops_polling() {
    let mut job = ConversionJob::submitted("task-1");
    assert_eq!(job.observe(JobStatus::Processing), PollDirective::Continue);
    assert_eq!(job.observe(JobStatus::Completed), PollDirective::Stop);
    assert_eq!(job.status(), JobStatus::Completed);
}

#[test]
fn failure_stops_polling() {
    let mut job = ConversionJob::submitted("task-1");
    assert_eq!(job.observe(JobStatus::Failed), PollDirective::Stop);
    assert_eq!(job.status(), JobStatus::Failed);
}

#[test]
fn terminal_status_is_frozen() {
    let mut job = ConversionJob::submitted("task-1");
    assert_eq!(job.observe(JobStatus::Completed), PollDirective::Stop);

    // A straggling response from a poll that was already in flight when the
    // job finished must not reopen it.
    assert_eq!(job.observe(JobStatus::Pending), PollDirective::Stop);
    assert_eq!(job.observe(JobStatus::Processing), PollDirective::Stop);
    assert_eq!(job.status(), JobStatus::Completed);

    let mut failed = ConversionJob::submitted("task-2");
    assert_eq!(failed.observe(JobStatus::Failed), PollDirective::Stop);
    assert_eq!(failed.observe(JobStatus::Completed), PollDirective::Stop);
    assert_eq!(failed.status(), JobStatus::Failed);
}

#[test]
fn status_wire_format_is_lowercase() {
    let parsed: common::model::job::JobStatusResponse =
        serde_json::from_str(r#"{"status":"processing"}"#).unwrap();
    assert_eq!(parsed.status, JobStatus::Processing);

    let accepted: common::model::job::SubmitAccepted =
        serde_json::from_str(r#"{"task_id":"abc-123"}"#).unwrap();
    assert_eq!(accepted.task_id, "abc-123");

    assert_eq!(
        serde_json::to_string(&JobStatus::Completed).unwrap(),
        r#""completed""#
    );
}

#[test]
fn poll_cadence_is_three_seconds() {
    assert_eq!(POLL_INTERVAL_MS, 3_000);
}
