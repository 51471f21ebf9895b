use serde::{Deserialize, Serialize};

/// Status of a remote conversion job, as reported by the gateway.
///
/// The gateway serializes these as lowercase strings (`"pending"`,
/// `"processing"`, `"completed"`, `"failed"`). `Pending` and `Processing`
/// both mean "keep asking"; the client does not distinguish them beyond
/// the label it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// The job is queued but hasn't started processing yet.
    Pending,
    /// A worker is actively processing the job.
    Processing,
    /// The job finished and its result is ready for download.
    Completed,
    /// The job failed. The result will never become available.
    Failed,
}

impl JobStatus {
    /// A terminal status ends the job; no further status requests are useful.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// An in-flight status means the job is still being worked on.
    pub fn is_in_flight(self) -> bool {
        !self.is_terminal()
    }

    /// Human-readable label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

/// Response body returned by the asynchronous submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAccepted {
    /// Opaque identifier assigned by the gateway; used for status polls
    /// and for constructing the download route.
    pub task_id: String,
}

/// Response body returned by the job status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub status: JobStatus,
}
