//! State container for the PDF-to-images page.
//!
//! Fields are `pub` because they are accessed by the `update` and `view`
//! modules. The poller lives next to the job it polls: replacing or
//! clearing the job drops the timer with it, which is what keeps "at most
//! one live timer per active job" true on every path.

use common::jobs::ConversionJob;
use common::model::job::JobStatus;
use common::requests::PdfToImagesParams;
use web_sys::File;

use crate::poller::JobPoller;

pub struct PdfToImagesPage {
    /// Current selection; only the first file is submitted.
    pub files: Vec<File>,

    /// Output quality options sent with the submission.
    pub params: PdfToImagesParams,

    /// True between sending the submission and receiving the task id.
    pub submitting: bool,

    /// The tracked job, present from acceptance until download or dismissal.
    pub job: Option<ConversionJob>,

    /// Normalized message from a failed submission (polling failures are
    /// never surfaced here).
    pub error: Option<String>,

    /// Live poll timer; `None` whenever the job is absent or terminal.
    pub poller: Option<JobPoller>,
}

impl PdfToImagesPage {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            params: PdfToImagesParams::default(),
            submitting: false,
            job: None,
            error: None,
            poller: None,
        }
    }

    /// True from the moment a submission leaves until the job is terminal.
    pub fn is_working(&self) -> bool {
        self.submitting
            || self
                .job
                .as_ref()
                .is_some_and(|job| job.status().is_in_flight())
    }

    /// Task id of a successfully completed job, if any.
    pub fn completed_task_id(&self) -> Option<&str> {
        self.job
            .as_ref()
            .filter(|job| job.status() == JobStatus::Completed)
            .map(|job| job.id())
    }

    pub fn has_failed_job(&self) -> bool {
        self.job
            .as_ref()
            .is_some_and(|job| job.status() == JobStatus::Failed)
    }

    /// Label for the in-flight badge; a submission that hasn't been
    /// acknowledged yet reads as pending.
    pub fn working_label(&self) -> &'static str {
        match &self.job {
            Some(job) => job.status().label(),
            None => JobStatus::Pending.label(),
        }
    }

    /// Discards the tracked job and cancels its poll timer.
    pub fn clear_job(&mut self) {
        self.poller = None;
        self.job = None;
    }
}
