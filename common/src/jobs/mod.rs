//! Client-side lifecycle of one asynchronous conversion job.
//!
//! A [`ConversionJob`] exists only between a successful submission and the
//! moment the user downloads the result or starts over; nothing here is
//! persisted. The job never changes its own status: every transition comes
//! from a remotely-reported status fed through [`ConversionJob::observe`],
//! which also tells the caller whether to keep its poll timer alive.

use crate::model::job::JobStatus;

/// Fixed cadence of the status poll loop, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// What the owner of the poll timer should do after an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDirective {
    /// The job is still in flight; keep the timer running.
    Continue,
    /// The job reached a terminal status; cancel the timer.
    Stop,
}

/// One remote conversion job tracked by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    id: String,
    status: JobStatus,
}

impl ConversionJob {
    /// Creates the job right after the gateway accepted a submission.
    /// Every job starts out `Pending` until a poll says otherwise.
    pub fn submitted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: JobStatus::Pending,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// Applies a remotely-reported status.
    ///
    /// The local status is overwritten with whatever the gateway said, with
    /// one exception: once a terminal status has been observed the job is
    /// frozen, so a straggling response from an earlier poll cannot reopen
    /// it. There is no attempt cap or backoff; the directive stays
    /// [`PollDirective::Continue`] for as long as the gateway keeps
    /// reporting an in-flight status.
    pub fn observe(&mut self, reported: JobStatus) -> PollDirective {
        if self.status.is_terminal() {
            return PollDirective::Stop;
        }
        self.status = reported;
        if self.status.is_terminal() {
            PollDirective::Stop
        } else {
            PollDirective::Continue
        }
    }
}
