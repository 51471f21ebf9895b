//! Cancellable status poll loop for one submitted job.
//!
//! The poller is owned by whatever owns the job: dropping it (terminal
//! status, resubmission, page teardown) cancels the underlying interval, so
//! a torn-down page can never schedule another status request. An in-flight
//! guard skips a tick while the previous request is still outstanding, so
//! for a given job there is never more than one status request on the wire.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::Callback;

use common::jobs::POLL_INTERVAL_MS;
use common::model::job::JobStatus;

use crate::gateway::Gateway;

pub struct JobPoller {
    _interval: Interval,
}

impl JobPoller {
    /// Starts polling the given task at the fixed cadence.
    ///
    /// `on_status` fires for every status the gateway reports; `on_error`
    /// fires for transport failures, which the owner is expected to treat
    /// as transient (the loop itself keeps running either way).
    pub fn start(
        gateway: Gateway,
        task_id: String,
        on_status: Callback<JobStatus>,
        on_error: Callback<String>,
    ) -> Self {
        let in_flight = Rc::new(Cell::new(false));

        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            if in_flight.get() {
                return;
            }
            in_flight.set(true);

            let gateway = gateway.clone();
            let task_id = task_id.clone();
            let on_status = on_status.clone();
            let on_error = on_error.clone();
            let in_flight = Rc::clone(&in_flight);
            spawn_local(async move {
                let outcome = gateway.job_status(&task_id).await;
                in_flight.set(false);
                match outcome {
                    Ok(status) => on_status.emit(status),
                    Err(message) => on_error.emit(message),
                }
            });
        });

        Self {
            _interval: interval,
        }
    }
}
