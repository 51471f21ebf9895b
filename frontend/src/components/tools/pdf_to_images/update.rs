//! Update function for the PDF-to-images page.
//!
//! Key behaviors
//! - Submission is sent exactly once per user action; a failed submission
//!   is terminal for that attempt (no automatic retry, nothing ever polls).
//! - Status observations go through the job's own state machine, which
//!   decides when the poll timer is dropped.
//! - A transport failure during a poll is logged and swallowed; the loop
//!   keeps running on its fixed cadence.
//! - Clicking download optimistically resets the page shortly afterwards,
//!   whether or not the download itself succeeded; the server is expected
//!   to clean the artifact up after retrieval either way.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::jobs::{ConversionJob, PollDirective};

use crate::poller::JobPoller;
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::PdfToImagesPage;

/// Delay between starting a download and clearing the page.
const RESET_AFTER_DOWNLOAD_MS: u32 = 2_000;

pub fn update(page: &mut PdfToImagesPage, ctx: &Context<PdfToImagesPage>, msg: Msg) -> bool {
    match msg {
        Msg::FilesSelected(files) => {
            page.files = files;
            true
        }
        Msg::DpiPicked(dpi) => {
            page.params.dpi = dpi;
            true
        }
        Msg::Submit => {
            let Some(file) = page.files.first().cloned() else {
                return false;
            };
            if page.is_working() {
                return false;
            }
            // Replacing the job wholesale also cancels any previous timer.
            page.clear_job();
            page.error = None;
            page.submitting = true;

            let gateway = ctx.props().gateway.clone();
            let params = page.params;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Submitted(
                    gateway.submit_pdf_to_images(&file, &params).await,
                ));
            });
            true
        }
        Msg::Submitted(Ok(task_id)) => {
            page.submitting = false;
            page.job = Some(ConversionJob::submitted(task_id.clone()));
            page.poller = Some(JobPoller::start(
                ctx.props().gateway.clone(),
                task_id,
                ctx.link().callback(Msg::StatusReported),
                ctx.link().callback(Msg::PollFailed),
            ));
            true
        }
        Msg::Submitted(Err(message)) => {
            page.submitting = false;
            page.error = Some(message);
            true
        }
        Msg::StatusReported(status) => match &mut page.job {
            Some(job) => {
                if job.observe(status) == PollDirective::Stop {
                    page.poller = None;
                }
                true
            }
            None => false,
        },
        Msg::PollFailed(message) => {
            // Transient: a network hiccup must not abort a healthy job.
            gloo_console::error!("status check failed:", message);
            false
        }
        Msg::DownloadStarted => {
            show_toast("Download started. The job is removed from the server after retrieval.");
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(RESET_AFTER_DOWNLOAD_MS).await;
                link.send_message(Msg::ClearAfterDownload);
            });
            false
        }
        Msg::ClearAfterDownload => {
            // Only clear if the downloaded job is still the one on screen;
            // a resubmission in the meantime must not be stomped.
            if page.completed_task_id().is_some() {
                page.files.clear();
                page.clear_job();
                page.error = None;
                return true;
            }
            false
        }
        Msg::Dismiss => {
            page.error = None;
            page.clear_job();
            true
        }
    }
}
