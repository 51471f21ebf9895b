//! State and view pieces shared by every tool page.

use gloo_file::Blob;
use web_sys::Url;
use yew::prelude::*;

/// Lifecycle of one synchronous conversion request. The asynchronous page
/// derives its equivalent from the tracked job instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Processing,
    Completed,
    Failed,
}

/// A downloadable result held as a browser object URL.
///
/// The URL is revoked when the value is dropped, which happens exactly when
/// the owning page discards the result (new task, dismissal, teardown).
pub struct ResultDownload {
    url: String,
    filename: String,
}

impl ResultDownload {
    pub fn from_bytes(bytes: &[u8], filename: impl Into<String>) -> Self {
        let blob: web_sys::Blob = Blob::new(bytes).into();
        let url = Url::create_object_url_with_blob(&blob).unwrap_or_default();
        Self {
            url,
            filename: filename.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Drop for ResultDownload {
    fn drop(&mut self) {
        Url::revoke_object_url(&self.url).ok();
    }
}

pub fn page_header(title: &str, tagline: &str) -> Html {
    html! {
        <div class="page-header">
            <h1>{title}</h1>
            <p>{tagline}</p>
        </div>
    }
}

pub fn spinner_card(title: &str, detail: &str) -> Html {
    html! {
        <div class="status-card">
            <div class="spinner" />
            <h3>{title}</h3>
            <p>{detail}</p>
        </div>
    }
}

/// Success card with the download link and a way to start over.
pub fn result_card(
    title: &str,
    detail: &str,
    download: &ResultDownload,
    label: &str,
    on_reset: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="status-card success">
            <i class="material-icons status-icon">{"check_circle"}</i>
            <h3>{title}</h3>
            <p>{detail}</p>
            <a
                class="download-btn"
                href={download.url().to_string()}
                download={download.filename().to_string()}
            >
                <i class="material-icons">{"download"}</i>
                {label}
            </a>
            <button class="reset-link" onclick={on_reset}>{"Start New Task"}</button>
        </div>
    }
}

/// Error card shown whenever the page holds a message; dismissing returns
/// the page to a clean idle state for another attempt.
pub fn error_card(heading: &str, message: &str, on_dismiss: Callback<MouseEvent>) -> Html {
    html! {
        <div class="error-card">
            <i class="material-icons">{"error_outline"}</i>
            <div>
                <h4>{heading}</h4>
                <p>{message}</p>
                <button class="retry-link" onclick={on_dismiss}>{"Try Again"}</button>
            </div>
        </div>
    }
}
