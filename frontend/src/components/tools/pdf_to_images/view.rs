//! View rendering for the PDF-to-images page: uploader, quality settings,
//! the in-flight badge fed by the polled status, and the terminal cards.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use common::requests::DPI_CHOICES;

use crate::components::tools::support;
use crate::components::uploader::FileUploader;

use super::messages::Msg;
use super::state::PdfToImagesPage;

pub fn view(page: &PdfToImagesPage, ctx: &Context<PdfToImagesPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="tool-page">
            { support::page_header(
                "PDF to Images",
                "Convert PDF pages into high-quality PNG images asynchronously.",
            ) }

            <FileUploader
                on_files_selected={link.callback(Msg::FilesSelected)}
                accept=".pdf"
                is_loading={page.is_working()}
                title="Upload your PDF"
                description="We'll convert each page into a separate image"
            />

            {
                if !page.is_working()
                    && page.job.is_none()
                    && page.error.is_none()
                    && !page.files.is_empty()
                {
                    view_settings(page, ctx)
                } else {
                    html! {}
                }
            }

            { if page.is_working() { view_working(page) } else { html! {} } }

            {
                if let Some(task_id) = page.completed_task_id() {
                    view_completed(ctx, task_id)
                } else {
                    html! {}
                }
            }

            {
                if page.has_failed_job() {
                    support::error_card(
                        "Conversion Failed",
                        "The conversion process failed. Check the file and try again.",
                        link.callback(|_| Msg::Dismiss),
                    )
                } else {
                    html! {}
                }
            }

            {
                if let Some(message) = &page.error {
                    support::error_card(
                        "Conversion Failed",
                        message,
                        link.callback(|_| Msg::Dismiss),
                    )
                } else {
                    html! {}
                }
            }

            { view_how_it_works() }
        </div>
    }
}

fn view_settings(page: &PdfToImagesPage, ctx: &Context<PdfToImagesPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="settings-card">
            <h4>{"Conversion Settings"}</h4>
            <label class="field-label">{"DPI"}</label>
            <select
                class="select-field"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::DpiPicked(select.value().parse().unwrap_or(300))
                })}
            >
                {
                    for DPI_CHOICES.iter().map(|&dpi| {
                        html! {
                            <option
                                value={dpi.to_string()}
                                selected={dpi == page.params.dpi}
                            >
                                { dpi_label(dpi) }
                            </option>
                        }
                    })
                }
            </select>
            <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                {"Start Async Conversion"}
            </button>
        </div>
    }
}

fn view_working(page: &PdfToImagesPage) -> Html {
    html! {
        <div class="status-card">
            <div class="spinner" />
            <h3>{"Processing Your File"}</h3>
            <p>
                {"Our workers are currently converting your PDF. \
                  This might take a few seconds depending on the file size."}
            </p>
            <span class="status-badge">{format!("Status: {}", page.working_label())}</span>
        </div>
    }
}

fn view_completed(ctx: &Context<PdfToImagesPage>, task_id: &str) -> Html {
    let link = ctx.link();
    let href = ctx.props().gateway.download_url(task_id);

    html! {
        <div class="status-card success">
            <i class="material-icons status-icon">{"check_circle"}</i>
            <h3>{"Conversion Ready!"}</h3>
            <p>{"Your images have been bundled into a ZIP file and are ready for download."}</p>
            <a
                class="download-btn"
                href={href}
                onclick={link.callback(|_| Msg::DownloadStarted)}
            >
                <i class="material-icons">{"download"}</i>
                {"Download ZIP"}
            </a>
        </div>
    }
}

fn view_how_it_works() -> Html {
    html! {
        <aside class="info-card">
            <h4>{"How it works"}</h4>
            <ol>
                <li>{"Your file is securely uploaded to our staging gateway."}</li>
                <li>{"A background worker picks the job off the queue."}</li>
                <li>{"Each page is rendered as a high-resolution image."}</li>
                <li>{"Once complete, you get a direct download link."}</li>
            </ol>
        </aside>
    }
}

fn dpi_label(dpi: u16) -> String {
    let hint = match dpi {
        72 => " (Fastest)",
        150 => " (Medium)",
        300 => " (High Quality)",
        _ => "",
    };
    format!("{dpi}{hint}")
}
