//! Split tool: extracts page ranges from a single PDF. A single range comes
//! back as one PDF, multiple comma-separated parts come back zipped.

use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::SplitParams;

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    FilesSelected(Vec<File>),
    RangesChanged(String),
    Submit,
    Finished(Result<Vec<u8>, String>),
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct SplitPdfPage {
    files: Vec<File>,
    params: SplitParams,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for SplitPdfPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Vec::new(),
            params: SplitParams::default(),
            phase: Phase::Idle,
            error: None,
            result: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilesSelected(files) => {
                self.files = files;
                true
            }
            Msg::RangesChanged(ranges) => {
                self.params.ranges = ranges;
                true
            }
            Msg::Submit => {
                let Some(file) = self.files.first().cloned() else {
                    return false;
                };
                if !self.params.is_valid() {
                    self.error = Some(
                        "Invalid page ranges. Use comma-separated pages or ranges like 1-3,5."
                            .to_string(),
                    );
                    return true;
                }
                self.phase = Phase::Processing;
                self.error = None;
                self.result = None;

                let gateway = ctx.props().gateway.clone();
                let params = self.params.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.split_pdf(&file, &params).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(
                    &bytes,
                    self.params.result_filename(),
                ));
                self.phase = Phase::Completed;
                true
            }
            Msg::Finished(Err(message)) => {
                self.error = Some(message);
                self.phase = Phase::Failed;
                true
            }
            Msg::Dismiss => {
                self.error = None;
                self.phase = Phase::Idle;
                true
            }
            Msg::Reset => {
                self.files.clear();
                self.params = SplitParams::default();
                self.error = None;
                self.result = None;
                self.phase = Phase::Idle;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="tool-page">
                { support::page_header(
                    "Split PDF",
                    "Extract specific pages or ranges from your PDF.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept=".pdf"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload PDF to Split"
                    description="Extract pages into separate files"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <div class="settings-card">
                                <h4>{"Define Page Ranges"}</h4>
                                <label class="field-label">{"Page Format"}</label>
                                <input
                                    type="text"
                                    class="text-field"
                                    value={self.params.ranges.clone()}
                                    placeholder="e.g., 1-3, 5, 8-10"
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        Msg::RangesChanged(input.value())
                                    })}
                                />
                                <p class="field-hint">
                                    {"Use comma for separate parts and hyphen for ranges (1-based index)."}
                                </p>
                                <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                    {"Split PDF Pages"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Splitting Pages...",
                            "Generating new PDF files for your requested ranges.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Split Complete!",
                            "Your pages have been extracted and are ready for download.",
                            result,
                            "Download Result",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card("Split Failed", message, link.callback(|_| Msg::Dismiss))
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
