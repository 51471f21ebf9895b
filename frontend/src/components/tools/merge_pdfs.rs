//! Merge tool: combines two or more PDFs in selection order.

use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    FilesSelected(Vec<File>),
    Submit,
    Finished(Result<Vec<u8>, String>),
    /// Clears a shown error but keeps the selection for another attempt.
    Dismiss,
    /// Returns the whole page to a clean idle state.
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct MergePdfsPage {
    files: Vec<File>,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for MergePdfsPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Vec::new(),
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
            Msg::Submit => {
                if self.files.len() < 2 {
                    self.error = Some("Please select at least two PDF files to merge.".to_string());
                    return true;
                }
                self.phase = Phase::Processing;
                self.error = None;
                self.result = None;

                let gateway = ctx.props().gateway.clone();
                let files = self.files.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.merge_pdfs(&files).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "merged.pdf"));
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
                    "Merge PDFs",
                    "Combine multiple PDF documents into a single professional file.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept=".pdf"
                    multiple=true
                    is_loading={self.phase == Phase::Processing}
                    title="Upload PDF Documents"
                    description="Drag and drop multiple PDFs here in the order you want them merged"
                />

                {
                    if self.phase == Phase::Idle && self.files.len() >= 2 {
                        html! {
                            <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                {format!("Merge {} Documents", self.files.len())}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Merging Files...",
                            "Combining your documents. This usually takes just a few seconds.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Merge Successful!",
                            "Your new PDF has been generated and is ready for download.",
                            result,
                            "Download Merged PDF",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card("Merge Failed", message, link.callback(|_| Msg::Dismiss))
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
