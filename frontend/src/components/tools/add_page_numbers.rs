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
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct AddPageNumbersPage {
    files: Vec<File>,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for AddPageNumbersPage {
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
                let Some(file) = self.files.first().cloned() else {
                    return false;
                };
                self.phase = Phase::Processing;
                self.error = None;
                self.result = None;

                let gateway = ctx.props().gateway.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.add_page_numbers(&file).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "numbered_document.pdf"));
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
                    "Add Page Numbers",
                    "Add professional page numbering to your document.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept=".pdf"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload PDF Document"
                    description="Page numbers are stamped at the bottom of every page"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                {"Add Page Numbers"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Numbering Pages...",
                            "Stamping a page number onto every page of your document.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Numbering Complete!",
                            "Your numbered PDF is ready for download.",
                            result,
                            "Download Numbered PDF",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card(
                            "Numbering Failed",
                            message,
                            link.callback(|_| Msg::Dismiss),
                        )
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
