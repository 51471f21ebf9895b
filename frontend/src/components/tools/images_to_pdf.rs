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

/// Images-to-PDF tool. Selection order matters: pages appear in the PDF in
/// the order the images were added.
pub struct ImagesToPdfPage {
    files: Vec<File>,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for ImagesToPdfPage {
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
                if self.files.is_empty() {
                    return false;
                }
                self.phase = Phase::Processing;
                self.error = None;
                self.result = None;

                let gateway = ctx.props().gateway.clone();
                let files = self.files.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.images_to_pdf(&files).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "images_combined.pdf"));
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
                    "Images to PDF",
                    "Combine multiple images into a single PDF file.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept="image/*"
                    multiple=true
                    is_loading={self.phase == Phase::Processing}
                    title="Upload Images"
                    description="Each image becomes one page, in the order you add them"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                {format!("Combine {} Images into PDF", self.files.len())}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Building PDF...",
                            "Laying out your images as document pages.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "PDF Created!",
                            "Your combined PDF is ready for download.",
                            result,
                            "Download PDF",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card(
                            "Combine Failed",
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
