//! Insert-image tool: two separate single-file selections (the PDF and the
//! image) plus a 0-based insertion index.

use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::InsertImageParams;

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    PdfSelected(Vec<File>),
    ImageSelected(Vec<File>),
    IndexChanged(u32),
    Submit,
    Finished(Result<Vec<u8>, String>),
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct InsertImagePage {
    pdf_files: Vec<File>,
    image_files: Vec<File>,
    params: InsertImageParams,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for InsertImagePage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            pdf_files: Vec::new(),
            image_files: Vec::new(),
            params: InsertImageParams::default(),
            phase: Phase::Idle,
            error: None,
            result: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PdfSelected(files) => {
                self.pdf_files = files;
                true
            }
            Msg::ImageSelected(files) => {
                self.image_files = files;
                true
            }
            Msg::IndexChanged(index) => {
                self.params.split_index = index;
                true
            }
            Msg::Submit => {
                let (Some(pdf), Some(image)) = (
                    self.pdf_files.first().cloned(),
                    self.image_files.first().cloned(),
                ) else {
                    self.error = Some("Please select both a PDF file and an image file.".to_string());
                    return true;
                };
                self.phase = Phase::Processing;
                self.error = None;
                self.result = None;

                let gateway = ctx.props().gateway.clone();
                let params = self.params;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(
                        gateway.insert_image(&pdf, &image, &params).await,
                    ));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "modified_document.pdf"));
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
                self.pdf_files.clear();
                self.image_files.clear();
                self.params = InsertImageParams::default();
                self.error = None;
                self.result = None;
                self.phase = Phase::Idle;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let busy = self.phase == Phase::Processing;

        html! {
            <div class="tool-page">
                { support::page_header(
                    "Insert Image",
                    "Insert images as new pages into existing PDFs.",
                ) }

                <div class="uploader-pair">
                    <FileUploader
                        on_files_selected={link.callback(Msg::PdfSelected)}
                        accept=".pdf"
                        is_loading={busy}
                        title="Upload PDF"
                        description="The document receiving the new page"
                    />
                    <FileUploader
                        on_files_selected={link.callback(Msg::ImageSelected)}
                        accept=".png,.jpg,.jpeg"
                        is_loading={busy}
                        title="Upload Image"
                        description="Inserted as a full page at the chosen position"
                    />
                </div>

                {
                    if self.phase == Phase::Idle
                        && !self.pdf_files.is_empty()
                        && !self.image_files.is_empty()
                    {
                        html! {
                            <div class="settings-card">
                                <h4>{"Placement Settings"}</h4>
                                <label class="field-label">{"Insert after page index"}</label>
                                <input
                                    type="number"
                                    class="text-field"
                                    min="0"
                                    value={self.params.split_index.to_string()}
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        Msg::IndexChanged(input.value().parse().unwrap_or(0))
                                    })}
                                />
                                <p class="field-hint">
                                    {"0 means insert at the very beginning. Indices are 0-based."}
                                </p>
                                <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                    {"Insert Image into PDF"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if busy {
                        support::spinner_card(
                            "Inserting Image...",
                            "Adding your image as a new page in the document.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Image Inserted!",
                            "Your updated PDF is ready for download.",
                            result,
                            "Download Updated PDF",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card(
                            "Insert Failed",
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
