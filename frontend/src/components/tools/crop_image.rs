use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::CropParams;

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    FilesSelected(Vec<File>),
    Top(u8),
    Bottom(u8),
    Left(u8),
    Right(u8),
    Submit,
    Finished(Result<Vec<u8>, String>),
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

/// Crop tool: each edge gets a percentage margin capped at 49 so opposing
/// edges can never cross.
pub struct CropImagePage {
    files: Vec<File>,
    params: CropParams,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for CropImagePage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Vec::new(),
            params: CropParams::default(),
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
            Msg::Top(value) => {
                self.params.top = value;
                true
            }
            Msg::Bottom(value) => {
                self.params.bottom = value;
                true
            }
            Msg::Left(value) => {
                self.params.left = value;
                true
            }
            Msg::Right(value) => {
                self.params.right = value;
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
                let params = self.params;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.crop_image(&file, &params).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "cropped_image.png"));
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
                self.params = CropParams::default();
                self.error = None;
                self.result = None;
                self.phase = Phase::Idle;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let params = self.params;

        html! {
            <div class="tool-page">
                { support::page_header(
                    "Crop Image",
                    "Precise percentage-based cropping for your images.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept="image/*"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload an Image"
                    description="Set how much to trim from each edge"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <div class="settings-card">
                                <h4>{"Crop Margins"}</h4>
                                { edge_slider("Top", params.top, link.callback(Msg::Top)) }
                                { edge_slider("Bottom", params.bottom, link.callback(Msg::Bottom)) }
                                { edge_slider("Left", params.left, link.callback(Msg::Left)) }
                                { edge_slider("Right", params.right, link.callback(Msg::Right)) }
                                <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                    {"Crop Image"}
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
                            "Cropping Image...",
                            "Trimming the requested margins from your image.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Crop Complete!",
                            "Your cropped image is ready for download.",
                            result,
                            "Download Cropped Image",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card("Crop Failed", message, link.callback(|_| Msg::Dismiss))
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

fn edge_slider(label: &str, value: u8, on_change: Callback<u8>) -> Html {
    html! {
        <div class="slider-field">
            <label class="field-label">{format!("{label}: {value}%")}</label>
            <input
                type="range"
                min="0"
                max="49"
                step="1"
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value().parse().unwrap_or(0));
                })}
            />
        </div>
    }
}
