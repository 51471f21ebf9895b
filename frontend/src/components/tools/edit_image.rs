//! Image editor: brightness/contrast/sharpness sliders, quarter-turn
//! rotation, and a grayscale toggle. All adjustments are applied remotely
//! in one request; 1.0 on a slider means "leave unchanged".

use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::EditImageParams;

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    FilesSelected(Vec<File>),
    Brightness(f32),
    Contrast(f32),
    Sharpness(f32),
    Rotate(u16),
    ToggleGrayscale,
    ResetSettings,
    Submit,
    Finished(Result<Vec<u8>, String>),
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct EditImagePage {
    files: Vec<File>,
    params: EditImageParams,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for EditImagePage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Vec::new(),
            params: EditImageParams::default(),
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
            Msg::Brightness(value) => {
                self.params.brightness = value;
                true
            }
            Msg::Contrast(value) => {
                self.params.contrast = value;
                true
            }
            Msg::Sharpness(value) => {
                self.params.sharpness = value;
                true
            }
            Msg::Rotate(value) => {
                self.params.rotate = value;
                true
            }
            Msg::ToggleGrayscale => {
                self.params.grayscale = !self.params.grayscale;
                true
            }
            Msg::ResetSettings => {
                self.params = EditImageParams::default();
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
                    link.send_message(Msg::Finished(gateway.edit_image(&file, &params).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(&bytes, "edited_image.png"));
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
                self.params = EditImageParams::default();
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
                    "Edit Image",
                    "Adjust brightness, contrast, and more.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept="image/*"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload an Image"
                    description="Tune the adjustments below, then apply them in one pass"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        self.view_settings(ctx)
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Editing Image...",
                            "Applying your adjustments to the image.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Edit Complete!",
                            "Your edited image is ready for download.",
                            result,
                            "Download Edited Image",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card("Edit Failed", message, link.callback(|_| Msg::Dismiss))
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

impl EditImagePage {
    fn view_settings(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let params = self.params;

        html! {
            <div class="settings-card">
                <div class="settings-head">
                    <h4>{"Adjustments"}</h4>
                    <button class="reset-link" onclick={link.callback(|_| Msg::ResetSettings)}>
                        {"Reset"}
                    </button>
                </div>

                { slider("Brightness", params.brightness, 0.0, 2.0, 0.1,
                    link.callback(Msg::Brightness)) }
                { slider("Contrast", params.contrast, 0.0, 2.0, 0.1,
                    link.callback(Msg::Contrast)) }
                { slider("Sharpness", params.sharpness, 0.0, 2.0, 0.1,
                    link.callback(Msg::Sharpness)) }

                <div class="slider-field">
                    <label class="field-label">
                        {format!("Rotation: {}\u{b0}", params.rotate)}
                    </label>
                    <input
                        type="range"
                        min="0"
                        max="360"
                        step="90"
                        value={params.rotate.to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Rotate(input.value().parse().unwrap_or(0))
                        })}
                    />
                </div>

                <div class="toggle-field">
                    <label class="field-label">{"Grayscale"}</label>
                    <button
                        class={classes!("toggle", params.grayscale.then_some("on"))}
                        onclick={link.callback(|_| Msg::ToggleGrayscale)}
                    />
                </div>

                <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                    {"Apply Edits"}
                </button>
            </div>
        }
    }
}

fn slider(label: &str, value: f32, min: f32, max: f32, step: f32, on_change: Callback<f32>) -> Html {
    let fallback = value;
    html! {
        <div class="slider-field">
            <label class="field-label">{format!("{label}: {value}")}</label>
            <input
                type="range"
                min={min.to_string()}
                max={max.to_string()}
                step={step.to_string()}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value().parse().unwrap_or(fallback));
                })}
            />
        </div>
    }
}
