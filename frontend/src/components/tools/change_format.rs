use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{TargetFormat, TARGET_FORMATS};

use crate::components::uploader::FileUploader;
use crate::gateway::Gateway;

use super::support::{self, Phase, ResultDownload};

pub enum Msg {
    FilesSelected(Vec<File>),
    FormatPicked(TargetFormat),
    Submit,
    Finished(Result<Vec<u8>, String>),
    Dismiss,
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub gateway: Gateway,
}

pub struct ChangeFormatPage {
    files: Vec<File>,
    format: TargetFormat,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

impl Component for ChangeFormatPage {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            files: Vec::new(),
            format: TargetFormat::Png,
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
            Msg::FormatPicked(format) => {
                self.format = format;
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
                let format = self.format;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Finished(gateway.change_format(&file, format).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                self.result = Some(ResultDownload::from_bytes(
                    &bytes,
                    format!("converted.{}", self.format.extension()),
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
                self.format = TargetFormat::Png;
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
                    "Change Format",
                    "Quickly convert between different image formats.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept="image/*"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload an Image"
                    description="Pick the output format below"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <div class="settings-card">
                                <h4>{"Target Format"}</h4>
                                <div class="chip-row">
                                    {
                                        for TARGET_FORMATS.iter().map(|&format| {
                                            let active = format == self.format;
                                            html! {
                                                <button
                                                    class={classes!("chip", active.then_some("active"))}
                                                    onclick={link.callback(move |_| Msg::FormatPicked(format))}
                                                >
                                                    {format.as_str()}
                                                </button>
                                            }
                                        })
                                    }
                                </div>
                                <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                    {format!("Convert to {}", self.format.as_str())}
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
                            "Converting Image...",
                            "Re-encoding your image in the requested format.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Conversion Complete!",
                            "Your converted image is ready for download.",
                            result,
                            "Download Converted Image",
                            link.callback(|_| Msg::Reset),
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = &self.error {
                        support::error_card(
                            "Conversion Failed",
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
