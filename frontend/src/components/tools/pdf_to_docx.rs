//! PDF to Word conversion. The download keeps the source file's name with
//! the extension swapped.

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

pub struct PdfToDocxPage {
    files: Vec<File>,
    phase: Phase,
    error: Option<String>,
    result: Option<ResultDownload>,
}

fn docx_name(source: &str) -> String {
    source.replace(".pdf", ".docx")
}

impl Component for PdfToDocxPage {
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
                    link.send_message(Msg::Finished(gateway.pdf_to_docx(&file).await));
                });
                true
            }
            Msg::Finished(Ok(bytes)) => {
                let filename = self
                    .files
                    .first()
                    .map(|file| docx_name(&file.name()))
                    .unwrap_or_else(|| "converted.docx".to_string());
                self.result = Some(ResultDownload::from_bytes(&bytes, filename));
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
                    "PDF to Word",
                    "Convert your PDF files to editable Word documents.",
                ) }

                <FileUploader
                    on_files_selected={link.callback(Msg::FilesSelected)}
                    accept=".pdf"
                    is_loading={self.phase == Phase::Processing}
                    title="Upload PDF to Convert"
                    description="Text, tables and layout are carried over where possible"
                />

                {
                    if self.phase == Phase::Idle && !self.files.is_empty() {
                        html! {
                            <button class="submit-btn" onclick={link.callback(|_| Msg::Submit)}>
                                {"Convert to Word"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.phase == Phase::Processing {
                        support::spinner_card(
                            "Converting Document...",
                            "Rebuilding your PDF as an editable Word document.",
                        )
                    } else {
                        html! {}
                    }
                }

                {
                    if let (Phase::Completed, Some(result)) = (self.phase, self.result.as_ref()) {
                        support::result_card(
                            "Conversion Complete!",
                            "Your Word document is ready for download.",
                            result,
                            "Download Word Document",
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

#[cfg(test)]
mod tests {
    use super::docx_name;

    #[test]
    fn download_name_swaps_extension() {
        assert_eq!(docx_name("report.pdf"), "report.docx");
        assert_eq!(docx_name("no-extension"), "no-extension");
    }
}
