//! Application shell: static tool registry, landing grid, and page switching.
//!
//! There is no router; the shell keeps the selected tool in its own state
//! and swaps the page component, which also tears the old page down (and
//! with it any poll timer it owned). The gateway client is constructed once
//! here and handed to every page as a prop.

use yew::{html, Component, Context, Html};

use crate::components::tools::add_page_numbers::AddPageNumbersPage;
use crate::components::tools::change_format::ChangeFormatPage;
use crate::components::tools::crop_image::CropImagePage;
use crate::components::tools::edit_image::EditImagePage;
use crate::components::tools::images_to_pdf::ImagesToPdfPage;
use crate::components::tools::insert_image::InsertImagePage;
use crate::components::tools::merge_pdfs::MergePdfsPage;
use crate::components::tools::pdf_to_docx::PdfToDocxPage;
use crate::components::tools::pdf_to_images::PdfToImagesPage;
use crate::components::tools::split_pdf::SplitPdfPage;
use crate::gateway::Gateway;

/// Build-time override for the gateway location; the dev default matches
/// the compose setup the gateway ships with.
const DEFAULT_GATEWAY_URL: &str = "http://localhost:8000";

pub fn gateway_base_url() -> String {
    option_env!("API_GATEWAY")
        .unwrap_or(DEFAULT_GATEWAY_URL)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    PdfToImages,
    MergePdfs,
    SplitPdf,
    AddPageNumbers,
    InsertImage,
    PdfToDocx,
    ChangeFormat,
    ImagesToPdf,
    EditImage,
    CropImage,
}

pub struct ToolEntry {
    pub tool: Tool,
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Every tool the product offers, in landing-grid order.
pub const TOOLS: [ToolEntry; 10] = [
    ToolEntry {
        tool: Tool::PdfToImages,
        title: "PDF to Images",
        tagline: "Convert PDF pages to high-quality PNG images asynchronously.",
    },
    ToolEntry {
        tool: Tool::MergePdfs,
        title: "Merge PDFs",
        tagline: "Combine multiple PDF files into a single document.",
    },
    ToolEntry {
        tool: Tool::SplitPdf,
        title: "Split PDF",
        tagline: "Extract specific pages or ranges from your PDF.",
    },
    ToolEntry {
        tool: Tool::AddPageNumbers,
        title: "Add Page Numbers",
        tagline: "Add professional page numbering to your document.",
    },
    ToolEntry {
        tool: Tool::InsertImage,
        title: "Insert Image",
        tagline: "Insert images as new pages into existing PDFs.",
    },
    ToolEntry {
        tool: Tool::PdfToDocx,
        title: "PDF to Word",
        tagline: "Convert your PDF files to editable Word documents.",
    },
    ToolEntry {
        tool: Tool::ChangeFormat,
        title: "Change Format",
        tagline: "Quickly convert between different image formats.",
    },
    ToolEntry {
        tool: Tool::ImagesToPdf,
        title: "Images to PDF",
        tagline: "Combine multiple images into a single PDF file.",
    },
    ToolEntry {
        tool: Tool::EditImage,
        title: "Edit Image",
        tagline: "Adjust brightness, contrast, and more.",
    },
    ToolEntry {
        tool: Tool::CropImage,
        title: "Crop Image",
        tagline: "Precise percentage-based cropping for your images.",
    },
];

pub enum Msg {
    Select(Tool),
    Home,
}

pub struct App {
    gateway: Gateway,
    active: Option<Tool>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            gateway: Gateway::new(gateway_base_url()),
            active: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(tool) => {
                self.active = Some(tool);
                true
            }
            Msg::Home => {
                self.active = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="shell">
                <header class="shell-header">
                    <button class="brand" onclick={link.callback(|_| Msg::Home)}>
                        {"Conversion Toolbox"}
                    </button>
                    {
                        if self.active.is_some() {
                            html! {
                                <button class="back-link" onclick={link.callback(|_| Msg::Home)}>
                                    {"All tools"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </header>
                <main class="shell-main">
                    {
                        match self.active {
                            None => self.view_landing(ctx),
                            Some(tool) => self.view_tool(tool),
                        }
                    }
                </main>
            </div>
        }
    }
}

impl App {
    fn view_landing(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="tool-grid">
                {
                    for TOOLS.iter().map(|entry| {
                        let tool = entry.tool;
                        html! {
                            <button
                                class="tool-card"
                                onclick={link.callback(move |_| Msg::Select(tool))}
                            >
                                <h3>{entry.title}</h3>
                                <p>{entry.tagline}</p>
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn view_tool(&self, tool: Tool) -> Html {
        let gateway = self.gateway.clone();
        match tool {
            Tool::PdfToImages => html! { <PdfToImagesPage {gateway} /> },
            Tool::MergePdfs => html! { <MergePdfsPage {gateway} /> },
            Tool::SplitPdf => html! { <SplitPdfPage {gateway} /> },
            Tool::AddPageNumbers => html! { <AddPageNumbersPage {gateway} /> },
            Tool::InsertImage => html! { <InsertImagePage {gateway} /> },
            Tool::PdfToDocx => html! { <PdfToDocxPage {gateway} /> },
            Tool::ChangeFormat => html! { <ChangeFormatPage {gateway} /> },
            Tool::ImagesToPdf => html! { <ImagesToPdfPage {gateway} /> },
            Tool::EditImage => html! { <EditImagePage {gateway} /> },
            Tool::CropImage => html! { <CropImagePage {gateway} /> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tool, TOOLS};

    #[test]
    fn registry_lists_every_tool_once() {
        let mut seen: Vec<Tool> = Vec::new();
        for entry in &TOOLS {
            assert!(!seen.contains(&entry.tool), "{} listed twice", entry.title);
            assert!(!entry.title.is_empty());
            assert!(!entry.tagline.is_empty());
            seen.push(entry.tool);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn async_tool_leads_the_grid() {
        assert_eq!(TOOLS[0].tool, Tool::PdfToImages);
    }
}
