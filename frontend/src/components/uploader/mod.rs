//! File intake component shared by every tool page.
//!
//! Accumulates an ordered selection of local files (insertion order matters:
//! it is the order multi-file tools merge in, and duplicates are allowed).
//! Files arrive either through the hidden input or by drag-and-drop; the
//! full selection is emitted to the owning page on every change.

use uuid::Uuid;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};
use yew::prelude::*;

use crate::toast::show_toast;

#[derive(Properties, PartialEq)]
pub struct UploaderProps {
    pub on_files_selected: Callback<Vec<File>>,
    #[prop_or(AttrValue::Static(".pdf"))]
    pub accept: AttrValue,
    /// When false a new pick replaces the selection; when true it appends.
    #[prop_or(false)]
    pub multiple: bool,
    #[prop_or(AttrValue::Static("Upload Files"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Drag and drop your files here, or click to browse"))]
    pub description: AttrValue,
    /// Disables intake while the owning page has a request in flight.
    #[prop_or(false)]
    pub is_loading: bool,
}

pub enum Msg {
    Browse,
    Picked(Vec<File>),
    DragState(bool),
    Dropped(Vec<File>),
    Remove(usize),
    Clear,
}

pub struct FileUploader {
    selected: Vec<File>,
    dragging: bool,
    input_id: String,
    input_ref: NodeRef,
}

impl Component for FileUploader {
    type Message = Msg;
    type Properties = UploaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected: Vec::new(),
            dragging: false,
            input_id: format!("id-{}", Uuid::new_v4()),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Browse => {
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::Picked(files) | Msg::Dropped(files) => {
                self.dragging = false;
                if files.is_empty() {
                    return true;
                }
                if ctx.props().multiple {
                    self.selected.extend(files);
                } else {
                    self.selected = files;
                }
                ctx.props().on_files_selected.emit(self.selected.clone());
                true
            }
            Msg::DragState(dragging) => {
                self.dragging = dragging;
                true
            }
            Msg::Remove(index) => {
                if index < self.selected.len() {
                    self.selected.remove(index);
                    ctx.props().on_files_selected.emit(self.selected.clone());
                }
                true
            }
            Msg::Clear => {
                self.selected.clear();
                ctx.props().on_files_selected.emit(Vec::new());
                show_toast("Selection cleared.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let zone_class = classes!(
            "dropzone",
            self.dragging.then_some("dragging"),
            props.is_loading.then_some("disabled"),
        );

        html! {
            <div class="uploader">
                <div
                    class={zone_class}
                    onclick={link.callback(|_| Msg::Browse)}
                    ondragover={link.callback(|e: DragEvent| {
                        e.prevent_default();
                        Msg::DragState(true)
                    })}
                    ondragleave={link.callback(|_| Msg::DragState(false))}
                    ondrop={link.callback(|e: DragEvent| {
                        e.prevent_default();
                        Msg::Dropped(
                            e.data_transfer()
                                .and_then(|transfer| transfer.files())
                                .map(collect_files)
                                .unwrap_or_default(),
                        )
                    })}
                >
                    <input
                        id={self.input_id.clone()}
                        ref={self.input_ref.clone()}
                        type="file"
                        accept={props.accept.clone()}
                        multiple={props.multiple}
                        style="display: none;"
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Picked(input.files().map(collect_files).unwrap_or_default())
                        })}
                    />
                    <i class="material-icons dropzone-icon">{"upload_file"}</i>
                    <h3>{props.title.clone()}</h3>
                    <p>{props.description.clone()}</p>
                    <button class="browse-btn" disabled={props.is_loading}>
                        { if props.is_loading { "Working..." } else { "Choose Files" } }
                    </button>
                </div>

                { self.view_selection(ctx) }
            </div>
        }
    }
}

impl FileUploader {
    fn view_selection(&self, ctx: &Context<Self>) -> Html {
        if self.selected.is_empty() {
            return html! {};
        }
        let link = ctx.link();

        html! {
            <div class="file-list">
                <div class="file-list-header">
                    <span>{format!("Selected Files ({})", self.selected.len())}</span>
                    <button class="clear-btn" onclick={link.callback(|_| Msg::Clear)}>
                        {"Clear All"}
                    </button>
                </div>
                <ul>
                    {
                        for self.selected.iter().enumerate().map(|(index, file)| {
                            html! {
                                <li class="file-row">
                                    <i class="material-icons">{file_icon(&file.name())}</i>
                                    <div class="file-meta">
                                        <span class="file-name">{file.name()}</span>
                                        <span class="file-size">{format_size(file.size())}</span>
                                    </div>
                                    <button
                                        class="remove-btn"
                                        title="Remove"
                                        onclick={link.callback(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            Msg::Remove(index)
                                        })}
                                    >
                                        <i class="material-icons">{"close"}</i>
                                    </button>
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        }
    }
}

fn collect_files(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

fn file_icon(name: &str) -> &'static str {
    if name.to_lowercase().ends_with(".pdf") {
        "picture_as_pdf"
    } else {
        "image"
    }
}

fn format_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::{file_icon, format_size};

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert_eq!(file_icon("report.PDF"), "picture_as_pdf");
        assert_eq!(file_icon("scan.jpeg"), "image");
    }

    #[test]
    fn sizes_render_in_megabytes() {
        assert_eq!(format_size(1_048_576.0), "1.00 MB");
        assert_eq!(format_size(524_288.0), "0.50 MB");
    }
}
