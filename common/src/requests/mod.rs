//! Per-tool option value objects and their query-string encoding.
//!
//! Each parameterized tool carries its options as a small value struct that
//! the HTTP client encodes into the submission URL. Validation here is
//! deliberately shallow (the widgets already constrain the numeric ranges);
//! only the free-text page-range expression gets a real grammar check.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// DPI choices offered for the PDF-to-images conversion.
pub const DPI_CHOICES: [u16; 3] = [72, 150, 300];

/// Options for the asynchronous PDF-to-images conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfToImagesParams {
    pub dpi: u16,
}

impl Default for PdfToImagesParams {
    fn default() -> Self {
        Self { dpi: 300 }
    }
}

impl PdfToImagesParams {
    pub fn query(&self) -> String {
        format!("dpi={}", self.dpi)
    }
}

/// Options for splitting a PDF into page ranges.
///
/// The expression is comma-separated parts, each either a single 1-based
/// page number or a `start-end` range, e.g. `1-3,5,8-10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitParams {
    pub ranges: String,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            ranges: "1-1".to_string(),
        }
    }
}

impl SplitParams {
    /// The expression with all whitespace stripped, which is also the form
    /// sent to the gateway (keeps the query string free of characters that
    /// would need escaping).
    pub fn normalized(&self) -> String {
        self.ranges.chars().filter(|c| !c.is_whitespace()).collect()
    }

    pub fn is_valid(&self) -> bool {
        let re = Regex::new(r"^\d+(-\d+)?(,\d+(-\d+)?)*$").unwrap();
        re.is_match(&self.normalized())
    }

    pub fn query(&self) -> String {
        format!("ranges={}", self.normalized())
    }

    /// Name for the downloaded result: a single range comes back as one
    /// PDF, multiple parts come back zipped.
    pub fn result_filename(&self) -> &'static str {
        if self.normalized().contains(',') {
            "split_results.zip"
        } else {
            "extracted_pages.pdf"
        }
    }
}

/// Options for inserting an image as a new page into a PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertImageParams {
    /// 0-based page index the image page is inserted after; 0 places it at
    /// the very beginning of the document.
    pub split_index: u32,
}

impl InsertImageParams {
    pub fn query(&self) -> String {
        format!("split_index={}", self.split_index)
    }
}

/// Adjustment options for the image editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditImageParams {
    /// 0.0 to 2.0; 1.0 leaves the image unchanged.
    pub brightness: f32,
    /// 0.0 to 2.0; 1.0 leaves the image unchanged.
    pub contrast: f32,
    /// 0.0 to 2.0; 1.0 leaves the image unchanged.
    pub sharpness: f32,
    pub grayscale: bool,
    /// Clockwise rotation in degrees, quarter turns only.
    pub rotate: u16,
}

impl Default for EditImageParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            sharpness: 1.0,
            grayscale: false,
            rotate: 0,
        }
    }
}

impl EditImageParams {
    pub fn query(&self) -> String {
        format!(
            "brightness={}&contrast={}&sharpness={}&grayscale={}&rotate={}",
            self.brightness, self.contrast, self.sharpness, self.grayscale, self.rotate
        )
    }
}

/// Percentage-based crop margins, each 0 to 49 so opposing edges can never
/// cross.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParams {
    pub top: u8,
    pub bottom: u8,
    pub left: u8,
    pub right: u8,
}

impl CropParams {
    pub fn query(&self) -> String {
        format!(
            "top={}&bottom={}&left={}&right={}",
            self.top, self.bottom, self.left, self.right
        )
    }
}

/// Output formats offered by the image format converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFormat {
    Png,
    Jpg,
    Webp,
    Pdf,
    Ico,
}

/// All formats, in the order they are offered in the UI.
pub const TARGET_FORMATS: [TargetFormat; 5] = [
    TargetFormat::Png,
    TargetFormat::Jpg,
    TargetFormat::Webp,
    TargetFormat::Pdf,
    TargetFormat::Ico,
];

impl TargetFormat {
    /// Wire value expected by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpg => "JPG",
            TargetFormat::Webp => "WEBP",
            TargetFormat::Pdf => "PDF",
            TargetFormat::Ico => "ICO",
        }
    }

    /// File extension for the downloaded result.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Png => "png",
            TargetFormat::Jpg => "jpg",
            TargetFormat::Webp => "webp",
            TargetFormat::Pdf => "pdf",
            TargetFormat::Ico => "ico",
        }
    }

    pub fn query(self) -> String {
        format!("target_format={}", self.as_str())
    }
}
