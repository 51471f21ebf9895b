use common::requests::{
    CropParams, EditImageParams, InsertImageParams, PdfToImagesParams, SplitParams, TargetFormat,
    DPI_CHOICES, TARGET_FORMATS,
};

#[test]
fn dpi_defaults_to_print_quality() {
    let params = PdfToImagesParams::default();
    assert_eq!(params.dpi, 300);
    assert_eq!(params.query(), "dpi=300");
    assert!(DPI_CHOICES.contains(&params.dpi));
}

#[test]
fn split_default_is_first_page() {
    let params = SplitParams::default();
    assert_eq!(params.ranges, "1-1");
    assert!(params.is_valid());
    assert_eq!(params.query(), "ranges=1-1");
}

#[test]
fn split_accepts_mixed_pages_and_ranges() {
    for expr in ["1", "1-3", "1-3,5,8-10", "2,4,6"] {
        let params = SplitParams { ranges: expr.to_string() };
        assert!(params.is_valid(), "{expr} should be valid");
    }
}

#[test]
fn split_strips_whitespace_before_sending() {
    let params = SplitParams { ranges: "1-3, 5, 8-10".to_string() };
    assert!(params.is_valid());
    assert_eq!(params.query(), "ranges=1-3,5,8-10");
}

#[test]
fn split_rejects_malformed_expressions() {
    for expr in ["", ",", "1-", "-3", "1--3", "1-3,", "a-b", "1;3"] {
        let params = SplitParams { ranges: expr.to_string() };
        assert!(!params.is_valid(), "{expr} should be rejected");
    }
}

#[test]
fn split_result_filename_depends_on_part_count() {
    let single = SplitParams { ranges: "2-7".to_string() };
    assert_eq!(single.result_filename(), "extracted_pages.pdf");

    let one_page = SplitParams { ranges: "4".to_string() };
    assert_eq!(one_page.result_filename(), "extracted_pages.pdf");

    let several = SplitParams { ranges: "1-3,5".to_string() };
    assert_eq!(several.result_filename(), "split_results.zip");
}

#[test]
fn insert_image_defaults_to_document_start() {
    let params = InsertImageParams::default();
    assert_eq!(params.split_index, 0);
    assert_eq!(params.query(), "split_index=0");
}

#[test]
fn edit_defaults_are_identity() {
    let params = EditImageParams::default();
    assert_eq!(
        params.query(),
        "brightness=1&contrast=1&sharpness=1&grayscale=false&rotate=0"
    );
}

#[test]
fn edit_query_carries_all_adjustments() {
    let params = EditImageParams {
        brightness: 1.5,
        contrast: 0.8,
        sharpness: 2.0,
        grayscale: true,
        rotate: 270,
    };
    assert_eq!(
        params.query(),
        "brightness=1.5&contrast=0.8&sharpness=2&grayscale=true&rotate=270"
    );
}

#[test]
fn crop_query_orders_edges_like_the_widgets() {
    let params = CropParams { top: 10, bottom: 5, left: 0, right: 49 };
    assert_eq!(params.query(), "top=10&bottom=5&left=0&right=49");
}

#[test]
fn target_format_wire_values() {
    assert_eq!(TargetFormat::Png.query(), "target_format=PNG");
    assert_eq!(TargetFormat::Webp.extension(), "webp");
    assert_eq!(TARGET_FORMATS.len(), 5);
    for format in TARGET_FORMATS {
        assert_eq!(format.extension(), format.as_str().to_lowercase());
    }
}
