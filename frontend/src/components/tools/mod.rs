pub mod add_page_numbers;
pub mod change_format;
pub mod crop_image;
pub mod edit_image;
pub mod images_to_pdf;
pub mod insert_image;
pub mod merge_pdfs;
pub mod pdf_to_docx;
pub mod pdf_to_images;
pub mod split_pdf;
pub mod support;
