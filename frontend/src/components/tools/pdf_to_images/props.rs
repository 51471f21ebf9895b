use yew::prelude::*;

use crate::gateway::Gateway;

/// Properties for the PDF-to-images page.
///
/// The gateway client is injected by the shell rather than read from any
/// ambient global, so the page can be pointed at a mock endpoint.
#[derive(Properties, PartialEq)]
pub struct PdfToImagesProps {
    pub gateway: Gateway,
}
