//! PDF-to-images page: the one tool that runs asynchronously. Submission
//! returns a task id instead of bytes; the page then polls the job status
//! at a fixed cadence until it is terminal and finally offers the ZIP
//! download route.
//!
//! Responsibilities
//! - Re-export the page types (`Msg`, `Props`, `PdfToImagesPage`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Guarantee the poll timer dies with the page: `destroy` drops the
//!   poller, so a torn-down view cannot issue another status request.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PdfToImagesProps;
pub use state::PdfToImagesPage;

impl Component for PdfToImagesPage {
    type Message = Msg;
    type Properties = PdfToImagesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PdfToImagesPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.poller = None;
    }
}
