use crate::app::App;

mod app;
mod components;
mod gateway;
mod poller;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
