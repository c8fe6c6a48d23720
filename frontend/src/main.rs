use crate::app::App;

mod app;
mod pages;

fn main() {
    if copro_frontend::logger::init().is_err() {
        gloo_console::warn!("logger already installed");
    }
    yew::Renderer::<App>::new().render();
}
