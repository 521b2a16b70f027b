mod api;
mod app;
mod components;
mod config;
mod google;
mod models;
mod pages;
mod pending;
mod routes;
mod session;
mod validation;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod validation_test;

use app::App;
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        web_sys::console::error_1(&format!("panic at {location}: {message}").into());
    }));

    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("failed to initialize logger: {err}").into());
    }

    log::info!("starting fotogram web client");
    Renderer::<Root>::new().render();
}
