use login_core::ScreenConfig;
use web_sys::window;
use yew::prelude::*;

mod components;
mod pages;

/// Id of the optional JSON block in `index.html` that overrides screen defaults.
const CONFIG_ELEMENT_ID: &str = "screen-config";

fn load_config() -> ScreenConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    match ScreenConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            ScreenConfig::default()
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ScreenConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! { <pages::login::Login config={props.config.clone()} /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    let config = load_config();
    log::debug!("starting in {} mode", config.initial_mode.as_str());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
