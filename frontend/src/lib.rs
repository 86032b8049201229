use std::rc::Rc;

use yew::prelude::*;

pub mod config;
pub mod hooks;

pub mod behavior {
    pub mod counter;
    pub mod latch;
    pub mod nav;
}

pub mod utils {
    pub mod frame;
    pub mod scroll;
    pub mod subscription;
    pub mod viewport;
}

pub mod components {
    pub mod floating_widget;
    pub mod grid_background;
    pub mod logo_carousel;
    pub mod navbar;
    pub mod number_counter;
    pub mod text;
}

pub mod pages {
    pub mod landing;
}

use config::LandingConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<LandingConfig>> context={props.config.clone()}>
            <Landing />
        </ContextProvider<Rc<LandingConfig>>>
    }
}

/// Sets up console logging, loads the page content and mounts the app on
/// `<body>`.
pub fn run() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = match config::load() {
        Ok(config) => {
            log::info!(
                "Loaded landing content: {} stats, {} testimonials",
                config.authority.stats.len(),
                config.testimonials.items.len()
            );
            config
        }
        Err(e) => {
            log::error!("Failed to load landing content, rendering defaults: {}", e);
            LandingConfig::default()
        }
    };

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
