use crate::app::{App, AppProps};
use log::{info, warn};

mod app;
mod components;
mod config;
mod http;
mod logger;
mod results_grid;
mod tops_sheet;

fn main() {
    let (config, config_error) = config::load();
    logger::init(config.level_filter());
    if let Some(err) = config_error {
        warn!("ignoring invalid page configuration: {}", err);
    }
    info!("starting photo shopping search");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
