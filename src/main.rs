mod app;
mod color_scale;
mod config;
mod constants;
mod curve;
mod data;
mod error;
mod geometry;
mod scale;
mod state;
mod ui;
mod widgets;

use clap::Parser;
use std::path::PathBuf;

use crate::app::ClimateAtlas;
use crate::config::{Args, AtlasConfig};
use crate::error::{AtlasError, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = AtlasConfig::resolve(&args)?;

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let data_path = pick_missing(
        config.data_path.clone(),
        "Select temperature projections",
        "CSV",
        &["csv"],
    )?;
    let boundaries_path = pick_missing(
        config.boundaries_path.clone(),
        "Select state boundaries",
        "GeoJSON",
        &["json", "geojson"],
    )?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Climate Atlas")
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Climate Atlas",
        options,
        Box::new(move |_cc| Ok(Box::new(ClimateAtlas::new(config, data_path, boundaries_path)))),
    )
    .map_err(|e| AtlasError::Ui(e.to_string()))
}

/// Fall back to a file dialog when a path was not configured
fn pick_missing(
    configured: Option<PathBuf>,
    title: &str,
    filter: &str,
    extensions: &[&str],
) -> Result<PathBuf> {
    if let Some(path) = configured {
        return Ok(path);
    }
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter(filter, extensions)
        .pick_file()
        .ok_or_else(|| AtlasError::Config(format!("no {} file selected", filter)))
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            log::info!("puffin server listening on {} (connect with puffin_viewer)", addr);
            puffin::set_scopes_on(true);
            Some(server)
        }
        Err(e) => {
            log::warn!("could not start puffin server: {}", e);
            None
        }
    }
}
