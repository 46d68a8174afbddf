#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod lifecycle;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use orbitdeck_core::DEFAULT_BASE_URL;

/// Global API base URL, set from command line
static API_URL: OnceLock<String> = OnceLock::new();

/// Get the API base URL (set from command line or default)
pub fn get_api_url() -> String {
    API_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Orbitdeck - Spaceflight Record Browser
#[derive(Parser, Debug)]
#[command(name = "orbitdeck-desktop")]
#[command(about = "Orbitdeck - browse launches, payloads and ships from the public query API")]
struct Args {
    /// API base URL (use a local mirror for offline work)
    #[arg(long)]
    api_url: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orbitdeck=info".into()),
        )
        .init();

    let args = Args::parse();

    if let Some(url) = args.api_url {
        let _ = API_URL.set(url);
    }

    tracing::info!("Starting Orbitdeck against {}", get_api_url());

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Orbitdeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
