mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::AccessCheckerApp,
};

const APP_TITLE: &str = "On Call Access Checker";

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the access verification service.
    #[arg(long)]
    server_url: Option<String>,
}

fn with_cli_overrides(mut settings: Settings, server_url: Option<String>) -> Settings {
    if let Some(server_url) = server_url {
        settings.server_url = server_url;
    }
    settings
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = with_cli_overrides(load_settings(), args.server_url);
    let (runtime, client) = backend_bridge::runtime::build(&settings.server_url)
        .context("access checker backend startup failure")?;
    tracing::info!(endpoint = %client.endpoint(), "access checker backend ready");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(runtime, client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AccessCheckerApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("failed to run desktop window: {err}"))
}
