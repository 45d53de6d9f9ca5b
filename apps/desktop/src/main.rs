use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{
    load_settings, render, HttpAccessCheckClient, Settings, StateController, StatusLine, Tone,
    UiState, View,
};
use tracing_subscriber::EnvFilter;

/// Checks on-call production access for one account and prints the checklist.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    email: String,
    /// Base URL of the access verification service. Overrides file and environment settings.
    #[arg(long)]
    server_url: Option<String>,
}

fn with_cli_overrides(mut settings: Settings, server_url: Option<String>) -> Settings {
    if let Some(server_url) = server_url {
        settings.server_url = server_url;
    }
    settings
}

fn mark(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "[ok]",
        Tone::Failure => "[missing]",
        Tone::Caution => "[warn]",
    }
}

fn status_line(line: &StatusLine) -> String {
    format!("{} {}", mark(line.tone), line.text)
}

fn print_view(view: &View) {
    println!("Environment: {}", view.environment);
    if let Some(error) = &view.error {
        eprintln!("{error}");
    }
    let Some(checklist) = &view.checklist else {
        return;
    };

    println!();
    println!("Access Checklist");
    for indicator in checklist.indicators() {
        println!("  {:<10} {}", mark(indicator.tone()), indicator.label);
    }
    println!("{}", status_line(&checklist.groups));
    if let Some(valid_until) = &checklist.valid_until {
        println!("{valid_until}");
    }

    println!();
    println!("Tool Profile Checker");
    println!("{}", status_line(&checklist.profile));
    if let Some(arn) = &checklist.profile_arn {
        println!("  profile ARN: {arn}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = with_cli_overrides(load_settings(), args.server_url);
    let client = HttpAccessCheckClient::new(&settings.server_url)?;
    tracing::info!(endpoint = %client.endpoint(), "checking access");

    let mut controller = StateController::new();
    let state = controller.submit(&client, &args.email).await;
    print_view(&render(state));

    Ok(match state {
        UiState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
