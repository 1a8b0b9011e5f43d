use clap::Parser;

mod cli;
mod commands;
mod domain;
mod gateway;
mod services;

use cli::Cli;
use services::session::Session;
use services::settings::load_settings;
use services::upload::DEFAULT_ENDPOINT;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings()?;

    let base_url = cli
        .base_url
        .clone()
        .or(settings.base_url)
        .unwrap_or_else(|| cli::DEFAULT_API.to_string());
    let endpoint = settings
        .endpoint
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout_ms = cli
        .timeout_ms
        .or(settings.timeout_ms)
        .unwrap_or(gateway::DEFAULT_TIMEOUT_MS);

    let mut session = Session::new(&base_url, &endpoint, timeout_ms);
    commands::handle_command(&cli, &mut session)
}
