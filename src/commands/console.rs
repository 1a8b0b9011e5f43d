use crate::cli::{Cli, Commands};
use crate::commands::shell;
use crate::services::output::{emit, emit_rows};
use crate::services::render;
use crate::services::session::Session;

/// One-shot command dispatch. A stored controller error surfaces as a nonzero
/// exit with the same message; in shell mode errors stay inline instead.
pub fn handle_command(cli: &Cli, session: &mut Session) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Validate { file, endpoint } => {
            if let Some(endpoint) = endpoint {
                session.upload.endpoint = endpoint.clone();
            }
            session.submit(file.as_deref());
            if let Some(message) = session.upload.state.error() {
                anyhow::bail!("{}", message);
            }
            if let Some(outcome) = session.upload.state.result() {
                emit(cli.json, outcome, render::render_outcome)?;
            }
        }
        Commands::List { status } => {
            session.fetch_list(status.as_deref());
            if let Some(message) = session.listing.state.error() {
                anyhow::bail!("{}", message);
            }
            emit_rows(cli.json, session.listing.records(), render::stored_row)?;
        }
        Commands::Rules { city, builder } => {
            session.fetch_rules(city.as_deref(), builder.as_deref());
            if let Some(message) = session.audit.state.error() {
                anyhow::bail!("{}", message);
            }
            if let Some(audit) = session.audit.state.result() {
                emit(cli.json, audit, render::render_audit)?;
            }
        }
        Commands::Options => {
            session.reload_options();
            emit(cli.json, &session.options, render::render_options)?;
        }
        Commands::Shell => shell::run(session)?,
    }
    Ok(())
}
