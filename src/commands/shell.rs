use crate::services::render;
use crate::services::session::Session;
use std::io::{self, BufRead, Write};
use std::path::Path;

const HELP: &str = "\
commands:
  base <url>            set the backend base URL (reloads selector options)
  endpoint <path>       set the validation endpoint (default /validar)
  validate [file]       submit a JSON dataset file
  list [status]         list persisted records, optionally filtered
  rules [city] [builder]  audit applicable rules ('-' skips a filter)
  options               show known cities and builders
  raw                   toggle raw JSON dumps of results
  help                  show this help
  exit                  leave the console";

/// Interactive session with a mutable base URL and live selector options.
/// Workflow errors print inline and the loop continues; nothing here is fatal.
pub fn run(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut raw = false;
    session.reload_options();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("base") => {
                session.set_base_url(parts.next().unwrap_or(""));
                if session.base_url().is_empty() {
                    println!("base url cleared");
                } else {
                    println!("base url: {}", session.base_url());
                    println!(
                        "options: {} cities, {} builders",
                        session.options.cities.len(),
                        session.options.builders.len()
                    );
                }
            }
            Some("endpoint") => {
                if let Some(path) = parts.next() {
                    session.upload.endpoint = path.to_string();
                }
                println!("endpoint: {}", session.upload.endpoint);
            }
            Some("validate") => {
                let file = parts.next().map(Path::new);
                session.submit(file);
                if let Some(message) = session.upload.state.error() {
                    println!("error: {}", message);
                } else if let Some(outcome) = session.upload.state.result() {
                    if raw {
                        println!("{}", serde_json::to_string_pretty(outcome)?);
                    } else {
                        println!("{}", render::render_outcome(outcome));
                    }
                }
            }
            Some("list") => {
                session.fetch_list(parts.next());
                if let Some(message) = session.listing.state.error() {
                    println!("error: {}", message);
                } else {
                    let records = session.listing.records();
                    if records.is_empty() {
                        println!("nothing stored yet");
                    }
                    for record in records {
                        println!("{}", render::stored_row(record));
                    }
                }
            }
            Some("rules") => {
                let city = parts.next().filter(|c| *c != "-");
                let builder = parts.next().filter(|b| *b != "-");
                session.fetch_rules(city, builder);
                if let Some(message) = session.audit.state.error() {
                    println!("error: {}", message);
                } else if let Some(audit) = session.audit.state.result() {
                    if raw {
                        println!("{}", serde_json::to_string_pretty(audit)?);
                    } else {
                        println!("{}", render::render_audit(audit));
                    }
                }
            }
            Some("options") => println!("{}", render::render_options(&session.options)),
            Some("raw") => {
                raw = !raw;
                println!("raw mode {}", if raw { "on" } else { "off" });
            }
            Some("help") => println!("{}", HELP),
            Some("exit") | Some("quit") => break,
            Some(other) => println!("unknown command: {} (try 'help')", other),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("empre> ");
    io::stdout().flush()
}
