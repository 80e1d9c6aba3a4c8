use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use idpeek::LookupOutcome;
use serde_json::json;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "idpeek",
    version,
    about = "Terminal client for an identifier lookup service"
)]
/// Command-line arguments accepted by the `idpeek` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "IDPEEK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "URL",
        env = "IDPEEK_ENDPOINT",
        help = "Base URL of the lookup service (default: http://localhost:3000)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long,
        value_name = "SECS",
        help = "Request timeout in seconds (default: 10)"
    )]
    pub(crate) timeout_secs: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "ID",
        help = "Identifier to look up immediately on startup"
    )]
    pub(crate) identifier: Option<String>,
    #[arg(long, value_name = "TEXT", help = "Title shown next to the input prompt")]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "NAME",
        env = "IDPEEK_THEME",
        help = "Colour theme (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long, help = "List available themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(long, help = "Print the resolved configuration before starting")]
    pub(crate) print_config: bool,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the final result"
    )]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Print a plain-text representation of the lookup outcome.
pub(crate) fn print_plain(outcome: &LookupOutcome) {
    let Some(record) = &outcome.record else {
        println!("No record fetched (identifier: '{}')", outcome.identifier);
        return;
    };

    println!("{}", record.username.as_deref().unwrap_or("(no username)"));
    if let Some(id) = &record.id {
        println!("ID: {id}");
    }
    if let Some(date) = record.join_date() {
        println!("Joined: {date}");
    }
    println!("Bio: {}", record.bio_or_fallback());
    if let Some(email) = &record.email {
        println!("Email: {email}");
    }
    if let Some(pronouns) = &record.pronouns {
        println!("Pronouns: {pronouns}");
    }
}

/// Format the lookup outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &LookupOutcome) -> Result<String> {
    let payload = json!({
        "identifier": outcome.identifier,
        "record": outcome.record,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the lookup outcome.
pub(crate) fn print_json(outcome: &LookupOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
