mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in idpeek::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let _log_guard = idpeek::logging::init(&resolved.log_dir)?;

    run_lookup(cli.output, resolved)
}

/// Run the interactive lookup session and print the outcome in the chosen format.
fn run_lookup(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let outcome = idpeek::run(settings.into_app_config())?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
