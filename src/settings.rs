use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use config::{Config, File};
use serde::Deserialize;

use idpeek::{AppConfig, app_dirs, theme};

use crate::cli::CliArgs;

pub(crate) const DEFAULT_ENDPOINT: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const CONFIG_FILE_NAME: &str = "idpeek.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    server: ServerSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServerSection {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    theme: Option<String>,
    initial_identifier: Option<String>,
}

/// Fully resolved configuration derived from config files and CLI arguments,
/// with CLI values taking precedence.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) title: Option<String>,
    pub(crate) theme_name: String,
    pub(crate) theme: theme::Theme,
    pub(crate) initial_identifier: Option<String>,
    pub(crate) log_dir: PathBuf,
}

/// Build the resolved configuration for this invocation.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let raw = load_raw(cli)?;

    let endpoint = cli
        .endpoint
        .clone()
        .or(raw.server.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    ensure!(!endpoint.trim().is_empty(), "endpoint must not be empty");

    let timeout_secs = cli
        .timeout_secs
        .or(raw.server.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    ensure!(timeout_secs > 0, "timeout-secs must be greater than zero");

    let theme_name = cli
        .theme
        .clone()
        .or(raw.ui.theme)
        .unwrap_or_else(|| "slate".to_string());
    let theme = theme::by_name(&theme_name)
        .with_context(|| format!("unknown theme: {theme_name}"))?;

    let log_dir = app_dirs::get_data_dir()?.join("log");

    Ok(ResolvedConfig {
        endpoint: endpoint.trim().trim_end_matches('/').to_string(),
        timeout: Duration::from_secs(timeout_secs),
        title: cli.title.clone().or(raw.ui.title),
        theme_name,
        theme,
        initial_identifier: cli.identifier.clone().or(raw.ui.initial_identifier),
        log_dir,
    })
}

/// Merge configuration sources: the default file from the platform config
/// directory (unless suppressed), then any `--config` files in order.
fn load_raw(cli: &CliArgs) -> Result<RawConfig> {
    let mut builder = Config::builder();

    if !cli.no_config {
        let default_path = app_dirs::get_config_dir()?.join(CONFIG_FILE_NAME);
        builder = builder.add_source(File::from(default_path).required(false));
    }
    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    let config = builder.build().context("failed to load configuration")?;
    config
        .try_deserialize()
        .context("failed to parse configuration")
}

impl ResolvedConfig {
    /// Print a human-readable summary of the resolved values.
    pub(crate) fn print_summary(&self) {
        println!("endpoint: {}", self.endpoint);
        println!("timeout: {}s", self.timeout.as_secs());
        println!("theme: {}", self.theme_name);
        if let Some(title) = &self.title {
            println!("title: {title}");
        }
        println!("log directory: {}", self.log_dir.display());
    }

    pub(crate) fn into_app_config(self) -> AppConfig {
        AppConfig {
            endpoint: self.endpoint,
            timeout: self.timeout,
            title: self.title,
            initial_identifier: self.initial_identifier,
            theme: self.theme,
        }
    }
}
