//! # Akrag Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading, merging, validation, and
//! access for Akrag. It supports a layered approach that combines defaults,
//! user settings, project-specific overrides and command-line flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (see `Overrides`)
//! 2. Project-specific `.akrag.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/akrag/config.toml`
//! 4. Default values defined in the code
//!
//! After merging, quote source paths are expanded (`~` to home directory)
//! and the result is validated before any chat starts.
//!
//! ## Examples
//!
//! ```toml
//! [persona]
//! name = "Akrag"
//!
//! [quotes]
//! source = "~/quotes.csv"
//!
//! [search]
//! endpoint = "https://duckduckgo.com/"
//! open_browser = false
//!
//! [pacing]
//! scale = 0.5
//! ```
//!
use crate::core::error::{AkragError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use url::Url;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub persona: PersonaConfig,
    #[serde(default)]
    pub quotes: QuotesConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub donation: DonationConfig,
}

/// How the bot introduces itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PersonaConfig {
    pub name: String,
}

/// Where the motivational quotes come from.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct QuotesConfig {
    /// A filesystem path (can use ~) or an http(s) URL. When unset,
    /// `quotes.csv` in the current directory is tried.
    pub source: Option<String>,
    /// Request timeout for URL sources, in seconds.
    pub timeout_secs: u64,
}

/// The external search the first response hands the question to.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Whether to actually launch a browser, or only print the link.
    pub open_browser: bool,
}

/// Multiplier applied to every scripted delay. `0.0` makes the bot instant.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PacingConfig {
    pub scale: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DonationConfig {
    pub url: String,
}

fn default_persona_name() -> String {
    "Akrag".to_string()
}
fn default_quotes_timeout() -> u64 {
    5
}
fn default_search_endpoint() -> String {
    "https://duckduckgo.com/".to_string()
}
fn default_pacing_scale() -> f64 {
    1.0
}
fn default_donation_url() -> String {
    "https://buymeacoffee.com/pacha".to_string()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
        }
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            source: None,
            timeout_secs: default_quotes_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            open_browser: true,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            scale: default_pacing_scale(),
        }
    }
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            url: default_donation_url(),
        }
    }
}

/// Values given on the command line. `None` leaves the file/default value alone.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub name: Option<String>,
    pub quotes_source: Option<String>,
    pub search_endpoint: Option<String>,
    pub open_browser: Option<bool>,
    pub pace: Option<f64>,
}

const PROJECT_CONFIG_FILENAME: &str = ".akrag.toml";
const MAX_PACING_SCALE: f64 = 100.0;

/// Loads the effective configuration for the current directory and user.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current_dir, user_config_path().as_deref(), overrides)
}

/// Same as `load_config`, with the search root and user file made explicit.
pub fn load_config_from(
    start_dir: &Path,
    user_config: Option<&Path>,
    overrides: &Overrides,
) -> Result<Config> {
    let user = match user_config {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            None
        }
        None => None,
    };
    let project = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.akrag.toml) found in ancestors.");
            None
        }
    };

    let mut merged = merge_configs(user.unwrap_or_default(), project);
    apply_overrides(&mut merged, overrides);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "Akrag", "akrag") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let pick = |project: String, user: String, default: &str| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        persona: PersonaConfig {
            name: pick(project.persona.name, user.persona.name, defaults.persona.name.as_str()),
        },
        quotes: QuotesConfig {
            source: project.quotes.source.or(user.quotes.source),
            timeout_secs: if project.quotes.timeout_secs != defaults.quotes.timeout_secs {
                project.quotes.timeout_secs
            } else {
                user.quotes.timeout_secs
            },
        },
        search: SearchConfig {
            endpoint: pick(
                project.search.endpoint,
                user.search.endpoint,
                defaults.search.endpoint.as_str(),
            ),
            open_browser: project.search.open_browser && user.search.open_browser,
        },
        pacing: PacingConfig {
            scale: if project.pacing.scale != defaults.pacing.scale {
                project.pacing.scale
            } else {
                user.pacing.scale
            },
        },
        donation: DonationConfig {
            url: pick(project.donation.url, user.donation.url, defaults.donation.url.as_str()),
        },
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(name) = &overrides.name {
        config.persona.name = name.clone();
    }
    if let Some(source) = &overrides.quotes_source {
        config.quotes.source = Some(source.clone());
    }
    if let Some(endpoint) = &overrides.search_endpoint {
        config.search.endpoint = endpoint.clone();
    }
    if let Some(open) = overrides.open_browser {
        config.search.open_browser = open;
    }
    if let Some(pace) = overrides.pace {
        config.pacing.scale = pace;
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(source) = config.quotes.source.as_mut() {
        if !is_http_url(source) {
            *source = shellexpand::tilde(source).into_owned();
            debug!("Expanded quote source path: {}", source);
        }
    }
}

/// True when `s` parses as an absolute http or https URL.
pub fn is_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.persona.name.trim().is_empty() {
        return Err(anyhow!(AkragError::Config(
            "Persona name cannot be empty.".to_string()
        )));
    }
    if !is_http_url(&config.search.endpoint) {
        return Err(anyhow!(AkragError::Config(format!(
            "Invalid search endpoint: '{}'. Expected an http(s) URL.",
            config.search.endpoint
        ))));
    }
    if !is_http_url(&config.donation.url) {
        return Err(anyhow!(AkragError::Config(format!(
            "Invalid donation URL: '{}'. Expected an http(s) URL.",
            config.donation.url
        ))));
    }
    let scale = config.pacing.scale;
    if !scale.is_finite() || !(0.0..=MAX_PACING_SCALE).contains(&scale) {
        return Err(anyhow!(AkragError::Config(format!(
            "Invalid pacing scale: {}. Expected a number between 0 and {}.",
            scale, MAX_PACING_SCALE
        ))));
    }
    if config.quotes.timeout_secs == 0 {
        return Err(anyhow!(AkragError::Config(
            "Quote source timeout must be at least one second.".to_string()
        )));
    }
    Ok(())
}
