use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level peerscope configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeerscopeConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Peer window settings.
    #[serde(default)]
    pub window: WindowToml,

    /// Decision band settings.
    #[serde(default)]
    pub decision: DecisionToml,

    /// Summary settings.
    #[serde(default)]
    pub summary: SummaryToml,
}

impl PeerscopeConfig {
    /// Loads the TOML file at `path`, or returns defaults when it does not
    /// exist. Every value has a default, so a config file is optional as
    /// long as the input path comes from the CLI.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_score_column")]
    pub score_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            score_column: default_score_column(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_score_column() -> String {
    "TARGET_PROB".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_window_size")]
    pub size: usize,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            size: default_window_size(),
        }
    }
}

fn default_window_size() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionToml {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_review_upper")]
    pub review_upper: f64,
}

impl Default for DecisionToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            review_upper: default_review_upper(),
        }
    }
}

fn default_threshold() -> f64 {
    0.49
}
fn default_review_upper() -> f64 {
    0.52
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryToml {
    #[serde(default = "default_bins")]
    pub bins: usize,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl Default for SummaryToml {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            features: None,
        }
    }
}

fn default_bins() -> usize {
    10
}
