//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use peerscope_decision::DecisionPolicy;
use peerscope_io::ReaderConfig;
use peerscope_neighbors::WindowConfig;

use crate::config::{DecisionToml, IoToml, WindowToml};

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let delimiter = parse_delimiter(&io.delimiter)?;
    Ok(ReaderConfig::default()
        .with_score_column(&io.score_column)
        .with_delimiter(delimiter))
}

/// Parses a one-character delimiter string into its byte value.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
    }
}

/// Builds a [`WindowConfig`] from the TOML window configuration, with an
/// optional CLI override taking precedence.
pub fn build_window_config(window: &WindowToml, cli_size: Option<usize>) -> WindowConfig {
    WindowConfig::new(cli_size.unwrap_or(window.size))
}

/// Builds a [`DecisionPolicy`] from the TOML decision configuration.
pub fn build_decision_policy(decision: &DecisionToml) -> Result<DecisionPolicy> {
    DecisionPolicy::new(decision.threshold, decision.review_upper)
        .context("invalid [decision] configuration")
}

/// Resolves the input CSV path: CLI flag first, then config.
pub fn resolve_input(cli_input: Option<PathBuf>, io: &IoToml) -> Result<PathBuf> {
    cli_input
        .or_else(|| io.input.clone())
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(",,").is_err());
    }

    #[test]
    fn test_window_override() {
        let toml = WindowToml { size: 10 };
        assert_eq!(build_window_config(&toml, None).window_size(), 10);
        assert_eq!(build_window_config(&toml, Some(4)).window_size(), 4);
    }

    #[test]
    fn test_decision_policy_invalid() {
        let toml = DecisionToml {
            threshold: 0.6,
            review_upper: 0.5,
        };
        assert!(build_decision_policy(&toml).is_err());
    }

    #[test]
    fn test_resolve_input_precedence() {
        let io = IoToml {
            input: Some(PathBuf::from("from_config.csv")),
            ..IoToml::default()
        };
        assert_eq!(
            resolve_input(Some(PathBuf::from("from_cli.csv")), &io).unwrap(),
            PathBuf::from("from_cli.csv")
        );
        assert_eq!(
            resolve_input(None, &io).unwrap(),
            PathBuf::from("from_config.csv")
        );
        assert!(resolve_input(None, &IoToml::default()).is_err());
    }
}
