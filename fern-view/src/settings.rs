//! Command-line and config-file settings for the viewer.

use std::{fs, path::PathBuf};

use clap::Parser;
use fern_core::{Config, GenerationParameters};
use thiserror::Error;

/// Child branch jitter used when no config file or flag says otherwise.
pub const DEFAULT_BRANCH_JITTER: f64 = 1.0 / 6.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fern-view")]
#[command(about = "Draws a random fractal fern", long_about = None)]
pub struct Cli {
    /// Length in pixels of the primary tendril segment
    #[arg(long, default_value_t = 40.0)]
    pub size: f64,

    /// How much smaller each segment is than the previous one, in (0, 1)
    #[arg(long, default_value_t = 0.8)]
    pub reduction: f64,

    /// Tendency of a tendril to turn right (positive) or left (negative)
    #[arg(long, default_value_t = 0.3, allow_hyphen_values = true)]
    pub turn_bias: f64,

    /// Seed for the random source; picked at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Random spread of the direction handed to child tendrils
    #[arg(long)]
    pub branch_jitter: Option<f64>,

    /// Maximum number of lines and triangles in one fern
    #[arg(long)]
    pub max_draw_calls: Option<usize>,

    /// TOML file with `max_draw_calls` and `branch_jitter`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Everything the viewer needs to draw one fern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub params: GenerationParameters,
    pub cfg: Config,
    pub seed: u64,
    pub width: f32,
    pub height: f32,
}

/// Parses a TOML run config; missing keys keep the core defaults.
pub fn parse_config(text: &str) -> Result<Config, SettingsError> {
    Ok(toml::from_str(text)?)
}

impl Cli {
    /// Resolves the final settings.
    ///
    /// Precedence, lowest first: viewer defaults, the config file, flags.
    pub fn into_settings(self) -> Result<Settings, SettingsError> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_config(&text)?
            }
            None => Config {
                branch_jitter: DEFAULT_BRANCH_JITTER,
                ..Config::default()
            },
        };

        if let Some(jitter) = self.branch_jitter {
            cfg.branch_jitter = jitter;
        }
        if let Some(max) = self.max_draw_calls {
            cfg.max_draw_calls = max;
        }

        Ok(Settings {
            params: GenerationParameters::new(self.size, self.reduction, self.turn_bias),
            cfg,
            seed: self.seed.unwrap_or_else(rand::random),
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_fern() {
        let cli = Cli::parse_from(["fern-view", "--seed", "11"]);
        let s = cli.into_settings().expect("no config file involved");

        assert_eq!(s.params, GenerationParameters::new(40.0, 0.8, 0.3));
        assert_eq!(s.seed, 11);
        assert_eq!(s.cfg.branch_jitter, DEFAULT_BRANCH_JITTER);
        assert_eq!(s.cfg.max_draw_calls, Config::default().max_draw_calls);
        assert_eq!((s.width, s.height), (800.0, 600.0));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "fern-view",
            "--size",
            "60",
            "--reduction",
            "0.85",
            "--turn-bias",
            "-0.4",
            "--branch-jitter",
            "0",
            "--max-draw-calls",
            "5000",
        ]);
        let s = cli.into_settings().expect("no config file involved");

        assert_eq!(s.params, GenerationParameters::new(60.0, 0.85, -0.4));
        assert_eq!(s.cfg.branch_jitter, 0.0);
        assert_eq!(s.cfg.max_draw_calls, 5000);
    }

    #[test]
    fn parse_config_fills_missing_keys() {
        let cfg = parse_config("max_draw_calls = 1234\n").expect("valid toml");
        assert_eq!(cfg.max_draw_calls, 1234);
        assert_eq!(cfg.branch_jitter, Config::default().branch_jitter);

        let cfg = parse_config("branch_jitter = 0.25").expect("valid toml");
        assert_eq!(cfg.branch_jitter, 0.25);
    }

    #[test]
    fn parse_config_rejects_wrong_types() {
        assert!(matches!(
            parse_config("max_draw_calls = \"lots\""),
            Err(SettingsError::Toml(_))
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::parse_from(["fern-view", "--config", "/definitely/not/here.toml"]);
        assert!(matches!(cli.into_settings(), Err(SettingsError::Io { .. })));
    }
}
