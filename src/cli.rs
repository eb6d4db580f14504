use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "counter-app",
    version,
    about = "Bounded counter with a confetti jackpot"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/counter-app/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial value
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Inclusive lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Inclusive upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Value that fires the confetti
    #[arg(long, allow_negative_numbers = true)]
    pub jackpot: Option<i64>,

    /// Title locale (en, ar, es, hi, zh)
    #[arg(long)]
    pub locale: Option<String>,

    /// Title text, overrides the localized label
    #[arg(long)]
    pub title: Option<String>,

    /// Disable the confetti effect
    #[arg(long)]
    pub no_celebration: bool,
}

impl Cli {
    /// Loads the config file (explicit `--config` or the default location),
    /// applies the flag overrides and validates the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::read_from(path)?,
            None => Config::read()?,
        };
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Flags win over file values.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(start) = self.start {
            config.counter.start = start;
        }
        if let Some(min) = self.min {
            config.counter.min = min;
        }
        if let Some(max) = self.max {
            config.counter.max = max;
        }
        if let Some(jackpot) = self.jackpot {
            config.counter.jackpot = jackpot;
        }
        if let Some(locale) = &self.locale {
            config.ui.locale = locale.clone();
        }
        if let Some(title) = &self.title {
            config.ui.title = title.clone();
        }
        if self.no_celebration {
            config.celebration.enabled = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from([
            "counter-app",
            "--min",
            "-5",
            "--max",
            "5",
            "--jackpot",
            "3",
            "--locale",
            "hi",
            "--no-celebration",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.counter.min, -5);
        assert_eq!(config.counter.max, 5);
        assert_eq!(config.counter.jackpot, 3);
        assert_eq!(config.counter.start, 0);
        assert_eq!(config.ui.locale, "hi");
        assert!(!config.celebration.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn flags_can_repair_file_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        // jackpot 21 is out of range for max 5 until the flag moves it
        std::fs::write(&path, "[counter]\nmax = 5\n").unwrap();
        let cli = Cli::parse_from([
            "counter-app",
            "--config",
            path.to_str().unwrap(),
            "--jackpot",
            "4",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.counter.max, 5);
        assert_eq!(config.counter.jackpot, 4);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["counter-app"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }
}
