use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::counter::{
    CounterBounds, CounterError, CounterState, DEFAULT_JACKPOT, DEFAULT_MAX, DEFAULT_MILESTONE,
    DEFAULT_MIN, DEFAULT_START,
};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub celebration: CelebrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter range and special values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial value (default: 0).
    #[serde(default = "default_start")]
    pub start: i64,
    /// Inclusive lower bound (default: 0).
    #[serde(default = "default_min")]
    pub min: i64,
    /// Inclusive upper bound (default: 22).
    #[serde(default = "default_max")]
    pub max: i64,
    /// Value that fires the celebration (default: 21).
    #[serde(default = "default_jackpot")]
    pub jackpot: i64,
    /// Value drawn with the milestone accent (default: 18).
    #[serde(default = "default_milestone")]
    pub milestone: i64,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Locale key for the title label: "en", "ar", "es", "hi", "zh".
    #[serde(default = "default_locale")]
    pub locale: String,
    /// UI tick interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Explicit title. Empty means "use the localized label".
    #[serde(default)]
    pub title: String,
}

/// Confetti settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of confetti particles (default: 48).
    #[serde(default = "default_particles")]
    pub particles: u16,
    /// Animation length in UI ticks (default: 30).
    #[serde(default = "default_duration_ticks")]
    pub duration_ticks: u16,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache_dir>/counter-app/counter-app.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_start() -> i64 {
    DEFAULT_START
}

fn default_min() -> i64 {
    DEFAULT_MIN
}

fn default_max() -> i64 {
    DEFAULT_MAX
}

fn default_jackpot() -> i64 {
    DEFAULT_JACKPOT
}

fn default_milestone() -> i64 {
    DEFAULT_MILESTONE
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_particles() -> u16 {
    48
}

fn default_duration_ticks() -> u16 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            min: default_min(),
            max: default_max(),
            jackpot: default_jackpot(),
            milestone: default_milestone(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            tick_rate_ms: default_tick_rate_ms(),
            title: String::new(),
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: default_particles(),
            duration_ticks: default_duration_ticks(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl CounterConfig {
    /// Build the initial counter state, rejecting inconsistent ranges.
    pub fn initial_state(&self) -> Result<CounterState, CounterError> {
        let bounds = CounterBounds::new(self.min, self.max)?;
        CounterState::new(self.start, bounds, self.jackpot, self.milestone)
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("counter-app")
                .join("counter-app.log"),
        }
    }
}
