//! Configuration: TOML file under the user's config dir, overridable from
//! the command line.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CelebrationConfig, Config, CounterConfig, LoggingConfig, UiConfig};
