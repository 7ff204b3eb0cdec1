pub mod config;
pub mod metrics;
pub mod placer;
pub mod rules;
pub mod sanitize;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
    StorageConfig,
};
pub use placer::{FsPlacer, PlacedFile, Placer, PlacerError};
pub use rules::{load_rules, load_rules_from_str, RuleSet};
pub use sanitize::sanitize_filename;
