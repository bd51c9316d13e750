mod config;
mod loader;

pub use config::Config;
pub use loader::{parse_config, parse_config_file};

pub const SOFTWARE_NAME: &str = "Identicon";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("invalid yaml data: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("{0}")]
    ValidationError(&'static str),
}
