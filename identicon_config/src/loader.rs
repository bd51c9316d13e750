use std::path::Path;

use super::config::Config;
use super::ConfigError;

struct EnvConfig {
    config_path: String,
    // CONFIG_PATH variable is set
    is_explicit: bool,
}

#[cfg(feature = "production")]
const DEFAULT_CONFIG_PATH: &str = "/etc/identicon/config.yaml";
#[cfg(not(feature = "production"))]
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    match std::env::var("CONFIG_PATH") {
        Ok(config_path) => EnvConfig { config_path, is_explicit: true },
        Err(_) => EnvConfig {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            is_explicit: false,
        },
    }
}

fn validate_config(
    config: &Config,
    warnings: &mut Vec<String>,
) -> Result<(), ConfigError> {
    if config.http_port == 0 {
        return Err(ConfigError::ValidationError("http_port must be non-zero"));
    };
    if let Some(ref http_socket) = config.http_socket {
        if http_socket.is_empty() {
            return Err(ConfigError::ValidationError("http_socket must not be empty"));
        };
    } else if config.http_socket_perms.is_some() {
        warnings.push("http_socket_perms is ignored when http_socket is not set".to_string());
    };
    if config.cache_max_age == 0 {
        warnings.push("cache_max_age is 0, identicons will not be cached by clients".to_string());
    };
    Ok(())
}

/// Parses YAML config and returns it together with warnings
pub fn parse_config_file(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    let mut warnings = vec![];
    let config = if config_yaml.trim().is_empty() {
        Config::default()
    } else {
        let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
        serde_ignored::deserialize(deserializer, |path| {
            warnings.push(format!("unknown configuration parameter: {path}"));
        })?
    };
    validate_config(&config, &mut warnings)?;
    Ok((config, warnings))
}

pub fn parse_config() -> Result<(Config, Vec<String>), ConfigError> {
    let env = parse_env();
    let config_path = Path::new(&env.config_path);
    if !env.is_explicit && !config_path.exists() {
        let config = Config::default();
        let warnings = vec![
            format!("{} not found, using default configuration", env.config_path),
        ];
        return Ok((config, warnings));
    };
    let config_yaml = std::fs::read_to_string(config_path)?;
    let (mut config, warnings) = parse_config_file(&config_yaml)?;
    config.config_path = Some(env.config_path);
    Ok((config, warnings))
}
