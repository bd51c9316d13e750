use identicon_config::{
    parse_config,
    Config,
    SOFTWARE_NAME,
    SOFTWARE_VERSION,
};

use crate::logger::configure_logger;

// Panics on errors
pub fn initialize_app(quiet_modules: &[&str]) -> Config {
    let (config, config_warnings) = parse_config()
        .expect("failed to load configuration");
    configure_logger(config.log_level, quiet_modules);
    log::info!("{} v{}", SOFTWARE_NAME, SOFTWARE_VERSION);
    if let Some(ref config_path) = config.config_path {
        log::info!("config loaded from {}", config_path);
    };
    for warning in config_warnings {
        log::warn!("{}", warning);
    };
    config
}
