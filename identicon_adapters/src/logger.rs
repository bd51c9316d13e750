use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Level used for modules that are too chatty at the base level
fn quieter(level: Level) -> LevelFilter {
    match level {
        Level::Trace => LevelFilter::Debug,
        Level::Debug => LevelFilter::Info,
        Level::Info => LevelFilter::Warn,
        Level::Warn | Level::Error => LevelFilter::Error,
    }
}

fn build_logger(base_level: Level, quiet_modules: &[&str]) -> Builder {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args(),
            )
        })
        // Standard output may carry image data
        .target(Target::Stderr)
        .filter_level(base_level.to_level_filter());
    for module in quiet_modules {
        builder.filter_module(module, quieter(base_level));
    };
    builder.parse_default_env();
    builder
}

/// Installs global logger.
/// Modules listed in `quiet_modules` log one level less than `base_level`.
pub fn configure_logger(base_level: Level, quiet_modules: &[&str]) -> () {
    build_logger(base_level, quiet_modules).init();
}
