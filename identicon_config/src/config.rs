use std::net::Ipv6Addr;

use log::{Level as LogLevel};
use serde::Deserialize;

fn default_log_level() -> LogLevel { LogLevel::Info }

fn default_http_host() -> String { "0.0.0.0".to_string() }

const fn default_http_port() -> u16 { 4321 }

// 3 days
const fn default_cache_max_age() -> u32 { 86400 * 3 }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Populated by loader
    #[serde(skip)]
    pub config_path: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    #[serde(default = "default_http_host")]
    pub http_host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    // Overrides http_host and http_port
    pub http_socket: Option<String>,
    // Unix socket permissions (example: 0o640)
    pub http_socket_perms: Option<u32>,

    pub http_cors_allowlist: Option<Vec<String>>,

    // Value of max-age directive in Cache-Control header (seconds)
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            http_host: default_http_host(),
            http_port: default_http_port(),
            http_socket: None,
            http_socket_perms: None,
            http_cors_allowlist: None,
            cache_max_age: default_cache_max_age(),
        }
    }
}

impl Config {
    pub fn http_socket(&self) -> String {
        match self.http_socket {
            Some(ref http_socket) => http_socket.clone(),
            None => {
                if self.http_host.parse::<Ipv6Addr>().is_ok() {
                    format!("[{}]:{}", self.http_host, self.http_port)
                } else {
                    format!("{}:{}", self.http_host, self.http_port)
                }
            },
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Config {
    pub fn for_test() -> Self {
        Self {
            http_host: "127.0.0.1".to_string(),
            cache_max_age: 60,
            ..Default::default()
        }
    }
}
