//! Server configuration.
//!
//! Loaded in order of precedence (last wins):
//! 1. Default values
//! 2. Environment variables (`TODO_HOST`, `TODO_PORT`, `TODO_CORS`,
//!    `TODO_LOG_LEVEL`, `TODO_JSON_LOGS`)
//! 3. `PORT`, for platforms that hand the listen port to the process

use std::net::{IpAddr, SocketAddr};

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Attach a permissive CORS layer.
    #[serde(default)]
    pub cors: bool,

    /// Default tracing filter; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: false,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ServerConfig::default()))
            .merge(Env::prefixed("TODO_"))
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
