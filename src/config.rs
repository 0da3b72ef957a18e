use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default config location, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the public-IP identification service
    #[serde(default = "default_ip_api")]
    pub ip_api: String,

    /// Base URL of the IP geolocation service
    #[serde(default = "default_geo_api")]
    pub geo_api: String,

    /// Base URL of the flyover prediction service
    #[serde(default = "default_pass_api")]
    pub pass_api: String,

    /// Per-request timeout applied to the HTTP client
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ip_api() -> String {
    "https://api.ipify.org".to_string()
}

fn default_geo_api() -> String {
    "https://freegeoip.app".to_string()
}

fn default_pass_api() -> String {
    "https://iss-pass.herokuapp.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_api: default_ip_api(),
            geo_api: default_geo_api(),
            pass_api: default_pass_api(),
            timeout_seconds: default_timeout_seconds(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Read `config.toml` from the working directory. A missing file is not
    /// an error; every field has a default.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_file(CONFIG_PATH)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).with_context(|| format!("invalid config file {path}"))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("failed to read config file {path}")),
        }
    }
}
