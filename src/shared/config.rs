//! Application configuration.
//!
//! Values come from an optional `config/default.toml` and are overridden by
//! `INVOICING__`-prefixed environment variables, e.g. `INVOICING__SUPABASE__URL`.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Hosted auth and database project. Without it the service runs on in-memory adapters.
    pub supabase: Option<SupabaseConfig>,
    #[serde(default)]
    pub invoices: InvoiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sessions unused for this long are forgotten.
    #[serde(default = "default_session_idle_minutes")]
    pub session_idle_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_idle_minutes: default_session_idle_minutes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_session_idle_minutes() -> u64 {
    480
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            currency: default_currency(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("invoices")
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("INVOICING").separator("__"))
            .build()?
            .try_deserialize()
    }
}
