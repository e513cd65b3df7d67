use crate::cli::Cli;
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use tracing::Level;

const TRACE_LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

// Settings are a singleton generated at runtime. All settings may be
// configured via environment variables. Example:
// FEED_URL="xxx" would set feed_url to the xxx value.
#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    /// Upstream ScrapedDuck feed of upcoming events.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_feed_timeout_sec")]
    pub feed_timeout_sec: u64,
    /// Address the API server listens on.
    #[serde(default = "default_server_bind")]
    pub server_bind: String,
    /// Maximum number of slides returned to the dashboard.
    #[serde(default = "default_max_slides")]
    pub max_slides: usize,
    /// Base URL this service is reachable at, advertised to the dashboard.
    #[serde(default = "default_service_base_url")]
    pub service_base_url: String,
    // Dashboard registry endpoint. Registration is skipped when unset.
    pub registry_url: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        let local_settings_yaml_file = ".env.local.yaml";
        let settings: Settings = match Path::new(local_settings_yaml_file).exists() {
            true => {
                println!(
                    "\n######################################\n\
                       ##   Found '.env.local.yaml' file,  ##\n\
                       ##   loading local configuration.   ##\n\
                       ######################################\n\
                    "
                );
                Figment::new()
                    .merge(Yaml::file(local_settings_yaml_file))
                    .merge(Env::raw())
                    .merge(Serialized::defaults(Cli::parse()))
                    .extract()
                    .unwrap()
            }
            false => Figment::new()
                .merge(Env::raw())
                .merge(Serialized::defaults(Cli::parse()))
                .extract()
                .unwrap(),
        };

        settings
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_feed_url() -> String {
    "https://raw.githubusercontent.com/bigfoott/ScrapedDuck/data/events.json".to_string()
}

fn default_feed_timeout_sec() -> u64 {
    10
}

fn default_server_bind() -> String {
    "0.0.0.0:8002".to_string()
}

fn default_max_slides() -> usize {
    10
}

fn default_service_base_url() -> String {
    "http://localhost:8002".to_string()
}
