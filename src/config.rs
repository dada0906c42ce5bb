use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::errors::Error;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

pub const DEFAULT_FLATS_API_URL: &str = "http://3.67.172.45:8080";
pub const DEFAULT_OFFICES_API_URL: &str =
    "https://officely-epdmeqcbe7c0a8gq.polandcentral-01.azurewebsites.net";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub flats_api_url: String,
    pub offices_api_url: String,
    pub email_store_path: String,
    pub user_id: i64,
    pub system_tag: String,
    pub log_level: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            flats_api_url: DEFAULT_FLATS_API_URL.to_string(),
            offices_api_url: DEFAULT_OFFICES_API_URL.to_string(),
            email_store_path: ".flatly/store.json".to_string(),
            user_id: 1,
            system_tag: "Flatly".to_string(),
            log_level: "info".to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

pub fn create_test_config() -> Config {
    Config {
        flats_api_url: "http://127.0.0.1:8080".to_string(),
        offices_api_url: "http://127.0.0.1:8081".to_string(),
        email_store_path: "xxx".to_string(),
        user_id: 1,
        system_tag: "Flatly".to_string(),
        log_level: "debug".to_string(),
        request_timeout_seconds: None,
    }
}

pub fn parse_config(contents: &str) -> Result<Config, Error> {
    toml::from_str(contents).map_err(|e| Error::Config(format!("invalid TOML: {e}")))
}

/// Path named by `CONFIG_PATH`, after loading `.env`.
pub fn config_path() -> Option<String> {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV).ok()
}

/// Built-in defaults when no path is given.
pub fn read_config_from(config_path: Option<&str>) -> Result<Config, Error> {
    let Some(config_path) = config_path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(config_path)
        .map_err(|e| Error::Config(format!("failed to read {config_path}: {e}")))?;
    parse_config(&contents)
}
