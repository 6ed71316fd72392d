use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("cityloc.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub summary: Option<Summary>,
    pub history: Option<History>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn from_default_file() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Selects OpenCage with the given key, even if no geocoding
    /// gateway has been configured.
    pub fn set_opencage_api_key(&mut self, api_key: String) {
        self.geocoding
            .get_or_insert_with(Default::default)
            .gateway
            .get_or_insert(GeocodingGateway::Opencage);
        self.gateway
            .get_or_insert_with(Default::default)
            .opencage
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    #[serde(default = "default_connection_sqlite")]
    pub connection_sqlite: String,
    #[serde(default = "default_connection_pool_size")]
    pub connection_pool_size: u8,
}

fn default_connection_sqlite() -> String {
    "cityloc.db".to_string()
}

const fn default_connection_pool_size() -> u8 {
    10
}

impl Default for Db {
    fn default() -> Self {
        Self {
            connection_sqlite: default_connection_sqlite(),
            connection_pool_size: default_connection_pool_size(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Summary {
    pub gateway: Option<SummaryGateway>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryGateway {
    Wikipedia,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct History {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

const fn default_history_capacity() -> usize {
    cityloc_core::usecases::DEFAULT_RECENT_QUERIES_CAPACITY
}

impl Default for History {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
    pub wikipedia: Option<Wikipedia>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wikipedia {
    pub api_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}
