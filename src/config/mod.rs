use anyhow::{anyhow, Result};
use cityloc_gateways::{opencage, wikipedia};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cityloc.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
pub const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub summary: Summary,
    pub history: History,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::from_default_file()?
                }
                _ => return Err(err.into()),
            },
        };
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            raw_config.set_opencage_api_key(api_key);
        }
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    OpenCage {
        api_key: String,
        api_url: String,
        language: String,
        timeout: Duration,
    },
}

pub struct Summary {
    pub gateway: Option<SummaryGateway>,
}

pub enum SummaryGateway {
    Wikipedia { api_url: String, timeout: Duration },
}

pub struct History {
    pub capacity: usize,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            summary,
            history,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The database connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Gateway {
            opencage,
            wikipedia,
        } = gateway.unwrap_or_default();

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage {
                    api_key,
                    api_url,
                    language,
                    timeout,
                } = opencage.ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                let api_key = api_key.ok_or_else(|| {
                    anyhow!("Missing OpenCage API key (set {ENV_NAME_OPENCAGE_API_KEY})")
                })?;
                Some(GeocodingGateway::OpenCage {
                    api_key,
                    api_url: api_url.unwrap_or_else(|| opencage::DEFAULT_API_URL.to_string()),
                    language: language.unwrap_or_else(|| opencage::DEFAULT_LANGUAGE.to_string()),
                    timeout: timeout.unwrap_or(opencage::DEFAULT_TIMEOUT),
                })
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let summary_gateway = match summary.and_then(|s| s.gateway) {
            Some(raw::SummaryGateway::Wikipedia) => {
                let raw::Wikipedia { api_url, timeout } = wikipedia.unwrap_or_default();
                Some(SummaryGateway::Wikipedia {
                    api_url: api_url.unwrap_or_else(|| wikipedia::DEFAULT_API_URL.to_string()),
                    timeout: timeout.unwrap_or(wikipedia::DEFAULT_TIMEOUT),
                })
            }
            None => None,
        };
        let summary = Summary {
            gateway: summary_gateway,
        };

        let raw::History { capacity } = history.unwrap_or_default();
        if capacity == 0 {
            return Err(anyhow!("The history capacity must be at least 1"));
        }
        let history = History { capacity };

        Ok(Self {
            db,
            webserver,
            geocoding,
            summary,
            history,
        })
    }
}
