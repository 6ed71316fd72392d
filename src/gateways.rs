use anyhow::{anyhow, Result};
use cityloc_gateways::{opencage::OpenCage, wikipedia::Wikipedia};

use crate::config::{self, ENV_NAME_OPENCAGE_API_KEY};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<OpenCage> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage {
            api_key,
            api_url,
            language,
            timeout,
        }) => {
            log::info!("Use OpenCage geocoding gateway ({api_url})");
            Ok(OpenCage::new(api_key.clone())
                .with_api_url(api_url.clone())
                .with_language(language.clone())
                .with_timeout(*timeout))
        }
        None => Err(anyhow!(
            "No geocoding gateway configured: set {ENV_NAME_OPENCAGE_API_KEY} or configure [gateway.opencage]"
        )),
    }
}

pub fn summary_gateway(cfg: &config::Summary) -> Option<Wikipedia> {
    match &cfg.gateway {
        Some(config::SummaryGateway::Wikipedia { api_url, timeout }) => {
            log::info!("Use Wikipedia summary gateway ({api_url})");
            Some(
                Wikipedia::default()
                    .with_api_url(api_url.clone())
                    .with_timeout(*timeout),
            )
        }
        None => None,
    }
}
