use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use cityloc_core::gateways::{summary::SummaryGateway, Error, Result};

use crate::request_error;

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Page summaries from the Wikipedia REST API.
#[derive(Debug, Clone)]
pub struct Wikipedia {
    api_url: String,
    timeout: Duration,
}

impl Default for Wikipedia {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Wikipedia {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn page_url(&self, title: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|err| Error::Request(anyhow::anyhow!("Invalid API URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| Error::Request(anyhow::anyhow!("Invalid API URL: {}", self.api_url)))?
            .pop_if_empty()
            .push(title);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    extract: Option<String>,
}

fn summary_text(page: PageSummary) -> Option<String> {
    page.extract
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

impl SummaryGateway for Wikipedia {
    fn fetch_summary(&self, city: &str) -> Result<Option<String>> {
        let url = self.page_url(city)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(request_error)?;
        let response = client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("Wikipedia API returned status {status} for '{city}'");
            return Ok(None);
        }
        let page = response
            .json::<PageSummary>()
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        Ok(summary_text(page))
    }
}
