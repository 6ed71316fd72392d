use std::time::Duration;

use serde::Deserialize;

use cityloc_core::gateways::{geocode::GeoCodingGateway, Error, Result};
use cityloc_entities::{geo::MapPoint, location::NewLocation};

use crate::request_error;

pub const DEFAULT_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Forward geocoding with the OpenCage API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
    api_url: String,
    language: String,
    timeout: Duration,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    results: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    components: Components,
    geometry: Geometry,
    #[serde(default)]
    annotations: Annotations,
}

#[derive(Debug, Default, Deserialize)]
struct Annotations {
    timezone: Option<Timezone>,
}

#[derive(Debug, Deserialize)]
struct Timezone {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

type PlaceNameExtractor = fn(&Components) -> Option<&str>;

fn city(c: &Components) -> Option<&str> {
    c.city.as_deref()
}

fn town(c: &Components) -> Option<&str> {
    c.town.as_deref()
}

fn village(c: &Components) -> Option<&str> {
    c.village.as_deref()
}

/// Tried in order, the first non-empty name wins.
const PLACE_NAME_EXTRACTORS: [PlaceNameExtractor; 3] = [city, town, village];

fn place_name(components: &Components) -> Option<&str> {
    PLACE_NAME_EXTRACTORS
        .iter()
        .filter_map(|extract| extract(components))
        .map(str::trim)
        .find(|name| !name.is_empty())
}

fn new_location_from_response(query: &str, response: Response) -> Result<Option<NewLocation>> {
    let Some(candidate) = response.results.into_iter().next() else {
        return Ok(None);
    };
    let Candidate {
        components,
        geometry,
        annotations,
    } = candidate;
    let pos = MapPoint::try_from_lat_lng_deg(geometry.lat, geometry.lng)
        .map_err(|err| Error::InvalidResponse(err.to_string()))?;
    let city = place_name(&components).unwrap_or(query).to_owned();
    let country = components.country.unwrap_or_default();
    let timezone = annotations
        .timezone
        .and_then(|tz| tz.name)
        .filter(|name| !name.trim().is_empty());
    Ok(Some(NewLocation {
        city,
        country,
        pos,
        summary: None,
        timezone,
    }))
}

impl GeoCodingGateway for OpenCage {
    fn fetch_location(&self, query: &str) -> Result<Option<NewLocation>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(request_error)?;
        let response = client
            .get(&self.api_url)
            .query(&[
                ("q", query),
                ("key", &self.api_key),
                ("language", &self.language),
            ])
            .send()
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("OpenCage API returned status {status} for '{query}'");
            return Ok(None);
        }
        let response = response
            .json::<Response>()
            .map_err(|err| Error::InvalidResponse(err.without_url().to_string()))?;
        log::debug!(
            "OpenCage API returned {} result(s) for '{query}'",
            response.results.len()
        );
        new_location_from_response(query, response)
    }
}
