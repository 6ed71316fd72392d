use crate::{gateways, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The city name is empty")]
    EmptyCity,
    #[error("City not found")]
    CityNotFound,
    #[error("The geocoding provider is unavailable: {0}")]
    ProviderUnavailable(#[source] gateways::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
