//! HTTP gateways to the external providers.

pub mod opencage;
pub mod wikipedia;

use cityloc_core::gateways::Error;

fn request_error(err: reqwest::Error) -> Error {
    // The URL might contain credentials
    Error::Request(err.without_url().into())
}
