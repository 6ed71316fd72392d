use super::Result;
use cityloc_entities::location::NewLocation;

pub trait GeoCodingGateway {
    /// Resolve a free-text query into a location.
    ///
    /// Only the best matching candidate is returned. `Ok(None)` means
    /// that the provider does not know the place.
    fn fetch_location(&self, query: &str) -> Result<Option<NewLocation>>;
}
