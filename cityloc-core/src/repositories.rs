// Low-level database access traits.
// Each repository is responsible for a single entity.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn get_location_by_key(&self, key: &CityKey) -> Result<Location>;

    /// Fails with [`Error::AlreadyExists`] if a location
    /// with the same key has been stored before.
    fn create_location(&self, location: &Location) -> Result<()>;

    fn all_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;
}

/// Plain string values stored by key, e.g. client-side state.
pub trait KeyValueRepo {
    fn get_value(&self, key: &str) -> Result<Option<String>>;
    fn set_value(&self, key: &str, value: &str) -> Result<()>;
}
