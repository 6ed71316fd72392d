mod error;
mod lookup_location;
mod recent_queries;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, lookup_location::*, recent_queries::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
