pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use cityloc_entities::{city::*, geo::*, id::*, location::*, time::*};
}
