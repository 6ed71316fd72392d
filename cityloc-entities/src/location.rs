use crate::{city::CityKey, geo::MapPoint, id::Id, time::Timestamp};

/// A location as resolved by a geocoding provider
/// that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub city: String,
    pub country: String,
    pub pos: MapPoint,
    pub summary: Option<String>,
    /// IANA time zone name, e.g. `Europe/Paris`.
    pub timezone: Option<String>,
}

/// A stored location.
///
/// Stored locations are immutable, they are never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub key: CityKey,
    pub city: String,
    pub country: String,
    pub pos: MapPoint,
    pub summary: Option<String>,
    pub timezone: Option<String>,
    pub created_at: Timestamp,
}

impl Location {
    pub fn new(key: CityKey, new_location: NewLocation) -> Self {
        let NewLocation {
            city,
            country,
            pos,
            summary,
            timezone,
        } = new_location;
        Self {
            id: Id::new(),
            key,
            city,
            country,
            pos,
            summary,
            timezone,
            created_at: Timestamp::now(),
        }
    }
}
