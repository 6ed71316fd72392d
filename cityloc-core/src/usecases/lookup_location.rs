use super::prelude::*;
use crate::gateways::{geocode::GeoCodingGateway, summary::SummaryGateway};

/// Look up a city by name.
///
/// Locations that have been stored before are returned directly.
/// Otherwise the geocoding provider is asked and its answer is
/// (optionally enriched with a summary and) stored before it is
/// returned.
pub fn lookup_location<R>(
    repo: &R,
    geocoding: &dyn GeoCodingGateway,
    summary: Option<&dyn SummaryGateway>,
    query: &str,
) -> Result<Location>
where
    R: LocationRepo,
{
    let key = CityKey::from_query(query).ok_or(Error::EmptyCity)?;
    match repo.get_location_by_key(&key) {
        Ok(location) => {
            log::debug!("Found '{key}' in database");
            return Ok(location);
        }
        Err(RepoError::NotFound) => {}
        Err(err) => return Err(err.into()),
    }

    let query = query.trim();
    log::info!("Fetching location data of '{query}' from geocoding provider");
    let mut new_location = match geocoding.fetch_location(query) {
        Ok(Some(new_location)) => new_location,
        Ok(None) => {
            log::warn!("Geocoding provider did not return any data for '{query}'");
            return Err(Error::CityNotFound);
        }
        Err(err) => {
            log::error!("Failed to fetch location data of '{query}': {err}");
            return Err(Error::ProviderUnavailable(err));
        }
    };
    if new_location.summary.is_none() {
        if let Some(gw) = summary {
            new_location.summary = fetch_summary(gw, &new_location.city);
        }
    }

    let location = Location::new(key, new_location);
    match repo.create_location(&location) {
        Ok(()) => {
            log::info!("Stored location of '{}' ({})", location.city, location.key);
            Ok(location)
        }
        Err(RepoError::AlreadyExists) => {
            // Lost the race against a concurrent lookup of the same city
            log::debug!("Location '{}' has already been stored", location.key);
            Ok(repo.get_location_by_key(&location.key)?)
        }
        Err(err) => Err(err.into()),
    }
}

fn fetch_summary(gw: &dyn SummaryGateway, city: &str) -> Option<String> {
    match gw.fetch_summary(city) {
        Ok(Some(summary)) => Some(summary),
        Ok(None) => {
            log::warn!("No summary found for '{city}'");
            None
        }
        Err(err) => {
            log::warn!("Failed to fetch summary of '{city}': {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use cityloc_entities::builders::*;

    fn paris() -> NewLocation {
        NewLocation::build()
            .city("Paris")
            .country("France")
            .pos(MapPoint::try_from_lat_lng_deg(48.8566, 2.3522).unwrap())
            .finish()
    }

    #[test]
    fn fill_empty_store_and_hit_it_afterwards() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().with("Paris", paris());

        let location = lookup_location(&db, &geo_gw, None, "Paris").unwrap();
        assert_eq!("Paris", location.city);
        assert_eq!("France", location.country);
        assert_eq!(48.8566, location.pos.lat());
        assert_eq!(2.3522, location.pos.lng());
        assert_eq!(None, location.summary);
        assert_eq!("paris", location.key.as_str());
        assert_eq!(1, geo_gw.calls());
        assert_eq!(1, db.locations.borrow().len());

        let cached = lookup_location(&db, &geo_gw, None, "Paris").unwrap();
        assert_eq!(location, cached);
        assert_eq!(1, geo_gw.calls());
        assert_eq!(1, db.locations.borrow().len());
    }

    #[test]
    fn return_stored_location_without_asking_the_provider() {
        let db = MockDb::default();
        let stored = Location::build()
            .city("Berlin")
            .country("Germany")
            .pos(MapPoint::try_from_lat_lng_deg(52.52, 13.405).unwrap())
            .finish();
        db.locations.borrow_mut().push(stored.clone());
        let geo_gw = MockGeoGw::default();

        let location = lookup_location(&db, &geo_gw, None, "Berlin").unwrap();
        assert_eq!(stored, location);
        assert_eq!(0, geo_gw.calls());
    }

    #[test]
    fn lookup_twice_calls_provider_once() {
        let db = MockDb::default();
        let berlin = NewLocation::build().city("Berlin").country("Germany").finish();
        let geo_gw = MockGeoGw::default().with("Berlin", berlin);
        lookup_location(&db, &geo_gw, None, "Berlin").unwrap();
        lookup_location(&db, &geo_gw, None, "Berlin").unwrap();
        assert_eq!(1, geo_gw.calls());
    }

    #[test]
    fn case_and_whitespace_variants_are_cache_hits() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        let first = lookup_location(&db, &geo_gw, None, "Paris").unwrap();
        let second = lookup_location(&db, &geo_gw, None, "  PARIS ").unwrap();
        assert_eq!(first, second);
        assert_eq!(1, geo_gw.calls());
    }

    #[test]
    fn provider_is_asked_with_the_trimmed_query() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        lookup_location(&db, &geo_gw, None, " Paris\n").unwrap();
        assert_eq!(vec!["Paris".to_string()], *geo_gw.queries.borrow());
    }

    #[test]
    fn unknown_city() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default();
        let err = lookup_location(&db, &geo_gw, None, "Zzzznowhere").unwrap_err();
        assert!(matches!(err, Error::CityNotFound));
        assert_eq!(1, geo_gw.calls());
        assert!(db.locations.borrow().is_empty());
    }

    #[test]
    fn provider_failure() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().unavailable();
        let err = lookup_location(&db, &geo_gw, None, "Paris").unwrap_err();
        assert!(matches!(err, Error::ProviderUnavailable(_)));
        assert!(db.locations.borrow().is_empty());
    }

    #[test]
    fn reject_empty_city() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default();
        let err = lookup_location(&db, &geo_gw, None, "   ").unwrap_err();
        assert!(matches!(err, Error::EmptyCity));
        assert_eq!(0, geo_gw.calls());
    }

    #[test]
    fn store_failure_is_propagated() {
        let db = MockDb::unavailable();
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        let err = lookup_location(&db, &geo_gw, None, "Paris").unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::Other(_))));
        assert_eq!(0, geo_gw.calls());
    }

    #[test]
    fn enrich_new_locations_with_summary() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        let summary_gw = MockSummaryGw::with("Paris", "Capital of France");
        let location = lookup_location(&db, &geo_gw, Some(&summary_gw), "Paris").unwrap();
        assert_eq!(Some("Capital of France"), location.summary.as_deref());
        assert_eq!(
            Some("Capital of France"),
            db.locations.borrow()[0].summary.as_deref()
        );
    }

    #[test]
    fn ignore_summary_failures() {
        let db = MockDb::default();
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        let summary_gw = MockSummaryGw::unavailable();
        let location = lookup_location(&db, &geo_gw, Some(&summary_gw), "Paris").unwrap();
        assert_eq!(None, location.summary);
        assert_eq!(1, db.locations.borrow().len());
    }

    #[test]
    fn concurrently_stored_location_is_returned() {
        let db = MockDb::default();
        let winner = Location::build()
            .city("Paris")
            .country("France")
            .summary(Some("first"))
            .finish();
        // Simulate a concurrent insert between the lookup and the insert
        db.insert_before_create.replace(Some(winner.clone()));
        let geo_gw = MockGeoGw::default().with("Paris", paris());
        let location = lookup_location(&db, &geo_gw, None, "Paris").unwrap();
        assert_eq!(winner, location);
        assert_eq!(1, db.locations.borrow().len());
    }
}
