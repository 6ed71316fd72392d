pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, new_location_builder::*};

pub mod new_location_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug)]
    pub struct NewLocationBuild {
        new_location: NewLocation,
    }

    impl NewLocationBuild {
        pub fn city(mut self, city: &str) -> Self {
            self.new_location.city = city.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.new_location.country = country.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.new_location.pos = pos;
            self
        }
        pub fn summary(mut self, summary: Option<&str>) -> Self {
            self.new_location.summary = summary.map(Into::into);
            self
        }
        pub fn timezone(mut self, timezone: Option<&str>) -> Self {
            self.new_location.timezone = timezone.map(Into::into);
            self
        }
        pub fn finish(self) -> NewLocation {
            self.new_location
        }
    }

    impl Builder for NewLocation {
        type Build = NewLocationBuild;
        fn build() -> Self::Build {
            let pos = MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap();
            Self::Build {
                new_location: NewLocation {
                    city: "".into(),
                    country: "".into(),
                    pos,
                    summary: None,
                    timezone: None,
                },
            }
        }
    }
}

pub mod location_builder {

    use super::*;
    use crate::{city::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        key: CityKey,
        new_location: NewLocationBuild,
    }

    impl LocationBuild {
        pub fn city(mut self, city: &str) -> Self {
            self.key = CityKey::from_query(city).unwrap();
            self.new_location = self.new_location.city(city);
            self
        }
        pub fn key(mut self, query: &str) -> Self {
            self.key = CityKey::from_query(query).unwrap();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.new_location = self.new_location.country(country);
            self
        }
        pub fn pos(mut self, pos: crate::geo::MapPoint) -> Self {
            self.new_location = self.new_location.pos(pos);
            self
        }
        pub fn summary(mut self, summary: Option<&str>) -> Self {
            self.new_location = self.new_location.summary(summary);
            self
        }
        pub fn timezone(mut self, timezone: Option<&str>) -> Self {
            self.new_location = self.new_location.timezone(timezone);
            self
        }
        pub fn finish(self) -> Location {
            Location::new(self.key, self.new_location.finish())
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            Self::Build {
                key: CityKey::from_query("-").unwrap(),
                new_location: NewLocation::build(),
            }
        }
    }
}
