use thiserror::Error;

/// Geographical position in degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum MapPointError {
    #[error("Invalid latitude: {0}")]
    Latitude(f64),
    #[error("Invalid longitude: {0}")]
    Longitude(f64),
}

impl MapPoint {
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LNG_DEG_MAX: f64 = 180.0;
    pub const LNG_DEG_MIN: f64 = -180.0;

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, MapPointError> {
        if !lat.is_finite() || !(Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&lat) {
            return Err(MapPointError::Latitude(lat));
        }
        if !lng.is_finite() || !(Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&lng) {
            return Err(MapPointError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_positions() {
        let p = MapPoint::try_from_lat_lng_deg(48.8566, 2.3522).unwrap();
        assert_eq!((48.8566, 2.3522), p.to_lat_lng_deg());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, -180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_ok());
    }

    #[test]
    fn reject_non_finite_or_out_of_range() {
        assert_eq!(
            Err(MapPointError::Longitude(f64::INFINITY)),
            MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY)
        );
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.5).is_err());
    }
}
