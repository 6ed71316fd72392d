use super::*;
use cityloc_entities as e;

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            key: _,
            city,
            country,
            pos,
            summary,
            timezone,
            created_at,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            city,
            country,
            latitude,
            longitude,
            summary,
            created_at: created_at.as_millis(),
            timezone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{builders::*, geo::MapPoint};

    #[test]
    fn location_json() {
        let entity = e::location::Location::build()
            .city("Paris")
            .country("France")
            .pos(MapPoint::try_from_lat_lng_deg(48.8566, 2.3522).unwrap())
            .finish();
        let id = entity.id.to_string();
        let created_at = entity.created_at.as_millis();
        let json = serde_json::to_value(Location::from(entity)).unwrap();
        assert_eq!(
            serde_json::json!({
                "id": id,
                "city": "Paris",
                "country": "France",
                "latitude": 48.8566,
                "longitude": 2.3522,
                "summary": null,
                "created_at": created_at,
            }),
            json
        );
    }

    #[test]
    fn location_json_with_time_zone() {
        let entity = e::location::Location::build()
            .city("Linz")
            .timezone(Some("Europe/Vienna"))
            .finish();
        let json = serde_json::to_value(Location::from(entity)).unwrap();
        assert_eq!("Europe/Vienna", json["timezone"]);
    }

    #[test]
    fn omit_missing_error_details() {
        let err = Error {
            http_status: 404,
            message: "City not found".to_string(),
            error: None,
        };
        assert_eq!(
            r#"{"http_status":404,"message":"City not found"}"#,
            serde_json::to_string(&err).unwrap()
        );
    }
}
