use super::*;

impl LocationRepo for DbReadOnly<'_> {
    fn get_location_by_key(&self, key: &CityKey) -> Result<Location> {
        get_location_by_key(&mut self.conn.borrow_mut(), key)
    }
    fn create_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_err())
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl LocationRepo for DbReadWrite<'_> {
    fn get_location_by_key(&self, key: &CityKey) -> Result<Location> {
        get_location_by_key(&mut self.conn.borrow_mut(), key)
    }
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

// Every operation only holds a pooled connection for its own duration,
// i.e. no connection is blocked while waiting for a geocoding provider.
impl LocationRepo for Connections {
    fn get_location_by_key(&self, key: &CityKey) -> Result<Location> {
        self.shared()?.get_location_by_key(key)
    }
    fn create_location(&self, location: &Location) -> Result<()> {
        self.exclusive()?.create_location(location)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        self.shared()?.all_locations()
    }
    fn count_locations(&self) -> Result<usize> {
        self.shared()?.count_locations()
    }
}

fn get_location_by_key(conn: &mut SqliteConnection, key: &CityKey) -> Result<Location> {
    use schema::locations::dsl;
    schema::locations::table
        .filter(dsl::city_key.eq(key.as_str()))
        .first::<models::Location>(conn)
        .map_err(from_diesel_err)
        .and_then(load_location)
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    let Location {
        id,
        key,
        city,
        country,
        pos,
        summary,
        timezone,
        created_at,
    } = location;
    let (lat, lng) = pos.to_lat_lng_deg();
    let insertable = models::NewLocation {
        id: id.as_str(),
        city_key: key.as_str(),
        city,
        country,
        lat,
        lng,
        summary: summary.as_deref(),
        created_at: created_at.as_millis(),
        timezone: timezone.as_deref(),
    };
    diesel::insert_into(schema::locations::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    schema::locations::table
        .order_by(dsl::rowid)
        .load::<models::Location>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_location)
        .collect()
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    let count = schema::locations::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn load_location(from: models::Location) -> Result<Location> {
    let models::Location {
        rowid: _,
        id,
        city_key,
        city,
        country,
        lat,
        lng,
        summary,
        created_at,
        timezone,
    } = from;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of location {id}: {err}"))?;
    let created_at = Timestamp::try_from_millis(created_at).map_err(anyhow::Error::from)?;
    Ok(Location {
        id: id.into(),
        key: CityKey::from_normalized(city_key),
        city,
        country,
        pos,
        summary,
        timezone,
        created_at,
    })
}
