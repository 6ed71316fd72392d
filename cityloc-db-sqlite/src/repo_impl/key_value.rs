use super::*;

impl KeyValueRepo for DbReadOnly<'_> {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        get_value(&mut self.conn.borrow_mut(), key)
    }
    fn set_value(&self, _key: &str, _value: &str) -> Result<()> {
        Err(read_only_err())
    }
}

impl KeyValueRepo for DbReadWrite<'_> {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        get_value(&mut self.conn.borrow_mut(), key)
    }
    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        set_value(&mut self.conn.borrow_mut(), key, value)
    }
}

impl KeyValueRepo for Connections {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.shared()?.get_value(key)
    }
    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.exclusive()?.set_value(key, value)
    }
}

fn get_value(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>> {
    use schema::key_values::dsl;
    schema::key_values::table
        .select(dsl::value)
        .filter(dsl::key.eq(key))
        .first::<String>(conn)
        .optional()
        .map_err(from_diesel_err)
}

fn set_value(conn: &mut SqliteConnection, key: &str, value: &str) -> Result<()> {
    diesel::replace_into(schema::key_values::table)
        .values(&models::KeyValue { key, value })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
