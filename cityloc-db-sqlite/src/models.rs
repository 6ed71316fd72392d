#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = locations)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub city_key: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub summary: Option<&'a str>,
    pub created_at: i64,
    pub timezone: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Location {
    pub rowid: i64,
    pub id: String,
    pub city_key: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub summary: Option<String>,
    pub created_at: i64,
    pub timezone: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = key_values)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}
