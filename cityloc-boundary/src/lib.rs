use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id         : String,
    pub city       : String,
    pub country    : String,
    pub latitude   : f64,
    pub longitude  : f64,
    pub summary    : Option<String>,
    pub created_at : i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
