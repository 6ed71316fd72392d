#[macro_use]
extern crate log;

use std::sync::Arc;

use cityloc_core::gateways::{geocode::GeoCodingGateway, summary::SummaryGateway};
use cityloc_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    summary: Option<Arc<dyn SummaryGateway + Send + Sync>>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        geocoding,
        summary,
        version,
    )
    .await;
}
