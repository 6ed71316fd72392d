use std::sync::Arc;

use cityloc_core::gateways::{geocode::GeoCodingGateway, summary::SummaryGateway};

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

pub struct Summary(pub Option<Arc<dyn SummaryGateway + Send + Sync>>);

pub struct Version(pub &'static str);
