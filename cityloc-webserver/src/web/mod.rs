use std::sync::Arc;

use cityloc_core::{
    gateways::{geocode::GeoCodingGateway, summary::SummaryGateway},
    repositories::LocationRepo,
    usecases::DEFAULT_RECENT_QUERIES_CAPACITY,
};

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Number of recently looked up cities that are remembered.
    pub history_capacity: usize,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_RECENT_QUERIES_CAPACITY,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    summary: Option<Arc<dyn SummaryGateway + Send + Sync>>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { geocoding, summary } = gateways;

    match db.count_locations() {
        Ok(count) => info!("{count} location(s) in database"),
        Err(err) => warn!("Unable to count stored locations: {err}"),
    }
    if summary.is_none() {
        info!("Summary enrichment is disabled");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(guards::GeoCoding(geocoding))
        .manage(guards::Summary(summary))
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    summary: Option<Arc<dyn SummaryGateway + Send + Sync>>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { geocoding, summary };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
