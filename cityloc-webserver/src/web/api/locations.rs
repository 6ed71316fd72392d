use super::*;

#[get("/locations/<city>")]
pub async fn get_location(
    connections: sqlite::Connections,
    geocoding: &State<GeoCoding>,
    summary: &State<Summary>,
    cfg: &State<Cfg>,
    city: &str,
) -> Result<JsonLocation> {
    let geocoding = Arc::clone(&geocoding.0);
    let summary = summary.0.clone();
    let history_capacity = cfg.history_capacity;
    let query = city.to_owned();
    // Both the database and the gateways are blocking
    let location = spawn_blocking(move || -> result::Result<_, Error> {
        let summary = summary
            .as_deref()
            .map(|gateway| gateway as &dyn SummaryGateway);
        let location =
            usecases::lookup_location(&*connections, &*geocoding, summary, &query)?;
        if let Err(err) = remember_query(&connections, history_capacity, &location.city) {
            warn!("Failed to remember query '{}': {err}", location.city);
        }
        Ok(location)
    })
    .await??;
    Ok(Json(location.into()))
}

#[get("/history")]
pub fn get_history(connections: sqlite::Connections, cfg: &State<Cfg>) -> Result<Vec<String>> {
    let recent_queries = usecases::load_recent_queries(&*connections, cfg.history_capacity)?;
    Ok(Json(recent_queries.into()))
}

fn remember_query(
    connections: &sqlite::Connections,
    capacity: usize,
    city: &str,
) -> anyhow::Result<()> {
    // Read and write the list while holding the same write lock
    let db = connections.exclusive()?;
    usecases::remember_query(&db, capacity, city)?;
    Ok(())
}
