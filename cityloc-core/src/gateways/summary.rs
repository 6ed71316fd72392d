use super::Result;

pub trait SummaryGateway {
    /// A short descriptive text about a city, if available.
    fn fetch_summary(&self, city: &str) -> Result<Option<String>>;
}
