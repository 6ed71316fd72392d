use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
};

use anyhow::anyhow;

use super::prelude::*;
use crate::gateways::{
    self, geocode::GeoCodingGateway, summary::SummaryGateway, Error as GatewayError,
};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    pub values: RefCell<HashMap<String, String>>,
    /// Stored right before the next insert to simulate a concurrent writer.
    pub insert_before_create: RefCell<Option<Location>>,
    pub unavailable: bool,
}

impl MockDb {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable {
            return Err(anyhow!("database is unavailable").into());
        }
        Ok(())
    }
}

impl LocationRepo for MockDb {
    fn get_location_by_key(&self, key: &CityKey) -> RepoResult<Location> {
        self.check_available()?;
        self.locations
            .borrow()
            .iter()
            .find(|l| &l.key == key)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn create_location(&self, location: &Location) -> RepoResult<()> {
        self.check_available()?;
        if let Some(concurrent) = self.insert_before_create.borrow_mut().take() {
            self.locations.borrow_mut().push(concurrent);
        }
        if self
            .locations
            .borrow()
            .iter()
            .any(|l| l.key == location.key)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.locations.borrow_mut().push(location.clone());
        Ok(())
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        self.check_available()?;
        Ok(self.locations.borrow().clone())
    }

    fn count_locations(&self) -> RepoResult<usize> {
        self.check_available()?;
        Ok(self.locations.borrow().len())
    }
}

impl KeyValueRepo for MockDb {
    fn get_value(&self, key: &str) -> RepoResult<Option<String>> {
        self.check_available()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.check_available()?;
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Answers queries from a fixed set of locations and records every call.
#[derive(Default)]
pub struct MockGeoGw {
    pub locations: HashMap<String, NewLocation>,
    pub queries: RefCell<Vec<String>>,
    pub unavailable: bool,
}

impl MockGeoGw {
    pub fn with(mut self, query: &str, location: NewLocation) -> Self {
        self.locations.insert(query.to_owned(), location);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn fetch_location(&self, query: &str) -> gateways::Result<Option<NewLocation>> {
        self.queries.borrow_mut().push(query.to_owned());
        if self.unavailable {
            return Err(GatewayError::Request(anyhow!("connection refused")));
        }
        Ok(self.locations.get(query).cloned())
    }
}

pub struct MockSummaryGw {
    summaries: HashMap<String, String>,
    unavailable: bool,
    pub calls: Cell<usize>,
}

impl MockSummaryGw {
    pub fn with(city: &str, summary: &str) -> Self {
        Self {
            summaries: [(city.to_owned(), summary.to_owned())].into(),
            unavailable: false,
            calls: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            summaries: HashMap::new(),
            unavailable: true,
            calls: Cell::new(0),
        }
    }
}

impl SummaryGateway for MockSummaryGw {
    fn fetch_summary(&self, city: &str) -> gateways::Result<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        if self.unavailable {
            return Err(GatewayError::InvalidResponse("garbage".into()));
        }
        Ok(self.summaries.get(city).cloned())
    }
}
