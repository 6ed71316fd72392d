use std::collections::VecDeque;

use super::prelude::*;

/// Key of the persisted list of recent queries.
pub const RECENT_QUERIES_KEY: &str = "recent-queries";

pub const DEFAULT_RECENT_QUERIES_CAPACITY: usize = 5;

/// The most recently looked up cities, most recent first.
///
/// Each city is only contained once (compared case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQueries {
    capacity: usize,
    queries: VecDeque<String>,
}

impl RecentQueries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            queries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }
        let city_lowercase = city.to_lowercase();
        self.queries.retain(|q| q.to_lowercase() != city_lowercase);
        self.queries.push_front(city.to_owned());
        self.queries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    fn from_stored(capacity: usize, stored: Vec<String>) -> Self {
        let mut recent = Self::new(capacity);
        // Re-insert oldest first to restore order and limits
        for city in stored.iter().rev() {
            recent.push(city);
        }
        recent
    }
}

impl From<RecentQueries> for Vec<String> {
    fn from(from: RecentQueries) -> Self {
        from.queries.into()
    }
}

pub fn load_recent_queries<R>(repo: &R, capacity: usize) -> Result<RecentQueries>
where
    R: KeyValueRepo,
{
    let Some(value) = repo.get_value(RECENT_QUERIES_KEY)? else {
        return Ok(RecentQueries::new(capacity));
    };
    let stored = serde_json::from_str::<Vec<String>>(&value).unwrap_or_else(|err| {
        log::warn!("Discarding invalid list of recent queries: {err}");
        Vec::new()
    });
    Ok(RecentQueries::from_stored(capacity, stored))
}

pub fn remember_query<R>(repo: &R, capacity: usize, city: &str) -> Result<RecentQueries>
where
    R: KeyValueRepo,
{
    let mut recent = load_recent_queries(repo, capacity)?;
    recent.push(city);
    let value = serde_json::to_string(&recent.queries)
        .map_err(|err| RepoError::Other(err.into()))?;
    repo.set_value(RECENT_QUERIES_KEY, &value)?;
    Ok(recent)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn to_vec(recent: &RecentQueries) -> Vec<&str> {
        recent.iter().collect()
    }

    #[test]
    fn most_recent_first() {
        let mut recent = RecentQueries::new(5);
        recent.push("Paris");
        recent.push("Berlin");
        recent.push("Linz");
        assert_eq!(vec!["Linz", "Berlin", "Paris"], to_vec(&recent));
    }

    #[test]
    fn cap_number_of_entries() {
        let mut recent = RecentQueries::new(3);
        for city in ["A", "B", "C", "D", "E"] {
            recent.push(city);
        }
        assert_eq!(vec!["E", "D", "C"], to_vec(&recent));
    }

    #[test]
    fn move_duplicates_to_front() {
        let mut recent = RecentQueries::new(5);
        recent.push("Paris");
        recent.push("Berlin");
        recent.push("paris ");
        assert_eq!(vec!["paris", "Berlin"], to_vec(&recent));
    }

    #[test]
    fn ignore_blank_entries() {
        let mut recent = RecentQueries::new(5);
        recent.push("  ");
        assert!(recent.is_empty());
    }

    #[test]
    fn zero_capacity_keeps_a_single_entry() {
        let mut recent = RecentQueries::new(0);
        recent.push("Paris");
        recent.push("Berlin");
        assert_eq!(1, recent.capacity());
        assert_eq!(vec!["Berlin"], to_vec(&recent));
    }

    #[test]
    fn persist_recent_queries() {
        let db = MockDb::default();
        assert!(load_recent_queries(&db, 3).unwrap().is_empty());
        remember_query(&db, 3, "Paris").unwrap();
        remember_query(&db, 3, "Berlin").unwrap();
        let recent = load_recent_queries(&db, 3).unwrap();
        assert_eq!(vec!["Berlin", "Paris"], to_vec(&recent));
        assert_eq!(
            Some(r#"["Berlin","Paris"]"#),
            db.values.borrow().get(RECENT_QUERIES_KEY).map(String::as_str)
        );
    }

    #[test]
    fn shrink_stored_queries_to_smaller_capacity() {
        let db = MockDb::default();
        for city in ["A", "B", "C", "D", "E"] {
            remember_query(&db, 5, city).unwrap();
        }
        let recent = load_recent_queries(&db, 3).unwrap();
        assert_eq!(vec!["E", "D", "C"], to_vec(&recent));
    }

    #[test]
    fn discard_corrupted_queries() {
        let db = MockDb::default();
        db.set_value(RECENT_QUERIES_KEY, "{not json").unwrap();
        assert!(load_recent_queries(&db, 3).unwrap().is_empty());
        let recent = remember_query(&db, 3, "Paris").unwrap();
        assert_eq!(vec!["Paris"], to_vec(&recent));
    }
}
