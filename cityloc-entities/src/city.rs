use std::fmt;

/// Normalized lookup key of a city query.
///
/// Queries are trimmed, inner runs of whitespace are collapsed into
/// a single space and the result is lower-cased, i.e. `"  New   YORK "`
/// and `"new york"` share the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey(String);

impl CityKey {
    /// Returns `None` if the query contains nothing but whitespace.
    pub fn from_query(query: &str) -> Option<Self> {
        let key = query
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Wraps an already normalized key, e.g. loaded from the database.
    pub fn from_normalized(key: String) -> Self {
        debug_assert_eq!(Self::from_query(&key).as_ref().map(Self::as_str), Some(key.as_str()));
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CityKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<CityKey> for String {
    fn from(from: CityKey) -> Self {
        from.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
