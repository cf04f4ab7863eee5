//! Value → placeholder substitution.

use crate::error::SqlResult;
use crate::value::{SqlValue, StringQuote};
use indexmap::IndexMap;

/// Maps the normalized string form of literal values to pre-assigned
/// placeholder tokens.
///
/// Literals with an entry are written as their placeholder; the rest are
/// inlined as sanitized SQL literals.
///
/// # Example
/// ```ignore
/// let mut hashes = ValueHashMap::new();
/// hashes.insert_value(18, ":p1")?;
/// assert_eq!(hashes.substitute(&SqlValue::from(18), StringQuote::Double)?, ":p1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueHashMap {
    entries: IndexMap<String, String>,
}

impl ValueHashMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an already-normalized key to a placeholder.
    pub fn insert(&mut self, key: impl Into<String>, hash: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), hash.into());
        self
    }

    /// Map a value (by its normalized string form) to a placeholder.
    pub fn insert_value(
        &mut self,
        value: impl Into<SqlValue>,
        hash: impl Into<String>,
    ) -> SqlResult<&mut Self> {
        let key = value.into().normalize_string()?;
        self.entries.insert(key, hash.into());
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The placeholder for `value`, or its sanitized literal.
    ///
    /// `NULL` is never looked up.
    pub fn substitute(&self, value: &SqlValue, quote: StringQuote) -> SqlResult<String> {
        if value.is_null() {
            return value.sanitize(quote);
        }
        let key = value.normalize_string()?;
        match self.get(&key) {
            Some(hash) => Ok(hash.to_string()),
            None => value.sanitize(quote),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValueHashMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
