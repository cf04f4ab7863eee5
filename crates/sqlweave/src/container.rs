//! Keyed reads from record-like structures.
//!
//! Rows handed to INSERT and the field-column map are both read through
//! [`Container`], which separates "the key is not there" from "the read
//! itself failed". Builders treat the two very differently: a missing key may
//! have a fallback, a failed read never does.

use crate::value::SqlValue;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use thiserror::Error;

/// Failure of a [`Container`] read.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// No entry exists for the key.
    #[error("No entry found for key '{0}'")]
    NotFound(String),

    /// The entry could not be read.
    #[error("Container read failed: {0}")]
    Read(String),
}

impl ContainerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A keyed, read-only source of values.
pub trait Container<V> {
    fn get_value(&self, key: &str) -> Result<V, ContainerError>;
}

impl<V, C: Container<V> + ?Sized> Container<V> for &C {
    fn get_value(&self, key: &str) -> Result<V, ContainerError> {
        (**self).get_value(key)
    }
}

impl<V, T, S> Container<V> for HashMap<String, T, S>
where
    T: Clone + Into<V>,
    S: BuildHasher,
{
    fn get_value(&self, key: &str) -> Result<V, ContainerError> {
        self.get(key)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| ContainerError::NotFound(key.to_string()))
    }
}

impl<V, T> Container<V> for BTreeMap<String, T>
where
    T: Clone + Into<V>,
{
    fn get_value(&self, key: &str) -> Result<V, ContainerError> {
        self.get(key)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| ContainerError::NotFound(key.to_string()))
    }
}

impl<V, T, S> Container<V> for IndexMap<String, T, S>
where
    T: Clone + Into<V>,
    S: BuildHasher,
{
    fn get_value(&self, key: &str) -> Result<V, ContainerError> {
        self.get(key)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| ContainerError::NotFound(key.to_string()))
    }
}

impl Container<SqlValue> for serde_json::Map<String, serde_json::Value> {
    fn get_value(&self, key: &str) -> Result<SqlValue, ContainerError> {
        let value = self
            .get(key)
            .ok_or_else(|| ContainerError::NotFound(key.to_string()))?;
        SqlValue::try_from(value.clone())
            .map_err(|e| ContainerError::Read(format!("column '{key}': {e}")))
    }
}

impl Container<SqlValue> for serde_json::Value {
    fn get_value(&self, key: &str) -> Result<SqlValue, ContainerError> {
        match self {
            serde_json::Value::Object(map) => map.get_value(key),
            _ => Err(ContainerError::Read("value is not a JSON object".to_string())),
        }
    }
}
