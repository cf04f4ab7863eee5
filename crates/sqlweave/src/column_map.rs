//! Field → column mapping.
//!
//! A [`ColumnMap`] maps application-level field names to the physical column
//! they are stored in. The same shape doubles as a SELECT column list, where
//! the keys are output aliases.

use crate::container::{Container, ContainerError};
use crate::error::{SqlError, SqlResult};
use crate::expr::{Expression, Term};
use crate::reference::EntityField;
use indexmap::IndexMap;

/// What a field (or output alias) maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSpec {
    /// A plain column name.
    Name(String),
    /// An entity-qualified column.
    EntityField(EntityField),
    /// A computed expression.
    Term(Term),
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::Name(name)
    }
}

impl From<EntityField> for ColumnSpec {
    fn from(ef: EntityField) -> Self {
        ColumnSpec::EntityField(ef)
    }
}

impl From<Term> for ColumnSpec {
    fn from(t: Term) -> Self {
        ColumnSpec::Term(t)
    }
}

impl From<Expression> for ColumnSpec {
    fn from(e: Expression) -> Self {
        ColumnSpec::Term(Term::Expression(e))
    }
}

/// Ordered map from field name to [`ColumnSpec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    entries: IndexMap<String, ColumnSpec>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, column: impl Into<ColumnSpec>) -> Self {
        self.insert(field, column);
        self
    }

    /// Map `field` to `column`, replacing (in place) any previous mapping.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        column: impl Into<ColumnSpec>,
    ) -> Option<ColumnSpec> {
        self.entries.insert(field.into(), column.into())
    }

    pub fn get(&self, field: &str) -> Option<&ColumnSpec> {
        self.entries.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names, in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Column descriptors, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.entries.values()
    }
}

impl<K: Into<String>, V: Into<ColumnSpec>> FromIterator<(K, V)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ColumnMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Container<ColumnSpec> for ColumnMap {
    fn get_value(&self, key: &str) -> Result<ColumnSpec, ContainerError> {
        self.get(key)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(key.to_string()))
    }
}

/// Resolves field names to column names.
pub trait ColumnResolver {
    /// The field-column map lookups are made against.
    fn field_column_map(&self) -> &dyn Container<ColumnSpec>;

    /// Resolve `field` to its column name.
    ///
    /// Only the field portion of an entity-qualified descriptor is returned.
    ///
    /// # Errors
    /// - `OutOfBounds` when the map has no entry for `field`.
    /// - `Internal` when the map could not be read.
    /// - `InvalidArgument` when the field maps to an expression.
    fn column_name(&self, field: &str) -> SqlResult<String> {
        match self.field_column_map().get_value(field) {
            Ok(ColumnSpec::Name(name)) => Ok(name),
            Ok(ColumnSpec::EntityField(ef)) => Ok(ef.field),
            Ok(ColumnSpec::Term(_)) => Err(SqlError::invalid_argument(format!(
                "Column for field \"{field}\" is an expression, not a column name"
            ))
            .with_argument(field)),
            Err(e @ ContainerError::NotFound(_)) => Err(SqlError::out_of_bounds(format!(
                "No column name found for field \"{field}\""
            ))
            .with_argument(field)
            .with_source(e)),
            Err(e) => Err(SqlError::internal(
                "A problem occurred while trying to retrieve the column name",
                e,
            )),
        }
    }
}

impl ColumnResolver for ColumnMap {
    fn field_column_map(&self) -> &dyn Container<ColumnSpec> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Container<ColumnSpec> for Broken {
        fn get_value(&self, _key: &str) -> Result<ColumnSpec, ContainerError> {
            Err(ContainerError::Read("backing store unavailable".into()))
        }
    }

    impl ColumnResolver for Broken {
        fn field_column_map(&self) -> &dyn Container<ColumnSpec> {
            self
        }
    }

    fn map() -> ColumnMap {
        ColumnMap::new()
            .with("name", "user_name")
            .with("author", EntityField::new("posts", "author_id"))
            .with("total", Expression::new("count", [Term::field("id")]))
    }

    #[test]
    fn resolves_plain_column() {
        assert_eq!(map().column_name("name").unwrap(), "user_name");
    }

    #[test]
    fn resolves_field_part_of_entity_field() {
        assert_eq!(map().column_name("author").unwrap(), "author_id");
    }

    #[test]
    fn missing_field_is_out_of_bounds() {
        let err = map().column_name("missing").unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.argument(), Some("\"missing\""));
    }

    #[test]
    fn expression_is_not_a_column_name() {
        assert!(map().column_name("total").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn read_failure_is_internal() {
        assert!(Broken.column_name("x").unwrap_err().is_internal());
    }

    #[test]
    fn names_keep_insertion_order() {
        let m = map();
        assert_eq!(m.field_names().collect::<Vec<_>>(), ["name", "author", "total"]);
        assert_eq!(m.column_names().count(), 3);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut m = map();
        let old = m.insert("name", "display_name");
        assert_eq!(old, Some(ColumnSpec::from("user_name")));
        assert_eq!(m.field_names().next(), Some("name"));
        assert_eq!(m.len(), 3);
    }
}
