use crate::hash::ValueHashMap;
use crate::reference::Reference;
use crate::value::SqlValue;
use indexmap::IndexMap;

/// A row keyed by column name.
pub type Row = IndexMap<String, SqlValue>;

/// Inputs of an INSERT statement.
///
/// Rows can be any [`Container`](crate::Container) of values; columns a
/// row has no value for are written as `DEFAULT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert<R = Row> {
    pub table: String,
    /// Column order of the VALUES tuples.
    pub columns: Vec<Reference>,
    /// At least one row is required.
    pub rows: Vec<R>,
    pub hashes: ValueHashMap,
}

impl<R> Insert<R> {
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            hashes: ValueHashMap::new(),
        }
    }

    pub fn column(mut self, column: impl Into<Reference>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Reference>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn row(mut self, row: R) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn hashes(mut self, hashes: ValueHashMap) -> Self {
        self.hashes = hashes;
        self
    }
}
