use crate::column_map::{ColumnMap, ColumnSpec};
use crate::expr::Expression;
use crate::hash::ValueHashMap;
use crate::join::Join;
use crate::reference::{Order, Reference, TableRef};
use crate::value::SqlValue;

/// Inputs of a SELECT statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    /// Output alias → column; empty selects `*`.
    pub columns: ColumnMap,
    /// At least one table is required.
    pub tables: Vec<TableRef>,
    pub joins: Vec<Join>,
    pub condition: Option<Expression>,
    pub ordering: Vec<Order>,
    pub limit: Option<SqlValue>,
    /// Ignored unless `limit` is set.
    pub offset: Option<SqlValue>,
    pub grouping: Vec<Reference>,
    pub hashes: ValueHashMap,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a SELECT from one table.
    pub fn from_table(table: impl Into<TableRef>) -> Self {
        Self::new().table(table)
    }

    pub fn table(mut self, table: impl Into<TableRef>) -> Self {
        self.tables.push(table.into());
        self
    }

    /// Add an output column under `alias`.
    pub fn column(mut self, alias: impl Into<String>, column: impl Into<ColumnSpec>) -> Self {
        self.columns.insert(alias, column);
        self
    }

    pub fn columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn order_by(mut self, order: Order) -> Self {
        self.ordering.push(order);
        self
    }

    pub fn group_by(mut self, reference: impl Into<Reference>) -> Self {
        self.grouping.push(reference.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<SqlValue>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<SqlValue>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn hashes(mut self, hashes: ValueHashMap) -> Self {
        self.hashes = hashes;
        self
    }
}
