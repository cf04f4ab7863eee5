use crate::expr::{Expression, Term};
use crate::hash::ValueHashMap;
use crate::reference::Order;
use crate::value::{ChangeValue, SqlValue};
use indexmap::IndexMap;

/// Inputs of an UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    /// Field → new value, in assignment order. Must not be empty.
    pub changes: IndexMap<String, ChangeValue>,
    pub condition: Option<Expression>,
    pub ordering: Vec<Order>,
    pub limit: Option<SqlValue>,
    pub hashes: ValueHashMap,
}

impl Update {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            changes: IndexMap::new(),
            condition: None,
            ordering: Vec::new(),
            limit: None,
            hashes: ValueHashMap::new(),
        }
    }

    /// Assign a literal value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.changes
            .insert(field.into(), ChangeValue::Value(value.into()));
        self
    }

    /// Assign a computed value.
    pub fn set_term(mut self, field: impl Into<String>, term: impl Into<Term>) -> Self {
        self.changes
            .insert(field.into(), ChangeValue::Term(term.into()));
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

    pub fn limit(mut self, limit: impl Into<SqlValue>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn hashes(mut self, hashes: ValueHashMap) -> Self {
        self.hashes = hashes;
        self
    }
}
