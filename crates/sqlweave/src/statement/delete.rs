use crate::expr::Expression;
use crate::hash::ValueHashMap;
use crate::reference::Order;
use crate::value::SqlValue;

/// Inputs of a DELETE statement. Everything but the table is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub condition: Option<Expression>,
    pub ordering: Vec<Order>,
    pub limit: Option<SqlValue>,
    /// Ignored unless `limit` is set.
    pub offset: Option<SqlValue>,
    pub hashes: ValueHashMap,
}

impl Delete {
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            condition: None,
            ordering: Vec::new(),
            limit: None,
            offset: None,
            hashes: ValueHashMap::new(),
        }
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

    pub fn offset(mut self, offset: impl Into<SqlValue>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn hashes(mut self, hashes: ValueHashMap) -> Self {
        self.hashes = hashes;
        self
    }
}
