//! JOIN types and the capability that picks them.

use crate::error::SqlResult;
use crate::expr::Expression;
use crate::reference::TableRef;
use serde::Deserialize;

/// SQL join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    /// The keyword placed before `JOIN`.
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL OUTER",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// Decides the join keyword for a join condition.
pub trait JoinTypeResolver {
    fn join_type(&self, condition: &Expression) -> SqlResult<String>;
}

/// Every join gets the same type.
impl JoinTypeResolver for JoinKind {
    fn join_type(&self, _condition: &Expression) -> SqlResult<String> {
        Ok(self.as_sql().to_string())
    }
}

impl<F> JoinTypeResolver for F
where
    F: Fn(&Expression) -> JoinKind,
{
    fn join_type(&self, condition: &Expression) -> SqlResult<String> {
        Ok(self(condition).as_sql().to_string())
    }
}

/// One joined table.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableRef,
    pub condition: Expression,
    /// Overrides the builder's [`JoinTypeResolver`] when set.
    pub kind: Option<JoinKind>,
}

impl Join {
    /// A join whose type is left to the resolver.
    pub fn new(table: impl Into<TableRef>, condition: Expression) -> Self {
        Self {
            table: table.into(),
            condition,
            kind: None,
        }
    }

    pub fn inner(table: impl Into<TableRef>, condition: Expression) -> Self {
        Self::new(table, condition).kind(JoinKind::Inner)
    }

    pub fn left(table: impl Into<TableRef>, condition: Expression) -> Self {
        Self::new(table, condition).kind(JoinKind::Left)
    }

    pub fn right(table: impl Into<TableRef>, condition: Expression) -> Self {
        Self::new(table, condition).kind(JoinKind::Right)
    }

    pub fn kind(mut self, kind: JoinKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
