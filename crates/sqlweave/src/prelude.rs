//! Convenient imports for typical `sqlweave` usage.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//! ```

pub use crate::{
    ClauseBuilder, ColumnMap, Delete, Escaper, Expression, Insert, Order, Select, SqlBuilder,
    SqlError, SqlResult, SqlValue, StatementBuilder, TableRef, Term, Update,
};
pub use crate::{Join, JoinKind, ValueHashMap};
