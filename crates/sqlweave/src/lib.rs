//! # sqlweave
//!
//! Assembles SQL statement strings from structured inputs.
//!
//! ## Features
//!
//! - **Statement builders**: SELECT, INSERT, UPDATE and DELETE from plain
//!   descriptor structs ([`Select`], [`Insert`], [`Update`], [`Delete`])
//! - **Field → column mapping**: application field names are resolved to
//!   physical columns through a [`ColumnMap`] (or any [`Container`])
//! - **Expression templates**: logical expressions render through a
//!   [`TemplateRegistry`], extensible with closures
//! - **Placeholders**: literal values are swapped for pre-assigned tokens via a
//!   [`ValueHashMap`]; everything else is inlined as a quoted literal
//! - **Dialects**: MySQL backtick quoting by default, double quotes for
//!   Postgres and SQLite ([`BuilderConfig`])
//!
//! No I/O happens here: the output is a string, ready for whichever driver
//! executes it.
//!
//! ## Example
//!
//! ```ignore
//! use sqlweave::{Expression, Order, Select, SqlBuilder, StatementBuilder, Term};
//!
//! let builder = SqlBuilder::new();
//! let select = Select::from_table("users")
//!     .condition(Expression::eq(Term::field("status"), Term::value("active")))
//!     .order_by(Order::desc("created_at"))
//!     .limit(10);
//!
//! assert_eq!(
//!     builder.build_select(&select)?,
//!     r#"SELECT * FROM `users` WHERE `status` = "active" ORDER BY `created_at` DESC LIMIT 10;"#
//! );
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature every built statement is emitted as a
//! `DEBUG` event on the `sqlweave.sql` target.

pub mod clause;
pub mod column_map;
pub mod config;
pub mod container;
pub mod error;
pub mod escape;
pub mod expr;
pub mod hash;
pub mod join;
pub mod prelude;
pub mod reference;
pub mod render;
pub mod sql_builder;
pub mod statement;
pub mod template;
pub mod trace;
pub mod value;

pub use clause::ClauseBuilder;
pub use column_map::{ColumnMap, ColumnResolver, ColumnSpec};
pub use config::BuilderConfig;
pub use container::{Container, ContainerError};
pub use error::{ErrorKind, SqlError, SqlResult};
pub use escape::{Dialect, Escaper};
pub use expr::{Expression, Term};
pub use hash::ValueHashMap;
pub use join::{Join, JoinKind, JoinTypeResolver};
pub use reference::{EntityField, Order, Reference, TableRef};
pub use render::{ExpressionRenderer, RenderContext, Renderer};
pub use sql_builder::SqlBuilder;
pub use statement::{Delete, Insert, Row, Select, StatementBuilder, Update};
pub use template::{SqlTemplate, TemplateRegistry};
pub use trace::StatementKind;
pub use value::{ChangeValue, SqlValue, StringQuote};
