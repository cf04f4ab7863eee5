//! Clause builders.
//!
//! Each method produces one syntactic fragment of a statement, already
//! prefixed with its keyword (`FROM `, `WHERE `, ...). Optional clauses
//! return an empty string when there is nothing to emit, which lets the
//! statement builders drop them when assembling the final SQL.

use crate::column_map::{ColumnMap, ColumnResolver, ColumnSpec};
use crate::config::BuilderConfig;
use crate::container::{Container, ContainerError};
use crate::error::{ErrorKind, SqlError, SqlResult};
use crate::escape::Escaper;
use crate::expr::Expression;
use crate::hash::ValueHashMap;
use crate::join::{Join, JoinKind, JoinTypeResolver};
use crate::reference::{Order, Reference, TableRef};
use crate::render::ExpressionRenderer;
use crate::trace;
use crate::value::{ChangeValue, SqlValue};
use indexmap::IndexMap;

/// Builds individual SQL clauses.
///
/// All methods have default implementations in terms of the supertraits;
/// implementors only provide [`config`](ClauseBuilder::config).
pub trait ClauseBuilder:
    Escaper + ColumnResolver + ExpressionRenderer + JoinTypeResolver + Sized
{
    fn config(&self) -> &BuilderConfig;

    /// `` `col` AS `alias`, ... `` or `*` for an empty map.
    fn build_column_list(&self, columns: &ColumnMap, hashes: &ValueHashMap) -> SqlResult<String> {
        if columns.is_empty() {
            return Ok("*".to_string());
        }
        let mut parts = Vec::with_capacity(columns.len());
        for (alias, spec) in columns.iter() {
            let column = match spec {
                ColumnSpec::Term(term) => self.render_term(term, hashes)?,
                ColumnSpec::EntityField(ef) => self.escape_reference(&ef.field, Some(&ef.entity))?,
                ColumnSpec::Name(name) => self.escape_reference(name, None)?,
            };
            parts.push(format!("{column} AS {}", self.escape_reference(alias, None)?));
        }
        Ok(parts.join(", "))
    }

    /// `FROM `t` AS `a`, ...`; empty when no tables are given.
    fn build_from(&self, tables: &[TableRef]) -> SqlResult<String> {
        if tables.is_empty() {
            return Ok(String::new());
        }
        let parts = tables
            .iter()
            .map(|t| escape_table(self, t))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(format!("FROM {}", parts.join(", ")))
    }

    /// `<TYPE> JOIN <table> ON <condition> ...`
    ///
    /// A `CROSS` join takes no `ON`; its condition is ignored.
    fn build_joins(&self, joins: &[Join], hashes: &ValueHashMap) -> SqlResult<String> {
        let mut parts = Vec::with_capacity(joins.len());
        for join in joins {
            let table = escape_table(self, &join.table)?;
            let kind = match join.kind {
                Some(kind) => kind.as_sql().to_string(),
                None => self.join_type(&join.condition)?,
            };
            if kind.eq_ignore_ascii_case(JoinKind::Cross.as_sql()) {
                parts.push(format!("{kind} JOIN {table}"));
                continue;
            }
            let condition = self.render_expression(&join.condition, hashes)?;
            parts.push(format!("{kind} JOIN {table} ON {condition}"));
        }
        Ok(parts.join(" "))
    }

    fn build_where(
        &self,
        condition: Option<&Expression>,
        hashes: &ValueHashMap,
    ) -> SqlResult<String> {
        match condition {
            Some(condition) => Ok(format!("WHERE {}", self.render_expression(condition, hashes)?)),
            None => Ok(String::new()),
        }
    }

    /// `GROUP BY ...`
    ///
    /// Fields without a column mapping are used as-is.
    fn build_group_by(&self, grouping: &[Reference]) -> SqlResult<String> {
        if grouping.is_empty() {
            return Ok(String::new());
        }
        let invalid = |element: &Reference, e: SqlError| match e.kind() {
            ErrorKind::InvalidArgument | ErrorKind::OutOfRange => {
                SqlError::out_of_range("An element in the grouping list is invalid")
                    .with_argument(element)
                    .with_source(e)
            }
            _ => e,
        };
        let mut parts = Vec::with_capacity(grouping.len());
        for element in grouping {
            let field = element.field();
            let column = resolve_or_fallback(self, "GROUP BY", field)
                .map_err(|e| invalid(element, e))?;
            let escaped = self
                .escape_reference(&column, element.entity())
                .map_err(|e| invalid(element, e))?;
            parts.push(escaped);
        }
        Ok(format!("GROUP BY {}", parts.join(", ")))
    }

    /// `ORDER BY ... ASC|DESC, ...`
    ///
    /// Fields without a column mapping are used as-is.
    fn build_order_by(&self, ordering: &[Order]) -> SqlResult<String> {
        if ordering.is_empty() {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(ordering.len());
        for order in ordering {
            let column = resolve_or_fallback(self, "ORDER BY", &order.field)?;
            let escaped = self
                .escape_reference(&column, order.entity.as_deref())
                .map_err(|e| {
                    SqlError::out_of_range("The ordering list contains an invalid element")
                        .with_argument(ordering)
                        .with_source(e)
                })?;
            parts.push(format!("{escaped} {}", order.direction()));
        }
        Ok(format!("ORDER BY {}", parts.join(", ")))
    }

    fn build_limit(&self, limit: &SqlValue) -> SqlResult<String> {
        let n = limit.normalize_int()?;
        if n < 0 {
            return Err(SqlError::out_of_range("Limit cannot be negative").with_argument(n));
        }
        Ok(format!("LIMIT {n}"))
    }

    fn build_offset(&self, offset: &SqlValue) -> SqlResult<String> {
        let n = offset.normalize_int()?;
        if n < 0 {
            return Err(SqlError::out_of_range("Offset cannot be negative").with_argument(n));
        }
        Ok(format!("OFFSET {n}"))
    }

    /// `SET `field` = value, ...`
    fn build_update_set(
        &self,
        changes: &IndexMap<String, ChangeValue>,
        hashes: &ValueHashMap,
    ) -> SqlResult<String> {
        if changes.is_empty() {
            return Ok(String::new());
        }
        let quote = self.config().string_quote;
        let mut parts = Vec::with_capacity(changes.len());
        for (field, change) in changes {
            let value = match change {
                ChangeValue::Value(v) => hashes.substitute(v, quote)?,
                ChangeValue::Term(t) => self.render_term(t, hashes)?,
            };
            parts.push(format!("{} = {value}", self.escape_reference(field, None)?));
        }
        Ok(format!("SET {}", parts.join(", ")))
    }

    /// `(v1, v2, ...)` for one row, in column order.
    ///
    /// Columns missing from the row are written as `DEFAULT`.
    fn build_record_values<R>(
        &self,
        columns: &[Reference],
        record: &R,
        hashes: &ValueHashMap,
    ) -> SqlResult<String>
    where
        R: Container<SqlValue> + ?Sized,
    {
        let quote = self.config().string_quote;
        let mut parts = Vec::with_capacity(columns.len());
        for column in columns {
            let field = column.field();
            match record.get_value(field) {
                Ok(value) => parts.push(hashes.substitute(&value, quote)?),
                Err(ContainerError::NotFound(_)) => {
                    trace::log_fallback("VALUES", field, "DEFAULT");
                    parts.push("DEFAULT".to_string());
                }
                Err(e) => {
                    return Err(SqlError::internal(
                        "A problem occurred while reading a row value",
                        e,
                    ));
                }
            }
        }
        Ok(format!("({})", parts.join(", ")))
    }
}

fn escape_table<E: Escaper + ?Sized>(escaper: &E, table: &TableRef) -> SqlResult<String> {
    let name = escaper.escape_reference(&table.table, None)?;
    match table.alias.as_deref() {
        Some(alias) if !alias.is_empty() => {
            Ok(format!("{name} AS {}", escaper.escape_reference(alias, None)?))
        }
        _ => Ok(name),
    }
}

/// Resolve `field` to its column, falling back to `field` itself when the
/// map has no entry for it.
fn resolve_or_fallback<C: ColumnResolver + ?Sized>(
    resolver: &C,
    clause: &'static str,
    field: &str,
) -> SqlResult<String> {
    match resolver.column_name(field) {
        Ok(column) => Ok(column),
        Err(e) if e.is_out_of_bounds() => {
            trace::log_fallback(clause, field, field);
            Ok(field.to_string())
        }
        Err(e) => Err(e),
    }
}
