use super::{Delete, Insert, Select, Update, assemble};
use crate::clause::ClauseBuilder;
use crate::container::Container;
use crate::error::{SqlError, SqlResult};
use crate::trace::{self, StatementKind};
use crate::value::SqlValue;

/// Builds complete SQL statements from their descriptors.
///
/// Preconditions (non-empty tables, rows, change-set) are checked before any
/// clause is built. A failed build returns no SQL.
pub trait StatementBuilder: ClauseBuilder {
    /// `SELECT <columns> <FROM> <JOIN> <WHERE> <GROUP BY> <HAVING> <ORDER BY> <LIMIT> <OFFSET>;`
    ///
    /// When the statement is grouped, the condition is emitted as HAVING
    /// instead of WHERE.
    fn build_select(&self, select: &Select) -> SqlResult<String> {
        if select.tables.is_empty() {
            return Err(SqlError::invalid_argument("No tables were given")
                .with_argument(&select.tables));
        }
        let hashes = &select.hashes;
        let columns = self.build_column_list(&select.columns, hashes)?;
        let from = self.build_from(&select.tables)?;
        let joins = self.build_joins(&select.joins, hashes)?;
        let mut where_clause = self.build_where(select.condition.as_ref(), hashes)?;
        let group_by = self.build_group_by(&select.grouping)?;
        let mut having = String::new();
        if !group_by.is_empty() {
            if let Some(condition) = where_clause.strip_prefix("WHERE ") {
                having = format!("HAVING {condition}");
            }
            where_clause.clear();
        }
        let order_by = self.build_order_by(&select.ordering)?;
        let (limit, offset) =
            limit_and_offset(self, select.limit.as_ref(), select.offset.as_ref())?;

        let sql = assemble(&[
            "SELECT",
            &columns,
            &from,
            &joins,
            &where_clause,
            &group_by,
            &having,
            &order_by,
            &limit,
            &offset,
        ]);
        trace::log_statement(StatementKind::Select, &sql, self.config().max_log_sql_length);
        Ok(sql)
    }

    /// `INSERT INTO <table> (<columns>) VALUES (...), (...);`
    fn build_insert<R>(&self, insert: &Insert<R>) -> SqlResult<String>
    where
        R: Container<SqlValue>,
    {
        if insert.rows.is_empty() {
            return Err(SqlError::invalid_argument("Row set cannot be empty"));
        }
        let table = self.escape_reference(&insert.table, None)?;
        let columns = self.escape_reference_list(&insert.columns)?;
        let values = insert
            .rows
            .iter()
            .map(|row| self.build_record_values(&insert.columns, row, &insert.hashes))
            .collect::<SqlResult<Vec<_>>>()?
            .join(", ");

        let sql = assemble(&[&format!("INSERT INTO {table} ({columns}) VALUES {values}")]);
        trace::log_statement(StatementKind::Insert, &sql, self.config().max_log_sql_length);
        Ok(sql)
    }

    /// `UPDATE <table> SET <changes> <WHERE> <ORDER BY> <LIMIT>;`
    fn build_update(&self, update: &Update) -> SqlResult<String> {
        if update.changes.is_empty() {
            return Err(SqlError::invalid_argument("Change set cannot be empty"));
        }
        let hashes = &update.hashes;
        let table = self.escape_reference(&update.table, None)?;
        let set = self.build_update_set(&update.changes, hashes)?;
        let where_clause = self.build_where(update.condition.as_ref(), hashes)?;
        let order_by = self.build_order_by(&update.ordering)?;
        let limit = match &update.limit {
            Some(limit) => self.build_limit(limit)?,
            None => String::new(),
        };

        let sql = assemble(&["UPDATE", &table, &set, &where_clause, &order_by, &limit]);
        trace::log_statement(StatementKind::Update, &sql, self.config().max_log_sql_length);
        Ok(sql)
    }

    /// `DELETE FROM <table> <WHERE> <ORDER BY> <LIMIT> <OFFSET>;`
    fn build_delete(&self, delete: &Delete) -> SqlResult<String> {
        let table = self.escape_reference(&delete.table, None)?;
        let where_clause = self.build_where(delete.condition.as_ref(), &delete.hashes)?;
        let order_by = self.build_order_by(&delete.ordering)?;
        let (limit, offset) =
            limit_and_offset(self, delete.limit.as_ref(), delete.offset.as_ref())?;

        let sql = assemble(&[
            "DELETE FROM",
            &table,
            &where_clause,
            &order_by,
            &limit,
            &offset,
        ]);
        trace::log_statement(StatementKind::Delete, &sql, self.config().max_log_sql_length);
        Ok(sql)
    }
}

/// LIMIT and OFFSET clauses; OFFSET is only emitted alongside a LIMIT.
fn limit_and_offset<B: ClauseBuilder>(
    builder: &B,
    limit: Option<&SqlValue>,
    offset: Option<&SqlValue>,
) -> SqlResult<(String, String)> {
    let Some(limit) = limit else {
        return Ok((String::new(), String::new()));
    };
    let limit = builder.build_limit(limit)?;
    let offset = match offset {
        Some(offset) => builder.build_offset(offset)?,
        None => String::new(),
    };
    Ok((limit, offset))
}
