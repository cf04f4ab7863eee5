//! SQL debug logging.
//!
//! Events go to the `sqlweave.sql` target. Enable via the crate feature:
//! `sqlweave = { features = ["tracing"] }` (on by default). Without the
//! feature every function here is a no-op.

/// Statement kind, as logged in the `statement` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

/// The longest prefix of `sql` that fits in `max_bytes`.
///
/// Literals may hold multi-byte text, and slicing a `&str` inside a char
/// panics, so the cut moves back to the start of the straddling char.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    let end = sql
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql(sql: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

/// Log a finished statement.
#[cfg(feature = "tracing")]
pub(crate) fn log_statement(kind: StatementKind, sql: &str, max_len: Option<usize>) {
    tracing::debug!(
        target: "sqlweave.sql",
        statement = kind.as_str(),
        sql = %truncate_sql(sql, max_len),
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_statement(_kind: StatementKind, _sql: &str, _max_len: Option<usize>) {}

/// Log a non-fatal fallback taken while building a clause.
#[cfg(feature = "tracing")]
pub(crate) fn log_fallback(clause: &'static str, field: &str, used: &str) {
    tracing::trace!(target: "sqlweave.sql", clause, field, used, "fallback");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_fallback(_clause: &'static str, _field: &str, _used: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("héllo", 2), "h");
        assert_eq!(truncate_sql_bytes("héllo", 3), "hé");
        assert_eq!(truncate_sql_bytes("élan", 1), "");
        assert_eq!(truncate_sql("SELECT * FROM t", Some(6)), "SELECT...");
        assert_eq!(truncate_sql("SELECT * FROM t", None), "SELECT * FROM t");
    }
}
