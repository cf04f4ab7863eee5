//! Builder configuration.

use crate::error::{SqlError, SqlResult};
use crate::join::JoinKind;
use serde::Deserialize;

pub use crate::escape::Dialect;
pub use crate::value::StringQuote;

/// Settings shared by every statement a [`SqlBuilder`](crate::SqlBuilder)
/// produces.
///
/// Can be assembled with the `with_*` setters or loaded from TOML:
///
/// ```toml
/// dialect = "postgres"
/// string_quote = "single"
/// default_join = "left"
/// max_log_sql_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Identifier quoting rules.
    pub dialect: Dialect,
    /// Quote character for inline string literals.
    pub string_quote: StringQuote,
    /// Join type used when the builder has no other resolver.
    pub default_join: JoinKind,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            string_quote: StringQuote::Double,
            default_join: JoinKind::Inner,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        toml::from_str(raw).map_err(|e| {
            SqlError::invalid_argument(format!("failed to parse builder config: {e}"))
        })
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_string_quote(mut self, quote: StringQuote) -> Self {
        self.string_quote = quote;
        self
    }

    pub fn with_default_join(mut self, kind: JoinKind) -> Self {
        self.default_join = kind;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Log SQL untruncated.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }
}
