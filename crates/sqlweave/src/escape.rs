//! Identifier escaping.
//!
//! Every table, alias and column name that reaches the output goes through an
//! [`Escaper`]. The stock implementation is [`Dialect`], which wraps names in
//! the dialect's identifier quote and doubles any embedded quote character:
//!
//! - `Dialect::MySql`: `` `users`.`id` ``
//! - `Dialect::Postgres` / `Dialect::Sqlite`: `"users"."id"`

use crate::error::{SqlError, SqlResult};
use crate::reference::Reference;
use serde::Deserialize;

/// SQL dialect, which decides how identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "postgres")]
    Postgres,
    #[serde(rename = "sqlite")]
    Sqlite,
}

impl Dialect {
    /// The identifier quote character.
    pub fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Postgres | Dialect::Sqlite => '"',
        }
    }
}

/// Quotes table and column references.
pub trait Escaper {
    /// Escape `name`, qualified by `qualifier` when one is given.
    ///
    /// An empty `name` is out of range. A `None` or empty qualifier yields the
    /// unqualified form.
    fn escape_reference(&self, name: &str, qualifier: Option<&str>) -> SqlResult<String>;

    /// Escape a list of references into a comma-separated string.
    ///
    /// An entity-qualified reference with an empty entity is escaped by its
    /// field alone; one with an empty field is escaped by its entity alone.
    /// An empty list yields an empty string.
    fn escape_reference_list<'a, I>(&self, references: I) -> SqlResult<String>
    where
        I: IntoIterator<Item = &'a Reference>,
        Self: Sized,
    {
        let parts = references
            .into_iter()
            .map(|reference| match reference {
                Reference::Name(name) => self.escape_reference(name, None),
                Reference::EntityField(ef) if ef.field.is_empty() => {
                    self.escape_reference(&ef.entity, None)
                }
                Reference::EntityField(ef) => self.escape_reference(&ef.field, Some(&ef.entity)),
            })
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    /// Escape a list of plain names: `` `a`, `b`, `c` ``.
    fn escape_reference_array<S: AsRef<str>>(&self, names: &[S]) -> SqlResult<String>
    where
        Self: Sized,
    {
        let parts = names
            .iter()
            .map(|name| self.escape_reference(name.as_ref(), None))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(parts.join(", "))
    }
}

impl Escaper for Dialect {
    fn escape_reference(&self, name: &str, qualifier: Option<&str>) -> SqlResult<String> {
        if name.is_empty() {
            return Err(SqlError::out_of_range("Reference cannot be empty").with_argument(name));
        }
        let q = self.quote_char();
        let mut out = String::with_capacity(name.len() + 2);
        if let Some(prefix) = qualifier.filter(|p| !p.is_empty()) {
            write_quoted(&mut out, prefix, q)?;
            out.push('.');
        }
        write_quoted(&mut out, name, q)?;
        Ok(out)
    }
}

fn write_quoted(out: &mut String, name: &str, q: char) -> SqlResult<()> {
    if name.contains('\0') {
        return Err(
            SqlError::invalid_argument("Identifier cannot contain NUL character")
                .with_argument(name),
        );
    }
    out.push(q);
    for ch in name.chars() {
        if ch == q {
            out.push(q);
        }
        out.push(ch);
    }
    out.push(q);
    Ok(())
}
