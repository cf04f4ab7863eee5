//! Scalar values and their SQL literal forms.
//!
//! [`SqlValue`] is what callers put into rows, change-sets and expression
//! leaves. It knows how to normalize itself to the string key used by a
//! [`ValueHashMap`](crate::ValueHashMap) and how to render itself as an
//! inline SQL literal when no placeholder exists.

use crate::error::{SqlError, SqlResult};
use crate::expr::Term;
use serde::Deserialize;
use std::fmt;

/// Quote character used for inline string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringQuote {
    /// `"text"` (MySQL-style).
    #[default]
    Double,
    /// `'text'` (standard SQL).
    Single,
}

impl StringQuote {
    pub fn as_char(self) -> char {
        match self {
            StringQuote::Double => '"',
            StringQuote::Single => '\'',
        }
    }
}

/// A scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Canonical string form, used as the key into a value-hash map.
    ///
    /// `Null` has no string form.
    pub fn normalize_string(&self) -> SqlResult<String> {
        match self {
            SqlValue::Null => Err(SqlError::invalid_argument(
                "NULL cannot be normalized to a string",
            )),
            SqlValue::Bool(b) => Ok(b.to_string()),
            SqlValue::Int(i) => Ok(i.to_string()),
            SqlValue::Float(f) => finite(*f).map(|f| f.to_string()),
            SqlValue::Text(s) => Ok(s.clone()),
        }
    }

    /// Coerce to a whole number.
    pub fn normalize_int(&self) -> SqlResult<i64> {
        match self {
            SqlValue::Int(i) => Ok(*i),
            SqlValue::Bool(b) => Ok(i64::from(*b)),
            SqlValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(SqlError::invalid_argument("Number does not fit in an integer")
                        .with_argument(f))
                }
            }
            SqlValue::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                SqlError::invalid_argument("Text is not a whole number").with_argument(s)
            }),
            other => {
                Err(SqlError::invalid_argument("Value is not a whole number").with_argument(other))
            }
        }
    }

    /// Render as an inline SQL literal.
    ///
    /// NaN and the infinities have no literal form in any dialect.
    pub fn sanitize(&self, quote: StringQuote) -> SqlResult<String> {
        Ok(match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(true) => "TRUE".to_string(),
            SqlValue::Bool(false) => "FALSE".to_string(),
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Float(f) => finite(*f)?.to_string(),
            SqlValue::Text(s) => quote_literal(s, quote.as_char()),
        })
    }
}

fn finite(f: f64) -> SqlResult<f64> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(SqlError::invalid_argument("Number is not finite").with_argument(f))
    }
}

fn quote_literal(s: &str, q: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for ch in s.chars() {
        if ch == q {
            out.push(q);
        }
        out.push(ch);
    }
    out.push(q);
    out
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(b) => write!(f, "{b}"),
            SqlValue::Int(i) => write!(f, "{i}"),
            SqlValue::Float(x) => write!(f, "{x}"),
            SqlValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for SqlValue {
            fn from(v: $t) -> Self {
                SqlValue::Int(i64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::Float(f64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&String> for SqlValue {
    fn from(v: &String) -> Self {
        SqlValue::Text(v.clone())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for SqlValue {
    type Error = SqlError;

    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(SqlValue::Null),
            Value::Bool(b) => Ok(SqlValue::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(SqlValue::Int(i)),
                None => n.as_f64().map(SqlValue::Float).ok_or_else(|| {
                    SqlError::invalid_argument("Number cannot be represented").with_argument(&n)
                }),
            },
            Value::String(s) => Ok(SqlValue::Text(s)),
            other @ (Value::Array(_) | Value::Object(_)) => Err(SqlError::invalid_argument(
                "Only scalar JSON values can be used as SQL values",
            )
            .with_argument(other)),
        }
    }
}

/// Right-hand side of a `SET` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeValue {
    Value(SqlValue),
    Term(Term),
}

impl From<SqlValue> for ChangeValue {
    fn from(v: SqlValue) -> Self {
        ChangeValue::Value(v)
    }
}

impl From<Term> for ChangeValue {
    fn from(t: Term) -> Self {
        ChangeValue::Term(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_string_forms() {
        assert_eq!(SqlValue::from(18).normalize_string().unwrap(), "18");
        assert_eq!(SqlValue::from(false).normalize_string().unwrap(), "false");
        assert_eq!(SqlValue::from(1.5).normalize_string().unwrap(), "1.5");
        assert_eq!(SqlValue::from("abc").normalize_string().unwrap(), "abc");
        assert!(SqlValue::Null.normalize_string().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn normalize_int_accepts_numeric_forms() {
        assert_eq!(SqlValue::from(5).normalize_int().unwrap(), 5);
        assert_eq!(SqlValue::from(" 12 ").normalize_int().unwrap(), 12);
        assert_eq!(SqlValue::from(3.0).normalize_int().unwrap(), 3);
        assert_eq!(SqlValue::from(true).normalize_int().unwrap(), 1);
    }

    #[test]
    fn normalize_int_rejects_non_numbers() {
        assert!(SqlValue::from("ten").normalize_int().unwrap_err().is_invalid_argument());
        assert!(SqlValue::from(2.5).normalize_int().unwrap_err().is_invalid_argument());
        assert!(SqlValue::Null.normalize_int().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn sanitize_quotes_text_only() {
        let d = StringQuote::Double;
        assert_eq!(SqlValue::from("abc").sanitize(d).unwrap(), r#""abc""#);
        assert_eq!(SqlValue::from("it's").sanitize(StringQuote::Single).unwrap(), "'it''s'");
        assert_eq!(SqlValue::from(r#"say "hi""#).sanitize(d).unwrap(), r#""say ""hi""""#);
        assert_eq!(SqlValue::from(42).sanitize(d).unwrap(), "42");
        assert_eq!(SqlValue::from(true).sanitize(d).unwrap(), "TRUE");
        assert_eq!(SqlValue::Null.sanitize(d).unwrap(), "NULL");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let v = SqlValue::from(f);
            let err = v.sanitize(StringQuote::Double).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(err.argument(), Some(format!("{f:?}").as_str()));
            assert!(v.normalize_string().unwrap_err().is_invalid_argument());
        }
        assert_eq!(SqlValue::from(-0.5).sanitize(StringQuote::Double).unwrap(), "-0.5");
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(SqlValue::from(None::<i32>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some("x")), SqlValue::Text("x".into()));
    }

    #[test]
    fn json_scalars_convert() {
        assert_eq!(SqlValue::try_from(json!(7)).unwrap(), SqlValue::Int(7));
        assert_eq!(SqlValue::try_from(json!(0.25)).unwrap(), SqlValue::Float(0.25));
        assert_eq!(SqlValue::try_from(json!("x")).unwrap(), SqlValue::Text("x".into()));
        assert_eq!(SqlValue::try_from(json!(null)).unwrap(), SqlValue::Null);
        assert!(SqlValue::try_from(json!([1, 2])).unwrap_err().is_invalid_argument());
    }
}
