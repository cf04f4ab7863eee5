//! Logical expression trees.
//!
//! An [`Expression`] is an operator `kind`, a list of child [`Term`]s and a
//! `negated` flag. The tree itself carries no rendering logic: the
//! [`TemplateRegistry`](crate::TemplateRegistry) decides how each `kind` is
//! written out.
//!
//! # Example
//! ```ignore
//! use sqlweave::{Expression, Term};
//!
//! let cond = Expression::and([
//!     Expression::lt(Term::field("age"), Term::value(18)),
//!     Expression::eq(Term::field("verified"), Term::value(false)),
//! ]);
//! ```

use crate::reference::{EntityField, Reference};
use crate::value::SqlValue;

/// Operator names understood by the default templates.
pub mod kind {
    pub const AND: &str = "and";
    pub const OR: &str = "or";
    pub const EQ: &str = "eq";
    pub const NEQ: &str = "neq";
    pub const LT: &str = "lt";
    pub const LTE: &str = "lte";
    pub const GT: &str = "gt";
    pub const GTE: &str = "gte";
    pub const LIKE: &str = "like";
    pub const IN: &str = "in";
    pub const IS_NULL: &str = "is_null";
    pub const BETWEEN: &str = "between";
}

/// A node in an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A literal value; replaced by its placeholder when one is mapped.
    Literal(SqlValue),
    /// A field, resolved through the field-column map.
    Field(Reference),
    /// A nested expression.
    Expression(Expression),
}

impl Term {
    pub fn value(v: impl Into<SqlValue>) -> Self {
        Term::Literal(v.into())
    }

    pub fn field(name: impl Into<String>) -> Self {
        Term::Field(Reference::Name(name.into()))
    }

    pub fn entity_field(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Term::Field(Reference::EntityField(EntityField::new(entity, field)))
    }
}

impl From<Expression> for Term {
    fn from(e: Expression) -> Self {
        Term::Expression(e)
    }
}

impl From<SqlValue> for Term {
    fn from(v: SqlValue) -> Self {
        Term::Literal(v)
    }
}

impl From<EntityField> for Term {
    fn from(ef: EntityField) -> Self {
        Term::Field(Reference::EntityField(ef))
    }
}

/// A logical expression: operator kind, operands and negation flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    kind: String,
    terms: Vec<Term>,
    negated: bool,
}

impl Expression {
    /// Create an expression of an arbitrary kind.
    pub fn new<I, T>(kind: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Self {
            kind: kind.into(),
            terms: terms.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Flip the negation flag.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn and<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Self::new(kind::AND, terms)
    }

    pub fn or<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Self::new(kind::OR, terms)
    }

    fn binary(kind: &str, left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::new(kind, [left.into(), right.into()])
    }

    pub fn eq(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::EQ, left, right)
    }

    pub fn neq(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::NEQ, left, right)
    }

    pub fn lt(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::LT, left, right)
    }

    pub fn lte(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::LTE, left, right)
    }

    pub fn gt(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::GT, left, right)
    }

    pub fn gte(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Self::binary(kind::GTE, left, right)
    }

    pub fn like(left: impl Into<Term>, pattern: impl Into<Term>) -> Self {
        Self::binary(kind::LIKE, left, pattern)
    }

    /// `left IN (values...)`
    pub fn in_list<I, T>(left: impl Into<Term>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        let mut terms = vec![left.into()];
        terms.extend(values.into_iter().map(Into::into));
        Self::new(kind::IN, terms)
    }

    pub fn is_null(term: impl Into<Term>) -> Self {
        Self::new(kind::IS_NULL, [term.into()])
    }

    pub fn between(
        term: impl Into<Term>,
        from: impl Into<Term>,
        to: impl Into<Term>,
    ) -> Self {
        Self::new(kind::BETWEEN, [term.into(), from.into(), to.into()])
    }
}
