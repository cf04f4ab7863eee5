//! Expression rendering.
//!
//! A [`Renderer`] holds the alias map (field-column map overlaid by the
//! value-hash map), the escaper and the template registry. Rendering an
//! [`Expression`] means finding the template registered for its kind and
//! handing it a [`RenderContext`]. Leaf [`Term`]s are rendered by the
//! renderer itself, so templates only deal with operator syntax.

use crate::column_map::ColumnSpec;
use crate::container::{Container, ContainerError};
use crate::error::{SqlError, SqlResult};
use crate::escape::Escaper;
use crate::expr::{Expression, Term};
use crate::hash::ValueHashMap;
use crate::reference::Reference;
use crate::template::TemplateRegistry;
use crate::value::StringQuote;
use std::cell::RefCell;

/// What an alias key resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Alias {
    Column(ColumnSpec),
    Placeholder(String),
}

/// The field-column map merged with a value-hash map.
///
/// Lookups consult the value-hash map first, so a hash entry wins over a
/// column entry with the same key.
pub struct AliasMap<'a> {
    columns: &'a dyn Container<ColumnSpec>,
    hashes: &'a ValueHashMap,
}

impl<'a> AliasMap<'a> {
    pub fn new(columns: &'a dyn Container<ColumnSpec>, hashes: &'a ValueHashMap) -> Self {
        Self { columns, hashes }
    }

    pub fn hashes(&self) -> &ValueHashMap {
        self.hashes
    }

    pub fn lookup(&self, key: &str) -> SqlResult<Option<Alias>> {
        if let Some(hash) = self.hashes.get(key) {
            return Ok(Some(Alias::Placeholder(hash.to_string())));
        }
        match self.columns.get_value(key) {
            Ok(spec) => Ok(Some(Alias::Column(spec))),
            Err(ContainerError::NotFound(_)) => Ok(None),
            Err(e) => Err(SqlError::internal(
                "A problem occurred while reading the alias map",
                e,
            )),
        }
    }
}

/// Shared state for rendering expressions and terms.
pub struct Renderer<'a> {
    pub aliases: &'a AliasMap<'a>,
    pub escaper: &'a dyn Escaper,
    pub templates: &'a TemplateRegistry,
    pub string_quote: StringQuote,
    /// Fields whose column mapping is being rendered right now.
    resolving: RefCell<Vec<String>>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        aliases: &'a AliasMap<'a>,
        escaper: &'a dyn Escaper,
        templates: &'a TemplateRegistry,
        string_quote: StringQuote,
    ) -> Self {
        Self {
            aliases,
            escaper,
            templates,
            string_quote,
            resolving: RefCell::new(Vec::new()),
        }
    }

    /// Render `expression` with the template registered for its kind.
    pub fn render(&self, expression: &Expression) -> SqlResult<String> {
        let template = self.templates.get(expression.kind()).ok_or_else(|| {
            SqlError::invalid_argument("Could not find a renderer for the given expression")
                .with_argument(expression.kind())
        })?;
        template.render(&RenderContext {
            expression,
            renderer: self,
        })
    }

    /// Render one operand.
    pub fn render_term(&self, term: &Term) -> SqlResult<String> {
        match term {
            Term::Expression(e) => self.render(e),
            Term::Literal(v) => self.aliases.hashes().substitute(v, self.string_quote),
            Term::Field(reference) => self.render_field(reference),
        }
    }

    fn render_field(&self, reference: &Reference) -> SqlResult<String> {
        let entity = reference.entity();
        let field = reference.field();
        match self.aliases.lookup(field)? {
            Some(Alias::Placeholder(hash)) => Ok(hash),
            Some(Alias::Column(ColumnSpec::Name(column))) => {
                self.escaper.escape_reference(&column, entity)
            }
            Some(Alias::Column(ColumnSpec::EntityField(ef))) => {
                self.escaper.escape_reference(&ef.field, Some(&ef.entity))
            }
            Some(Alias::Column(ColumnSpec::Term(t))) => self.render_mapped_term(field, &t),
            None => self.escaper.escape_reference(field, entity),
        }
    }

    /// Render the term a field is mapped to.
    ///
    /// A field that shows up again while its own mapping is still being
    /// rendered would recurse forever.
    fn render_mapped_term(&self, field: &str, term: &Term) -> SqlResult<String> {
        if self.resolving.borrow().iter().any(|f| f == field) {
            return Err(
                SqlError::invalid_argument(format!("Column mapping for field \"{field}\" is cyclic"))
                    .with_argument(field),
            );
        }
        self.resolving.borrow_mut().push(field.to_string());
        let rendered = self.render_term(term);
        self.resolving.borrow_mut().pop();
        rendered
    }
}

/// Everything a template needs to render one expression.
pub struct RenderContext<'a> {
    pub expression: &'a Expression,
    pub renderer: &'a Renderer<'a>,
}

impl RenderContext<'_> {
    /// Render a nested expression.
    pub fn render(&self, expression: &Expression) -> SqlResult<String> {
        self.renderer.render(expression)
    }

    pub fn render_term(&self, term: &Term) -> SqlResult<String> {
        self.renderer.render_term(term)
    }

    /// Render each operand of the current expression.
    pub fn render_terms(&self) -> SqlResult<Vec<String>> {
        self.expression
            .terms()
            .iter()
            .map(|t| self.render_term(t))
            .collect()
    }

    /// Wrap `sql` in `NOT (...)` when the current expression is negated.
    pub fn finish(&self, sql: String) -> String {
        if self.expression.is_negated() {
            format!("NOT ({sql})")
        } else {
            sql
        }
    }
}

/// Renders expression trees and terms to SQL.
pub trait ExpressionRenderer {
    /// Render a logical expression with `hashes` overlaid on the alias map.
    fn render_expression(&self, expression: &Expression, hashes: &ValueHashMap)
    -> SqlResult<String>;

    /// Render any term: an expression, a field, or a literal.
    fn render_term(&self, term: &Term, hashes: &ValueHashMap) -> SqlResult<String>;
}
