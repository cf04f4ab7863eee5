//! Expression templates.
//!
//! A [`SqlTemplate`] turns one expression kind into SQL text. Templates are
//! looked up by kind in a [`TemplateRegistry`]; callers can register their
//! own (any `Fn(&RenderContext) -> SqlResult<String>` will do) or start from
//! [`TemplateRegistry::with_defaults`].

use crate::error::{SqlError, SqlResult};
use crate::expr::{Term, kind};
use crate::render::RenderContext;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Renders one expression kind.
pub trait SqlTemplate: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String>;
}

impl<F> SqlTemplate for F
where
    F: Fn(&RenderContext<'_>) -> SqlResult<String> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        self(ctx)
    }
}

/// Expression kind → template.
#[derive(Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn SqlTemplate>>,
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("TemplateRegistry").field("kinds", &kinds).finish()
    }
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with templates for every kind in [`crate::expr::kind`].
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(kind::AND, Logical("AND"))
            .register(kind::OR, Logical("OR"))
            .register(kind::EQ, Comparison("="))
            .register(kind::NEQ, Comparison("!="))
            .register(kind::LT, Comparison("<"))
            .register(kind::LTE, Comparison("<="))
            .register(kind::GT, Comparison(">"))
            .register(kind::GTE, Comparison(">="))
            .register(kind::LIKE, Comparison("LIKE"))
            .register(kind::IN, InList)
            .register(kind::IS_NULL, IsNull)
            .register(kind::BETWEEN, Between);
        reg
    }

    /// Register (or replace) the template for `kind`.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        template: impl SqlTemplate + 'static,
    ) -> &mut Self {
        self.templates.insert(kind.into(), Arc::new(template));
        self
    }

    pub fn get(&self, kind: &str) -> Option<&dyn SqlTemplate> {
        self.templates.get(kind).map(|t| &**t)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(kind)
    }
}

fn arity_error(ctx: &RenderContext<'_>, expected: &str) -> SqlError {
    SqlError::invalid_argument(format!(
        "Expression \"{}\" expects {expected} terms, got {}",
        ctx.expression.kind(),
        ctx.expression.terms().len()
    ))
    .with_argument(ctx.expression)
}

/// `a AND b AND ...` / `a OR b OR ...`; nested logical groups are parenthesized.
struct Logical(&'static str);

impl SqlTemplate for Logical {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        let terms = ctx.expression.terms();
        if terms.is_empty() {
            return Err(arity_error(ctx, "at least one"));
        }
        let mut parts = Vec::with_capacity(terms.len());
        for term in terms {
            let sql = ctx.render_term(term)?;
            let grouped = matches!(
                term,
                Term::Expression(e) if !e.is_negated() && (e.kind() == kind::AND || e.kind() == kind::OR)
            );
            parts.push(if grouped { format!("({sql})") } else { sql });
        }
        Ok(ctx.finish(parts.join(&format!(" {} ", self.0))))
    }
}

/// `left <op> right`
struct Comparison(&'static str);

impl SqlTemplate for Comparison {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        match ctx.render_terms()?.as_slice() {
            [left, right] => Ok(ctx.finish(format!("{left} {} {right}", self.0))),
            _ => Err(arity_error(ctx, "exactly 2")),
        }
    }
}

/// `left IN (v1, v2, ...)`
struct InList;

impl SqlTemplate for InList {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        match ctx.render_terms()?.split_first() {
            Some((left, values)) if !values.is_empty() => {
                Ok(ctx.finish(format!("{left} IN ({})", values.join(", "))))
            }
            _ => Err(arity_error(ctx, "at least 2")),
        }
    }
}

/// `term IS NULL`
struct IsNull;

impl SqlTemplate for IsNull {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        match ctx.render_terms()?.as_slice() {
            [term] => Ok(ctx.finish(format!("{term} IS NULL"))),
            _ => Err(arity_error(ctx, "exactly 1")),
        }
    }
}

/// `term BETWEEN from AND to`
struct Between;

impl SqlTemplate for Between {
    fn render(&self, ctx: &RenderContext<'_>) -> SqlResult<String> {
        match ctx.render_terms()?.as_slice() {
            [term, from, to] => Ok(ctx.finish(format!("{term} BETWEEN {from} AND {to}"))),
            _ => Err(arity_error(ctx, "exactly 3")),
        }
    }
}

#[cfg(test)]
mod tests;
