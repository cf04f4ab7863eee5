use crate::clause::ClauseBuilder;
use crate::column_map::{ColumnMap, ColumnResolver, ColumnSpec};
use crate::config::BuilderConfig;
use crate::container::Container;
use crate::error::SqlResult;
use crate::escape::Escaper;
use crate::expr::{Expression, Term};
use crate::hash::ValueHashMap;
use crate::join::{JoinKind, JoinTypeResolver};
use crate::render::{AliasMap, ExpressionRenderer, Renderer};
use crate::statement::StatementBuilder;
use crate::template::{SqlTemplate, TemplateRegistry};

/// The stock statement builder.
///
/// Holds the immutable configuration every statement is built against: the
/// dialect and literal quoting ([`BuilderConfig`]), the field-column map
/// `M`, the expression templates and the join-type resolver `J`.
///
/// ```ignore
/// use sqlweave::{ColumnMap, Order, Select, SqlBuilder, StatementBuilder};
///
/// let builder = SqlBuilder::new()
///     .with_column_map(ColumnMap::new().with("createdAt", "created_at"));
/// let select = Select::from_table("posts").order_by(Order::desc("createdAt"));
/// let sql = builder.build_select(&select)?;
/// assert_eq!(sql, "SELECT * FROM `posts` ORDER BY `created_at` DESC;");
/// ```
#[derive(Debug, Clone)]
pub struct SqlBuilder<M = ColumnMap, J = JoinKind> {
    config: BuilderConfig,
    columns: M,
    templates: TemplateRegistry,
    join_types: J,
}

impl Default for SqlBuilder {
    fn default() -> Self {
        Self::from_config(BuilderConfig::default())
    }
}

impl SqlBuilder {
    /// A MySQL builder with an empty column map and the default templates.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BuilderConfig) -> Self {
        Self {
            join_types: config.default_join,
            config,
            columns: ColumnMap::new(),
            templates: TemplateRegistry::with_defaults(),
        }
    }
}

impl<M, J> SqlBuilder<M, J> {
    /// Replace the field-column map.
    pub fn with_column_map<M2>(self, columns: M2) -> SqlBuilder<M2, J>
    where
        M2: Container<ColumnSpec>,
    {
        SqlBuilder {
            config: self.config,
            columns,
            templates: self.templates,
            join_types: self.join_types,
        }
    }

    /// Replace the join-type resolver.
    pub fn with_join_types<J2>(self, join_types: J2) -> SqlBuilder<M, J2>
    where
        J2: JoinTypeResolver,
    {
        SqlBuilder {
            config: self.config,
            columns: self.columns,
            templates: self.templates,
            join_types,
        }
    }

    /// Replace the whole template registry.
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    /// Register (or replace) a single expression template.
    pub fn template(mut self, kind: impl Into<String>, template: impl SqlTemplate + 'static) -> Self {
        self.templates.register(kind, template);
        self
    }

    pub fn column_map(&self) -> &M {
        &self.columns
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }
}

impl<M, J> Escaper for SqlBuilder<M, J> {
    fn escape_reference(&self, name: &str, qualifier: Option<&str>) -> SqlResult<String> {
        self.config.dialect.escape_reference(name, qualifier)
    }
}

impl<M: Container<ColumnSpec>, J> ColumnResolver for SqlBuilder<M, J> {
    fn field_column_map(&self) -> &dyn Container<ColumnSpec> {
        &self.columns
    }
}

impl<M: Container<ColumnSpec>, J> SqlBuilder<M, J> {
    fn render_with<T>(
        &self,
        hashes: &ValueHashMap,
        f: impl FnOnce(&Renderer<'_>) -> SqlResult<T>,
    ) -> SqlResult<T> {
        let aliases = AliasMap::new(&self.columns, hashes);
        let renderer = Renderer::new(
            &aliases,
            &self.config.dialect,
            &self.templates,
            self.config.string_quote,
        );
        f(&renderer)
    }
}

impl<M: Container<ColumnSpec>, J> ExpressionRenderer for SqlBuilder<M, J> {
    fn render_expression(
        &self,
        expression: &Expression,
        hashes: &ValueHashMap,
    ) -> SqlResult<String> {
        self.render_with(hashes, |r| r.render(expression))
    }

    fn render_term(&self, term: &Term, hashes: &ValueHashMap) -> SqlResult<String> {
        self.render_with(hashes, |r| r.render_term(term))
    }
}

impl<M, J: JoinTypeResolver> JoinTypeResolver for SqlBuilder<M, J> {
    fn join_type(&self, condition: &Expression) -> SqlResult<String> {
        self.join_types.join_type(condition)
    }
}

impl<M: Container<ColumnSpec>, J: JoinTypeResolver> ClauseBuilder for SqlBuilder<M, J> {
    fn config(&self) -> &BuilderConfig {
        &self.config
    }
}

impl<M: Container<ColumnSpec>, J: JoinTypeResolver> StatementBuilder for SqlBuilder<M, J> {}
