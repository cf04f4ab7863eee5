use super::*;
use crate::column_map::ColumnMap;
use crate::error::SqlResult;
use crate::escape::Dialect;
use crate::expr::{Expression, Term};
use crate::hash::ValueHashMap;
use crate::reference::EntityField;
use crate::render::{AliasMap, RenderContext, Renderer};
use crate::value::StringQuote;

fn render_with(
    templates: &TemplateRegistry,
    columns: &ColumnMap,
    hashes: &ValueHashMap,
    expression: &Expression,
) -> SqlResult<String> {
    let aliases = AliasMap::new(columns, hashes);
    let renderer = Renderer::new(&aliases, &Dialect::MySql, templates, StringQuote::Double);
    renderer.render(expression)
}

fn render(expression: &Expression) -> SqlResult<String> {
    render_with(
        &TemplateRegistry::with_defaults(),
        &ColumnMap::new(),
        &ValueHashMap::new(),
        expression,
    )
}

#[test]
fn comparison_escapes_fields_and_inlines_literals() {
    let e = Expression::eq(Term::field("name"), Term::value("alice"));
    assert_eq!(render(&e).unwrap(), r#"`name` = "alice""#);
}

#[test]
fn fields_resolve_through_column_map() {
    let columns = ColumnMap::new()
        .with("profId", "prof_id")
        .with("author", EntityField::new("posts", "author_id"));
    let e = Expression::and([
        Expression::eq(Term::entity_field("user", "profId"), Term::entity_field("profile", "id")),
        Expression::eq(Term::field("author"), Term::value(3)),
    ]);
    let sql = render_with(
        &TemplateRegistry::with_defaults(),
        &columns,
        &ValueHashMap::new(),
        &e,
    )
    .unwrap();
    assert_eq!(
        sql,
        "`user`.`prof_id` = `profile`.`id` AND `posts`.`author_id` = 3"
    );
}

fn render_mapped(columns: &ColumnMap, expression: &Expression) -> SqlResult<String> {
    render_with(&TemplateRegistry::with_defaults(), columns, &ValueHashMap::new(), expression)
}

#[test]
fn self_mapped_field_is_cyclic() {
    let columns = ColumnMap::new().with("a", Term::field("a"));
    let err = render_mapped(&columns, &Expression::eq(Term::field("a"), Term::value(1)))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.message(), r#"Column mapping for field "a" is cyclic"#);
    assert_eq!(err.argument(), Some(r#""a""#));
}

#[test]
fn mutually_mapped_fields_are_cyclic() {
    let columns = ColumnMap::new()
        .with("a", Term::field("b"))
        .with("b", Term::field("a"));
    let err = render_mapped(&columns, &Expression::eq(Term::field("a"), Term::value(1)))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.argument(), Some(r#""a""#));
}

#[test]
fn chained_and_repeated_mappings_render() {
    let columns = ColumnMap::new()
        .with("a", Term::field("b"))
        .with("b", "b_col")
        .with("both", Expression::eq(Term::field("a"), Term::field("a")));
    let sql = render_mapped(&columns, &Expression::eq(Term::field("both"), Term::field("a")))
        .unwrap();
    assert_eq!(sql, "`b_col` = `b_col` = `b_col`");
}

#[test]
fn literals_use_placeholders() {
    let hashes: ValueHashMap = [("18", ":12345"), ("false", ":56789")].into_iter().collect();
    let e = Expression::and([
        Expression::lt(Term::field("age"), Term::value(18)),
        Expression::eq(Term::field("verified"), Term::value(false)),
    ]);
    let sql = render_with(
        &TemplateRegistry::with_defaults(),
        &ColumnMap::new(),
        &hashes,
        &e,
    )
    .unwrap();
    assert_eq!(sql, "`age` < :12345 AND `verified` = :56789");
}

#[test]
fn hash_entry_wins_over_column_entry() {
    let columns = ColumnMap::new().with("status", "status_col");
    let hashes: ValueHashMap = [("status", ":s")].into_iter().collect();
    let e = Expression::eq(Term::field("status"), Term::value(1));
    let sql = render_with(&TemplateRegistry::with_defaults(), &columns, &hashes, &e).unwrap();
    assert_eq!(sql, ":s = 1");
}

#[test]
fn nested_groups_are_parenthesized() {
    let e = Expression::and([
        Expression::eq(Term::field("status"), Term::value("active")),
        Expression::or([
            Expression::eq(Term::field("role"), Term::value("admin")),
            Expression::gt(Term::field("rep"), Term::value(100)),
        ]),
    ]);
    assert_eq!(
        render(&e).unwrap(),
        r#"`status` = "active" AND (`role` = "admin" OR `rep` > 100)"#
    );
}

#[test]
fn negation_wraps_in_not() {
    let e = Expression::is_null(Term::field("deleted_at")).not();
    assert_eq!(render(&e).unwrap(), "NOT (`deleted_at` IS NULL)");
}

#[test]
fn in_and_between() {
    let e = Expression::in_list(Term::field("id"), [Term::value(1), Term::value(2)]);
    assert_eq!(render(&e).unwrap(), "`id` IN (1, 2)");
    let e = Expression::between(Term::field("age"), Term::value(18), Term::value(65));
    assert_eq!(render(&e).unwrap(), "`age` BETWEEN 18 AND 65");
}

#[test]
fn wrong_arity_is_invalid_argument() {
    let e = Expression::new(kind::EQ, [Term::field("a")]);
    assert!(render(&e).unwrap_err().is_invalid_argument());
    let e = Expression::new(kind::IN, [Term::field("a")]);
    assert!(render(&e).unwrap_err().is_invalid_argument());
    let e = Expression::and(Vec::<Term>::new());
    assert!(render(&e).unwrap_err().is_invalid_argument());
}

#[test]
fn unknown_kind_has_no_renderer() {
    let e = Expression::new("xor", [Term::field("a"), Term::field("b")]);
    let err = render(&e).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.argument(), Some("\"xor\""));
}

#[test]
fn custom_template_closure() {
    let mut templates = TemplateRegistry::with_defaults();
    templates.register("count", |ctx: &RenderContext<'_>| -> SqlResult<String> {
        let terms = ctx.render_terms()?;
        Ok(format!("COUNT({})", terms.join(", ")))
    });
    let e = Expression::new("count", [Term::field("id")]);
    let sql = render_with(&templates, &ColumnMap::new(), &ValueHashMap::new(), &e).unwrap();
    assert_eq!(sql, "COUNT(`id`)");
}
