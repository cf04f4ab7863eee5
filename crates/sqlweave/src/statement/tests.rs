use super::*;
use crate::column_map::ColumnMap;
use crate::expr::{Expression, Term};
use crate::hash::ValueHashMap;
use crate::join::Join;
use crate::reference::{EntityField, Order, TableRef};
use crate::sql_builder::SqlBuilder;
use crate::value::SqlValue;

fn row(pairs: &[(&str, SqlValue)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_assemble_drops_empty_parts() {
    assert_eq!(assemble(&["SELECT", "*", "", "FROM `t`", ""]), "SELECT * FROM `t`;");
    assert_eq!(assemble(&[" DELETE FROM `t` "]), "DELETE FROM `t`;");
}

#[test]
fn test_select_star() {
    let sql = SqlBuilder::new()
        .build_select(&Select::from_table("users"))
        .unwrap();
    assert_eq!(sql, "SELECT * FROM `users`;");
}

#[test]
fn test_select_requires_tables() {
    let err = SqlBuilder::new().build_select(&Select::new()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_select_full() {
    let builder = SqlBuilder::new()
        .with_column_map(ColumnMap::new().with("createdAt", "created_at"));
    let select = Select::from_table(TableRef::new("users").alias("u"))
        .column("id", EntityField::new("u", "id"))
        .column("title", EntityField::new("p", "title"))
        .join(Join::left(
            TableRef::new("posts").alias("p"),
            Expression::eq(Term::entity_field("p", "user_id"), Term::entity_field("u", "id")),
        ))
        .condition(Expression::gt(Term::entity_field("u", "age"), Term::value(18)))
        .order_by(Order::desc("createdAt").entity("p"))
        .limit(10)
        .offset(20);
    assert_eq!(
        builder.build_select(&select).unwrap(),
        "SELECT `u`.`id` AS `id`, `p`.`title` AS `title` FROM `users` AS `u` \
         LEFT JOIN `posts` AS `p` ON `p`.`user_id` = `u`.`id` \
         WHERE `u`.`age` > 18 ORDER BY `p`.`created_at` DESC LIMIT 10 OFFSET 20;"
    );
}

#[test]
fn test_select_group_by_turns_where_into_having() {
    let select = Select::from_table("orders")
        .column("customer", "customer_id")
        .group_by("customer_id")
        .condition(Expression::gt(Term::field("customer_id"), Term::value(5)));
    let sql = SqlBuilder::new().build_select(&select).unwrap();
    assert_eq!(
        sql,
        "SELECT `customer_id` AS `customer` FROM `orders` GROUP BY `customer_id` HAVING `customer_id` > 5;"
    );
    assert!(!sql.contains("WHERE"));
}

#[test]
fn test_having_keeps_where_text_inside_values() {
    let select = Select::from_table("t")
        .group_by("kind")
        .condition(Expression::eq(Term::field("note"), Term::value("WHERE ")));
    assert_eq!(
        SqlBuilder::new().build_select(&select).unwrap(),
        r#"SELECT * FROM `t` GROUP BY `kind` HAVING `note` = "WHERE ";"#
    );
}

#[test]
fn test_offset_requires_limit() {
    let b = SqlBuilder::new();
    let sql = b.build_select(&Select::from_table("t").offset(5)).unwrap();
    assert_eq!(sql, "SELECT * FROM `t`;");
    let sql = b.build_select(&Select::from_table("t").offset(5).limit(2)).unwrap();
    assert_eq!(sql, "SELECT * FROM `t` LIMIT 2 OFFSET 5;");
}

#[test]
fn test_select_uses_hashes() {
    let hashes: ValueHashMap = [("18", ":12345"), ("false", ":56789")].into_iter().collect();
    let select = Select::from_table("users")
        .condition(Expression::and([
            Expression::lt(Term::field("age"), Term::value(18)),
            Expression::eq(Term::field("verified"), Term::value(false)),
        ]))
        .hashes(hashes);
    assert_eq!(
        SqlBuilder::new().build_select(&select).unwrap(),
        "SELECT * FROM `users` WHERE `age` < :12345 AND `verified` = :56789;"
    );
}

#[test]
fn test_insert() {
    let insert = Insert::into_table("t")
        .columns(["a", "b"])
        .row(row(&[("a", 1.into()), ("b", 2.into())]));
    assert_eq!(
        SqlBuilder::new().build_insert(&insert).unwrap(),
        "INSERT INTO `t` (`a`, `b`) VALUES (1, 2);"
    );
}

#[test]
fn test_insert_many_rows_with_defaults() {
    let insert = Insert::into_table("users")
        .columns(["id", "name", "surname"])
        .row(row(&[("id", 1.into()), ("name", "Ann".into()), ("surname", "Lee".into())]))
        .row(row(&[("id", 2.into()), ("name", "Bo".into())]))
        .hashes([("Ann", ":ann")].into_iter().collect());
    assert_eq!(
        SqlBuilder::new().build_insert(&insert).unwrap(),
        r#"INSERT INTO `users` (`id`, `name`, `surname`) VALUES (1, :ann, "Lee"), (2, "Bo", DEFAULT);"#
    );
}

#[test]
fn test_insert_requires_rows() {
    let insert: Insert = Insert::into_table("t").column("a");
    assert!(SqlBuilder::new().build_insert(&insert).unwrap_err().is_invalid_argument());
}

#[test]
fn test_update() {
    let update = Update::table("users")
        .set("name", "bob")
        .set("deleted_at", SqlValue::Null)
        .condition(Expression::eq(Term::field("id"), Term::value(7)))
        .order_by(Order::asc("id"))
        .limit(1);
    assert_eq!(
        SqlBuilder::new().build_update(&update).unwrap(),
        r#"UPDATE `users` SET `name` = "bob", `deleted_at` = NULL WHERE `id` = 7 ORDER BY `id` ASC LIMIT 1;"#
    );
}

#[test]
fn test_update_with_term() {
    let update = Update::table("posts").set_term("views", Term::field("views_cache"));
    assert_eq!(
        SqlBuilder::new().build_update(&update).unwrap(),
        "UPDATE `posts` SET `views` = `views_cache`;"
    );
}

#[test]
fn test_update_requires_changes() {
    let err = SqlBuilder::new()
        .build_update(&Update::table("users"))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_delete_bare() {
    assert_eq!(
        SqlBuilder::new().build_delete(&Delete::from_table("t")).unwrap(),
        "DELETE FROM `t`;"
    );
}

#[test]
fn test_delete_full() {
    let delete = Delete::from_table("logs")
        .condition(Expression::lt(Term::field("level"), Term::value(3)))
        .order_by(Order::asc("created_at"))
        .limit(100)
        .offset(10);
    assert_eq!(
        SqlBuilder::new().build_delete(&delete).unwrap(),
        "DELETE FROM `logs` WHERE `level` < 3 ORDER BY `created_at` ASC LIMIT 100 OFFSET 10;"
    );
}

#[test]
fn test_negative_limit_fails() {
    let err = SqlBuilder::new()
        .build_delete(&Delete::from_table("t").limit(-1))
        .unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn test_idempotent() {
    let b = SqlBuilder::new();
    let select = Select::from_table("t")
        .condition(Expression::in_list(Term::field("id"), [Term::value(1), Term::value(2)]));
    assert_eq!(b.build_select(&select).unwrap(), b.build_select(&select).unwrap());
}

#[test]
fn test_update_rejects_non_finite_floats() {
    let update = Update::table("t").set("x", f64::NAN).set("y", f64::INFINITY);
    let err = SqlBuilder::new().build_update(&update).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_select_with_cyclic_column_map_fails() {
    let builder = SqlBuilder::new().with_column_map(ColumnMap::new().with("a", Term::field("a")));
    let select = Select::from_table("t").condition(Expression::eq(Term::field("a"), Term::value(1)));
    let err = builder.build_select(&select).unwrap_err();
    assert!(err.is_invalid_argument());
}
