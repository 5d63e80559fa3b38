use super::super::extractors::*;
use super::super::normalizer::normalize_sql;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use test_case::test_case;

fn table_names(refs: &[TableRef]) -> Vec<&str> {
    refs.iter().map(|r| r.table.as_str()).collect()
}

fn column_names(columns: &[SelectColumn]) -> Vec<&str> {
    columns.iter().map(|c| c.column.as_str()).collect()
}

#[test_case("SELECT", true)]
#[test_case("select", true)]
#[test_case("Where", true)]
#[test_case("join", true)]
#[test_case("FROM", true)]
#[test_case("GROUP", false)]
#[test_case("joined", false)]
fn test_is_reserved_word(token: &str, expected: bool) {
    assert_eq!(is_reserved_word(token), expected);
}

#[test]
fn test_extract_triples() {
    let sql = "SELECT sales.orders.id, crm.customers.name FROM sales.orders";
    let triples = extract_triples(sql);

    assert_eq!(
        triples,
        vec![
            TripleRef {
                database: "sales".to_string(),
                table: "orders".to_string(),
                column: "id".to_string(),
            },
            TripleRef {
                database: "crm".to_string(),
                table: "customers".to_string(),
                column: "name".to_string(),
            },
        ]
    );
}

#[test]
fn test_extract_triples_is_non_overlapping() {
    // a.b.c consumed first, leaving only ".d"
    let triples = extract_triples("a.b.c.d");
    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].column, "c");
}

#[test]
fn test_extract_pairs_unfiltered() {
    let pairs = extract_pairs("orders.customers.id");
    assert_eq!(
        pairs,
        vec![PairRef {
            table: "orders".to_string(),
            column: "customers".to_string(),
        }]
    );
}

#[test]
fn test_discard_triple_tails() {
    let sql = "SELECT orders.customers.id FROM t";
    let triples = extract_triples(sql);
    let databases = known_databases(&triples);

    let pairs = discard_triple_tails(extract_pairs(sql), &databases);
    assert!(pairs.is_empty(), "pair should be discarded: {:?}", pairs);
}

#[test]
fn test_discard_triple_tails_is_global() {
    // the later unrelated `orders.total` is dropped as well, since `orders`
    // is a known database anywhere in the text
    let sql = "SELECT orders.customers.id, orders.total, c.name FROM x";
    let extraction = extract_all(sql);

    assert_eq!(
        extraction.pairs,
        vec![PairRef {
            table: "c".to_string(),
            column: "name".to_string(),
        }]
    );
}

#[test]
fn test_discard_keeps_unrelated_pairs() {
    let databases: HashSet<&str> = ["warehouse"].into_iter().collect();
    let pairs = vec![
        PairRef {
            table: "warehouse".to_string(),
            column: "orders".to_string(),
        },
        PairRef {
            table: "o".to_string(),
            column: "id".to_string(),
        },
    ];

    let kept = discard_triple_tails(pairs, &databases);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].table, "o");
}

#[test]
fn test_extract_from_tables() {
    let sql = "select * from raw.customers c where exists (SELECT 1 FROM accounts)";
    let tables = extract_from_tables(sql);

    assert_eq!(
        tables,
        vec![
            TableRef {
                database: Some("raw".to_string()),
                table: "customers".to_string(),
            },
            TableRef {
                database: None,
                table: "accounts".to_string(),
            },
        ]
    );
}

#[test]
fn test_extract_from_filters_reserved_words() {
    let tables = extract_from_tables("SELECT a, b FROM WHERE");
    assert!(tables.is_empty());

    // the db prefix goes with a discarded table
    let tables = extract_from_tables("DELETE FROM db.where");
    assert!(tables.is_empty());
}

#[test]
fn test_extract_join_tables_all_flavours() {
    let sql = "SELECT * FROM a LEFT JOIN s.b ON 1 = 1 INNER JOIN c ON 1 = 1 CROSS JOIN d";
    let tables = extract_join_tables(sql);

    assert_eq!(table_names(&tables), vec!["b", "c", "d"]);
    assert_eq!(tables[0].database.as_deref(), Some("s"));
    assert_eq!(tables[1].database, None);
}

#[test]
fn test_extract_select_columns_with_alias() {
    let sql = "SELECT o.id, o.total AS amt, status as st FROM sales.orders o";
    let columns = extract_select_columns(sql);

    assert_eq!(column_names(&columns), vec!["id", "total", "status"]);
    assert_eq!(columns[0].qualifier.as_deref(), Some("o"));
    assert_eq!(columns[2].qualifier, None);
}

#[test]
fn test_extract_select_columns_first_statement_only() {
    let sql = "SELECT a FROM t1; SELECT b FROM t2";
    assert_eq!(column_names(&extract_select_columns(sql)), vec!["a"]);
}

#[test]
fn test_extract_select_columns_skips_reserved_and_symbols() {
    let columns = extract_select_columns("SELECT a, b FROM WHERE");
    assert_eq!(column_names(&columns), vec!["a", "b"]);

    let columns = extract_select_columns("SELECT *, , x FROM t");
    assert_eq!(column_names(&columns), vec!["x"]);
}

#[test]
fn test_extract_select_columns_expression_takes_first_token() {
    let columns = extract_select_columns("SELECT COUNT(o.id) AS n FROM orders o");
    assert_eq!(column_names(&columns), vec!["COUNT"]);
}

#[test]
fn test_extract_select_columns_no_select() {
    assert!(extract_select_columns("UPDATE t SET a = 1").is_empty());
    assert!(extract_select_columns("").is_empty());
}

#[test]
fn test_comment_text_is_not_sql() {
    let sql = normalize_sql("SELECT id -- from customers\n FROM orders");
    let extraction = extract_all(&sql);

    assert_eq!(table_names(&extraction.from_tables), vec!["orders"]);
    assert_eq!(column_names(&extraction.select_columns), vec!["id"]);
}

#[test]
fn test_extract_all_on_garbage() {
    let extraction = extract_all("\u{fffd}\u{fffd} ;;; ... ,,, FROM");
    assert_eq!(extraction, Extraction::default());
}
