//! Integration tests for named parameters against MySQL
//!
//! These tests require a running MySQL server.
//! They are ignored by default and can be run with:
//! ```
//! cargo test --package sqlbind-mysql --test named_statement_integration -- --ignored
//! ```
//!
//! To set up a local MySQL server for testing:
//! ```
//! docker run -d --name mysql-test -p 3306:3306 -e MYSQL_ROOT_PASSWORD=test -e MYSQL_DATABASE=test mysql:8
//! ```

use mysql_async::{OptsBuilder, Pool, Value, prelude::*};
use pretty_assertions::assert_eq;
use sqlbind_core::{AssembleError, DelimiterPair, ExecuteError, NamedStatement};
use sqlbind_mysql::{MySqlStatement, MySqlStatementError};

/// Helper to build a pool from the environment
fn test_pool() -> Pool {
    let host = std::env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("MYSQL_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3306);
    let user = std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string());
    let password = std::env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "test".to_string());
    let database = std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "test".to_string());

    let opts = OptsBuilder::default()
        .ip_or_hostname(host)
        .tcp_port(port)
        .user(Some(user))
        .pass(Some(password))
        .db_name(Some(database));
    Pool::new(opts)
}

#[tokio::test]
#[ignore = "requires running MySQL server"]
async fn test_named_insert_and_update() {
    let pool = test_pool();
    let mut conn = pool.get_conn().await.expect("Failed to connect to MySQL");

    conn.query_drop(
        "CREATE TEMPORARY TABLE sqlbind_people (id INT PRIMARY KEY, name VARCHAR(64), parent INT)",
    )
    .await
    .expect("Failed to create table");

    {
        let mut handle = MySqlStatement::new(&mut conn);
        let mut insert = NamedStatement::new(
            &mut handle,
            "INSERT INTO sqlbind_people (id, name, parent) VALUES (:id, :name, :id)",
            &DelimiterPair::default(),
        )
        .expect("Failed to parse template");
        insert.prepare().await.expect("Failed to prepare");

        for (id, name) in [(1_i64, "Alice"), (2, "Bob")] {
            insert.assign("name", Value::Bytes(name.as_bytes().to_vec())).unwrap();
            insert.assign("id", Value::Int(id)).unwrap();
            assert_eq!(insert.execute().await.expect("Insert failed"), 1);
        }
        assert_eq!(insert.handle().param_count(), Some(3));
    }

    {
        let mut handle = MySqlStatement::new(&mut conn);
        let mut update = NamedStatement::new(
            &mut handle,
            "UPDATE sqlbind_people SET name = :{name} WHERE id = :{id}",
            &DelimiterPair::literal(":{", "}"),
        )
        .expect("Failed to parse template");
        update.prepare().await.expect("Failed to prepare");

        update.assign("id", Value::Int(2)).unwrap();
        update
            .assign("name", Value::Bytes(b"Robert".to_vec()))
            .unwrap();
        assert_eq!(update.execute().await.expect("Update failed"), 1);
    }

    let names: Vec<(i64, String, i64)> = conn
        .query("SELECT id, name, parent FROM sqlbind_people ORDER BY id")
        .await
        .expect("Select failed");
    assert_eq!(
        names,
        vec![
            (1, "Alice".to_string(), 1),
            (2, "Robert".to_string(), 2)
        ]
    );

    drop(conn);
    pool.disconnect().await.expect("Failed to disconnect");
}

#[tokio::test]
#[ignore = "requires running MySQL server"]
async fn test_missing_value_never_reaches_server() {
    let pool = test_pool();
    let mut conn = pool.get_conn().await.expect("Failed to connect to MySQL");

    {
        let mut handle = MySqlStatement::new(&mut conn);
        let mut select = NamedStatement::new(
            &mut handle,
            "SELECT :a + :b",
            &DelimiterPair::default(),
        )
        .expect("Failed to parse template");
        select.prepare().await.expect("Failed to prepare");
        select.assign("a", Value::Int(1)).unwrap();

        match select.execute().await {
            Err(ExecuteError::Assemble(AssembleError::MissingAssignments { names })) => {
                assert_eq!(names, vec!["b"]);
            }
            other => panic!("expected missing assignment, got {other:?}"),
        }
    }

    drop(conn);
    pool.disconnect().await.expect("Failed to disconnect");
}

#[tokio::test]
#[ignore = "requires running MySQL server"]
async fn test_server_errors_pass_through() {
    let pool = test_pool();
    let mut conn = pool.get_conn().await.expect("Failed to connect to MySQL");

    {
        let mut handle = MySqlStatement::new(&mut conn);
        let mut stmt = NamedStatement::new(
            &mut handle,
            "SELEC :broken",
            &DelimiterPair::default(),
        )
        .expect("Failed to parse template");

        let err = stmt.prepare().await.unwrap_err();
        assert!(matches!(err, MySqlStatementError::Driver(_)));

        stmt.assign("broken", Value::Int(1)).unwrap();
        match stmt.execute().await {
            Err(ExecuteError::Statement(MySqlStatementError::NotPrepared)) => {}
            other => panic!("expected NotPrepared, got {other:?}"),
        }
    }

    drop(conn);
    pool.disconnect().await.expect("Failed to disconnect");
}
