//! `StatementHandle` over a borrowed `mysql_async::Conn`

use async_trait::async_trait;
use mysql_async::{Conn, Params, Statement, Value, prelude::*};
use sqlbind_core::StatementHandle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MySqlStatementError {
    /// `bind_execute` was called before a successful `prepare`.
    #[error("statement has not been prepared")]
    NotPrepared,

    #[error(transparent)]
    Driver(#[from] mysql_async::Error),
}

/// A server-side prepared statement on a connection owned by the caller.
///
/// The connection must be open for as long as this handle lives; it is never
/// closed or returned to a pool here.
pub struct MySqlStatement<'c> {
    conn: &'c mut Conn,
    statement: Option<Statement>,
}

impl<'c> MySqlStatement<'c> {
    pub fn new(conn: &'c mut Conn) -> Self {
        Self {
            conn,
            statement: None,
        }
    }

    /// Number of `?` markers the server reported for the prepared statement.
    pub fn param_count(&self) -> Option<u16> {
        self.statement.as_ref().map(|stmt| stmt.num_params())
    }

    pub fn is_prepared(&self) -> bool {
        self.statement.is_some()
    }
}

#[async_trait]
impl<'c> StatementHandle for MySqlStatement<'c> {
    type Bind = Value;
    type Error = MySqlStatementError;
    type Outcome = u64;

    async fn prepare(&mut self, sql: &str) -> Result<(), Self::Error> {
        let statement = self.conn.prep(sql).await?;
        tracing::debug!(
            statement_id = statement.id(),
            params = statement.num_params(),
            "MySQL statement prepared"
        );
        self.statement = Some(statement);
        Ok(())
    }

    /// Executes the prepared statement and returns the affected row count.
    async fn bind_execute(&mut self, binds: Vec<Value>) -> Result<u64, Self::Error> {
        let statement = self
            .statement
            .clone()
            .ok_or(MySqlStatementError::NotPrepared)?;

        self.conn
            .exec_drop(statement, Params::Positional(binds))
            .await?;
        let affected_rows = self.conn.affected_rows();
        tracing::debug!(affected_rows = affected_rows, "MySQL statement executed");
        Ok(affected_rows)
    }
}
