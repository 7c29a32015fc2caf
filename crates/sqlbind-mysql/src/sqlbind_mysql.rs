//! MySQL/MariaDB statement handle
//!
//! Drives a `mysql_async` connection through [`sqlbind_core::NamedStatement`]:
//!
//! ```no_run
//! # async fn run(conn: &mut mysql_async::Conn) -> Result<(), Box<dyn std::error::Error>> {
//! use mysql_async::Value;
//! use sqlbind_core::{DelimiterPair, NamedStatement};
//! use sqlbind_mysql::MySqlStatement;
//!
//! let mut handle = MySqlStatement::new(conn);
//! let mut stmt = NamedStatement::new(
//!     &mut handle,
//!     "UPDATE users SET name = :name WHERE id = :id",
//!     &DelimiterPair::default(),
//! )?;
//! stmt.prepare().await?;
//! stmt.assign("id", Value::Int(42))?;
//! stmt.assign("name", Value::Bytes(b"Alice".to_vec()))?;
//! let affected = stmt.execute().await?;
//! # let _ = affected;
//! # Ok(())
//! # }
//! ```

mod statement;

pub use statement::{MySqlStatement, MySqlStatementError};
