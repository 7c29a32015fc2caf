//! sqlbind core - named placeholders for positional prepared statements
//!
//! Statement APIs such as MySQL's only understand `?` markers bound in argument
//! order. This crate lets callers write `:name` placeholders instead:
//!
//! - `DelimiterPair` / `set_delimiters` - how a placeholder is recognised
//! - `ParsedTemplate` - the rewritten template plus the name to position mapping,
//!   and the bind assembler (`assign` / `assemble`)
//! - `StatementHandle` / `NamedStatement` - call-through to the underlying statement
//! - `BindConfig` - delimiter configuration loaded from TOML
//!
//! # Example
//!
//! ```
//! use sqlbind_core::{DelimiterPair, ParsedTemplate};
//!
//! let mut parsed: ParsedTemplate<String> = ParsedTemplate::parse(
//!     "SELECT * FROM t WHERE id = :id AND name = :name AND id2 = :id",
//!     &DelimiterPair::default(),
//! )
//! .unwrap();
//!
//! parsed.assign("name", "x").unwrap();
//! parsed.assign("id", "7").unwrap();
//!
//! assert_eq!(parsed.rewritten(), "SELECT * FROM t WHERE id = ? AND name = ? AND id2 = ?");
//! assert_eq!(parsed.assemble().unwrap(), vec!["7", "x", "7"]);
//! ```

mod binder;
mod config;
mod delimiters;
mod error;
mod statement;
mod template;

pub use binder::BindSlot;
pub use config::BindConfig;
pub use delimiters::{
    DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER, DelimiterPair, IDENTIFIER_PATTERN,
    reset_delimiters, set_delimiters,
};
pub use error::*;
pub use statement::{NamedStatement, StatementHandle};
pub use template::{POSITIONAL_MARKER, ParsedTemplate};
