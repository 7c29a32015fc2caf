//! Foreign Execution Adapter
//!
//! Glue between a [`ParsedTemplate`] and a positional prepared-statement API.
//! The statement handle is borrowed for the lifetime of the [`NamedStatement`]
//! and must already be initialised; it is never allocated, prepared early or
//! released here.

use async_trait::async_trait;

use crate::delimiters::DelimiterPair;
use crate::error::{AssignError, ExecuteError, ParseError};
use crate::template::ParsedTemplate;

/// A prepared statement that understands positional markers only.
#[async_trait]
pub trait StatementHandle: Send {
    /// Descriptor for a single bound value.
    type Bind: Clone + Send + Sync;
    /// Error reported by the underlying API.
    type Error: std::error::Error + Send + Sync + 'static;
    /// Whatever the underlying API reports after executing.
    type Outcome: Send;

    /// Prepare `sql`, which uses positional markers.
    async fn prepare(&mut self, sql: &str) -> Result<(), Self::Error>;

    /// Bind `binds` in order and execute the prepared statement.
    async fn bind_execute(&mut self, binds: Vec<Self::Bind>) -> Result<Self::Outcome, Self::Error>;
}

/// A statement handle driven through named placeholders.
pub struct NamedStatement<'h, H: StatementHandle> {
    handle: &'h mut H,
    template: ParsedTemplate<H::Bind>,
}

impl<'h, H: StatementHandle> NamedStatement<'h, H> {
    /// Parses `template` with explicit delimiters.
    pub fn new(
        handle: &'h mut H,
        template: &str,
        delimiters: &DelimiterPair,
    ) -> Result<Self, ParseError> {
        let template = ParsedTemplate::parse(template, delimiters)?;
        Ok(Self { handle, template })
    }

    /// Parses `template` with the process-wide default delimiters.
    pub fn with_current_delimiters(handle: &'h mut H, template: &str) -> Result<Self, ParseError> {
        Self::new(handle, template, &DelimiterPair::current())
    }

    pub fn template(&self) -> &ParsedTemplate<H::Bind> {
        &self.template
    }

    pub fn handle(&self) -> &H {
        &*self.handle
    }

    pub fn assign(&mut self, name: &str, value: impl Into<H::Bind>) -> Result<(), AssignError> {
        self.template.assign(name, value)
    }

    /// Prepares the rewritten template. Errors from the handle are returned as-is.
    #[tracing::instrument(skip(self), fields(sql_preview = %self.template.rewritten().chars().take(100).collect::<String>()))]
    pub async fn prepare(&mut self) -> Result<(), H::Error> {
        self.handle.prepare(self.template.rewritten()).await?;
        tracing::debug!("statement prepared");
        Ok(())
    }

    /// Assembles the bind sequence and executes the prepared statement.
    ///
    /// Missing assignments fail before the handle is touched.
    #[tracing::instrument(skip(self), fields(sql_preview = %self.template.rewritten().chars().take(100).collect::<String>()))]
    pub async fn execute(&mut self) -> Result<H::Outcome, ExecuteError<H::Error>> {
        let binds = self.template.assemble()?;
        let bind_count = binds.len();
        let outcome = self
            .handle
            .bind_execute(binds)
            .await
            .map_err(ExecuteError::Statement)?;
        tracing::debug!(binds = bind_count, "statement executed");
        Ok(outcome)
    }
}
