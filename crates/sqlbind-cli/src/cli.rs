//! `sqlbind` - inspect named-parameter templates
//!
//! ```text
//! sqlbind parse "SELECT * FROM t WHERE id = :id"
//! sqlbind bind "UPDATE t SET v = :v WHERE id = :id" -p id=7 -p v=x
//! sqlbind --left ':\{' --right '\}' parse "SELECT :{id}"
//! ```

mod commands;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlbind_core::{BindConfig, DelimiterPair};

use crate::logging::LoggingConfig;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlbind", version, about = "Rewrite named placeholders for positional prepared statements")]
struct Cli {
    /// TOML file with a [delimiters] table
    #[arg(long, global = true, env = "SQLBIND_CONFIG")]
    config: Option<PathBuf>,

    /// Left delimiter (regex fragment); overrides the config file
    #[arg(long, global = true, allow_hyphen_values = true)]
    left: Option<String>,

    /// Right delimiter (regex fragment); overrides the config file
    #[arg(long, global = true, allow_hyphen_values = true)]
    right: Option<String>,

    /// Treat --left/--right as plain text rather than regex fragments
    #[arg(long, global = true)]
    literal: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write log lines to stderr as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the rewritten template and the position of every placeholder
    Parse {
        /// Command template, or `-` to read it from stdin
        template: String,
    },
    /// Assign values by name and show the assembled bind sequence
    Bind {
        /// Command template, or `-` to read it from stdin
        template: String,

        /// Placeholder value as NAME=VALUE (repeatable)
        #[arg(short = 'p', long = "param", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,
    },
}

impl Cli {
    fn logging_config(&self) -> LoggingConfig {
        let config = if self.verbose {
            LoggingConfig::verbose()
        } else {
            LoggingConfig::default()
        };
        LoggingConfig {
            json: self.log_json,
            ..config
        }
    }

    fn delimiters(&self) -> sqlbind_core::Result<DelimiterPair> {
        let mut delimiters = match &self.config {
            Some(path) => BindConfig::load(path)?.delimiters,
            None => DelimiterPair::default(),
        };

        if let Some(left) = &self.left {
            delimiters.left = left.clone();
        }
        if let Some(right) = &self.right {
            delimiters.right = right.clone();
        }
        if self.literal {
            delimiters = DelimiterPair::literal(&delimiters.left, &delimiters.right);
        }
        Ok(delimiters)
    }
}

fn read_template(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut template = String::new();
    std::io::stdin()
        .read_to_string(&mut template)
        .context("Failed to read template from stdin")?;
    Ok(template)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.logging_config())?;

    let delimiters = cli
        .delimiters()
        .context("Failed to resolve placeholder delimiters")?;
    tracing::debug!(left = %delimiters.left, right = %delimiters.right, "using delimiters");

    match &cli.command {
        Command::Parse { template } => {
            let template = read_template(template)?;
            let report = commands::parse(&template, &delimiters)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", output::render_parse(&report));
            }
        }
        Command::Bind { template, params } => {
            let template = read_template(template)?;
            let report = commands::bind(&template, &delimiters, params)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", output::render_bind(&report));
            }
        }
    }

    Ok(())
}
