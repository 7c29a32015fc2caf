//! Command implementations, independent of argument parsing and rendering

use serde::Serialize;
use sqlbind_core::{DelimiterPair, ParsedTemplate};

/// One distinct placeholder of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderReport {
    pub name: String,
    pub position: usize,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub original: String,
    pub rewritten: String,
    pub placeholders: Vec<PlaceholderReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BindReport {
    pub rewritten: String,
    /// One value per positional marker, in marker order.
    pub binds: Vec<String>,
}

pub fn parse(template: &str, delimiters: &DelimiterPair) -> sqlbind_core::Result<ParseReport> {
    let parsed: ParsedTemplate<String> = ParsedTemplate::parse(template, delimiters)?;

    let placeholders = parsed
        .names()
        .into_iter()
        .enumerate()
        .map(|(position, name)| PlaceholderReport {
            name: name.to_string(),
            position,
            occurrences: parsed.occurrences_of(name),
        })
        .collect();

    Ok(ParseReport {
        original: parsed.original().to_string(),
        rewritten: parsed.rewritten().to_string(),
        placeholders,
    })
}

pub fn bind(
    template: &str,
    delimiters: &DelimiterPair,
    params: &[(String, String)],
) -> sqlbind_core::Result<BindReport> {
    let mut parsed: ParsedTemplate<String> = ParsedTemplate::parse(template, delimiters)?;

    for (name, value) in params {
        parsed.assign(name, value.as_str())?;
    }
    let binds = parsed.assemble()?;

    Ok(BindReport {
        rewritten: parsed.rewritten().to_string(),
        binds,
    })
}

/// Parses a `name=value` argument. The value may itself contain `=`.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{arg}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlbind_core::{AssembleError, AssignError, BindError, ParseError};

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_report() {
        let report = parse(
            "SELECT * FROM t WHERE id = :id AND name = :name AND id2 = :id",
            &DelimiterPair::default(),
        )
        .unwrap();

        assert_eq!(
            report.rewritten,
            "SELECT * FROM t WHERE id = ? AND name = ? AND id2 = ?"
        );
        assert_eq!(
            report.placeholders,
            vec![
                PlaceholderReport {
                    name: "id".into(),
                    position: 0,
                    occurrences: 2
                },
                PlaceholderReport {
                    name: "name".into(),
                    position: 1,
                    occurrences: 1
                },
            ]
        );
    }

    #[test]
    fn test_bind_report() {
        let report = bind(
            "SELECT * FROM t WHERE id = :id AND name = :name AND id2 = :id",
            &DelimiterPair::default(),
            &params(&[("name", "x"), ("id", "7")]),
        )
        .unwrap();

        assert_eq!(report.binds, vec!["7", "x", "7"]);
    }

    #[test]
    fn test_bind_unknown_and_missing() {
        let err = bind(
            "SELECT :a, :b",
            &DelimiterPair::default(),
            &params(&[("c", "1")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BindError::Assign(AssignError::UnknownPlaceholder { ref name }) if name == "c"
        ));

        let err = bind("SELECT :a, :b", &DelimiterPair::default(), &[]).unwrap_err();
        assert!(matches!(
            err,
            BindError::Assemble(AssembleError::MissingAssignments { ref names }) if names.len() == 2
        ));
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let err = parse("SELECT 1", &DelimiterPair::default()).unwrap_err();
        assert!(matches!(
            err,
            BindError::Parse(ParseError::NoPlaceholdersFound { .. })
        ));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_param("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=1").is_err());
    }
}
