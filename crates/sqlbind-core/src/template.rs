//! Template Parser & Rewriter
//!
//! Finds delimiter-bounded placeholder names in a command template, assigns each
//! distinct name a position in order of first appearance and rewrites every
//! occurrence to the positional marker understood by the statement API.

use regex::Regex;
use std::collections::HashMap;

use crate::binder::BindSlot;
use crate::delimiters::{DelimiterPair, IDENTIFIER_GROUP};
use crate::error::ParseError;

/// The positional marker substituted for each placeholder occurrence.
pub const POSITIONAL_MARKER: &str = "?";

/// A command template rewritten for positional binding.
///
/// Names, positions and the rewritten text are fixed at construction; only the
/// per-slot assignment state changes between bind rounds.
#[derive(Debug, Clone)]
pub struct ParsedTemplate<B> {
    original: String,
    rewritten: String,
    pub(crate) slots: HashMap<String, BindSlot<B>>,
    /// Slot position behind each marker of `rewritten`, left to right.
    pub(crate) occurrences: Vec<usize>,
}

impl<B> ParsedTemplate<B> {
    /// Parses `template` with the given delimiters.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlbind_core::{DelimiterPair, ParsedTemplate};
    ///
    /// let parsed: ParsedTemplate<i64> = ParsedTemplate::parse(
    ///     "SELECT * FROM t WHERE id = :id AND parent = :id",
    ///     &DelimiterPair::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(parsed.rewritten(), "SELECT * FROM t WHERE id = ? AND parent = ?");
    /// assert_eq!(parsed.placeholder_count(), 1);
    /// assert_eq!(parsed.occurrence_count(), 2);
    /// ```
    pub fn parse(template: &str, delimiters: &DelimiterPair) -> Result<Self, ParseError> {
        let pattern = delimiters.pattern();
        let regex = Regex::new(&pattern).map_err(|e| {
            tracing::warn!(pattern = %pattern, error = %e, "delimiters do not form a valid pattern");
            ParseError::InvalidDelimiterPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut slots: HashMap<String, BindSlot<B>> = HashMap::new();
        let mut occurrences = Vec::new();
        let mut rewritten = String::with_capacity(template.len());
        let mut last_end = 0;

        for cap in regex.captures_iter(template) {
            let (Some(full), Some(name)) = (cap.get(0), cap.name(IDENTIFIER_GROUP)) else {
                continue;
            };

            let next_position = slots.len();
            let position = slots
                .entry(name.as_str().to_string())
                .or_insert_with(|| BindSlot::new(next_position))
                .position;
            occurrences.push(position);

            rewritten.push_str(&template[last_end..full.start()]);
            rewritten.push_str(POSITIONAL_MARKER);
            last_end = full.end();
        }

        if occurrences.is_empty() {
            tracing::warn!(pattern = %pattern, "no placeholder found in template");
            return Err(ParseError::NoPlaceholdersFound {
                template: template.to_string(),
            });
        }

        rewritten.push_str(&template[last_end..]);

        tracing::debug!(
            placeholders = slots.len(),
            occurrences = occurrences.len(),
            "template parsed"
        );

        Ok(Self {
            original: template.to_string(),
            rewritten,
            slots,
            occurrences,
        })
    }

    /// Parses `template` with the process-wide default delimiters.
    pub fn parse_with_current_delimiters(template: &str) -> Result<Self, ParseError> {
        Self::parse(template, &DelimiterPair::current())
    }

    /// The template as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The template with every placeholder replaced by [`POSITIONAL_MARKER`].
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }

    /// Number of distinct placeholder names.
    pub fn placeholder_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of markers in the rewritten template, repeats included.
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.slots.get(name).map(|slot| slot.position)
    }

    pub fn slot(&self, name: &str) -> Option<&BindSlot<B>> {
        self.slots.get(name)
    }

    /// Placeholder names ordered by position.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<(usize, &str)> = self
            .slots
            .iter()
            .map(|(name, slot)| (slot.position, name.as_str()))
            .collect();
        names.sort_unstable_by_key(|(position, _)| *position);
        names.into_iter().map(|(_, name)| name).collect()
    }

    /// How many markers in the rewritten template carry `name`'s value.
    pub fn occurrences_of(&self, name: &str) -> usize {
        self.position_of(name)
            .map(|position| self.occurrences.iter().filter(|p| **p == position).count())
            .unwrap_or(0)
    }
}
