//! Bind Assembler
//!
//! Collects values keyed by placeholder name and turns them into the ordered
//! sequence the positional statement API expects.

use crate::error::{AssembleError, AssignError};
use crate::template::ParsedTemplate;

/// Binding state of one distinct placeholder.
#[derive(Debug, Clone)]
pub struct BindSlot<B> {
    /// 0-based, order of first appearance in the template.
    pub position: usize,
    /// Whether a value was supplied during the current bind round.
    pub assigned: bool,
    pub value: Option<B>,
}

impl<B> BindSlot<B> {
    pub(crate) fn new(position: usize) -> Self {
        Self {
            position,
            assigned: false,
            value: None,
        }
    }
}

impl<B: Clone> ParsedTemplate<B> {
    /// Stores `value` for the placeholder `name`. Re-assigning overwrites.
    ///
    /// Fails without touching any slot when `name` does not occur in the template.
    pub fn assign(&mut self, name: &str, value: impl Into<B>) -> Result<(), AssignError> {
        let Some(slot) = self.slots.get_mut(name) else {
            tracing::warn!(name = %name, "assignment to unknown bind variable");
            return Err(AssignError::UnknownPlaceholder {
                name: name.to_string(),
            });
        };

        slot.value = Some(value.into());
        slot.assigned = true;
        tracing::trace!(name = %name, position = slot.position, "bind variable assigned");
        Ok(())
    }

    /// Whether `name` has a value for the current round. Unknown names are never assigned.
    pub fn is_assigned(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.assigned)
    }

    /// Placeholder names still waiting for a value, ordered by position.
    pub fn unassigned(&self) -> Vec<String> {
        let mut missing: Vec<(usize, &String)> = self
            .slots
            .iter()
            .filter(|(_, slot)| !slot.assigned)
            .map(|(name, slot)| (slot.position, name))
            .collect();
        missing.sort_unstable_by_key(|(position, _)| *position);
        missing.into_iter().map(|(_, name)| name.clone()).collect()
    }

    /// Builds the bind sequence for the rewritten template.
    ///
    /// The returned vector holds one value per positional marker, so a name
    /// used several times contributes its value at each of its markers. On
    /// success every slot is marked unassigned again, ready for the next round;
    /// on failure nothing changes.
    pub fn assemble(&mut self) -> Result<Vec<B>, AssembleError> {
        let names = self.unassigned();
        if !names.is_empty() {
            tracing::warn!(missing = ?names, "bind variables without an assigned value");
            return Err(AssembleError::MissingAssignments { names });
        }

        let mut by_position: Vec<Option<&B>> = vec![None; self.slots.len()];
        for slot in self.slots.values() {
            by_position[slot.position] = slot.value.as_ref();
        }

        let mut binds = Vec::with_capacity(self.occurrences.len());
        for &position in &self.occurrences {
            // Every slot is assigned at this point, so its value is present.
            if let Some(value) = by_position[position] {
                binds.push(value.clone());
            }
        }

        for slot in self.slots.values_mut() {
            slot.assigned = false;
        }

        tracing::debug!(
            placeholders = self.slots.len(),
            binds = binds.len(),
            "bind sequence assembled"
        );
        Ok(binds)
    }
}
