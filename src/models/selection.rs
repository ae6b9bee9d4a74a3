//! Casting selection model.
//!
//! A casting selection records the chosen primary and backup actor for each
//! role. The host persists the whole map inside a project's shared
//! contract-data blob; that embedding is handled here at the boundary so the
//! rest of the crate only sees a keyed collection.
//!
//! Writes are last-write-wins: [`CastingSelections::embed_into`] replaces the
//! stored map wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Actor, Role};
use crate::error::CastingResult;

/// Key of the selection map inside a project's contract-data blob.
pub const SELECTIONS_KEY: &str = "casting";

/// Primary and backup choice for one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastingSelection {
    /// First-choice actor.
    pub primary: Option<Actor>,
    /// Fallback actor.
    pub backup: Option<Actor>,
}

impl CastingSelection {
    /// Whether neither slot is filled.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.backup.is_none()
    }

    /// Filled slots, primary first.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.primary.iter().chain(self.backup.iter())
    }
}

/// Which slot of a selection an actor occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSlot {
    /// First choice.
    Primary,
    /// Fallback.
    Backup,
}

/// Casting selections for a project, keyed by role ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastingSelections {
    selections: BTreeMap<String, CastingSelection>,
}

impl CastingSelections {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of roles with an entry.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Whether no role has an entry.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The selection for a role, if any.
    pub fn get(&self, role_id: &str) -> Option<&CastingSelection> {
        self.selections.get(role_id)
    }

    /// Sets (or clears with `None`) the primary actor for a role.
    pub fn set_primary(&mut self, role_id: impl Into<String>, actor: Option<Actor>) {
        self.set(role_id.into(), SelectionSlot::Primary, actor);
    }

    /// Sets (or clears with `None`) the backup actor for a role.
    pub fn set_backup(&mut self, role_id: impl Into<String>, actor: Option<Actor>) {
        self.set(role_id.into(), SelectionSlot::Backup, actor);
    }

    /// Sets one slot for a role. Entries left with both slots empty are removed.
    pub fn set(&mut self, role_id: String, slot: SelectionSlot, actor: Option<Actor>) {
        let entry = self.selections.entry(role_id.clone()).or_default();
        match slot {
            SelectionSlot::Primary => entry.primary = actor,
            SelectionSlot::Backup => entry.backup = actor,
        }
        if entry.is_empty() {
            self.selections.remove(&role_id);
        }
    }

    /// Removes a role's selection, returning it.
    pub fn clear_role(&mut self, role_id: &str) -> Option<CastingSelection> {
        self.selections.remove(role_id)
    }

    /// Iterates `(role_id, selection)` in role-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CastingSelection)> {
        self.selections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every assigned actor with its role and slot.
    pub fn assigned_actors(&self) -> Vec<(&str, SelectionSlot, &Actor)> {
        let mut out = Vec::new();
        for (role_id, sel) in self.iter() {
            if let Some(a) = &sel.primary {
                out.push((role_id, SelectionSlot::Primary, a));
            }
            if let Some(a) = &sel.backup {
                out.push((role_id, SelectionSlot::Backup, a));
            }
        }
        out
    }

    /// Roles (in the given order) that have no primary actor.
    pub fn uncast_roles<'a>(&self, roles: &'a [Role]) -> Vec<&'a Role> {
        roles
            .iter()
            .filter(|r| {
                self.get(&r.role_id)
                    .map_or(true, |sel| sel.primary.is_none())
            })
            .collect()
    }

    /// Whether every role has a primary actor.
    pub fn is_fully_cast(&self, roles: &[Role]) -> bool {
        self.uncast_roles(roles).is_empty()
    }

    /// Reads the selection map out of a project's contract-data blob.
    ///
    /// A missing key (or `null` blob) yields an empty map.
    ///
    /// # Errors
    /// Returns [`CastingError::SelectionData`](crate::CastingError::SelectionData)
    /// if the stored sub-map has the wrong shape.
    pub fn extract_from(blob: &Value) -> CastingResult<Self> {
        match blob.get(SELECTIONS_KEY) {
            None | Some(Value::Null) => Ok(Self::new()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }

    /// Writes the selection map into a project's contract-data blob.
    ///
    /// Unrelated keys are preserved. A non-object blob is replaced by an
    /// object holding only the selections.
    ///
    /// # Errors
    /// Returns [`CastingError::SelectionData`](crate::CastingError::SelectionData)
    /// if serialization fails.
    pub fn embed_into(&self, blob: &mut Value) -> CastingResult<()> {
        let encoded = serde_json::to_value(self)?;
        if let Value::Object(map) = blob {
            map.insert(SELECTIONS_KEY.to_string(), encoded);
        } else {
            let mut map = serde_json::Map::new();
            map.insert(SELECTIONS_KEY.to_string(), encoded);
            *blob = Value::Object(map);
        }
        Ok(())
    }
}
