//! Serde helpers for loosely-typed datastore rows.
//!
//! Roster and role rows arrive with `null` text columns and numeric or
//! string identifiers. These helpers collapse both into plain `String`s so
//! the rest of the crate never deals with optional text.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Deserializes `null`, strings, numbers and booleans into a `String`.
///
/// `null` becomes the empty string.
pub(crate) fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(i)) => i.to_string(),
        Some(Loose::Float(f)) => f.to_string(),
        Some(Loose::Bool(b)) => b.to_string(),
    })
}
