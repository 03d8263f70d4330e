//! Ninja ability (jutsu) lists.
//!
//! Abilities are persisted as a single comma-joined TEXT column and exposed
//! over the API as an ordered array of strings.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Separator used in the stored form.
pub const ABILITY_DELIMITER: char = ',';

/// Ordered list of ability names.
///
/// Serializes as a plain JSON array. Converting from the stored string maps
/// the empty string to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AbilityList(Vec<String>);

impl AbilityList {
    /// Build a list from individual names, rejecting empty names and names
    /// containing the delimiter (neither survives a store/load cycle).
    pub fn new(abilities: Vec<String>) -> Result<Self, CoreError> {
        if abilities.iter().any(String::is_empty) {
            return Err(CoreError::Validation(
                "El nombre de un jutsu no puede estar vacío".to_string(),
            ));
        }
        if let Some(bad) = abilities.iter().find(|a| a.contains(ABILITY_DELIMITER)) {
            return Err(CoreError::Validation(format!(
                "El jutsu '{bad}' no puede contener '{ABILITY_DELIMITER}'"
            )));
        }
        Ok(Self(abilities))
    }

    /// Parse the stored comma-joined form.
    pub fn from_stored(stored: &str) -> Self {
        if stored.is_empty() {
            return Self::default();
        }
        Self(
            stored
                .split(ABILITY_DELIMITER)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Render the stored comma-joined form.
    pub fn to_stored(&self) -> String {
        self.0.join(&ABILITY_DELIMITER.to_string())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<String> for AbilityList {
    fn from(stored: String) -> Self {
        Self::from_stored(&stored)
    }
}

/// Abilities as accepted in request bodies: either an array of names or an
/// already comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AbilitiesInput {
    List(Vec<String>),
    Joined(String),
}

impl AbilitiesInput {
    pub fn into_list(self) -> Result<AbilityList, CoreError> {
        match self {
            Self::List(items) => AbilityList::new(items),
            Self::Joined(stored) => AbilityList::new(AbilityList::from_stored(&stored).0),
        }
    }
}
