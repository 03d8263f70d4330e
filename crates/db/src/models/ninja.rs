//! Ninja entity model and DTOs.

use konoha_core::abilities::{AbilitiesInput, AbilityList};
use konoha_core::error::CoreError;
use konoha_core::rank::NinjaRank;
use konoha_core::types::{DbId, Timestamp};
use konoha_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const DEFAULT_ATTACK: i32 = 50;
pub const DEFAULT_DEFENSE: i32 = 50;
pub const DEFAULT_CHAKRA: i32 = 100;
pub const DEFAULT_VILLAGE: &str = "Konohagakure";

/// A row from the `ninjas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ninja {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rango")]
    pub rank: String,
    #[serde(rename = "ataque")]
    pub attack: i32,
    #[serde(rename = "defensa")]
    pub defense: i32,
    pub chakra: i32,
    #[serde(rename = "aldea")]
    pub village: String,
    #[serde(rename = "jutsus")]
    #[sqlx(try_from = "String")]
    pub abilities: AbilityList,
    #[serde(rename = "fecha_registro")]
    pub registered_at: Timestamp,
}

/// Request body for `POST /api/ninjas`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNinja {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "rango")]
    pub rank: String,
    #[serde(rename = "ataque")]
    #[validate(range(min = 0))]
    pub attack: Option<i32>,
    #[serde(rename = "defensa")]
    #[validate(range(min = 0))]
    pub defense: Option<i32>,
    #[validate(range(min = 0))]
    pub chakra: Option<i32>,
    #[serde(rename = "aldea")]
    #[validate(length(max = 100))]
    pub village: Option<String>,
    #[serde(rename = "jutsus")]
    pub abilities: Option<AbilitiesInput>,
}

/// A validated ninja ready to insert, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNinja {
    pub name: String,
    pub rank: NinjaRank,
    pub attack: i32,
    pub defense: i32,
    pub chakra: i32,
    pub village: String,
    pub abilities: AbilityList,
}

impl CreateNinja {
    /// Check the rank and field constraints, then fill in defaults.
    pub fn into_new(self) -> Result<NewNinja, CoreError> {
        let rank = NinjaRank::from_str_value(&self.rank)?;
        validate_input(&self)?;
        let abilities = match self.abilities {
            Some(input) => input.into_list()?,
            None => AbilityList::default(),
        };
        Ok(NewNinja {
            name: self.name,
            rank,
            attack: self.attack.unwrap_or(DEFAULT_ATTACK),
            defense: self.defense.unwrap_or(DEFAULT_DEFENSE),
            chakra: self.chakra.unwrap_or(DEFAULT_CHAKRA),
            village: self.village.unwrap_or_else(|| DEFAULT_VILLAGE.to_string()),
            abilities,
        })
    }
}

/// Request body for `PUT /api/ninjas/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNinja {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(rename = "rango")]
    pub rank: Option<String>,
    #[serde(rename = "ataque")]
    #[validate(range(min = 0))]
    pub attack: Option<i32>,
    #[serde(rename = "defensa")]
    #[validate(range(min = 0))]
    pub defense: Option<i32>,
    #[validate(range(min = 0))]
    pub chakra: Option<i32>,
    #[serde(rename = "aldea")]
    #[validate(length(max = 100))]
    pub village: Option<String>,
    #[serde(rename = "jutsus")]
    pub abilities: Option<AbilitiesInput>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NinjaChanges {
    pub name: Option<String>,
    pub rank: Option<NinjaRank>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub chakra: Option<i32>,
    pub village: Option<String>,
    pub abilities: Option<AbilityList>,
}

impl UpdateNinja {
    /// Validate the supplied fields.
    ///
    /// An unrecognised rank is dropped from the update instead of failing it.
    pub fn into_changes(self) -> Result<NinjaChanges, CoreError> {
        validate_input(&self)?;
        let rank = match self.rank.as_deref().map(NinjaRank::from_str_value) {
            Some(Ok(rank)) => Some(rank),
            Some(Err(_)) => {
                tracing::warn!(rank = ?self.rank, "Ignoring invalid rank in ninja update");
                None
            }
            None => None,
        };
        let abilities = self.abilities.map(AbilitiesInput::into_list).transpose()?;
        Ok(NinjaChanges {
            name: self.name,
            rank,
            attack: self.attack,
            defense: self.defense,
            chakra: self.chakra,
            village: self.village,
            abilities,
        })
    }
}
