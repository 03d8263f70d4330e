//! Mission entity model and DTOs.

use konoha_core::error::CoreError;
use konoha_core::rank::MissionRank;
use konoha_core::types::{DbId, Timestamp};
use konoha_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rango")]
    pub rank: String,
    #[serde(rename = "recompensa")]
    pub reward: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha_creacion")]
    pub created_at: Timestamp,
}

/// Request body for `POST /api/misiones`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMission {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "rango")]
    pub rank: String,
    #[serde(rename = "recompensa")]
    #[validate(range(min = 0))]
    pub reward: Option<i32>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// A validated mission ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMission {
    pub name: String,
    pub rank: MissionRank,
    pub reward: i32,
    pub description: String,
}

impl CreateMission {
    pub fn into_new(self) -> Result<NewMission, CoreError> {
        let rank = MissionRank::from_str_value(&self.rank)?;
        validate_input(&self)?;
        Ok(NewMission {
            name: self.name,
            rank,
            reward: self.reward.unwrap_or(0),
            description: self.description.unwrap_or_default(),
        })
    }
}
