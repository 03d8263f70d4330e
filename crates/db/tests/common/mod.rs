//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use konoha_core::abilities::AbilityList;
use konoha_core::rank::{MissionRank, NinjaRank};
use konoha_db::models::mission::{Mission, NewMission};
use konoha_db::models::ninja::{NewNinja, Ninja};
use konoha_db::repositories::{MissionRepo, NinjaRepo};
use sqlx::PgPool;

pub fn new_ninja(name: &str, rank: NinjaRank) -> NewNinja {
    NewNinja {
        name: name.to_string(),
        rank,
        attack: 50,
        defense: 50,
        chakra: 100,
        village: "Konohagakure".to_string(),
        abilities: AbilityList::default(),
    }
}

pub fn new_mission(name: &str, rank: MissionRank) -> NewMission {
    NewMission {
        name: name.to_string(),
        rank,
        reward: 0,
        description: String::new(),
    }
}

pub async fn seed_ninja(pool: &PgPool, name: &str, rank: NinjaRank) -> Ninja {
    NinjaRepo::create(pool, &new_ninja(name, rank)).await.unwrap()
}

pub async fn seed_mission(pool: &PgPool, name: &str, rank: MissionRank) -> Mission {
    MissionRepo::create(pool, &new_mission(name, rank))
        .await
        .unwrap()
}
