//! Integration tests for assignment creation, completion and reports.

#![cfg(feature = "postgres-tests")]

mod common;

use common::{seed_mission, seed_ninja};
use konoha_core::rank::{MissionRank, NinjaRank};
use konoha_db::repositories::{AssignmentRepo, ReportRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_assignment_is_incomplete(pool: PgPool) {
    let ninja = seed_ninja(&pool, "Hinata", NinjaRank::Chunin).await;
    let mission = seed_mission(&pool, "Patrol", MissionRank::C).await;

    let assignment = AssignmentRepo::create(&pool, ninja.id, mission.id)
        .await
        .unwrap();

    assert_eq!(assignment.ninja_name, "Hinata");
    assert_eq!(assignment.mission_name, "Patrol");
    assert!(!assignment.completed);
    assert!(assignment.completed_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_requires_existing_references(pool: PgPool) {
    let ninja = seed_ninja(&pool, "Kiba", NinjaRank::Genin).await;
    let result = AssignmentRepo::create(&pool, ninja.id, 999_999).await;
    assert!(result.is_err());
    assert!(AssignmentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_twice_refreshes_timestamp(pool: PgPool) {
    let ninja = seed_ninja(&pool, "Shino", NinjaRank::Chunin).await;
    let mission = seed_mission(&pool, "Bug hunt", MissionRank::B).await;
    let assignment = AssignmentRepo::create(&pool, ninja.id, mission.id)
        .await
        .unwrap();

    let first = AssignmentRepo::complete(&pool, assignment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(first.completed);
    let first_at = first.completed_at.expect("completion time set");

    let second = AssignmentRepo::complete(&pool, assignment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(second.completed);
    assert!(second.completed_at.expect("completion time set") > first_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_missing_assignment_returns_none(pool: PgPool) {
    let result = AssignmentRepo::complete(&pool, 777).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ninja_report_counts_and_rate(pool: PgPool) {
    let idle = seed_ninja(&pool, "Idle", NinjaRank::Genin).await;
    let busy = seed_ninja(&pool, "Busy", NinjaRank::Jonin).await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let mission = seed_mission(&pool, &format!("Mission {i}"), MissionRank::A).await;
        let a = AssignmentRepo::create(&pool, busy.id, mission.id)
            .await
            .unwrap();
        ids.push(a.id);
    }
    AssignmentRepo::complete(&pool, ids[0]).await.unwrap();

    let report = ReportRepo::ninja_report(&pool).await.unwrap();
    assert_eq!(report.len(), 2);

    let idle_entry = report.iter().find(|e| e.ninja.id == idle.id).unwrap();
    assert_eq!(idle_entry.assigned_count, 0);
    assert_eq!(idle_entry.completion_rate, 0.0);

    let busy_entry = report.iter().find(|e| e.ninja.id == busy.id).unwrap();
    assert_eq!(busy_entry.assigned_count, 4);
    assert_eq!(busy_entry.completed_count, 1);
    assert_eq!(busy_entry.completion_rate, 25.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mission_report_completed_when_any_assignment_done(pool: PgPool) {
    let naruto = seed_ninja(&pool, "Naruto", NinjaRank::Jonin).await;
    let sasuke = seed_ninja(&pool, "Sasuke", NinjaRank::Jonin).await;
    let mission = seed_mission(&pool, "Retrieve scroll", MissionRank::S).await;
    let unassigned = seed_mission(&pool, "Garden work", MissionRank::D).await;

    let first = AssignmentRepo::create(&pool, naruto.id, mission.id)
        .await
        .unwrap();
    AssignmentRepo::create(&pool, sasuke.id, mission.id)
        .await
        .unwrap();
    AssignmentRepo::complete(&pool, first.id).await.unwrap();

    let report = ReportRepo::mission_report(&pool).await.unwrap();
    assert_eq!(report.len(), 2);

    let entry = report.iter().find(|e| e.mission.id == mission.id).unwrap();
    assert_eq!(entry.assigned_ninjas, ["Naruto", "Sasuke"]);
    assert_eq!(entry.total_assignments, 2);
    assert!(entry.completed);

    let empty = report.iter().find(|e| e.mission.id == unassigned.id).unwrap();
    assert!(empty.assigned_ninjas.is_empty());
    assert!(!empty.completed);
}
