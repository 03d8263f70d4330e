//! Read-only aggregation over ninjas, missions and their assignments.
//!
//! Each report is built from a single query, so it reflects one consistent
//! snapshot of the tables.

use konoha_core::report::{completion_rate, MissionTally};
use sqlx::PgExecutor;

use crate::models::report::{
    MissionAssignmentRow, MissionReportEntry, NinjaReportEntry, NinjaTotalsRow,
};

pub struct ReportRepo;

impl ReportRepo {
    /// Assignment counts and completion rate for every ninja.
    pub async fn ninja_report<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<NinjaReportEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, NinjaTotalsRow>(
            "SELECT n.id, n.name, n.rank, n.attack, n.defense, n.chakra, n.village,
                    n.abilities, n.registered_at,
                    COUNT(a.id) AS assigned_count,
                    COUNT(a.id) FILTER (WHERE a.completed) AS completed_count
             FROM ninjas n
             LEFT JOIN mission_assignments a ON a.ninja_id = n.id
             GROUP BY n.id
             ORDER BY n.id ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| NinjaReportEntry {
                completion_rate: completion_rate(row.assigned_count, row.completed_count),
                ninja: row.ninja,
                assigned_count: row.assigned_count,
                completed_count: row.completed_count,
            })
            .collect())
    }

    /// Assigned ninja names and completion flag for every mission.
    pub async fn mission_report<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<MissionReportEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MissionAssignmentRow>(
            "SELECT m.id, m.name, m.rank, m.reward, m.description, m.created_at,
                    n.name AS ninja_name, a.completed
             FROM missions m
             LEFT JOIN mission_assignments a ON a.mission_id = m.id
             LEFT JOIN ninjas n ON n.id = a.ninja_id
             ORDER BY m.id ASC, a.id ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(fold_mission_rows(rows))
    }
}

/// Group rows (ordered by mission) into one entry per mission.
fn fold_mission_rows(rows: Vec<MissionAssignmentRow>) -> Vec<MissionReportEntry> {
    let mut entries: Vec<(MissionAssignmentRow, MissionTally)> = Vec::new();

    for row in rows {
        let same_mission = entries
            .last()
            .is_some_and(|(first, _)| first.mission.id == row.mission.id);
        if !same_mission {
            entries.push((row.clone(), MissionTally::default()));
        }
        if let (Some(name), Some((_, tally))) = (row.ninja_name, entries.last_mut()) {
            tally.record(name, row.completed.unwrap_or(false));
        }
    }

    entries
        .into_iter()
        .map(|(first, tally)| MissionReportEntry {
            mission: first.mission,
            assigned_ninjas: tally.assigned_names,
            total_assignments: tally.total,
            completed: tally.any_completed,
        })
        .collect()
}
