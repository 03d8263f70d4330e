//! Arithmetic behind the ninja and mission reports.

/// Percentage of completed assignments, rounded to two decimals.
///
/// Returns `0.0` when nothing has been assigned.
pub fn completion_rate(assigned: i64, completed: i64) -> f64 {
    if assigned <= 0 {
        return 0.0;
    }
    let rate = completed as f64 / assigned as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Running tally of the assignments for one mission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionTally {
    /// Assigned ninja names, in assignment order.
    pub assigned_names: Vec<String>,
    pub total: i64,
    /// True once any assignment has been completed.
    pub any_completed: bool,
}

impl MissionTally {
    pub fn record(&mut self, ninja_name: impl Into<String>, completed: bool) {
        self.assigned_names.push(ninja_name.into());
        self.total += 1;
        self.any_completed |= completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_zero_without_assignments() {
        assert_eq!(completion_rate(0, 0), 0.0);
    }

    #[test]
    fn one_of_four_is_twenty_five_percent() {
        assert_eq!(completion_rate(4, 1), 25.0);
    }

    #[test]
    fn rate_rounds_to_two_decimals() {
        assert_eq!(completion_rate(3, 1), 33.33);
        assert_eq!(completion_rate(3, 2), 66.67);
    }

    #[test]
    fn all_completed_is_one_hundred() {
        assert_eq!(completion_rate(2, 2), 100.0);
    }

    #[test]
    fn empty_tally_is_not_completed() {
        let tally = MissionTally::default();
        assert_eq!(tally.total, 0);
        assert!(!tally.any_completed);
    }

    #[test]
    fn one_completed_assignment_marks_mission_completed() {
        let mut tally = MissionTally::default();
        tally.record("Naruto", false);
        tally.record("Sakura", true);
        tally.record("Sasuke", false);
        assert!(tally.any_completed);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.assigned_names, ["Naruto", "Sakura", "Sasuke"]);
    }
}
