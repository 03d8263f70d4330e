//! Ninja and mission rank scales and the eligibility rule between them.
//!
//! Ninja ranks form a three-tier scale. Mission ranks use five labels that
//! collapse onto the same three eligibility tiers (`D`/`C` -> 1, `B` -> 2,
//! `A`/`S` -> 3). A ninja may take a mission when its tier is at least the
//! mission's tier.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const RANK_GENIN: &str = "Genin";
pub const RANK_CHUNIN: &str = "Chūnin";
pub const RANK_JONIN: &str = "Jōnin";

/// All valid ninja rank labels, lowest to highest.
pub const VALID_NINJA_RANKS: &[&str] = &[RANK_GENIN, RANK_CHUNIN, RANK_JONIN];

pub const RANK_D: &str = "D";
pub const RANK_C: &str = "C";
pub const RANK_B: &str = "B";
pub const RANK_A: &str = "A";
pub const RANK_S: &str = "S";

/// All valid mission rank labels, lowest to highest.
pub const VALID_MISSION_RANKS: &[&str] = &[RANK_D, RANK_C, RANK_B, RANK_A, RANK_S];

/// Tier assigned to any label outside the known scales.
pub const UNKNOWN_ORDINAL: u8 = 0;

// ---------------------------------------------------------------------------
// Ninja rank
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NinjaRank {
    Genin,
    Chunin,
    Jonin,
}

impl NinjaRank {
    /// Parse a stored or user-supplied label.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            RANK_GENIN => Ok(Self::Genin),
            RANK_CHUNIN => Ok(Self::Chunin),
            RANK_JONIN => Ok(Self::Jonin),
            _ => Err(invalid_rank(VALID_NINJA_RANKS)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genin => RANK_GENIN,
            Self::Chunin => RANK_CHUNIN,
            Self::Jonin => RANK_JONIN,
        }
    }

    /// Eligibility tier (1..=3).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Genin => 1,
            Self::Chunin => 2,
            Self::Jonin => 3,
        }
    }

    /// Whether a ninja of this rank may be assigned a mission of `mission` rank.
    pub fn can_take(self, mission: MissionRank) -> bool {
        self.ordinal() >= mission.ordinal()
    }
}

// ---------------------------------------------------------------------------
// Mission rank
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissionRank {
    D,
    C,
    B,
    A,
    S,
}

impl MissionRank {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            RANK_D => Ok(Self::D),
            RANK_C => Ok(Self::C),
            RANK_B => Ok(Self::B),
            RANK_A => Ok(Self::A),
            RANK_S => Ok(Self::S),
            _ => Err(invalid_rank(VALID_MISSION_RANKS)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => RANK_D,
            Self::C => RANK_C,
            Self::B => RANK_B,
            Self::A => RANK_A,
            Self::S => RANK_S,
        }
    }

    /// Eligibility tier (1..=3). `D`/`C` and `A`/`S` share a tier.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::D | Self::C => 1,
            Self::B => 2,
            Self::A | Self::S => 3,
        }
    }
}

fn invalid_rank(valid: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "Rango inválido. Debe ser uno de: {}",
        valid.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Eligibility on raw labels
// ---------------------------------------------------------------------------

/// Tier of a ninja rank label, or [`UNKNOWN_ORDINAL`] for unknown labels.
pub fn ninja_rank_ordinal(label: &str) -> u8 {
    NinjaRank::from_str_value(label).map_or(UNKNOWN_ORDINAL, NinjaRank::ordinal)
}

/// Tier of a mission rank label, or [`UNKNOWN_ORDINAL`] for unknown labels.
pub fn mission_rank_ordinal(label: &str) -> u8 {
    MissionRank::from_str_value(label).map_or(UNKNOWN_ORDINAL, MissionRank::ordinal)
}

/// Decide whether a ninja of `ninja_rank` may take a mission of `mission_rank`.
///
/// Unknown labels map to tier 0: an unknown ninja rank never satisfies a
/// known mission, and an unknown mission rank is satisfied by anyone.
pub fn is_eligible(ninja_rank: &str, mission_rank: &str) -> bool {
    ninja_rank_ordinal(ninja_rank) >= mission_rank_ordinal(mission_rank)
}

/// Run the eligibility rule and build the rejection message on failure.
pub fn check_eligibility(
    ninja_name: &str,
    ninja_rank: &str,
    mission_rank: &str,
) -> Result<(), CoreError> {
    if is_eligible(ninja_rank, mission_rank) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{ninja_name} (rango {ninja_rank}) no tiene el rango suficiente para la misión {mission_rank}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn genin_can_take_d_and_c() {
        assert!(is_eligible("Genin", "D"));
        assert!(is_eligible("Genin", "C"));
    }

    #[test]
    fn genin_cannot_take_b_or_above() {
        assert!(!is_eligible("Genin", "B"));
        assert!(!is_eligible("Genin", "A"));
        assert!(!is_eligible("Genin", "S"));
    }

    #[test]
    fn chunin_tops_out_at_b() {
        assert!(is_eligible("Chūnin", "B"));
        assert!(!is_eligible("Chūnin", "A"));
        assert!(!is_eligible("Chūnin", "S"));
    }

    #[test]
    fn jonin_can_take_everything() {
        for mission in VALID_MISSION_RANKS {
            assert!(is_eligible("Jōnin", mission), "Jōnin should take {mission}");
        }
    }

    #[test]
    fn string_rule_matches_typed_rule_for_all_valid_pairs() {
        for ninja in VALID_NINJA_RANKS {
            for mission in VALID_MISSION_RANKS {
                let typed = NinjaRank::from_str_value(ninja)
                    .unwrap()
                    .can_take(MissionRank::from_str_value(mission).unwrap());
                assert_eq!(is_eligible(ninja, mission), typed, "{ninja}/{mission}");
            }
        }
    }

    #[test]
    fn unknown_ninja_rank_never_qualifies() {
        assert_eq!(ninja_rank_ordinal("Kage"), UNKNOWN_ORDINAL);
        assert!(!is_eligible("Kage", "D"));
    }

    #[test]
    fn unknown_mission_rank_always_qualifies() {
        assert_eq!(mission_rank_ordinal("Z"), UNKNOWN_ORDINAL);
        assert!(is_eligible("Genin", "Z"));
    }

    #[test]
    fn unaccented_labels_are_unknown() {
        assert_matches!(
            NinjaRank::from_str_value("Chunin"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn labels_round_trip() {
        for label in VALID_NINJA_RANKS {
            assert_eq!(NinjaRank::from_str_value(label).unwrap().as_str(), *label);
        }
        for label in VALID_MISSION_RANKS {
            assert_eq!(MissionRank::from_str_value(label).unwrap().as_str(), *label);
        }
    }

    #[test]
    fn invalid_rank_message_lists_valid_labels() {
        let err = NinjaRank::from_str_value("Kage").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Rango inválido. Debe ser uno de: Genin, Chūnin, Jōnin"
        );
    }

    #[test]
    fn check_eligibility_names_ninja_and_ranks() {
        let err = check_eligibility("Naruto", "Genin", "S").unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("Naruto")
            && msg.contains("Genin")
            && msg.contains("misión S"));
    }

    #[test]
    fn check_eligibility_passes_for_equal_tier() {
        assert!(check_eligibility("Kakashi", "Jōnin", "S").is_ok());
    }
}
