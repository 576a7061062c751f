use serde::Serialize;

use crate::domain::{CombinationPlayer, TeamCombination};
use crate::format::{FormatConfig, min_bowlers_for_count};

/// One advisory check on a lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationCheck {
    pub label: String,
    pub satisfied: bool,
    /// Shortfall description when the check fails, empty otherwise
    pub detail: String,
}

impl ValidationCheck {
    fn new(label: String, satisfied: bool, shortfall: String) -> Self {
        Self {
            label,
            satisfied,
            detail: if satisfied { String::new() } else { shortfall },
        }
    }
}

/// Checks a lineup against the structural requirements of its format.
/// Never fails; the caller decides what to do with unmet checks.
pub fn validate(lineup: &[CombinationPlayer], format: &FormatConfig, target_size: usize) -> Vec<ValidationCheck> {
    let min_bowlers = min_bowlers_for_count(target_size, format);
    let bowlers = lineup.iter().filter(|p| p.role.can_bowl()).count();
    let keepers = lineup.iter().filter(|p| p.is_keeper).count();
    let has_captain = lineup.iter().any(|p| p.is_captain);

    vec![
        ValidationCheck::new(
            format!("{} players selected", target_size),
            lineup.len() == target_size,
            format!("{}/{} players selected", lineup.len(), target_size),
        ),
        ValidationCheck::new(
            format!("{}+ bowling options", min_bowlers),
            bowlers >= min_bowlers,
            format!("Only {}/{} bowling options", bowlers, min_bowlers),
        ),
        ValidationCheck::new(
            "Wicketkeeper assigned".to_string(),
            keepers >= 1,
            "No wicketkeeper assigned".to_string(),
        ),
        ValidationCheck::new(
            "Captain assigned".to_string(),
            has_captain,
            "No captain assigned".to_string(),
        ),
    ]
}

/// Validates a saved combination against its own size tag, falling back to
/// the number of players it holds.
pub fn validate_combination(combination: &TeamCombination, format: &FormatConfig) -> Vec<ValidationCheck> {
    let target = combination.size.unwrap_or(combination.players.len());
    validate(&combination.players, format, target)
}

/// Shortfall messages of the failed checks
pub fn unmet(checks: &[ValidationCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|c| !c.satisfied)
        .map(|c| c.detail.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BattingPhase, FormatChoice, MatchSetup, Role};
    use crate::format::format_config;

    fn slot(id: i64, role: Role, order: u32) -> CombinationPlayer {
        CombinationPlayer {
            player_id: id,
            role,
            batting_order: order,
            bowling_priority: None,
            is_captain: false,
            is_vice_captain: false,
            is_keeper: role == Role::Keeper,
            batting_phase: BattingPhase::Top,
            bowling_phase: None,
        }
    }

    fn t20() -> FormatConfig {
        format_config(&MatchSetup::new(FormatChoice::T20, 11))
    }

    #[test]
    fn test_empty_lineup_fails_everything() {
        let checks = validate(&[], &t20(), 11);
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| !c.satisfied));
        assert_eq!(
            unmet(&checks),
            vec![
                "0/11 players selected".to_string(),
                "Only 0/5 bowling options".to_string(),
                "No wicketkeeper assigned".to_string(),
                "No captain assigned".to_string(),
            ]
        );
    }

    #[test]
    fn test_complete_lineup_passes() {
        let mut lineup = vec![slot(1, Role::Keeper, 1)];
        lineup.extend((2..=6).map(|id| slot(id, Role::Bowler, id as u32)));
        lineup.extend((7..=11).map(|id| slot(id, Role::Batter, id as u32)));
        lineup[0].is_captain = true;

        let checks = validate(&lineup, &t20(), 11);
        assert!(checks.iter().all(|c| c.satisfied));
        assert!(checks.iter().all(|c| c.detail.is_empty()));
    }

    #[test]
    fn test_short_lineup_relaxes_bowler_floor() {
        let lineup: Vec<_> = (1..=4).map(|id| slot(id, Role::AllRounder, id as u32)).collect();
        let checks = validate(&lineup, &t20(), 7);
        assert_eq!(checks[1].label, "4+ bowling options");
        assert!(checks[1].satisfied);
        assert!(!checks[0].satisfied);
    }

    #[test]
    fn test_combination_uses_size_tag() {
        let mut combo = TeamCombination::new("Eight", (1..=8).map(|id| slot(id, Role::Batter, id as u32)).collect());
        combo.size = Some(8);
        let checks = validate_combination(&combo, &t20());
        assert!(checks[0].satisfied);
        assert_eq!(checks[1].label, "4+ bowling options");
    }
}
