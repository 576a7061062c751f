use serde::Serialize;

use super::catalog::FormatConfig;
use crate::domain::MatchSetup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseCoverage {
    Full,
    Moderate,
    Limited,
}

impl PhaseCoverage {
    pub fn for_count(player_count: usize) -> Self {
        if player_count >= 10 {
            PhaseCoverage::Full
        } else if player_count >= 8 {
            PhaseCoverage::Moderate
        } else {
            PhaseCoverage::Limited
        }
    }
}

/// Rough role split and coverage to aim for with a given lineup size
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequirements {
    pub player_count: usize,
    pub min_bowling_options: usize,
    pub batters: usize,
    pub bowlers: usize,
    pub all_rounders: usize,
    pub phase_coverage: PhaseCoverage,
    pub warning: Option<String>,
}

fn share(player_count: usize, ratio: f64) -> usize {
    ((player_count as f64 * ratio).floor() as usize).max(1)
}

pub fn match_requirements(setup: &MatchSetup, format: &FormatConfig) -> MatchRequirements {
    let n = setup.target_size();
    MatchRequirements {
        player_count: n,
        min_bowling_options: format.min_bowlers.min(n.saturating_sub(3)),
        batters: share(n, 0.45),
        bowlers: share(n, 0.35),
        all_rounders: share(n, 0.2),
        phase_coverage: PhaseCoverage::for_count(n),
        warning: (n < 11).then(|| {
            format!(
                "Playing with {}: bowling coverage will be tight. Consider using more all-rounders.",
                n
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormatChoice;
    use crate::format::format_config;

    #[test]
    fn test_full_side() {
        let setup = MatchSetup::new(FormatChoice::T20, 11);
        let req = match_requirements(&setup, &format_config(&setup));
        assert_eq!(req.min_bowling_options, 5);
        assert_eq!((req.batters, req.bowlers, req.all_rounders), (4, 3, 2));
        assert_eq!(req.phase_coverage, PhaseCoverage::Full);
        assert!(req.warning.is_none());
    }

    #[test]
    fn test_short_side() {
        let setup = MatchSetup::new(FormatChoice::T10, 7);
        let req = match_requirements(&setup, &format_config(&setup));
        assert_eq!(req.min_bowling_options, 4);
        assert_eq!((req.batters, req.bowlers, req.all_rounders), (3, 2, 1));
        assert_eq!(req.phase_coverage, PhaseCoverage::Limited);
        assert!(req.warning.as_deref().unwrap_or_default().starts_with("Playing with 7"));
    }

    #[test]
    fn test_coverage_bands() {
        assert_eq!(PhaseCoverage::for_count(9), PhaseCoverage::Moderate);
        assert_eq!(PhaseCoverage::for_count(8), PhaseCoverage::Moderate);
        assert_eq!(PhaseCoverage::for_count(10), PhaseCoverage::Full);
    }
}
