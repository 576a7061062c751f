use serde::Serialize;

use super::weights::*;
use crate::domain::{PlayerId, PlayerStats};

pub type Score = i64;

/// Rounds half up, so 2.5 -> 3 and -2.5 -> -2
/// Inputs are weighted career stats, far inside the i64 range.
pub fn round_half_up(value: f64) -> Score {
    (value + 0.5).floor() as Score
}

/// Economy bonus against a baseline; a player with no recorded economy
/// (never bowled) earns nothing.
fn economy_bonus(stats: &PlayerStats, baseline: f64) -> f64 {
    let economy = stats.economy();
    if economy > 0.0 {
        (baseline - economy).max(0.0)
    } else {
        0.0
    }
}

pub fn aggression_index(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.strike_rate() * AGGRESSION_STRIKE_RATE
            + stats.sixes() * AGGRESSION_SIX
            + stats.fours() * AGGRESSION_FOUR,
    )
}

pub fn stability_score(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.batting_average() * STABILITY_AVERAGE
            + stats.thirties() * STABILITY_THIRTY
            + stats.fifties() * STABILITY_FIFTY
            + stats.hundreds() * STABILITY_HUNDRED,
    )
}

pub fn finishing_power(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.strike_rate() * FINISHING_STRIKE_RATE
            + stats.not_outs() * FINISHING_NOT_OUT
            + stats.sixes() * FINISHING_SIX,
    )
}

pub fn bowling_depth_score(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.wickets() * DEPTH_WICKET
            + economy_bonus(stats, DEPTH_ECONOMY_BASELINE) * DEPTH_ECONOMY
            + stats.three_wicket_hauls() * DEPTH_THREE_WICKET_HAUL,
    )
}

pub fn death_bowling_strength(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.wickets() * DEATH_WICKET + economy_bonus(stats, DEATH_ECONOMY_BASELINE) * DEATH_ECONOMY,
    )
}

pub fn player_form_score(stats: &PlayerStats) -> Score {
    round_half_up(
        stats.runs() * FORM_RUN
            + stats.batting_average() * FORM_AVERAGE
            + stats.strike_rate() * FORM_STRIKE_RATE
            + stats.wickets() * FORM_WICKET
            + economy_bonus(stats, FORM_ECONOMY_BASELINE) * FORM_ECONOMY
            + stats.catches() * FORM_CATCH,
    )
}

/// All six composite metrics of one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScores {
    pub player_id: PlayerId,
    pub form: Score,
    pub aggression: Score,
    pub stability: Score,
    pub finishing: Score,
    pub bowling_depth: Score,
    pub death_bowling: Score,
}

impl PlayerScores {
    pub fn compute(stats: &PlayerStats) -> Self {
        Self {
            player_id: stats.player_id,
            form: player_form_score(stats),
            aggression: aggression_index(stats),
            stability: stability_score(stats),
            finishing: finishing_power(stats),
            bowling_depth: bowling_depth_score(stats),
            death_bowling: death_bowling_strength(stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BattingStats, BowlingStats, FieldingStats};

    fn batter() -> PlayerStats {
        PlayerStats {
            player_id: 1,
            name: "Batter".to_string(),
            batting: Some(BattingStats {
                runs: Some(250.0),
                average: Some(25.0),
                strike_rate: Some(120.0),
                not_outs: Some(2.0),
                fours: Some(20.0),
                sixes: Some(5.0),
                thirties: Some(3.0),
                fifties: Some(1.0),
                ..BattingStats::default()
            }),
            bowling: None,
            fielding: Some(FieldingStats {
                catches: Some(4.0),
                ..FieldingStats::default()
            }),
        }
    }

    fn bowler() -> PlayerStats {
        PlayerStats {
            player_id: 2,
            name: "Bowler".to_string(),
            batting: None,
            bowling: Some(BowlingStats {
                wickets: Some(12.0),
                economy: Some(6.5),
                three_wicket_hauls: Some(2.0),
                ..BowlingStats::default()
            }),
            fielding: None,
        }
    }

    #[test]
    fn test_absent_categories_score_zero() {
        let empty = PlayerStats::empty(9);
        assert_eq!(aggression_index(&empty), 0);
        assert_eq!(stability_score(&empty), 0);
        assert_eq!(finishing_power(&empty), 0);
        assert_eq!(bowling_depth_score(&empty), 0);
        assert_eq!(death_bowling_strength(&empty), 0);
        assert_eq!(player_form_score(&empty), 0);

        assert_eq!(bowling_depth_score(&batter()), 0);
        assert_eq!(death_bowling_strength(&batter()), 0);
        assert_eq!(aggression_index(&bowler()), 0);
        assert_eq!(stability_score(&bowler()), 0);
    }

    #[test]
    fn test_batting_metrics() {
        let stats = batter();
        // 72 + 20 + 40
        assert_eq!(aggression_index(&stats), 132);
        // 50 + 15 + 10
        assert_eq!(stability_score(&stats), 75);
        // 60 + 6 + 25
        assert_eq!(finishing_power(&stats), 91);
        // 50 + 37.5 + 36 + 8 = 131.5
        assert_eq!(player_form_score(&stats), 132);
    }

    #[test]
    fn test_bowling_metrics() {
        let stats = bowler();
        // 60 + 14 + 16
        assert_eq!(bowling_depth_score(&stats), 90);
        // 36 + 27.5
        assert_eq!(death_bowling_strength(&stats), 64);
        // 48 + 7
        assert_eq!(player_form_score(&stats), 55);
    }

    #[test]
    fn test_expensive_economy_floors_at_zero() {
        let mut stats = bowler();
        if let Some(bowling) = stats.bowling.as_mut() {
            bowling.economy = Some(14.0);
        }
        assert_eq!(bowling_depth_score(&stats), 76);
        assert_eq!(death_bowling_strength(&stats), 36);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
    }
}
