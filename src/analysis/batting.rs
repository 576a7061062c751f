use std::cmp::Reverse;

use serde::Serialize;

use super::percent_of;
use crate::domain::{FormatChoice, MatchSetup, PlayerId, Role, RosterSnapshot};
use crate::format::FormatConfig;
use crate::scoring::{PlayerScores, Score};
use crate::selection::eligible;

const ROLE_LIST_SIZE: usize = 4;
const RADAR_PLAYERS: usize = 5;
const MAX_HITTERS_LONG_FORMAT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterProfile {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub aggression: Score,
    pub stability: Score,
    pub finishing: Score,
    pub runs: f64,
    pub strike_rate: f64,
    pub average: f64,
    pub innings: f64,
}

impl BatterProfile {
    fn is_anchor(&self) -> bool {
        self.stability > self.aggression
    }

    fn is_hitter(&self) -> bool {
        self.aggression > self.stability
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub player_id: PlayerId,
    pub name: String,
    pub value: Score,
}

/// One axis of the radar chart, values normalised to the squad maximum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub stat: String,
    pub values: Vec<RadarPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingAnalysis {
    pub format: String,
    pub powerplay_overs: u32,
    /// Everyone with at least one innings, most runs first
    pub batters: Vec<BatterProfile>,
    pub top_order: Vec<BatterProfile>,
    pub middle_order: Vec<BatterProfile>,
    pub finishers: Vec<BatterProfile>,
    pub radar: Vec<RadarSeries>,
    pub warnings: Vec<String>,
}

fn top_by(batters: &[BatterProfile], key: impl Fn(&BatterProfile) -> Score) -> Vec<BatterProfile> {
    let mut sorted = batters.to_vec();
    sorted.sort_by_key(|b| Reverse(key(b)));
    sorted.truncate(ROLE_LIST_SIZE);
    sorted
}

fn radar(batters: &[BatterProfile]) -> Vec<RadarSeries> {
    let axes: [(&str, fn(&BatterProfile) -> f64); 5] = [
        ("Aggression", |b| b.aggression as f64),
        ("Stability", |b| b.stability as f64),
        ("Finishing", |b| b.finishing as f64),
        ("Strike Rate", |b| b.strike_rate),
        ("Run Volume", |b| b.runs),
    ];

    axes.iter()
        .map(|(stat, value)| {
            let max = batters.iter().map(value).fold(0.0, f64::max);
            RadarSeries {
                stat: stat.to_string(),
                values: batters
                    .iter()
                    .take(RADAR_PLAYERS)
                    .map(|b| RadarPoint {
                        player_id: b.player_id,
                        name: b.name.clone(),
                        value: percent_of(value(b), max),
                    })
                    .collect(),
            }
        })
        .collect()
}

fn warnings(setup: &MatchSetup, format: &FormatConfig, batters: &[BatterProfile], finishers: usize) -> Vec<String> {
    let anchors = batters.iter().filter(|b| b.is_anchor()).count();
    let hitters = batters.iter().filter(|b| b.is_hitter()).count();

    let mut warnings = Vec::new();
    match setup.format {
        FormatChoice::T10 | FormatChoice::T5 if anchors as u32 > format.anchors_needed + 1 => {
            warnings.push(format!(
                "Too many anchors ({}) for {}. Power hitters should be prioritized.",
                anchors, format.label
            ));
        }
        _ => {}
    }
    if setup.format == FormatChoice::T5 && finishers < 3 {
        warnings.push("Not enough death-overs hitters for T5. Need at least 3 finishers.".to_string());
    }
    if matches!(setup.format, FormatChoice::T20 | FormatChoice::T15) && hitters > MAX_HITTERS_LONG_FORMAT {
        warnings.push(format!(
            "{} aggressive hitters may compromise stability in {}.",
            hitters, format.label
        ));
    }
    warnings
}

/// Splits the eligible batters into top order, middle order and finishers
/// for the configured format
pub fn batting_analysis(snapshot: &RosterSnapshot, setup: &MatchSetup, format: &FormatConfig) -> BattingAnalysis {
    let mut batters: Vec<BatterProfile> = eligible(&snapshot.squad)
        .into_iter()
        .map(|p| {
            let stats = snapshot.stats_for(p.player_id);
            let scores = PlayerScores::compute(&stats);
            BatterProfile {
                player_id: p.player_id,
                name: p.name.clone(),
                role: p.role,
                aggression: scores.aggression,
                stability: scores.stability,
                finishing: scores.finishing,
                runs: stats.runs(),
                strike_rate: stats.strike_rate(),
                average: stats.batting_average(),
                innings: stats.batting_innings(),
            }
        })
        .filter(|b| b.innings > 0.0)
        .collect();
    batters.sort_by(|a, b| b.runs.total_cmp(&a.runs));

    let top_order = top_by(&batters, |b| b.aggression);
    let middle_order = top_by(&batters, |b| b.stability);
    let finishers = top_by(&batters, |b| b.finishing);
    let warnings = warnings(setup, format, &batters, finishers.len());

    BattingAnalysis {
        format: format.label.clone(),
        powerplay_overs: format.powerplay_overs,
        radar: radar(&batters),
        batters,
        top_order,
        middle_order,
        finishers,
        warnings,
    }
}
