use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PlayerId = i64;

/// Roster entry as delivered by the stats export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Free-form role hint from the export ("WK" marks a keeper)
    #[serde(default)]
    pub sub_title: String,
    #[serde(default, alias = "profile_pic_url")]
    pub photo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "BAT")]
    Batter,
    #[serde(rename = "BOWL")]
    Bowler,
    #[serde(rename = "ALL")]
    AllRounder,
    #[serde(rename = "WK")]
    Keeper,
}

impl Role {
    /// Bowlers and all-rounders count towards the bowling attack
    pub fn can_bowl(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }

    /// Batters, all-rounders and keepers count towards the batting order
    pub fn can_bat(&self) -> bool {
        matches!(self, Role::Batter | Role::AllRounder | Role::Keeper)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Batter => "BAT",
            Role::Bowler => "BOWL",
            Role::AllRounder => "ALL",
            Role::Keeper => "WK",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "BAT" => Some(Role::Batter),
            "BOWL" => Some(Role::Bowler),
            "ALL" => Some(Role::AllRounder),
            "WK" => Some(Role::Keeper),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BowlingStyle {
    Fast,
    Spin,
    Medium,
    #[serde(rename = "N/A")]
    None,
}

impl BowlingStyle {
    pub fn as_str(&self) -> &str {
        match self {
            BowlingStyle::Fast => "Fast",
            BowlingStyle::Spin => "Spin",
            BowlingStyle::Medium => "Medium",
            BowlingStyle::None => "N/A",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "fast" => Some(BowlingStyle::Fast),
            "spin" => Some(BowlingStyle::Spin),
            "medium" => Some(BowlingStyle::Medium),
            "n/a" | "none" => Some(BowlingStyle::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fitness {
    Fit,
    Injured,
    Doubtful,
    Recovering,
}

impl Fitness {
    pub fn as_str(&self) -> &str {
        match self {
            Fitness::Fit => "Fit",
            Fitness::Injured => "Injured",
            Fitness::Doubtful => "Doubtful",
            Fitness::Recovering => "Recovering",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "fit" => Some(Fitness::Fit),
            "injured" => Some(Fitness::Injured),
            "doubtful" => Some(Fitness::Doubtful),
            "recovering" => Some(Fitness::Recovering),
            _ => None,
        }
    }
}

/// A roster player together with the selection state admins toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadPlayer {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub photo: String,
    pub role: Role,
    #[serde(rename = "bowlingType")]
    pub bowling_style: BowlingStyle,
    #[serde(rename = "preferredPosition", default)]
    pub preferred_position: u32,
    pub available: bool,
    pub active: bool,
    pub fitness: Fitness,
}

impl SquadPlayer {
    pub fn new(player_id: PlayerId, name: &str, role: Role) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            slug: String::new(),
            photo: String::new(),
            role,
            bowling_style: if role.can_bowl() { BowlingStyle::Medium } else { BowlingStyle::None },
            preferred_position: 0,
            available: true,
            active: true,
            fitness: Fitness::Fit,
        }
    }

    /// Active, available and fit
    pub fn is_eligible(&self) -> bool {
        self.active && self.available && self.fitness == Fitness::Fit
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingStats {
    pub innings: Option<f64>,
    pub runs: Option<f64>,
    pub balls_faced: Option<f64>,
    pub highest_score: Option<f64>,
    pub average: Option<f64>,
    pub strike_rate: Option<f64>,
    pub not_outs: Option<f64>,
    pub fours: Option<f64>,
    pub sixes: Option<f64>,
    pub thirties: Option<f64>,
    pub fifties: Option<f64>,
    pub hundreds: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingStats {
    pub innings: Option<f64>,
    pub wickets: Option<f64>,
    pub runs_conceded: Option<f64>,
    pub economy: Option<f64>,
    pub average: Option<f64>,
    pub strike_rate: Option<f64>,
    pub maidens: Option<f64>,
    #[serde(alias = "three_wickets")]
    pub three_wicket_hauls: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldingStats {
    pub matches: Option<f64>,
    pub catches: Option<f64>,
    pub caught_behind: Option<f64>,
    pub run_outs: Option<f64>,
    pub stumpings: Option<f64>,
}

/// Aggregate performance counters for one player.
///
/// Every counter is optional in the export; readers go through the
/// accessor methods, which treat anything missing as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub batting: Option<BattingStats>,
    #[serde(default)]
    pub bowling: Option<BowlingStats>,
    #[serde(default)]
    pub fielding: Option<FieldingStats>,
}

fn read(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl PlayerStats {
    pub fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    fn bat(&self, field: impl Fn(&BattingStats) -> Option<f64>) -> f64 {
        read(self.batting.as_ref().and_then(field))
    }

    fn bowl(&self, field: impl Fn(&BowlingStats) -> Option<f64>) -> f64 {
        read(self.bowling.as_ref().and_then(field))
    }

    fn field(&self, field: impl Fn(&FieldingStats) -> Option<f64>) -> f64 {
        read(self.fielding.as_ref().and_then(field))
    }

    pub fn batting_innings(&self) -> f64 { self.bat(|b| b.innings) }
    pub fn runs(&self) -> f64 { self.bat(|b| b.runs) }
    pub fn batting_average(&self) -> f64 { self.bat(|b| b.average) }
    pub fn strike_rate(&self) -> f64 { self.bat(|b| b.strike_rate) }
    pub fn not_outs(&self) -> f64 { self.bat(|b| b.not_outs) }
    pub fn fours(&self) -> f64 { self.bat(|b| b.fours) }
    pub fn sixes(&self) -> f64 { self.bat(|b| b.sixes) }
    pub fn thirties(&self) -> f64 { self.bat(|b| b.thirties) }
    pub fn fifties(&self) -> f64 { self.bat(|b| b.fifties) }
    pub fn hundreds(&self) -> f64 { self.bat(|b| b.hundreds) }

    pub fn bowling_innings(&self) -> f64 { self.bowl(|b| b.innings) }
    pub fn wickets(&self) -> f64 { self.bowl(|b| b.wickets) }
    pub fn economy(&self) -> f64 { self.bowl(|b| b.economy) }
    pub fn three_wicket_hauls(&self) -> f64 { self.bowl(|b| b.three_wicket_hauls) }

    pub fn catches(&self) -> f64 { self.field(|f| f.catches) }
    pub fn run_outs(&self) -> f64 { self.field(|f| f.run_outs) }
}

/// Immutable view of the squad and its stats handed to every selection call
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    pub squad: Vec<SquadPlayer>,
    stats: HashMap<PlayerId, PlayerStats>,
}

impl RosterSnapshot {
    pub fn new(squad: Vec<SquadPlayer>, stats: Vec<PlayerStats>) -> Self {
        let stats = stats.into_iter().map(|s| (s.player_id, s)).collect();
        Self { squad, stats }
    }

    /// Stats for a player; players without an entry get an all-zero record
    pub fn stats_for(&self, player_id: PlayerId) -> PlayerStats {
        self.stats
            .get(&player_id)
            .cloned()
            .unwrap_or_else(|| PlayerStats::empty(player_id))
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&SquadPlayer> {
        self.squad.iter().find(|p| p.player_id == player_id)
    }

    pub fn all_stats(&self) -> impl Iterator<Item = &PlayerStats> {
        self.stats.values()
    }
}
