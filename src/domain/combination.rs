use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{PlayerId, Role, SquadPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattingPhase {
    Top,
    Middle,
    Finisher,
}

impl BattingPhase {
    pub fn as_str(&self) -> &str {
        match self {
            BattingPhase::Top => "top",
            BattingPhase::Middle => "middle",
            BattingPhase::Finisher => "finisher",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(BattingPhase::Top),
            "middle" => Some(BattingPhase::Middle),
            "finisher" => Some(BattingPhase::Finisher),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BowlingPhase {
    Powerplay,
    Middle,
    Death,
}

impl BowlingPhase {
    pub const ROTATION: [BowlingPhase; 3] = [
        BowlingPhase::Powerplay,
        BowlingPhase::Middle,
        BowlingPhase::Death,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BowlingPhase::Powerplay => "powerplay",
            BowlingPhase::Middle => "middle",
            BowlingPhase::Death => "death",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "powerplay" => Some(BowlingPhase::Powerplay),
            "middle" => Some(BowlingPhase::Middle),
            "death" => Some(BowlingPhase::Death),
            _ => None,
        }
    }
}

/// One player's slot inside a generated or saved lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationPlayer {
    pub player_id: PlayerId,
    pub role: Role,
    pub batting_order: u32,
    pub bowling_priority: Option<u32>,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub is_keeper: bool,
    pub batting_phase: BattingPhase,
    pub bowling_phase: Option<BowlingPhase>,
}

impl CombinationPlayer {
    fn from_squad(player: &SquadPlayer, batting_order: u32) -> Self {
        Self {
            player_id: player.player_id,
            role: player.role,
            batting_order,
            bowling_priority: None,
            is_captain: false,
            is_vice_captain: false,
            is_keeper: player.role == Role::Keeper,
            batting_phase: batting_phase_for(batting_order as usize - 1),
            bowling_phase: None,
        }
    }
}

/// Top three, then the middle order up to position seven
pub fn batting_phase_for(index: usize) -> BattingPhase {
    if index < 3 {
        BattingPhase::Top
    } else if index < 7 {
        BattingPhase::Middle
    } else {
        BattingPhase::Finisher
    }
}

/// A named lineup the user chose to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCombination {
    pub id: String,
    pub name: String,
    pub created: NaiveDateTime,
    pub players: Vec<CombinationPlayer>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub size: Option<usize>,
}

impl TeamCombination {
    pub fn new(name: &str, players: Vec<CombinationPlayer>) -> Self {
        let created = Utc::now().naive_utc();
        Self {
            id: created.and_utc().timestamp_millis().to_string(),
            name: name.trim().to_string(),
            created,
            players,
            notes: String::new(),
            format: None,
            size: None,
        }
    }
}

/// Manual lineup editing: ordering, leadership and keeper flags
#[derive(Debug, Clone)]
pub struct LineupDraft {
    capacity: usize,
    players: Vec<CombinationPlayer>,
}

impl LineupDraft {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            players: Vec::new(),
        }
    }

    /// Starts from an existing lineup, e.g. a generated or saved one
    pub fn from_players(capacity: usize, players: Vec<CombinationPlayer>) -> Self {
        let mut draft = Self { capacity, players };
        draft.players.sort_by_key(|p| p.batting_order);
        draft.renumber();
        draft
    }

    pub fn players(&self) -> &[CombinationPlayer] {
        &self.players
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.capacity
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.player_id == player_id)
    }

    /// Appends at the bottom of the order; refused when full or already in
    pub fn add(&mut self, player: &SquadPlayer) -> bool {
        if self.is_full() || self.contains(player.player_id) {
            return false;
        }
        let order = self.players.len() as u32 + 1;
        self.players.push(CombinationPlayer::from_squad(player, order));
        true
    }

    pub fn remove(&mut self, player_id: PlayerId) {
        self.players.retain(|p| p.player_id != player_id);
        self.renumber();
    }

    /// Moves a player to `new_index` (0-based) and renumbers the order
    pub fn move_player(&mut self, player_id: PlayerId, new_index: usize) {
        let Some(old_index) = self.position(player_id) else {
            return;
        };
        let player = self.players.remove(old_index);
        let new_index = new_index.min(self.players.len());
        self.players.insert(new_index, player);
        self.renumber();
    }

    /// Toggles the captaincy; a new captain replaces the old one
    pub fn set_captain(&mut self, player_id: PlayerId) {
        let Some(idx) = self.position(player_id) else {
            return;
        };
        let becomes_captain = !self.players[idx].is_captain;
        for (i, p) in self.players.iter_mut().enumerate() {
            if i == idx {
                p.is_captain = becomes_captain;
                p.is_vice_captain = false;
            } else if becomes_captain {
                p.is_captain = false;
            }
        }
    }

    pub fn set_vice_captain(&mut self, player_id: PlayerId) {
        let Some(idx) = self.position(player_id) else {
            return;
        };
        let becomes_vice = !self.players[idx].is_vice_captain;
        for (i, p) in self.players.iter_mut().enumerate() {
            if i == idx {
                p.is_vice_captain = becomes_vice;
                p.is_captain = false;
            } else if becomes_vice {
                p.is_vice_captain = false;
            }
        }
    }

    pub fn toggle_keeper(&mut self, player_id: PlayerId) {
        if let Some(idx) = self.position(player_id) {
            self.players[idx].is_keeper = !self.players[idx].is_keeper;
        }
    }

    pub fn into_combination(self, name: &str, notes: &str, format: Option<String>) -> TeamCombination {
        let size = self.capacity;
        let mut combination = TeamCombination::new(name, self.players);
        combination.notes = notes.to_string();
        combination.format = format;
        combination.size = Some(size);
        combination
    }

    fn position(&self, player_id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    fn renumber(&mut self) {
        for (i, p) in self.players.iter_mut().enumerate() {
            p.batting_order = i as u32 + 1;
            p.batting_phase = batting_phase_for(i);
        }
    }
}
