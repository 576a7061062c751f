use chrono::NaiveDateTime;

use crate::domain::PlayerId;

#[derive(Debug, Clone)]
pub struct CombinationRow {
    pub id: String,
    pub name: String,
    pub created: NaiveDateTime,
    pub notes: String,
    pub format: Option<String>,
    pub size: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CombinationPlayerRow {
    pub combination_id: String,
    pub player_id: PlayerId,
    pub role: String,
    pub batting_order: u32,
    pub bowling_priority: Option<u32>,
    pub is_captain: bool,
    pub is_vice_captain: bool,
    pub is_keeper: bool,
    pub batting_phase: String,
    pub bowling_phase: Option<String>,
}

// Listing view
#[derive(Debug, Clone)]
pub struct CombinationOverview {
    pub id: String,
    pub name: String,
    pub created: NaiveDateTime,
    pub format: Option<String>,
    pub player_count: usize,
}
