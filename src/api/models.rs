use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::CombinationSummary;
use crate::domain::{CombinationPlayer, MatchSetup, TeamCombination};
use crate::selection::{ValidationCheck, Variant};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    /// Saved setup when absent
    pub setup: Option<MatchSetup>,
    /// All three variants when absent or empty
    pub variants: Vec<Variant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanRequest {
    pub setup: Option<MatchSetup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub players: Vec<CombinationPlayer>,
    #[serde(default)]
    pub setup: Option<MatchSetup>,
    #[serde(default)]
    pub size: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCombinationRequest {
    pub name: String,
    pub players: Vec<CombinationPlayer>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub size: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub checks: Vec<ValidationCheck>,
    pub valid: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationListItem {
    pub id: String,
    pub name: String,
    pub created: NaiveDateTime,
    pub format: Option<String>,
    pub player_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationDetail {
    #[serde(flatten)]
    pub combination: TeamCombination,
    pub checks: Vec<ValidationCheck>,
    pub summary: Option<CombinationSummary>,
}
