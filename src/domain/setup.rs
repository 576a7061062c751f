use serde::{Deserialize, Serialize};

use super::models::PlayerId;

pub const MIN_LINEUP_SIZE: usize = 5;
pub const MAX_LINEUP_SIZE: usize = 15;
pub const MAX_IMPACT_SUBS: usize = 3;
pub const MIN_CUSTOM_OVERS: u32 = 2;
pub const MAX_CUSTOM_OVERS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum FormatChoice {
    T20,
    T15,
    T10,
    T5,
    Custom { overs: u32 },
}

impl FormatChoice {
    pub const NAMED: [FormatChoice; 4] = [
        FormatChoice::T20,
        FormatChoice::T15,
        FormatChoice::T10,
        FormatChoice::T5,
    ];

    pub fn label(&self) -> String {
        match self {
            FormatChoice::T20 => "T20".to_string(),
            FormatChoice::T15 => "T15".to_string(),
            FormatChoice::T10 => "T10".to_string(),
            FormatChoice::T5 => "T5".to_string(),
            FormatChoice::Custom { overs } => format!("Custom ({} overs)", overs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSubKind {
    Batting,
    Bowling,
    Flexible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSub {
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub kind: ImpactSubKind,
}

/// Format, lineup size and impact substitutes chosen before building a lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetup {
    pub format: FormatChoice,
    pub player_count: usize,
    #[serde(default)]
    pub impact_sub_enabled: bool,
    #[serde(default)]
    pub impact_subs: Vec<ImpactSub>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self::new(FormatChoice::T20, 11)
    }
}

impl MatchSetup {
    /// Out-of-range sizes and custom overs are clamped into their legal ranges
    pub fn new(format: FormatChoice, player_count: usize) -> Self {
        let format = match format {
            FormatChoice::Custom { overs } => FormatChoice::Custom {
                overs: overs.clamp(MIN_CUSTOM_OVERS, MAX_CUSTOM_OVERS),
            },
            named => named,
        };
        Self {
            format,
            player_count: player_count.clamp(MIN_LINEUP_SIZE, MAX_LINEUP_SIZE),
            impact_sub_enabled: false,
            impact_subs: Vec::new(),
        }
    }

    /// Clamps a setup that arrived from outside (request body or saved file)
    /// into legal ranges. Impact designations are replayed so the cap and
    /// duplicate rules hold.
    pub fn normalized(self) -> Self {
        let mut setup = Self::new(self.format, self.player_count);
        if self.impact_sub_enabled {
            setup.toggle_impact_subs();
            for sub in &self.impact_subs {
                if setup.add_impact_sub(sub.player_id) {
                    setup.set_impact_sub_kind(sub.player_id, sub.kind);
                }
            }
        }
        setup
    }

    /// Lineup size used by the selector, clamped to 5..=15
    pub fn target_size(&self) -> usize {
        self.player_count.clamp(MIN_LINEUP_SIZE, MAX_LINEUP_SIZE)
    }

    /// Designates a flexible impact substitute. Returns false when the cap is
    /// reached or the player is already designated.
    pub fn add_impact_sub(&mut self, player_id: PlayerId) -> bool {
        let designated = self.impact_subs.iter().any(|s| s.player_id == player_id);
        if self.impact_subs.len() >= MAX_IMPACT_SUBS || designated {
            return false;
        }
        self.impact_subs.push(ImpactSub {
            player_id,
            kind: ImpactSubKind::Flexible,
        });
        true
    }

    pub fn remove_impact_sub(&mut self, player_id: PlayerId) {
        self.impact_subs.retain(|s| s.player_id != player_id);
    }

    pub fn set_impact_sub_kind(&mut self, player_id: PlayerId, kind: ImpactSubKind) {
        for sub in self.impact_subs.iter_mut().filter(|s| s.player_id == player_id) {
            sub.kind = kind;
        }
    }

    /// Switching impact substitutes off drops every designation
    pub fn toggle_impact_subs(&mut self) {
        self.impact_sub_enabled = !self.impact_sub_enabled;
        if !self.impact_sub_enabled {
            self.impact_subs.clear();
        }
    }

    /// Only counts while impact substitutes are switched on
    pub fn is_impact_sub(&self, player_id: PlayerId) -> bool {
        self.impact_sub_enabled && self.impact_subs.iter().any(|s| s.player_id == player_id)
    }

    pub fn active_impact_subs(&self) -> &[ImpactSub] {
        if self.impact_sub_enabled {
            &self.impact_subs
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_clamps_ranges() {
        let setup = MatchSetup::new(FormatChoice::Custom { overs: 90 }, 30);
        assert_eq!(setup.format, FormatChoice::Custom { overs: MAX_CUSTOM_OVERS });
        assert_eq!(setup.target_size(), MAX_LINEUP_SIZE);

        let setup = MatchSetup::new(FormatChoice::T10, 2);
        assert_eq!(setup.target_size(), MIN_LINEUP_SIZE);
    }

    #[test]
    fn test_impact_sub_cap_and_duplicates() {
        let mut setup = MatchSetup::default();
        setup.toggle_impact_subs();
        assert!(setup.add_impact_sub(1));
        assert!(!setup.add_impact_sub(1));
        assert!(setup.add_impact_sub(2));
        assert!(setup.add_impact_sub(3));
        assert!(!setup.add_impact_sub(4));
        assert_eq!(setup.impact_subs.len(), MAX_IMPACT_SUBS);

        setup.set_impact_sub_kind(2, ImpactSubKind::Bowling);
        assert_eq!(setup.impact_subs[1].kind, ImpactSubKind::Bowling);

        setup.remove_impact_sub(1);
        assert!(!setup.is_impact_sub(1));
        assert!(setup.is_impact_sub(2));
    }

    #[test]
    fn test_disabling_impact_subs_clears_them() {
        let mut setup = MatchSetup::default();
        setup.toggle_impact_subs();
        setup.add_impact_sub(9);
        setup.toggle_impact_subs();
        assert!(setup.impact_subs.is_empty());
        assert!(setup.active_impact_subs().is_empty());
    }

    #[test]
    fn test_normalized_clamps_deserialized_setup() {
        let raw: MatchSetup = serde_json::from_str(
            r#"{"format":{"type":"CUSTOM","overs":4000000000},"playerCount":40,
                "impactSubEnabled":true,
                "impactSubs":[{"player_id":1,"type":"bowling"},{"player_id":1,"type":"batting"},
                              {"player_id":2,"type":"flexible"},{"player_id":3,"type":"flexible"},
                              {"player_id":4,"type":"flexible"}]}"#,
        )
        .unwrap();
        let setup = raw.normalized();
        assert_eq!(setup.format, FormatChoice::Custom { overs: MAX_CUSTOM_OVERS });
        assert_eq!(setup.player_count, MAX_LINEUP_SIZE);
        assert_eq!(setup.impact_subs.len(), MAX_IMPACT_SUBS);
        assert_eq!(setup.impact_subs[0].kind, ImpactSubKind::Bowling);
        assert!(!setup.is_impact_sub(4));

        let zero: MatchSetup =
            serde_json::from_str(r#"{"format":{"type":"CUSTOM","overs":0},"playerCount":11}"#).unwrap();
        assert_eq!(zero.normalized().format, FormatChoice::Custom { overs: MIN_CUSTOM_OVERS });
    }

    #[test]
    fn test_format_choice_wire_shape() {
        let json = serde_json::to_string(&FormatChoice::Custom { overs: 6 }).unwrap();
        assert_eq!(json, r#"{"type":"CUSTOM","overs":6}"#);
        let named: FormatChoice = serde_json::from_str(r#"{"type":"T10"}"#).unwrap();
        assert_eq!(named, FormatChoice::T10);
    }
}
