pub mod combination;
pub mod models;
pub mod setup;

pub use combination::{BattingPhase, BowlingPhase, CombinationPlayer, LineupDraft, TeamCombination};
pub use models::{
    BowlingStyle, Fitness, Player, PlayerId, PlayerStats, Role, RosterSnapshot, SquadPlayer,
};
pub use setup::{FormatChoice, ImpactSub, ImpactSubKind, MatchSetup};
