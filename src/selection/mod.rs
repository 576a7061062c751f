pub mod eligibility;
pub mod pool;
pub mod smart_xi;
pub mod suggest;
pub mod validation;

pub use eligibility::eligible;
pub use smart_xi::{LineupScores, PhaseModel, SmartXi, Variant, generate_smart_xi};
pub use suggest::{RankedPlayer, Suggestion, suggest_xi, suggest_xi_with};
pub use validation::{ValidationCheck, unmet, validate, validate_combination};
