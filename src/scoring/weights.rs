//! Fixed heuristic weights of the composite scores.

// Aggression index
pub const AGGRESSION_STRIKE_RATE: f64 = 0.6;
pub const AGGRESSION_SIX: f64 = 4.0;
pub const AGGRESSION_FOUR: f64 = 2.0;

// Stability score
pub const STABILITY_AVERAGE: f64 = 2.0;
pub const STABILITY_THIRTY: f64 = 5.0;
pub const STABILITY_FIFTY: f64 = 10.0;
pub const STABILITY_HUNDRED: f64 = 20.0;

// Finishing power
pub const FINISHING_STRIKE_RATE: f64 = 0.5;
pub const FINISHING_NOT_OUT: f64 = 3.0;
pub const FINISHING_SIX: f64 = 5.0;

// Bowling depth
pub const DEPTH_WICKET: f64 = 5.0;
pub const DEPTH_ECONOMY_BASELINE: f64 = 10.0;
pub const DEPTH_ECONOMY: f64 = 4.0;
pub const DEPTH_THREE_WICKET_HAUL: f64 = 8.0;

// Death bowling strength
pub const DEATH_WICKET: f64 = 3.0;
pub const DEATH_ECONOMY_BASELINE: f64 = 12.0;
pub const DEATH_ECONOMY: f64 = 5.0;

// Overall form
pub const FORM_RUN: f64 = 0.2;
pub const FORM_AVERAGE: f64 = 1.5;
pub const FORM_STRIKE_RATE: f64 = 0.3;
pub const FORM_WICKET: f64 = 4.0;
pub const FORM_ECONOMY_BASELINE: f64 = 10.0;
pub const FORM_ECONOMY: f64 = 2.0;
pub const FORM_CATCH: f64 = 2.0;

// Lineup aggregate
pub const POWERPLAY_AGGRESSION: f64 = 0.4;
pub const POWERPLAY_BOWLING_DEPTH: f64 = 0.3;
