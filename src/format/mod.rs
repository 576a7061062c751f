pub mod catalog;
pub mod impact;
pub mod requirements;

pub use catalog::{AggressionTier, FormatConfig, format_config, min_bowlers_for_count, named_formats};
