pub mod roster;
pub mod store;

pub use roster::{infer_bowling_style, infer_role, merge_squad};
pub use store::SnapshotStore;
