pub mod selection;
pub mod server;

pub use selection::{MatchPlan, SelectionService, SquadReport, SquadUpdate};
pub use server::ServerService;
