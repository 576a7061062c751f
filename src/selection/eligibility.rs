use std::collections::HashSet;

use crate::domain::SquadPlayer;

/// Players who are active, available and fit, in roster order.
///
/// A player id listed twice in the roster only counts once.
pub fn eligible(squad: &[SquadPlayer]) -> Vec<&SquadPlayer> {
    let mut seen = HashSet::new();
    squad
        .iter()
        .filter(|p| p.is_eligible())
        .filter(|p| seen.insert(p.player_id))
        .collect()
}
