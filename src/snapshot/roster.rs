use std::collections::{HashMap, HashSet};

use log::debug;

use crate::domain::{BowlingStyle, Player, PlayerId, PlayerStats, Role, SquadPlayer};

const ALL_ROUNDER_RATIO: f64 = 0.6;

/// Role guess for a player the admins have not classified yet
pub fn infer_role(stats: Option<&PlayerStats>, sub_title: &str) -> Role {
    if sub_title.trim().eq_ignore_ascii_case("WK") {
        return Role::Keeper;
    }
    let (bat, bowl) = stats
        .map(|s| (s.batting_innings(), s.bowling_innings()))
        .unwrap_or((0.0, 0.0));

    if bat > 0.0 && bowl > 0.0 && bowl / bat > ALL_ROUNDER_RATIO {
        Role::AllRounder
    } else if bowl > bat {
        Role::Bowler
    } else {
        Role::Batter
    }
}

pub fn infer_bowling_style(stats: Option<&PlayerStats>) -> BowlingStyle {
    match stats {
        Some(s) if s.bowling_innings() > 0.0 => BowlingStyle::Medium,
        _ => BowlingStyle::None,
    }
}

fn from_import(player: &Player, stats: Option<&PlayerStats>) -> SquadPlayer {
    SquadPlayer {
        slug: player.slug.clone(),
        photo: player.photo.clone(),
        bowling_style: infer_bowling_style(stats),
        ..SquadPlayer::new(player.player_id, &player.name, infer_role(stats, &player.sub_title))
    }
}

/// Saved selection state first, then any imported player it does not know
/// about yet with an inferred role
pub fn merge_squad(saved: Vec<SquadPlayer>, players: &[Player], stats: &[PlayerStats]) -> Vec<SquadPlayer> {
    let by_id: HashMap<PlayerId, &PlayerStats> = stats.iter().map(|s| (s.player_id, s)).collect();
    let mut known: HashSet<PlayerId> = saved.iter().map(|p| p.player_id).collect();

    let mut squad = saved;
    for player in players {
        if known.insert(player.player_id) {
            debug!("Adding {} to the squad", player.name);
            squad.push(from_import(player, by_id.get(&player.player_id).copied()));
        }
    }
    squad
}
