//! Terminal rendering for the CLI commands.

use colored::Colorize;

use crate::analysis::{BattingAnalysis, BowlingAnalysis};
use crate::database::CombinationOverview;
use crate::domain::{CombinationPlayer, RosterSnapshot, SquadPlayer, TeamCombination};
use crate::format::FormatConfig;
use crate::selection::{SmartXi, Suggestion, ValidationCheck};
use crate::services::MatchPlan;

fn player_name(snapshot: &RosterSnapshot, player: &CombinationPlayer) -> String {
    snapshot
        .player(player.player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{}", player.player_id))
}

fn warning(text: &str) {
    println!("  {} {}", "!".yellow().bold(), text.yellow());
}

pub fn print_formats(formats: &[FormatConfig]) {
    for f in formats {
        println!("{} {}", f.label.bold(), f.description.dimmed());
        println!(
            "  {} overs, max {} per bowler, powerplay 1-{}, middle {}-{}, death {}+",
            f.overs, f.max_per_bowler, f.powerplay_overs, f.middle_start, f.middle_end, f.death_start
        );
        println!(
            "  {}+ bowlers, aggression {}, {} anchors, {} finishers, {} all-rounders",
            f.min_bowlers,
            f.aggression.as_str(),
            f.anchors_needed,
            f.finishers_needed,
            f.all_rounders_preferred
        );
    }
}

pub fn print_lineup(players: &[CombinationPlayer], snapshot: &RosterSnapshot) {
    for p in players {
        let mut tags = Vec::new();
        if p.is_captain {
            tags.push("C".green().bold().to_string());
        }
        if p.is_vice_captain {
            tags.push("VC".green().to_string());
        }
        if p.is_keeper {
            tags.push("WK".cyan().to_string());
        }
        if let Some(phase) = p.bowling_phase {
            tags.push(phase.as_str().magenta().to_string());
        }
        println!(
            "  {:>2}. {:<24} {:<4} {:<8} {}",
            p.batting_order,
            player_name(snapshot, p),
            p.role.as_str(),
            p.batting_phase.as_str(),
            tags.join(" ")
        );
    }
}

pub fn print_smart_xi(xi: &SmartXi, snapshot: &RosterSnapshot) {
    println!(
        "{} {} ({} of {})",
        xi.format.label.bold(),
        xi.variant.to_string().bold().blue(),
        xi.players.len(),
        xi.target_size
    );
    print_lineup(&xi.players, snapshot);
    let s = &xi.scores;
    println!(
        "  aggression {}  stability {}  finishing {}  bowling {}  death {}  powerplay {}",
        s.total_aggression,
        s.total_stability,
        s.total_finishing,
        s.total_bowling_depth,
        s.total_death_bowling,
        s.powerplay_score
    );
    for w in &xi.warnings {
        warning(w);
    }
    for note in &xi.notes {
        println!("  {}", note.dimmed());
    }
    println!();
}

pub fn print_suggestion(suggestion: &Suggestion) {
    println!("{}", "Suggested XI".bold());
    for (i, p) in suggestion.main.iter().enumerate() {
        println!("  {:>2}. {:<24} {:<4} form {}", i + 1, p.name, p.role.as_str(), p.form);
    }
    if !suggestion.alternative.is_empty() {
        println!("{}", "Alternative".bold());
        for (i, p) in suggestion.alternative.iter().enumerate() {
            println!("  {:>2}. {:<24} {:<4} form {}", i + 1, p.name, p.role.as_str(), p.form);
        }
    }
    for risk in &suggestion.risks {
        warning(risk);
    }
}

pub fn print_checks(checks: &[ValidationCheck]) {
    for check in checks {
        if check.satisfied {
            println!("  {} {}", "✓".green(), check.label);
        } else {
            println!("  {} {}", "✗".red(), check.detail.red());
        }
    }
}

pub fn print_plan(plan: &MatchPlan) {
    let r = &plan.requirements;
    println!("{} {}", plan.format.label.bold(), plan.format.description.dimmed());
    println!(
        "  {} players: {}+ bowling options, aim for {} batters / {} bowlers / {} all-rounders",
        r.player_count, r.min_bowling_options, r.batters, r.bowlers, r.all_rounders
    );
    if let Some(w) = &r.warning {
        warning(w);
    }
    for a in &plan.activation {
        println!("  {}", a);
    }
    for s in &plan.scenarios {
        println!("{} (+{}%)", s.title.bold(), s.win_boost);
        println!("  {}", s.description.dimmed());
        println!("  {}", s.suggestion);
    }
    println!("{}", "Batting impact candidates".bold());
    for c in &plan.candidates.batting {
        println!("  {:<24} aggression {}", c.name, c.score);
    }
    println!("{}", "Bowling impact candidates".bold());
    for c in &plan.candidates.bowling {
        println!("  {:<24} depth {}", c.name, c.score);
    }
}

pub fn print_batting(analysis: &BattingAnalysis) {
    println!("{} {}", "Batting".bold(), analysis.format.dimmed());
    let sections = [
        ("Top order", &analysis.top_order),
        ("Middle order", &analysis.middle_order),
        ("Finishers", &analysis.finishers),
    ];
    for (title, batters) in sections {
        println!("  {}", title.underline());
        for b in batters {
            println!(
                "    {:<24} aggr {:>4} stab {:>4} fin {:>4}  {} runs @ SR {}",
                b.name, b.aggression, b.stability, b.finishing, b.runs, b.strike_rate
            );
        }
    }
    for w in &analysis.warnings {
        warning(w);
    }
}

pub fn print_bowling(analysis: &BowlingAnalysis) {
    println!(
        "{} {} ({} options, {} of {} overs, {}% coverage)",
        "Bowling".bold(),
        analysis.format.dimmed(),
        analysis.bowlers.len(),
        analysis.capacity,
        analysis.overs,
        analysis.coverage_percent
    );
    let sections = [
        ("Opening spell", &analysis.powerplay),
        ("Middle overs", &analysis.middle),
        ("Death", &analysis.death),
    ];
    for (title, bowlers) in sections {
        println!("  {}", title.underline());
        for b in bowlers {
            println!(
                "    {:<24} {} wkts, econ {}, depth {}, death {}",
                b.name, b.wickets, b.economy, b.depth, b.death
            );
        }
    }
    println!(
        "  depth {}%  death {}%  powerplay {}%",
        analysis.depth_percent, analysis.death_percent, analysis.powerplay_percent
    );
    for w in &analysis.warnings {
        warning(w);
    }
}

pub fn print_squad(squad: &[SquadPlayer]) {
    for p in squad {
        let status = if p.is_eligible() {
            "available".green()
        } else if !p.active {
            "inactive".dimmed()
        } else if !p.available {
            "unavailable".yellow()
        } else {
            p.fitness.as_str().red()
        };
        println!(
            "  {:>8}  {:<24} {:<4} {:<6} {}",
            p.player_id,
            p.name,
            p.role.as_str(),
            p.bowling_style.as_str(),
            status
        );
    }
}

pub fn print_combinations(rows: &[CombinationOverview]) {
    if rows.is_empty() {
        println!("No saved combinations");
        return;
    }
    for row in rows {
        println!(
            "  {}  {:<24} {:<6} {} players  {}",
            row.id.dimmed(),
            row.name.bold(),
            row.format.as_deref().unwrap_or("?"),
            row.player_count,
            row.created.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn print_combination(combination: &TeamCombination, snapshot: &RosterSnapshot, checks: &[ValidationCheck]) {
    println!(
        "{} ({}) saved {}",
        combination.name.bold(),
        combination.format.as_deref().unwrap_or("?"),
        combination.created.format("%Y-%m-%d %H:%M")
    );
    if !combination.notes.is_empty() {
        println!("  {}", combination.notes.dimmed());
    }
    print_lineup(&combination.players, snapshot);
    print_checks(checks);
}
