pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod format;
pub mod output;
pub mod scoring;
pub mod selection;
pub mod services;
pub mod snapshot;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::{CombinationAction, Command, SetupArgs, SquadAction, VariantArg};
use crate::config::settings::AppConfig;
use crate::domain::{Fitness, LineupDraft, MatchSetup, Role};
use crate::format::{format_config, named_formats};
use crate::selection::{Variant, validate_combination};
use crate::services::selection::{SelectionService, SquadUpdate};
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Configuration with the command line path overrides applied
pub fn build_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::new();
    let database = cli.database.clone().unwrap_or_else(|| config.store.database_path.clone());
    let stats_dir = cli.stats_dir.clone().unwrap_or_else(|| config.store.stats_dir.clone());
    config.with_store(&database, &stats_dir)
}

/// Setup from the flags layered over the saved one
fn resolve_setup(service: &SelectionService, args: &SetupArgs) -> Result<MatchSetup> {
    let saved = service.resolve_setup(None)?;
    if args.is_empty() {
        return Ok(saved);
    }
    let format = args.format_choice().unwrap_or(saved.format);
    let players = args.players.unwrap_or(saved.player_count);
    Ok(MatchSetup::new(format, players))
}

fn open_combinations(config: &AppConfig) -> Result<database::DbConn> {
    let pool = database::create_pool(&config.store.database_path)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::ensure_schema(&mut conn)?;
    Ok(conn)
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_formats() -> Result<()> {
    output::print_formats(&named_formats());
    Ok(())
}

pub fn handle_generate(
    config: AppConfig,
    args: &SetupArgs,
    variant: Option<VariantArg>,
    save: Option<&str>,
) -> Result<()> {
    let service = SelectionService::new(config.clone())?;
    let setup = resolve_setup(&service, args)?;
    let variants: Vec<Variant> = match variant {
        Some(v) => vec![v.into()],
        None => Variant::ALL.to_vec(),
    };

    let snapshot = service.snapshot()?;
    let lineups = service.generate(Some(setup.clone()), &variants)?;
    for lineup in &lineups {
        output::print_smart_xi(lineup, &snapshot);
    }

    if let Some(name) = save {
        let lineup = lineups.first().ok_or_else(|| anyhow!("No lineup was generated"))?;
        if lineup.players.is_empty() {
            bail!("Refusing to save an empty lineup");
        }
        let draft = LineupDraft::from_players(lineup.target_size, lineup.players.clone());
        let combination = draft.into_combination(name, "", Some(setup.format.label()));
        let mut conn = open_combinations(&config)?;
        database::combinations::save(&mut conn, &combination)?;
        info!("Saved combination {} as {}", combination.name, combination.id);
        println!("Saved as {}", combination.id);
    }
    Ok(())
}

pub fn handle_suggest(config: AppConfig) -> Result<()> {
    let service = SelectionService::new(config)?;
    output::print_suggestion(&service.suggest()?);
    Ok(())
}

pub fn handle_plan(config: AppConfig, args: &SetupArgs) -> Result<()> {
    let service = SelectionService::new(config)?;
    let setup = resolve_setup(&service, args)?;
    output::print_plan(&service.plan(Some(setup))?);
    Ok(())
}

pub fn handle_analyze(config: AppConfig, args: &SetupArgs) -> Result<()> {
    let service = SelectionService::new(config)?;
    let setup = resolve_setup(&service, args)?;
    let report = service.analyze(Some(setup))?;
    output::print_batting(&report.batting);
    println!();
    output::print_bowling(&report.bowling);
    println!();
    for xi in &report.formats {
        println!(
            "{:<4} aggression {:>5}  stability {:>5}  finishing {:>5}  bowling {:>5}",
            xi.format.label,
            xi.scores.total_aggression,
            xi.scores.total_stability,
            xi.scores.total_finishing,
            xi.scores.total_bowling_depth
        );
    }
    Ok(())
}

pub fn handle_squad(config: AppConfig, action: Option<&SquadAction>) -> Result<()> {
    let service = SelectionService::new(config)?;
    match action {
        None | Some(SquadAction::List) => output::print_squad(&service.squad()?),
        Some(SquadAction::Set {
            player_id,
            role,
            fitness,
            available,
            active,
        }) => {
            let update = SquadUpdate {
                role: role
                    .as_deref()
                    .map(|r| Role::parse(r).ok_or_else(|| anyhow!("Unknown role '{}'", r)))
                    .transpose()?,
                fitness: fitness
                    .as_deref()
                    .map(|f| Fitness::parse(f).ok_or_else(|| anyhow!("Unknown fitness '{}'", f)))
                    .transpose()?,
                available: *available,
                active: *active,
            };
            let player = service.update_player(*player_id, &update)?;
            output::print_squad(std::slice::from_ref(&player));
        }
        Some(SquadAction::Setup { setup }) => {
            let setup = resolve_setup(&service, setup)?;
            service.save_setup(&setup)?;
            println!("Saved {} with {} players", setup.format.label(), setup.target_size());
        }
    }
    Ok(())
}

pub fn handle_combinations(config: AppConfig, action: &CombinationAction) -> Result<()> {
    let mut conn = open_combinations(&config)?;
    match action {
        CombinationAction::List => {
            output::print_combinations(&database::combinations::list_all(&mut conn)?);
        }
        CombinationAction::Show { id } => {
            let Some(combination) = database::combinations::find_by_id(&mut conn, id)? else {
                bail!("Combination {} not found", id);
            };
            let service = SelectionService::new(config)?;
            let snapshot = service.snapshot()?;
            let format = format_config(&service.resolve_setup(None)?);
            let checks = validate_combination(&combination, &format);
            output::print_combination(&combination, &snapshot, &checks);
        }
        CombinationAction::Delete { id } => {
            if !database::combinations::delete(&mut conn, id)? {
                bail!("Combination {} not found", id);
            }
            println!("Deleted {}", id);
        }
    }
    Ok(())
}
