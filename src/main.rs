use anyhow::Result;

use cricket_lineup::cli::{Cli, Command};
use cricket_lineup::{
    build_config, handle_analyze, handle_combinations, handle_formats, handle_generate, handle_plan,
    handle_serve, handle_squad, handle_suggest, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    match &cli.command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::Formats => handle_formats(),
        Command::Generate { setup, variant, save } => handle_generate(config, setup, *variant, save.as_deref()),
        Command::Suggest => handle_suggest(config),
        Command::Plan { setup } => handle_plan(config, setup),
        Command::Analyze { setup } => handle_analyze(config, setup),
        Command::Squad { action } => handle_squad(config, action.as_ref()),
        Command::Combinations { action } => handle_combinations(config, action),
    }
}
