use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::FormatChoice;
use crate::selection::Variant;

#[derive(Parser, Debug)]
#[command(author, version, about = "cricket lineup selection engine")]
pub struct Cli {
    /// Stats directory (defaults to STATS_DIR or ./stats)
    #[arg(long, global = true)]
    pub stats_dir: Option<String>,

    /// Combinations database (defaults to DATABASE_PATH or ./cricket_lineup.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    T20,
    T15,
    T10,
    T5,
    Custom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Balanced,
    Aggressive,
    Defensive,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Balanced => Variant::Balanced,
            VariantArg::Aggressive => Variant::Aggressive,
            VariantArg::Defensive => Variant::Defensive,
        }
    }
}

/// Match setup overrides; the saved setup is used when none are given
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SetupArgs {
    /// Match format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Overs per innings for a custom format
    #[arg(long, default_value_t = 20)]
    pub overs: u32,

    /// Lineup size (5 to 15)
    #[arg(short, long)]
    pub players: Option<usize>,
}

impl SetupArgs {
    pub fn format_choice(&self) -> Option<FormatChoice> {
        self.format.map(|format| match format {
            FormatArg::T20 => FormatChoice::T20,
            FormatArg::T15 => FormatChoice::T15,
            FormatArg::T10 => FormatChoice::T10,
            FormatArg::T5 => FormatChoice::T5,
            FormatArg::Custom => FormatChoice::Custom { overs: self.overs },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.format.is_none() && self.players.is_none()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// List the named formats and their constraints
    Formats,
    /// Generate lineups for the match setup
    Generate {
        #[command(flatten)]
        setup: SetupArgs,

        /// Variant to generate; all three when omitted
        #[arg(short, long, value_enum)]
        variant: Option<VariantArg>,

        /// Save the generated lineup under this name
        #[arg(long, requires = "variant")]
        save: Option<String>,
    },
    /// Quick lineup from whoever is available
    Suggest,
    /// Requirements, impact substitute timing and scenarios
    Plan {
        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Batting, bowling and cross-format reports
    Analyze {
        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Show or edit the squad
    Squad {
        #[clap(subcommand)]
        action: Option<SquadAction>,
    },
    /// Saved combinations
    Combinations {
        #[clap(subcommand)]
        action: CombinationAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum SquadAction {
    /// List every squad player and their status
    List,
    /// Update one player's selection state
    Set {
        player_id: i64,
        /// BAT, BOWL, ALL or WK
        #[arg(long)]
        role: Option<String>,
        /// Fit, Injured, Doubtful or Recovering
        #[arg(long)]
        fitness: Option<String>,
        #[arg(long)]
        available: Option<bool>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Save match setup defaults
    Setup {
        #[command(flatten)]
        setup: SetupArgs,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum CombinationAction {
    List,
    Show { id: String },
    Delete { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["cricket_lineup", "generate", "-f", "custom", "--overs", "12", "-p", "9"]);
        let Command::Generate { setup, variant, save } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(setup.format_choice(), Some(FormatChoice::Custom { overs: 12 }));
        assert_eq!(setup.players, Some(9));
        assert!(variant.is_none());
        assert!(save.is_none());
    }

    #[test]
    fn test_save_requires_variant() {
        let result = Cli::try_parse_from(["cricket_lineup", "generate", "--save", "Sunday"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::parse_from(["cricket_lineup", "suggest", "--stats-dir", "data"]);
        assert_eq!(cli.stats_dir.as_deref(), Some("data"));
        assert_eq!(cli.command, Command::Suggest);
    }
}
