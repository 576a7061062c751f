use crate::domain::MatchSetup;

/// Structural targets of the quick availability suggestion
#[derive(Debug, Clone)]
pub struct SuggestSettings {
    pub lineup_size: usize,
    pub keepers: usize,
    pub pure_bowlers: usize,
    pub all_rounders: usize,
    pub min_bowling_options: usize,
    pub min_batting_options: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            lineup_size: 11,
            keepers: 1,
            pure_bowlers: 3,
            all_rounders: 2,
            min_bowling_options: 5,
            min_batting_options: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionSettings {
    pub default_setup: MatchSetup,
    pub suggest: SuggestSettings,
    /// How many candidates the impact listings show
    pub shortlist_size: usize,
    pub impact_ratings_size: usize,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            default_setup: MatchSetup::default(),
            suggest: SuggestSettings::default(),
            shortlist_size: 5,
            impact_ratings_size: 12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub stats_dir: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "cricket_lineup.db".to_string()),
            stats_dir: std::env::var("STATS_DIR").unwrap_or_else(|_| "stats".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub selection: SelectionSettings,
    pub store: StoreSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            selection: SelectionSettings::default(),
            store: StoreSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Same configuration with the store rooted elsewhere; used by tests and
    /// by the CLI path overrides.
    pub fn with_store(mut self, database_path: &str, stats_dir: &str) -> Self {
        self.store = StoreSettings {
            database_path: database_path.to_string(),
            stats_dir: stats_dir.to_string(),
        };
        self
    }
}

// The config is passed explicitly to services and handlers (no globals).
