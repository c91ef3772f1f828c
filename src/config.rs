use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Use ASCII quotation symbols (' and ") instead of typographic ones.
    #[serde(default)]
    pub use_ascii_quotes: bool,

    /// Sentence terminator symbol; a right quote followed by it is exempt
    /// from the space-after rule. Empty means the default period.
    #[serde(default = "default_full_stop")]
    pub full_stop: String,

    /// Literal suffixes that disqualify a quote candidate when they appear
    /// right after it (contractions like "he's").
    #[serde(default = "default_exception_suffixes")]
    pub exception_suffixes: Vec<String>,

    /// Extra words allowed to start a sentence in lowercase.
    #[serde(default)]
    pub capital_whitelist: Vec<String>,

    /// Optional file with one whitelist word per line ('#' starts a comment).
    #[serde(default)]
    pub whitelist_file: Option<PathBuf>,

    /// Sentences matching any of these regexes are skipped entirely.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_enabled_checks")]
    pub enabled_checks: Vec<String>,
}

fn default_full_stop() -> String {
    ".".to_string()
}

fn default_exception_suffixes() -> Vec<String> {
    // He's, I'm
    vec!["s ".to_string(), "m ".to_string()]
}

fn default_enabled_checks() -> Vec<String> {
    vec![
        crate::checker::QUOTATION_CHECK.to_string(),
        crate::checker::CAPITAL_CHECK.to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_ascii_quotes: false,
            full_stop: default_full_stop(),
            exception_suffixes: default_exception_suffixes(),
            capital_whitelist: Vec::new(),
            whitelist_file: None,
            ignore_patterns: Vec::new(),
            enabled_checks: default_enabled_checks(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        use_ascii_quotes: bool,
        full_stop: Option<String>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".prosechk.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if use_ascii_quotes {
            config.use_ascii_quotes = true;
        }
        if let Some(symbol) = full_stop {
            config.full_stop = symbol;
        }
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        Ok(config)
    }

    pub fn check_enabled(&self, name: &str) -> bool {
        self.enabled_checks.iter().any(|check| check == name)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.use_ascii_quotes {
            self.use_ascii_quotes = true;
        }
        if other.full_stop != default_full_stop() {
            self.full_stop = other.full_stop;
        }
        if other.exception_suffixes != default_exception_suffixes() {
            self.exception_suffixes = other.exception_suffixes;
        }
        if !other.capital_whitelist.is_empty() {
            self.capital_whitelist = other.capital_whitelist;
        }
        if other.whitelist_file.is_some() {
            self.whitelist_file = other.whitelist_file;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.enabled_checks != default_enabled_checks() {
            self.enabled_checks = other.enabled_checks;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "prosechk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
