use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, GameMode};
use crate::log;
use crate::translations::Language;

pub const PREFERENCES_FILE_NAME: &str = "tictactoe_preferences.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Setup choices remembered between launches: language, mode, player names,
/// and the computer difficulty level (1..=3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub mode: GameMode,
    pub player1_name: String,
    pub player2_name: String,
    pub difficulty_level: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::En,
            mode: GameMode::PlayerVsComputer,
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            difficulty_level: 1,
        }
    }
}

impl Validate for Preferences {
    fn validate(&self) -> Result<(), String> {
        if self.player1_name.trim().is_empty() {
            return Err("Player 1 name must not be empty".to_string());
        }
        if !(1..=3).contains(&self.difficulty_level) {
            return Err(format!(
                "Difficulty level must be between 1 and 3, got {}",
                self.difficulty_level
            ));
        }
        Ok(())
    }
}

impl Preferences {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.difficulty_level)
    }

    /// Normalizes free-form dialog input into a valid preferences value.
    pub fn sanitized(mut self) -> Self {
        self.player1_name = non_blank_or(self.player1_name, "Player 1");
        self.player2_name = non_blank_or(self.player2_name, "Player 2");
        self.difficulty_level = self.difficulty_level.clamp(1, 3);
        self
    }
}

fn non_blank_or(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// YAML-backed preferences file. Anything unreadable or invalid falls back
/// to defaults; saving swallows errors the same way the score store does.
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Preferences {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Preferences::default();
        };
        let preferences: Preferences = match serde_yaml_ng::from_str(&content) {
            Ok(preferences) => preferences,
            Err(e) => {
                log!(
                    "Ignoring unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                return Preferences::default();
            }
        };
        match preferences.validate() {
            Ok(()) => preferences,
            Err(e) => {
                log!("Ignoring invalid preferences: {}", e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, preferences: &Preferences) {
        if let Err(e) = preferences.validate() {
            log!("Refusing to save invalid preferences: {}", e);
            return;
        }
        let content = match serde_yaml_ng::to_string(preferences) {
            Ok(content) => content,
            Err(e) => {
                log!("Failed to serialize preferences: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            log!("Failed to create preferences directory: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            log!(
                "Failed to save preferences to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Directory for the preferences and score files: next to the executable
/// unless overridden on the command line.
pub fn default_config_dir() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_path_buf();
    }
    PathBuf::from(".")
}
