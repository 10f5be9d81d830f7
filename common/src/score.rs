use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::log;

/// Cumulative counters across rounds, one set per game mode. Each counter is
/// bumped exactly once, on the transition into a finished round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub pvp_p1_wins: u32,
    pub pvp_p2_wins: u32,
    pub pvp_draws: u32,
    pub pvc_player_wins: u32,
    pub pvc_computer_wins: u32,
    pub pvc_draws: u32,
}

pub const SCORE_FILE_NAME: &str = "tictactoe_scores.yaml";

/// YAML-backed score persistence. Loading falls back to zeroed counters and
/// saving swallows errors, so a broken disk never blocks play.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SCORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Scores {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Scores::default();
        };
        match serde_yaml_ng::from_str(&content) {
            Ok(scores) => scores,
            Err(e) => {
                log!("Ignoring unreadable score file {}: {}", self.path.display(), e);
                Scores::default()
            }
        }
    }

    pub fn save(&self, scores: &Scores) {
        let content = match serde_yaml_ng::to_string(scores) {
            Ok(content) => content,
            Err(e) => {
                log!("Failed to serialize scores: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            log!("Failed to create score directory: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            log!("Failed to save scores to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_score_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("tictactoe_scores_test_{}.yaml", random_number))
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_score_path();
        let store = ScoreStore::new(path.clone());
        let scores = Scores {
            pvp_p1_wins: 3,
            pvp_p2_wins: 1,
            pvp_draws: 2,
            pvc_player_wins: 5,
            pvc_computer_wins: 8,
            pvc_draws: 0,
        };
        store.save(&scores);
        assert_eq!(store.load(), scores);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_loads_zeroed_counters() {
        let store = ScoreStore::new(temp_score_path());
        assert_eq!(store.load(), Scores::default());
    }

    #[test]
    fn test_corrupt_file_loads_zeroed_counters() {
        let path = temp_score_path();
        std::fs::write(&path, "pvp_p1_wins: [not a number").unwrap();
        let store = ScoreStore::new(path.clone());
        assert_eq!(store.load(), Scores::default());
        let _ = std::fs::remove_file(path);
    }
}
