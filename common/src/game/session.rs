use crate::score::{ScoreStore, Scores};

use super::board::BoardError;
use super::bot_controller::{BotInput, calculate_move, fallback_move};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{Difficulty, GameMode, GameStatus, Mark, Player};

/// Configuration for one round, produced by the setup flow.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub player1_name: String,
    pub player2_name: String,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

/// Orchestrates rounds for the presentation layer: turn order, score
/// counting, persistence, and the computer opponent. Single-threaded; one
/// logical turn is processed to completion before the next input.
pub struct GameSession {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    scores: Scores,
    store: ScoreStore,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: SessionSettings, store: ScoreStore, rng: SessionRng) -> Self {
        let scores = store.load();
        let state = Self::build_state(&settings);
        Self {
            state,
            mode: settings.mode,
            difficulty: settings.difficulty,
            scores,
            store,
            rng,
        }
    }

    fn build_state(settings: &SessionSettings) -> GameState {
        GameState::new(
            Player::new(1, Mark::X, settings.player1_name.clone()),
            Player::new(2, Mark::O, settings.player2_name.clone()),
        )
    }

    /// Reconfigures players, mode, and difficulty, and starts a fresh round.
    /// Scores are kept; they only change on round results and explicit reset.
    pub fn start_round(&mut self, settings: SessionSettings) {
        self.mode = settings.mode;
        self.difficulty = settings.difficulty;
        self.state = Self::build_state(&settings);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// A human move. Finished rounds and occupied cells are ignored with
    /// `Ok(false)`.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let applied = self.state.place_mark(row, col)?;
        if applied && self.state.is_over() {
            self.record_round_result();
        }
        Ok(applied)
    }

    /// True while the computer side (player 2 in PvC mode) is to move. The
    /// presentation layer schedules its reply delay off this and then calls
    /// `play_computer_turn`; the board must stay untouched in between.
    pub fn computer_turn_pending(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && !self.state.is_over()
            && self.state.current_player().number == 2
    }

    /// Computes and applies the computer's move against the board exactly as
    /// the human left it. A stale or missing selection degrades to the first
    /// empty cell; selection itself never fails.
    pub fn play_computer_turn(&mut self) -> Result<bool, BoardError> {
        if !self.computer_turn_pending() {
            return Ok(false);
        }

        let bot_mark = self.state.player2.mark;
        let input = BotInput {
            board: self.state.board.clone(),
            bot_mark,
            opponent_mark: self.state.player1.mark,
        };
        let mut chosen = calculate_move(self.difficulty, input, &mut self.rng);

        let available = match chosen {
            Some(pos) => self.state.board.is_cell_empty(pos.row, pos.col).unwrap_or(false),
            None => false,
        };
        if !available {
            chosen = fallback_move(&self.state.board);
        }
        let Some(pos) = chosen else {
            return Ok(false);
        };

        let applied = self.state.place_mark(pos.row, pos.col)?;
        if applied && self.state.is_over() {
            self.record_round_result();
        }
        Ok(applied)
    }

    fn record_round_result(&mut self) {
        match (self.mode, self.state.status()) {
            (GameMode::PlayerVsPlayer, GameStatus::XWon) => self.scores.pvp_p1_wins += 1,
            (GameMode::PlayerVsPlayer, GameStatus::OWon) => self.scores.pvp_p2_wins += 1,
            (GameMode::PlayerVsPlayer, GameStatus::Draw) => self.scores.pvp_draws += 1,
            (GameMode::PlayerVsComputer, GameStatus::XWon) => self.scores.pvc_player_wins += 1,
            (GameMode::PlayerVsComputer, GameStatus::OWon) => self.scores.pvc_computer_wins += 1,
            (GameMode::PlayerVsComputer, GameStatus::Draw) => self.scores.pvc_draws += 1,
            (_, GameStatus::InProgress) => {}
        }
        self.store.save(&self.scores);
    }

    pub fn new_round(&mut self) {
        self.state.reset();
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
        self.store.save(&self.scores);
    }
}
