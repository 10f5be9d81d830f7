use super::board::{Board, BoardError};
use super::types::{GameStatus, Mark, Player};

/// State of a single round: the board, both players, whose turn it is, and
/// whether the round has finished. Terminal states accept no further moves;
/// `reset` is the only way back to `InProgress`.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub player1: Player,
    pub player2: Player,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            board: Board::new(),
            player1,
            player2,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> &Player {
        if self.current_mark == self.player1.mark {
            &self.player1
        } else {
            &self.player2
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Applies the current player's move. A finished round or an occupied
    /// cell is silently rejected with `Ok(false)`; out-of-range coordinates
    /// are a contract violation.
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if self.is_over() {
            return Ok(false);
        }
        if !self.board.apply_move(row, col, self.current_mark)? {
            return Ok(false);
        }

        self.check_round_over();
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
        Ok(true)
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_round_over(&mut self) {
        if self.board.has_winner(self.current_mark) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                _ => GameStatus::OWon,
            };
            return;
        }
        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::XWon => Some(&self.player1),
            GameStatus::OWon => Some(&self.player2),
            _ => None,
        }
    }

    /// New round: empty board, player 1 to move. Player identities persist.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(
            Player::new(1, Mark::X, "Alice"),
            Player::new(2, Mark::O, "Bob"),
        )
    }

    #[test]
    fn test_player1_moves_first() {
        let state = new_state();
        assert_eq!(state.current_player().number, 1);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = new_state();
        assert!(state.place_mark(0, 0).unwrap());
        assert_eq!(state.current_player().number, 2);
        assert!(state.place_mark(1, 1).unwrap());
        assert_eq!(state.current_player().number, 1);
    }

    #[test]
    fn test_occupied_cell_is_silently_rejected() {
        let mut state = new_state();
        assert!(state.place_mark(0, 0).unwrap());
        assert!(!state.place_mark(0, 0).unwrap());
        assert_eq!(state.current_player().number, 2);
    }

    #[test]
    fn test_row_win_finishes_the_round() {
        let mut state = new_state();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(state.place_mark(row, col).unwrap());
        }
        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.winner().map(|p| p.number), Some(1));
        // No transitions out of a finished round.
        assert!(!state.place_mark(2, 2).unwrap());
        assert_eq!(state.status(), GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut state = new_state();
        // X O X / X O O / O X X
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            assert!(state.place_mark(row, col).unwrap());
        }
        assert!(state.board.is_full());
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_reset_starts_a_fresh_round() {
        let mut state = new_state();
        state.place_mark(0, 0).unwrap();
        state.place_mark(1, 1).unwrap();
        state.reset();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player().number, 1);
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_out_of_range_move_is_an_error() {
        let mut state = new_state();
        assert!(state.place_mark(3, 0).is_err());
        assert_eq!(state.current_player().number, 1);
    }
}
