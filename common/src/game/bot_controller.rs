use super::board::{BOARD_SIZE, Board, BoardError};
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark, Position};

/// Snapshot handed to the move search. The board is cloned so the search can
/// probe cells with apply/undo pairs without touching the live round state.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

/// Single entry point for computer move selection. Any failure inside a
/// strategy degrades to the first-empty-cell fallback; the caller never sees
/// an error. Returns `None` only for a full board, which the session never
/// submits.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    let mut board = input.board.clone();

    let chosen = match difficulty {
        Difficulty::Easy => {
            if board.is_full() {
                None
            } else {
                Some(calculate_random_move(&board, rng))
            }
        }
        Difficulty::Medium => {
            calculate_heuristic_move(&mut board, input.bot_mark, input.opponent_mark, rng)
                .unwrap_or(None)
        }
        Difficulty::Hard => {
            calculate_minimax_move(&mut board, input.bot_mark, input.opponent_mark)
                .unwrap_or(None)
        }
    };

    chosen.or_else(|| fallback_move(&input.board))
}

/// Easy: uniform row/col sampling until an empty cell turns up. Termination
/// is certain while any cell is empty; callers must not pass a full board.
fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Position {
    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.is_cell_empty(row, col).unwrap_or(false) {
            return Position::new(row, col);
        }
    }
}

/// Medium: take the first immediately winning cell, else block the
/// opponent's first immediately winning cell, else play randomly. Each probe
/// restores the board before the scan continues or the cell is returned.
fn calculate_heuristic_move(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Option<Position>, BoardError> {
    if let Some(pos) = find_winning_cell(board, bot_mark)? {
        return Ok(Some(pos));
    }
    if let Some(pos) = find_winning_cell(board, opponent_mark)? {
        return Ok(Some(pos));
    }
    if board.is_full() {
        return Ok(None);
    }
    Ok(Some(calculate_random_move(board, rng)))
}

fn find_winning_cell(board: &mut Board, mark: Mark) -> Result<Option<Position>, BoardError> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.apply_move(row, col, mark)? {
                continue;
            }
            let wins = board.has_winner(mark);
            board.undo_move(row, col)?;
            if wins {
                return Ok(Some(Position::new(row, col)));
            }
        }
    }
    Ok(None)
}

/// Hard: exhaustive minimax over every continuation. Each empty cell is
/// tried as the bot's reply and scored by `minimax`; the strictly greatest
/// score wins, so ties keep the first cell in row-major order.
fn calculate_minimax_move(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> Result<Option<Position>, BoardError> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.apply_move(row, col, bot_mark)? {
                continue;
            }
            let score = minimax(board, bot_mark, opponent_mark, false, 0)?;
            board.undo_move(row, col)?;

            if score > best_score {
                best_score = score;
                best_move = Some(Position::new(row, col));
            }
        }
    }

    Ok(best_move)
}

/// Depth-biased scoring: a win at depth d is worth `10 - d` and a loss
/// `d - 10`, so among winning lines the search prefers the fastest and among
/// losing lines the slowest.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    is_maximizing: bool,
    depth: i32,
) -> Result<i32, BoardError> {
    if board.has_winner(bot_mark) {
        return Ok(10 - depth);
    }
    if board.has_winner(opponent_mark) {
        return Ok(depth - 10);
    }
    if board.is_full() {
        return Ok(0);
    }

    let mark = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.apply_move(row, col, mark)? {
                continue;
            }
            let score = minimax(board, bot_mark, opponent_mark, !is_maximizing, depth + 1)?;
            board.undo_move(row, col)?;

            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    Ok(best)
}

/// Shared fallback: first empty cell in row-major order.
pub fn fallback_move(board: &Board) -> Option<Position> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.is_cell_empty(row, col).unwrap_or(false) {
                return Some(Position::new(row, col));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn input(board: Board, bot_mark: Mark) -> BotInput {
        let opponent_mark = bot_mark.opponent().unwrap();
        BotInput {
            board,
            bot_mark,
            opponent_mark,
        }
    }

    #[test]
    fn test_random_move_only_returns_empty_cells() {
        let board = Board::from_rows([[X, O, X], [O, E, X], [X, X, O]]);
        let mut rng = SessionRng::new(1);
        for _ in 0..20 {
            let pos = calculate_move(Difficulty::Easy, input(board.clone(), O), &mut rng).unwrap();
            assert_eq!(pos, Position::new(1, 1));
        }
    }

    #[test]
    fn test_random_move_is_reproducible_for_a_seed() {
        let board = Board::new();
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        for _ in 0..10 {
            let first = calculate_move(Difficulty::Easy, input(board.clone(), O), &mut a);
            let second = calculate_move(Difficulty::Easy, input(board.clone(), O), &mut b);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_heuristic_completes_own_row_before_blocking() {
        // O can win at (1, 2); blocking X at (0, 2) must not be considered
        // first.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Medium, input(board, O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn test_heuristic_blocks_when_it_cannot_win() {
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Medium, input(board, O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_heuristic_leaves_board_untouched() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let snapshot = board.clone();
        let mut rng = SessionRng::new(0);
        calculate_move(Difficulty::Medium, input(board.clone(), O), &mut rng);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_minimax_opening_reply_is_deterministic() {
        // Every opening scores 0 under perfect play, so the strict `>`
        // tie-break keeps the first cell of the row-major scan.
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Hard, input(Board::new(), O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let board = Board::from_rows([[O, O, E], [X, X, E], [E, E, E]]);
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Hard, input(board, O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_minimax_blocks_immediate_loss() {
        let board = Board::from_rows([[X, E, E], [E, X, E], [O, E, E]]);
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Hard, input(board, O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(2, 2));
    }

    #[test]
    fn test_minimax_prefers_the_faster_win() {
        // O wins immediately at (2, 0); slower winning lines exist but score
        // lower under the depth bias.
        let board = Board::from_rows([[O, X, X], [O, X, E], [E, E, O]]);
        let mut rng = SessionRng::new(0);
        let pos = calculate_move(Difficulty::Hard, input(board, O), &mut rng).unwrap();
        assert_eq!(pos, Position::new(2, 0));
    }

    #[test]
    fn test_fallback_move_scans_row_major() {
        let board = Board::from_rows([[X, O, X], [O, E, X], [E, E, E]]);
        assert_eq!(fallback_move(&board), Some(Position::new(1, 1)));
        assert_eq!(fallback_move(&Board::from_rows([[X, O, X], [O, X, O], [O, X, O]])), None);
    }

    fn play_out(
        first: Difficulty,
        second: Difficulty,
        rng: &mut SessionRng,
    ) -> Option<Mark> {
        let mut board = Board::new();
        let mut mark = X;
        let mut difficulty = first;
        let mut other = second;

        loop {
            let pos = calculate_move(difficulty, input(board.clone(), mark), rng).unwrap();
            assert!(board.apply_move(pos.row, pos.col, mark).unwrap());
            if board.has_winner(mark) {
                return Some(mark);
            }
            if board.is_full() {
                return None;
            }
            mark = mark.opponent().unwrap();
            std::mem::swap(&mut difficulty, &mut other);
        }
    }

    #[test]
    fn test_optimal_self_play_always_draws() {
        let mut rng = SessionRng::new(0);
        assert_eq!(play_out(Difficulty::Hard, Difficulty::Hard, &mut rng), None);
    }

    #[test]
    fn test_optimal_never_loses_to_random() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let winner = play_out(Difficulty::Easy, Difficulty::Hard, &mut rng);
            assert_ne!(winner, Some(X), "random beat minimax with seed {seed}");
        }
    }

    #[test]
    fn test_optimal_never_loses_to_heuristic() {
        for seed in 0..10 {
            let mut rng = SessionRng::new(seed);
            let winner = play_out(Difficulty::Medium, Difficulty::Hard, &mut rng);
            assert_ne!(winner, Some(X), "heuristic beat minimax with seed {seed}");
        }
    }
}
