mod board;
mod bot_controller;
mod game_state;
mod session;
mod session_rng;
mod types;

pub use board::{BOARD_SIZE, Board, BoardError};
pub use bot_controller::{BotInput, calculate_move, fallback_move};
pub use game_state::GameState;
pub use session::{GameSession, SessionSettings};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameMode, GameStatus, Mark, Player, Position};
