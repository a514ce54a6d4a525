mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;

pub use board::{Board, CELL_COUNT, WINNING_LINES};
pub use bot_controller::select_move;
pub use game_state::GameState;
pub use session::{GameSession, GameSessionState, SessionCommand};
pub use settings::SessionSettings;
pub use types::{Difficulty, GameStatus, Mode, MoveError, Player};
