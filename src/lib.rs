pub mod broadcaster;
pub mod config;
pub mod game;
pub mod logger;
pub mod session_rng;

pub use broadcaster::{GameBroadcaster, GameUpdate};
pub use config::GameConfig;
pub use game::{
    Board, CELL_COUNT, Difficulty, GameSession, GameSessionState, GameState, GameStatus, Mode,
    MoveError, Player, SessionCommand, SessionSettings, WINNING_LINES, select_move,
};
pub use session_rng::SessionRng;
