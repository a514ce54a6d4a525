use std::future::Future;

use crate::game::{Board, GameState};

/// Snapshot pushed to the shell after every state change: the whole board
/// for per-cell rendering, the status line, and the completed triple (if
/// any) for highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameUpdate {
    pub board: Board,
    pub message: String,
    pub winning_line: Option<[usize; 3]>,
}

impl GameUpdate {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            message: state.status_message(),
            winning_line: state.board().winning_line().map(|(_, line)| line),
        }
    }
}

/// Sink for session output. Shells implement this to route updates to
/// whatever they render with.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_update(&self, update: GameUpdate) -> impl Future<Output = ()> + Send;
}
