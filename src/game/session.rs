use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::time::{Instant, sleep_until};

use crate::broadcaster::{GameBroadcaster, GameUpdate};
use crate::config::GameConfig;
use crate::log;
use crate::session_rng::SessionRng;

use super::bot_controller::select_move;
use super::game_state::GameState;
use super::settings::SessionSettings;
use super::types::{Difficulty, GameStatus, Mode};

/// Boundary inputs a shell feeds into a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// A cell was activated (clicked, tapped). Activations that cannot be
    /// applied are logged and dropped without an update.
    CellActivated(usize),
    /// Switches the mode and starts a new game.
    SetMode(Mode),
    /// Switches the difficulty and starts a new game.
    SetDifficulty(Difficulty),
    Restart,
}

#[derive(Clone)]
pub struct GameSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub settings: Arc<Mutex<SessionSettings>>,
    pub rng: Arc<Mutex<SessionRng>>,
}

impl GameSessionState {
    pub fn create(config: &GameConfig, seed: u64) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            game_state: Arc::new(Mutex::new(GameState::new())),
            settings: Arc::new(Mutex::new(SessionSettings::from(config))),
            rng: Arc::new(Mutex::new(SessionRng::new(seed))),
        })
    }

    pub async fn snapshot(&self) -> GameUpdate {
        GameUpdate::from_state(&*self.game_state.lock().await)
    }
}

pub struct GameSession;

impl GameSession {
    /// Drives a session until the command channel closes: applies shell
    /// commands, plays the computer seat once the pacing delay elapses, and
    /// pushes an update through `broadcaster` whenever the state changed.
    ///
    /// While the computer's move is pending, commands still win the race
    /// against the delay. A command that ends the game or starts a new one
    /// discards the pending move; an ignored activation leaves the
    /// schedule as it was.
    pub async fn run(
        state: GameSessionState,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) {
        broadcaster.broadcast_update(state.snapshot().await).await;

        let mut bot_deadline: Option<Instant> = None;

        loop {
            let (computer_turn, bot_delay) = {
                let game_state = state.game_state.lock().await;
                let settings = state.settings.lock().await;
                let is_computer = game_state.status() == GameStatus::InProgress
                    && settings.is_computer_seat(game_state.current_player());
                (is_computer, settings.bot_delay)
            };

            if !computer_turn {
                bot_deadline = None;
            } else if bot_deadline.is_none() {
                bot_deadline = Some(Instant::now() + bot_delay);
            }

            let changed = if let Some(deadline) = bot_deadline {
                tokio::select! {
                    command = commands.recv() => match command {
                        Some(command) => handle_command(&state, command).await,
                        None => return,
                    },
                    _ = sleep_until(deadline) => {
                        bot_deadline = None;
                        play_computer_turn(&state).await
                    }
                }
            } else {
                match commands.recv().await {
                    Some(command) => handle_command(&state, command).await,
                    None => return,
                }
            };

            if changed {
                // Whatever was scheduled belonged to the previous state.
                bot_deadline = None;
                broadcaster.broadcast_update(state.snapshot().await).await;
            }
        }
    }
}

/// Returns whether the command changed the state and an update is due.
async fn handle_command(state: &GameSessionState, command: SessionCommand) -> bool {
    match command {
        SessionCommand::CellActivated(index) => handle_cell_activated(state, index).await,
        SessionCommand::SetMode(mode) => {
            state.settings.lock().await.mode = mode;
            log!("Mode set to {:?}, starting over", mode);
            reset_game(state).await;
            true
        }
        SessionCommand::SetDifficulty(difficulty) => {
            state.settings.lock().await.difficulty = difficulty;
            log!("Difficulty set to {:?}, starting over", difficulty);
            reset_game(state).await;
            true
        }
        SessionCommand::Restart => {
            log!("Restarting game");
            reset_game(state).await;
            true
        }
    }
}

async fn handle_cell_activated(state: &GameSessionState, index: usize) -> bool {
    let mut game_state = state.game_state.lock().await;
    let settings = state.settings.lock().await;

    if settings.is_computer_seat(game_state.current_player()) {
        log!("Ignoring activation of cell {}: computer's turn", index);
        return false;
    }
    drop(settings);

    let mover = game_state.current_player();
    match game_state.apply_move(index) {
        Ok(status) => {
            log!("Player {} marked cell {} ({:?})", mover, index, status);
            true
        }
        Err(e) => {
            log!("Ignoring activation of cell {}: {}", index, e);
            false
        }
    }
}

async fn play_computer_turn(state: &GameSessionState) -> bool {
    let mut game_state = state.game_state.lock().await;
    let settings = *state.settings.lock().await;

    // The game may have been reset or reconfigured since this turn was
    // scheduled; recheck before committing to a move.
    if game_state.status() != GameStatus::InProgress
        || !settings.is_computer_seat(game_state.current_player())
    {
        return false;
    }

    let mut rng = state.rng.lock().await;
    let calculated_move = select_move(
        game_state.board(),
        settings.difficulty,
        settings.computer_player,
        &mut rng,
    );
    drop(rng);

    let Some(index) = calculated_move else {
        return false;
    };

    match game_state.apply_move(index) {
        Ok(status) => {
            log!(
                "Computer ({}) marked cell {} ({:?})",
                settings.computer_player,
                index,
                status
            );
            true
        }
        Err(e) => {
            log!("Computer failed to mark cell {}: {}", index, e);
            false
        }
    }
}

async fn reset_game(state: &GameSessionState) {
    state.game_state.lock().await.reset();
}
