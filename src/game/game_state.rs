use super::board::Board;
use super::types::{GameStatus, MoveError, Player};

/// A live game: the grid, whose turn it is, and the evaluated status.
/// Turns alternate strictly; the mark placed by [`GameState::apply_move`]
/// is always the tracked current player's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark at `index`. On success the status
    /// is recomputed and the turn passes to the opponent unless the game
    /// just ended. A finished game rejects everything with `GameOver`,
    /// whatever the index.
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(index, self.current_player)?;
        self.status = self.board.status();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }

    /// Back to an empty board with X to move.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// The line shells display under the board.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a tie!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &index in moves {
            state.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first() {
        let state = GameState::new();

        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status_message(), "Player X's turn");
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();

        state.apply_move(0).unwrap();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status_message(), "Player O's turn");

        state.apply_move(4).unwrap();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board().cell(0), Ok(Some(Player::X)));
        assert_eq!(state.board().cell(4), Ok(Some(Player::O)));
    }

    #[test]
    fn test_completing_a_row_wins() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4]);

        assert_eq!(state.apply_move(2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(state.status_message(), "Player X wins!");
    }

    #[test]
    fn test_turn_does_not_pass_after_a_win() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_o_can_win_too() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 8]);

        assert_eq!(state.apply_move(5), Ok(GameStatus::Won(Player::O)));
        assert_eq!(state.status_message(), "Player O wins!");
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        let mut state = GameState::new();
        play(&mut state, &[0, 4, 8, 1, 7, 6, 2, 5]);

        assert_eq!(state.apply_move(3), Ok(GameStatus::Draw));
        assert_eq!(state.status_message(), "It's a tie!");
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_losing_the_turn() {
        let mut state = GameState::new();
        state.apply_move(4).unwrap();

        let before = state.clone();
        assert_eq!(state.apply_move(4), Err(MoveError::CellOccupied));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_index_is_rejected() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(9), Err(MoveError::InvalidIndex));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board().empty_cells().len(), 9);
    }

    #[test]
    fn test_finished_game_rejects_every_move() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        let before = state.clone();
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(state.apply_move(99), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_restores_a_fresh_game() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        state.reset();

        assert_eq!(state, GameState::new());
        assert_eq!(state.status_message(), "Player X's turn");
    }
}
