use super::types::{GameStatus, MoveError, Player};

/// Cells on the fixed 3x3 grid, indexed row-major from the top-left.
pub const CELL_COUNT: usize = 9;

/// The 8 lines that win a game: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Option<Player>; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<Option<Player>, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::InvalidIndex)
    }

    /// Marks `index` for `player`. Rejects out-of-range indices and cells
    /// that already hold a mark, leaving the board unchanged.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self.cells.get_mut(index).ok_or(MoveError::InvalidIndex)?;
        if cell.is_some() {
            return Err(MoveError::CellOccupied);
        }
        *cell = Some(player);
        Ok(())
    }

    /// Unchecked cell write for search code that places and retracts
    /// hypothetical marks. `index` must be in range.
    pub(crate) fn set(&mut self, index: usize, cell: Option<Player>) {
        self.cells[index] = cell;
    }

    /// Indices of unmarked cells, in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(player, _)| player)
    }

    /// The completed line and its owner, if any. Shells use the triple to
    /// highlight the winning cells.
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        for line in WINNING_LINES {
            let [a, b, c] = line;
            if let Some(player) = self.cells[a]
                && self.cells[b] == Some(player)
                && self.cells[c] == Some(player)
            {
                return Some((player, line));
            }
        }
        None
    }

    /// Evaluates the position. A completed line wins even when the board
    /// is full; a full board without one is a draw.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            return GameStatus::Won(player);
        }
        if self.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    #[cfg(test)]
    pub fn from_symbols(layout: &str) -> Self {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;
        for symbol in layout.chars().filter(|c| !c.is_whitespace()) {
            cells[count] = match symbol {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                '.' => None,
                other => panic!("unexpected board symbol {:?}", other),
            };
            count += 1;
        }
        assert_eq!(count, CELL_COUNT, "board layout must have 9 symbols");
        Self { cells }
    }
}
