use crate::session_rng::SessionRng;

use super::board::{Board, CELL_COUNT};
use super::types::{Difficulty, Player};

/// Picks the computer's next move for `computer`'s seat. Returns the chosen
/// cell index, or `None` when the board has no empty cell. Callers only
/// invoke this on a game still in progress.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer: Player,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => select_random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                select_random_move(board, rng)
            } else {
                select_best_move(board, computer)
            }
        }
        Difficulty::Hard => select_best_move(board, computer),
    }
}

fn select_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Exhaustive minimax over the full game tree, scored from `computer`'s
/// perspective. Candidates are tried in ascending index order and only a
/// strictly better score replaces the current best, so ties resolve to
/// the lowest index.
fn select_best_move(board: &Board, computer: Player) -> Option<usize> {
    let available_moves = board.empty_cells();

    if available_moves.is_empty() {
        return None;
    }

    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        scratch.set(index, Some(computer));
        let score = minimax(&mut scratch, computer, 0, false);
        scratch.set(index, None);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Wins score higher the sooner they arrive and losses score lower the
/// later they arrive, so the search prefers quick wins and drawn-out
/// defeats. Draws are 0.
fn minimax(board: &mut Board, computer: Player, depth: i32, is_maximizing: bool) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == computer {
            10 - depth
        } else {
            depth - 10
        };
    }

    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if board.cells()[index].is_some() {
                continue;
            }

            board.set(index, Some(computer));
            let eval = minimax(board, computer, depth + 1, false);
            board.set(index, None);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent = computer.opponent();
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if board.cells()[index].is_some() {
                continue;
            }

            board.set(index, Some(opponent));
            let eval = minimax(board, computer, depth + 1, true);
            board.set(index, None);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
