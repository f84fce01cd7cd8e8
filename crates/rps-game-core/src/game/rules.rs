//! Win/lose/draw rules, generalized to any odd number of moves.

use super::MoveSet;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Round outcome, from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Convert to the display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
            Outcome::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decide the outcome for a pair of 0-based move indices in a set of n moves.
///
/// Each move beats the next (n-1)/2 moves in cyclic order and loses to the
/// (n-1)/2 before it. Requires odd n, which `MoveSet` guarantees.
fn decide_indices(n: usize, player: usize, computer: usize) -> Outcome {
    if player == computer {
        return Outcome::Draw;
    }
    let distance = (n + computer - player) % n;
    if distance <= (n - 1) / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Decide the outcome of playerMove vs computerMove.
///
/// Both names must be members of the move set; an unknown name is a caller
/// defect and reported as `UnknownMove`.
pub fn decide(moves: &MoveSet, player_move: &str, computer_move: &str) -> Result<Outcome, GameError> {
    let player = moves
        .index_of(player_move)
        .ok_or_else(|| GameError::UnknownMove(player_move.to_string()))?;
    let computer = moves
        .index_of(computer_move)
        .ok_or_else(|| GameError::UnknownMove(computer_move.to_string()))?;
    Ok(decide_indices(moves.len(), player, computer))
}

/// Outcome of every ordered pair of moves, keyed by (player move, computer
/// move). Includes the diagonal, which is always a draw. Used for the help
/// table.
pub fn outcome_matrix(moves: &MoveSet) -> HashMap<(String, String), Outcome> {
    let n = moves.len();
    let mut matrix = HashMap::with_capacity(n * n);
    for player in 0..n {
        for computer in 0..n {
            matrix.insert(
                (moves.name(player).to_string(), moves.name(computer).to_string()),
                decide_indices(n, player, computer),
            );
        }
    }
    matrix
}
