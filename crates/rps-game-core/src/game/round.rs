//! A single round of play.

use super::rules::{self, Outcome};
use super::MoveSet;
use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Result of a resolved round, returned to the shell for display.
///
/// `revealed_key` lets the player recompute the commitment over
/// `computer_move` and confirm it matches the digest shown before they
/// chose. The key is disclosed on every resolved round, win or lose.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub player_move: String,
    pub computer_move: String,
    pub revealed_key: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundState {
    Committed,
    Resolved,
}

/// One round of the game.
///
/// Construction picks the computer's move, generates a fresh key and
/// computes the commitment, in that order, before any player input exists.
/// Until `submit_move` succeeds, only the commitment is observable; the
/// computer's move and the key stay private. A resolved round is spent:
/// playing again means constructing a new `Round`.
pub struct Round<'a> {
    moves: &'a MoveSet,
    computer_index: usize,
    key: SecretKey,
    commitment: Commitment,
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Start a round: choose the computer's move and commit to it
    pub fn new(moves: &'a MoveSet) -> Result<Self, GameError> {
        let computer_index = moves.random_index();
        let key = SecretKey::generate()?;
        let commitment = Commitment::new(&key, moves.name(computer_index));

        debug!(commitment = %commitment, "round committed");

        Ok(Self {
            moves,
            computer_index,
            key,
            commitment,
            state: RoundState::Committed,
        })
    }

    /// The digest shown to the player before they choose
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Move names in menu order (1-based positions for display)
    pub fn move_names(&self) -> &[String] {
        self.moves.names()
    }

    /// Full outcome table for help display
    pub fn outcome_matrix(&self) -> HashMap<(String, String), Outcome> {
        rules::outcome_matrix(self.moves)
    }

    /// Submit the player's 1-based menu choice and resolve the round.
    ///
    /// An out-of-range choice is rejected without touching the round, so
    /// the shell can re-prompt against the same commitment. On success the
    /// round transitions to resolved and the key is disclosed.
    pub fn submit_move(&mut self, choice: usize) -> Result<Resolution, GameError> {
        if self.state == RoundState::Resolved {
            return Err(GameError::RoundResolved);
        }
        if choice < 1 || choice > self.moves.len() {
            return Err(GameError::InvalidChoice {
                choice,
                max: self.moves.len(),
            });
        }

        let player_move = self.moves.name(choice - 1);
        let computer_move = self.moves.name(self.computer_index);
        let outcome = rules::decide(self.moves, player_move, computer_move)?;
        self.state = RoundState::Resolved;

        debug!(%outcome, "round resolved");

        Ok(Resolution {
            outcome,
            player_move: player_move.to_string(),
            computer_move: computer_move.to_string(),
            revealed_key: self.key.reveal(),
        })
    }
}
