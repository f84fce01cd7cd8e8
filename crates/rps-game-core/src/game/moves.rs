//! The configured move set.

use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered set of distinct move names.
///
/// The position of a move in the sequence is its identity for rule
/// evaluation. The count must be odd and at least 3, so that every move
/// beats exactly half of the others. Immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new(names: Vec<String>) -> Result<Self, GameError> {
        if names.len() < 3 {
            return Err(GameError::TooFewMoves(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }
        Ok(Self(names))
    }

    /// Number of moves (always odd, >= 3)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A validated move set is never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move name at the given 0-based index
    pub fn name(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// All move names in order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// 0-based index of a move name, if it is in the set
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Pick a move index uniformly at random.
    ///
    /// Uses `thread_rng`, not the OS entropy source: fairness is guaranteed
    /// by the commitment being computed before the player acts, not by the
    /// quality of this choice.
    pub fn random_index(&self) -> usize {
        rand::thread_rng().gen_range(0..self.0.len())
    }
}
