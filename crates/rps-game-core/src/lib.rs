//! RPS Game Core Library
//!
//! This crate provides the game rules and cryptographic primitives for a
//! generalized N-move rock-paper-scissors game with provable fairness:
//! the computer commits to its move (HMAC under a fresh secret key) before
//! the player chooses, and reveals the key afterwards so the player can
//! verify the move was not changed.

pub mod crypto;
pub mod error;
pub mod game;

pub use crypto::{Commitment, SecretKey};
pub use error::GameError;
pub use game::{decide, outcome_matrix, MoveSet, Outcome, Resolution, Round};
