//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey: a fresh 256-bit key per round, revealed after the player moves
//! - Commitment: HMAC-SHA256 binding the computer's move to that key

mod commitment;
mod secret;

pub use commitment::Commitment;
pub use secret::SecretKey;
