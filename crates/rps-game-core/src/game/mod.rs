//! Game definitions and logic.

mod moves;
mod round;
mod rules;

pub use moves::MoveSet;
pub use round::{Resolution, Round};
pub use rules::{decide, outcome_matrix, Outcome};
