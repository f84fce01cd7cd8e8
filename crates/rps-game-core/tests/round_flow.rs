//! Integration tests for the full round flow.
//!
//! These tests walk a round the way the interactive shell does: commit,
//! submit, reveal, and verify the reveal against the original commitment.

use rps_game_core::{decide, Commitment, GameError, MoveSet, Outcome, Round, SecretKey};

fn move_set(names: &[&str]) -> MoveSet {
    MoveSet::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
}

#[test]
fn test_full_round_commit_submit_reveal_verify() {
    let moves = move_set(&["rock", "paper", "scissors", "lizard", "spock"]);
    let mut round = Round::new(&moves).unwrap();

    // Phase 1: the shell shows the commitment and the menu before any input
    let shown_commitment = *round.commitment();
    assert_eq!(shown_commitment.to_string().len(), 64);
    assert_eq!(round.move_names(), moves.names());

    // Phase 2: the player picks from the menu
    let resolution = round.submit_move(3).unwrap();
    assert_eq!(resolution.player_move, "scissors");
    assert!(moves.index_of(&resolution.computer_move).is_some());
    assert_eq!(
        resolution.outcome,
        decide(&moves, "scissors", &resolution.computer_move).unwrap()
    );

    // Phase 3: the player recomputes the commitment from the revealed key
    // and confirms the computer's move was fixed before they chose
    let mut key_bytes = [0u8; 32];
    hex::decode_to_slice(&resolution.revealed_key, &mut key_bytes).unwrap();
    let revealed = SecretKey::from_bytes(key_bytes);
    assert!(shown_commitment.verify(&revealed, &resolution.computer_move));

    // A changed move would not have matched
    for name in moves.names() {
        if *name != resolution.computer_move {
            assert!(!shown_commitment.verify(&revealed, name));
        }
    }
}

#[test]
fn test_replay_builds_an_independent_round() {
    let moves = move_set(&["rock", "paper", "scissors"]);

    let mut first = Round::new(&moves).unwrap();
    let first_resolution = first.submit_move(1).unwrap();
    assert!(matches!(first.submit_move(1), Err(GameError::RoundResolved)));

    // "Play again" constructs a fresh round with a fresh key
    let mut second = Round::new(&moves).unwrap();
    let second_resolution = second.submit_move(1).unwrap();
    assert_ne!(first_resolution.revealed_key, second_resolution.revealed_key);
}

#[test]
fn test_invalid_configuration_is_rejected_before_any_round() {
    assert!(matches!(
        MoveSet::new(vec!["rock".into(), "paper".into(), "scissors".into(), "well".into()]),
        Err(GameError::EvenMoveCount(4))
    ));
    assert!(matches!(
        MoveSet::new(vec!["rock".into(), "rock".into(), "paper".into()]),
        Err(GameError::DuplicateMove(name)) if name == "rock"
    ));
    assert!(matches!(
        MoveSet::new(vec!["rock".into()]),
        Err(GameError::TooFewMoves(1))
    ));
}

#[test]
fn test_help_matrix_matches_menu_order_semantics() {
    let moves = move_set(&["A", "B", "C", "D", "E"]);
    let round = Round::new(&moves).unwrap();
    let matrix = round.outcome_matrix();

    assert_eq!(matrix.len(), 25);
    assert_eq!(matrix[&("A".to_string(), "C".to_string())], Outcome::Win);
    assert_eq!(matrix[&("A".to_string(), "D".to_string())], Outcome::Lose);
    assert_eq!(matrix[&("A".to_string(), "A".to_string())], Outcome::Draw);
}

#[test]
fn test_commitment_is_binding_across_the_whole_menu() {
    let moves = move_set(&["rock", "paper", "scissors"]);
    let key = SecretKey::generate().unwrap();

    // One key, three moves: three distinct digests
    let digests: Vec<String> = moves
        .names()
        .iter()
        .map(|name| Commitment::new(&key, name).to_string())
        .collect();
    assert_ne!(digests[0], digests[1]);
    assert_ne!(digests[1], digests[2]);
    assert_ne!(digests[0], digests[2]);
}
