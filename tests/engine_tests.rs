//! Engine behaviour through the public API.
//!
//! Covers the starting layout, validation order, turn alternation and the
//! reference opening sequence.

use focus_engine::core::{Action, PieceColor, Position};
use focus_engine::rules::{FocusGame, FocusGameBuilder, MoveError, MoveOutcome};

const R: PieceColor = PieceColor::RED;
const G: PieceColor = PieceColor::GREEN;

fn new_game() -> FocusGame {
    FocusGame::new(("PlayerA", R), ("PlayerB", G)).unwrap()
}

// =============================================================================
// Setup
// =============================================================================

/// Test that every tile starts with one piece in the repeating A, A, B, B pattern.
#[test]
fn test_initial_layout() {
    let game = new_game();

    for row in 0..6 {
        for col in 0..6 {
            let index = (row * 6 + col) as usize;
            let expected = if index % 4 < 2 { R } else { G };
            assert_eq!(
                game.tile_pieces((row, col)).unwrap(),
                &[expected],
                "tile ({}, {})",
                row,
                col
            );
        }
    }
}

/// Test that the first registered player moves first and counters start at zero.
#[test]
fn test_initial_turn_and_counters() {
    let game = new_game();

    assert_eq!(game.active_turn(), "PlayerA");
    for name in ["PlayerA", "PlayerB"] {
        assert_eq!(game.reserve_count(name), Ok(0));
        assert_eq!(game.capture_count(name), Ok(0));
        assert_eq!(game.has_won(name), Ok(false));
    }
    assert!(game.winner().is_none());
}

/// Test that the dump lists rows of piles.
#[test]
fn test_board_rows() {
    let game = new_game();
    let rows = game.board_rows();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[2][2], vec![G]);
    assert_eq!(rows[5][0], vec![G]);
}

// =============================================================================
// Queries
// =============================================================================

/// Test that queries reject unknown names and off-board positions.
#[test]
fn test_query_failures() {
    let game = new_game();

    assert_eq!(
        game.reserve_count("Player"),
        Err(MoveError::UnknownPlayer("Player".into()))
    );
    assert!(matches!(game.capture_count("nobody"), Err(MoveError::UnknownPlayer(_))));
    assert!(matches!(game.tile_pieces((6, 0)), Err(MoveError::IllegalMove(_))));
    assert!(matches!(game.tile_at((0, -1)), Err(MoveError::IllegalMove(_))));
    assert_eq!(game.tile_at((3, 2)).unwrap().position(), Position::new(3, 2));
}

// =============================================================================
// Stack moves
// =============================================================================

/// Test the single-piece opening move.
#[test]
fn test_single_move() {
    let mut game = new_game();

    let outcome = game.move_piece("PlayerA", (0, 0), (0, 1), 1);

    assert_eq!(outcome, Ok(MoveOutcome::Moved));
    assert!(game.tile_pieces((0, 0)).unwrap().is_empty());
    assert_eq!(game.tile_at((0, 0)).unwrap().top(), None);
    assert_eq!(game.tile_pieces((0, 1)).unwrap(), &[R, R]);
    assert_eq!(game.active_turn(), "PlayerB");
}

/// Test a vertical move.
#[test]
fn test_vertical_move() {
    let mut game = new_game();

    assert_eq!(game.move_piece("PlayerA", (0, 0), (1, 0), 1), Ok(MoveOutcome::Moved));
    assert_eq!(game.tile_pieces((1, 0)).unwrap(), &[G, R]);
}

/// Test the reference five-move opening ends with the expected pile.
#[test]
fn test_multiple_move_sequence() {
    let mut game = new_game();

    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("PlayerB", (1, 0), (1, 1), 1).unwrap();
    game.move_piece("PlayerA", (0, 1), (0, 3), 2).unwrap();
    game.move_piece("PlayerB", (1, 1), (1, 3), 2).unwrap();
    let outcome = game.move_piece("PlayerA", (0, 3), (1, 3), 1).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(game.tile_pieces((1, 3)).unwrap(), &[R, G, G, R]);
    assert_eq!(game.tile_pieces((0, 3)).unwrap(), &[G, R]);
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.active_turn(), "PlayerB");
}

/// Test that a rejected move changes nothing.
#[test]
fn test_rejection_leaves_state_unchanged() {
    let mut game = new_game();
    let before = game.clone();

    let attempts = [
        game.move_piece("PlayerB", (1, 0), (1, 1), 1),
        game.move_piece("Player", (0, 0), (1, 0), 1),
        game.move_piece("PlayerA", (0, 0), (1, 6), 1),
        game.move_piece("PlayerA", (0, -1), (0, 1), 1),
        game.move_piece("PlayerA", (1, 0), (1, 1), 1),
        game.move_piece("PlayerA", (0, 0), (0, 0), 1),
        game.move_piece("PlayerA", (0, 0), (1, 1), 1),
        game.move_piece("PlayerA", (0, 0), (0, 2), 1),
        game.move_piece("PlayerA", (0, 0), (3, 0), 3),
        game.reserved_move("PlayerA", (1, 1)),
    ];

    assert!(attempts.iter().all(Result::is_err));
    assert_eq!(game, before);
}

/// Test each location failure maps to `IllegalMove`.
#[test]
fn test_illegal_move_variants() {
    let mut game = new_game();

    let cases = [
        ((0, 0), (1, 6), 1),  // destination off board
        ((0, -1), (0, 1), 1), // start off board
        ((1, 0), (1, 1), 1),  // opponent's pile
        ((0, 0), (0, 0), 1),  // no movement
        ((0, 0), (1, 1), 1),  // diagonal
        ((0, 0), (0, 3), 1),  // distance mismatch
    ];

    for (start, destination, count) in cases {
        assert!(
            matches!(
                game.move_piece("PlayerA", start, destination, count),
                Err(MoveError::IllegalMove(_))
            ),
            "{:?} -> {:?}",
            start,
            destination
        );
    }
}

/// Test piece count failures.
#[test]
fn test_illegal_piece_count() {
    let mut game = new_game();

    assert_eq!(
        game.move_piece("PlayerA", (0, 0), (3, 0), 3),
        Err(MoveError::IllegalPieceCount {
            requested: 3,
            available: 1
        })
    );
    assert_eq!(
        game.move_piece("PlayerA", (0, 0), (0, 1), 0),
        Err(MoveError::IllegalPieceCount {
            requested: 0,
            available: 1
        })
    );
}

/// Test that the non-active player is always rejected.
#[test]
fn test_out_of_turn() {
    let mut game = new_game();

    assert_eq!(
        game.move_piece("PlayerB", (1, 0), (1, 1), 1),
        Err(MoveError::OutOfTurn {
            player: "PlayerB".into(),
            active: "PlayerA".into(),
        })
    );

    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    assert!(matches!(
        game.move_piece("PlayerA", (0, 1), (0, 3), 2),
        Err(MoveError::OutOfTurn { .. })
    ));
}

// =============================================================================
// Reserve moves
// =============================================================================

/// Test reserve placement with no reserves.
#[test]
fn test_reserved_move_without_reserves() {
    let mut game = new_game();

    assert_eq!(
        game.reserved_move("PlayerA", (1, 1)),
        Err(MoveError::NoReserves("PlayerA".into()))
    );
    assert_eq!(game.reserve_count("PlayerA"), Ok(0));
    assert_eq!(game.active_turn(), "PlayerA");
}

/// Test reserve validation order: name, turn, reserves, location.
#[test]
fn test_reserved_move_validation_order() {
    let mut game = FocusGameBuilder::new()
        .starting_reserves(5)
        .build(("PlayerA", R), ("PlayerB", G))
        .unwrap();

    assert!(matches!(
        game.reserved_move("player", (9, 9)),
        Err(MoveError::UnknownPlayer(_))
    ));
    assert!(matches!(
        game.reserved_move("PlayerB", (9, 9)),
        Err(MoveError::OutOfTurn { .. })
    ));
    assert!(matches!(
        game.reserved_move("PlayerA", (1, 6)),
        Err(MoveError::IllegalMove(_))
    ));
}

/// Test a successful reserve placement.
#[test]
fn test_reserved_move() {
    let mut game = FocusGameBuilder::new()
        .starting_reserves(5)
        .build(("PlayerA", R), ("PlayerB", G))
        .unwrap();

    assert_eq!(game.reserved_move("PlayerA", (1, 1)), Ok(MoveOutcome::Moved));

    assert_eq!(game.tile_pieces((1, 1)).unwrap(), &[G, R]);
    assert_eq!(game.reserve_count("PlayerA"), Ok(4));
    assert_eq!(game.active_turn(), "PlayerB");
    assert_eq!(game.history().back().unwrap().action, Action::reserve((1, 1)));
}

// =============================================================================
// Actions
// =============================================================================

/// Test that `apply` dispatches both action kinds.
#[test]
fn test_apply_actions() {
    let mut game = FocusGameBuilder::new()
        .starting_reserves(1)
        .build(("PlayerA", R), ("PlayerB", G))
        .unwrap();

    assert_eq!(
        game.apply("PlayerA", &Action::stack((0, 0), (0, 1), 1)),
        Ok(MoveOutcome::Moved)
    );
    assert_eq!(
        game.apply("PlayerB", &Action::reserve((0, 0))),
        Ok(MoveOutcome::Moved)
    );
    assert_eq!(game.tile_pieces((0, 0)).unwrap(), &[G]);
}

/// Test that every enumerated action is accepted.
#[test]
fn test_legal_actions_are_accepted() {
    let mut game = new_game();
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();

    let name = game.active_turn().to_string();
    let actions = game.legal_actions(&name);
    assert!(!actions.is_empty());

    for action in actions {
        let mut trial = game.clone();
        assert!(trial.apply(&name, &action).is_ok(), "{}", action);
    }
}
