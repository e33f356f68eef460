//! Integration tests for weiqi-rust
//!
//! These exercise the public engine interface end to end: move legality,
//! capture accounting, history navigation and branching, and the save/load
//! round trip.

use weiqi_rust::board::{parse_coord, Color};
use weiqi_rust::engine::{Engine, MoveError};
use weiqi_rust::history::BoardState;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play a sequence of coordinate strings, alternating Black/White starting
/// with whoever is to move. Panics on the first rejected move.
fn play(engine: &mut Engine, moves: &[&str]) {
    for mv in moves {
        let (x, y) = parse_coord(mv).unwrap_or_else(|| panic!("bad coordinate {mv}"));
        engine
            .apply_move(x, y)
            .unwrap_or_else(|e| panic!("move {mv} rejected: {e}"));
    }
}

fn at(s: &str) -> (usize, usize) {
    parse_coord(s).unwrap()
}

// =============================================================================
// Move legality
// =============================================================================

#[test]
fn test_opening_move() {
    let mut engine = Engine::new();
    let (x, y) = at("D16");

    let outcome = engine.apply_move(x, y).unwrap();
    assert_eq!(outcome.captured, 0);
    assert_eq!(engine.board().get(x, y), Some(Color::Black));
    assert_eq!(engine.to_move(), Color::White);
}

#[test]
fn test_occupied_point_rejected() {
    let mut engine = Engine::new();
    play(&mut engine, &["D4"]);

    let (x, y) = at("D4");
    assert_eq!(engine.apply_move(x, y), Err(MoveError::Occupied));
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = Engine::new();
    assert_eq!(engine.apply_move(19, 3), Err(MoveError::OutOfBounds));
    assert_eq!(engine.apply_move(usize::MAX, 0), Err(MoveError::OutOfBounds));
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture_single_stone() {
    // Black surrounds the white stone at D4 and takes it
    let mut engine = Engine::new();
    play(
        &mut engine,
        &["C4", "D4", "E4", "Q16", "D3", "Q4", "D5"],
    );

    let last = engine.current_state();
    assert_eq!(last.black_captures, 1);
    let (x, y) = at("D4");
    assert!(engine.board().is_empty(x, y), "D4 captured");
}

#[test]
fn test_capture_group() {
    // White pair at D4/D5 loses its last liberty at D6
    let mut engine = Engine::new();
    play(
        &mut engine,
        &[
            "C4", "D4", "C5", "D5", "E4", "Q16", "E5", "Q4", "D3", "Q10",
        ],
    );

    let (x, y) = at("D6");
    let outcome = engine.apply_move(x, y).unwrap();
    assert_eq!(outcome.captured, 2);
    assert!(engine.board().is_empty(at("D4").0, at("D4").1));
    assert!(engine.board().is_empty(at("D5").0, at("D5").1));
    // The surrounding black stones stay
    assert_eq!(engine.board().get(at("C4").0, at("C4").1), Some(Color::Black));
}

#[test]
fn test_white_captures_counted_separately() {
    // Black stone at A19 (corner, coordinates (0,0)); White takes it
    let mut engine = Engine::new();
    play(&mut engine, &["A19", "B19", "Q4", "A18"]);

    assert_eq!(engine.captures(Color::White), 1);
    assert_eq!(engine.captures(Color::Black), 0);
    assert!(engine.board().is_empty(0, 0));
}

// =============================================================================
// Suicide rule
// =============================================================================

#[test]
fn test_suicide_rejected_board_unchanged() {
    // White walls off the A19 corner group's last liberty
    let mut engine = Engine::new();
    play(
        &mut engine,
        &["A19", "B19", "Q16", "B18", "Q4", "A17"],
    );

    let before = engine.current_state().clone();
    let (x, y) = at("A18");
    assert_eq!(engine.apply_move(x, y), Err(MoveError::Suicide));
    assert_eq!(engine.current_state(), &before, "rejection is atomic");
    assert_eq!(engine.to_move(), Color::Black);
}

#[test]
fn test_capturing_move_is_never_suicide() {
    // A19 is surrounded by White, but the White stone at B19 is in atari:
    // Black playing A19 captures it and gains a liberty
    let mut engine = Engine::new();
    play(&mut engine, &["C19", "B19", "B18", "A18"]);

    let (x, y) = at("A19");
    let outcome = engine.apply_move(x, y).unwrap();
    assert_eq!(outcome.captured, 1);
    assert_eq!(engine.board().get(x, y), Some(Color::Black));
}

// =============================================================================
// History navigation and branching
// =============================================================================

#[test]
fn test_jump_replays_snapshot() {
    let mut engine = Engine::new();
    play(&mut engine, &["D4", "Q16", "Q4", "D16"]);

    let state = engine.jump_to(3).expect("index 3 exists");
    assert_eq!(state.last_move, Some(at("Q4")));
    assert_eq!(engine.to_move(), Color::White);
    assert!(engine.board().is_empty(at("D16").0, at("D16").1));

    // Back to the head: the full game is intact
    engine.jump_to(4).unwrap();
    assert_eq!(engine.board().get(at("D16").0, at("D16").1), Some(Color::White));
}

#[test]
fn test_branch_discards_future() {
    // From a 5-state history (4 moves), rewind to index 2 and play a new
    // move: length becomes 4, the original moves 3-4 are gone
    let mut engine = Engine::new();
    play(&mut engine, &["D4", "Q16", "Q4", "D16"]);
    assert_eq!(engine.history_len(), 5);

    engine.jump_to(2).unwrap();
    let (x, y) = at("K10");
    let outcome = engine.apply_move(x, y).unwrap();

    assert!(outcome.branched);
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.cursor(), 3);
    assert_eq!(engine.current_state().last_move, Some(at("K10")));
    assert!(engine.jump_to(4).is_none(), "old head no longer exists");
}

#[test]
fn test_rewind_to_start() {
    let mut engine = Engine::new();
    play(&mut engine, &["D4", "Q16"]);

    let state = engine.jump_to(0).expect("index 0 is permanent");
    assert_eq!(state, &BoardState::initial());
    assert_eq!(engine.to_move(), Color::Black);
    assert_eq!(engine.cursor(), 0);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_save_load_full_game() {
    let mut engine = Engine::new();
    play(
        &mut engine,
        &["C4", "D4", "E4", "Q16", "D3", "Q4", "D5", "R14"],
    );

    let bytes = engine.save();
    let loaded = Engine::load(&bytes).expect("round trip");

    assert_eq!(loaded.history_len(), engine.history_len());
    assert_eq!(loaded.cursor(), loaded.history_len() - 1);

    // Every snapshot, not just the head, survives the round trip
    let mut restored = Engine::load(&bytes).unwrap();
    for i in 0..engine.history_len() {
        let got = restored.jump_to(i).unwrap().clone();
        let want = engine.jump_to(i).unwrap();
        assert_eq!(&got, want, "snapshot {i} identical after round trip");
    }
}

#[test]
fn test_save_from_rewound_cursor_keeps_everything() {
    let mut engine = Engine::new();
    play(&mut engine, &["D4", "Q16", "Q4"]);
    engine.jump_to(1).unwrap();

    // Saving is cursor-independent
    let loaded = Engine::load(&engine.save()).unwrap();
    assert_eq!(loaded.history_len(), 4);
    assert_eq!(loaded.cursor(), 3);
}

#[test]
fn test_load_corrupt_data() {
    assert!(Engine::load(&[]).is_err());
    assert!(Engine::load(&[0xDE, 0xAD, 0xBE, 0xEF]).is_err());

    let mut bytes = Engine::new().save();
    bytes[4] = 0x42; // clobber a cell code
    assert!(Engine::load(&bytes).is_err());
}

#[test]
fn test_loaded_game_continues() {
    let mut engine = Engine::new();
    play(&mut engine, &["D4", "Q16"]);

    let mut loaded = Engine::load(&engine.save()).unwrap();
    assert_eq!(loaded.to_move(), Color::Black);
    play(&mut loaded, &["Q4"]);
    assert_eq!(loaded.history_len(), 4);
    assert_eq!(loaded.board().get(at("Q4").0, at("Q4").1), Some(Color::Black));
}
