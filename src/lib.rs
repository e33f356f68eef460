//! Weiqi-Rust: the rules engine for a 19x19 Go (Weiqi) board.
//!
//! This crate owns board state, enforces the capture and suicide rules,
//! keeps a navigable history of board snapshots, and persists whole games
//! to a flat byte format.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and save-file schema constants
//! - [`board`] - Grid storage, liberty search, capture resolution
//! - [`history`] - Snapshot sequence with a movable cursor
//! - [`codec`] - Save/load byte codec for a snapshot sequence
//! - [`engine`] - Move validation and the public game interface
//!
//! ## Example
//!
//! ```
//! use weiqi_rust::board::Color;
//! use weiqi_rust::engine::Engine;
//!
//! let mut engine = Engine::new();
//!
//! // Black opens at the 4-4 point
//! let outcome = engine.apply_move(3, 3).unwrap();
//! assert_eq!(outcome.captured, 0);
//! assert_eq!(engine.to_move(), Color::White);
//!
//! // Save the game and restore it later
//! let bytes = engine.save();
//! let restored = Engine::load(&bytes).unwrap();
//! assert_eq!(restored.history_len(), 2);
//! ```

pub mod board;
pub mod codec;
pub mod constants;
pub mod engine;
pub mod history;
