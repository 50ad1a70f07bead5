//! Move suggestion for chess by breadth-pruned lookahead over a static
//! material, mobility and king-safety evaluation.
//!
//! The search only talks to the game through [`rules::Position`];
//! [`board::Board`] implements it on top of the `chess` crate.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;

pub use board::{Board, Move};
pub use config::SearchConfig;
pub use engine::{Engine, ScoredMove, SearchBudget, Searcher};
pub use error::{BoardError, SearchError};
pub use eval::{Evaluator, PieceWeights};
pub use rules::{DrawKind, Outcome, PieceKind, Position, Side};
