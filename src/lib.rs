// Chain-reaction opponent engine

pub mod config;
pub mod constants;
pub mod decision_scoring;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use config::{EngineConfig, SearchStrategy};
pub use decision_scoring::{
    estimate_chain_potential, evaluate, is_legal_move, legal_moves, score_move, select_move,
    MinimaxSearch, ScoringOptions, SearchStats,
};
pub use dependency::{Geometry, PersonalityStore, StandardGeometry};
pub use error::EngineError;
pub use logic::MoveEngine;
pub use service::AiOpponent;
pub use types::{
    Cell, Evaluation, GameMode, GameView, Grid, Headquarters, Move, Personality, PlayerCount,
    PlayerId, PowerUp, PowerUpKind, SearchMetrics,
};
