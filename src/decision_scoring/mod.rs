// Move decision pipeline

pub mod evaluator;
pub mod scoring;
pub mod search;
pub mod selector;
pub mod simulator;
pub mod validator;

pub use evaluator::evaluate;
pub use scoring::{score_move, score_moves, weighted_total, ScoringOptions};
pub use search::{material_balance, rank_direct, MinimaxSearch, SearchStats};
pub use selector::{select, select_move, top_k, Selection};
pub use simulator::estimate_chain_potential;
pub use validator::{is_legal_move, legal_moves};
