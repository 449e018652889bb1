use thiserror::Error;

/// Faults raised while validating input or scoring moves.
///
/// None of these escape [`crate::MoveEngine::get_move`]; they are logged and
/// turned into "no move".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("coordinate ({row}, {col}) is outside the grid")]
    OutOfBounds { row: i32, col: i32 },

    #[error("score for ({row}, {col}) is not finite")]
    NonFiniteScore { row: i32, col: i32 },

    #[error("invalid host input: {0}")]
    InvalidInput(String),
}
