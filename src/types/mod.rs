pub mod board_objects;
pub mod grid;
pub mod metrics;
pub mod moves;
pub mod personality;
pub mod player;
pub mod view;

pub use board_objects::{chebyshev, headquarters_of, manhattan, Headquarters, PowerUp, PowerUpKind};
pub use grid::{Cell, Grid};
pub use metrics::SearchMetrics;
pub use moves::{rank_moves, Evaluation, Move};
pub use personality::Personality;
pub use player::{GameMode, PlayerCount, PlayerId};
pub use view::GameView;
