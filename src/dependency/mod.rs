mod geometry;
mod performance;
mod personality_store;

pub use geometry::{Geometry, StandardGeometry};
pub use performance::{measure, performance_now};
pub use personality_store::PersonalityStore;
