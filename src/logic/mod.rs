mod move_engine;

pub use move_engine::MoveEngine;
