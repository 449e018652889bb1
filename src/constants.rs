// Shared scoring constants

// Chain-reaction simulator
pub const FIRST_ORDER_CHAIN_WEIGHT: f64 = 5.0; // Neighbour that would explode next
pub const SECOND_ORDER_CHAIN_WEIGHT: f64 = 2.0; // Neighbour of a neighbour
pub const CHAIN_SCORE_MULTIPLIER: f64 = 1.5;

// Power-ups
pub const POWER_UP_CAPTURE_BONUS: f64 = 150.0; // Placement lands on the power-up
pub const POWER_UP_NEARBY_BONUS: f64 = 40.0;
pub const POWER_UP_FALLOFF: f64 = 0.5; // Per step of Manhattan distance
pub const POWER_UP_RADIUS: i32 = 3;
pub const HEART_LOW_HEALTH_MULTIPLIER: f64 = 1.5;

// Territory
pub const CORNER_BASE: f64 = 20.0;
pub const CORNER_JITTER: f64 = 10.0;
pub const EDGE_BASE: f64 = 12.0;
pub const EDGE_JITTER: f64 = 8.0;
pub const CENTER_BASE: f64 = 5.0;
pub const CENTER_JITTER: f64 = 6.0;
pub const SPREAD_BONUS: f64 = 8.0; // No friendly orthogonal neighbour
pub const SPREAD_JITTER: f64 = 4.0;
pub const HQ_TERRITORY_BASE: f64 = 4.0;
pub const HQ_TERRITORY_CENTER_PULL: f64 = 6.0;
pub const HQ_TERRITORY_JITTER: f64 = 3.0;

// Aggression
pub const CAPTURE_WEIGHT: f64 = 10.0; // Per enemy atom next to an exploding cell
pub const ENEMY_PROXIMITY_WEIGHT: f64 = 3.0;
pub const PROXIMITY_WINDOW_RADIUS: i32 = 2; // 5x5 window

// Base threat
pub const BASE_THREAT_RADIUS: i32 = 3;
pub const BASE_THREAT_WEIGHT: f64 = 15.0;
pub const BASE_EXPLOSION_RADIUS: i32 = 2;
pub const BASE_EXPLOSION_BONUS: f64 = 30.0;

// Defence
pub const DEFENSE_WINDOW_RADIUS: i32 = 3;
pub const THREAT_WEIGHT: f64 = 2.0;
pub const RECLAIM_BONUS: f64 = 20.0;
pub const LANE_BLOCK_BONUS: f64 = 6.0;
pub const LANE_BLOCK_JITTER: f64 = 0.2; // +/- fraction of the lane bonus
pub const LOW_HEALTH_THRESHOLD: i32 = 2;

// Personality-weighted scoring
pub const RIVAL_FOCUS_BONUS: f64 = 25.0;
pub const IMMEDIATE_EXPLOSION_BONUS: f64 = 12.0;
pub const SCORE_JITTER_FRACTION: f64 = 0.1;
pub const CHAOS_SCALE: f64 = 2.0;

// Selection
pub const EMERGENCY_RADIUS: i32 = 2;
pub const EMERGENCY_MIN_UNITS: u32 = 2;
pub const EMERGENCY_DEFENSE_BONUS: f64 = 1000.0;
pub const MAX_EXTRA_TOP_K: f64 = 3.0;

// Adversarial search
pub const MINIMAX_DEPTH: u32 = 3;
pub const MATERIAL_WEIGHT: f64 = 10.0;
