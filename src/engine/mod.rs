// ==========================================
// Boiler Combustion-Efficiency Tracker - engine layer
// ==========================================

pub mod combustion;

pub use combustion::{round2, CombustionCalculator, CombustionError, CombustionResult};
