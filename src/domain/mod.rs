// ==========================================
// Boiler Combustion-Efficiency Tracker - domain layer
// ==========================================

pub mod boiler;
pub mod coal;
pub mod efficiency;

pub use boiler::BoilerOperationReading;
pub use coal::CoalQualityReading;
pub use efficiency::{EfficiencyFigures, EfficiencyResult};
