// ==========================================
// Boiler Combustion-Efficiency Tracker - core library
// ==========================================
// Tracks daily coal-quality and boiler-operation readings and derives
// combustion-efficiency figures (heat losses, efficiency, fuel consumption).
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - combustion formulas
pub mod engine;

// Importer layer - CSV log intake
pub mod importer;

// Configuration layer - capacity overrides
pub mod config;

// Database infrastructure (connection init / PRAGMA / schema)
pub mod db;

// Logging
pub mod logging;

// API layer - operator-facing operations
pub mod api;

// Application layer - wiring
pub mod app;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain entities
pub use domain::{
    BoilerOperationReading, CoalQualityReading, EfficiencyFigures, EfficiencyResult,
};

// Engine
pub use engine::{CombustionCalculator, CombustionError};

// Configuration
pub use config::{BoilerCapacityTable, ConfigManager};

// API
pub use api::{ApiError, BoilerApi, CalculationApi, CoalApi};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Boiler Combustion-Efficiency Tracker";
