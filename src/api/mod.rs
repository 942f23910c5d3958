// ==========================================
// Boiler Combustion-Efficiency Tracker - API layer
// ==========================================
// Operator-facing operations over repositories and the combustion engine.
// Transport-free: a CLI, service, or UI shell calls these directly.
// ==========================================

pub mod boiler_api;
pub mod calculation_api;
pub mod coal_api;
pub mod error;
pub mod validator;

pub use boiler_api::{BoilerApi, BoilerOperationInput};
pub use calculation_api::CalculationApi;
pub use coal_api::CoalApi;
pub use error::{ApiError, ApiResult, ValidationViolation};
