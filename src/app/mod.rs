// ==========================================
// Boiler Combustion-Efficiency Tracker - application layer
// ==========================================

pub mod state;

pub use state::AppState;

/// Default database location under the platform data directory.
///
/// Falls back to the working directory when no data directory is available
/// (e.g. stripped-down containers).
pub fn get_default_db_path() -> String {
    dirs::data_dir()
        .map(|dir| {
            dir.join("boiler-efficiency")
                .join("boiler_efficiency.db")
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| "boiler_efficiency.db".to_string())
}
