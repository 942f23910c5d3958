// ==========================================
// Boiler Combustion-Efficiency Tracker - application state
// ==========================================
// Responsibility: open the database, build the repository / engine / API
// graph over one shared connection, and hand the API instances to whatever
// shell (CLI, service) drives them.
// ==========================================

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::api::{BoilerApi, CalculationApi, CoalApi};
use crate::config::ConfigManager;
use crate::db;
use crate::engine::CombustionCalculator;
use crate::importer::DailyLogImporter;
use crate::repository::{
    BoilerOperationRepository, CoalQualityRepository, EfficiencyResultRepository,
};

/// Application state.
///
/// Holds the API instances and shared resources for one database.
pub struct AppState {
    /// Database path
    pub db_path: String,

    /// Coal-quality API
    pub coal_api: Arc<CoalApi>,

    /// Boiler-operation API
    pub boiler_api: Arc<BoilerApi>,

    /// Calculation API
    pub calculation_api: Arc<CalculationApi>,

    /// Daily-log CSV importer
    pub importer: Arc<DailyLogImporter>,

    /// Configuration store (capacity overrides)
    pub config: Arc<ConfigManager>,
}

impl AppState {
    /// Create a new AppState instance.
    ///
    /// Opens the database (creating parent directories and schema as
    /// needed), wires the repositories, loads the capacity configuration and
    /// builds the APIs.
    pub fn new(db_path: String) -> anyhow::Result<Self> {
        tracing::info!(db_path = %db_path, "initializing application state");

        if let Some(parent) = Path::new(&db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create {}", parent.display()))?;
            }
        }

        let conn = db::open_sqlite_connection(&db_path)
            .with_context(|| format!("cannot open database {db_path}"))?;
        db::init_schema(&conn).context("schema initialization failed")?;
        let conn = Arc::new(Mutex::new(conn));

        // ===== Repositories =====
        let coal_repo = Arc::new(CoalQualityRepository::from_connection(conn.clone()));
        let boiler_repo = Arc::new(BoilerOperationRepository::from_connection(conn.clone()));
        let result_repo = Arc::new(EfficiencyResultRepository::from_connection(conn.clone()));

        // ===== Configuration + engine =====
        let config = Arc::new(ConfigManager::from_connection(conn.clone())?);
        let capacities = config
            .load_capacity_table()
            .context("capacity configuration load failed")?;
        let calculator = Arc::new(CombustionCalculator::new(capacities));

        // ===== APIs =====
        let coal_api = Arc::new(CoalApi::new(coal_repo.clone()));
        let boiler_api = Arc::new(BoilerApi::new(boiler_repo.clone(), coal_repo.clone()));
        let calculation_api = Arc::new(CalculationApi::new(
            boiler_repo,
            coal_repo,
            result_repo,
            calculator,
        ));

        let importer = Arc::new(DailyLogImporter::new(
            coal_api.clone(),
            boiler_api.clone(),
        ));

        tracing::info!("application state ready");

        Ok(Self {
            db_path,
            coal_api,
            boiler_api,
            calculation_api,
            importer,
            config,
        })
    }
}
