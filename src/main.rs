// ==========================================
// Boiler Combustion-Efficiency Tracker - CLI entry point
// ==========================================
// Thin shell over the API layer: record readings, run calculations, import
// CSV logs. Output is JSON so results pipe cleanly into other tools.
// ==========================================

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use boiler_efficiency::api::BoilerOperationInput;
use boiler_efficiency::app::{get_default_db_path, AppState};
use boiler_efficiency::domain::CoalQualityReading;
use boiler_efficiency::{logging, APP_NAME, VERSION};

#[derive(Parser)]
#[command(name = "boiler-efficiency", version, about = APP_NAME)]
struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record the coal-quality reading for a date (replaces any existing one)
    AddCoal {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        moisture_pct: f64,
        #[arg(long)]
        ash_pct: f64,
        #[arg(long)]
        volatile_pct: f64,
        #[arg(long)]
        q_low_kcal: i32,
        #[arg(long)]
        fuel_equiv_k: f64,
        #[arg(long)]
        q_bomb_kcal: i32,
    },

    /// Record a boiler-operation reading (replaces any existing one)
    AddOperation {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        boiler: i32,
        #[arg(long)]
        steam_rate_tph: i32,
        #[arg(long)]
        o2_pct: f64,
        #[arg(long)]
        flue_temp_c: i32,
        #[arg(long)]
        blowdown_pct: f64,
        #[arg(long)]
        cold_air_temp_c: i32,
        #[arg(long)]
        flyash_combustible_pct: f64,
    },

    /// Compute and store the efficiency figures for a (date, boiler) key
    Calculate {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        boiler: i32,
    },

    /// Show the stored efficiency result for a (date, boiler) key
    ShowResult {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        boiler: i32,
    },

    /// List stored efficiency results
    ListResults {
        #[arg(long, default_value_t = 100)]
        limit: i64,
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },

    /// Import coal-quality readings from a CSV log export
    ImportCoal { file: PathBuf },

    /// Import boiler-operation readings from a CSV log export
    ImportOperations { file: PathBuf },

    /// Override the nameplate capacity used by the ambient-loss term
    SetCapacity {
        /// Boiler number (omit to set the default for unlisted boilers)
        #[arg(long)]
        boiler: Option<i32>,
        /// Nameplate capacity in tonnes
        #[arg(long)]
        capacity_t: f64,
    },
}

fn main() {
    logging::init();

    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing::info!("{APP_NAME} v{VERSION}");

    let db_path = cli.db.unwrap_or_else(get_default_db_path);
    let state = AppState::new(db_path)?;

    match cli.command {
        Command::AddCoal {
            date,
            moisture_pct,
            ash_pct,
            volatile_pct,
            q_low_kcal,
            fuel_equiv_k,
            q_bomb_kcal,
        } => {
            let stored = state.coal_api.upsert_reading(CoalQualityReading {
                date,
                moisture_pct,
                ash_pct,
                volatile_pct,
                q_low_kcal,
                q_bomb_kcal,
                fuel_equiv_k,
            })?;
            print_json(&stored)
        }

        Command::AddOperation {
            date,
            boiler,
            steam_rate_tph,
            o2_pct,
            flue_temp_c,
            blowdown_pct,
            cold_air_temp_c,
            flyash_combustible_pct,
        } => {
            let stored = state.boiler_api.upsert_operation(BoilerOperationInput {
                date,
                boiler_number: boiler,
                steam_rate_tph,
                o2_pct,
                flue_temp_c,
                blowdown_pct,
                cold_air_temp_c,
                flyash_combustible_pct,
            })?;
            print_json(&stored)
        }

        Command::Calculate { date, boiler } => {
            let result = state.calculation_api.calculate(date, boiler)?;
            print_json(&result)
        }

        Command::ShowResult { date, boiler } => {
            let result = state.calculation_api.get_result(date, boiler)?;
            print_json(&result)
        }

        Command::ListResults { limit, offset } => {
            let results = state.calculation_api.list_results(limit, offset)?;
            print_json(&results)
        }

        Command::ImportCoal { file } => {
            let report = state.importer.import_coal_csv(&file)?;
            print_json(&report)
        }

        Command::ImportOperations { file } => {
            let report = state.importer.import_operations_csv(&file)?;
            print_json(&report)
        }

        Command::SetCapacity { boiler, capacity_t } => {
            match boiler {
                Some(number) => state.config.set_boiler_capacity(number, capacity_t)?,
                None => state.config.set_default_capacity(capacity_t)?,
            }
            print_json(&serde_json::json!({ "updated": true }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
