// ==========================================
// Repository integration tests
// ==========================================
// Coverage: create-or-replace key discipline for all three tables, foreign
// key enforcement between telemetry and fuel analyses.
// ==========================================


use std::sync::{Arc, Mutex};

use boiler_efficiency::domain::{BoilerOperationReading, EfficiencyFigures, EfficiencyResult};
use boiler_efficiency::repository::{
    BoilerOperationRepository, CoalQualityRepository, EfficiencyResultRepository, RepositoryError,
};
use chrono::NaiveDate;
use rusqlite::Connection;
use test_helpers::{create_test_db, date, open_test_connection, sample_coal};

fn shared_connection(db_path: &str) -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(open_test_connection(db_path).unwrap()))
}

fn stored_operation(reading_date: NaiveDate, boiler_number: i32) -> BoilerOperationReading {
    BoilerOperationReading {
        date: reading_date,
        boiler_number,
        steam_rate_tph: 240,
        steam_daily_t: 10.0,
        o2_pct: 4.0,
        flue_temp_c: 140,
        blowdown_pct: 1.5,
        cold_air_temp_c: 30,
        flyash_combustible_pct: 2.0,
        coal_date: reading_date,
    }
}

fn figures(efficiency_pct: f64) -> EfficiencyFigures {
    EfficiencyFigures {
        q2_pct: 5.25,
        q4_pct: 0.85,
        q5_pct: 3.85,
        efficiency_pct,
        fuel_rate: 158.80,
        useful_heat: 164.64,
        blowdown_heat: 0.23,
        standard_fuel_t: 26.18,
        natural_fuel_t: 29.09,
    }
}

#[test]
fn test_coal_upsert_replaces_same_date() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let repo = CoalQualityRepository::from_connection(shared_connection(&db_path));
    let day = date(2024, 3, 1);

    let mut reading = sample_coal(day);
    repo.upsert(&reading).unwrap();

    reading.ash_pct = 28.5;
    reading.q_low_kcal = 4100;
    repo.upsert(&reading).unwrap();

    let stored = repo.find_by_date(day).unwrap().unwrap();
    assert_eq!(stored.ash_pct, 28.5);
    assert_eq!(stored.q_low_kcal, 4100);

    // Still exactly one reading for the date.
    assert_eq!(repo.list_all(100, 0).unwrap().len(), 1);
}

#[test]
fn test_boiler_upsert_replaces_same_key() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let conn = shared_connection(&db_path);
    let coal_repo = CoalQualityRepository::from_connection(conn.clone());
    let boiler_repo = BoilerOperationRepository::from_connection(conn);
    let day = date(2024, 3, 1);

    coal_repo.upsert(&sample_coal(day)).unwrap();

    let mut reading = stored_operation(day, 7);
    boiler_repo.upsert(&reading).unwrap();

    reading.o2_pct = 6.5;
    reading.steam_rate_tph = 220;
    boiler_repo.upsert(&reading).unwrap();

    let stored = boiler_repo.find_by_date_and_boiler(day, 7).unwrap().unwrap();
    assert_eq!(stored.o2_pct, 6.5);
    assert_eq!(stored.steam_rate_tph, 220);
    assert_eq!(boiler_repo.list_by_date(day).unwrap().len(), 1);

    // A different boiler on the same date is a separate record.
    boiler_repo.upsert(&stored_operation(day, 3)).unwrap();
    assert_eq!(boiler_repo.list_by_date(day).unwrap().len(), 2);
}

#[test]
fn test_operation_requires_existing_coal_reading() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let boiler_repo = BoilerOperationRepository::from_connection(shared_connection(&db_path));

    let err = boiler_repo
        .upsert(&stored_operation(date(2024, 3, 1), 7))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
}

#[test]
fn test_coal_replacement_keeps_dependent_operations() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let conn = shared_connection(&db_path);
    let coal_repo = CoalQualityRepository::from_connection(conn.clone());
    let boiler_repo = BoilerOperationRepository::from_connection(conn);
    let day = date(2024, 3, 1);

    coal_repo.upsert(&sample_coal(day)).unwrap();
    boiler_repo.upsert(&stored_operation(day, 7)).unwrap();

    // Correcting the fuel analysis must not orphan the telemetry row.
    let mut corrected = sample_coal(day);
    corrected.ash_pct = 26.0;
    coal_repo.upsert(&corrected).unwrap();

    assert!(boiler_repo.find_by_date_and_boiler(day, 7).unwrap().is_some());
}

#[test]
fn test_result_replace_never_duplicates() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let conn = shared_connection(&db_path);
    let coal_repo = CoalQualityRepository::from_connection(conn.clone());
    let boiler_repo = BoilerOperationRepository::from_connection(conn.clone());
    let result_repo = EfficiencyResultRepository::from_connection(conn);
    let day = date(2024, 3, 1);

    coal_repo.upsert(&sample_coal(day)).unwrap();
    boiler_repo.upsert(&stored_operation(day, 7)).unwrap();

    result_repo
        .replace(&EfficiencyResult::new(day, 7, figures(90.05)))
        .unwrap();
    result_repo
        .replace(&EfficiencyResult::new(day, 7, figures(88.12)))
        .unwrap();

    let stored = result_repo.find_by_date_and_boiler(day, 7).unwrap().unwrap();
    assert_eq!(stored.figures.efficiency_pct, 88.12);
    assert_eq!(result_repo.list_all(100, 0).unwrap().len(), 1);
}

#[test]
fn test_result_requires_existing_operation() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let result_repo = EfficiencyResultRepository::from_connection(shared_connection(&db_path));

    let err = result_repo
        .replace(&EfficiencyResult::new(date(2024, 3, 1), 7, figures(90.05)))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
}

#[test]
fn test_list_all_pagination() {
    let (_temp_file, db_path) = create_test_db().unwrap();
    let repo = CoalQualityRepository::from_connection(shared_connection(&db_path));

    for day in 1..=5 {
        repo.upsert(&sample_coal(date(2024, 3, day))).unwrap();
    }

    let page = repo.list_all(2, 2).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].date, date(2024, 3, 3));
    assert_eq!(page[1].date, date(2024, 3, 4));
}
