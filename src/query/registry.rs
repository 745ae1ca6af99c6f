//! Registry-specific pipelines composed from the generic query operations.
//!
//! The three aggregate endpoints (tree, flat, pivot) are presentation
//! transforms over one canonical relation built by [`active_relation`], so
//! their semantics cannot drift apart.

use crate::datasets::{Table, Value};
use crate::error::RegistryResult;
use crate::query::{drop_duplicates, filter_equals, inner_join, select_columns};

/// Dataset holding one row per registered aircraft.
pub const DATASET_AIRCRAFT: &str = "aircraft";
/// Dataset holding one row per aircraft model.
pub const DATASET_AIRCRAFT_MODELS: &str = "aircraft_models";

/// Grouping dimensions shared by the aggregate presentations.
pub const AGGREGATE_DIMENSIONS: [&str; 3] = ["manufacturer", "model", "county"];

const STATUS_COLUMN: &str = "status_code";
const ACTIVE_STATUS: &str = "A";
const MODEL_CODE_COLUMN: &str = "aircraft_model_code";

/// Optional exact-match restriction on the model side of the active join.
///
/// Both fields set means both must hold; neither set selects everything.
/// Matching is case-sensitive string equality, no partial matches.
#[derive(Debug, Clone, Default)]
pub struct ActiveAircraftFilter {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
}

/// Keep active aircraft and project the join-relevant columns; the status
/// column is dropped from the result.
pub fn filter_active(aircraft: &Table) -> RegistryResult<Table> {
    let active = filter_equals(aircraft, STATUS_COLUMN, &Value::from(ACTIVE_STATUS))?;
    select_columns(
        &active,
        &["aircraft_serial", MODEL_CODE_COLUMN, "name", "county"],
    )
}

/// Distinct (manufacturer, model, seats) rows, first occurrence first.
pub fn list_models(models: &Table) -> RegistryResult<Table> {
    let projected = select_columns(models, &["manufacturer", "model", "seats"])?;
    Ok(drop_duplicates(&projected))
}

/// Join active aircraft to their models, keyed by the model side.
///
/// The optional filter restricts the model side before the join; aircraft
/// whose code matches no surviving model row are silently dropped. The join
/// key never reaches the output.
pub fn join_active_to_models(
    models: &Table,
    active: &Table,
    filter: &ActiveAircraftFilter,
) -> RegistryResult<Table> {
    let mut model_side = select_columns(
        models,
        &[MODEL_CODE_COLUMN, "manufacturer", "model", "seats"],
    )?;
    if let Some(model) = &filter.model {
        model_side = filter_equals(&model_side, "model", &Value::from(model.as_str()))?;
    }
    if let Some(manufacturer) = &filter.manufacturer {
        model_side = filter_equals(
            &model_side,
            "manufacturer",
            &Value::from(manufacturer.as_str()),
        )?;
    }

    let joined = inner_join(&model_side, active, MODEL_CODE_COLUMN)?;
    select_columns(
        &joined,
        &[
            "manufacturer",
            "model",
            "seats",
            "aircraft_serial",
            "name",
            "county",
        ],
    )
}

/// The canonical (manufacturer, model, county) relation over active
/// aircraft, consumed by every aggregate presentation.
pub fn active_relation(models: &Table, aircraft: &Table) -> RegistryResult<Table> {
    let active = filter_active(aircraft)?;
    let model_side = select_columns(models, &[MODEL_CODE_COLUMN, "manufacturer", "model"])?;
    let joined = inner_join(&model_side, &active, MODEL_CODE_COLUMN)?;
    select_columns(&joined, &AGGREGATE_DIMENSIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> Table {
        Table::new(
            vec![
                "aircraft_model_code".to_string(),
                "manufacturer".to_string(),
                "model".to_string(),
                "seats".to_string(),
                "unused".to_string(),
            ],
            vec![
                row(&["m1", "Smiths", "airplane"], 1),
                row(&["m2", "Johns", "lietadlo"], 2),
                row(&["m3", "Georges", "letoun"], 3),
            ],
        )
        .unwrap()
    }

    fn row(strs: &[&str], seats: i64) -> Vec<Value> {
        let mut cells: Vec<Value> = strs.iter().map(|&s| Value::from(s)).collect();
        cells.push(Value::Int(seats));
        cells.push(Value::Null);
        cells
    }

    fn aircraft() -> Table {
        Table::new(
            vec![
                "status_code".to_string(),
                "county".to_string(),
                "aircraft_serial".to_string(),
                "name".to_string(),
                "aircraft_model_code".to_string(),
                "redundant".to_string(),
            ],
            vec![
                air("D", "001", "a", "Adam", "m1"),
                air("A", "001", "b", "Bea", "m2"),
                air("A", "002", "c", "Chuck", "m3"),
                air("A", "001", "d", "Daniel", "m2"),
                air("A", "999", "f", "Fiona", "m9"),
            ],
        )
        .unwrap()
    }

    fn air(status: &str, county: &str, serial: &str, name: &str, code: &str) -> Vec<Value> {
        vec![
            Value::from(status),
            Value::from(county),
            Value::from(serial),
            Value::from(name),
            Value::from(code),
            Value::Null,
        ]
    }

    #[test]
    fn filter_active_drops_status_column() {
        let active = filter_active(&aircraft()).unwrap();
        assert_eq!(
            active.columns(),
            &["aircraft_serial", "aircraft_model_code", "name", "county"]
        );
        assert_eq!(active.len(), 4);
        assert_eq!(active.rows()[0][0], Value::from("b"));
    }

    #[test]
    fn join_soundness() {
        let models = models();
        let aircraft = aircraft();
        let active = filter_active(&aircraft).unwrap();
        let joined =
            join_active_to_models(&models, &active, &ActiveAircraftFilter::default()).unwrap();

        // f references an unknown code; a is inactive
        assert_eq!(joined.len(), 3);
        for row in joined.rows() {
            let pair = (row[0].clone(), row[1].clone());
            assert!(models
                .rows()
                .iter()
                .any(|m| (m[1].clone(), m[2].clone()) == pair));
            let serial = row[3].as_str().unwrap();
            assert!(aircraft
                .rows()
                .iter()
                .any(|a| a[2].as_str() == Some(serial) && a[0].as_str() == Some("A")));
        }
    }

    #[test]
    fn filter_is_case_sensitive_and_conjunctive() {
        let models = models();
        let active = filter_active(&aircraft()).unwrap();

        let johns = ActiveAircraftFilter {
            manufacturer: Some("Johns".to_string()),
            model: None,
        };
        assert_eq!(
            join_active_to_models(&models, &active, &johns).unwrap().len(),
            2
        );

        let lowercase = ActiveAircraftFilter {
            manufacturer: Some("johns".to_string()),
            model: None,
        };
        assert!(join_active_to_models(&models, &active, &lowercase)
            .unwrap()
            .is_empty());

        let mismatched = ActiveAircraftFilter {
            manufacturer: Some("Johns".to_string()),
            model: Some("letoun".to_string()),
        };
        assert!(join_active_to_models(&models, &active, &mismatched)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn active_relation_projects_aggregate_dimensions() {
        let relation = active_relation(&models(), &aircraft()).unwrap();
        assert_eq!(relation.columns(), &AGGREGATE_DIMENSIONS);
        assert_eq!(relation.len(), 3);
        // model-side join order: both Johns rows precede Georges
        assert_eq!(relation.rows()[0][0], Value::from("Johns"));
        assert_eq!(relation.rows()[1][0], Value::from("Johns"));
        assert_eq!(relation.rows()[2][0], Value::from("Georges"));
    }
}
