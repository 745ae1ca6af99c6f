//! Wire-format records for the HTTP surface.
//!
//! Every endpoint responds with a `count` plus the elements themselves under
//! `loaded_data`. Record constructors consume engine rows positionally, so
//! the column order chosen by the pipelines is the single source of truth.

use serde::Serialize;

use crate::datasets::Value;
use crate::error::{RegistryError, RegistryResult};

/// Generic response envelope: element count plus the payload.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub loaded_data: T,
}

impl<T> ListResponse<T> {
    pub fn new(count: usize, loaded_data: T) -> Self {
        Self { count, loaded_data }
    }
}

impl<T> From<Vec<T>> for ListResponse<Vec<T>> {
    fn from(loaded_data: Vec<T>) -> Self {
        Self {
            count: loaded_data.len(),
            loaded_data,
        }
    }
}

/// Summary of one loaded dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub name: String,
    pub columns: Vec<String>,
    pub rows_count: usize,
}

/// A distinct aircraft model.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AircraftModel {
    pub manufacturer: String,
    pub model: String,
    pub seats: i64,
}

impl AircraftModel {
    /// Row layout: (manufacturer, model, seats).
    pub(crate) fn from_row(row: &[Value]) -> RegistryResult<Self> {
        Ok(Self {
            manufacturer: str_cell(row, 0)?,
            model: str_cell(row, 1)?,
            seats: int_cell(row, 2)?,
        })
    }
}

/// An active aircraft joined to its model.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveAircraft {
    pub manufacturer: String,
    pub model: String,
    pub seats: i64,
    pub serial: String,
    pub registrant_name: String,
    pub registrant_county: Option<String>,
}

impl ActiveAircraft {
    /// Row layout: (manufacturer, model, seats, aircraft_serial, name, county).
    pub(crate) fn from_row(row: &[Value]) -> RegistryResult<Self> {
        Ok(Self {
            manufacturer: str_cell(row, 0)?,
            model: str_cell(row, 1)?,
            seats: int_cell(row, 2)?,
            serial: str_cell(row, 3)?,
            registrant_name: str_cell(row, 4)?,
            registrant_county: opt_str_cell(row, 5)?,
        })
    }
}

/// One grouped (manufacturer, model, county) count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveAircraftCount {
    pub manufacturer: String,
    pub model: String,
    pub registrant_county: String,
    pub count: i64,
}

impl ActiveAircraftCount {
    /// Row layout: (manufacturer, model, county, count).
    pub(crate) fn from_row(row: &[Value]) -> RegistryResult<Self> {
        Ok(Self {
            manufacturer: str_cell(row, 0)?,
            model: str_cell(row, 1)?,
            registrant_county: str_cell(row, 2)?,
            count: int_cell(row, 3)?,
        })
    }
}

fn cell(row: &[Value], index: usize) -> RegistryResult<&Value> {
    row.get(index).ok_or_else(|| {
        RegistryError::MalformedRow(format!("missing cell {} in a {}-cell row", index, row.len()))
    })
}

fn str_cell(row: &[Value], index: usize) -> RegistryResult<String> {
    let value = cell(row, index)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| RegistryError::MalformedRow(format!("cell {} is not a string", index)))
}

fn opt_str_cell(row: &[Value], index: usize) -> RegistryResult<Option<String>> {
    match cell(row, index)? {
        Value::Null => Ok(None),
        value => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| RegistryError::MalformedRow(format!("cell {} is not a string", index))),
    }
}

fn int_cell(row: &[Value], index: usize) -> RegistryResult<i64> {
    cell(row, index)?
        .as_i64()
        .ok_or_else(|| RegistryError::MalformedRow(format!("cell {} is not an integer", index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_aircraft_from_row() {
        let row = vec![
            Value::from("Johns"),
            Value::from("lietadlo"),
            Value::from(2),
            Value::from("b"),
            Value::from("Bea"),
            Value::from("001"),
        ];
        let record = ActiveAircraft::from_row(&row).unwrap();
        assert_eq!(record.serial, "b");
        assert_eq!(record.registrant_county.as_deref(), Some("001"));
    }

    #[test]
    fn null_county_maps_to_none() {
        let row = vec![
            Value::from("Johns"),
            Value::from("lietadlo"),
            Value::from(2),
            Value::from("b"),
            Value::from("Bea"),
            Value::Null,
        ];
        let record = ActiveAircraft::from_row(&row).unwrap();
        assert_eq!(record.registrant_county, None);
    }

    #[test]
    fn type_mismatch_is_malformed_row() {
        let row = vec![Value::from("Johns"), Value::from("lietadlo"), Value::Null];
        assert!(matches!(
            AircraftModel::from_row(&row),
            Err(RegistryError::MalformedRow(_))
        ));
    }
}
