//! CSV dataset loading

use polars::prelude::*;
use std::path::Path;

use crate::data::Observation;
use crate::error::{AtlasError, Result};

pub const STATE_COLUMN: &str = "state";
pub const MODEL_COLUMN: &str = "model";
pub const YEAR_COLUMN: &str = "year";
pub const TEMPERATURE_COLUMN: &str = "tas_degree";

/// Read the projection table into observations
///
/// Rows with a null in any of the four columns fail the whole load.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    profiling::scope!("load_observations");

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;

    observations_from_frame(&df)
}

/// Convert a frame with `state, model, year, tas_degree` columns
pub fn observations_from_frame(df: &DataFrame) -> Result<Vec<Observation>> {
    let states = column(df, STATE_COLUMN)?.cast(&DataType::String)?;
    let models = column(df, MODEL_COLUMN)?.cast(&DataType::String)?;
    let years = column(df, YEAR_COLUMN)?.cast(&DataType::Int64)?;
    let temps = column(df, TEMPERATURE_COLUMN)?.cast(&DataType::Float64)?;

    let rows = states
        .str()?
        .into_iter()
        .zip(models.str()?.into_iter())
        .zip(years.i64()?.into_iter())
        .zip(temps.f64()?.into_iter())
        .enumerate();

    let mut observations = Vec::with_capacity(df.height());
    for (row, (((state, model), year), temperature)) in rows {
        let state = state.ok_or(AtlasError::MalformedRow { row, field: STATE_COLUMN })?;
        let model = model.ok_or(AtlasError::MalformedRow { row, field: MODEL_COLUMN })?;
        let year = year
            .and_then(|y| i32::try_from(y).ok())
            .ok_or(AtlasError::MalformedRow { row, field: YEAR_COLUMN })?;
        let temperature = temperature.ok_or(AtlasError::MalformedRow {
            row,
            field: TEMPERATURE_COLUMN,
        })?;
        observations.push(Observation::new(state, model, year, temperature));
    }

    log::debug!("parsed {} observations", observations.len());
    Ok(observations)
}

fn column(df: &DataFrame, name: &str) -> Result<Series> {
    df.column(name)
        .map(|c| c.as_materialized_series().clone())
        .map_err(|_| AtlasError::ColumnNotFound {
            column: name.to_string(),
        })
}
