//! Gridded table reader.

use crate::errors::{CoreError, CoreResult};
use crate::grid::GriddedField;
use crate::timeseries::FloatValue;
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a lat-lon raster.
///
/// The first data line is the longitude axis; each following line holds a
/// latitude value and then one field value per longitude.
pub fn read_gridded(path: &Path) -> CoreResult<GriddedField> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lon: Option<Vec<FloatValue>> = None;
    let mut lat = Vec::new();
    let mut flat = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = Vec::new();
        for token in trimmed.split_whitespace() {
            let value = token.parse::<FloatValue>().map_err(|_| {
                CoreError::parse(path, idx + 1, format!("not a number: {:?}", token))
            })?;
            fields.push(value);
        }

        match &lon {
            None => lon = Some(fields),
            Some(axis) => {
                if fields.len() != axis.len() + 1 {
                    return Err(CoreError::parse(
                        path,
                        idx + 1,
                        format!(
                            "expected latitude plus {} values, got {} fields",
                            axis.len(),
                            fields.len()
                        ),
                    ));
                }
                lat.push(fields[0]);
                flat.extend_from_slice(&fields[1..]);
            }
        }
    }

    let lon = lon.ok_or_else(|| CoreError::parse(path, 0, "no longitude axis"))?;
    if lat.is_empty() {
        return Err(CoreError::parse(path, 0, "no latitude rows"));
    }

    let values = Array2::from_shape_vec((lat.len(), lon.len()), flat)
        .expect("row collection preserves the element count");
    GriddedField::new(values, Array1::from_vec(lat), Array1::from_vec(lon))
}
