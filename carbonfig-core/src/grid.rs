//! Gridded fields and zonal profiles.
//!
//! The carbon-feedback sensitivity parameters arrive as global lat-lon
//! rasters (ensemble means and sign-agreement fractions) plus zonal-mean
//! profiles for land and ocean separately. [`GriddedField`] carries a
//! raster with its coordinate axes; [`ZonalProfile`] is a curve over
//! latitude.

use crate::errors::{CoreError, CoreResult};
use crate::timeseries::FloatValue;
use ndarray::{Array1, Array2};

/// A raster on a regular latitude/longitude grid, latitude-major.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedField {
    lat: Array1<FloatValue>,
    lon: Array1<FloatValue>,
    values: Array2<FloatValue>,
}

/// Latitude edges of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub lat_south: FloatValue,
    pub lat_north: FloatValue,
    pub lon_west: FloatValue,
    pub lon_east: FloatValue,
}

impl GriddedField {
    pub fn new(
        values: Array2<FloatValue>,
        lat: Array1<FloatValue>,
        lon: Array1<FloatValue>,
    ) -> CoreResult<Self> {
        if values.dim() != (lat.len(), lon.len()) {
            return Err(CoreError::ShapeMismatch {
                expected: format!("({}, {})", lat.len(), lon.len()),
                found: format!("{:?}", values.dim()),
            });
        }
        Ok(Self { lat, lon, values })
    }

    pub fn nlat(&self) -> usize {
        self.lat.len()
    }

    pub fn nlon(&self) -> usize {
        self.lon.len()
    }

    pub fn lat(&self) -> &Array1<FloatValue> {
        &self.lat
    }

    pub fn lon(&self) -> &Array1<FloatValue> {
        &self.lon
    }

    pub fn values(&self) -> &Array2<FloatValue> {
        &self.values
    }

    pub fn value_at(&self, i: usize, j: usize) -> FloatValue {
        self.values[[i, j]]
    }

    /// Edges of cell `(i, j)`: midpoints between neighbouring centres,
    /// clamped to the poles at the ends of the latitude axis and extended
    /// by half a step at the ends of the longitude axis.
    pub fn cell_bounds(&self, i: usize, j: usize) -> CellBounds {
        let lat = &self.lat;
        let lon = &self.lon;

        let lat_south = if i == 0 {
            (lat[0] - half_step(lat, 0)).max(-90.0)
        } else {
            0.5 * (lat[i - 1] + lat[i])
        };
        let lat_north = if i + 1 == lat.len() {
            (lat[i] + half_step(lat, i)).min(90.0)
        } else {
            0.5 * (lat[i] + lat[i + 1])
        };

        let lon_west = if j == 0 {
            lon[0] - half_step(lon, 0)
        } else {
            0.5 * (lon[j - 1] + lon[j])
        };
        let lon_east = if j + 1 == lon.len() {
            lon[j] + half_step(lon, j)
        } else {
            0.5 * (lon[j] + lon[j + 1])
        };

        CellBounds {
            lat_south: lat_south.min(lat_north),
            lat_north: lat_south.max(lat_north),
            lon_west,
            lon_east,
        }
    }

    /// Minimum and maximum finite values in the raster.
    pub fn value_range(&self) -> Option<(FloatValue, FloatValue)> {
        let mut range: Option<(FloatValue, FloatValue)> = None;
        for &v in self.values.iter() {
            if v.is_finite() {
                range = Some(match range {
                    None => (v, v),
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                });
            }
        }
        range
    }
}

fn half_step(axis: &Array1<FloatValue>, i: usize) -> FloatValue {
    if axis.len() < 2 {
        return 0.5;
    }
    let step = if i + 1 < axis.len() {
        axis[i + 1] - axis[i]
    } else {
        axis[i] - axis[i - 1]
    };
    0.5 * step.abs()
}

/// A curve over latitude (zonal mean or zonal standard deviation).
#[derive(Debug, Clone, PartialEq)]
pub struct ZonalProfile {
    lat: Array1<FloatValue>,
    values: Array1<FloatValue>,
}

impl ZonalProfile {
    pub fn new(values: Array1<FloatValue>, lat: Array1<FloatValue>) -> CoreResult<Self> {
        if values.len() != lat.len() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{} values", lat.len()),
                found: format!("{} values", values.len()),
            });
        }
        Ok(Self { lat, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn lat(&self) -> &Array1<FloatValue> {
        &self.lat
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    /// Pointwise `self + factor * other`, used to build ±1 std envelopes.
    pub fn offset(&self, other: &ZonalProfile, factor: FloatValue) -> CoreResult<ZonalProfile> {
        if other.len() != self.len() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{} values", self.len()),
                found: format!("{} values", other.len()),
            });
        }
        Ok(ZonalProfile {
            lat: self.lat.clone(),
            values: &self.values + &(other.values.mapv(|v| v * factor)),
        })
    }
}
