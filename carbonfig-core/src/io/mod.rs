//! Fixed-format file readers.
//!
//! The input datasets are whitespace-separated text files in three fixed
//! shapes:
//!
//! - column tables: one record per line, optionally preceded by a header
//!   line to skip ([`tabular::read_columns`]);
//! - ensemble tables: a year-axis line followed by one line per ensemble
//!   member ([`tabular::read_ensemble_table`]);
//! - gridded tables: a longitude-axis line followed by one line per
//!   latitude, each holding the latitude value and then one field value
//!   per longitude ([`gridded::read_gridded`]).
//!
//! Lines starting with `#` are comments everywhere. `NaN` tokens parse as
//! NaN and flow through untouched; the readers report ragged rows and
//! unparseable fields as [`CoreError::Parse`](crate::errors::CoreError)
//! with the file and line they came from.

pub mod gridded;
pub mod tabular;

pub use gridded::read_gridded;
pub use tabular::{read_columns, read_ensemble_table};
