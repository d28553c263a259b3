//! Whitespace-separated table readers.

use crate::errors::{CoreError, CoreResult};
use crate::timeseries::FloatValue;
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One parsed data line: its 1-based line number and numeric fields.
fn data_lines(path: &Path) -> CoreResult<Vec<(usize, Vec<FloatValue>)>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
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
        rows.push((idx + 1, fields));
    }
    Ok(rows)
}

/// Read a column table, returning the columns in file order.
///
/// `skip` leading data lines are dropped (the files carry one header line
/// of column names). All remaining rows must have the same width.
pub fn read_columns(path: &Path, skip: usize) -> CoreResult<Vec<Array1<FloatValue>>> {
    let rows = data_lines(path)?;
    let rows = &rows[skip.min(rows.len())..];

    let first = rows
        .first()
        .ok_or_else(|| CoreError::parse(path, 0, "no data rows"))?;
    let width = first.1.len();

    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for (line, fields) in rows {
        if fields.len() != width {
            return Err(CoreError::parse(
                path,
                *line,
                format!("expected {} fields, got {}", width, fields.len()),
            ));
        }
        for (column, &value) in columns.iter_mut().zip(fields.iter()) {
            column.push(value);
        }
    }

    Ok(columns.into_iter().map(Array1::from_vec).collect())
}

/// Read an ensemble table: the first data line is the year axis, each
/// following line one ensemble member.
pub fn read_ensemble_table(path: &Path) -> CoreResult<(Array1<FloatValue>, Array2<FloatValue>)> {
    let rows = data_lines(path)?;
    let mut iter = rows.into_iter();

    let (_, years) = iter
        .next()
        .ok_or_else(|| CoreError::parse(path, 0, "no data rows"))?;
    let width = years.len();

    let mut flat = Vec::new();
    let mut n_members = 0;
    for (line, fields) in iter {
        if fields.len() != width {
            return Err(CoreError::parse(
                path,
                line,
                format!(
                    "member has {} values but the year axis has {}",
                    fields.len(),
                    width
                ),
            ));
        }
        flat.extend(fields);
        n_members += 1;
    }
    if n_members == 0 {
        return Err(CoreError::parse(path, 0, "no ensemble members"));
    }

    let values = Array2::from_shape_vec((n_members, width), flat)
        .expect("row collection preserves the element count");
    Ok((Array1::from_vec(years), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn write(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "carbonfig-core-{}-{}",
                std::process::id(),
                name
            ));
            std::fs::write(&path, contents).unwrap();
            TempFile(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn columns_skip_header_and_transpose() {
        let f = TempFile::write(
            "cols.dat",
            "year co2\n1990 354.0\n1991 355.6\n1992 356.4\n",
        );
        let cols = read_columns(&f.0, 1).unwrap();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].to_vec(), vec![1990.0, 1991.0, 1992.0]);
        assert_eq!(cols[1][2], 356.4);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let f = TempFile::write("comments.dat", "# a comment\n\n1 2\n# another\n3 4\n");
        let cols = read_columns(&f.0, 0).unwrap();
        assert_eq!(cols[0].to_vec(), vec![1.0, 3.0]);
        assert_eq!(cols[1].to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn nan_tokens_pass_through() {
        let f = TempFile::write("nan.dat", "0.0 NaN\n1.0 2.0\n");
        let cols = read_columns(&f.0, 0).unwrap();
        assert!(cols[1][0].is_nan());
    }

    #[test]
    fn ragged_rows_are_reported_with_line_numbers() {
        let f = TempFile::write("ragged.dat", "1 2\n3\n");
        let err = read_columns(&f.0, 0).unwrap_err();
        match err {
            CoreError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_token_is_a_parse_error() {
        let f = TempFile::write("token.dat", "1 x\n");
        assert!(matches!(
            read_columns(&f.0, 0),
            Err(CoreError::Parse { .. })
        ));
    }

    #[test]
    fn ensemble_table_splits_axis_and_members() {
        let f = TempFile::write(
            "ens.dat",
            "2015 2016 2017\n400 402 404\n401 403 405\n399 401 403\n",
        );
        let (years, members) = read_ensemble_table(&f.0).unwrap();
        assert_eq!(years.to_vec(), vec![2015.0, 2016.0, 2017.0]);
        assert_eq!(members.dim(), (3, 3));
        assert_eq!(members[[1, 2]], 405.0);
    }

    #[test]
    fn ensemble_table_requires_members() {
        let f = TempFile::write("ens-empty.dat", "2015 2016\n");
        assert!(read_ensemble_table(&f.0).is_err());
    }
}
