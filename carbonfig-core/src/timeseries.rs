//! Annual time series.
//!
//! The figure pipeline works almost entirely on annual series: CO2
//! concentrations, carbon fluxes, emissions and land-use emissions, all
//! indexed by calendar year. [`Timeseries`] couples a value array with its
//! time axis and provides the reductions the panels need: linear
//! interpolation onto a new axis, cumulative integration, boxcar smoothing
//! and splicing of historical and scenario segments.

use crate::errors::{CoreError, CoreResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Scalar type used throughout the crate.
pub type FloatValue = f64;

/// A 1-D series of values on an explicit time axis.
///
/// The time axis is expressed in calendar years and must be strictly
/// increasing. Most series in the pipeline are annual, but decadal
/// scenario tables are also carried as `Timeseries` and expanded with
/// [`interp_onto`](Self::interp_onto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeseries {
    time: Array1<FloatValue>,
    values: Array1<FloatValue>,
}

impl Timeseries {
    /// Build a series from value and time arrays.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length or the time axis is not
    /// strictly increasing.
    pub fn from_values(values: Array1<FloatValue>, time: Array1<FloatValue>) -> Self {
        assert_eq!(
            values.len(),
            time.len(),
            "values and time axis must have the same length"
        );
        for pair in time.windows(2) {
            assert!(
                pair[0] < pair[1],
                "time axis must be strictly increasing, got {} then {}",
                pair[0],
                pair[1]
            );
        }
        Self { time, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn time(&self) -> &Array1<FloatValue> {
        &self.time
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    /// First year of the time axis.
    pub fn first_year(&self) -> Option<FloatValue> {
        self.time.first().copied()
    }

    /// Last year of the time axis.
    pub fn last_year(&self) -> Option<FloatValue> {
        self.time.last().copied()
    }

    /// Append one point past the end of the series.
    ///
    /// Used to bridge the historical record to the first scenario year so
    /// the plotted lines join up.
    ///
    /// # Panics
    ///
    /// Panics if `year` is not beyond the current last year.
    pub fn push(&mut self, year: FloatValue, value: FloatValue) {
        if let Some(last) = self.last_year() {
            assert!(year > last, "appended year {} must follow {}", year, last);
        }
        let mut time = self.time.to_vec();
        let mut values = self.values.to_vec();
        time.push(year);
        values.push(value);
        self.time = Array1::from_vec(time);
        self.values = Array1::from_vec(values);
    }

    /// Splice a later segment onto this series.
    ///
    /// The other series must start after this one ends; the result is the
    /// concatenation of both axes and both value arrays.
    pub fn concat(&self, other: &Timeseries) -> CoreResult<Timeseries> {
        match (self.last_year(), other.first_year()) {
            (Some(last), Some(first)) if first <= last => Err(CoreError::Error(format!(
                "cannot splice: segment starting {} overlaps series ending {}",
                first, last
            ))),
            _ => {
                let time = self
                    .time
                    .iter()
                    .chain(other.time.iter())
                    .copied()
                    .collect::<Array1<_>>();
                let values = self
                    .values
                    .iter()
                    .chain(other.values.iter())
                    .copied()
                    .collect::<Array1<_>>();
                Ok(Timeseries::from_values(values, time))
            }
        }
    }

    /// Linearly interpolate the series onto a new time axis.
    ///
    /// Every target point must lie within the source axis; extrapolation
    /// returns [`CoreError::ExtrapolationNotAllowed`].
    pub fn interp_onto(&self, target: &[FloatValue]) -> CoreResult<Timeseries> {
        let time = self.time.as_slice().expect("contiguous time axis");
        let lo = time[0];
        let hi = time[time.len() - 1];

        let mut out = Vec::with_capacity(target.len());
        for &t in target {
            if t < lo || t > hi {
                return Err(CoreError::ExtrapolationNotAllowed(t, lo, hi));
            }
            // Index of the first axis point at or beyond the target
            let upper = time.partition_point(|&x| x < t);
            if upper == 0 || time[upper] == t {
                out.push(self.values[upper]);
            } else {
                let t0 = time[upper - 1];
                let t1 = time[upper];
                let frac = (t - t0) / (t1 - t0);
                out.push(self.values[upper - 1] * (1.0 - frac) + self.values[upper] * frac);
            }
        }

        Ok(Timeseries::from_values(
            Array1::from_vec(out),
            Array1::from_vec(target.to_vec()),
        ))
    }

    /// Running sum along the time axis (annual integration).
    pub fn cumulative(&self) -> Timeseries {
        let mut acc = 0.0;
        let values = self.values.mapv(|v| {
            acc += v;
            acc
        });
        Timeseries {
            time: self.time.clone(),
            values,
        }
    }

    /// Boxcar running mean with the same length as the input.
    ///
    /// Equivalent to convolving with a normalized box of `window` points
    /// and keeping the central part: near the edges the partial sum is
    /// still divided by the full window, so smoothed series taper towards
    /// zero exactly like the reference curves.
    pub fn smooth(&self, window: usize) -> Timeseries {
        assert!(window >= 1, "smoothing window must be at least 1");
        let n = self.len();
        let half = (window - 1) / 2;
        let mut out = Array1::zeros(n);
        for i in 0..n {
            let lo = (i + half + 1).saturating_sub(window);
            let hi = usize::min(i + half, n.saturating_sub(1));
            let sum: FloatValue = (lo..=hi).map(|j| self.values[j]).sum();
            out[i] = sum / window as FloatValue;
        }
        Timeseries {
            time: self.time.clone(),
            values: out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn series() -> Timeseries {
        Timeseries::from_values(array![1.0, 2.0, 4.0], array![2000.0, 2001.0, 2002.0])
    }

    #[test]
    fn construction_and_accessors() {
        let ts = series();
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.first_year(), Some(2000.0));
        assert_eq!(ts.last_year(), Some(2002.0));
    }

    #[test]
    #[should_panic]
    fn rejects_unsorted_axis() {
        Timeseries::from_values(array![1.0, 2.0], array![2001.0, 2000.0]);
    }

    #[test]
    fn push_extends_series() {
        let mut ts = series();
        ts.push(2003.0, 8.0);
        assert_eq!(ts.len(), 4);
        assert_eq!(ts.values()[3], 8.0);
    }

    #[test]
    fn concat_splices_segments() {
        let hist = series();
        let scen = Timeseries::from_values(array![5.0, 6.0], array![2003.0, 2004.0]);
        let joined = hist.concat(&scen).unwrap();
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.time()[3], 2003.0);
    }

    #[test]
    fn concat_rejects_overlap() {
        let hist = series();
        let scen = Timeseries::from_values(array![5.0], array![2002.0]);
        assert!(hist.concat(&scen).is_err());
    }

    #[test]
    fn interpolation_matches_linear_values() {
        // Decadal values expanded to annual steps
        let decadal = Timeseries::from_values(array![0.0, 10.0], array![2015.0, 2025.0]);
        let annual = decadal
            .interp_onto(&[2015.0, 2020.0, 2025.0])
            .unwrap();
        assert_relative_eq!(annual.values()[0], 0.0);
        assert_relative_eq!(annual.values()[1], 5.0);
        assert_relative_eq!(annual.values()[2], 10.0);
    }

    #[test]
    fn interpolation_rejects_extrapolation() {
        let ts = series();
        let err = ts.interp_onto(&[1999.0]).unwrap_err();
        assert!(matches!(err, CoreError::ExtrapolationNotAllowed(..)));
    }

    #[test]
    fn cumulative_is_running_sum() {
        let ts = series();
        let cum = ts.cumulative();
        assert_eq!(cum.values(), &array![1.0, 3.0, 7.0]);
    }

    #[test]
    fn smooth_matches_boxcar_same_mode() {
        let ts = Timeseries::from_values(
            array![1.0, 1.0, 1.0, 1.0, 1.0],
            array![0.0, 1.0, 2.0, 3.0, 4.0],
        );
        let sm = ts.smooth(3);
        // Interior points average to 1; edges carry partial sums
        assert_relative_eq!(sm.values()[0], 2.0 / 3.0);
        assert_relative_eq!(sm.values()[1], 1.0);
        assert_relative_eq!(sm.values()[2], 1.0);
        assert_relative_eq!(sm.values()[4], 2.0 / 3.0);
    }

    #[test]
    fn serialization_round_trip() {
        let ts = series();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timeseries = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }
}
