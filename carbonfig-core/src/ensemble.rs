//! Multi-model ensembles.
//!
//! Every scenario in the figure is backed by a stack of climate-model
//! results for the same quantity on a shared time axis. [`Ensemble`] holds
//! the stack as a members × years matrix and provides the reductions the
//! panels consume: multi-model mean, percentiles across the member axis,
//! standard deviation, per-member cumulative sums and elementwise
//! combinations (summing land and ocean fluxes, dividing cumulative uptake
//! by cumulative emissions).

use crate::errors::{CoreError, CoreResult};
use crate::timeseries::FloatValue;
use ndarray::{Array1, Array2, Axis};

/// A stack of model results on a shared time axis.
///
/// Rows are ensemble members, columns are years.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    time: Array1<FloatValue>,
    values: Array2<FloatValue>,
}

/// Mean and percentile envelope of an ensemble, one value per year.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleSummary {
    pub time: Array1<FloatValue>,
    pub mean: Array1<FloatValue>,
    pub lower: Array1<FloatValue>,
    pub upper: Array1<FloatValue>,
}

impl Ensemble {
    /// Build an ensemble from a members × years matrix.
    pub fn new(values: Array2<FloatValue>, time: Array1<FloatValue>) -> CoreResult<Self> {
        if values.nrows() == 0 {
            return Err(CoreError::EmptyEnsemble);
        }
        if values.ncols() != time.len() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{} columns", time.len()),
                found: format!("{} columns", values.ncols()),
            });
        }
        Ok(Self { time, values })
    }

    /// Stack a set of equally-long member series into an ensemble.
    pub fn from_members(
        members: Vec<Array1<FloatValue>>,
        time: Array1<FloatValue>,
    ) -> CoreResult<Self> {
        if members.is_empty() {
            return Err(CoreError::EmptyEnsemble);
        }
        let ncols = time.len();
        let mut flat = Vec::with_capacity(members.len() * ncols);
        for member in &members {
            if member.len() != ncols {
                return Err(CoreError::ShapeMismatch {
                    expected: format!("{} values per member", ncols),
                    found: format!("{} values", member.len()),
                });
            }
            flat.extend(member.iter().copied());
        }
        let values = Array2::from_shape_vec((members.len(), ncols), flat)
            .expect("member stacking preserves the element count");
        Ok(Self { time, values })
    }

    pub fn n_members(&self) -> usize {
        self.values.nrows()
    }

    pub fn len(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn time(&self) -> &Array1<FloatValue> {
        &self.time
    }

    pub fn values(&self) -> &Array2<FloatValue> {
        &self.values
    }

    /// Multi-model mean along the member axis.
    pub fn mean(&self) -> Array1<FloatValue> {
        self.values
            .mean_axis(Axis(0))
            .expect("ensemble has at least one member")
    }

    /// Percentile along the member axis, one value per year.
    ///
    /// Uses linear interpolation between order statistics, so a single
    /// member is returned unchanged and `percentile(50.0)` of two members
    /// is their midpoint. Non-finite values sort to the top of the column
    /// and poison only the percentiles that reach them.
    pub fn percentile(&self, p: FloatValue) -> Array1<FloatValue> {
        assert!((0.0..=100.0).contains(&p), "percentile must be in [0, 100]");
        let n = self.n_members();
        let mut out = Array1::zeros(self.len());
        let mut column = Vec::with_capacity(n);
        for (j, col) in self.values.axis_iter(Axis(1)).enumerate() {
            column.clear();
            column.extend(col.iter().copied());
            column.sort_by(|a, b| a.total_cmp(b));

            let rank = p / 100.0 * (n - 1) as FloatValue;
            let below = rank.floor() as usize;
            let frac = rank - below as FloatValue;
            out[j] = if below + 1 < n {
                column[below] * (1.0 - frac) + column[below + 1] * frac
            } else {
                column[n - 1]
            };
        }
        out
    }

    /// Per-member running sum along the time axis.
    pub fn cumulative(&self) -> Ensemble {
        let mut values = self.values.clone();
        values.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);
        Ensemble {
            time: self.time.clone(),
            values,
        }
    }

    /// Elementwise sum of two ensembles member by member.
    pub fn add(&self, other: &Ensemble) -> CoreResult<Ensemble> {
        if self.values.dim() != other.values.dim() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{:?}", self.values.dim()),
                found: format!("{:?}", other.values.dim()),
            });
        }
        Ok(Ensemble {
            time: self.time.clone(),
            values: &self.values + &other.values,
        })
    }

    /// Add a shared series to every member.
    ///
    /// Used to fold the (model-independent) land-use emissions into each
    /// model's flux before forming the sink fraction.
    pub fn add_profile(&self, profile: &Array1<FloatValue>) -> CoreResult<Ensemble> {
        if profile.len() != self.len() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{} values", self.len()),
                found: format!("{} values", profile.len()),
            });
        }
        Ok(Ensemble {
            time: self.time.clone(),
            values: &self.values + profile,
        })
    }

    /// Elementwise ratio of two ensembles member by member.
    ///
    /// Zero denominators propagate as non-finite values; the panels never
    /// plot the affected range.
    pub fn divide(&self, other: &Ensemble) -> CoreResult<Ensemble> {
        if self.values.dim() != other.values.dim() {
            return Err(CoreError::ShapeMismatch {
                expected: format!("{:?}", self.values.dim()),
                found: format!("{:?}", other.values.dim()),
            });
        }
        Ok(Ensemble {
            time: self.time.clone(),
            values: &self.values / &other.values,
        })
    }

    /// Mean plus a lower/upper percentile envelope.
    pub fn summary(&self, lower: FloatValue, upper: FloatValue) -> EnsembleSummary {
        EnsembleSummary {
            time: self.time.clone(),
            mean: self.mean(),
            lower: self.percentile(lower),
            upper: self.percentile(upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn ensemble() -> Ensemble {
        Ensemble::new(
            array![[1.0, 2.0, 3.0], [3.0, 4.0, 5.0], [5.0, 6.0, 13.0]],
            array![2000.0, 2001.0, 2002.0],
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_ensemble() {
        let result = Ensemble::from_members(vec![], array![2000.0]);
        assert!(matches!(result, Err(CoreError::EmptyEnsemble)));
    }

    #[test]
    fn rejects_mismatched_members() {
        let result = Ensemble::from_members(
            vec![array![1.0, 2.0], array![1.0]],
            array![2000.0, 2001.0],
        );
        assert!(matches!(result, Err(CoreError::ShapeMismatch { .. })));
    }

    #[test]
    fn mean_is_per_year() {
        let e = ensemble();
        assert_eq!(e.mean(), array![3.0, 4.0, 7.0]);
    }

    #[test]
    fn percentile_interpolates_order_statistics() {
        let e = ensemble();
        // Median of {1, 3, 5} is the middle member
        assert_relative_eq!(e.percentile(50.0)[0], 3.0);
        // 5th percentile of three members: rank 0.1 between 1 and 3
        assert_relative_eq!(e.percentile(5.0)[0], 1.2);
        // 95th percentile: rank 1.9 between 3 and 5
        assert_relative_eq!(e.percentile(95.0)[0], 4.8);
    }

    #[test]
    fn percentile_of_single_member_is_identity() {
        let e = Ensemble::new(array![[2.0, 4.0]], array![2000.0, 2001.0]).unwrap();
        assert_eq!(e.percentile(5.0), array![2.0, 4.0]);
        assert_eq!(e.percentile(95.0), array![2.0, 4.0]);
    }

    #[test]
    fn cumulative_runs_along_time() {
        let e = ensemble();
        let cum = e.cumulative();
        assert_eq!(cum.values().row(0), array![1.0, 3.0, 6.0]);
        assert_eq!(cum.values().row(2), array![5.0, 11.0, 24.0]);
    }

    #[test]
    fn add_combines_land_and_ocean() {
        let land = ensemble();
        let ocean = ensemble();
        let total = land.add(&ocean).unwrap();
        assert_eq!(total.values().row(0), array![2.0, 4.0, 6.0]);
    }

    #[test]
    fn add_profile_broadcasts_across_members() {
        let e = ensemble();
        let shifted = e.add_profile(&array![1.0, 0.0, -1.0]).unwrap();
        assert_eq!(shifted.values().row(0), array![2.0, 2.0, 2.0]);
        assert_eq!(shifted.values().row(1), array![4.0, 4.0, 4.0]);
    }

    #[test]
    fn divide_forms_ratios() {
        let num = Ensemble::new(array![[1.0, 4.0]], array![2000.0, 2001.0]).unwrap();
        let den = Ensemble::new(array![[2.0, 8.0]], array![2000.0, 2001.0]).unwrap();
        let frac = num.divide(&den).unwrap();
        assert_eq!(frac.values().row(0), array![0.5, 0.5]);
    }

    #[test]
    fn divide_by_zero_is_non_finite() {
        let num = Ensemble::new(array![[1.0]], array![2000.0]).unwrap();
        let den = Ensemble::new(array![[0.0]], array![2000.0]).unwrap();
        let frac = num.divide(&den).unwrap();
        assert!(!frac.values()[[0, 0]].is_finite());
    }

    #[test]
    fn summary_carries_envelope() {
        let e = ensemble();
        let summary = e.summary(5.0, 95.0);
        assert_eq!(summary.mean, e.mean());
        assert_eq!(summary.lower, e.percentile(5.0));
        assert_eq!(summary.upper, e.percentile(95.0));
    }
}
