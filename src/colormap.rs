//! Diverging colormap for the sensitivity maps.
//!
//! Both maps use the same pink→white→green diverging ramp, discretised at
//! a fixed number of contour levels. Values outside the level range clamp
//! to the end colours; the colorbars mark the clamped end with an arrow.

use plotters::style::RGBColor;

/// Anchor colours of the ramp, evenly spaced over [0, 1].
const ANCHORS: [(u8, u8, u8); 11] = [
    (0x8E, 0x01, 0x52),
    (0xC5, 0x1B, 0x7D),
    (0xDE, 0x77, 0xAE),
    (0xF1, 0xB6, 0xDA),
    (0xFD, 0xE0, 0xEF),
    (0xF7, 0xF7, 0xF7),
    (0xE6, 0xF5, 0xD0),
    (0xB8, 0xE1, 0x86),
    (0x7F, 0xBC, 0x41),
    (0x4D, 0x92, 0x21),
    (0x27, 0x64, 0x19),
];

/// Sample the continuous ramp at `t` in [0, 1].
fn sample(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let pos = t * (ANCHORS.len() - 1) as f64;
    let below = (pos.floor() as usize).min(ANCHORS.len() - 2);
    let frac = pos - below as f64;
    let (r0, g0, b0) = ANCHORS[below];
    let (r1, g1, b1) = ANCHORS[below + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// A diverging colormap discretised at fixed contour levels.
#[derive(Debug, Clone)]
pub struct DivergingColormap {
    levels: Vec<f64>,
    colors: Vec<RGBColor>,
}

impl DivergingColormap {
    /// Build a colormap with `n` evenly spaced levels over `[lo, hi]`.
    ///
    /// The `n` levels bound `n - 1` colour bins; values below the first
    /// level or above the last take the end bin's colour.
    pub fn with_levels(lo: f64, hi: f64, n: usize) -> Self {
        assert!(n >= 2, "need at least two contour levels");
        assert!(hi > lo, "level range must be increasing");
        let step = (hi - lo) / (n - 1) as f64;
        let levels: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
        // One colour per bin, sampled at the bin midpoint
        let colors = (0..n - 1)
            .map(|i| sample((i as f64 + 0.5) / (n - 1) as f64))
            .collect();
        Self { levels, colors }
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn n_bins(&self) -> usize {
        self.colors.len()
    }

    /// Colour of bin `i`.
    pub fn bin_color(&self, i: usize) -> RGBColor {
        self.colors[i]
    }

    /// Colour for a data value, clamped to the end bins outside the range.
    pub fn color_for(&self, value: f64) -> RGBColor {
        if value.is_nan() {
            return RGBColor(0xFF, 0xFF, 0xFF);
        }
        let bin = self
            .levels
            .partition_point(|&edge| edge < value)
            .saturating_sub(1)
            .min(self.colors.len() - 1);
        self.colors[bin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn levels_are_evenly_spaced() {
        let cmap = DivergingColormap::with_levels(-0.02, 0.02, 16);
        assert_eq!(cmap.levels().len(), 16);
        assert_eq!(cmap.n_bins(), 15);
        assert_relative_eq!(cmap.levels()[0], -0.02);
        assert_relative_eq!(cmap.levels()[15], 0.02);
        let step = cmap.levels()[1] - cmap.levels()[0];
        assert_relative_eq!(step, 0.04 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let cmap = DivergingColormap::with_levels(-1.2, 1.2, 16);
        assert_eq!(cmap.color_for(-99.0), cmap.bin_color(0));
        assert_eq!(cmap.color_for(99.0), cmap.bin_color(14));
    }

    #[test]
    fn negative_values_are_pink_positive_green() {
        let cmap = DivergingColormap::with_levels(-1.0, 1.0, 16);
        let negative = cmap.color_for(-0.9);
        let positive = cmap.color_for(0.9);
        assert!(negative.0 > negative.1, "negative end leans red/pink");
        assert!(positive.1 > positive.0, "positive end leans green");
    }

    #[test]
    fn midrange_is_near_white() {
        let cmap = DivergingColormap::with_levels(-1.0, 1.0, 16);
        let mid = cmap.color_for(0.0);
        assert!(mid.0 > 0xD0 && mid.1 > 0xD0 && mid.2 > 0xC0);
    }
}
