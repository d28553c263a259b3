//! Colours, alphas and font sizes shared across the panels.

use carbonfig_core::scenario::Scenario;
use plotters::style::RGBColor;

pub const COL_HIST: RGBColor = RGBColor(0x00, 0x00, 0x00);
pub const COL_SSP119: RGBColor = RGBColor(0x1E, 0x96, 0x84);
pub const COL_SSP126: RGBColor = RGBColor(0x1D, 0x33, 0x54);
pub const COL_SSP245: RGBColor = RGBColor(0xEA, 0xDD, 0x3D);
pub const COL_SSP370: RGBColor = RGBColor(0xF2, 0x11, 0x11);
pub const COL_SSP585: RGBColor = RGBColor(0x84, 0x0B, 0x22);
pub const COL_SSP534: RGBColor = RGBColor(0x9A, 0x6D, 0xC9);

/// Zonal-profile colours.
pub const COL_LAND: RGBColor = RGBColor(0x00, 0x80, 0x00);
pub const COL_OCEAN: RGBColor = RGBColor(0x00, 0x00, 0xFF);

/// Opacity of the percentile bands.
pub const BAND_ALPHA: f64 = 0.1;
/// Opacity of the ±1 std bands on the zonal panels.
pub const ZONAL_BAND_ALPHA: f64 = 0.2;
/// Opacity of the horizontal guide lines.
pub const GUIDE_ALPHA: f64 = 0.2;
/// Opacity of the zero line.
pub const ZERO_LINE_ALPHA: f64 = 0.5;

pub const TITLE_FONT: (&str, u32) = ("sans-serif", 34);
pub const SMALL_TITLE_FONT: (&str, u32) = ("sans-serif", 28);
pub const LABEL_FONT: (&str, u32) = ("sans-serif", 24);
pub const TICK_FONT: (&str, u32) = ("sans-serif", 22);
pub const ANNOTATION_FONT: (&str, u32) = ("sans-serif", 26);

/// Line colour for a scenario.
pub fn scenario_color(scenario: Scenario) -> RGBColor {
    match scenario {
        Scenario::Historical => COL_HIST,
        Scenario::Ssp119 => COL_SSP119,
        Scenario::Ssp126 => COL_SSP126,
        Scenario::Ssp245 => COL_SSP245,
        Scenario::Ssp534Over => COL_SSP534,
        Scenario::Ssp370 => COL_SSP370,
        Scenario::Ssp585 => COL_SSP585,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_has_a_distinct_color() {
        let mut seen = Vec::new();
        for scenario in Scenario::ALL {
            let c = scenario_color(scenario);
            assert!(!seen.contains(&(c.0, c.1, c.2)));
            seen.push((c.0, c.1, c.2));
        }
    }
}
