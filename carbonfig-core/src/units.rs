//! Unit conversions applied during ingestion.

use crate::timeseries::FloatValue;

/// Kilograms of carbon per gigatonne of carbon.
pub const KG_PER_GTC: FloatValue = 1.0e12;

/// Convert a flux in kg C yr⁻¹ to GtC yr⁻¹.
///
/// The historical land-use emissions record is distributed in kg C yr⁻¹;
/// everything else in the figure is in GtC yr⁻¹.
pub fn kg_to_gtc(value: FloatValue) -> FloatValue {
    value / KG_PER_GTC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kg_to_gtc_scales_down() {
        assert_eq!(kg_to_gtc(1.5e12), 1.5);
        assert_eq!(kg_to_gtc(0.0), 0.0);
    }
}
