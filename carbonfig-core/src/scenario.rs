//! Scenario identifiers.
//!
//! The figure spans the historical record and six Shared Socioeconomic
//! Pathway (SSP) scenarios. The canonical ordering below is the plotting
//! order: legends, annotations and per-scenario model counts all follow it.

use serde::{Deserialize, Serialize};

/// One line on the time-series panels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Scenario {
    Historical,
    Ssp119,
    Ssp126,
    Ssp245,
    Ssp534Over,
    Ssp370,
    Ssp585,
}

impl Scenario {
    /// Every scenario, historical first, in plotting order.
    pub const ALL: [Scenario; 7] = [
        Scenario::Historical,
        Scenario::Ssp119,
        Scenario::Ssp126,
        Scenario::Ssp245,
        Scenario::Ssp534Over,
        Scenario::Ssp370,
        Scenario::Ssp585,
    ];

    /// The future scenarios with flux ensembles (everything but the
    /// historical record, which is folded into each scenario's files).
    pub const FUTURE: [Scenario; 6] = [
        Scenario::Ssp119,
        Scenario::Ssp126,
        Scenario::Ssp245,
        Scenario::Ssp534Over,
        Scenario::Ssp370,
        Scenario::Ssp585,
    ];

    /// Scenarios with simulations extended to 2300.
    pub const EXTENDED: [Scenario; 3] = [Scenario::Ssp126, Scenario::Ssp534Over, Scenario::Ssp585];

    /// Human-readable label used in legends and annotations.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Historical => "Historical",
            Scenario::Ssp119 => "SSP1-1.9",
            Scenario::Ssp126 => "SSP1-2.6",
            Scenario::Ssp245 => "SSP2-4.5",
            Scenario::Ssp534Over => "SSP5-3.4OS",
            Scenario::Ssp370 => "SSP3-7.0",
            Scenario::Ssp585 => "SSP5-8.5",
        }
    }

    /// Short key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Scenario::Historical => "hist",
            Scenario::Ssp119 => "ssp119",
            Scenario::Ssp126 => "ssp126",
            Scenario::Ssp245 => "ssp245",
            Scenario::Ssp534Over => "ssp534",
            Scenario::Ssp370 => "ssp370",
            Scenario::Ssp585 => "ssp585",
        }
    }

    /// Token embedded in the flux and emissions file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Scenario::Historical => "Historical",
            Scenario::Ssp119 => "HistoricalSsp119",
            Scenario::Ssp126 => "HistoricalSsp126",
            Scenario::Ssp245 => "HistoricalSsp245",
            Scenario::Ssp534Over => "HistoricalSsp534os",
            Scenario::Ssp370 => "HistoricalSsp370",
            Scenario::Ssp585 => "HistoricalSsp585",
        }
    }

    /// Look a scenario up by its configuration key.
    pub fn from_key(key: &str) -> Option<Scenario> {
        Scenario::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_stable() {
        assert_eq!(Scenario::ALL[0], Scenario::Historical);
        assert_eq!(Scenario::ALL[6], Scenario::Ssp585);
        assert_eq!(Scenario::FUTURE.len(), 6);
        assert!(!Scenario::FUTURE.contains(&Scenario::Historical));
    }

    #[test]
    fn keys_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_key(scenario.key()), Some(scenario));
        }
        assert_eq!(Scenario::from_key("ssp999"), None);
    }

    #[test]
    fn labels_and_tags() {
        assert_eq!(Scenario::Ssp534Over.label(), "SSP5-3.4OS");
        assert_eq!(Scenario::Ssp534Over.file_tag(), "HistoricalSsp534os");
        assert_eq!(format!("{}", Scenario::Ssp370), "SSP3-7.0");
    }
}
