//! Figure configuration.
//!
//! Everything here has a sensible default; a TOML file can override the
//! canvas size, the percentile band bounds, the smoothing window applied
//! to the 2300 flux band and which scenario lines are drawn.
//!
//! ```toml
//! [canvas]
//! width = 2000
//! height = 3000
//!
//! [bands]
//! lower = 5.0
//! upper = 95.0
//!
//! [smoothing]
//! window = 5
//!
//! [scenarios]
//! ssp534 = false
//! ```

use crate::errors::{FigureError, FigureResult};
use carbonfig_core::scenario::Scenario;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureConfig {
    pub canvas: CanvasConfig,
    pub bands: BandConfig,
    pub smoothing: SmoothingConfig,
    /// Per-scenario visibility switches, keyed by scenario key
    /// (`hist`, `ssp119`, ...). Scenarios not listed are drawn.
    pub scenarios: IndexMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfig {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothingConfig {
    pub window: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 3000,
        }
    }
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            lower: 5.0,
            upper: 95.0,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { window: 5 }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            bands: BandConfig::default(),
            smoothing: SmoothingConfig::default(),
            scenarios: IndexMap::new(),
        }
    }
}

impl FigureConfig {
    /// Read a configuration file, falling back to defaults for anything
    /// left unspecified.
    pub fn load(path: &Path) -> FigureResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FigureConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FigureResult<()> {
        for key in self.scenarios.keys() {
            if Scenario::from_key(key).is_none() {
                return Err(FigureError::Config(format!(
                    "unknown scenario key {:?}",
                    key
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.bands.lower)
            || !(0.0..=100.0).contains(&self.bands.upper)
            || self.bands.lower >= self.bands.upper
        {
            return Err(FigureError::Config(format!(
                "band bounds must satisfy 0 <= lower < upper <= 100, got [{}, {}]",
                self.bands.lower, self.bands.upper
            )));
        }
        if self.smoothing.window == 0 || self.smoothing.window % 2 == 0 {
            return Err(FigureError::Config(format!(
                "smoothing window must be odd and positive, got {}",
                self.smoothing.window
            )));
        }
        if self.canvas.width < 400 || self.canvas.height < 600 {
            return Err(FigureError::Config(format!(
                "canvas {}x{} is too small to place the panels",
                self.canvas.width, self.canvas.height
            )));
        }
        Ok(())
    }

    /// Whether a scenario's line should be drawn.
    pub fn is_drawn(&self, scenario: Scenario) -> bool {
        self.scenarios
            .get(scenario.key())
            .copied()
            .unwrap_or(true)
    }
}
