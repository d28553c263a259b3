//! Canvas layout and figure assembly.
//!
//! The panels are hand-placed as fractions of the canvas (origin at the
//! bottom-left, matplotlib style): a top row of zonal profiles, maps and
//! colorbars, then three rows of time-series panels with their side
//! panels. [`render`] carves each rectangle out of the bitmap root and
//! delegates to the panel renderers.

use crate::colormap::DivergingColormap;
use crate::config::FigureConfig;
use crate::data::FigureData;
use crate::panels::colorbar::Extend;
use crate::panels::zonal::ZonalSpec;
use crate::panels::{annotation, colorbar, concentration, flux, legend, map, sink, zonal};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Panel rectangle in canvas fractions, origin bottom-left.
struct PanelRect {
    left: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

const ZONAL_BETA: PanelRect = PanelRect { left: 0.055, bottom: 0.740, width: 0.135, height: 0.125 };
const MAP_BETA: PanelRect = PanelRect { left: 0.205, bottom: 0.740, width: 0.295, height: 0.130 };
const MAP_GAMMA: PanelRect = PanelRect { left: 0.515, bottom: 0.740, width: 0.295, height: 0.130 };
const ZONAL_GAMMA: PanelRect = PanelRect { left: 0.815, bottom: 0.740, width: 0.135, height: 0.125 };
const CBAR_BETA: PanelRect = PanelRect { left: 0.230, bottom: 0.688, width: 0.260, height: 0.042 };
const CBAR_GAMMA: PanelRect = PanelRect { left: 0.540, bottom: 0.688, width: 0.260, height: 0.042 };

// The subplot grid the time-series rows sit on: rows two to four of a
// four-row grid spanning 0.11..0.88 vertically, columns split 2:1 over
// 0.125..0.9
const CONCENTRATION: PanelRect = PanelRect { left: 0.125, bottom: 0.5117, width: 0.5167, height: 0.1674 };
const LEGEND: PanelRect = PanelRect { left: 0.660, bottom: 0.5117, width: 0.2300, height: 0.1674 };
const FLUX: PanelRect = PanelRect { left: 0.125, bottom: 0.3109, width: 0.5167, height: 0.1674 };
const FLUX_2300: PanelRect = PanelRect { left: 0.6417, bottom: 0.3109, width: 0.2583, height: 0.1674 };
const SINK: PanelRect = PanelRect { left: 0.125, bottom: 0.1100, width: 0.5167, height: 0.1674 };
const ANNOTATION: PanelRect = PanelRect { left: 0.6417, bottom: 0.1100, width: 0.2583, height: 0.1674 };

/// Contour levels of the CO2-response colormap.
const BETA_LEVELS: (f64, f64, usize) = (-0.02, 0.02, 16);
/// Contour levels of the warming-response colormap.
const GAMMA_LEVELS: (f64, f64, usize) = (-1.2, 1.2, 16);

const BETA_TICKS: [f64; 5] = [-0.02, -0.01, 0.0, 0.01, 0.02];
const GAMMA_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

fn carve<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rect: &PanelRect,
) -> DrawingArea<DB, Shift> {
    let (w, h) = root.dim_in_pixel();
    let left = (rect.left * w as f64).round() as u32;
    let width = (rect.width * w as f64).round() as u32;
    let top = ((1.0 - rect.bottom - rect.height) * h as f64).round() as u32;
    let height = (rect.height * h as f64).round() as u32;
    root.margin(
        top,
        h.saturating_sub(top + height),
        left,
        w.saturating_sub(left + width),
    )
}

/// Render the full figure and return the written path.
pub fn render(
    data: &FigureData,
    config: &FigureConfig,
    out_path: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let size = (config.canvas.width, config.canvas.height);
    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let beta_cmap = DivergingColormap::with_levels(BETA_LEVELS.0, BETA_LEVELS.1, BETA_LEVELS.2);
    let gamma_cmap = DivergingColormap::with_levels(GAMMA_LEVELS.0, GAMMA_LEVELS.1, GAMMA_LEVELS.2);
    let coastlines = data.coastlines.as_deref();

    zonal::draw(
        &carve(&root, &ZONAL_BETA),
        &data.feedback.beta_land,
        &data.feedback.beta_ocean,
        &ZonalSpec {
            x_range: (-0.02, 0.3),
            x_label: "10^6 kg C / m / ppm",
            y_label: Some("latitude"),
            labels_on_right: false,
            surface_labels: Some([(0.15, -30.0), (0.15, -50.0)]),
        },
    )?;
    map::draw(
        &carve(&root, &MAP_BETA),
        &data.feedback.beta,
        &data.feedback.beta_agreement,
        &beta_cmap,
        coastlines,
        Some("(a, b) Carbon uptake response to CO2"),
    )?;
    map::draw(
        &carve(&root, &MAP_GAMMA),
        &data.feedback.gamma,
        &data.feedback.gamma_agreement,
        &gamma_cmap,
        coastlines,
        Some("(c, d) Carbon uptake response to climate warming"),
    )?;
    zonal::draw(
        &carve(&root, &ZONAL_GAMMA),
        &data.feedback.gamma_land,
        &data.feedback.gamma_ocean,
        &ZonalSpec {
            x_range: (-20.0, 10.0),
            x_label: "10^6 kg C / m / °C",
            y_label: None,
            labels_on_right: true,
            surface_labels: None,
        },
    )?;
    colorbar::draw(
        &carve(&root, &CBAR_BETA),
        &beta_cmap,
        &BETA_TICKS,
        "kg C / m^2 / ppm",
        Extend::Max,
    )?;
    colorbar::draw(
        &carve(&root, &CBAR_GAMMA),
        &gamma_cmap,
        &GAMMA_TICKS,
        "kg C / m^2 / °C",
        Extend::Min,
    )?;

    concentration::draw(&carve(&root, &CONCENTRATION), &data.concentration, config)?;
    legend::draw(&carve(&root, &LEGEND), config)?;
    flux::draw_main(&carve(&root, &FLUX), &data.flux, config)?;
    flux::draw_extended(&carve(&root, &FLUX_2300), &data.flux, config)?;
    sink::draw(
        &carve(&root, &SINK),
        &data.sink,
        &data.flux.member_counts,
        config,
    )?;
    annotation::draw(&carve(&root, &ANNOTATION))?;

    root.present()?;
    info!("figure written to {}", out_path.display());
    Ok(out_path.to_path_buf())
}
