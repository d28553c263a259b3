//! Global sensitivity maps.
//!
//! Filled lat-lon rasters in Robinson projection: one coloured cell per
//! grid box, diagonal hatching where fewer than 80% of models agree on
//! the sign of the response, an optional coastline overlay and the
//! projection boundary.

use crate::colormap::DivergingColormap;
use crate::panels::RenderResult;
use crate::projection::{self, X_LIMIT, Y_LIMIT};
use crate::style;
use carbonfig_core::grid::GriddedField;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Sign-agreement fraction below which a cell is hatched.
const AGREEMENT_THRESHOLD: f64 = 0.8;

const CENTRAL_LONGITUDE: f64 = 0.0;

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    field: &GriddedField,
    agreement: &GriddedField,
    cmap: &DivergingColormap,
    coastlines: Option<&[Vec<(f64, f64)>]>,
    title: Option<&str>,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let area = match title {
        Some(text) => {
            let strip_height = style::SMALL_TITLE_FONT.1 as i32 + 8;
            let (strip, rest) = area.split_vertically(strip_height);
            let (w, _) = strip.dim_in_pixel();
            strip.draw(&Text::new(
                text.to_string(),
                (w as i32 / 2, 4),
                style::SMALL_TITLE_FONT
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Top)),
            ))?;
            rest
        }
        None => area.clone(),
    };

    let frame = MapFrame::fit(&area);

    for i in 0..field.nlat() {
        for j in 0..field.nlon() {
            let value = field.value_at(i, j);
            if !value.is_finite() {
                continue;
            }
            let bounds = field.cell_bounds(i, j);
            let color = cmap.color_for(value);
            for quad in frame.cell_quads(&bounds) {
                area.draw(&Polygon::new(quad, color.filled()))?;
            }
        }
    }

    // Hatch cells where the ensemble disagrees on the sign
    for i in 0..agreement.nlat() {
        for j in 0..agreement.nlon() {
            let fraction = agreement.value_at(i, j);
            if !fraction.is_finite() || fraction >= AGREEMENT_THRESHOLD {
                continue;
            }
            let bounds = agreement.cell_bounds(i, j);
            for quad in frame.cell_quads(&bounds) {
                // One diagonal stroke per cell reads as hatching at
                // global resolution
                area.draw(&PathElement::new(
                    vec![quad[0], quad[2]],
                    RGBColor(0x50, 0x50, 0x50).mix(0.6),
                ))?;
            }
        }
    }

    if let Some(segments) = coastlines {
        for segment in segments {
            for piece in frame.polyline(segment) {
                area.draw(&PathElement::new(piece, BLACK.mix(0.8)))?;
            }
        }
    }

    area.draw(&PathElement::new(frame.boundary(), &BLACK))?;
    Ok(())
}

/// Mapping from projected plane coordinates to panel pixels.
struct MapFrame {
    scale: f64,
    cx: f64,
    cy: f64,
}

impl MapFrame {
    fn fit<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> MapFrame {
        let (w, h) = area.dim_in_pixel();
        let scale = f64::min(w as f64 / (2.0 * X_LIMIT), h as f64 / (2.0 * Y_LIMIT));
        MapFrame {
            scale,
            cx: w as f64 / 2.0,
            cy: h as f64 / 2.0,
        }
    }

    fn to_pixel(&self, lat: f64, lon: f64) -> (i32, i32) {
        let (x, y) = projection::project(lat, lon, CENTRAL_LONGITUDE);
        (
            (self.cx + x * self.scale).round() as i32,
            (self.cy - y * self.scale).round() as i32,
        )
    }

    /// Pixel quads for one grid cell; cells straddling the dateline are
    /// split into a western and an eastern part.
    fn cell_quads(&self, bounds: &carbonfig_core::grid::CellBounds) -> Vec<[(i32, i32); 4]> {
        let west = projection::wrap_longitude(bounds.lon_west - CENTRAL_LONGITUDE);
        let east_span = (bounds.lon_east - bounds.lon_west).abs();
        let east = west + east_span;

        let mut spans = Vec::with_capacity(2);
        if east > 180.0 {
            spans.push((west, 180.0));
            spans.push((-180.0, east - 360.0));
        } else {
            spans.push((west, east));
        }

        spans
            .into_iter()
            .map(|(w, e)| {
                [
                    self.to_pixel(bounds.lat_south, w + CENTRAL_LONGITUDE),
                    self.to_pixel(bounds.lat_south, e + CENTRAL_LONGITUDE),
                    self.to_pixel(bounds.lat_north, e + CENTRAL_LONGITUDE),
                    self.to_pixel(bounds.lat_north, w + CENTRAL_LONGITUDE),
                ]
            })
            .collect()
    }

    /// Project a (lon, lat) polyline, breaking it where it crosses the
    /// dateline so no stroke sweeps across the whole map.
    fn polyline(&self, points: &[(f64, f64)]) -> Vec<Vec<(i32, i32)>> {
        let mut pieces = Vec::new();
        let mut current: Vec<(i32, i32)> = Vec::new();
        let mut last_delta: Option<f64> = None;

        for &(lon, lat) in points {
            let delta = projection::wrap_longitude(lon - CENTRAL_LONGITUDE);
            if let Some(prev) = last_delta {
                if (delta - prev).abs() > 180.0 {
                    if current.len() > 1 {
                        pieces.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
            }
            current.push(self.to_pixel(lat, lon));
            last_delta = Some(delta);
        }
        if current.len() > 1 {
            pieces.push(current);
        }
        pieces
    }

    /// Outline of the projected globe.
    fn boundary(&self) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for step in 0..=90 {
            let lat = -90.0 + 2.0 * step as f64;
            points.push(self.to_pixel(lat, CENTRAL_LONGITUDE + 179.999));
        }
        for step in 0..=90 {
            let lat = 90.0 - 2.0 * step as f64;
            points.push(self.to_pixel(lat, CENTRAL_LONGITUDE - 179.999));
        }
        points.push(points[0]);
        points
    }
}
