//! Panel renderers.
//!
//! Each submodule draws one panel of the figure into a `DrawingArea`
//! carved out by the layout in [`crate::figure`]. The helpers here cover
//! the pieces every time-series panel shares: percentile-band polygons,
//! horizontal guide lines and the left-aligned panel titles.

pub mod annotation;
pub mod colorbar;
pub mod concentration;
pub mod flux;
pub mod legend;
pub mod map;
pub mod sink;
pub mod zonal;

use carbonfig_core::timeseries::FloatValue;
use ndarray::Array1;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

pub type RenderResult = Result<(), Box<dyn Error>>;

/// A 2-D chart in data coordinates on some drawing area.
pub(crate) type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Closed polygon tracing the upper envelope and the reversed lower
/// envelope, skipping non-finite points.
pub(crate) fn band_points(
    time: &Array1<FloatValue>,
    lower: &Array1<FloatValue>,
    upper: &Array1<FloatValue>,
) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(2 * time.len());
    for (&t, &v) in time.iter().zip(upper.iter()) {
        if t.is_finite() && v.is_finite() {
            points.push((t, v));
        }
    }
    let mut floor = line_points(time, lower);
    floor.reverse();
    points.extend(floor);
    points
}

/// Line points with non-finite values dropped.
pub(crate) fn line_points(
    time: &Array1<FloatValue>,
    values: &Array1<FloatValue>,
) -> Vec<(f64, f64)> {
    time.iter()
        .zip(values.iter())
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .map(|(&t, &v)| (t, v))
        .collect()
}

/// Horizontal guide lines across the x-range of a chart.
pub(crate) fn draw_guides<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    heights: impl IntoIterator<Item = f64>,
    x_range: (f64, f64),
    style: ShapeStyle,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    for y in heights {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x_range.0, y), (x_range.1, y)],
            style,
        )))?;
    }
    Ok(())
}

/// Draw a left-aligned title strip and return the remaining area.
pub(crate) fn titled<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    font: (&'static str, u32),
) -> Result<DrawingArea<DB, Shift>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let strip_height = font.1 as i32 + 8;
    let (strip, rest) = area.split_vertically(strip_height);
    strip.draw(&Text::new(
        text.to_string(),
        (0, 4),
        font.into_font().color(&BLACK),
    ))?;
    Ok(rest)
}

/// Hand-dashed vertical line (the backends have no native dash pattern
/// at this stroke width).
pub(crate) fn dashed_vline<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    x: f64,
    y_range: (f64, f64),
    dash: f64,
    style: ShapeStyle,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let mut y = y_range.0;
    while y < y_range.1 {
        let top = (y + dash).min(y_range.1);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, y), (x, top)],
            style,
        )))?;
        y += 2.0 * dash;
    }
    Ok(())
}
