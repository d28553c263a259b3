//! Zonal-mean side panels.
//!
//! Land and ocean zonal-mean sensitivity curves against latitude, each
//! with a ±1 ensemble-standard-deviation band, flanking the global maps.

use crate::data::ZonalBand;
use crate::panels::RenderResult;
use crate::style;
use carbonfig_core::grid::ZonalProfile;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Which side of the map row the panel sits on; the right panel moves its
/// latitude labels to the outer edge.
#[derive(Debug, Clone)]
pub struct ZonalSpec {
    pub x_range: (f64, f64),
    pub x_label: &'static str,
    pub y_label: Option<&'static str>,
    pub labels_on_right: bool,
    /// Label the land/ocean curves inside the panel at these x/lat spots.
    pub surface_labels: Option<[(f64, f64); 2]>,
}

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    land: &ZonalBand,
    ocean: &ZonalBand,
    spec: &ZonalSpec,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let (x0, x1) = spec.x_range;

    let mut builder = ChartBuilder::on(area);
    builder.margin(6).x_label_area_size(46);
    if spec.labels_on_right {
        builder
            .y_label_area_size(0)
            .right_y_label_area_size(52);
    } else {
        builder.y_label_area_size(52);
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, -95.0..95.0)?
        .set_secondary_coord(x0..x1, -95.0..95.0);

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_labels(4)
        .y_labels(7)
        .label_style(style::TICK_FONT)
        .axis_desc_style(style::LABEL_FONT)
        .x_desc(spec.x_label)
        .x_label_formatter(&|v| format!("{}", v));
    if let Some(y_label) = spec.y_label {
        mesh.y_desc(y_label);
    }
    if spec.labels_on_right {
        mesh.y_labels(0);
    }
    mesh.draw()?;
    if spec.labels_on_right {
        chart.configure_secondary_axes().draw()?;
    }

    // Latitude guides every 25 degrees
    for lat in (-75..100).step_by(25) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x0, lat as f64), (x1, lat as f64)],
            RGBColor(0x80, 0x80, 0x80).mix(style::GUIDE_ALPHA),
        )))?;
    }

    for (band, color) in [(land, style::COL_LAND), (ocean, style::COL_OCEAN)] {
        chart.draw_series(std::iter::once(Polygon::new(
            envelope(band),
            color.mix(style::ZONAL_BAND_ALPHA).filled(),
        )))?;
        chart.draw_series(LineSeries::new(
            curve(&band.mean),
            ShapeStyle::from(&color).stroke_width(3),
        ))?;
    }

    if let Some([(land_x, land_lat), (ocean_x, ocean_lat)]) = spec.surface_labels {
        chart.draw_series(std::iter::once(Text::new(
            "Land",
            (land_x, land_lat),
            style::LABEL_FONT.into_font().color(&style::COL_LAND),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            "Ocean",
            (ocean_x, ocean_lat),
            style::LABEL_FONT.into_font().color(&style::COL_OCEAN),
        )))?;
    }

    Ok(())
}

/// Mean ± std polygon in (value, latitude) coordinates.
fn envelope(band: &ZonalBand) -> Vec<(f64, f64)> {
    let (Ok(upper), Ok(lower)) = (
        band.mean.offset(&band.std, 1.0),
        band.mean.offset(&band.std, -1.0),
    ) else {
        return Vec::new();
    };

    let mut points = curve(&upper);
    let mut floor = curve(&lower);
    floor.reverse();
    points.extend(floor);
    points
}

fn curve(profile: &ZonalProfile) -> Vec<(f64, f64)> {
    profile
        .values()
        .iter()
        .zip(profile.lat().iter())
        .filter(|(v, _)| v.is_finite())
        .map(|(&v, &l)| (v, l))
        .collect()
}
