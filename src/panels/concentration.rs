//! Atmospheric CO2 concentration panel.
//!
//! Concentration-driven scenario lines over the emissions-driven
//! envelopes: the multi-model spread of the emissions-driven runs and the
//! MAGICC percentile bands per scenario.

use crate::config::FigureConfig;
use crate::data::ConcentrationData;
use crate::files::EMISSIONS_DRIVEN_COUNT;
use crate::panels::{band_points, draw_guides, line_points, titled, RenderResult};
use crate::style;
use carbonfig_core::scenario::Scenario;
use plotters::coord::Shift;
use plotters::prelude::*;

const X_RANGE: (f64, f64) = (1990.0, 2100.0);
const Y_RANGE: (f64, f64) = (300.0, 1200.0);

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &ConcentrationData,
    config: &FigureConfig,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let rest = titled(area, "(e) CO2 concentration (ppm)", style::TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&rest)
        .margin(6)
        .x_label_area_size(44)
        .y_label_area_size(76)
        .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(7)
        .y_labels(10)
        .label_style(style::TICK_FONT)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    draw_guides(
        &mut chart,
        (300..1200).step_by(100).map(|y| y as f64),
        X_RANGE,
        RGBColor(0x80, 0x80, 0x80).mix(style::GUIDE_ALPHA).into(),
    )?;

    // Emissions-driven multi-model spread
    let edriven = &data.emissions_driven;
    chart.draw_series(std::iter::once(Polygon::new(
        band_points(&edriven.time, &edriven.lower, &edriven.upper),
        style::COL_SSP585.mix(style::BAND_ALPHA).filled(),
    )))?;

    // MAGICC percentile bands per scenario
    for (scenario, summary) in &data.magicc {
        if !config.is_drawn(*scenario) {
            continue;
        }
        chart.draw_series(std::iter::once(Polygon::new(
            band_points(&summary.time, &summary.lower, &summary.upper),
            style::scenario_color(*scenario)
                .mix(style::BAND_ALPHA)
                .filled(),
        )))?;
    }

    // Concentration-driven lines, historical first
    for (scenario, series) in &data.driven {
        if !config.is_drawn(*scenario) {
            continue;
        }
        chart.draw_series(LineSeries::new(
            line_points(series.time(), series.values()),
            ShapeStyle::from(&style::scenario_color(*scenario)).stroke_width(3),
        ))?;
    }

    // Member count of the emissions-driven ensemble
    chart.draw_series(std::iter::once(Text::new(
        format!("{}", EMISSIONS_DRIVEN_COUNT),
        (1995.0, 1110.0),
        style::ANNOTATION_FONT
            .into_font()
            .color(&style::scenario_color(Scenario::Ssp585)),
    )))?;

    Ok(())
}
