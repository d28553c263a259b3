//! Net land and ocean carbon flux panels.
//!
//! The main panel shows the multi-model mean flux per scenario to 2100
//! with percentile bands for SSP1-2.6 and SSP3-7.0; the companion panel
//! continues the extended scenarios to 2300 with the four-ESM envelope.

use crate::config::FigureConfig;
use crate::data::{FluxData, COUNT_ORDER};
use crate::panels::{
    band_points, dashed_vline, draw_guides, line_points, titled, Chart, RenderResult,
};
use crate::style;
use carbonfig_core::scenario::Scenario;
use plotters::coord::Shift;
use plotters::prelude::*;

const Y_RANGE: (f64, f64) = (-5.0, 15.0);
const MAIN_X_RANGE: (f64, f64) = (1990.0, 2100.0);
const EXTENDED_X_RANGE: (f64, f64) = (2100.0, 2300.0);

/// Scenarios whose percentile band is shaded on the main panel.
const BANDED: [Scenario; 2] = [Scenario::Ssp126, Scenario::Ssp370];

pub fn draw_main<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &FluxData,
    config: &FigureConfig,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let rest = titled(
        area,
        "(f) Net land and ocean carbon fluxes (PgC / yr)",
        style::TITLE_FONT,
    )?;

    let mut chart = ChartBuilder::on(&rest)
        .margin(6)
        .x_label_area_size(44)
        .y_label_area_size(76)
        .build_cartesian_2d(MAIN_X_RANGE.0..MAIN_X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(7)
        .y_labels(10)
        .label_style(style::TICK_FONT)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    draw_flux_grid(&mut chart, MAIN_X_RANGE)?;

    for scenario in BANDED {
        if !config.is_drawn(scenario) {
            continue;
        }
        if let Some(summary) = data.annual.get(&scenario) {
            chart.draw_series(std::iter::once(Polygon::new(
                band_points(&summary.time, &summary.lower, &summary.upper),
                style::scenario_color(scenario)
                    .mix(style::BAND_ALPHA)
                    .filled(),
            )))?;
        }
    }

    for (scenario, summary) in &data.annual {
        if !config.is_drawn(*scenario) {
            continue;
        }
        chart.draw_series(LineSeries::new(
            line_points(&summary.time, &summary.mean),
            ShapeStyle::from(&style::scenario_color(*scenario)).stroke_width(3),
        ))?;
    }

    // Number of models behind each scenario
    for (i, scenario) in COUNT_ORDER.iter().enumerate() {
        let Some(count) = data.member_counts.get(scenario) else {
            continue;
        };
        chart.draw_series(std::iter::once(Text::new(
            format!("{}", count),
            (1995.0 + 3.0 * i as f64, 12.5),
            style::ANNOTATION_FONT
                .into_font()
                .color(&style::scenario_color(*scenario)),
        )))?;
    }

    Ok(())
}

pub fn draw_extended<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &FluxData,
    config: &FigureConfig,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    // Keep the plot box level with the main flux panel
    let rest = titled(area, "", style::TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&rest)
        .margin(6)
        .x_label_area_size(44)
        .y_label_area_size(0)
        .build_cartesian_2d(
            EXTENDED_X_RANGE.0..EXTENDED_X_RANGE.1,
            Y_RANGE.0..Y_RANGE.1,
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(4)
        .y_labels(0)
        .label_style(style::TICK_FONT)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    draw_flux_grid(&mut chart, EXTENDED_X_RANGE)?;
    dashed_vline(
        &mut chart,
        2100.0,
        Y_RANGE,
        0.35,
        ShapeStyle::from(&BLACK).stroke_width(2),
    )?;

    if config.is_drawn(Scenario::Ssp126) {
        if let Some(summary) = data.extended.get(&Scenario::Ssp126) {
            chart.draw_series(std::iter::once(Polygon::new(
                band_points(&summary.time, &summary.lower, &summary.upper),
                style::scenario_color(Scenario::Ssp126)
                    .mix(style::BAND_ALPHA)
                    .filled(),
            )))?;
        }
    }

    for (scenario, summary) in &data.extended {
        if !config.is_drawn(*scenario) {
            continue;
        }
        chart.draw_series(LineSeries::new(
            line_points(&summary.time, &summary.mean),
            ShapeStyle::from(&style::scenario_color(*scenario)).stroke_width(3),
        ))?;
    }

    chart.draw_series(std::iter::once(Text::new(
        "simulations extended to 2300 for:",
        (2120.0, 12.5),
        style::LABEL_FONT.into_font().color(&BLACK),
    )))?;
    let mut y = 10.5;
    for scenario in [Scenario::Ssp585, Scenario::Ssp534Over, Scenario::Ssp126] {
        let members = data
            .extended
            .get(&scenario)
            .map(|_| crate::files::ESM_MODELS.len())
            .unwrap_or(0);
        chart.draw_series(std::iter::once(Text::new(
            format!("{} [{}]", scenario.label(), members),
            (2240.0, y),
            style::ANNOTATION_FONT
                .into_font()
                .color(&style::scenario_color(scenario)),
        )))?;
        y -= 1.5;
    }

    Ok(())
}

/// Horizontal guides every 2 PgC/yr with an emphasised zero line.
fn draw_flux_grid<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    x_range: (f64, f64),
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    draw_guides(
        chart,
        (-2..8).map(|k| 2.0 * k as f64),
        x_range,
        RGBColor(0x80, 0x80, 0x80).mix(style::GUIDE_ALPHA).into(),
    )?;
    draw_guides(
        chart,
        std::iter::once(0.0),
        x_range,
        BLACK.mix(style::ZERO_LINE_ALPHA).into(),
    )
}
