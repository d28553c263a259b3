//! Sink fraction panel.
//!
//! The fraction of cumulative anthropogenic emissions taken up by the
//! combined land and ocean sinks, per scenario, with percentile bands for
//! SSP1-2.6 and SSP3-7.0.

use crate::config::FigureConfig;
use crate::data::{SinkFractionData, COUNT_ORDER};
use crate::panels::{band_points, draw_guides, line_points, titled, RenderResult};
use crate::style;
use carbonfig_core::scenario::Scenario;
use indexmap::IndexMap;
use plotters::coord::Shift;
use plotters::prelude::*;

const X_RANGE: (f64, f64) = (1990.0, 2100.0);
const Y_RANGE: (f64, f64) = (0.25, 0.75);

const BANDED: [Scenario; 2] = [Scenario::Ssp126, Scenario::Ssp370];

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &SinkFractionData,
    member_counts: &IndexMap<Scenario, usize>,
    config: &FigureConfig,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let rest = titled(area, "(g) Sink fraction", style::TITLE_FONT)?;

    let mut chart = ChartBuilder::on(&rest)
        .margin(6)
        .x_label_area_size(72)
        .y_label_area_size(76)
        .build_cartesian_2d(X_RANGE.0..X_RANGE.1, Y_RANGE.0..Y_RANGE.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(7)
        .y_labels(6)
        .label_style(style::TICK_FONT)
        .axis_desc_style(style::TITLE_FONT)
        .x_desc("Year")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    draw_guides(
        &mut chart,
        (0..10).map(|k| 0.1 * k as f64),
        X_RANGE,
        RGBColor(0x80, 0x80, 0x80).mix(style::GUIDE_ALPHA).into(),
    )?;

    for scenario in BANDED {
        if !config.is_drawn(scenario) {
            continue;
        }
        if let Some(summary) = data.fraction.get(&scenario) {
            chart.draw_series(std::iter::once(Polygon::new(
                band_points(&summary.time, &summary.lower, &summary.upper),
                style::scenario_color(scenario)
                    .mix(style::BAND_ALPHA)
                    .filled(),
            )))?;
        }
    }

    for (scenario, summary) in &data.fraction {
        if !config.is_drawn(*scenario) {
            continue;
        }
        chart.draw_series(LineSeries::new(
            line_points(&summary.time, &summary.mean),
            ShapeStyle::from(&style::scenario_color(*scenario)).stroke_width(3),
        ))?;
    }

    for (i, scenario) in COUNT_ORDER.iter().enumerate() {
        let Some(count) = member_counts.get(scenario) else {
            continue;
        };
        chart.draw_series(std::iter::once(Text::new(
            format!("{}", count),
            (1995.0 + 3.0 * i as f64, 0.31),
            style::ANNOTATION_FONT
                .into_font()
                .color(&style::scenario_color(*scenario)),
        )))?;
    }

    Ok(())
}
