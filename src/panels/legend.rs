//! Scenario legend beside the concentration panel.

use crate::config::FigureConfig;
use crate::data::LINE_ORDER;
use crate::panels::RenderResult;
use crate::style;
use plotters::coord::Shift;
use plotters::prelude::*;

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &FigureConfig,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let row_height = style::LABEL_FONT.1 as i32 + 14;
    let swatch_width = 54;
    let x_text = swatch_width + 14;
    let mut y = 8;

    for scenario in LINE_ORDER {
        if !config.is_drawn(scenario) {
            continue;
        }
        let mid = y + row_height / 2;
        let color = style::scenario_color(scenario);
        area.draw(&PathElement::new(
            vec![(8, mid), (8 + swatch_width, mid)],
            ShapeStyle::from(&color).stroke_width(4),
        ))?;
        area.draw(&Text::new(
            scenario.label(),
            (x_text, mid - style::LABEL_FONT.1 as i32 / 2),
            style::LABEL_FONT.into_font().color(&BLACK),
        ))?;
        y += row_height;
    }

    // Shaded swatch for the emissions-driven spread
    let mid = y + row_height / 2;
    area.draw(&Rectangle::new(
        [(8, mid - 8), (8 + swatch_width, mid + 8)],
        style::COL_SSP585.mix(style::BAND_ALPHA).filled(),
    ))?;
    area.draw(&Text::new(
        "emiss-driven",
        (x_text, mid - style::LABEL_FONT.1 as i32 / 2),
        style::LABEL_FONT.into_font().color(&BLACK),
    ))?;

    Ok(())
}
