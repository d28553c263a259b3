//! Caption block next to the sink fraction panel.
//!
//! A downward arrow and a short explanation of why the sink fraction
//! declines even as the absolute carbon stores grow.

use crate::panels::RenderResult;
use crate::style;
use plotters::coord::Shift;
use plotters::prelude::*;

const MESSAGE: [&str; 5] = [
    "At higher CO2 concentrations,",
    "land and ocean carbon stores",
    "take-up a reduced fraction",
    "of our emissions,",
    "despite growing larger",
];

pub fn draw<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    // Panel-fraction coordinates on a 0..10 scale, origin bottom-left
    let px = |x: f64| -> i32 { (w as f64 * x / 10.0).round() as i32 };
    let py = |y: f64| -> i32 { (h as f64 * (1.0 - y / 10.0)).round() as i32 };

    let gray = RGBColor(0x80, 0x80, 0x80);
    let shaft_x = px(1.0);
    let head_half_width = px(0.4) - px(0.0);

    area.draw(&PathElement::new(
        vec![(shaft_x, py(9.0)), (shaft_x, py(3.4))],
        ShapeStyle::from(&gray).stroke_width(4),
    ))?;
    area.draw(&Polygon::new(
        vec![
            (shaft_x - head_half_width, py(3.4)),
            (shaft_x + head_half_width, py(3.4)),
            (shaft_x, py(3.0)),
        ],
        gray.filled(),
    ))?;

    let mut y = 7.8;
    for line in MESSAGE {
        area.draw(&Text::new(
            line,
            (px(2.0), py(y)),
            style::ANNOTATION_FONT.into_font().color(&BLACK),
        ))?;
        y -= 0.8;
    }

    Ok(())
}
