//! Horizontal colorbars under the sensitivity maps.

use crate::colormap::DivergingColormap;
use crate::panels::RenderResult;
use crate::style;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Which end of the bar gets an out-of-range arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extend {
    Min,
    Max,
}

pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cmap: &DivergingColormap,
    ticks: &[f64],
    label: &str,
    extend: Extend,
) -> RenderResult
where
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    let bar_height = h / 4;
    let arrow = bar_height * 2;

    let levels = cmap.levels();
    let (lo, hi) = (levels[0], levels[levels.len() - 1]);
    let x_of = |value: f64| -> i32 {
        let frac = (value - lo) / (hi - lo);
        arrow + (frac * (w - 2 * arrow) as f64).round() as i32
    };

    for bin in 0..cmap.n_bins() {
        let x0 = x_of(levels[bin]);
        let x1 = x_of(levels[bin + 1]);
        area.draw(&Rectangle::new(
            [(x0, 0), (x1, bar_height)],
            cmap.bin_color(bin).filled(),
        ))?;
    }

    // Clamped end rendered as an arrow head
    let mid = bar_height / 2;
    match extend {
        Extend::Max => {
            area.draw(&Polygon::new(
                vec![(w - arrow, 0), (w - arrow, bar_height), (w - 1, mid)],
                cmap.bin_color(cmap.n_bins() - 1).filled(),
            ))?;
        }
        Extend::Min => {
            area.draw(&Polygon::new(
                vec![(arrow, 0), (arrow, bar_height), (0, mid)],
                cmap.bin_color(0).filled(),
            ))?;
        }
    }

    let tick_style = style::TICK_FONT
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for &tick in ticks {
        area.draw(&Text::new(
            trim_number(tick),
            (x_of(tick), bar_height + 4),
            tick_style.clone(),
        ))?;
    }

    area.draw(&Text::new(
        label.to_string(),
        (w / 2, bar_height + style::TICK_FONT.1 as i32 + 10),
        style::LABEL_FONT
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    Ok(())
}

/// Compact tick formatting: no trailing zeros, no `-0`.
fn trim_number(value: f64) -> String {
    let mut text = format!("{}", value);
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(trim_number(-0.02), "-0.02");
        assert_eq!(trim_number(0.0), "0");
        assert_eq!(trim_number(-0.5), "-0.5");
        assert_eq!(trim_number(1.0), "1");
    }
}
