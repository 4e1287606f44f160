use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use plotters::chart::LabelAreaPosition;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::{
    dataset::AccessesDataset,
    layout::{compute_layout, ChartLayout, LegendEntry, Swatch},
};
use crate::{config::ChartConfig, error::Result};

const FONT: &str = "sans-serif";

/// Draw the chart into an SVG document. Layers go bottom to top: bands,
/// bars, value labels, legend.
pub fn render_svg(layout: &ChartLayout, config: &ChartConfig) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, (FONT, config.font_size * 1.3).into_font())
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

        // category names go on the slot centers, drawn below
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(config.x_desc.as_str())
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|_| String::new())
            .set_tick_mark_size(LabelAreaPosition::Left, 0)
            .label_style((FONT, config.font_size).into_font())
            .axis_desc_style((FONT, config.font_size).into_font())
            .draw()?;

        let (x0, x1) = (layout.x_range.start, layout.x_range.end);
        chart.draw_series(layout.bands.iter().map(|b| {
            Rectangle::new(
                [(x0, b.y0), (x1, b.y1)],
                b.color.rgb().mix(config.band_opacity).filled(),
            )
        }))?;

        chart.draw_series(layout.bars.iter().map(|b| {
            Rectangle::new([(0., b.y0), (b.value as f64, b.y1)], b.color.rgb().filled())
        }))?;

        chart.draw_series(layout.bars.iter().map(|b| {
            Text::new(
                b.label.text.clone(),
                (b.label.x, b.label.y),
                (FONT, config.font_size)
                    .into_font()
                    .color(b.color.rgb())
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            )
        }))?;

        let area = chart.plotting_area();
        let tick_style = (FONT, config.font_size)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for slot in layout.slots.iter() {
            let (x, y) = area.map_coordinate(&(x0, slot.y));
            root.draw(&PathElement::new(vec![(x - 5, y), (x, y)], BLACK))?;
            root.draw(&Text::new(
                slot.name.as_str(),
                (x - 8, y),
                tick_style.clone(),
            ))?;
        }

        draw_legend(&root, area.get_pixel_range(), &layout.legend, config)?;
        root.present()?;
    }
    Ok(svg)
}

/// Framed single-column legend whose upper-center point sits at
/// `config.legend_anchor` inside the plotting area.
fn draw_legend(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    (xs, ys): (Range<i32>, Range<i32>),
    entries: &[LegendEntry],
    config: &ChartConfig,
) -> Result<()> {
    let entry_style = (FONT, config.legend_font_size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let title_style = (FONT, config.legend_font_size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let pad = 8;
    let swatch_w = 24;
    let row = (config.legend_font_size * 1.6).round() as i32;
    let mut text_w = root.estimate_text_size("Legend", &title_style)?.0;
    for e in entries.iter() {
        text_w = text_w.max(root.estimate_text_size(&e.label, &entry_style)?.0);
    }
    let width = pad * 3 + swatch_w + text_w as i32;
    let height = pad * 2 + row * (entries.len() as i32 + 1);

    let (ax, ay) = config.legend_anchor;
    let center = xs.start + (ax * (xs.end - xs.start) as f64).round() as i32;
    let top = ys.end - (ay * (ys.end - ys.start) as f64).round() as i32;
    let left = center - width / 2;
    let frame = [(left, top), (left + width, top + height)];
    root.draw(&Rectangle::new(frame, WHITE.mix(0.8).filled()))?;
    root.draw(&Rectangle::new(frame, BLACK.mix(0.3)))?;
    root.draw(&Text::new(
        "Legend",
        (center, top + pad + row / 2),
        title_style,
    ))?;

    for (i, e) in entries.iter().enumerate() {
        let x = left + pad;
        let y = top + pad + row * (i as i32 + 1) + row / 2;
        match e.swatch {
            Swatch::Line => root.draw(&Rectangle::new(
                [(x, y - 3), (x + swatch_w, y + 3)],
                e.color.rgb().filled(),
            ))?,
            Swatch::Patch => root.draw(&Rectangle::new(
                [(x, y - row / 2 + 2), (x + swatch_w, y + row / 2 - 2)],
                e.color.rgb().mix(config.legend_swatch_opacity).filled(),
            ))?,
        }
        root.draw(&Text::new(
            e.label.as_str(),
            (x + swatch_w + pad, y),
            entry_style.clone(),
        ))?;
    }
    Ok(())
}

/// Write a rendered document. The parent directory must already exist.
pub fn save_svg(svg: &str, path: &Path) -> Result<()> {
    std::fs::write(path, svg)?;
    Ok(())
}

pub fn render(data: &AccessesDataset, config: &ChartConfig) -> Result<PathBuf> {
    let layout = compute_layout(data, config)?;
    let svg = render_svg(&layout, config)?;
    save_svg(&svg, &config.output)?;
    info!(
        "{} bars over {} bands written to {}",
        layout.bars.len(),
        layout.bands.len(),
        config.output.display()
    );
    Ok(config.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_has_title_and_axis() {
        let config = ChartConfig::default();
        let layout = compute_layout(&AccessesDataset::fuse_accesses(), &config).unwrap();
        let svg = render_svg(&layout, &config).unwrap();
        assert!(svg.contains("<svg") && svg.contains("</svg>"));
        assert!(svg.contains("Number of FUSE Operations per Dataset"));
        assert!(svg.contains("Number of Operations"));
        assert!(svg.contains("Legend"));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("graph.svg");
        let err = save_svg("<svg/>", &path).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
        assert!(!path.exists());
    }
}
