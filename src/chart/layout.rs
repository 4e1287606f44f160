use std::ops::Range;

use tracing::warn;

use super::dataset::{AccessesDataset, ColorTag};
use crate::{config::ChartConfig, error::Result};

/// Everything the renderer draws, in data coordinates: x is the operation
/// count, y is the category slot (slot `i` is centered on `i as f64`).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub slots: Vec<Slot>,
    pub bands: Vec<BandRect>,
    pub bars: Vec<BarRect>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub name: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandRect {
    pub start: usize,
    pub end: usize,
    pub y0: f64,
    pub y1: f64,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    pub value: u64,
    pub y0: f64,
    pub y1: f64,
    pub color: ColorTag,
    pub label: ValueLabel,
}

impl BarRect {
    pub fn center(&self) -> f64 {
        (self.y0 + self.y1) / 2.
    }
}

/// Exact count printed just past the end of a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    /// Thick line in the series color
    Line,
    /// Translucent patch in the band color
    Patch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: ColorTag,
    pub swatch: Swatch,
}

pub fn compute_layout(data: &AccessesDataset, config: &ChartConfig) -> Result<ChartLayout> {
    data.validate()?;
    let n = data.categories.len();
    let x_range = 0.0..config.x_max;
    let y_range = -0.5..n as f64 - 0.5;

    let slots = data
        .categories
        .iter()
        .enumerate()
        .map(|(i, name)| Slot {
            name: name.clone(),
            y: i as f64,
        })
        .collect();

    let bands = data
        .bands
        .iter()
        .map(|b| BandRect {
            start: b.start,
            end: b.end,
            y0: b.start as f64 - 0.5,
            y1: b.end as f64 + 0.5,
            color: b.color,
        })
        .collect();

    // series are stacked bottom to top inside a slot, centered on the slot
    let w = config.bar_width;
    let mid = (data.series.len() - 1) as f64 / 2.;
    let mut bars = Vec::with_capacity(n * data.series.len());
    for (k, s) in data.series.iter().enumerate() {
        let offset = (k as f64 - mid) * w;
        for (i, &value) in s.values.iter().enumerate() {
            if value as f64 > config.x_max {
                warn!(
                    "{} {} = {} exceeds the axis bound {}",
                    s.name, data.categories[i], value, config.x_max
                );
            }
            let y = i as f64 + offset;
            bars.push(BarRect {
                series: k,
                category: i,
                value,
                y0: y - w / 2.,
                y1: y + w / 2.,
                color: s.color,
                label: ValueLabel {
                    text: value.to_string(),
                    x: value as f64 + config.label_offset,
                    y,
                },
            });
        }
    }

    let mut legend: Vec<LegendEntry> = data
        .series
        .iter()
        .map(|s| LegendEntry {
            label: s.name.clone(),
            color: s.color,
            swatch: Swatch::Line,
        })
        .collect();
    for b in data.bands.iter() {
        let dup = legend
            .iter()
            .any(|e| e.swatch == Swatch::Patch && e.color == b.color && e.label == b.label);
        if !dup {
            legend.push(LegendEntry {
                label: b.label.clone(),
                color: b.color,
                swatch: Swatch::Patch,
            });
        }
    }

    Ok(ChartLayout {
        x_range,
        y_range,
        slots,
        bands,
        bars,
        legend,
    })
}
