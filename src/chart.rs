pub mod dataset;
pub mod layout;
pub mod render;

pub use dataset::{AccessesDataset, ColorTag, HighlightBand, Series};
pub use layout::{compute_layout, ChartLayout};
pub use render::{render, render_svg, save_svg};
