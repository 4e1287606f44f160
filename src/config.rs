use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// Canvas, scale and styling knobs. Every field has a default, so a TOML
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub output: PathBuf,
    /// Canvas size in pixels
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_desc: String,
    /// Fixed upper bound of the value axis, leaves room for value labels
    pub x_max: f64,
    /// Bar thickness in slot units (a slot is 1.0 tall)
    pub bar_width: f64,
    pub band_opacity: f64,
    pub legend_swatch_opacity: f64,
    /// Gap between a bar's end and its value label, in value units
    pub label_offset: f64,
    pub font_size: f64,
    pub legend_font_size: f64,
    /// Upper-center point of the legend, as fractions of the plotting area
    /// (x from the left, y from the bottom)
    pub legend_anchor: (f64, f64),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("images/acesses_graph.svg"),
            width: 800,
            height: 560,
            title: "Number of FUSE Operations per Dataset".to_string(),
            x_desc: "Number of Operations".to_string(),
            x_max: 55000.,
            bar_width: 0.4,
            band_opacity: 0.10,
            legend_swatch_opacity: 0.18,
            label_offset: 100.,
            font_size: 14.,
            legend_font_size: 10.,
            legend_anchor: (0.75, 0.99),
        }
    }
}

impl ChartConfig {
    pub fn value_parse(path: &str) -> Result<Self> {
        let c = std::fs::read_to_string(path)?;
        let val: Self = toml::from_str(&c)?;
        Ok(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ChartConfig = toml::from_str(
            r#"
            output = "out/ops.svg"
            x_max = 60000.0
            legend_anchor = [0.5, 0.9]
            "#,
        )
        .unwrap();
        assert_eq!(config.output, PathBuf::from("out/ops.svg"));
        assert_eq!(config.x_max, 60000.);
        assert_eq!(config.legend_anchor, (0.5, 0.9));
        assert_eq!(config.bar_width, 0.4);
        assert_eq!(config.title, ChartConfig::default().title);
    }

    #[test]
    fn legend_text_is_smaller_than_labels() {
        let config = ChartConfig::default();
        assert_eq!(config.legend_font_size, 10.);
        assert!(config.legend_font_size < config.font_size);
    }

    #[test]
    fn bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        std::fs::write(&path, "width = \"wide\"").unwrap();
        let err = ChartConfig::value_parse(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
