use plotters::style::RGBColor;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Red,
    Green,
    Cyan,
    Magenta,
    Blue,
    Orange,
    Gray,
}

impl ColorTag {
    pub fn rgb(self) -> &'static RGBColor {
        match self {
            ColorTag::Yellow => &RGBColor(255, 255, 0),
            ColorTag::Red => &RGBColor(255, 0, 0),
            ColorTag::Green => &RGBColor(0, 128, 0),
            ColorTag::Cyan => &RGBColor(0, 255, 255),
            ColorTag::Magenta => &RGBColor(255, 0, 255),
            ColorTag::Blue => &RGBColor(0, 0, 255),
            ColorTag::Orange => &RGBColor(255, 165, 0),
            ColorTag::Gray => &RGBColor(128, 128, 128),
        }
    }
}

/// Operation counts of one workload, positionally aligned with the
/// dataset's categories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: ColorTag,
    pub values: Vec<u64>,
}

/// Background band over the inclusive category range `start..=end`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HighlightBand {
    pub start: usize,
    pub end: usize,
    pub color: ColorTag,
    /// What the cost of the covered operations scales with
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessesDataset {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    #[serde(default)]
    pub bands: Vec<HighlightBand>,
}

impl AccessesDataset {
    /// FUSE operation counts of the ResNet and CosmoFlow training runs.
    pub fn fuse_accesses() -> Self {
        let categories = [
            "Reads", "GetAttr", "Writes", "Open", "Close", "Create", "Readdir",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let series = vec![
            Series {
                name: "ResNet".to_string(),
                color: ColorTag::Blue,
                values: vec![39436, 20069, 55, 72, 72, 4, 2],
            },
            Series {
                name: "CosmoFlow".to_string(),
                color: ColorTag::Orange,
                // writes were 48 until the very end of the run
                values: vec![5030, 28217, 189, 5034, 5034, 7, 2],
            },
        ];
        let band = |start, end, color, label: &str| HighlightBand {
            start,
            end,
            color,
            label: label.to_string(),
        };
        let bands = vec![
            band(0, 0, ColorTag::Yellow, "Tied to file size"),
            band(1, 1, ColorTag::Red, "Tied to file size and file count"),
            band(2, 2, ColorTag::Green, "Tied to epoch count"),
            band(3, 4, ColorTag::Cyan, "Tied to file count"),
            band(5, 6, ColorTag::Magenta, "Fixed usage"),
        ];
        Self {
            categories,
            series,
            bands,
        }
    }

    pub fn value_parse(path: &str) -> Result<Self> {
        let c = std::fs::read_to_string(path)?;
        let val: Self = toml::from_str(&c)?;
        Ok(val)
    }

    /// Every series has one value per category and every band stays inside
    /// the category list. Overlapping or touching bands are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::NoCategories);
        }
        if self.series.is_empty() {
            return Err(Error::EmptySeries);
        }
        let expected = self.categories.len();
        for s in self.series.iter() {
            if s.values.len() != expected {
                return Err(Error::LengthMismatch {
                    series: s.name.clone(),
                    expected,
                    found: s.values.len(),
                });
            }
        }
        for b in self.bands.iter() {
            if b.start > b.end || b.end >= expected {
                return Err(Error::BandOutOfRange {
                    label: b.label.clone(),
                    start: b.start,
                    end: b.end,
                    categories: expected,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuse_accesses_is_valid() {
        let data = AccessesDataset::fuse_accesses();
        data.validate().unwrap();
        assert_eq!(data.categories.len(), 7);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.bands.len(), 5);
    }

    #[test]
    fn short_series_is_rejected() {
        let mut data = AccessesDataset::fuse_accesses();
        data.series[0].values.pop();
        match data.validate() {
            Err(Error::LengthMismatch {
                series,
                expected,
                found,
            }) => {
                assert_eq!(series, "ResNet");
                assert_eq!(expected, 7);
                assert_eq!(found, 6);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn long_series_is_rejected() {
        let mut data = AccessesDataset::fuse_accesses();
        data.series[1].values.push(1);
        assert!(matches!(
            data.validate(),
            Err(Error::LengthMismatch { found: 8, .. })
        ));
    }

    #[test]
    fn no_series_is_rejected() {
        let mut data = AccessesDataset::fuse_accesses();
        data.series.clear();
        assert!(matches!(data.validate(), Err(Error::EmptySeries)));
    }

    #[test]
    fn no_categories_is_rejected() {
        let data = AccessesDataset {
            categories: vec![],
            series: vec![Series {
                name: "ResNet".to_string(),
                color: ColorTag::Blue,
                values: vec![],
            }],
            bands: vec![],
        };
        assert!(matches!(data.validate(), Err(Error::NoCategories)));
    }

    #[test]
    fn band_bounds() {
        let mut data = AccessesDataset::fuse_accesses();
        data.bands.push(HighlightBand {
            start: 6,
            end: 7,
            color: ColorTag::Gray,
            label: "past the end".to_string(),
        });
        assert!(matches!(
            data.validate(),
            Err(Error::BandOutOfRange { end: 7, .. })
        ));

        let mut data = AccessesDataset::fuse_accesses();
        data.bands[0].start = 2;
        assert!(matches!(
            data.validate(),
            Err(Error::BandOutOfRange { start: 2, end: 0, .. })
        ));
    }

    #[test]
    fn overlapping_bands_are_allowed() {
        let mut data = AccessesDataset::fuse_accesses();
        data.bands.push(HighlightBand {
            start: 0,
            end: 6,
            color: ColorTag::Gray,
            label: "everything".to_string(),
        });
        data.validate().unwrap();
    }

    #[test]
    fn dataset_from_toml() {
        let data: AccessesDataset = toml::from_str(
            r#"
            categories = ["Reads", "Writes"]

            [[series]]
            name = "A"
            color = "blue"
            values = [10, 0]

            [[series]]
            name = "B"
            color = "orange"
            values = [3, 4]

            [[bands]]
            start = 0
            end = 1
            color = "magenta"
            label = "Fixed usage"
            "#,
        )
        .unwrap();
        data.validate().unwrap();
        assert_eq!(data.series[1].color, ColorTag::Orange);
        assert_eq!(data.bands[0].end, 1);
    }
}
