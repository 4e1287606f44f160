use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dataset has no categories")]
    NoCategories,
    #[error("dataset has no series")]
    EmptySeries,
    #[error("series `{series}` has {found} values, expected {expected} (one per category)")]
    LengthMismatch {
        series: String,
        expected: usize,
        found: usize,
    },
    #[error("highlight band `{label}` covers [{start}, {end}], but there are {categories} categories")]
    BandOutOfRange {
        label: String,
        start: usize,
        end: usize,
        categories: usize,
    },
    #[error("Draw: {0}")]
    Draw(String),
    #[error("Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config: {0}")]
    Config(#[from] toml::de::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Error::Draw(e.to_string())
    }
}
