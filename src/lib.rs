pub mod chart;
pub mod config;
pub mod error;

pub mod utils;
pub use utils::*;
