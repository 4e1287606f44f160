use anyhow::Context;
use fuse_ops_chart::{
    chart::{render, AccessesDataset},
    config::ChartConfig,
    file_logger,
};
use tracing::info;

/// plotter <dataset.toml> [config.toml]
fn main() -> anyhow::Result<()> {
    let _guard = file_logger("plotter")?;
    let mut args = std::env::args().skip(1);
    let dataset_path = args
        .next()
        .context("usage: plotter <dataset.toml> [config.toml]")?;
    let data = AccessesDataset::value_parse(&dataset_path)
        .with_context(|| format!("loading dataset {dataset_path}"))?;
    let config = match args.next() {
        Some(p) => ChartConfig::value_parse(&p).with_context(|| format!("loading config {p}"))?,
        None => ChartConfig::default(),
    };
    info!("rendering {dataset_path}");
    let path = render(&data, &config)?;
    println!("Graph saved in {}", path.display());
    Ok(())
}
