use fuse_ops_chart::{
    chart::{render, AccessesDataset},
    config::ChartConfig,
    stdout_logger,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    stdout_logger()?;
    info!("start");
    let path = render(&AccessesDataset::fuse_accesses(), &ChartConfig::default())?;
    println!("Graph saved in {}", path.display());
    Ok(())
}
