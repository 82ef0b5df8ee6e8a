// Entry point
//
// No arguments, flags or environment: converts ./swiggy_scraped.csv into
// ./data/clean/app=swiggy/dt=<date>/reviews.parquet and exits.

use anyhow::Context;
use swiggy2parquet::{convert, init_tracing, ConvertConfig};

fn main() -> anyhow::Result<()> {
    let config = ConvertConfig::default();
    init_tracing(&config);

    convert(&config).context("Conversion failed")?;
    Ok(())
}
