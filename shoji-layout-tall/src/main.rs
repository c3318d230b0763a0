use anyhow::{Context, Result};
use argh::FromArgs;
use shoji_layout::{serve, Layout, TallConfig, TallLayoutEngine};
use std::io;
use tracing_subscriber::EnvFilter;

/// Master-stack layout engine. Reads layout requests on stdin, one JSON
/// message per line, and answers on stdout.
#[derive(FromArgs)]
struct Args {
    /// number of windows in the main area
    #[argh(option, default = "1")]
    main_count: i32,

    /// fraction of the width given to the main area
    #[argh(option, default = "0.5")]
    main_ratio: f64,

    /// how far one expand or shrink moves the split
    #[argh(option, default = "0.03")]
    ratio_step: f64,
}

impl Args {
    fn config(&self) -> Result<TallConfig> {
        TallConfig::try_new(self.main_count, self.main_ratio, self.ratio_step)
            .context("Invalid tall layout options")
    }
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = args.config()?;
    tracing::info!("shoji-layout-tall starting with {:?}", config);

    let mut layout = Layout::from(TallLayoutEngine::new(config));
    serve(&mut layout, io::stdin().lock(), io::stdout().lock())
}
