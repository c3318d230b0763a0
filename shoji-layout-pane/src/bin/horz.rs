use anyhow::Result;
use argh::FromArgs;
use shoji_layout::{serve, Layout, PaneLayoutEngine};
use std::io;
use tracing_subscriber::EnvFilter;

/// Row layout engine: one full-width row per window. Reads layout requests
/// on stdin, one JSON message per line, and answers on stdout.
#[derive(FromArgs)]
struct Args {}

fn main() -> Result<()> {
    let _args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::info!("shoji-layout-horz starting");

    let mut layout = Layout::from(PaneLayoutEngine::horizontal());
    serve(&mut layout, io::stdin().lock(), io::stdout().lock())
}
