use anyhow::Result;
use argh::FromArgs;
use shoji_layout::{serve, Layout, PaneLayoutEngine};
use std::io;
use tracing_subscriber::EnvFilter;

/// Column layout engine: one full-height column per window. Reads layout
/// requests on stdin, one JSON message per line, and answers on stdout.
#[derive(FromArgs)]
struct Args {}

fn main() -> Result<()> {
    let _args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    tracing::info!("shoji-layout-vert starting");

    let mut layout = Layout::from(PaneLayoutEngine::vertical());
    serve(&mut layout, io::stdin().lock(), io::stdout().lock())
}
