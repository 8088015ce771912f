mod canvas;
mod config;
mod fire;
mod settings;
mod terminal;

use clap::Parser;
use config::FireConfig;
use settings::Settings;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Classic palette fire effect in the terminal", long_about = None)]
struct Cli {
    /// Random seed for reproducible ashes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the last frame to stdout (no interactive display)
    #[arg(short, long)]
    print: bool,

    /// Frames to simulate before printing (print mode)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    frames: Option<u64>,
}

/// Logs go to stderr and only when RUST_LOG is set, so the fire keeps the screen
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings = Settings::load();

    let config = FireConfig::resolve(cli.seed, cli.print, cli.frames, &settings.fire);
    fire::run(config)
}
