//! Classic palette fire
//!
//! Every frame drops random ashes on the bottom row of a heat buffer, blurs the
//! heat upward and maps it through a black-red-yellow-white ramp.

pub mod ash;
pub mod buffer;
pub mod diffusion;
pub mod driver;
pub mod palette;
pub mod raster;
pub mod render;

use crate::canvas::{PrintCanvas, TerminalCanvas};
use crate::config::FireConfig;
use rand::prelude::*;
use std::io;
use tracing::info;

pub use driver::FireDriver;
pub use palette::Rgba;
pub use raster::Raster;

/// Heat buffer and raster width
pub const WIDTH: usize = 400;
/// Heat buffer and raster height
pub const HEIGHT: usize = 300;
/// Canvas presentation rate
pub const FRAME_RATE: u32 = 30;
pub const TITLE: &str = "Fire";

/// Run the fire effect, interactively or in print mode
pub fn run(config: FireConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    info!(seed, print = config.print, "starting fire");

    let mut driver = FireDriver::new(StdRng::seed_from_u64(seed));

    if config.print {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        // Leave the last line for the shell prompt
        let rows = rows.saturating_sub(1).max(1);
        let mut canvas = PrintCanvas::new(io::stdout().lock(), config.frames, cols, rows);
        driver.run(&mut canvas)?;
    } else {
        let mut canvas = TerminalCanvas::new();
        driver.run(&mut canvas)?;
    }

    Ok(())
}
