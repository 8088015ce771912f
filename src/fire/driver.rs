//! Frame driver: seed, diffuse, render, present

use super::ash::fill_bottom_with_ashes;
use super::buffer::IntensityBuffer;
use super::diffusion::calculate_next_fire_frame;
use super::palette::Palette;
use super::raster::Raster;
use super::render::convert_fire_buffer_to_raster;
use super::{HEIGHT, TITLE, WIDTH};
use crate::canvas::Canvas;
use rand::Rng;
use std::io;
use tracing::{debug, info};

/// Owns all per-run state of the effect
pub struct FireDriver<R: Rng> {
    buffer: IntensityBuffer,
    palette: Palette,
    raster: Raster,
    rng: R,
    frames: u64,
}

impl<R: Rng> FireDriver<R> {
    pub fn new(rng: R) -> Self {
        Self {
            buffer: IntensityBuffer::new(WIDTH, HEIGHT),
            palette: Palette::fire(),
            raster: Raster::new(WIDTH, HEIGHT),
            rng,
            frames: 0,
        }
    }

    #[allow(dead_code)]
    pub fn buffer(&self) -> &IntensityBuffer {
        &self.buffer
    }

    #[allow(dead_code)]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Frames computed so far
    #[allow(dead_code)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Compute the next frame and return the refreshed raster
    pub fn tick(&mut self) -> &Raster {
        fill_bottom_with_ashes(&mut self.buffer, &mut self.rng);
        calculate_next_fire_frame(&mut self.buffer);
        convert_fire_buffer_to_raster(&self.buffer, &self.palette, &mut self.raster);
        self.frames += 1;
        &self.raster
    }

    /// Drive `canvas` until it asks to close. Returns the number of frames presented.
    ///
    /// The canvas is shut down even when presenting fails; the first error wins.
    pub fn run<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<u64> {
        canvas.initialize(WIDTH, HEIGHT, TITLE)?;
        info!(width = WIDTH, height = HEIGHT, "canvas initialized");

        let result = self.present_until_closed(canvas);
        let shutdown = canvas.shutdown();

        let presented = result?;
        shutdown?;
        info!(frames = presented, "canvas closed");
        Ok(presented)
    }

    fn present_until_closed<C: Canvas>(&mut self, canvas: &mut C) -> io::Result<u64> {
        let mut presented = 0;
        while !canvas.should_close()? {
            self.tick();
            canvas.present(&self.raster)?;
            presented += 1;
            if presented % 300 == 0 {
                debug!(frames = presented, "still burning");
            }
        }
        Ok(presented)
    }
}
