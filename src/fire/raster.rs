//! Color surface handed to the canvas each frame

use super::palette::Rgba;
use std::ops::{Index, IndexMut};

/// Row-major grid of colors with its dimensions carried alongside
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

#[allow(dead_code)]
impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }
}

impl Index<usize> for Raster {
    type Output = Rgba;

    fn index(&self, i: usize) -> &Rgba {
        &self.pixels[i]
    }
}

impl IndexMut<usize> for Raster {
    fn index_mut(&mut self, i: usize) -> &mut Rgba {
        &mut self.pixels[i]
    }
}
