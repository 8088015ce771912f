//! Heat grid driving the fire effect

use std::ops::{Index, IndexMut};

/// Row-major grid of 8-bit heat values, `index = y * width + x`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityBuffer {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

#[allow(dead_code)]
impl IntensityBuffer {
    /// Allocate a zeroed buffer. Starting from anything but zero shows garbage
    /// on the first frames.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, heat: u8) {
        self.cells[y * self.width + x] = heat;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// The bottom row, where ashes are dropped
    pub fn bottom_row_mut(&mut self) -> &mut [u8] {
        let start = (self.height - 1) * self.width;
        &mut self.cells[start..]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn fill(&mut self, heat: u8) {
        self.cells.fill(heat);
    }
}

impl Index<usize> for IntensityBuffer {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.cells[i]
    }
}

impl IndexMut<usize> for IntensityBuffer {
    fn index_mut(&mut self, i: usize) -> &mut u8 {
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let buf = IntensityBuffer::new(400, 300);
        assert_eq!(buf.len(), 400 * 300);
        assert!(buf.cells().iter().all(|&h| h == 0));
    }

    #[test]
    fn coordinates_are_row_major() {
        let mut buf = IntensityBuffer::new(4, 3);
        buf.set(1, 2, 9);
        assert_eq!(buf[2 * 4 + 1], 9);
        assert_eq!(buf.get(1, 2), 9);
        assert_eq!(buf.row(2), &[0, 9, 0, 0]);
    }

    #[test]
    fn bottom_row_is_last_width_cells() {
        let mut buf = IntensityBuffer::new(4, 3);
        buf.bottom_row_mut().fill(5);
        assert_eq!(&buf.cells()[8..], &[5, 5, 5, 5]);
        assert!(buf.cells()[..8].iter().all(|&h| h == 0));
    }
}
