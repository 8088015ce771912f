//! Ash seeding: the only source of entropy in the effect

use super::buffer::IntensityBuffer;
use rand::Rng;

/// Drop a fresh random heat value into every cell of the bottom row
pub fn fill_bottom_with_ashes<R: Rng>(buffer: &mut IntensityBuffer, rng: &mut R) {
    for cell in buffer.bottom_row_mut() {
        *cell = rng.gen::<u8>();
    }
}
