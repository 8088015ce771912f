//! Upward diffusion of heat
//!
//! Each interior cell becomes a weighted average of six cells: itself and its
//! two horizontal neighbours, plus the three cells directly below, which carry
//! most of the weight. The weights sum exactly to the divisor, so a uniform
//! field is stable and heat fades only through integer truncation and mixing
//! with the colder rows above.

use super::buffer::IntensityBuffer;

/// Weights applied to `[left, centre, right]` on the cell's own row
pub const ROW_WEIGHTS: [u32; 3] = [10, 20, 10];
/// Weights applied to `[left, centre, right]` on the row below
pub const BELOW_WEIGHTS: [u32; 3] = [160, 320, 160];
pub const DIVISOR: u32 = 680;

/// Advance the fire by one step.
///
/// Reads come from a full snapshot taken on entry, never from cells already
/// written this step. Border cells (first/last row and column) are left alone.
pub fn calculate_next_fire_frame(buffer: &mut IntensityBuffer) {
    let w = buffer.width();
    let h = buffer.height();
    if w < 3 || h < 3 {
        return;
    }

    let old = buffer.clone();

    for y in 1..h - 1 {
        let row = y * w;
        for x in 1..w - 1 {
            let i = row + x;
            let below = i + w;

            let sum = ROW_WEIGHTS[0] * old[i - 1] as u32
                + ROW_WEIGHTS[1] * old[i] as u32
                + ROW_WEIGHTS[2] * old[i + 1] as u32
                + BELOW_WEIGHTS[0] * old[below - 1] as u32
                + BELOW_WEIGHTS[1] * old[below] as u32
                + BELOW_WEIGHTS[2] * old[below + 1] as u32;

            buffer[i] = (sum / DIVISOR) as u8;
        }
    }
}
