use super::buffer::IntensityBuffer;
use super::palette::Palette;
use super::raster::Raster;

/// Convert heat values to colors through the palette, one cell at a time
pub fn convert_fire_buffer_to_raster(buffer: &IntensityBuffer, palette: &Palette, raster: &mut Raster) {
    debug_assert_eq!(
        (buffer.width(), buffer.height()),
        (raster.width(), raster.height()),
        "raster and heat buffer sizes differ"
    );

    for (pixel, &heat) in raster.pixels_mut().iter_mut().zip(buffer.cells()) {
        *pixel = palette[heat];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::palette::Rgba;

    #[test]
    fn every_cell_goes_through_the_palette() {
        let palette = Palette::fire();
        let mut buffer = IntensityBuffer::new(16, 16);
        for i in 0..buffer.len() {
            buffer[i] = i as u8;
        }

        let mut raster = Raster::new(16, 16);
        convert_fire_buffer_to_raster(&buffer, &palette, &mut raster);

        for i in 0..buffer.len() {
            assert_eq!(raster[i], palette[i as u8]);
        }
    }

    #[test]
    fn overwrites_previous_frame() {
        let palette = Palette::fire();
        let buffer = IntensityBuffer::new(4, 4);
        let mut raster = Raster::new(4, 4);
        raster.set(1, 1, Rgba::opaque(9, 9, 9));

        convert_fire_buffer_to_raster(&buffer, &palette, &mut raster);
        assert!(raster.pixels().iter().all(|&c| c == palette[0]));
    }
}
