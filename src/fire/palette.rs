//! Heat-to-color ramp: black to red, red to yellow, yellow to white

use std::ops::Index;

/// Number of entries in the ramp, one per possible heat value
pub const PALETTE_SIZE: usize = 256;

/// A single RGBA color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Fixed 256-entry color ramp, indexed directly by heat value
#[derive(Clone, Debug)]
pub struct Palette {
    colors: [Rgba; PALETTE_SIZE],
}

impl Palette {
    /// Build the fire ramp.
    ///
    /// Each band climbs in steps of 3 (integer `255 / 84` and `255 / 85`), so
    /// the red and green bands top out at 252 before the next band pins them
    /// to 255. Only the last band reaches a full 255.
    pub fn fire() -> Self {
        let mut colors = [Rgba::BLACK; PALETTE_SIZE];

        // Black to red
        for i in 0..=84 {
            colors[i] = Rgba::opaque((i * (0xFF / 84)) as u8, 0, 0);
        }

        // Red to yellow
        for i in 85..=169 {
            colors[i] = Rgba::opaque(0xFF, ((i - 85) * (0xFF / 84)) as u8, 0);
        }

        // Yellow to white
        for i in 170..PALETTE_SIZE {
            colors[i] = Rgba::opaque(0xFF, 0xFF, ((i - 170) * (0xFF / 85)) as u8);
        }

        Self { colors }
    }

    #[allow(dead_code)]
    pub fn colors(&self) -> &[Rgba; PALETTE_SIZE] {
        &self.colors
    }
}

impl Index<u8> for Palette {
    type Output = Rgba;

    fn index(&self, heat: u8) -> &Rgba {
        &self.colors[heat as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let pal = Palette::fire();
        assert_eq!(pal[0], Rgba { r: 0, g: 0, b: 0, a: 255 });
        assert_eq!(pal[255], Rgba { r: 255, g: 255, b: 255, a: 255 });
    }

    #[test]
    fn band_edges_keep_integer_quantization() {
        let pal = Palette::fire();
        assert_eq!(pal[84], Rgba::opaque(252, 0, 0));
        assert_eq!(pal[85], Rgba::opaque(255, 0, 0));
        assert_eq!(pal[169], Rgba::opaque(255, 252, 0));
        assert_eq!(pal[170], Rgba::opaque(255, 255, 0));
        assert_eq!(pal[254], Rgba::opaque(255, 255, 252));
    }

    #[test]
    fn every_entry_is_opaque() {
        let pal = Palette::fire();
        assert!(pal.colors().iter().all(|c| c.a == 255));
    }

    #[test]
    fn red_band_is_monotonic() {
        let pal = Palette::fire();
        for i in 1..=84u8 {
            assert!(pal[i].r >= pal[i - 1].r);
            assert_eq!((pal[i].g, pal[i].b), (0, 0));
        }
    }

    #[test]
    fn green_band_is_monotonic_with_red_pinned() {
        let pal = Palette::fire();
        for i in 86..=169u8 {
            assert!(pal[i].g >= pal[i - 1].g);
            assert_eq!(pal[i].r, 255);
            assert_eq!(pal[i].b, 0);
        }
    }

    #[test]
    fn blue_band_is_monotonic_with_red_and_green_pinned() {
        let pal = Palette::fire();
        for i in 171..=255u8 {
            assert!(pal[i].b >= pal[i - 1].b);
            assert_eq!((pal[i].r, pal[i].g), (255, 255));
        }
    }

    #[test]
    fn same_ramp_every_time() {
        assert_eq!(Palette::fire().colors(), Palette::fire().colors());
    }
}
