//! Fixed 16-colour table

use bytemuck::{Pod, Zeroable};

use super::PaletteIndex;

/// Packed 8-bit RGB pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

/// Number of entries in a palette
pub const PALETTE_LEN: usize = 16;

/// Colour table indexed by `PaletteIndex`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    pub fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// Out-of-range indices wrap around the table
    pub fn rgb(&self, index: PaletteIndex) -> Rgb {
        self.colors[usize::from(index.0) % PALETTE_LEN]
    }
}

impl Default for Palette {
    fn default() -> Self {
        const HEX: [u32; PALETTE_LEN] = [
            0x000000, 0x2B335F, 0x7E2072, 0x19959C, // black, navy, purple, teal
            0x8B4852, 0x395C98, 0xA9C1FF, 0xEEEEEE, // brown, blue, sky, white
            0xD4186C, 0xD38441, 0xE9C35B, 0x70C6A9, // red, orange, yellow, mint
            0x7696DE, 0xA3A3A3, 0xFF9798, 0xEDC7B0, // indigo, grey, pink, peach
        ];
        Self::new(HEX.map(Rgb::from_hex))
    }
}
