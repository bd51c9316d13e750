use image::Rgba;

use crate::digest::Digest;

/// RGB fill color, always rendered fully opaque
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color([u8; 3]);

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    pub fn red(&self) -> u8 { self.0[0] }

    pub fn green(&self) -> u8 { self.0[1] }

    pub fn blue(&self) -> u8 { self.0[2] }

    pub fn to_rgba(&self) -> Rgba<u8> {
        let [red, green, blue] = self.0;
        Rgba([red, green, blue, u8::MAX])
    }
}

pub fn pick_color(digest: &Digest) -> Color {
    Color::new(digest[0], digest[1], digest[2])
}
