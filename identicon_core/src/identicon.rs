use std::io::Write;

use image::RgbaImage;

use crate::canvas::{encode_png, render, BACKGROUND};
use crate::color::{pick_color, Color};
use crate::digest::{hash_input, Digest};
use crate::errors::IdenticonError;
use crate::grid::{build_grid, filter_even, Grid, GridCell};
use crate::pixels::{map_to_pixels, Rectangle};

/// Fully computed identicon, ready for rasterization
#[derive(Clone, Debug, PartialEq)]
pub struct Identicon {
    digest: Digest,
    color: Color,
    grid: Grid,
    cells: Vec<GridCell>,
    pixel_map: Vec<Rectangle>,
}

impl Identicon {
    pub fn generate(input: &[u8]) -> Self {
        let digest = hash_input(input);
        let color = pick_color(&digest);
        let grid = build_grid(&digest);
        let cells = filter_even(&grid);
        let pixel_map = map_to_pixels(&cells);
        Self { digest, color, grid, cells, pixel_map }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn pixel_map(&self) -> &[Rectangle] {
        &self.pixel_map
    }

    pub fn render(&self) -> RgbaImage {
        render(self.color, &self.pixel_map)
    }

    /// Writes PNG image. Writer is not buffered.
    pub fn write_image(&self, writer: impl Write) -> Result<(), IdenticonError> {
        encode_png(&self.render(), writer)
    }

    pub fn to_png(&self) -> Result<Vec<u8>, IdenticonError> {
        let mut output = vec![];
        self.write_image(&mut output)?;
        Ok(output)
    }
}

pub fn generate_identicon(input: &str) -> Result<Vec<u8>, IdenticonError> {
    Identicon::generate(input.as_bytes()).to_png()
}

/// Transparent 1x1 image
pub fn generate_pixel() -> Result<Vec<u8>, IdenticonError> {
    let image = RgbaImage::from_pixel(1, 1, BACKGROUND);
    let mut output = vec![];
    encode_png(&image, &mut output)?;
    Ok(output)
}
