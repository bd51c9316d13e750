use std::cmp::min;
use std::io::Write;

use image::{
    codecs::png::PngEncoder,
    ColorType,
    ImageEncoder,
    Rgba,
    RgbaImage,
};

use crate::color::Color;
use crate::errors::IdenticonError;
use crate::pixels::{Rectangle, CANVAS_SIZE};

pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Unfilled pixels are fully transparent
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Paints rectangle, clipped to image bounds
pub fn fill_rectangle(
    image: &mut RgbaImage,
    rectangle: &Rectangle,
    color: Rgba<u8>,
) -> () {
    let x_end = min(rectangle.bottom_right.x, image.width());
    let y_end = min(rectangle.bottom_right.y, image.height());
    for y in rectangle.top_left.y..y_end {
        for x in rectangle.top_left.x..x_end {
            image.put_pixel(x, y, color);
        };
    };
}

pub fn render(color: Color, rectangles: &[Rectangle]) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    let fill_color = color.to_rgba();
    for rectangle in rectangles {
        fill_rectangle(&mut image, rectangle, fill_color);
    };
    image
}

pub fn encode_png(
    image: &RgbaImage,
    writer: impl Write,
) -> Result<(), IdenticonError> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(())
}
