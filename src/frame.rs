use std::io::{self, Write};

use crate::color::Rgb8;

/// Row-major RGB8 image. Row 0 is the top of the picture.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![0; width * height * 3].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn set_pixel<T: Rgb8>(&mut self, x: usize, y: usize, color: T) {
        let start = (x + y * self.width) * 3;
        self.pixel_data[start..start + 3].copy_from_slice(&color.to_rgb8());
    }

    pub fn get_pixel<T: Rgb8>(&self, x: usize, y: usize) -> T {
        let start = (x + y * self.width) * 3;
        let [r, g, b] = [
            self.pixel_data[start],
            self.pixel_data[start + 1],
            self.pixel_data[start + 2],
        ];
        T::from_rgb8([r, g, b])
    }

    /// Writes the image as plain-text PPM (`P3`), top row first.
    pub fn write_ppm<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "P3")?;
        writeln!(sink, "{} {}", self.width, self.height)?;
        writeln!(sink, "255")?;
        for rgb in self.pixel_data.chunks_exact(3) {
            writeln!(sink, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
        sink.flush()
    }
}

impl Rgb8 for [u8; 3] {
    fn to_rgb8(&self) -> [u8; 3] {
        *self
    }

    fn from_rgb8(rgb: [u8; 3]) -> Self {
        rgb
    }
}
