use nalgebra::Vector3;

pub type Color = Vector3<f64>;
pub type Point3 = Vector3<f64>;

/// Upper clamp applied before scaling so a full channel maps to 255, not 256.
const CHANNEL_MAX: f64 = 0.999;

pub trait Rgb8 {
    fn to_rgb8(&self) -> [u8; 3];
    fn from_rgb8(rgb: [u8; 3]) -> Self;
}

impl Rgb8 for Vector3<f64> {
    fn to_rgb8(&self) -> [u8; 3] {
        let channel = |c: f64| (256.0 * c.clamp(0.0, CHANNEL_MAX)) as u8;
        [channel(self.x), channel(self.y), channel(self.z)]
    }

    fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

/// Turns a sum of `samples` shaded colors into a displayable color.
/// With `gamma` set each channel is raised to the power 1/2.
pub fn resolve(sum: Color, samples: usize, gamma: bool) -> Color {
    debug_assert!(samples > 0, "cannot average zero samples");
    let average = sum / samples as f64;
    if gamma {
        average.map(|c| c.max(0.0).sqrt())
    } else {
        average
    }
}
