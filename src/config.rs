use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("aspect ratio must be a positive finite number, got {0}")]
    AspectRatio(f64),
    #[error("image width must be at least 2 pixels, got {0}")]
    Width(usize),
    #[error("image height derived from width {width} and aspect ratio {aspect_ratio} is {height}, need at least 2")]
    Height {
        width: usize,
        aspect_ratio: f64,
        height: usize,
    },
    #[error("samples per pixel must be at least 1")]
    Samples,
    #[error("could not parse aspect ratio {0:?}, expected a number or W:H")]
    ParseAspect(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub aspect_ratio: f64,
    pub image_width: usize,
    pub samples_per_pixel: usize,
    /// Apply gamma 2 before quantizing.
    pub gamma: bool,
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 500,
            samples_per_pixel: 10,
            gamma: false,
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn image_height(&self) -> usize {
        (self.image_width as f64 / self.aspect_ratio) as usize
    }

    /// The pixel to viewport mapping divides by `dimension - 1`, so both
    /// dimensions need at least two pixels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::AspectRatio(self.aspect_ratio));
        }
        if self.image_width < 2 {
            return Err(ConfigError::Width(self.image_width));
        }
        let height = self.image_height();
        if height < 2 {
            return Err(ConfigError::Height {
                width: self.image_width,
                aspect_ratio: self.aspect_ratio,
                height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::Samples);
        }
        Ok(())
    }
}

/// Parses `"16:9"` style ratios as well as plain decimals.
pub fn parse_aspect_ratio(s: &str) -> Result<f64, ConfigError> {
    let err = || ConfigError::ParseAspect(s.to_string());
    let ratio = match s.split_once(':') {
        Some((w, h)) => {
            let w: f64 = w.trim().parse().map_err(|_| err())?;
            let h: f64 = h.trim().parse().map_err(|_| err())?;
            w / h
        }
        None => s.trim().parse().map_err(|_| err())?,
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(ConfigError::AspectRatio(ratio))
    }
}
