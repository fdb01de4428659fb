use crate::Ray;
use nalgebra::Vector3;

pub trait Hit {
    fn hit(&self, ray: Ray, interval: Interval) -> Option<Record>;
}

/// Accepted ray parameters: `min` is exclusive, `max` inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, t: f64) -> bool {
        self.min < t && t <= self.max
    }

    pub fn with_max(self, max: f64) -> Self {
        Self { max, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub point: Vector3<f64>,
    /// Outward unit normal.
    pub normal: Vector3<f64>,
    pub t: f64,
    /// Ray arrived from outside the surface.
    pub front: bool,
}
