use crate::{
    hit::{Interval, Record},
    Hit, Ray,
};
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: Ray, interval: Interval) -> Option<Record> {
        let oc = ray.origin - self.center;
        let a = ray.direction.norm_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut root = (-half_b - sqrt_d) / a;

        if !interval.contains(root) {
            root = (-half_b + sqrt_d) / a;
            if !interval.contains(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let normal = (point - self.center) / self.radius;
        Some(Record {
            point,
            normal,
            t: root,
            front: ray.direction.dot(&normal) < 0.0,
        })
    }
}
