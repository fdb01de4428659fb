use crate::{
    hit::{Interval, Record},
    Hit, Ray, Sphere,
};
use nalgebra::Vector3;

/// Every kind of shape a [`Scene`] can hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Hit for Primitive {
    fn hit(&self, ray: Ray, interval: Interval) -> Option<Record> {
        match self {
            Self::Sphere(sphere) => sphere.hit(ray, interval),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

/// Ordered collection of primitives, filled once and read-only while rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small sphere resting on a very large one that stands in for the ground.
    pub fn two_spheres() -> Self {
        let mut scene = Self::new();
        scene.add(Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5));
        scene.add(Sphere::new(Vector3::new(0.0, -100.5, -1.0), 100.0));
        scene
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Hit for Scene {
    /// Nearest hit across all primitives. Each accepted hit shrinks the
    /// upper bound so farther surfaces can no longer win.
    fn hit(&self, ray: Ray, interval: Interval) -> Option<Record> {
        let mut closest = None;
        let mut closest_so_far = interval.max;

        for primitive in &self.primitives {
            if let Some(record) = primitive.hit(ray, interval.with_max(closest_so_far)) {
                closest_so_far = record.t;
                closest = Some(record);
            }
        }

        closest
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}
