use nalgebra::Vector3;

use crate::Ray;

const VIEWPORT_HEIGHT: f64 = 2.0;
const FOCAL_LENGTH: f64 = 1.0;

/// Pinhole camera at the origin looking down `-z`.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: Vector3<f64>,
    lower_left_corner: Vector3<f64>,
    horizontal: Vector3<f64>,
    vertical: Vector3<f64>,
}

impl Camera {
    pub fn new(aspect_ratio: f64) -> Self {
        let viewport_height = VIEWPORT_HEIGHT;
        let viewport_width = viewport_height * aspect_ratio;
        let origin = Vector3::zeros();
        let horizontal = Vector3::new(viewport_width, 0.0, 0.0);
        let vertical = Vector3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vector3::new(0.0, 0.0, FOCAL_LENGTH);
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Ray from the eye through viewport coordinate `(u, v)`, where `(0, 0)` is
    /// the lower left corner and `(1, 1)` the upper right. Values outside
    /// `[0, 1]` extrapolate past the viewport edge.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn center_ray_points_down_negative_z() {
        let camera = Camera::new(16.0 / 9.0);
        let ray = camera.get_ray(0.5, 0.5);
        assert_eq!(ray.origin, Vector3::zeros());
        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).norm() < EPSILON);
    }

    #[test]
    fn corners_span_viewport() {
        let camera = Camera::new(2.0);
        let lower_left = camera.get_ray(0.0, 0.0).direction;
        let upper_right = camera.get_ray(1.0, 1.0).direction;
        assert!((lower_left - Vector3::new(-2.0, -1.0, -1.0)).norm() < EPSILON);
        assert!((upper_right - Vector3::new(2.0, 1.0, -1.0)).norm() < EPSILON);
    }

    #[test]
    fn out_of_range_coordinates_extrapolate() {
        let camera = Camera::new(1.0);
        let ray = camera.get_ray(1.5, -0.5);
        assert!((ray.direction - Vector3::new(2.0, -2.0, -1.0)).norm() < EPSILON);
    }
}
