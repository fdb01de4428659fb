use crate::{color::Color, hit::Interval, Hit, Ray};

/// Normal visualization for surfaces, vertical white to blue gradient for
/// everything else. `ray.direction` must be non-zero.
pub fn ray_color(ray: Ray, world: &impl Hit) -> Color {
    let white = Color::new(1.0, 1.0, 1.0);
    let sky_blue = Color::new(0.5, 0.7, 1.0);

    if let Some(record) = world.hit(ray, Interval::new(0.0, f64::INFINITY)) {
        return 0.5 * (record.normal + white);
    }

    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * white + t * sky_blue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, Sphere};
    use nalgebra::Vector3;

    const EPSILON: f64 = 1e-12;

    fn white() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }

    fn sky_blue() -> Color {
        Color::new(0.5, 0.7, 1.0)
    }

    #[test]
    fn hit_colors_by_normal() {
        let world = Scene::from_iter([Sphere::new(Vector3::new(0.0, 0.0, -2.0), 1.0).into()]);
        let color = ray_color(
            Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0)),
            &world,
        );
        assert!((color - Color::new(0.5, 0.5, 1.0)).norm() < EPSILON);
    }

    #[test]
    fn straight_up_is_sky_blue_and_straight_down_is_white() {
        let world = Scene::new();
        let up = ray_color(Ray::new(Vector3::zeros(), Vector3::new(0.0, 3.0, 0.0)), &world);
        let down = ray_color(Ray::new(Vector3::zeros(), Vector3::new(0.0, -3.0, 0.0)), &world);
        assert!((up - sky_blue()).norm() < EPSILON);
        assert!((down - white()).norm() < EPSILON);
    }

    #[test]
    fn background_stays_between_white_and_blue() {
        let world = Scene::new();
        for i in -10..=10 {
            for k in -10..=10 {
                let direction = Vector3::new(k as f64 * 0.3, i as f64 * 0.4, -1.0);
                let color = ray_color(Ray::new(Vector3::zeros(), direction), &world);
                for channel in 0..3 {
                    let lo = white()[channel].min(sky_blue()[channel]);
                    let hi = white()[channel].max(sky_blue()[channel]);
                    assert!((lo - EPSILON..=hi + EPSILON).contains(&color[channel]));
                }
            }
        }
    }
}
