use rand::Rng;
use tracing::{debug, info};

use crate::{
    color::{self, Color},
    shade::ray_color,
    Camera, FrameBuffer, Hit, RenderConfig,
};

/// Renders `world` into a new frame buffer of the configured size.
///
/// Scanlines are traced from image-space row `height - 1` (the top) down to
/// row 0. Each pixel averages `samples_per_pixel` rays jittered uniformly
/// inside the pixel. `config` must pass [`RenderConfig::validate`].
pub fn render<H: Hit, R: Rng>(
    world: &H,
    camera: &Camera,
    config: &RenderConfig,
    rng: &mut R,
) -> FrameBuffer {
    let width = config.image_width;
    let height = config.image_height();
    debug_assert!(width > 1 && height > 1, "image must be at least 2x2");

    info!(
        width,
        height,
        samples = config.samples_per_pixel,
        "starting render"
    );

    let mut frame_buffer = FrameBuffer::new(width, height);
    for j in (0..height).rev() {
        debug!(remaining = j, "scanlines remaining");
        for i in 0..width {
            let sum = sample_pixel(world, camera, config, i, j, rng);
            let color = color::resolve(sum, config.samples_per_pixel, config.gamma);
            frame_buffer.set_pixel(i, height - 1 - j, color);
        }
    }

    info!("done");
    frame_buffer
}

/// Sum of the shaded samples for pixel `(i, j)` in image space, `j` counting
/// up from the bottom row.
pub fn sample_pixel<H: Hit, R: Rng>(
    world: &H,
    camera: &Camera,
    config: &RenderConfig,
    i: usize,
    j: usize,
    rng: &mut R,
) -> Color {
    let u_span = (config.image_width - 1) as f64;
    let v_span = (config.image_height() - 1) as f64;

    let mut sum = Color::zeros();
    for _ in 0..config.samples_per_pixel {
        let u = (i as f64 + rng.gen::<f64>()) / u_span;
        let v = (j as f64 + rng.gen::<f64>()) / v_span;
        sum += ray_color(camera.get_ray(u, v), world);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Rgb8, Scene};
    use rand::{rngs::StdRng, SeedableRng};

    fn small_config() -> RenderConfig {
        RenderConfig {
            image_width: 32,
            aspect_ratio: 2.0,
            samples_per_pixel: 4,
            ..Default::default()
        }
    }

    #[test]
    fn frame_has_configured_size() {
        let config = small_config();
        let frame = render(
            &Scene::two_spheres(),
            &Camera::new(config.aspect_ratio),
            &config,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(frame.width(), 32);
        assert_eq!(frame.height(), 16);
    }

    #[test]
    fn empty_scene_gets_bluer_towards_the_top() {
        let config = small_config();
        let frame = render(
            &Scene::new(),
            &Camera::new(config.aspect_ratio),
            &config,
            &mut StdRng::seed_from_u64(2),
        );
        let top: [u8; 3] = frame.get_pixel(16, 0);
        let bottom: [u8; 3] = frame.get_pixel(16, 15);
        assert!(top[0] < bottom[0]);
        assert_eq!(top[2], 255);
        assert_eq!(bottom[2], 255);
    }

    #[test]
    fn sample_sum_is_not_clamped() {
        let config = RenderConfig {
            samples_per_pixel: 8,
            ..small_config()
        };
        let sum = sample_pixel(
            &Scene::new(),
            &Camera::new(config.aspect_ratio),
            &config,
            0,
            0,
            &mut StdRng::seed_from_u64(3),
        );
        // blue channel of the sky gradient is always 1.0
        assert!((sum.z - 8.0).abs() < 1e-9);
        let color = color::resolve(sum, 8, false);
        assert_eq!(color.to_rgb8()[2], 255);
    }

    #[test]
    fn same_seed_same_image() {
        let config = small_config();
        let camera = Camera::new(config.aspect_ratio);
        let scene = Scene::two_spheres();
        let a = render(&scene, &camera, &config, &mut StdRng::seed_from_u64(42));
        let b = render(&scene, &camera, &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.pixel_data(), b.pixel_data());
    }
}
