//! Renders spheres with normal-visualization shading and jittered
//! supersampling, writing plain-text PPM.

pub mod camera;
pub mod color;
pub mod config;
pub mod frame;
pub mod hit;
#[cfg(feature = "preview")]
pub mod preview;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shade;
pub mod sphere;

pub use camera::Camera;
pub use config::{ConfigError, RenderConfig};
pub use frame::FrameBuffer;
pub use hit::{Hit, Interval, Record};
pub use ray::Ray;
pub use render::render;
pub use scene::{Primitive, Scene};
pub use sphere::Sphere;
