//! Lumen - CPU Path Tracing
//!
//! A Monte Carlo path tracer for sphere scenes with diffuse, metal and
//! glass surfaces, a thin-lens camera and a sky-gradient background.
//!
//! ```no_run
//! use lumen_renderer::{render, scene_rng, RenderConfig, SceneKind};
//!
//! let kind = SceneKind::Random;
//! let config = RenderConfig::default().with_resolution(400, 300).with_seed(7);
//! let world = kind.build(&mut scene_rng(config.seed))?;
//! let camera = kind.camera(config.aspect_ratio())?;
//! render(&camera, &world, &config)?.save("out.ppm")?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod material;
mod random;
mod renderer;
mod scene;
mod sphere;

pub use camera::{Camera, CameraBuilder};
pub use error::{CameraError, RenderError, SceneError};
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{reflect, refract, schlick, Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use random::{gen_f32, random_in_unit_disk, random_in_unit_sphere, row_rng, scene_rng, RenderRng};
pub use renderer::{
    color_to_rgb, linear_to_gamma, quantize, ray_color, render, render_pixel, render_row, render_serial,
    sky_gradient, RenderConfig, MAX_DEPTH, T_MIN,
};
pub use scene::{glass_scene, metal_scene, random_scene, SceneKind};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
