//! Scene presets: the procedural sphere field and two small fixed scenes.

use crate::{
    error::{CameraError, SceneError},
    random::gen_f32,
    Camera, Color, Dielectric, HittableList, Lambertian, Metal, Sphere,
};
use lumen_math::Vec3;
use rand::RngCore;

/// Radius of the small spheres scattered over the ground.
const SMALL_RADIUS: f32 = 0.2;

/// Small spheres keep this distance from the spot next to the metal sphere.
const CLEARANCE: f32 = 0.9;

/// Which scene to build, together with its camera and default settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Hundreds of random small spheres around three large ones.
    #[default]
    Random,
    /// Four spheres: diffuse, two fuzzy metals, diffuse ground.
    Metal,
    /// Five spheres including a hollow glass bubble.
    Glass,
}

impl SceneKind {
    /// Build the scene. Only [`SceneKind::Random`] draws from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> Result<HittableList, SceneError> {
        match self {
            SceneKind::Random => random_scene(rng),
            SceneKind::Metal => metal_scene(),
            SceneKind::Glass => glass_scene(),
        }
    }

    /// Camera framing this scene at the given aspect ratio.
    pub fn camera(self, aspect: f32) -> Result<Camera, CameraError> {
        match self {
            SceneKind::Random => Camera::builder()
                .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
                .with_fov(20.0)
                .with_aspect(aspect)
                .with_lens(0.1, 10.0)
                .build(),
            SceneKind::Metal | SceneKind::Glass => Camera::builder().with_aspect(aspect).build(),
        }
    }

    /// Default output resolution (width, height).
    pub fn default_resolution(self) -> (u32, u32) {
        match self {
            SceneKind::Random => (1200, 800),
            SceneKind::Metal | SceneKind::Glass => (1200, 600),
        }
    }

    /// Default samples per pixel.
    pub fn default_samples(self) -> u32 {
        match self {
            SceneKind::Random => 10,
            SceneKind::Metal | SceneKind::Glass => 100,
        }
    }
}

/// Procedural field of small spheres on a huge ground sphere, plus three
/// large spheres (glass, diffuse, mirror) in the middle.
pub fn random_scene(rng: &mut dyn RngCore) -> Result<HittableList, SceneError> {
    let mut world = HittableList::new();

    // Ground
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    )?));

    let reserved = Vec3::new(4.0, SMALL_RADIUS, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - reserved).length() <= CLEARANCE {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse; products of two draws bias toward dark, saturated colors
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                world.add(Box::new(Sphere::new(center, SMALL_RADIUS, Lambertian::new(albedo))?));
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                );
                let fuzz = 0.5 * gen_f32(rng);
                world.add(Box::new(Sphere::new(center, SMALL_RADIUS, Metal::new(albedo, fuzz))?));
            } else {
                // Glass
                world.add(Box::new(Sphere::new(center, SMALL_RADIUS, Dielectric::new(1.5))?));
            }
        }
    }

    world.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Dielectric::new(1.5))?));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Metal::new(Color::new(0.7, 0.6, 0.5), 0.0),
    )?));

    log::debug!("Built random scene with {} spheres", world.len());
    Ok(world)
}

/// Diffuse sphere between two fuzzy metal spheres on a diffuse ground.
pub fn metal_scene() -> Result<HittableList, SceneError> {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.8, 0.3, 0.3)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 1.0),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.8, 0.8), 0.3),
    )?));

    Ok(world)
}

/// Diffuse, mirror and hollow glass spheres on a diffuse ground.
///
/// The glass bubble is a sphere of radius 0.5 with a second, negative-radius
/// sphere of 0.45 inside it forming the inner wall.
pub fn glass_scene() -> Result<HittableList, SceneError> {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Lambertian::new(Color::new(0.1, 0.2, 0.5)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )?));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 0.0),
    )?));
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, Dielectric::new(1.5))?));
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, Dielectric::new(1.5))?));

    Ok(world)
}
