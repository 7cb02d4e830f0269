//! Error types for scene and camera construction and for rendering.
//!
//! Ray misses and absorbed rays are not errors; they are `None` results of
//! `Hittable::hit` and `Material::scatter`. Everything here is a
//! configuration problem caught before the first ray is traced.

use lumen_math::Vec3;
use thiserror::Error;

/// Degenerate camera configurations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CameraError {
    #[error("Aspect ratio must be finite and positive, got {0}")]
    InvalidAspect(f32),

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Focus distance must be finite and positive, got {0}")]
    InvalidFocusDistance(f32),

    #[error("Aperture must be finite and non-negative, got {0}")]
    InvalidAperture(f32),

    #[error("Camera look_from and look_at are the same point: {0}")]
    ZeroViewDirection(Vec3),

    #[error("Up vector {up} is zero or parallel to the view direction {view}")]
    DegenerateUp { up: Vec3, view: Vec3 },
}

/// Invalid scene geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be finite and non-zero, got {0}")]
    InvalidRadius(f32),

    #[error("Sphere center must be finite, got {0}")]
    InvalidCenter(Vec3),
}

/// Errors surfaced by the frame driver and output writers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
