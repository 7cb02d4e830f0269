//! Thin-lens camera for ray generation.

use crate::{error::CameraError, random::random_in_unit_disk};
use lumen_math::{Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Maps image-plane coordinates `(s, t)` in `[0, 1]^2` (left to right,
/// bottom to top) to world-space rays. Built through [`CameraBuilder`],
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal basis: w points backwards, away from look_at
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

/// Camera settings, validated by [`CameraBuilder::build`].
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    vfov: f32,       // Vertical field of view in degrees
    aspect: f32,     // Width over height
    aperture: f32,   // Lens diameter, 0 for a pinhole
    focus_dist: f32, // Distance from camera to plane of perfect focus
}

impl CameraBuilder {
    /// Default settings: at the origin looking down -z, 90 degree vertical
    /// field of view, 2:1 aspect, pinhole lens focused at distance 1.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect: 2.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set aspect ratio (width / height).
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, aperture: f32, focus_dist: f32) -> Self {
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Validate the settings and precompute the viewport.
    pub fn build(self) -> Result<Camera, CameraError> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(CameraError::InvalidAspect(self.aspect));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(CameraError::InvalidFov(self.vfov));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(CameraError::InvalidFocusDistance(self.focus_dist));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return Err(CameraError::InvalidAperture(self.aperture));
        }

        let view = self.look_from - self.look_at;
        if !view.is_finite() || view.length_squared() == 0.0 {
            return Err(CameraError::ZeroViewDirection(self.look_from));
        }
        let w = view.normalize();

        let side = self.vup.cross(w);
        if !side.is_finite() || side.length_squared() < 1e-12 {
            return Err(CameraError::DegenerateUp {
                up: self.vup,
                view: -w,
            });
        }
        let u = side.normalize();
        let v = w.cross(u);

        let theta = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect * half_height;
        let focus = self.focus_dist;

        let origin = self.look_from;
        let lower_left_corner =
            origin - half_width * focus * u - half_height * focus * v - focus * w;

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal: 2.0 * half_width * focus * u,
            vertical: 2.0 * half_height * focus * v,
            u,
            v,
            w,
            lens_radius: self.aperture / 2.0,
        })
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Start configuring a camera from the default settings.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    /// Generate the ray through image-plane point `(s, t)`.
    ///
    /// With a non-zero aperture the origin is jittered over the lens disk,
    /// which blurs everything off the focus plane. A pinhole camera draws
    /// nothing from `rng`.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// Unit vector pointing from the camera toward the scene.
    pub fn forward(&self) -> Vec3 {
        -self.w
    }
}

impl Default for Camera {
    /// The fixed pinhole camera: 4x2 viewport at z = -1, lower-left (-2, -1, -1).
    fn default() -> Self {
        let w = Vec3::Z;
        let u = Vec3::X;
        let v = Vec3::Y;
        Self {
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::new(-2.0, -1.0, -1.0),
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.0, 0.0),
            u,
            v,
            w,
            lens_radius: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_rng;
    use rand::rngs::mock::StepRng;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn test_default_builder_matches_default_camera() {
        let built = Camera::builder().build().unwrap();
        let fixed = Camera::default();

        assert_close(built.lower_left_corner, fixed.lower_left_corner);
        assert_close(built.horizontal, fixed.horizontal);
        assert_close(built.vertical, fixed.vertical);
        assert_close(built.forward(), Vec3::NEG_Z);
        assert_eq!(built.lens_radius(), 0.0);
    }

    #[test]
    fn test_pinhole_center_ray() {
        let camera = Camera::default();
        // Pinhole must not consume randomness; a stuck RNG would hang the disk sampler
        let mut rng = StepRng::new(0, 0);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_close(ray.direction(), Vec3::NEG_Z);

        let corner = camera.get_ray(0.0, 0.0, &mut rng);
        assert_close(corner.direction(), Vec3::new(-2.0, -1.0, -1.0));
        let top_right = camera.get_ray(1.0, 1.0, &mut rng);
        assert_close(top_right.direction(), Vec3::new(2.0, 1.0, -1.0));
    }

    #[test]
    fn test_orthonormal_basis() {
        let camera = Camera::builder()
            .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_fov(20.0)
            .with_aspect(1.5)
            .with_lens(0.1, 10.0)
            .build()
            .unwrap();

        assert!((camera.u.length() - 1.0).abs() < 1e-6);
        assert!((camera.v.length() - 1.0).abs() < 1e-6);
        assert!(camera.u.dot(camera.v).abs() < 1e-6);
        assert!(camera.u.dot(camera.w).abs() < 1e-6);
        assert_close(camera.forward(), -Vec3::new(13.0, 2.0, 3.0).normalize());
        assert_eq!(camera.lens_radius(), 0.05);
    }

    #[test]
    fn test_thin_lens_rays_converge_on_focus_plane() {
        let focus_dist = 10.0;
        let look_from = Vec3::new(13.0, 2.0, 3.0);
        let camera = Camera::builder()
            .with_position(look_from, Vec3::ZERO, Vec3::Y)
            .with_fov(20.0)
            .with_aspect(1.5)
            .with_lens(2.0, focus_dist)
            .build()
            .unwrap();
        let mut rng = scene_rng(17);

        // The viewport center lies on the focus plane
        let focus_point = look_from + camera.forward() * focus_dist;
        for _ in 0..100 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            assert!((ray.origin() - look_from).length() <= 1.0 + 1e-5);
            assert!((ray.origin() - look_from).dot(camera.forward()).abs() < 1e-4);
            assert_close(ray.at(1.0), focus_point);
        }
    }

    #[test]
    fn test_degenerate_cameras_rejected() {
        assert_eq!(
            Camera::builder().with_aspect(0.0).build().err(),
            Some(CameraError::InvalidAspect(0.0))
        );
        assert!(matches!(
            Camera::builder().with_aspect(f32::NAN).build(),
            Err(CameraError::InvalidAspect(_))
        ));
        assert!(matches!(
            Camera::builder().with_fov(180.0).build(),
            Err(CameraError::InvalidFov(_))
        ));
        assert!(matches!(
            Camera::builder().with_lens(0.1, 0.0).build(),
            Err(CameraError::InvalidFocusDistance(_))
        ));
        assert!(matches!(
            Camera::builder().with_lens(-1.0, 1.0).build(),
            Err(CameraError::InvalidAperture(_))
        ));
        assert!(matches!(
            Camera::builder()
                .with_position(Vec3::ONE, Vec3::ONE, Vec3::Y)
                .build(),
            Err(CameraError::ZeroViewDirection(_))
        ));
        assert!(matches!(
            Camera::builder()
                .with_position(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y)
                .build(),
            Err(CameraError::DegenerateUp { .. })
        ));
        assert!(matches!(
            Camera::builder()
                .with_position(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO)
                .build(),
            Err(CameraError::DegenerateUp { .. })
        ));
    }
}
