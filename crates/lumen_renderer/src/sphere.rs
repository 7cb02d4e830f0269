//! Sphere primitive for ray tracing.

use crate::{
    error::SceneError,
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// A negative radius keeps the same surface but turns the normal inward,
/// which models the inner wall of a hollow glass shell.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere.
    ///
    /// Fails on a zero or non-finite radius, or a non-finite center, since
    /// either would produce NaN normals during rendering.
    pub fn new(center: Vec3, radius: f32, material: M) -> Result<Self, SceneError> {
        if radius == 0.0 || !radius.is_finite() {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::InvalidCenter(center));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &M {
        &self.material
    }
}

impl<M: Material + 'static> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        })
    }
}
