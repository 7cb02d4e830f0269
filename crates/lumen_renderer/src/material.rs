//! Material trait for surface scattering.

use crate::{
    hittable::HitRecord,
    random::{gen_f32, random_in_unit_sphere},
};
use lumen_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter: how much light survives and where it goes next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some` with attenuation and outgoing ray if the ray scatters,
    /// or `None` if the light is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        // Aim at a random point in the unit sphere sitting on the normal
        let target = rec.p + rec.normal + random_in_unit_sphere(rng);

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, target - rec.p),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered = Ray::new(rec.p, reflected + self.fuzz * random_in_unit_sphere(rng));

        // Fuzz can push the ray below the surface; that light is absorbed
        if scattered.direction().dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered,
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let direction = ray_in.direction();
        let d_dot_n = direction.dot(rec.normal);

        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            // Leaving the medium
            (-rec.normal, self.ior, self.ior * d_dot_n / direction.length())
        } else {
            (rec.normal, 1.0 / self.ior, -d_dot_n / direction.length())
        };

        // One draw per scatter, total internal reflection included
        let roll = gen_f32(rng);
        let scattered_direction = match refract(direction, outward_normal, ni_over_nt) {
            Some(refracted) if roll >= schlick(cosine, self.ior) => refracted,
            _ => reflect(direction, rec.normal),
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, scattered_direction),
        })
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with normal `n` using Snell's law.
///
/// `v` need not be unit length. Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for reflectance
#[inline]
pub fn schlick(cosine: f32, ior: f32) -> f32 {
    let r0 = (1.0 - ior) / (1.0 + ior);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_rng;
    use rand::rngs::mock::StepRng;

    /// RNG whose every `f32` draw is `bits >> 8` scaled into [0, 1).
    fn fixed(bits: u32) -> StepRng {
        StepRng::new(bits as u64, 0)
    }

    /// Every draw is exactly 0.5, so unit-sphere samples are the origin.
    fn half() -> StepRng {
        fixed(0x8000_0000)
    }

    fn record(p: Vec3, normal: Vec3, material: &dyn Material) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            p,
            normal,
            material,
        }
    }

    #[test]
    fn test_lambertian_scatters_around_normal() {
        let mat = Lambertian::new(Color::new(0.8, 0.3, 0.3));
        let rec = record(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &mat);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = scene_rng(11);

        for _ in 0..500 {
            let result = mat.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::new(0.8, 0.3, 0.3));
            assert_eq!(result.scattered.origin(), rec.p);
            assert!((result.scattered.direction() - rec.normal).length() < 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_lambertian_center_sample_follows_normal() {
        let mat = Lambertian::new(Color::splat(0.5));
        let rec = record(Vec3::ZERO, Vec3::Y, &mat);

        let result = mat.scatter(&Ray::default(), &rec, &mut half()).unwrap();
        assert_eq!(result.scattered.direction(), Vec3::Y);
    }

    #[test]
    fn test_material_parameters() {
        assert_eq!(Lambertian::new(Color::new(0.1, 0.2, 0.3)).albedo(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0).albedo(), Color::new(0.8, 0.6, 0.2));
        assert_eq!(Dielectric::new(1.5).ior(), 1.5);
    }

    #[test]
    fn test_lambertian_attenuates_by_albedo() {
        let mat = Lambertian::new(Color::new(0.4, 0.2, 0.1));
        let rec = record(Vec3::ZERO, Vec3::Y, &mat);

        let result = mat.scatter(&Ray::default(), &rec, &mut half()).unwrap();
        assert_eq!(result.attenuation, mat.albedo());
    }

    #[test]
    fn test_metal_fuzz_clamped() {
        assert_eq!(Metal::new(Color::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, -1.0).fuzz(), 0.0);
        assert_eq!(Metal::new(Color::ONE, 0.3).fuzz(), 0.3);
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let mat = Metal::new(Color::new(0.7, 0.6, 0.5), 0.0);
        let rec = record(Vec3::ZERO, Vec3::Y, &mat);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));

        let result = mat.scatter(&ray, &rec, &mut scene_rng(3)).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction() - expected).length() < 1e-6);
        assert_eq!(result.attenuation, Color::new(0.7, 0.6, 0.5));
    }

    #[test]
    fn test_metal_absorbs_when_reflection_goes_below_surface() {
        let mat = Metal::new(Color::ONE, 1.0);
        // Travelling along the normal: reflection points straight into the surface
        let rec = record(Vec3::ZERO, Vec3::Y, &mat);
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);

        assert!(mat.scatter(&ray, &rec, &mut half()).is_none());
    }

    #[test]
    fn test_metal_scatter_iff_above_surface() {
        let mat = Metal::new(Color::new(0.9, 0.8, 0.7), 1.0);
        let mut rng = scene_rng(99);

        for _ in 0..2_000 {
            let normal = random_in_unit_sphere(&mut rng);
            if normal.length_squared() < 1e-4 {
                continue;
            }
            let normal = normal.normalize();
            let incoming = random_in_unit_sphere(&mut rng) - normal * 0.2;
            if incoming.length_squared() < 1e-4 {
                continue;
            }
            let rec = record(Vec3::ONE, normal, &mat);
            let ray = Ray::new(Vec3::ONE - incoming, incoming);

            // Replay the same draws to compute the direction independently
            let mut probe = rng.clone();
            let expected = reflect(incoming.normalize(), normal) + random_in_unit_sphere(&mut probe);

            match mat.scatter(&ray, &rec, &mut rng) {
                Some(result) => {
                    assert!(expected.dot(normal) > 0.0);
                    assert_eq!(result.scattered.direction(), expected);
                    assert!(result.attenuation.cmpge(Color::ZERO).all());
                    assert!(result.attenuation.cmple(Color::ONE).all());
                }
                None => assert!(expected.dot(normal) <= 0.0),
            }
        }
    }

    #[test]
    fn test_schlick_normal_incidence() {
        let r0 = ((1.0f32 - 1.5) / (1.0 + 1.5)).powi(2);
        assert!((schlick(1.0, 1.5) - r0).abs() < 1e-7);
        assert!((schlick(1.0, 1.5) - 0.04).abs() < 1e-6);
        // Grazing incidence reflects everything
        assert!((schlick(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refract_straight_through_at_normal_incidence() {
        let refracted = refract(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, 1.0 / 1.5).unwrap();
        assert!((refracted - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let v = Vec3::new(1.0, 0.1, 0.0);
        assert!(refract(v, Vec3::NEG_Y, 1.5).is_none());
    }

    #[test]
    fn test_dielectric_refracts_above_reflectance() {
        let mat = Dielectric::new(1.5);
        let rec = record(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &mat);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Draw of 0.5 exceeds the 0.04 normal-incidence reflectance
        let result = mat.scatter(&ray, &rec, &mut half()).unwrap();
        assert_eq!(result.attenuation, Color::ONE);
        assert!((result.scattered.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_dielectric_reflects_below_reflectance() {
        let mat = Dielectric::new(1.5);
        let rec = record(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &mat);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Draw of 0.0 is below 0.04
        let result = mat.scatter(&ray, &rec, &mut fixed(0)).unwrap();
        assert_eq!(result.attenuation, Color::ONE);
        assert!((result.scattered.direction() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_dielectric_total_internal_reflection_always_reflects() {
        let mat = Dielectric::new(1.5);
        // Outward normal +y, ray inside the glass heading out at a grazing angle
        let rec = record(Vec3::ZERO, Vec3::Y, &mat);
        let ray = Ray::new(Vec3::new(-1.0, -0.1, 0.0), Vec3::new(1.0, 0.1, 0.0));

        // Largest possible draw still reflects
        let result = mat.scatter(&ray, &rec, &mut fixed(u32::MAX)).unwrap();
        let direction = result.scattered.direction();
        assert!(direction.y < 0.0);
        assert!((direction - Vec3::new(1.0, -0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_dielectric_never_tints() {
        let mat = Dielectric::new(1.5);
        let mut rng = scene_rng(5);

        for _ in 0..500 {
            let normal = random_in_unit_sphere(&mut rng);
            let incoming = random_in_unit_sphere(&mut rng);
            if normal.length_squared() < 1e-4 || incoming.length_squared() < 1e-4 {
                continue;
            }
            let rec = record(Vec3::ZERO, normal.normalize(), &mat);
            let result = mat.scatter(&Ray::new(-incoming, incoming), &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Color::ONE);
        }
    }
}
