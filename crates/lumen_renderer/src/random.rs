//! Random sampling helpers.
//!
//! Every sampler takes an explicit `&mut dyn RngCore` so each render row
//! (and the scene builder) owns an independent stream.

use lumen_math::Vec3;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used for rendering and scene generation.
///
/// Pinned to a concrete algorithm so a seed reproduces the same image on
/// every platform.
pub type RenderRng = Xoshiro256PlusPlus;

/// Odd constant used to spread row indices across the seed space.
const ROW_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Rejection-sample a point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Rejection-sample a point strictly inside the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), 0.0) - Vec3::new(1.0, 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generator for procedural scene construction.
pub fn scene_rng(seed: u64) -> RenderRng {
    RenderRng::seed_from_u64(seed)
}

/// Generator for one image row.
///
/// Depends only on `(seed, row)`, so the rendered image does not depend on
/// how rows are distributed across threads.
pub fn row_rng(seed: u64, row: usize) -> RenderRng {
    let row_key = (row as u64).wrapping_add(1).wrapping_mul(ROW_SEED_STRIDE);
    RenderRng::seed_from_u64(seed ^ row_key)
}
