use super::config::FieldConfig;
use super::kernel::{displace, DisplacedPoint, KernelParams};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-instance vertex data uploaded once at mount: base position + seed.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub seed: f32,
}

/// Fixed set of particle base positions.
///
/// Positions and seeds are fixed at creation; the rendered positions are
/// derived each frame by the displacement kernel and never written back.
#[derive(Clone, Debug)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    seeds: Vec<f32>,
}

impl PointCloud {
    /// Sample `count` points uniformly inside `[-half_extents, half_extents)`,
    /// each with a random seed in `[0, 1)`.
    pub fn generate<R: Rng + ?Sized>(count: usize, half_extents: Vec3, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut seeds = Vec::with_capacity(count);
        for _ in 0..count {
            let unit = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
            positions.push((unit - 0.5) * 2.0 * half_extents);
            seeds.push(rng.gen::<f32>());
        }
        Self { positions, seeds }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(config.count, config.half_extents, &mut rng)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn seeds(&self) -> &[f32] {
        &self.seeds
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.positions
            .iter()
            .zip(&self.seeds)
            .map(|(p, s)| ParticleInstance {
                position: p.to_array(),
                seed: *s,
            })
            .collect()
    }

    /// Evaluate the kernel for every point on the CPU (reference path; the
    /// renderer does the same work in the vertex shader).
    pub fn displaced<'a>(
        &'a self,
        params: &'a KernelParams,
        t: f32,
        pointer: Vec2,
    ) -> impl Iterator<Item = DisplacedPoint> + 'a {
        self.positions
            .iter()
            .map(move |p| displace(params, *p, t, pointer))
    }
}
