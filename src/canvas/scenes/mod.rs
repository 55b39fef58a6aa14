//! One background scene per page.

mod floating;
mod networks;
mod orbits;
mod particles;
mod quants;

pub use floating::{BlockchainCubes, FloatingCertificates, FloatingShapes};
pub use networks::{GridNetwork, NeuralNetwork};
pub use orbits::{DocumentRings, OrbitingSkills};
pub use particles::{ParticleField, ParticleWave};
pub use quants::QuantsScene;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub(crate) fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Uniform sample in `[-extent / 2, extent / 2)`.
pub(crate) fn centred(rng: &mut SmallRng, extent: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * extent
}
