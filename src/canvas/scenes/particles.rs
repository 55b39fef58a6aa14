use std::f64::consts::SQRT_2;

use rand::rngs::SmallRng;

use super::{centred, seeded};
use crate::canvas::projection::{Camera, Vec3};
use crate::canvas::{Primitive, Scene};
use crate::constants::PRIMARY_BLUE;

fn scatter(rng: &mut SmallRng, count: usize, extent: Vec3) -> Vec<Vec3> {
    (0..count)
        .map(|_| Vec3::new(centred(rng, extent.x), centred(rng, extent.y), centred(rng, extent.z)))
        .collect()
}

/// Home page: a rolling sheet of points.
pub struct ParticleWave {
    points: Vec<Vec3>,
    yaw: f64,
}

impl ParticleWave {
    pub const COUNT: usize = 4000;
    const SPREAD: f64 = 20.0;
    const HEIGHT: f64 = 10.0;
    const AMPLITUDE: f64 = 2.0;

    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let points = scatter(&mut rng, Self::COUNT, Vec3::new(Self::SPREAD, Self::HEIGHT, Self::SPREAD));
        Self { points, yaw: 0.0 }
    }
}

impl Scene for ParticleWave {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 8.0)
    }

    fn update(&mut self, t: f64) {
        for p in &mut self.points {
            p.y = (p.x * 0.3 + t).sin() * (p.z * 0.3 + t).cos() * Self::AMPLITUDE;
        }
        self.yaw = t * 0.05;
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        out.extend(self.points.iter().map(|p| Primitive::Point {
            at: p.rotate_y(self.yaw),
            size: 0.05,
            color: PRIMARY_BLUE,
            alpha: 0.8,
        }));
    }

    fn bounds(&self) -> f64 {
        // Rotation about y mixes x and z; y never exceeds the initial scatter.
        (Self::SPREAD / 2.0 * SQRT_2).max(Self::HEIGHT / 2.0)
    }
}

/// Contact page: a cloud that leans toward the pointer.
pub struct ParticleField {
    points: Vec<Vec3>,
    pointer: (f64, f64),
    yaw: f64,
}

impl ParticleField {
    pub const COUNT: usize = 3000;
    const SPREAD: f64 = 25.0;
    /// World units per unit of pointer NDC.
    const POINTER_REACH: f64 = 10.0;
    const PULL_RADIUS: f64 = 5.0;
    const PULL: f64 = 0.01;
    const DRIFT: f64 = 0.002;

    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let points = scatter(&mut rng, Self::COUNT, Vec3::new(Self::SPREAD, Self::SPREAD, Self::SPREAD));
        Self { points, pointer: (0.0, 0.0), yaw: 0.0 }
    }

    fn half(&self) -> f64 {
        Self::SPREAD / 2.0
    }
}

impl Scene for ParticleField {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 15.0)
    }

    fn update(&mut self, t: f64) {
        let half = self.half();
        let target_x = self.pointer.0 * Self::POINTER_REACH;
        let target_y = self.pointer.1 * Self::POINTER_REACH;
        for (i, p) in self.points.iter_mut().enumerate() {
            let dx = target_x - p.x;
            let dy = target_y - p.y;
            let distance = dx.hypot(dy);
            let force = (1.0 - distance / Self::PULL_RADIUS).max(0.0);
            p.x += dx * force * Self::PULL;
            p.y += dy * force * Self::PULL + (t + i as f64).sin() * Self::DRIFT;
            // Drift accumulates across frames; keep the cloud in its box.
            p.x = p.x.clamp(-half, half);
            p.y = p.y.clamp(-half, half);
        }
        self.yaw = t * 0.03;
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        out.extend(self.points.iter().map(|p| Primitive::Point {
            at: p.rotate_y(self.yaw),
            size: 0.03,
            color: PRIMARY_BLUE,
            alpha: 0.6,
        }));
    }

    fn bounds(&self) -> f64 {
        self.half() * SQRT_2
    }

    fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_height_follows_the_closed_form() {
        let mut wave = ParticleWave::new(3);
        wave.update(2.0);
        for p in &wave.points {
            let expected = (p.x * 0.3 + 2.0).sin() * (p.z * 0.3 + 2.0).cos() * 2.0;
            assert!((p.y - expected).abs() < 1e-12);
        }
        assert_eq!(wave.points.len(), ParticleWave::COUNT);
    }

    #[test]
    fn field_moves_toward_the_pointer() {
        let mut field = ParticleField::new(11);
        field.points = vec![Vec3::new(9.0, 9.0, 0.0)];
        field.set_pointer(1.0, 1.0);
        field.update(0.0);
        let p = field.points[0];
        assert!(p.x > 9.0, "{:?}", p);
    }

    #[test]
    fn distant_particles_only_drift() {
        let mut field = ParticleField::new(11);
        field.points = vec![Vec3::new(-10.0, -10.0, 0.0)];
        field.set_pointer(1.0, 1.0);
        field.update(0.0);
        let p = field.points[0];
        assert_eq!(p.x, -10.0);
        assert!((p.y - -10.0).abs() <= ParticleField::DRIFT);
    }
}
