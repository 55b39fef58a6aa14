use std::f64::consts::{FRAC_PI_6, TAU};

use rand::Rng;

use super::{centred, seeded};
use crate::canvas::projection::{Camera, Vec3};
use crate::canvas::{Primitive, Scene};
use crate::constants::PRIMARY_BLUE;

/// Projects page: a tilted lattice rippling like a sheet.
pub struct GridNetwork {
    /// Row-major `SIZE × SIZE` lattice, untilted.
    nodes: Vec<Vec3>,
}

impl GridNetwork {
    pub const SIZE: usize = 15;
    const SPACING: f64 = 2.0;
    const AMPLITUDE: f64 = 1.5;
    const TILT: f64 = FRAC_PI_6;

    pub fn new() -> Self {
        let half = Self::SIZE as f64 / 2.0;
        let mut nodes = Vec::with_capacity(Self::SIZE * Self::SIZE);
        for i in 0..Self::SIZE {
            for j in 0..Self::SIZE {
                nodes.push(Vec3::new(
                    (i as f64 - half) * Self::SPACING,
                    0.0,
                    (j as f64 - half) * Self::SPACING,
                ));
            }
        }
        Self { nodes }
    }

    fn index(i: usize, j: usize) -> usize {
        i * Self::SIZE + j
    }

    fn world(&self, index: usize) -> Vec3 {
        self.nodes[index].rotate_x(Self::TILT)
    }
}

impl Default for GridNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GridNetwork {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 5.0, 12.0)
    }

    fn update(&mut self, t: f64) {
        for node in &mut self.nodes {
            node.y = (node.x * 0.3 + t).sin() * (node.z * 0.3 + t * 0.5).cos() * Self::AMPLITUDE;
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for i in 0..Self::SIZE {
            for j in 0..Self::SIZE {
                let here = self.world(Self::index(i, j));
                if i + 1 < Self::SIZE {
                    out.push(Primitive::Line {
                        from: here,
                        to: self.world(Self::index(i + 1, j)),
                        color: PRIMARY_BLUE,
                        alpha: 0.3,
                    });
                }
                if j + 1 < Self::SIZE {
                    out.push(Primitive::Line {
                        from: here,
                        to: self.world(Self::index(i, j + 1)),
                        color: PRIMARY_BLUE,
                        alpha: 0.3,
                    });
                }
            }
        }
        out.extend(
            (0..self.nodes.len()).map(|n| Primitive::Point { at: self.world(n), size: 0.1, color: PRIMARY_BLUE, alpha: 0.8 }),
        );
    }

    fn bounds(&self) -> f64 {
        // Rotation mixes y and z, each at most the lattice half-width plus the wave height.
        Self::SIZE as f64 / 2.0 * Self::SPACING + Self::AMPLITUDE
    }
}

struct Neuron {
    position: Vec3,
    speed: f64,
    phase: f64,
}

/// InnoFeed page: a slowly turning chain of pulsing nodes.
pub struct NeuralNetwork {
    neurons: Vec<Neuron>,
    yaw: f64,
    time: f64,
}

impl NeuralNetwork {
    pub const COUNT: usize = 50;
    const EXTENT: Vec3 = Vec3::new(20.0, 15.0, 10.0);

    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let neurons = (0..Self::COUNT)
            .map(|_| Neuron {
                position: Vec3::new(
                    centred(&mut rng, Self::EXTENT.x),
                    centred(&mut rng, Self::EXTENT.y),
                    centred(&mut rng, Self::EXTENT.z),
                ),
                speed: 0.5 + rng.gen::<f64>() * 0.5,
                phase: rng.gen::<f64>() * TAU,
            })
            .collect();
        Self { neurons, yaw: 0.0, time: 0.0 }
    }
}

impl Scene for NeuralNetwork {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 15.0)
    }

    fn update(&mut self, t: f64) {
        self.time = t;
        self.yaw = t * 0.1;
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        let world: Vec<Vec3> = self.neurons.iter().map(|n| n.position.rotate_y(self.yaw)).collect();
        out.extend(world.windows(2).map(|pair| Primitive::Line {
            from: pair[0],
            to: pair[1],
            color: PRIMARY_BLUE,
            alpha: 0.2,
        }));
        out.extend(self.neurons.iter().zip(&world).map(|(n, &at)| {
            let pulse = 1.0 + 0.3 * (self.time * n.speed + n.phase).sin();
            Primitive::Point { at, size: 0.2 * pulse, color: PRIMARY_BLUE, alpha: 0.6 }
        }));
    }

    fn bounds(&self) -> f64 {
        let e = Self::EXTENT;
        (e.x / 2.0).hypot(e.z / 2.0).max(e.y / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_links_each_node_to_its_forward_neighbours() {
        let grid = GridNetwork::new();
        let mut out = Vec::new();
        grid.primitives(&mut out);
        let lines = out.iter().filter(|p| matches!(p, Primitive::Line { .. })).count();
        let points = out.iter().filter(|p| matches!(p, Primitive::Point { .. })).count();
        let n = GridNetwork::SIZE;
        assert_eq!(lines, 2 * n * (n - 1));
        assert_eq!(points, n * n);
    }

    #[test]
    fn grid_wave_uses_half_speed_on_z() {
        let mut grid = GridNetwork::new();
        grid.update(1.0);
        let node = grid.nodes[GridNetwork::index(3, 9)];
        let expected = (node.x * 0.3 + 1.0).sin() * (node.z * 0.3 + 0.5).cos() * 1.5;
        assert!((node.y - expected).abs() < 1e-12);
    }

    #[test]
    fn network_chains_consecutive_neurons() {
        let net = NeuralNetwork::new(5);
        let mut out = Vec::new();
        net.primitives(&mut out);
        let lines = out.iter().filter(|p| matches!(p, Primitive::Line { .. })).count();
        assert_eq!(lines, NeuralNetwork::COUNT - 1);
    }
}
