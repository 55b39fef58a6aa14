use std::f64::consts::PI;

use rand::Rng;

use super::seeded;
use crate::canvas::projection::{Camera, Vec3};
use crate::canvas::shapes::{Mesh, Transform};
use crate::canvas::{Primitive, Scene};
use crate::constants::{AMBER, CYAN, GREEN, PINK, PRIMARY_BLUE, PURPLE};

struct Floater {
    mesh: Mesh,
    origin: Vec3,
    color: &'static str,
    speed: f64,
    transform: Transform,
}

impl Floater {
    fn new(mesh: Mesh, origin: Vec3, color: &'static str, speed: f64) -> Self {
        Self { mesh, origin, color, speed, transform: Transform::at(origin) }
    }

    /// Farthest any vertex can get from the world origin given `bob` of vertical travel.
    fn reach(&self, bob: f64) -> f64 {
        self.origin.max_abs() + bob + self.mesh.radius()
    }
}

/// About page: six tumbling wireframe solids.
pub struct FloatingShapes {
    shapes: Vec<Floater>,
}

impl FloatingShapes {
    const BOB: f64 = 0.5;

    pub fn new() -> Self {
        let shapes = vec![
            Floater::new(Mesh::cube(1.0), Vec3::new(-4.0, 2.0, -2.0), PRIMARY_BLUE, 0.5),
            Floater::new(Mesh::sphere(0.5, 8, 12), Vec3::new(4.0, -1.0, -3.0), PURPLE, 0.7),
            Floater::new(Mesh::torus(0.5, 0.2, 8, 24), Vec3::new(-3.0, -2.0, -1.0), PINK, 0.6),
            Floater::new(Mesh::octahedron(0.6), Vec3::new(3.0, 2.0, -4.0), CYAN, 0.8),
            Floater::new(Mesh::cube(1.0), Vec3::new(0.0, 3.0, -2.0), GREEN, 0.4),
            Floater::new(Mesh::sphere(0.5, 8, 12), Vec3::new(-5.0, 0.0, -5.0), AMBER, 0.5),
        ];
        Self { shapes }
    }
}

impl Default for FloatingShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FloatingShapes {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 8.0)
    }

    fn update(&mut self, t: f64) {
        for shape in &mut self.shapes {
            let phase = t * shape.speed;
            shape.transform = Transform::at(Vec3::new(
                shape.origin.x,
                shape.origin.y + phase.sin() * Self::BOB,
                shape.origin.z,
            ))
            .rotated(Vec3::new(phase * 0.5, phase * 0.3, 0.0));
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for shape in &self.shapes {
            shape.mesh.emit(&shape.transform, shape.color, 0.6, out);
        }
    }

    fn bounds(&self) -> f64 {
        self.shapes.iter().map(|s| s.reach(Self::BOB)).fold(0.0, f64::max)
    }
}

struct Award {
    radius: f64,
    speed: f64,
    color: &'static str,
    transform: Transform,
}

/// Certifications page: drifting certificate slabs with award gems in orbit.
pub struct FloatingCertificates {
    cards: Vec<Floater>,
    awards: Vec<Award>,
    award_mesh: Mesh,
}

impl FloatingCertificates {
    const BOB: f64 = 0.3;

    pub fn new() -> Self {
        let cards = [
            Vec3::new(-4.0, 1.0, -3.0),
            Vec3::new(4.0, -1.0, -4.0),
            Vec3::new(-3.0, -2.0, -2.0),
            Vec3::new(3.0, 2.0, -5.0),
            Vec3::new(0.0, 0.0, -3.0),
        ]
        .into_iter()
        .map(|origin| Floater::new(Mesh::cuboid(1.5, 1.0, 0.1), origin, PRIMARY_BLUE, 1.0))
        .collect();

        let awards = [(5.0, 0.3, PRIMARY_BLUE), (6.0, 0.4, PURPLE), (4.5, 0.35, GREEN)]
            .into_iter()
            .map(|(radius, speed, color)| Award {
                radius,
                speed,
                color,
                transform: Transform::at(Vec3::new(radius, 0.0, 0.0)),
            })
            .collect();

        Self { cards, awards, award_mesh: Mesh::octahedron(0.4) }
    }
}

impl Default for FloatingCertificates {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FloatingCertificates {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 10.0)
    }

    fn update(&mut self, t: f64) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            let offset = i as f64;
            card.transform = Transform::at(Vec3::new(
                card.origin.x,
                card.origin.y + (t + offset).sin() * Self::BOB,
                card.origin.z,
            ))
            .rotated(Vec3::new(
                (t * 0.2 + offset).cos() * 0.1,
                (t * 0.3 + offset).sin() * 0.2,
                0.0,
            ));
        }
        for award in &mut self.awards {
            let angle = t * award.speed;
            award.transform = Transform::at(Vec3::new(angle.cos() * award.radius, 0.0, angle.sin() * award.radius))
                .rotated(Vec3::new(0.0, t * 0.5, 0.0));
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for card in &self.cards {
            card.mesh.emit(&card.transform, card.color, 0.3, out);
        }
        for award in &self.awards {
            self.award_mesh.emit(&award.transform, award.color, 0.6, out);
        }
    }

    fn bounds(&self) -> f64 {
        let cards = self.cards.iter().map(|c| c.reach(Self::BOB)).fold(0.0, f64::max);
        let awards = self.awards.iter().map(|a| a.radius).fold(0.0, f64::max) + self.award_mesh.radius();
        cards.max(awards)
    }
}

/// Agriculture traceability page: a 4×3 wall of spinning blocks.
pub struct BlockchainCubes {
    cubes: Vec<Floater>,
    /// Initial Euler angles per cube.
    spin: Vec<Vec3>,
}

impl BlockchainCubes {
    pub const COUNT: usize = 12;
    const BOB: f64 = 0.3;

    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let mut cubes = Vec::with_capacity(Self::COUNT);
        let mut spin = Vec::with_capacity(Self::COUNT);
        for i in 0..Self::COUNT {
            let origin = Vec3::new(((i % 4) as f64 - 1.5) * 3.0, (i / 4) as f64 * 3.0 - 3.0, -5.0);
            let angles = Vec3::new(rng.gen::<f64>() * PI, rng.gen::<f64>() * PI, rng.gen::<f64>() * PI);
            let speed = 0.3 + rng.gen::<f64>() * 0.3;
            let mut cube = Floater::new(Mesh::cube(0.8), origin, GREEN, speed);
            cube.transform = cube.transform.rotated(angles);
            cubes.push(cube);
            spin.push(angles);
        }
        Self { cubes, spin }
    }
}

impl Scene for BlockchainCubes {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 12.0)
    }

    fn update(&mut self, t: f64) {
        for (i, (cube, angles)) in self.cubes.iter_mut().zip(&self.spin).enumerate() {
            let phase = t * cube.speed;
            cube.transform = Transform::at(Vec3::new(
                cube.origin.x,
                cube.origin.y + (phase + i as f64).sin() * Self::BOB,
                cube.origin.z,
            ))
            .rotated(Vec3::new(angles.x + phase * 0.5, angles.y + phase * 0.3, angles.z));
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for cube in &self.cubes {
            cube.mesh.emit(&cube.transform, cube.color, 0.6, out);
        }
    }

    fn bounds(&self) -> f64 {
        self.cubes.iter().map(|c| c.reach(Self::BOB)).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubes_form_a_four_by_three_wall() {
        let scene = BlockchainCubes::new(1);
        assert_eq!(scene.cubes.len(), BlockchainCubes::COUNT);
        assert_eq!(scene.cubes[0].origin, Vec3::new(-4.5, -3.0, -5.0));
        assert_eq!(scene.cubes[11].origin, Vec3::new(4.5, 3.0, -5.0));
    }

    #[test]
    fn shapes_bob_around_their_origin() {
        let mut scene = FloatingShapes::new();
        scene.update(std::f64::consts::PI);
        // speed 0.5 at t = π puts the first shape at the top of its bob
        let y = scene.shapes[0].transform.position.y;
        assert!((y - 2.5).abs() < 1e-9, "{}", y);
    }

    #[test]
    fn awards_orbit_at_their_radius() {
        let mut scene = FloatingCertificates::new();
        scene.update(3.7);
        for award in &scene.awards {
            let p = award.transform.position;
            assert!((p.x.hypot(p.z) - award.radius).abs() < 1e-9);
        }
    }
}
