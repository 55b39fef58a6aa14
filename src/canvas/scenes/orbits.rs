use std::f64::consts::FRAC_PI_2;

use crate::canvas::projection::{Camera, Vec3};
use crate::canvas::shapes::{Mesh, Transform};
use crate::canvas::{Primitive, Scene};
use crate::constants::{AMBER, GREEN, PINK, PRIMARY_BLUE, PURPLE};

struct Orbiter {
    mesh: Mesh,
    orbit: f64,
    speed: f64,
    color: &'static str,
    transform: Transform,
}

struct SpinningGlyph {
    text: &'static str,
    origin: Vec3,
    speed: f64,
    yaw: f64,
    pitch: f64,
}

/// Skills page: wireframe spheres circling the centre, code brackets spinning behind them.
pub struct OrbitingSkills {
    spheres: Vec<Orbiter>,
    glyphs: Vec<SpinningGlyph>,
}

impl OrbitingSkills {
    /// Self-rotation per second (the spheres spin as they orbit).
    const SPIN: f64 = 0.6;
    const GLYPH_SIZE: f64 = 1.0;

    pub fn new() -> Self {
        let spheres = [
            (0.3, 0.5, PRIMARY_BLUE, 3.0),
            (0.35, 0.7, PURPLE, 4.0),
            (0.32, 0.6, PINK, 5.0),
            (0.4, 0.4, GREEN, 3.5),
            (0.28, 0.8, AMBER, 4.5),
        ]
        .into_iter()
        .map(|(size, speed, color, orbit)| Orbiter {
            mesh: Mesh::sphere(size, 6, 10),
            orbit,
            speed,
            color,
            transform: Transform::at(Vec3::new(orbit, 0.0, 0.0)),
        })
        .collect();

        let glyphs = [
            ("<>", Vec3::new(-3.0, 2.0, -3.0), 0.3),
            ("{}", Vec3::new(3.0, -2.0, -4.0), 0.4),
            ("[]", Vec3::new(0.0, 3.0, -2.0), 0.35),
            ("()", Vec3::new(-4.0, -1.0, -5.0), 0.45),
        ]
        .into_iter()
        .map(|(text, origin, speed)| SpinningGlyph { text, origin, speed, yaw: 0.0, pitch: 0.0 })
        .collect();

        Self { spheres, glyphs }
    }
}

impl Default for OrbitingSkills {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for OrbitingSkills {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 10.0)
    }

    fn update(&mut self, t: f64) {
        for sphere in &mut self.spheres {
            let angle = t * sphere.speed;
            sphere.transform =
                Transform::at(Vec3::new(angle.cos() * sphere.orbit, 0.0, angle.sin() * sphere.orbit))
                    .rotated(Vec3::new(t * Self::SPIN, t * Self::SPIN, 0.0));
        }
        for glyph in &mut self.glyphs {
            glyph.yaw = t * glyph.speed;
            glyph.pitch = (t * glyph.speed * 0.5).sin() * 0.3;
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for sphere in &self.spheres {
            sphere.mesh.emit(&sphere.transform, sphere.color, 0.7, out);
        }
        out.extend(self.glyphs.iter().map(|g| Primitive::Glyph {
            at: g.origin,
            text: g.text,
            size: Self::GLYPH_SIZE,
            color: PRIMARY_BLUE,
            alpha: 0.5,
            squash: (g.yaw.cos(), g.pitch.cos()),
        }));
    }

    fn bounds(&self) -> f64 {
        let spheres = self.spheres.iter().map(|s| s.orbit + s.mesh.radius()).fold(0.0, f64::max);
        let glyphs = self.glyphs.iter().map(|g| g.origin.max_abs()).fold(0.0, f64::max);
        spheres.max(glyphs)
    }
}

struct Ring {
    speed: f64,
    /// Even rings tumble about x, odd rings about z.
    about_x: bool,
    color: &'static str,
    mesh: Mesh,
    transform: Transform,
}

/// Tax Chain page: nested rings turning on alternating axes.
pub struct DocumentRings {
    rings: Vec<Ring>,
}

impl DocumentRings {
    pub const COUNT: usize = 5;
    const TUBE: f64 = 0.05;

    pub fn new() -> Self {
        let rings = (0..Self::COUNT)
            .map(|i| {
                let radius = 2.0 + i as f64 * 0.8;
                Ring {
                    speed: 0.2 + i as f64 * 0.1,
                    about_x: i % 2 == 0,
                    color: if i % 2 == 0 { PURPLE } else { PINK },
                    mesh: Mesh::torus(radius, Self::TUBE, 4, 48),
                    transform: Transform::at(Vec3::ZERO).rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
                }
            })
            .collect();
        Self { rings }
    }
}

impl Default for DocumentRings {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for DocumentRings {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 10.0)
    }

    fn update(&mut self, t: f64) {
        for ring in &mut self.rings {
            let angle = t * ring.speed;
            let rotation = if ring.about_x {
                Vec3::new(angle, 0.0, 0.0)
            } else {
                Vec3::new(FRAC_PI_2, 0.0, angle)
            };
            ring.transform = Transform::at(Vec3::ZERO).rotated(rotation);
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for ring in &self.rings {
            ring.mesh.emit(&ring.transform, ring.color, 0.6, out);
        }
    }

    fn bounds(&self) -> f64 {
        self.rings.iter().map(|r| r.mesh.radius()).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_grow_outward_and_alternate_axes() {
        let scene = DocumentRings::new();
        let radii: Vec<f64> = scene.rings.iter().map(|r| r.mesh.radius()).collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]));
        assert!((radii[4] - (2.0 + 4.0 * 0.8 + DocumentRings::TUBE)).abs() < 1e-9);
        let axes: Vec<bool> = scene.rings.iter().map(|r| r.about_x).collect();
        assert_eq!(axes, vec![true, false, true, false, true]);
    }

    #[test]
    fn spheres_stay_on_their_orbit() {
        let mut scene = OrbitingSkills::new();
        scene.update(12.34);
        for sphere in &scene.spheres {
            let p = sphere.transform.position;
            assert!((p.x.hypot(p.z) - sphere.orbit).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn glyphs_turn_edge_on() {
        let mut scene = OrbitingSkills::new();
        // First glyph spins at 0.3 rad/s: a quarter turn at t = π/0.6.
        scene.update(FRAC_PI_2 / 0.3);
        let mut out = Vec::new();
        scene.primitives(&mut out);
        let squash = out
            .iter()
            .find_map(|p| match p {
                Primitive::Glyph { text: "<>", squash, .. } => Some(squash.0),
                _ => None,
            })
            .unwrap();
        assert!(squash.abs() < 1e-9);
    }
}
