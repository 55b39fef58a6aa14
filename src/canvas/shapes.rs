//! Wireframe meshes, built once and emitted as line segments every frame.

use std::f64::consts::TAU;

use super::projection::Vec3;
use super::Primitive;

/// Placement of a mesh in world space. Rotation is applied before translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn apply(&self, local: Vec3) -> Vec3 {
        local.rotate(self.rotation).add(self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Mesh {
    /// Axis-aligned box centred on the origin.
    pub fn cuboid(w: f64, h: f64, d: f64) -> Self {
        let (x, y, z) = (w / 2.0, h / 2.0, d / 2.0);
        let vertices = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -x } else { x },
                    if i & 2 == 0 { -y } else { y },
                    if i & 4 == 0 { -z } else { z },
                )
            })
            .collect();
        let mut edges = Vec::with_capacity(12);
        for a in 0..8usize {
            for bit in [1, 2, 4] {
                if a & bit == 0 {
                    edges.push((a, a | bit));
                }
            }
        }
        Self { vertices, edges }
    }

    pub fn cube(size: f64) -> Self {
        Self::cuboid(size, size, size)
    }

    pub fn octahedron(radius: f64) -> Self {
        let r = radius;
        let vertices = vec![
            Vec3::new(r, 0.0, 0.0),
            Vec3::new(-r, 0.0, 0.0),
            Vec3::new(0.0, r, 0.0),
            Vec3::new(0.0, -r, 0.0),
            Vec3::new(0.0, 0.0, r),
            Vec3::new(0.0, 0.0, -r),
        ];
        let mut edges = Vec::with_capacity(12);
        for a in 0..6 {
            for b in (a + 1)..6 {
                // Opposite poles are the only pairs not joined.
                if a / 2 != b / 2 {
                    edges.push((a, b));
                }
            }
        }
        Self { vertices, edges }
    }

    /// Latitude/longitude sphere.
    pub fn sphere(radius: f64, rings: usize, segments: usize) -> Self {
        let rings = rings.max(2);
        let segments = segments.max(3);
        let mut vertices = Vec::with_capacity((rings + 1) * segments);
        for r in 0..=rings {
            let phi = std::f64::consts::PI * r as f64 / rings as f64;
            for s in 0..segments {
                let theta = TAU * s as f64 / segments as f64;
                vertices.push(Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                ));
            }
        }
        let idx = |r: usize, s: usize| r * segments + s % segments;
        let mut edges = Vec::new();
        for r in 0..=rings {
            for s in 0..segments {
                if r > 0 && r < rings {
                    edges.push((idx(r, s), idx(r, s + 1)));
                }
                if r < rings {
                    edges.push((idx(r, s), idx(r + 1, s)));
                }
            }
        }
        Self { vertices, edges }
    }

    /// Torus in the xy plane around the z axis.
    pub fn torus(radius: f64, tube: f64, radial: usize, tubular: usize) -> Self {
        let radial = radial.max(3);
        let tubular = tubular.max(3);
        let mut vertices = Vec::with_capacity(radial * tubular);
        for i in 0..tubular {
            let u = TAU * i as f64 / tubular as f64;
            for j in 0..radial {
                let v = TAU * j as f64 / radial as f64;
                vertices.push(Vec3::new(
                    (radius + tube * v.cos()) * u.cos(),
                    (radius + tube * v.cos()) * u.sin(),
                    tube * v.sin(),
                ));
            }
        }
        let idx = |i: usize, j: usize| (i % tubular) * radial + j % radial;
        let mut edges = Vec::with_capacity(radial * tubular * 2);
        for i in 0..tubular {
            for j in 0..radial {
                edges.push((idx(i, j), idx(i + 1, j)));
                edges.push((idx(i, j), idx(i, j + 1)));
            }
        }
        Self { vertices, edges }
    }

    /// Largest distance of any vertex from the mesh origin.
    pub fn radius(&self) -> f64 {
        self.vertices.iter().map(|v| v.length()).fold(0.0, f64::max)
    }

    pub fn emit(
        &self,
        transform: &Transform,
        color: &'static str,
        alpha: f64,
        out: &mut Vec<Primitive>,
    ) {
        let world: Vec<Vec3> = self.vertices.iter().map(|v| transform.apply(*v)).collect();
        out.extend(self.edges.iter().map(|&(a, b)| Primitive::Line {
            from: world[a],
            to: world[b],
            color,
            alpha,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_unit_edges() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        for &(a, b) in &cube.edges {
            assert!((cube.vertices[a].sub(cube.vertices[b]).length() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn octahedron_skips_opposite_poles() {
        let o = Mesh::octahedron(1.0);
        assert_eq!(o.edges.len(), 12);
        assert!(!o.edges.contains(&(0, 1)));
        assert!((o.radius() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn torus_and_sphere_radii() {
        assert!((Mesh::torus(0.5, 0.2, 8, 24).radius() - 0.7).abs() < 1e-9);
        assert!((Mesh::sphere(0.5, 8, 8).radius() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn emit_produces_one_line_per_edge() {
        let mut out = Vec::new();
        let mesh = Mesh::cube(1.0);
        mesh.emit(&Transform::at(Vec3::new(0.0, 0.0, -5.0)), "#fff", 0.5, &mut out);
        assert_eq!(out.len(), mesh.edges.len());
    }
}
