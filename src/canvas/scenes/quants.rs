use rand::Rng;

use super::seeded;
use crate::canvas::projection::{Camera, Vec3};
use crate::canvas::shapes::{Mesh, Transform};
use crate::canvas::{Primitive, Scene};
use crate::constants::{PRIMARY_BLUE, PURPLE};

struct Bar {
    mesh: Mesh,
    base: Vec3,
    color: &'static str,
}

struct MathGlyph {
    text: &'static str,
    origin: Vec3,
    speed: f64,
    at: Vec3,
    yaw: f64,
}

/// Quants page: a swaying bar chart with maths symbols floating around it.
pub struct QuantsScene {
    bars: Vec<Bar>,
    glyphs: Vec<MathGlyph>,
    sway: f64,
}

impl QuantsScene {
    pub const BAR_COUNT: usize = 12;
    const BAR_WIDTH: f64 = 0.5;
    const MAX_BAR_HEIGHT: f64 = 2.5;
    const GLYPH_SIZE: f64 = 1.5;
    const BOB: f64 = 0.5;
    const SWING: f64 = 0.3;

    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let half = Self::BAR_COUNT as f64 / 2.0;
        let bars = (0..Self::BAR_COUNT)
            .map(|i| {
                let height = rng.gen::<f64>() * (Self::MAX_BAR_HEIGHT - 0.5) + 0.5;
                Bar {
                    mesh: Mesh::cuboid(Self::BAR_WIDTH, height, Self::BAR_WIDTH),
                    base: Vec3::new((i as f64 - half) * 0.8, 0.0, -5.0),
                    color: if i % 2 == 0 { PRIMARY_BLUE } else { PURPLE },
                }
            })
            .collect();

        let glyphs = [
            ("\u{03A3}", Vec3::new(-4.0, 2.0, -2.0), 0.4),
            ("\u{03C0}", Vec3::new(4.0, -1.0, -3.0), 0.5),
            ("\u{222B}", Vec3::new(-3.0, -2.0, -1.0), 0.6),
            ("\u{03BC}", Vec3::new(3.0, 3.0, -4.0), 0.45),
            ("\u{03C3}", Vec3::new(0.0, 2.0, -2.0), 0.55),
            ("\u{03BB}", Vec3::new(-5.0, 0.0, -5.0), 0.5),
            ("\u{0394}", Vec3::new(5.0, 1.0, -3.0), 0.4),
        ]
        .into_iter()
        .map(|(text, origin, speed)| MathGlyph { text, origin, speed, at: origin, yaw: 0.0 })
        .collect();

        Self { bars, glyphs, sway: 0.0 }
    }
}

impl Scene for QuantsScene {
    fn camera(&self) -> Camera {
        Camera::at(0.0, 0.0, 10.0)
    }

    fn update(&mut self, t: f64) {
        self.sway = (t * 0.2).sin() * 0.3;
        for glyph in &mut self.glyphs {
            let phase = t * glyph.speed;
            glyph.yaw = phase * 0.5;
            glyph.at = Vec3::new(
                glyph.origin.x + (phase * 0.3).cos() * Self::SWING,
                glyph.origin.y + phase.sin() * Self::BOB,
                glyph.origin.z,
            );
        }
    }

    fn primitives(&self, out: &mut Vec<Primitive>) {
        for bar in &self.bars {
            // The whole chart turns as one group about the world y axis.
            let mut lines = Vec::with_capacity(bar.mesh.edges.len());
            bar.mesh.emit(&Transform::at(bar.base), bar.color, 0.7, &mut lines);
            out.extend(lines.into_iter().map(|line| match line {
                Primitive::Line { from, to, color, alpha } => Primitive::Line {
                    from: from.rotate_y(self.sway),
                    to: to.rotate_y(self.sway),
                    color,
                    alpha,
                },
                other => other,
            }));
        }
        out.extend(self.glyphs.iter().map(|g| Primitive::Glyph {
            at: g.at,
            text: g.text,
            size: Self::GLYPH_SIZE,
            color: PRIMARY_BLUE,
            alpha: 0.6,
            squash: (g.yaw.cos(), 1.0),
        }));
    }

    fn bounds(&self) -> f64 {
        let chart = self
            .bars
            .iter()
            .flat_map(|b| b.mesh.vertices.iter().map(move |v| v.add(b.base)))
            .map(|v| v.x.hypot(v.z).max(v.y.abs()))
            .fold(0.0, f64::max);
        let glyphs = self
            .glyphs
            .iter()
            .map(|g| g.origin.max_abs() + Self::BOB.max(Self::SWING))
            .fold(0.0, f64::max);
        chart.max(glyphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_alternate_colours_and_have_bounded_heights() {
        let scene = QuantsScene::new(9);
        assert_eq!(scene.bars.len(), QuantsScene::BAR_COUNT);
        for (i, bar) in scene.bars.iter().enumerate() {
            let expected = if i % 2 == 0 { PRIMARY_BLUE } else { PURPLE };
            assert_eq!(bar.color, expected);
            let height = bar.mesh.vertices.iter().map(|v| v.y).fold(f64::MIN, f64::max) * 2.0;
            assert!((0.5..=QuantsScene::MAX_BAR_HEIGHT).contains(&height), "{}", height);
        }
    }

    #[test]
    fn seven_symbols_are_shown() {
        let scene = QuantsScene::new(9);
        let mut out = Vec::new();
        scene.primitives(&mut out);
        let glyphs = out.iter().filter(|p| matches!(p, Primitive::Glyph { .. })).count();
        assert_eq!(glyphs, 7);
    }
}
