//! Decorative background animations.
//!
//! Every page owns one [`Scene`]. A scene recomputes its geometry from the
//! elapsed time, emits it as [`Primitive`]s and the renderer projects those
//! through the scene's [`Camera`] onto the single full-screen canvas.

pub mod projection;
pub mod renderer;
pub mod scenes;
pub mod shapes;

use web_sys::CanvasRenderingContext2d;

use crate::routes::{ProjectSlug, Route};
use projection::{Camera, Vec3};

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0 }
    }
}

/// World-space drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Point { at: Vec3, size: f64, color: &'static str, alpha: f64 },
    Line { from: Vec3, to: Vec3, color: &'static str, alpha: f64 },
    /// Billboard text. `squash` is the (horizontal, vertical) scale left
    /// over from the glyph turning about its own y and x axes.
    Glyph { at: Vec3, text: &'static str, size: f64, color: &'static str, alpha: f64, squash: (f64, f64) },
}

impl Primitive {
    /// Every world position the primitive touches.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> {
        let (a, b) = match *self {
            Primitive::Point { at, .. } | Primitive::Glyph { at, .. } => (at, None),
            Primitive::Line { from, to, .. } => (from, Some(to)),
        };
        std::iter::once(a).chain(b)
    }
}

pub trait Scene {
    fn camera(&self) -> Camera;

    /// Advance to `t` seconds since the page was shown.
    fn update(&mut self, t: f64);

    fn primitives(&self, out: &mut Vec<Primitive>);

    /// Upper bound on the absolute value of any coordinate the scene emits.
    fn bounds(&self) -> f64;

    /// Pointer position in normalised device coordinates. Most scenes ignore it.
    fn set_pointer(&mut self, _x: f64, _y: f64) {}

    fn draw(&self, ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
        let mut frame = Vec::new();
        self.primitives(&mut frame);
        renderer::draw_frame(ctx, &self.camera(), viewport, &frame);
    }
}

/// Build the background scene for `route`. Random layouts are derived from `seed`.
pub fn scene_for_route(route: Route, seed: u64) -> Box<dyn Scene> {
    use scenes::*;
    match route {
        Route::Home => Box::new(ParticleWave::new(seed)),
        Route::About => Box::new(FloatingShapes::new()),
        Route::Skills => Box::new(OrbitingSkills::new()),
        Route::Certifications => Box::new(FloatingCertificates::new()),
        Route::Projects => Box::new(GridNetwork::new()),
        Route::Contact => Box::new(ParticleField::new(seed)),
        Route::ProjectDetail(ProjectSlug::InnoFeed) => Box::new(NeuralNetwork::new(seed)),
        Route::ProjectDetail(ProjectSlug::AgricultureTraceability) => Box::new(BlockchainCubes::new(seed)),
        Route::ProjectDetail(ProjectSlug::TaxChain) => Box::new(DocumentRings::new()),
        Route::ProjectDetail(ProjectSlug::Quants) => Box::new(QuantsScene::new(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::{Config, TestRunner};

    fn assert_within_bounds(scene: &dyn Scene) -> Result<(), TestCaseError> {
        let mut frame = Vec::new();
        scene.primitives(&mut frame);
        prop_assert!(!frame.is_empty());
        let limit = scene.bounds() + 1e-9;
        for p in frame.iter().flat_map(|p| p.positions()) {
            prop_assert!(p.max_abs() <= limit, "{:?} outside {}", p, limit);
        }
        Ok(())
    }

    #[test]
    fn every_scene_stays_within_its_bounds() {
        let mut runner = TestRunner::new(Config { cases: 24, ..Config::default() });
        runner
            .run(&(0u64..1_000, 0.0f64..10_000.0), |(seed, t)| {
                for route in Route::all() {
                    let mut scene = scene_for_route(route, seed);
                    assert_within_bounds(scene.as_ref())?;
                    scene.update(t);
                    assert_within_bounds(scene.as_ref())?;
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn pointer_driven_field_stays_bounded() {
        let mut runner = TestRunner::new(Config { cases: 16, ..Config::default() });
        runner
            .run(&(-5.0f64..5.0, -5.0f64..5.0), |(x, y)| {
                let mut scene = scene_for_route(Route::Contact, 7);
                scene.set_pointer(x, y);
                for frame in 0..120 {
                    scene.update(frame as f64 / 60.0);
                }
                assert_within_bounds(scene.as_ref())
            })
            .unwrap();
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let collect = |seed| {
            let mut scene = scene_for_route(Route::ProjectDetail(ProjectSlug::InnoFeed), seed);
            scene.update(1.5);
            let mut out = Vec::new();
            scene.primitives(&mut out);
            out
        };
        assert_eq!(collect(42), collect(42));
        assert_ne!(collect(42), collect(43));
    }
}
