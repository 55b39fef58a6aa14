//! Minimal 3D math for the background scenes: a vector type, Euler
//! rotations and a pinhole camera looking down `-z`.

use super::Viewport;

/// Objects closer than this to the camera plane are culled.
const NEAR_PLANE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }

    pub fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }

    pub fn scale(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Largest absolute component.
    pub fn max_abs(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    pub fn rotate_x(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }

    pub fn rotate_z(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Apply an XYZ Euler rotation (x first).
    pub fn rotate(self, euler: Vec3) -> Vec3 {
        self.rotate_x(euler.x).rotate_y(euler.y).rotate_z(euler.z)
    }
}

/// Screen-space result of projecting a world point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f64,
}

impl Camera {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self { position: Vec3::new(x, y, z), fov_degrees: crate::constants::DEFAULT_FOV_DEGREES }
    }

    /// Vertical focal length in pixels.
    pub fn focal_length(&self, viewport: &Viewport) -> f64 {
        let half_fov = (self.fov_degrees.to_radians() / 2.0).max(f64::EPSILON);
        (viewport.height / 2.0) / half_fov.tan()
    }

    /// `None` when the point is behind (or on) the near plane.
    pub fn project(&self, point: Vec3, viewport: &Viewport) -> Option<Projected> {
        let rel = point.sub(self.position);
        let depth = -rel.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        let scale = self.focal_length(viewport) / depth;
        Some(Projected {
            x: viewport.width / 2.0 + rel.x * scale,
            y: viewport.height / 2.0 - rel.y * scale,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::test_runner::TestRunner;

    const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn origin_lands_in_the_centre() {
        let cam = Camera::at(0.0, 0.0, 8.0);
        let p = cam.project(Vec3::ZERO, &VIEW).unwrap();
        assert!(close(p.x, 400.0) && close(p.y, 300.0));
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let cam = Camera::at(0.0, 0.0, 8.0);
        assert!(cam.project(Vec3::new(0.0, 0.0, 9.0), &VIEW).is_none());
        assert!(cam.project(Vec3::new(0.0, 0.0, 8.0), &VIEW).is_none());
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = Camera::at(0.0, 0.0, 8.0);
        let p = cam.project(Vec3::new(1.0, 1.0, 0.0), &VIEW).unwrap();
        assert!(p.x > 400.0);
        assert!(p.y < 300.0);
    }

    #[test]
    fn quarter_turn_about_y_moves_x_to_minus_z() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(std::f64::consts::FRAC_PI_2);
        assert!(close(v.x, 0.0) && close(v.z, -1.0));
    }

    #[test]
    fn rotations_preserve_length() {
        let mut runner = TestRunner::default();
        let strategy = (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0, -10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0);
        runner
            .run(&strategy, |(x, y, z, a, b, c)| {
                let v = Vec3::new(x, y, z);
                let r = v.rotate(Vec3::new(a, b, c));
                prop_assert!((v.length() - r.length()).abs() < 1e-6);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn farther_points_shrink() {
        let mut runner = TestRunner::default();
        runner
            .run(&(0.5f64..40.0, 0.1f64..40.0), |(near, extra)| {
                let cam = Camera::at(0.0, 0.0, 0.0);
                let a = cam.project(Vec3::new(1.0, 0.0, -near), &VIEW).unwrap();
                let b = cam.project(Vec3::new(1.0, 0.0, -(near + extra)), &VIEW).unwrap();
                prop_assert!(b.scale < a.scale);
                Ok(())
            })
            .unwrap();
    }
}
