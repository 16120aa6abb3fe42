//! 2D Vector Primitive
//!
//! Immutable value type for turtle positions and displacements.
//! Every operation returns a new vector.

use serde::{Deserialize, Serialize};

/// Point/vector in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Rotate around the origin by `angle` radians.
    /// A positive angle turns (0, 1) toward (1, 0).
    pub fn rotate(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_add() {
        let v = Vec2::new(1.5, -2.0).add(Vec2::new(0.5, 3.0));
        assert_eq!(v, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let v = Vec2::new(3.0, 4.0).rotate(0.0);
        assert!((v.x - 3.0).abs() < EPS);
        assert!((v.y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vec2::new(0.0, 200.0).rotate(90f64.to_radians());
        assert!((v.x - 200.0).abs() < EPS);
        assert!(v.y.abs() < EPS);
    }

    #[test]
    fn test_rotate_full_turn() {
        let v = Vec2::new(7.0, -3.0).rotate(360f64.to_radians());
        assert!((v.x - 7.0).abs() < EPS);
        assert!((v.y + 3.0).abs() < EPS);
    }
}
