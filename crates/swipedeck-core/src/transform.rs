//! 2D affine transforms for card poses.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a rotation transform (angle in radians, clockwise in screen space).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Compose: apply `other` first, then `self`.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn concat(&self, other: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.matrix;
        let [a2, b2, c2, d2, e2, f2] = other.matrix;
        Self {
            matrix: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    /// Map a point through the transform.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    /// Translation component.
    #[must_use]
    pub const fn translation(&self) -> Point {
        Point::new(self.matrix[4], self.matrix[5])
    }

    /// Whether this is (numerically) the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix
            .iter()
            .zip(Self::IDENTITY.matrix.iter())
            .all(|(a, b)| (a - b).abs() < f32::EPSILON)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
