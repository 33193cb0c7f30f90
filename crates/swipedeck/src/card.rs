//! Card instances and their construction.

use crate::renderer::{CardRenderer, OverlaySupplier};
use serde::{Deserialize, Serialize};
use swipedeck_core::{Point, Rect, Transform2D};

/// Direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Dismiss to the left
    Left,
    /// Dismiss to the right
    Right,
}

impl SwipeDirection {
    /// Horizontal sign of the direction (-1 or 1).
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Identifier of a materialized card, unique per stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

/// Visual state of a card that animators drive and renderers read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPose {
    /// Displacement from the resting position
    pub offset: Point,
    /// Tilt in radians
    pub rotation: f32,
    /// Opacity of the left overlay (0.0 to 1.0)
    pub left_overlay_alpha: f32,
    /// Opacity of the right overlay (0.0 to 1.0)
    pub right_overlay_alpha: f32,
}

impl CardPose {
    /// Resting pose: no displacement, overlays hidden.
    pub const RESTING: Self = Self {
        offset: Point::ORIGIN,
        rotation: 0.0,
        left_overlay_alpha: 0.0,
        right_overlay_alpha: 0.0,
    };

    /// Overlay opacity for a direction.
    #[must_use]
    pub const fn overlay_alpha(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Left => self.left_overlay_alpha,
            SwipeDirection::Right => self.right_overlay_alpha,
        }
    }

    /// Set the overlay opacity for a direction, clamped to 0..=1.
    pub fn set_overlay_alpha(&mut self, direction: SwipeDirection, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        match direction {
            SwipeDirection::Left => self.left_overlay_alpha = alpha,
            SwipeDirection::Right => self.right_overlay_alpha = alpha,
        }
    }

    /// Transform to apply to the card's visual: tilt, then displace.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        Transform2D::translate(self.offset.x, self.offset.y)
            .concat(&Transform2D::rotate(self.rotation))
    }

    /// Whether the card sits at rest.
    #[must_use]
    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }
}

impl Default for CardPose {
    fn default() -> Self {
        Self::RESTING
    }
}

/// One materialized backlog element.
///
/// A card owns a copy of its element, the rendered visual and the optional
/// directional overlays. The stack creates cards and drops them (tearing
/// the visuals down) once their swipe has been finalized or the window is
/// reset.
#[derive(Debug)]
pub struct Card<E, V> {
    id: CardId,
    element: E,
    region: Rect,
    visual: V,
    left_overlay: Option<V>,
    right_overlay: Option<V>,
    /// Current pose, written by the swipe animator
    pub pose: CardPose,
}

impl<E, V> Card<E, V> {
    /// Materialize a card: render the element and both overlays into `region`.
    pub fn materialize(
        id: CardId,
        element: E,
        region: Rect,
        renderer: &mut dyn CardRenderer<E, V>,
        overlays: Option<&mut dyn OverlaySupplier<V>>,
    ) -> Self {
        let visual = renderer.render(&element, region);
        let (left_overlay, right_overlay) = match overlays {
            Some(supplier) => (
                Some(supplier.overlay(SwipeDirection::Left, region)),
                Some(supplier.overlay(SwipeDirection::Right, region)),
            ),
            None => (None, None),
        };
        Self {
            id,
            element,
            region,
            visual,
            left_overlay,
            right_overlay,
            pose: CardPose::RESTING,
        }
    }

    /// Card identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// The element this card shows.
    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Region the card was rendered into.
    #[must_use]
    pub const fn region(&self) -> Rect {
        self.region
    }

    /// Rendered visual.
    #[must_use]
    pub const fn visual(&self) -> &V {
        &self.visual
    }

    /// Overlay for a direction, if an overlay supplier was configured.
    #[must_use]
    pub const fn overlay(&self, direction: SwipeDirection) -> Option<&V> {
        match direction {
            SwipeDirection::Left => self.left_overlay.as_ref(),
            SwipeDirection::Right => self.right_overlay.as_ref(),
        }
    }
}
