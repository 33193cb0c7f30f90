//! Rendering collaborators.
//!
//! The stack never draws anything itself. It asks a [`CardRenderer`] for a
//! visual for each element it materializes and, optionally, an
//! [`OverlaySupplier`] for the left/right overlays shown while a card is
//! being swiped away. Both are implemented for plain closures.
//!
//! Failures are not modeled: a renderer that cannot produce a visual is a
//! bug in the renderer and should panic rather than return a placeholder.

use crate::card::SwipeDirection;
use swipedeck_core::Rect;

/// Produces the visual for one element, sized to `region`.
pub trait CardRenderer<E, V> {
    /// Render `element` into `region`.
    fn render(&mut self, element: &E, region: Rect) -> V;
}

impl<E, V, F> CardRenderer<E, V> for F
where
    F: FnMut(&E, Rect) -> V,
{
    fn render(&mut self, element: &E, region: Rect) -> V {
        self(element, region)
    }
}

/// Produces the directional overlay for a card, sized to `region`.
pub trait OverlaySupplier<V> {
    /// Create the overlay shown when swiping toward `direction`.
    fn overlay(&mut self, direction: SwipeDirection, region: Rect) -> V;
}

impl<V, F> OverlaySupplier<V> for F
where
    F: FnMut(SwipeDirection, Rect) -> V,
{
    fn overlay(&mut self, direction: SwipeDirection, region: Rect) -> V {
        self(direction, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Labels {
        calls: usize,
    }

    impl CardRenderer<u32, String> for Labels {
        fn render(&mut self, element: &u32, region: Rect) -> String {
            self.calls += 1;
            format!("#{element} {}x{}", region.width, region.height)
        }
    }

    #[test]
    fn test_closure_renderer() {
        let mut r = |e: &u32, _: Rect| e * 2;
        assert_eq!(r.render(&21, Rect::default()), 42);
    }

    #[test]
    fn test_struct_renderer_keeps_state() {
        let mut r = Labels { calls: 0 };
        let region = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(r.render(&3, region), "#3 10x20");
        r.render(&4, region);
        assert_eq!(r.calls, 2);
    }

    #[test]
    fn test_closure_overlay_supplier() {
        let mut s = |d: SwipeDirection, _: Rect| match d {
            SwipeDirection::Left => "nope",
            SwipeDirection::Right => "like",
        };
        assert_eq!(s.overlay(SwipeDirection::Left, Rect::default()), "nope");
        assert_eq!(s.overlay(SwipeDirection::Right, Rect::default()), "like");
    }
}
