//! Toolkit-neutral primitives for the swipedeck card stack.
//!
//! This crate provides the small foundation every collaborator shares:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Affine transforms for card poses: [`Transform2D`]
//! - Millisecond-driven animation: [`EasingFunction`], [`Tween`]
//! - Explicit deferred work: [`DeferredQueue`]

mod animation;
mod geometry;
mod scheduler;
mod transform;

pub use animation::{EasingFunction, Tween};
pub use geometry::{Point, Rect, Size};
pub use scheduler::DeferredQueue;
pub use transform::Transform2D;
