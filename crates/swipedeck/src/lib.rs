//! Swipeable card stack controller for retained-mode UIs.
//!
//! `swipedeck` provides the bookkeeping behind a "swipe left / swipe right"
//! card chooser, independent of any drawing toolkit:
//! - [`CardStack`]: ordered backlog, bounded window of loaded [`Card`]s,
//!   swipe sequencing and refill
//! - Collaborator seams: [`CardRenderer`], [`OverlaySupplier`],
//!   [`SwipeAnimator`], [`SwipeNotifier`]
//! - Default animation: [`LinearSwipeAnimator`]
//! - Configuration: [`StackConfig`], loadable from YAML
//!
//! The host owns the frame loop: it draws [`CardStack::cards_back_to_front`]
//! using each card's [`CardPose`], and calls [`CardStack::advance`] on every
//! tick while [`CardStack::has_pending_work`] is true.

mod animator;
mod card;
mod config;
mod error;
mod notifier;
mod renderer;
mod stack;

pub use animator::{InstantSwipeAnimator, LinearSwipeAnimator, SwipeAnimator, SwipeCompletion};
pub use card::{Card, CardId, CardPose, SwipeDirection};
pub use config::{
    StackConfig, SwipeAnimationConfig, DEFAULT_BUFFER_SIZE, DEFAULT_SETTLE_DELAY_MS,
};
pub use error::StackError;
pub use notifier::{StackEvent, SwipeNotifier};
pub use renderer::{CardRenderer, OverlaySupplier};
pub use stack::{CardStack, CardStackBuilder, StackState};
pub use swipedeck_core::{EasingFunction, Point, Rect, Size, Transform2D};
