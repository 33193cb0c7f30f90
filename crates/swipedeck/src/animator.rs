//! Swipe-away animation.
//!
//! An animator receives the front card, a direction and a
//! [`SwipeCompletion`]. It may move the card however it likes (writing
//! [`Card::pose`]) and must eventually call [`SwipeCompletion::complete`].
//! The stack does not touch its bookkeeping for that card until then.
//!
//! Completion is a move-only token, so it can be signalled at most once.
//! Animators may complete synchronously from [`SwipeAnimator::animate`] or
//! later from [`SwipeAnimator::advance`], which the stack calls on every
//! frame tick.

use crate::card::{Card, CardId, SwipeDirection};
use crate::config::SwipeAnimationConfig;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use swipedeck_core::{Point, Rect, Tween};
use tracing::{trace, warn};

/// A completed swipe animation, waiting to be finalized by the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CompletedSwipe {
    pub(crate) card: CardId,
    pub(crate) direction: SwipeDirection,
}

/// Completions signalled since the stack last looked.
pub(crate) type CompletionInbox = Rc<RefCell<VecDeque<CompletedSwipe>>>;

/// One-shot completion signal for a swipe animation.
///
/// Holds only a weak handle to the stack: completing after the stack was
/// dropped does nothing. Dropping the token without completing leaves the
/// swipe in flight.
#[derive(Debug)]
#[must_use = "a swipe stays in flight until its completion is signalled"]
pub struct SwipeCompletion {
    inbox: Option<Weak<RefCell<VecDeque<CompletedSwipe>>>>,
    card: CardId,
    direction: SwipeDirection,
}

impl SwipeCompletion {
    pub(crate) fn new(inbox: &CompletionInbox, card: CardId, direction: SwipeDirection) -> Self {
        Self {
            inbox: Some(Rc::downgrade(inbox)),
            card,
            direction,
        }
    }

    /// Card being swiped.
    #[must_use]
    pub const fn card(&self) -> CardId {
        self.card
    }

    /// Direction of the swipe.
    #[must_use]
    pub const fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Signal that the visual transition has finished.
    pub fn complete(mut self) {
        let Some(inbox) = self.inbox.take().and_then(|weak| weak.upgrade()) else {
            trace!(card = self.card.0, "swipe completed after stack was dropped");
            return;
        };
        inbox.borrow_mut().push_back(CompletedSwipe {
            card: self.card,
            direction: self.direction,
        });
    }
}

impl Drop for SwipeCompletion {
    fn drop(&mut self) {
        if self.inbox.is_some() {
            warn!(
                card = self.card.0,
                direction = ?self.direction,
                "swipe completion dropped without completing; swipe stays in flight"
            );
        }
    }
}

/// Performs the visual swipe-away transition of a card.
pub trait SwipeAnimator<E, V> {
    /// Start animating `card` off-screen toward `direction`.
    ///
    /// `container` is the stack's frame; `completion` must be completed
    /// exactly once, now or from a later [`advance`](Self::advance).
    fn animate(
        &mut self,
        card: &mut Card<E, V>,
        direction: SwipeDirection,
        container: Rect,
        completion: SwipeCompletion,
    );

    /// Frame tick. `front` is the current front card, if any.
    fn advance(&mut self, _delta_ms: u32, _front: Option<&mut Card<E, V>>) {}

    /// Whether an animation is still running.
    fn is_animating(&self) -> bool {
        false
    }

    /// The animating card was torn down before its swipe finished.
    ///
    /// Animators holding a [`SwipeCompletion`] should complete it here; the
    /// stack discards completions for cards that are no longer in flight.
    fn cancel(&mut self) {}
}

impl<E, V, F> SwipeAnimator<E, V> for F
where
    F: FnMut(&mut Card<E, V>, SwipeDirection, SwipeCompletion),
{
    fn animate(
        &mut self,
        card: &mut Card<E, V>,
        direction: SwipeDirection,
        _container: Rect,
        completion: SwipeCompletion,
    ) {
        self(card, direction, completion);
    }
}

/// Animator that completes immediately without moving the card.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSwipeAnimator;

impl<E, V> SwipeAnimator<E, V> for InstantSwipeAnimator {
    fn animate(
        &mut self,
        _card: &mut Card<E, V>,
        _direction: SwipeDirection,
        _container: Rect,
        completion: SwipeCompletion,
    ) {
        completion.complete();
    }
}

#[derive(Debug)]
struct SwipeMotion {
    card: CardId,
    direction: SwipeDirection,
    x: Tween,
    y: Tween,
    rotation: Tween,
    overlay: Tween,
    completion: SwipeCompletion,
}

impl SwipeMotion {
    fn apply<E, V>(&self, card: &mut Card<E, V>) {
        card.pose.offset = Point::new(self.x.value(), self.y.value());
        card.pose.rotation = self.rotation.value();
        card.pose.set_overlay_alpha(self.direction, self.overlay.value());
    }

    fn step(&mut self, delta_ms: u32) {
        self.x.advance(delta_ms);
        self.y.advance(delta_ms);
        self.rotation.advance(delta_ms);
        self.overlay.advance(delta_ms);
    }

    fn is_finished(&self) -> bool {
        self.x.is_complete()
    }
}

/// Default animator: slides the card off-screen in a straight line while
/// tilting it, and fades in the matching overlay.
///
/// The card travels one container width plus
/// [`exit_overshoot`](SwipeAnimationConfig::exit_overshoot) horizontally,
/// [`vertical_offset`](SwipeAnimationConfig::vertical_offset) vertically,
/// and turns by [`rotation_degrees`](SwipeAnimationConfig::rotation_degrees)
/// over [`duration_ms`](SwipeAnimationConfig::duration_ms). The overlay
/// reaches full opacity after
/// [`overlay_fade_ms`](SwipeAnimationConfig::overlay_fade_ms). Completion
/// is signalled when the positional motion ends.
#[derive(Debug, Default)]
pub struct LinearSwipeAnimator {
    config: SwipeAnimationConfig,
    motion: Option<SwipeMotion>,
}

impl LinearSwipeAnimator {
    /// Create an animator with the given parameters.
    #[must_use]
    pub const fn new(config: SwipeAnimationConfig) -> Self {
        Self {
            config,
            motion: None,
        }
    }

    /// Animation parameters.
    #[must_use]
    pub const fn config(&self) -> &SwipeAnimationConfig {
        &self.config
    }

}

impl<E, V> SwipeAnimator<E, V> for LinearSwipeAnimator {
    fn animate(
        &mut self,
        card: &mut Card<E, V>,
        direction: SwipeDirection,
        container: Rect,
        completion: SwipeCompletion,
    ) {
        if let Some(stale) = self.motion.take() {
            // The previous card is gone; let the stack discard its completion.
            stale.completion.complete();
        }

        let cfg = &self.config;
        let sign = direction.sign();
        let start = card.pose;
        let travel = container.width * (1.0 + cfg.exit_overshoot) * sign;
        let motion = SwipeMotion {
            card: card.id(),
            direction,
            x: Tween::new(start.offset.x, start.offset.x + travel, cfg.duration_ms)
                .with_easing(cfg.easing),
            y: Tween::new(
                start.offset.y,
                start.offset.y + cfg.vertical_offset,
                cfg.duration_ms,
            )
            .with_easing(cfg.easing),
            rotation: Tween::new(
                start.rotation,
                start.rotation + cfg.rotation_degrees.to_radians() * sign,
                cfg.duration_ms,
            )
            .with_easing(cfg.easing),
            overlay: Tween::new(
                start.overlay_alpha(direction),
                1.0,
                cfg.overlay_fade_ms,
            ),
            completion,
        };
        trace!(card = card.id().0, ?direction, travel, "swipe animation started");

        motion.apply(card);
        if motion.is_finished() {
            motion.completion.complete();
        } else {
            self.motion = Some(motion);
        }
    }

    fn advance(&mut self, delta_ms: u32, front: Option<&mut Card<E, V>>) {
        let Some(mut motion) = self.motion.take() else {
            return;
        };
        match front {
            Some(card) if card.id() == motion.card => {
                motion.step(delta_ms);
                motion.apply(card);
                if motion.is_finished() {
                    trace!(card = motion.card.0, "swipe animation finished");
                    motion.completion.complete();
                } else {
                    self.motion = Some(motion);
                }
            }
            _ => {
                // Card was torn down mid-flight.
                motion.completion.complete();
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    fn cancel(&mut self) {
        if let Some(motion) = self.motion.take() {
            trace!(card = motion.card.0, "swipe animation cancelled");
            motion.completion.complete();
        }
    }
}
