//! The card stack controller.
//!
//! [`CardStack`] keeps the ordered backlog of elements, materializes a
//! small window of them as [`Card`]s and sequences swipe-triggered removal,
//! notification and refill.
//!
//! # Swipe lifecycle
//!
//! 1. `swipe_top_card_*` hands the front card to the [`SwipeAnimator`].
//!    Nothing is removed yet.
//! 2. When the animator completes, the front card and the backlog head are
//!    removed together. If that empties the backlog the stack stops being
//!    interactive.
//! 3. After [`settle_delay_ms`](StackConfig::settle_delay_ms), on a later
//!    [`advance`](CardStack::advance), the notifier is told about the
//!    swipe (and about reaching the end of the stack), then at most one new
//!    card is loaded behind the others.
//!
//! A swipe stays in flight from step 1 until step 3 has run; another swipe
//! request in that period is rejected with [`StackError::SwipeInFlight`].
//!
//! # Examples
//!
//! ```
//! use std::sync::mpsc;
//! use swipedeck::{CardStack, InstantSwipeAnimator, Rect, StackEvent};
//!
//! let (events, inbox) = mpsc::channel();
//! let render = |name: &&str, _region: Rect| name.to_uppercase();
//! let mut stack = CardStack::builder(Rect::new(0.0, 0.0, 320.0, 480.0), render, events)
//!     .animator(InstantSwipeAnimator)
//!     .build()
//!     .unwrap();
//!
//! stack.add_cards(["ada", "grace", "linus"], false);
//! assert_eq!(stack.loaded_len(), 2);
//! assert_eq!(stack.front().map(|c| c.visual().as_str()), Some("ADA"));
//!
//! stack.swipe_top_card_right().unwrap();
//! stack.advance(16);
//!
//! assert_eq!(inbox.try_recv(), Ok(StackEvent::SwipedRight("ada")));
//! assert_eq!(stack.front().map(|c| *c.element()), Some("grace"));
//! assert_eq!(stack.loaded_len(), 2);
//! ```

use crate::animator::{
    CompletedSwipe, CompletionInbox, LinearSwipeAnimator, SwipeAnimator, SwipeCompletion,
};
use crate::card::{Card, CardId, SwipeDirection};
use crate::config::StackConfig;
use crate::error::StackError;
use crate::notifier::SwipeNotifier;
use crate::renderer::{CardRenderer, OverlaySupplier};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use swipedeck_core::{DeferredQueue, Rect};
use tracing::{debug, trace, warn};

/// Observable state of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    /// Backlog is empty; the stack is not interactive
    Empty,
    /// Front card present, waiting for a swipe
    Idle,
    /// A swipe is animating or settling
    Swiping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Animating {
        card: CardId,
        direction: SwipeDirection,
    },
    Settling,
}

/// Second half of a swipe: notify, then refill.
#[derive(Debug)]
struct Settle<E> {
    element: E,
    direction: SwipeDirection,
    end_of_stack: bool,
}

/// Stack of swipeable cards.
///
/// `E` is the application element type, `V` the visual produced by the
/// renderer. The stack is single-threaded: every mutation happens in calls
/// made by the owner, and animation completions are picked up on the next
/// call into the stack.
pub struct CardStack<E, V> {
    config: StackConfig,
    bounds: Rect,
    backlog: VecDeque<E>,
    window: VecDeque<Card<E, V>>,
    in_flight: Option<InFlight>,
    next_card_id: u64,
    renderer: Box<dyn CardRenderer<E, V>>,
    overlays: Option<Box<dyn OverlaySupplier<V>>>,
    animator: Box<dyn SwipeAnimator<E, V>>,
    notifier: Box<dyn SwipeNotifier<E>>,
    completions: CompletionInbox,
    deferred: DeferredQueue<Settle<E>>,
}

/// Builder for [`CardStack`].
pub struct CardStackBuilder<E, V> {
    bounds: Rect,
    config: StackConfig,
    renderer: Box<dyn CardRenderer<E, V>>,
    overlays: Option<Box<dyn OverlaySupplier<V>>>,
    animator: Option<Box<dyn SwipeAnimator<E, V>>>,
    notifier: Box<dyn SwipeNotifier<E>>,
}

impl<E, V> CardStackBuilder<E, V> {
    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, config: StackConfig) -> Self {
        self.config = config;
        self
    }

    /// Set buffer size.
    #[must_use]
    pub const fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.buffer_size = buffer_size;
        self
    }

    /// Set settle delay.
    #[must_use]
    pub const fn settle_delay_ms(mut self, delay_ms: u32) -> Self {
        self.config.settle_delay_ms = delay_ms;
        self
    }

    /// Supply directional overlays for every card.
    #[must_use]
    pub fn overlays(mut self, supplier: impl OverlaySupplier<V> + 'static) -> Self {
        self.overlays = Some(Box::new(supplier));
        self
    }

    /// Override the default swipe animator.
    #[must_use]
    pub fn animator(mut self, animator: impl SwipeAnimator<E, V> + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    /// Validate the configuration and build the stack.
    pub fn build(self) -> Result<CardStack<E, V>, StackError> {
        self.config.validate()?;
        let animator: Box<dyn SwipeAnimator<E, V>> = match self.animator {
            Some(animator) => animator,
            None => Box::new(LinearSwipeAnimator::new(self.config.animation)),
        };
        Ok(CardStack::from_parts(
            self.bounds,
            self.config,
            self.renderer,
            self.overlays,
            animator,
            self.notifier,
        ))
    }
}

impl<E, V> CardStack<E, V> {
    fn from_parts(
        bounds: Rect,
        config: StackConfig,
        renderer: Box<dyn CardRenderer<E, V>>,
        overlays: Option<Box<dyn OverlaySupplier<V>>>,
        animator: Box<dyn SwipeAnimator<E, V>>,
        notifier: Box<dyn SwipeNotifier<E>>,
    ) -> Self {
        Self {
            config,
            bounds,
            backlog: VecDeque::new(),
            window: VecDeque::new(),
            in_flight: None,
            next_card_id: 0,
            renderer,
            overlays,
            animator,
            notifier,
            completions: Rc::new(RefCell::new(VecDeque::new())),
            deferred: DeferredQueue::new(),
        }
    }
}

impl<E: Clone, V> CardStack<E, V> {
    /// Start building a stack with the given frame, renderer and notifier.
    pub fn builder(
        bounds: Rect,
        renderer: impl CardRenderer<E, V> + 'static,
        notifier: impl SwipeNotifier<E> + 'static,
    ) -> CardStackBuilder<E, V> {
        CardStackBuilder {
            bounds,
            config: StackConfig::default(),
            renderer: Box::new(renderer),
            overlays: None,
            animator: None,
            notifier: Box::new(notifier),
        }
    }

    /// Create a stack with the default configuration and animator.
    pub fn new(
        bounds: Rect,
        renderer: impl CardRenderer<E, V> + 'static,
        notifier: impl SwipeNotifier<E> + 'static,
    ) -> Self {
        let config = StackConfig::default();
        Self::from_parts(
            bounds,
            config,
            Box::new(renderer),
            None,
            Box::new(LinearSwipeAnimator::new(config.animation)),
            Box::new(notifier),
        )
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add elements to the backlog.
    ///
    /// Appends by default. With `on_top`, prepends them in their given
    /// order and tears down every loaded card so the window is rebuilt from
    /// the new front. Adding nothing is a no-op.
    pub fn add_cards(&mut self, elements: impl IntoIterator<Item = E>, on_top: bool) {
        let elements: Vec<E> = elements.into_iter().collect();
        if elements.is_empty() {
            return;
        }
        let added = elements.len();

        if on_top {
            for element in elements.into_iter().rev() {
                self.backlog.push_front(element);
            }
            if !self.window.is_empty() {
                self.reset_window();
            }
        } else {
            self.backlog.extend(elements);
        }

        let loaded = self.fill_window();
        debug!(
            added,
            on_top,
            loaded,
            backlog = self.backlog.len(),
            window = self.window.len(),
            "cards added"
        );
    }

    /// Swipe the front card to the right.
    pub fn swipe_top_card_right(&mut self) -> Result<(), StackError> {
        self.swipe(SwipeDirection::Right)
    }

    /// Swipe the front card to the left.
    pub fn swipe_top_card_left(&mut self) -> Result<(), StackError> {
        self.swipe(SwipeDirection::Left)
    }

    /// Swipe the front card toward `direction`.
    ///
    /// Does nothing when no card is loaded. Fails with
    /// [`StackError::SwipeInFlight`] while a previous swipe has not settled.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<(), StackError> {
        if self.window.is_empty() {
            return Ok(());
        }
        if let Some(in_flight) = self.in_flight {
            warn!(?direction, ?in_flight, "swipe rejected, previous swipe in flight");
            return Err(StackError::SwipeInFlight);
        }
        let Some(front) = self.window.front_mut() else {
            return Ok(());
        };

        let card = front.id();
        self.in_flight = Some(InFlight::Animating { card, direction });
        debug!(card = card.0, ?direction, "swipe started");

        let completion = SwipeCompletion::new(&self.completions, card, direction);
        self.animator.animate(front, direction, self.bounds, completion);
        self.drain_completions();
        Ok(())
    }

    /// Forward a tap on the front card to the notifier.
    pub fn tap_top_card(&mut self) {
        if !self.is_interactive() {
            return;
        }
        if let Some(front) = self.window.front() {
            self.notifier.card_tapped(front.element());
        }
    }

    /// Forward a tap on card `id`; ignored unless it is the front card.
    pub fn tap_card(&mut self, id: CardId) {
        if self.window.front().map(Card::id) == Some(id) {
            self.tap_top_card();
        } else {
            trace!(card = id.0, "tap ignored, not the front card");
        }
    }

    /// Frame tick.
    ///
    /// Runs settle steps that came due, advances the animator and
    /// finalizes swipes whose animation completed.
    pub fn advance(&mut self, delta_ms: u32) {
        for settle in self.deferred.advance(delta_ms) {
            self.settle(settle);
        }
        self.animator.advance(delta_ms, self.window.front_mut());
        self.drain_completions();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Change the buffer size.
    ///
    /// Growing loads cards immediately; shrinking tears down the rearmost
    /// cards.
    pub fn set_buffer_size(&mut self, buffer_size: usize) -> Result<(), StackError> {
        let config = self.config.buffer_size(buffer_size);
        config.validate()?;
        self.config = config;
        if self.window.len() > buffer_size {
            self.window.truncate(buffer_size);
        }
        let loaded = self.fill_window();
        debug!(buffer_size, loaded, window = self.window.len(), "buffer size changed");
        Ok(())
    }

    /// Change the frame. Cards loaded from now on are rendered at the new size.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Replace the swipe animator.
    ///
    /// Fails while a swipe is in flight, since the running animation owns
    /// its completion.
    pub fn set_animator(
        &mut self,
        animator: impl SwipeAnimator<E, V> + 'static,
    ) -> Result<(), StackError> {
        if matches!(self.in_flight, Some(InFlight::Animating { .. })) {
            return Err(StackError::SwipeInFlight);
        }
        self.animator = Box::new(animator);
        Ok(())
    }

    /// Restore the default animator.
    pub fn reset_animator(&mut self) -> Result<(), StackError> {
        let animator = LinearSwipeAnimator::new(self.config.animation);
        self.set_animator(animator)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StackState {
        if self.backlog.is_empty() {
            StackState::Empty
        } else if self.in_flight.is_some() {
            StackState::Swiping
        } else {
            StackState::Idle
        }
    }

    /// Whether the stack accepts taps and swipes: true iff the backlog is
    /// non-empty.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.backlog.is_empty()
    }

    /// Whether a swipe is animating or settling.
    #[must_use]
    pub const fn is_swiping(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the host must keep calling [`advance`](Self::advance).
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.in_flight.is_some() || !self.deferred.is_empty() || self.animator.is_animating()
    }

    /// Number of elements in the backlog, loaded cards included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backlog.len()
    }

    /// Check if the backlog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backlog.is_empty()
    }

    /// Number of materialized cards.
    #[must_use]
    pub fn loaded_len(&self) -> usize {
        self.window.len()
    }

    /// The front (interactive) card.
    #[must_use]
    pub fn front(&self) -> Option<&Card<E, V>> {
        self.window.front()
    }

    /// Mutable front card, for gesture handlers that drag it.
    pub fn front_mut(&mut self) -> Option<&mut Card<E, V>> {
        self.window.front_mut()
    }

    /// Loaded cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card<E, V>> {
        self.window.iter()
    }

    /// Loaded cards in paint order: rearmost first, front card last.
    pub fn cards_back_to_front(&self) -> impl Iterator<Item = &Card<E, V>> {
        self.window.iter().rev()
    }

    /// Backlog elements in order.
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.backlog.iter()
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Current buffer size.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    /// Current frame.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn materialize(&mut self, element: E) -> Card<E, V> {
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        let region = Rect::from_size(self.bounds.size());
        let overlays: Option<&mut dyn OverlaySupplier<V>> = match self.overlays.as_mut() {
            Some(supplier) => Some(&mut **supplier),
            None => None,
        };
        let card = Card::materialize(id, element, region, &mut *self.renderer, overlays);
        trace!(card = id.0, position = self.window.len(), "card materialized");
        card
    }

    /// Load the backlog element right behind the last loaded card.
    fn load_next_card(&mut self) -> bool {
        let position = self.window.len();
        if position >= self.config.buffer_size {
            return false;
        }
        let Some(element) = self.backlog.get(position).cloned() else {
            return false;
        };
        let card = self.materialize(element);
        self.window.push_back(card);
        true
    }

    fn fill_window(&mut self) -> usize {
        let mut loaded = 0;
        while self.load_next_card() {
            loaded += 1;
        }
        loaded
    }

    fn reset_window(&mut self) {
        let torn_down = self.window.len();
        self.window.clear();
        if let Some(InFlight::Animating { card, .. }) = self.in_flight {
            debug!(card = card.0, "in-flight swipe superseded by window reset");
            self.in_flight = None;
            self.animator.cancel();
            self.completions.borrow_mut().retain(|done| done.card != card);
        }
        debug!(torn_down, "window reset");
    }

    fn drain_completions(&mut self) {
        loop {
            let next = self.completions.borrow_mut().pop_front();
            let Some(done) = next else {
                break;
            };
            self.finish_swipe(done);
        }
    }

    /// First half of a completed swipe: remove card and element together.
    fn finish_swipe(&mut self, done: CompletedSwipe) {
        let expected = Some(InFlight::Animating {
            card: done.card,
            direction: done.direction,
        });
        let is_front = self.window.front().map(Card::id) == Some(done.card);
        if self.in_flight != expected || !is_front {
            warn!(card = done.card.0, "ignoring completion for a card no longer in flight");
            return;
        }

        let removed = self.window.pop_front().map(|card| card.id());
        let Some(element) = self.backlog.pop_front() else {
            return;
        };
        let end_of_stack = self.backlog.is_empty();
        self.in_flight = Some(InFlight::Settling);
        self.deferred.schedule(
            self.config.settle_delay_ms,
            Settle {
                element,
                direction: done.direction,
                end_of_stack,
            },
        );
        debug!(
            card = ?removed,
            direction = ?done.direction,
            backlog = self.backlog.len(),
            end_of_stack,
            "swiped card removed"
        );
    }

    /// Second half: notify, then load at most one card.
    fn settle(&mut self, settle: Settle<E>) {
        let Settle {
            element,
            direction,
            end_of_stack,
        } = settle;
        self.notifier.swiped(direction, element);
        if end_of_stack {
            debug!("reached end of stack");
            self.notifier.reached_end_of_stack();
        }
        let refilled = self.load_next_card();
        if self.in_flight == Some(InFlight::Settling) {
            self.in_flight = None;
        }
        debug!(?direction, refilled, window = self.window.len(), "swipe settled");
    }
}

impl<E, V> fmt::Debug for CardStack<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStack")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("backlog", &self.backlog.len())
            .field("window", &self.window.len())
            .field("in_flight", &self.in_flight)
            .field("pending_settles", &self.deferred.len())
            .finish_non_exhaustive()
    }
}

impl<E, V> fmt::Debug for CardStackBuilder<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStackBuilder")
            .field("bounds", &self.bounds)
            .field("config", &self.config)
            .field("overlays", &self.overlays.is_some())
            .field("animator", &self.animator.is_some())
            .finish_non_exhaustive()
    }
}
