//! Outcome notifications.

use crate::card::SwipeDirection;
use std::sync::mpsc::Sender;

/// Receives the outcomes of user interaction with the stack.
///
/// Swiped elements are handed over by value: once a swipe is final the
/// element has left the backlog for good.
pub trait SwipeNotifier<E> {
    /// The front card was dismissed to the left.
    fn swiped_left(&mut self, element: E);

    /// The front card was dismissed to the right.
    fn swiped_right(&mut self, element: E);

    /// The front card was tapped.
    fn card_tapped(&mut self, element: &E);

    /// The last card of the backlog was swiped away.
    ///
    /// Delivered right after the [`swiped_left`](Self::swiped_left) or
    /// [`swiped_right`](Self::swiped_right) call for that card, in the same
    /// settle step, not at the moment the card is removed. The stack already
    /// stops being interactive at removal time, so hosts that need to react
    /// earlier can poll [`CardStack::is_interactive`](crate::CardStack::is_interactive).
    fn reached_end_of_stack(&mut self);

    /// Dispatch a swipe outcome by direction.
    fn swiped(&mut self, direction: SwipeDirection, element: E) {
        match direction {
            SwipeDirection::Left => self.swiped_left(element),
            SwipeDirection::Right => self.swiped_right(element),
        }
    }
}

/// Stack outcome as a message value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent<E> {
    /// See [`SwipeNotifier::swiped_left`]
    SwipedLeft(E),
    /// See [`SwipeNotifier::swiped_right`]
    SwipedRight(E),
    /// See [`SwipeNotifier::card_tapped`]
    CardTapped(E),
    /// See [`SwipeNotifier::reached_end_of_stack`]
    ReachedEndOfStack,
}

/// Forward outcomes into a channel, for hosts that process UI messages in
/// their own update loop. A disconnected receiver drops events silently.
impl<E: Clone> SwipeNotifier<E> for Sender<StackEvent<E>> {
    fn swiped_left(&mut self, element: E) {
        let _ = self.send(StackEvent::SwipedLeft(element));
    }

    fn swiped_right(&mut self, element: E) {
        let _ = self.send(StackEvent::SwipedRight(element));
    }

    fn card_tapped(&mut self, element: &E) {
        let _ = self.send(StackEvent::CardTapped(element.clone()));
    }

    fn reached_end_of_stack(&mut self) {
        let _ = self.send(StackEvent::ReachedEndOfStack);
    }
}
