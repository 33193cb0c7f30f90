//! Shared fixtures for swipedeck integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use swipedeck::{
    Card, CardStack, Point, Rect, StackEvent, SwipeAnimator, SwipeCompletion, SwipeDirection,
    SwipeNotifier,
};

pub type Stack = CardStack<&'static str, Mounted>;

pub fn frame() -> Rect {
    Rect::new(0.0, 0.0, 320.0, 480.0)
}

/// A visual that counts itself as mounted until dropped.
#[derive(Debug)]
pub struct Mounted {
    pub label: String,
    pub region: Rect,
    live: Rc<Cell<usize>>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Tracks how many visuals exist and how many were ever created.
#[derive(Debug, Clone, Default)]
pub struct Mounts {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl Mounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn mount(&self, label: String, region: Rect) -> Mounted {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);
        Mounted {
            label,
            region,
            live: Rc::clone(&self.live),
        }
    }

    pub fn renderer(&self) -> impl FnMut(&&'static str, Rect) -> Mounted + 'static {
        let mounts = self.clone();
        move |element: &&'static str, region: Rect| mounts.mount((*element).to_string(), region)
    }

    pub fn overlays(&self) -> impl FnMut(SwipeDirection, Rect) -> Mounted + 'static {
        let mounts = self.clone();
        move |direction: SwipeDirection, region: Rect| {
            mounts.mount(format!("{direction:?}").to_lowercase(), region)
        }
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }
}

/// Animator that parks completions until the test releases them.
#[derive(Debug, Clone, Default)]
pub struct ManualAnimator {
    pending: Rc<RefCell<VecDeque<SwipeCompletion>>>,
}

impl ManualAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Complete the oldest parked swipe. Returns false if none is parked.
    pub fn complete_next(&self) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(completion) => {
                completion.complete();
                true
            }
            None => false,
        }
    }
}

impl<E, V> SwipeAnimator<E, V> for ManualAnimator {
    fn animate(
        &mut self,
        card: &mut Card<E, V>,
        direction: SwipeDirection,
        container: Rect,
        completion: SwipeCompletion,
    ) {
        card.pose.offset = Point::new(container.width * direction.sign(), 0.0);
        card.pose.set_overlay_alpha(direction, 1.0);
        self.pending.borrow_mut().push_back(completion);
    }

    fn is_animating(&self) -> bool {
        !self.pending.borrow().is_empty()
    }
}

/// Notifier that records calls as readable strings.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn push(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl SwipeNotifier<&'static str> for Recorder {
    fn swiped_left(&mut self, element: &'static str) {
        self.push(format!("left:{element}"));
    }

    fn swiped_right(&mut self, element: &'static str) {
        self.push(format!("right:{element}"));
    }

    fn card_tapped(&mut self, element: &&'static str) {
        self.push(format!("tap:{element}"));
    }

    fn reached_end_of_stack(&mut self) {
        self.push("end".to_string());
    }
}

pub fn channel() -> (Sender<StackEvent<&'static str>>, Receiver<StackEvent<&'static str>>) {
    mpsc::channel()
}

pub fn drain(rx: &Receiver<StackEvent<&'static str>>) -> Vec<StackEvent<&'static str>> {
    rx.try_iter().collect()
}

/// Stack driven by a [`ManualAnimator`].
pub fn manual_stack(
    buffer_size: usize,
) -> (
    Stack,
    ManualAnimator,
    Mounts,
    Receiver<StackEvent<&'static str>>,
) {
    let mounts = Mounts::new();
    let animator = ManualAnimator::new();
    let (tx, rx) = channel();
    let stack = CardStack::builder(frame(), mounts.renderer(), tx)
        .buffer_size(buffer_size)
        .animator(animator.clone())
        .build()
        .expect("valid configuration");
    (stack, animator, mounts, rx)
}

pub fn loaded(stack: &Stack) -> Vec<&'static str> {
    stack.cards().map(|c| *c.element()).collect()
}

pub fn backlog(stack: &Stack) -> Vec<&'static str> {
    stack.elements().copied().collect()
}

/// Let the animator finish the front swipe and run both halves of it.
pub fn finish_swipe(stack: &mut Stack, animator: &ManualAnimator) {
    assert!(animator.complete_next(), "no swipe in flight");
    stack.advance(0);
    stack.advance(stack.config().settle_delay_ms);
}
