//! Deferred task queue driven by an explicit millisecond clock.
//!
//! A [`DeferredQueue`] holds plain task values together with a due time.
//! Nothing runs on its own: the owner calls [`DeferredQueue::advance`] from
//! its frame tick and receives the tasks that came due, in due-time order
//! (ties broken by scheduling order).
//!
//! ```
//! use swipedeck_core::DeferredQueue;
//!
//! let mut queue = DeferredQueue::new();
//! queue.schedule(10, "later");
//! queue.schedule(0, "next tick");
//!
//! // Tasks never come due inside the call that scheduled them.
//! assert_eq!(queue.advance(0), vec!["next tick"]);
//! assert!(queue.advance(5).is_empty());
//! assert_eq!(queue.advance(5), vec!["later"]);
//! ```

use std::collections::VecDeque;

#[derive(Debug)]
struct Entry<T> {
    due_ms: u64,
    task: T,
}

/// Clock-driven queue of deferred tasks.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    now_ms: u64,
    // Sorted by due time, FIFO among equal due times.
    entries: VecDeque<Entry<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            entries: VecDeque::new(),
        }
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `task` to come due `delay_ms` after the current clock.
    ///
    /// A zero delay still defers the task to the next [`advance`](Self::advance).
    pub fn schedule(&mut self, delay_ms: u32, task: T) {
        let due_ms = self.now_ms + u64::from(delay_ms);
        let pos = self.entries.partition_point(|e| e.due_ms <= due_ms);
        self.entries.insert(pos, Entry { due_ms, task });
    }

    /// Move the clock forward and drain every task that is now due.
    pub fn advance(&mut self, delta_ms: u32) -> Vec<T> {
        self.now_ms += u64::from(delta_ms);
        let ready = self.entries.partition_point(|e| e.due_ms <= self.now_ms);
        self.entries.drain(..ready).map(|e| e.task).collect()
    }
}
