//! Fixed-capacity event queue, safe to fill from interrupt context
//!
//! The queue is a critical-section protected ring. Producers, usually
//! interrupt handlers or input monitors, push with [`EventQueue::push`];
//! the UI drains it with [`EventQueue::pop`] from the main loop. When
//! the queue is full the oldest event is dropped so the freshest input
//! always fits, and the loss is counted.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::Event;

/// Capacity used when the `N` type parameter is left at its default.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Interrupt-safe FIFO of input [`Event`]s.
///
/// `N` is the capacity in events. All methods take `&self` and are
/// usable from both interrupt and thread context, so a queue is
/// typically a `static`:
///
/// ```
/// use bezel_events::{Event, EventQueue};
///
/// static QUEUE: EventQueue = EventQueue::new();
///
/// QUEUE.push(Event::ButtonPressed {
///     button: 0,
///     presses: 1,
/// });
/// assert!(QUEUE.pop().is_some());
/// ```
pub struct EventQueue<const N: usize = DEFAULT_QUEUE_CAPACITY> {
    inner: Mutex<RefCell<Inner<N>>>,
}

struct Inner<const N: usize> {
    events: Deque<Event, N>,
    dropped: u32,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                events: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Pushes an event, dropping the oldest queued event when full.
    pub fn push(&self, event: Event) {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            if inner.events.is_full() {
                inner.events.pop_front();
                inner.dropped = inner.dropped.saturating_add(1);
            }
            // Cannot fail, a slot was freed above if none was spare.
            let _ = inner.events.push_back(event);
        });
    }

    /// Takes the oldest queued event, if any.
    pub fn pop(&self) -> Option<Event> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).events.pop_front())
    }

    /// Number of events currently queued.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow_ref(cs).events.len())
    }

    /// Whether no events are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity in events.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of events lost to overflow since creation or the last
    /// [`take_dropped`](EventQueue::take_dropped).
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow_ref(cs).dropped)
    }

    /// Returns the overflow count and resets it to zero.
    pub fn take_dropped(&self) -> u32 {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            core::mem::replace(&mut inner.dropped, 0)
        })
    }

    /// Discards all queued events. The overflow count is kept.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).events.clear());
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
