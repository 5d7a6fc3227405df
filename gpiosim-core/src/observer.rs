//! State change notifications
//!
//! The register model performs no formatting of its own. After every
//! successful mutation it hands a [`PortEvent`] to its observer, which
//! decides what (if anything) to print or record.

use heapless::Deque;

use crate::gpio::{Direction, Level, PinIndex};

/// A successful state change of the register model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortEvent {
    /// Pin direction written
    Configured { pin: PinIndex, direction: Direction },
    /// Pin driven to an explicit level
    Set { pin: PinIndex, level: Level },
    /// Pin inverted; `count` is the toggle counter after incrementing
    Toggled {
        pin: PinIndex,
        level: Level,
        count: u64,
    },
}

impl PortEvent {
    /// Pin the event refers to
    pub fn pin(&self) -> PinIndex {
        match *self {
            PortEvent::Configured { pin, .. }
            | PortEvent::Set { pin, .. }
            | PortEvent::Toggled { pin, .. } => pin,
        }
    }
}

/// Receiver of register model state changes
pub trait PortObserver {
    /// Called once per successful operation, after the state has changed
    fn on_event(&mut self, event: &PortEvent);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl PortObserver for NullObserver {
    fn on_event(&mut self, _event: &PortEvent) {}
}

impl<O: PortObserver + ?Sized> PortObserver for &mut O {
    fn on_event(&mut self, event: &PortEvent) {
        (**self).on_event(event);
    }
}

/// Observer that records the most recent `N` events
///
/// Once full, the oldest event is dropped to make room. `N` must be
/// greater than zero.
#[derive(Debug, Clone, Default)]
pub struct EventLog<const N: usize> {
    events: Deque<PortEvent, N>,
    dropped: usize,
}

impl<const N: usize> EventLog<N> {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Recorded events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PortEvent> {
        self.events.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&PortEvent> {
        self.events.back()
    }

    /// Number of events currently held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events are held
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events evicted because the log was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> PortObserver for EventLog<N> {
    fn on_event(&mut self, event: &PortEvent) {
        if self.events.is_full() {
            self.events.pop_front();
            self.dropped += 1;
        }
        // Cannot fail: a slot was freed above
        let _ = self.events.push_back(*event);
    }
}
