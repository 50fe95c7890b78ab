//! Bounded multi-producer event bus.
//!
//! Uses crossbeam's segmented queue for lock-free handoff from whichever
//! component produced the event to the single draining sink. The capacity
//! check is advisory rather than exact under contention, which is fine for
//! an overflow guard.

use crossbeam::queue::SegQueue;
use thiserror::Error;

use super::ui::UiEvent;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("Event queue capacity exceeded")]
    QueueFull,
}

pub struct UiEventBus {
    queue: SegQueue<UiEvent>,
    capacity: usize,
}

impl UiEventBus {
    /// Create a new event bus with fixed capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: SegQueue::new(),
            capacity,
        }
    }

    pub fn push(&self, event: UiEvent) -> Result<(), BusError> {
        if self.queue.len() >= self.capacity {
            return Err(BusError::QueueFull);
        }
        self.queue.push(event);
        Ok(())
    }

    /// Dequeue the oldest event, if any.
    pub fn pop(&self) -> Option<UiEvent> {
        self.queue.pop()
    }

    /// Drains everything currently queued, in FIFO order.
    pub fn drain(&self) -> Vec<UiEvent> {
        let mut events = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop() {
            events.push(event);
        }
        events
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ui::{IndicatorState, UiEventKind};

    fn indicator_event(ts: u64, state: IndicatorState) -> UiEvent {
        UiEvent::new(ts, UiEventKind::ConnectionIndicator { state })
    }

    #[test]
    fn push_pop_roundtrip_keeps_order() {
        let bus = UiEventBus::with_capacity(64);
        for i in 0..64 {
            bus.push(indicator_event(i, IndicatorState::Neutral))
                .unwrap();
        }
        for i in 0..64 {
            assert_eq!(bus.pop().unwrap().timestamp_ns, i);
        }
        assert!(bus.pop().is_none());
    }

    #[test]
    fn signals_queue_full() {
        let bus = UiEventBus::with_capacity(2);
        bus.push(indicator_event(0, IndicatorState::Probing)).unwrap();
        bus.push(indicator_event(1, IndicatorState::Online)).unwrap();
        assert_eq!(
            bus.push(indicator_event(2, IndicatorState::Offline)),
            Err(BusError::QueueFull)
        );
    }

    #[test]
    fn drain_empties_the_bus() {
        let bus = UiEventBus::with_capacity(8);
        for i in 0..5 {
            bus.push(indicator_event(i, IndicatorState::Neutral))
                .unwrap();
        }
        let drained = bus.drain();
        assert_eq!(drained.len(), 5);
        assert!(bus.is_empty());
        assert!(drained.windows(2).all(|w| w[0].timestamp_ns < w[1].timestamp_ns));
    }
}
