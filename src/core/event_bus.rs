//! Deferred Event Bus for decoupling list widgets from the coordinator.
//!
//! Architecture:
//! - emit() queues an event; nothing runs at emit time
//! - poll() returns queued events for batch processing in the update loop
//!
//! Widgets never hold a reference to the coordinator. They get an
//! `EventEmitter` clone and emit click events; the app drains the queue once
//! per frame and routes each event.

use std::any::Any;
use std::sync::{Arc, Mutex};
use log::warn;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 256;

/// Marker trait for events. Events must be Send + Sync + 'static.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

type Queue = Arc<Mutex<Vec<BoxedEvent>>>;

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

/// Event Bus with deferred processing.
#[derive(Clone)]
pub struct EventBus {
    queue: Queue,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue_len", &self.queue_len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue event for deferred processing.
    pub fn emit<E: Event + Clone>(&self, event: E) {
        enqueue(&self.queue, Box::new(event));
    }

    /// Poll all queued events for batch processing.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Get an emitter handle for passing to UI components.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            queue: Arc::clone(&self.queue),
        }
    }

    /// Check queue length
    pub fn queue_len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Lightweight emitter handle for UI components.
#[derive(Clone)]
pub struct EventEmitter {
    queue: Queue,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("queue_len", &self.queue.lock().map(|q| q.len()).unwrap_or(0))
            .finish()
    }
}

impl EventEmitter {
    /// Queue event on the bus this handle came from
    pub fn emit<E: Event + Clone>(&self, event: E) {
        enqueue(&self.queue, Box::new(event));
    }
}

fn enqueue(queue: &Queue, event: BoxedEvent) {
    let mut queue = queue.lock().unwrap_or_else(|e| e.into_inner());
    if queue.len() >= MAX_QUEUE_SIZE {
        let evict_count = queue.len() / 2;
        warn!("EventBus queue full ({} events), evicting oldest {}", queue.len(), evict_count);
        queue.drain(0..evict_count);
    }
    queue.push(event);
}

/// Helper: downcast BoxedEvent to concrete type
///
/// Must explicitly deref to `dyn Event` before calling `as_any()`: the blanket
/// impl also covers `Box<dyn Event>` and would hide the inner type.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEvent { value: i32 }

    #[derive(Clone, Debug)]
    struct OtherEvent;

    #[test]
    fn test_emit_queues_for_poll_in_order() {
        let bus = EventBus::new();

        bus.emit(TestEvent { value: 1 });
        bus.emit(OtherEvent);
        bus.emit(TestEvent { value: 2 });

        let events = bus.poll();
        assert_eq!(events.len(), 3);
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(1));
        assert!(downcast_event::<OtherEvent>(&events[1]).is_some());
        assert!(downcast_event::<TestEvent>(&events[1]).is_none());
        assert_eq!(downcast_event::<TestEvent>(&events[2]).map(|e| e.value), Some(2));

        assert_eq!(bus.poll().len(), 0);
    }

    #[test]
    fn test_emitter_handle_shares_queue() {
        let bus = EventBus::new();
        let emitter = bus.emitter();
        emitter.emit(TestEvent { value: 42 });
        bus.clone().emitter().emit(OtherEvent);

        assert_eq!(bus.queue_len(), 2);
        let events = bus.poll();
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(42));
        assert!(downcast_event::<OtherEvent>(&events[1]).is_some());
        assert_eq!(bus.queue_len(), 0);
    }

    #[test]
    fn test_queue_eviction() {
        let bus = EventBus::new();
        for value in 0..(MAX_QUEUE_SIZE as i32 + 1) {
            bus.emit(TestEvent { value });
        }
        let events = bus.poll();
        assert_eq!(events.len(), MAX_QUEUE_SIZE / 2 + 1);
        // Newest survives
        let last = events.last().and_then(downcast_event::<TestEvent>).map(|e| e.value);
        assert_eq!(last, Some(MAX_QUEUE_SIZE as i32));
    }
}
