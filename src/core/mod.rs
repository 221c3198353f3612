//! Core expand/collapse engine - animation, items, list, events
//!
//! These modules are independent of the widgets and driven by explicit
//! timestamps, so they can be exercised without a window.

pub mod animation;
pub mod event_bus;
pub mod item;
pub mod item_events;
pub mod list;

// Re-exports for convenience
pub use animation::HeightAnimation;
pub use event_bus::EventBus;
pub use item::{AnimationConfig, ItemController, ItemPhase, PanelHeightPolicy};
pub use list::{ActivationHandle, ListCoordinator};
