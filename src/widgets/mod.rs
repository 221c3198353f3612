//! UI Widgets
//!
//! Widgets draw state and emit events through the EventBus; they never
//! mutate the list directly.

pub mod expandable;
pub mod header;
pub mod list_view;
pub mod status;
