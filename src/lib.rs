//! Accordion - scrollable list of buttons with expandable description panels
//!
//! Re-exports all modules for use by the binary target.

// Core engine (animation, items, list, events)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod dialogs;
pub mod widgets;

pub use app::AccordionApp;
pub use content::ContentEntry;
pub use core::event_bus::{downcast_event, BoxedEvent, EventBus, EventEmitter};
pub use core::list::ListCoordinator;
