//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/catalog/ui layers.
//!
//! # Architecture
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState mutation → Actions
//!                                                        │
//!                                         compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`list`]: Search and pagination over the country catalog
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use list::{ListViewModel, LoadState, VisiblePage, PAGE_SIZE};
pub use modes::InputMode;
pub use state::AppState;
