//! Priority and deadline ordered task list.
//!
//! [`TaskListManager`] owns the tasks and keeps them sorted: highest priority
//! first, earliest deadline first within a priority. A presentation layer
//! (see [`session`]) drives it through `add`, `toggle_done` and `delete`, and
//! re-reads the ordered view after every mutation to redraw.

pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod render;
pub mod session;

pub use error::{TaskError, ValidationError};
pub use manager::TaskListManager;
