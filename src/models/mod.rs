//! Domain models for the task list.
//!
//! - [`Task`]: one list entry, created only through the manager's `add`.
//! - [`Priority`]: the closed Low/Medium/High tier, encoded as 1/2/3.
//! - [`PriorityStyle`]: display label and style class for a tier.

mod priority;
mod task;

pub use priority::*;
pub use task::*;
