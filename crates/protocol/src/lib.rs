//! Shared protocol types for the prodx application.
//!
//! This crate defines the core types used across all prodx components:
//! tasks and their statuses, deadline parsing, the countdown calculator,
//! the task store, UI messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, statuses, drafts, and the `Task` struct
//! - [`deadline`]: Turning typed deadline text into a point in time
//! - [`countdown`]: Remaining-time breakdown and urgency classification
//! - [`store`]: The task collection, its intents, and derived stats
//! - [`message`]: TUI event messages
//! - [`demo`]: Sample tasks for demonstration
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Creating and managing tasks in a store:
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//! use prodx_protocol::{Countdown, TaskDraft, TaskIntent, TaskStore};
//!
//! let mut store = TaskStore::new();
//!
//! // Add a task (starts Pending)
//! let now = Utc::now();
//! let id = store.add_task(TaskDraft::new("Write report", now + TimeDelta::days(2)));
//! assert_eq!(store.stats().pending, 1);
//!
//! // Cycle its status through an intent
//! store.apply(TaskIntent::CycleStatus { id });
//! assert_eq!(store.stats().in_progress, 1);
//!
//! // See how long is left
//! let countdown = Countdown::between(store.get(id).unwrap().deadline, now);
//! assert_eq!(countdown.days, 2);
//! ```

pub mod countdown;
pub mod deadline;
pub mod demo;
pub mod error;
pub mod message;
pub mod store;
pub mod task;

// Re-export primary types at crate root for convenience
pub use countdown::{Countdown, ReferenceWindow, Urgency, WindowMode};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use store::{TaskIntent, TaskStats, TaskStore};
pub use task::{Task, TaskDraft, TaskId, TaskStatus};
