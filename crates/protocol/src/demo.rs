//! Sample data for demonstration.
//!
//! Seeds a store with tasks spread across every status and urgency band so
//! the dashboard has something to show on first launch with `--demo`.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use prodx_protocol::demo::demo_store;
//!
//! let store = demo_store(Utc::now());
//! assert_eq!(store.len(), 6);
//! ```

use chrono::{DateTime, TimeDelta, Utc};

use crate::store::TaskStore;
use crate::task::{TaskDraft, TaskStatus};

/// Sample tasks as `(title, offset from now, status)`.
fn samples() -> [(&'static str, TimeDelta, TaskStatus); 6] {
    [
        (
            "Write quarterly report",
            TimeDelta::days(2),
            TaskStatus::Pending,
        ),
        (
            "Review pull requests",
            TimeDelta::hours(5),
            TaskStatus::InProgress,
        ),
        ("Renew passport", TimeDelta::days(20), TaskStatus::Pending),
        (
            "Plan team offsite",
            TimeDelta::days(9) + TimeDelta::hours(4),
            TaskStatus::InProgress,
        ),
        (
            "Submit expense claims",
            -TimeDelta::days(1),
            TaskStatus::Pending,
        ),
        (
            "Set up CI pipeline",
            TimeDelta::days(3),
            TaskStatus::Completed,
        ),
    ]
}

/// Builds a store populated with sample tasks relative to `now`.
///
/// The store contains three pending, two in-progress and one completed
/// task; one deadline has already passed and one is close enough to fall
/// into the warning band.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use prodx_protocol::demo::demo_store;
///
/// let stats = demo_store(Utc::now()).stats();
/// assert_eq!((stats.pending, stats.in_progress, stats.completed), (3, 2, 1));
/// ```
#[must_use]
pub fn demo_store(now: DateTime<Utc>) -> TaskStore {
    let mut store = TaskStore::new();
    for (title, offset, status) in samples() {
        store.add_task(TaskDraft::new(title, now + offset).with_status(status));
    }
    store
}
