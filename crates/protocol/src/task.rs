//! Task-related types.
//!
//! This module defines the core task types used throughout the prodx
//! application: task identifiers, statuses, drafts, and the task itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// The progress status of a task.
///
/// Statuses form a cycle: `Pending → InProgress → Completed → Pending`.
/// Nothing advances a status automatically; an expired deadline leaves
/// the status untouched.
///
/// # Examples
///
/// ```
/// use prodx_protocol::TaskStatus;
///
/// let status = TaskStatus::default();
/// assert_eq!(status, TaskStatus::Pending);
/// assert_eq!(status.next(), TaskStatus::InProgress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

impl TaskStatus {
    /// Returns all statuses in cycle order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::all()[0], TaskStatus::Pending);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Pending, Self::InProgress, Self::Completed]
    }

    /// Returns the successor of this status in the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
    /// assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Completed);
    /// assert_eq!(TaskStatus::Completed.next(), TaskStatus::Pending);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Returns the predecessor of this status in the cycle.
    ///
    /// Used by the creation form to step backwards through the choices.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::InProgress => Self::Pending,
            Self::Completed => Self::InProgress,
        }
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodx_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::InProgress.display_name(), "In Progress");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns the wire name of the status (`pending`, `in-progress`, `completed`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of a task before it has been assigned an identifier.
///
/// Produced by the creation form and handed to the store.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use prodx_protocol::{TaskDraft, TaskStatus};
///
/// let draft = TaskDraft::new("Write report", Utc::now());
/// assert_eq!(draft.status, TaskStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short summary of the task.
    pub title: String,
    /// When the task is due.
    #[serde(deserialize_with = "crate::deadline::deserialize")]
    pub deadline: DateTime<Utc>,
    /// Initial status.
    #[serde(default)]
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Creates a pending draft with the given title and deadline.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            deadline,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the initial status of the draft.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// A tracked task.
///
/// The title and deadline are fixed at creation; only the status changes
/// afterwards.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use prodx_protocol::{Task, TaskDraft, TaskId, TaskStatus};
///
/// let id = TaskId::new_v4();
/// let task = Task::from_draft(id, TaskDraft::new("Fix bug", Utc::now()));
/// assert_eq!(task.id, id);
/// assert_eq!(task.status, TaskStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// When the task is due.
    #[serde(deserialize_with = "crate::deadline::deserialize")]
    pub deadline: DateTime<Utc>,
    /// Current progress status.
    pub status: TaskStatus,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task's status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a draft with the given identifier.
    ///
    /// Timestamps are set to the current time.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            deadline: draft.deadline,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the task's status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use prodx_protocol::{Task, TaskDraft, TaskId, TaskStatus};
    ///
    /// let mut task = Task::from_draft(TaskId::new_v4(), TaskDraft::new("Work item", Utc::now()));
    /// task.set_status(TaskStatus::Completed);
    /// assert_eq!(task.status, TaskStatus::Completed);
    /// ```
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
