//! In-memory task registry

use serde::Serialize;
use tracing::debug;

use super::error::{ScheduleError, TimeField};
use super::model::{parse_time, Task};

/// Notification broadcast to subscribers after a successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TaskEvent {
    Added { description: String },
    Removed { description: String, count: usize },
    Updated { description: String },
}

/// Callback handle invoked for every mutation, in registration order.
pub type TaskObserver = Box<dyn FnMut(&TaskEvent)>;

/// Optional new values for an update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub priority: Option<String>,
}

/// In-memory registry mediating all task CRUD.
///
/// Tasks are kept in insertion order, which doubles as the display order.
/// Descriptions are not unique: remove deletes every match, while update
/// touches only the first. Construct explicitly and pass by reference;
/// there is no global instance.
#[derive(Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
    observers: Vec<TaskObserver>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Register a mutation observer. Observers fire after each successful
    /// add, remove, or update, in the order they were registered.
    pub fn subscribe(&mut self, observer: TaskObserver) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: TaskEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Add a task to the end of the collection.
    ///
    /// Both time strings must parse against the fixed format or nothing is
    /// added. End before start is accepted; chronological order between the
    /// two is never checked.
    pub fn add_task(
        &mut self,
        description: &str,
        start_time: &str,
        end_time: &str,
        priority: &str,
    ) -> Result<(), ScheduleError> {
        let start = parse_time(TimeField::Start, start_time)?;
        let end = parse_time(TimeField::End, end_time)?;

        self.tasks.push(Task::new(description, start, end, priority));
        debug!(description, "task added");
        self.notify(TaskEvent::Added {
            description: description.to_string(),
        });
        Ok(())
    }

    /// Remove every task whose description matches exactly (case-sensitive).
    ///
    /// Zero matches is not an error; the caller cannot distinguish it from
    /// success at this layer.
    pub fn remove_task(&mut self, description: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.description != description);
        let count = before - self.tasks.len();

        debug!(description, count, "tasks removed");
        if count > 0 {
            self.notify(TaskEvent::Removed {
                description: description.to_string(),
                count,
            });
        }
    }

    /// Render the 1-based numbered listing in insertion order, or
    /// "No tasks available." when the collection is empty.
    pub fn render_tasks(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks available.".to_string();
        }

        let mut lines = Vec::new();
        for (i, task) in self.tasks.iter().enumerate() {
            lines.push(format!("Task {}:", i + 1));
            lines.push(task.to_string());
            lines.push("------------------------------".to_string());
        }
        lines.join("\n")
    }

    /// Update the first task whose description matches exactly.
    ///
    /// Patch fields apply independently: a time string that fails to parse
    /// is collected into the returned list while every other supplied field
    /// still takes effect. Returns `TaskNotFound` (and mutates nothing)
    /// when no task matches.
    pub fn update_task(
        &mut self,
        description: &str,
        patch: TaskPatch,
    ) -> Result<Vec<ScheduleError>, ScheduleError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.description == description)
            .ok_or_else(|| ScheduleError::TaskNotFound(description.to_string()))?;

        let mut rejected = Vec::new();

        if let Some(new_description) = patch.description {
            task.description = new_description;
        }
        if let Some(start_time) = patch.start_time {
            match parse_time(TimeField::Start, &start_time) {
                Ok(start) => task.start_time = start,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(end_time) = patch.end_time {
            match parse_time(TimeField::End, &end_time) {
                Ok(end) => task.end_time = end,
                Err(err) => rejected.push(err),
            }
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        debug!(description, rejected = rejected.len(), "task updated");
        self.notify(TaskEvent::Updated {
            description: description.to_string(),
        });
        Ok(rejected)
    }
}
