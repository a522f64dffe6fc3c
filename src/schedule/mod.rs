//! Schedule management module
//!
//! In-memory task registry with CRUD semantics:
//! - Task entity with fixed-format `YYYY-MM-DD HH:MM` timestamps
//! - TaskManager mediating add/remove/view/update through validated entry points
//! - Mutation events broadcast to explicit subscribers

pub mod error;
pub mod manager;
pub mod model;

pub use error::{ScheduleError, TimeField};
pub use manager::{TaskEvent, TaskManager, TaskObserver, TaskPatch};
pub use model::{Task, TIME_FORMAT};
