//! Demo Deck Tasks - To-do list with persistence and filtering.
//!
//! # Modules
//!
//! - [`task`] - The `Task` record, validation errors and demo seed data
//! - [`manager`] - [`TaskList`], CRUD over a persisted collection
//! - [`filter`] - Status/search filtering with an optional memoized view

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filter;
pub mod manager;
pub mod task;

pub use filter::{TaskFilter, filter_tasks};
pub use manager::{TASKS_KEY, TaskList, TaskStats};
pub use task::{Task, TaskError, demo_tasks};
