//! `deck tasks` - task list management.

use std::io::Write;

use demo_deck_core::{TaskId, TaskStatus};
use demo_deck_tasks::{Task, TaskError, TaskFilter, TaskList};
use tracing::info;

use super::CommandError;

/// Print tasks matching `status` and `search`.
pub fn list(
    tasks: &TaskList,
    status: TaskStatus,
    search: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let mut filter = TaskFilter::new(status, search);
    let shown = filter.apply(tasks);

    if shown.is_empty() {
        writeln!(out, "No tasks found.")?;
    }
    for task in shown {
        write_task(task, out)?;
    }

    let stats = tasks.stats();
    writeln!(
        out,
        "{} shown ({status}) | {} total, {} active, {} completed",
        shown.len(),
        stats.total,
        stats.active,
        stats.completed
    )?;
    Ok(())
}

pub fn add(tasks: &mut TaskList, description: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let id = tasks.try_add_task(description)?;
    info!(%id, "Task added");
    writeln!(out, "Added task {id}")?;
    Ok(())
}

/// Replace a task's description. Blank text is rejected here; uniqueness is not checked.
pub fn edit(
    tasks: &mut TaskList,
    id: TaskId,
    description: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TaskError::EmptyDescription.into());
    }
    require(tasks, id)?;
    tasks.edit_task(id, description);
    writeln!(out, "Updated task {id}")?;
    Ok(())
}

pub fn toggle(tasks: &mut TaskList, id: TaskId, out: &mut impl Write) -> Result<(), CommandError> {
    require(tasks, id)?;
    tasks.toggle_complete(id);
    if let Some(task) = tasks.get(id) {
        write_task(task, out)?;
    }
    Ok(())
}

pub fn delete(tasks: &mut TaskList, id: TaskId, out: &mut impl Write) -> Result<(), CommandError> {
    require(tasks, id)?;
    tasks.delete_task(id);
    writeln!(out, "Deleted task {id}")?;
    Ok(())
}

pub fn stats(tasks: &TaskList, out: &mut impl Write) -> Result<(), CommandError> {
    let stats = tasks.stats();
    writeln!(out, "Total:     {}", stats.total)?;
    writeln!(out, "Active:    {}", stats.active)?;
    writeln!(out, "Completed: {}", stats.completed)?;
    Ok(())
}

fn require(tasks: &TaskList, id: TaskId) -> Result<(), TaskError> {
    tasks.get(id).map(|_| ()).ok_or(TaskError::NotFound(id))
}

fn write_task(task: &Task, out: &mut impl Write) -> std::io::Result<()> {
    let mark = if task.completed { 'x' } else { ' ' };
    writeln!(out, "[{mark}] {:>13}  {}", task.id, task.description)
}
