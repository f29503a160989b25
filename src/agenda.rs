use crate::types::NormalizedTask;

/// Apply a task-list filter mode, mirroring the server's `?filter=` query:
/// pending tasks by deadline (the default), pending tasks by priority, or
/// completed tasks only.
pub fn filter_tasks(
    mut tasks: Vec<NormalizedTask>,
    mode: &str,
) -> Result<Vec<NormalizedTask>, Box<dyn std::error::Error>> {
    match mode {
        "" | "deadline" => {
            tasks.retain(|t| !t.done);
            tasks.sort_by_key(|t| t.deadline);
        }
        "priority" => {
            tasks.retain(|t| !t.done);
            tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        "done" => {
            tasks.retain(|t| t.done);
        }
        _ => return Err("Invalid filter mode. Use: deadline, priority, done".into()),
    }
    Ok(tasks)
}
