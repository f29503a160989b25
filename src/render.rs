use chrono::NaiveDateTime;

use crate::types::{NormalizedEvent, NormalizedTask};

/// Render tasks as a Markdown agenda: overdue first, then upcoming, then
/// done. Dates use the display format shown in the app's read-only fields.
pub fn render_tasks_markdown(tasks: &[NormalizedTask], now: NaiveDateTime) -> String {
    let mut output = String::from("# Tasks\n\n");

    let overdue: Vec<&NormalizedTask> = tasks
        .iter()
        .filter(|t| !t.done && t.deadline.is_past(now))
        .collect();
    let upcoming: Vec<&NormalizedTask> = tasks
        .iter()
        .filter(|t| !t.done && !t.deadline.is_past(now))
        .collect();
    let done: Vec<&NormalizedTask> = tasks.iter().filter(|t| t.done).collect();

    for (title, group) in [("Overdue", overdue), ("Upcoming", upcoming), ("Done", done)] {
        if group.is_empty() {
            continue;
        }
        output.push_str(&format!("## {title}\n\n"));
        for task in group {
            render_task_md(&mut output, task);
        }
    }

    output
}

fn render_task_md(output: &mut String, task: &NormalizedTask) {
    output.push_str(&format!("### {}\n", task.name));
    output.push_str(&format!("- Until: {}\n", task.deadline.format_display()));
    output.push_str(&format!("- Priority: {}\n", task.priority.label()));
    if task.policy.is_repeating() {
        output.push_str(&format!("- Repeats: {}\n", task.policy.label()));
    }
    if !task.description.is_empty() {
        output.push_str(&format!("\n{}\n", task.description));
    }
    output.push('\n');
}

/// Render events as Markdown, one section per event with its range.
pub fn render_events_markdown(events: &[NormalizedEvent]) -> String {
    let mut output = String::from("# Events\n\n");
    for event in events {
        output.push_str(&format!("## {}\n", event.name));
        output.push_str(&format!("- From: {}\n", event.start.format_display()));
        output.push_str(&format!("- To: {}\n", event.end.format_display()));
        if !event.description.is_empty() {
            output.push_str(&format!("\n{}\n", event.description));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_deadline;
    use crate::types::{Priority, RecurrencePolicy};

    fn task(name: &str, deadline: &str, policy: RecurrencePolicy, done: bool) -> NormalizedTask {
        NormalizedTask {
            name: name.to_string(),
            description: String::new(),
            deadline: parse_deadline(deadline).unwrap(),
            priority: Priority::Middle,
            policy,
            done,
        }
    }

    #[test]
    fn test_render_tasks_sections() {
        let tasks = vec![
            task("rent", "2024-12-20T23:59:00", RecurrencePolicy::Monthly, false),
            task("dishes", "2024-12-27T23:59:00", RecurrencePolicy::None, false),
            task("laundry", "2024-12-23T23:59:00", RecurrencePolicy::None, true),
        ];
        let now = parse_deadline("2024-12-25T12:00:00").unwrap().as_datetime();
        let md = render_tasks_markdown(&tasks, now);

        assert!(md.contains("## Overdue\n\n### rent"));
        assert!(md.contains("## Upcoming\n\n### dishes"));
        assert!(md.contains("## Done\n\n### laundry"));
        assert!(md.contains("- Until: 20.12.2024 23:59"));
        assert!(md.contains("- Repeats: Monthly"));
        assert!(md.contains("- Priority: Middle"));
    }

    #[test]
    fn test_render_tasks_skips_empty_sections() {
        let tasks = vec![task("dishes", "2024-12-27T23:59:00", RecurrencePolicy::None, false)];
        let now = parse_deadline("2024-12-25T12:00:00").unwrap().as_datetime();
        let md = render_tasks_markdown(&tasks, now);
        assert!(!md.contains("## Overdue"));
        assert!(!md.contains("## Done"));
    }

    #[test]
    fn test_render_events() {
        let events = vec![NormalizedEvent {
            name: "Birthday".to_string(),
            description: "Cake at home".to_string(),
            start: parse_deadline("2025-03-01T00:00:00").unwrap(),
            end: parse_deadline("2025-03-01T23:59:59").unwrap(),
        }];
        let md = render_events_markdown(&events);
        assert!(md.contains("## Birthday"));
        assert!(md.contains("- From: 01.03.2025 00:00"));
        assert!(md.contains("- To: 01.03.2025 23:59"));
        assert!(md.contains("Cake at home"));
    }
}
