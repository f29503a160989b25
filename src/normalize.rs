use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::date::parse_date;
use crate::deadline::{compose, compose_event_range, parse_time, TASK_DEADLINE_DEFAULT};
use crate::error::NormalizeError;
use crate::recurrence::advance_past;
use crate::types::{
    EventDraft, NormalizedEvent, NormalizedTask, Priority, RecurrencePolicy, TaskDraft,
};

fn parse_optional_time(raw: &Option<String>) -> Result<Option<chrono::NaiveTime>, NormalizeError> {
    match raw {
        Some(s) if !s.trim().is_empty() => Ok(Some(parse_time(s)?)),
        _ => Ok(None),
    }
}

/// Normalize a raw task draft: parse the date in whatever shape the screen
/// collected it, fill in the end-of-day default time, and resolve the
/// integer priority/recurrence codes into tagged values.
pub fn normalize_task(draft: &TaskDraft) -> Result<NormalizedTask, NormalizeError> {
    let date = parse_date(&draft.date)?;
    let time = parse_optional_time(&draft.time)?;
    let deadline = compose(date, time, *TASK_DEADLINE_DEFAULT);

    let priority = Priority::from_code(draft.priority).unwrap_or_else(|| {
        warn!(
            "priority code {} out of range for '{}', falling back to Low",
            draft.priority, draft.name
        );
        Priority::Low
    });

    // A recurrence selection implies repeatable; the repeatable flag alone,
    // with no selection, collapses to a one-shot task.
    let policy = RecurrencePolicy::from_code_lossy(draft.repeatabletype);
    if draft.repeatable && !policy.is_repeating() {
        debug!("'{}' marked repeatable without a recurrence, treating as one-shot", draft.name);
    }

    Ok(NormalizedTask {
        name: draft.name.clone(),
        description: draft.description.clone(),
        deadline,
        priority,
        policy,
        done: draft.done,
    })
}

/// Normalize a raw event draft into a composed start/end range.
pub fn normalize_event(draft: &EventDraft) -> Result<NormalizedEvent, NormalizeError> {
    let start_date = parse_date(&draft.date)?;
    let end_date = match &draft.date_end {
        Some(s) if !s.trim().is_empty() => Some(parse_date(s)?),
        _ => None,
    };
    let start_time = parse_optional_time(&draft.starttime)?;
    let end_time = parse_optional_time(&draft.endtime)?;

    let range = compose_event_range(start_date, start_time, end_date, end_time)?;

    Ok(NormalizedEvent {
        name: draft.name.clone(),
        description: draft.description.clone(),
        start: range.start,
        end: range.end,
    })
}

/// The mark-done flow: a repeatable task yields the draft of its next
/// occurrence, advanced past `now`; a one-shot task yields nothing.
pub fn complete_task(
    task: &NormalizedTask,
    now: NaiveDateTime,
) -> Result<Option<NormalizedTask>, NormalizeError> {
    if !task.policy.is_repeating() {
        return Ok(None);
    }

    let next = advance_past(task.deadline, task.policy, now)?;
    Ok(Some(NormalizedTask {
        deadline: next,
        done: false,
        ..task.clone()
    }))
}
