use log::warn;
use serde::{Deserialize, Serialize};

use crate::deadline::Deadline;

/// Task priority as the screens present it. The wire encoding is an
/// integer in 1..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Middle,
    High,
}

impl Priority {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Priority::Low),
            2 => Some(Priority::Middle),
            3 => Some(Priority::High),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Priority::Low => 1,
            Priority::Middle => 2,
            Priority::High => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Middle => "Middle",
            Priority::High => "High",
        }
    }
}

/// Display label for a raw wire priority code. Out-of-range codes render
/// as "Unknown" instead of failing; read paths never reject stored data.
pub fn priority_label(code: i64) -> &'static str {
    match Priority::from_code(code) {
        Some(priority) => priority.label(),
        None => "Unknown",
    }
}

/// How a repeatable task derives its next deadline. Wire encoding is an
/// integer in 0..3 paired with a `repeatable` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrencePolicy {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RecurrencePolicy {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RecurrencePolicy::None),
            1 => Some(RecurrencePolicy::Daily),
            2 => Some(RecurrencePolicy::Weekly),
            3 => Some(RecurrencePolicy::Monthly),
            _ => None,
        }
    }

    /// Like `from_code`, but maps unknown codes to `None` with a warning.
    pub fn from_code_lossy(code: i64) -> Self {
        RecurrencePolicy::from_code(code).unwrap_or_else(|| {
            warn!("unknown recurrence code {code}, treating as not repeating");
            RecurrencePolicy::None
        })
    }

    pub fn code(&self) -> i64 {
        match self {
            RecurrencePolicy::None => 0,
            RecurrencePolicy::Daily => 1,
            RecurrencePolicy::Weekly => 2,
            RecurrencePolicy::Monthly => 3,
        }
    }

    /// Display label; a non-repeating task shows nothing.
    pub fn label(&self) -> &'static str {
        match self {
            RecurrencePolicy::None => "",
            RecurrencePolicy::Daily => "Daily",
            RecurrencePolicy::Weekly => "Weekly",
            RecurrencePolicy::Monthly => "Monthly",
        }
    }

    pub fn is_repeating(&self) -> bool {
        !matches!(self, RecurrencePolicy::None)
    }
}

fn default_priority() -> i64 {
    1
}

/// Raw task input as the creation/edit screens collect it: strings straight
/// from the pickers, integer codes for priority and recurrence.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i64,
    #[serde(default)]
    pub repeatable: bool,
    #[serde(default)]
    pub repeatabletype: i64,
    #[serde(default)]
    pub done: bool,
}

/// Raw event input from the event creation/edit screens.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub date_end: Option<String>,
    #[serde(default)]
    pub starttime: Option<String>,
    #[serde(default)]
    pub endtime: Option<String>,
}

/// A task after normalization: canonical deadline, tagged enums instead of
/// integer codes. This is what filtering and rendering operate on.
#[derive(Debug, Clone)]
pub struct NormalizedTask {
    pub name: String,
    pub description: String,
    pub deadline: Deadline,
    pub priority: Priority,
    pub policy: RecurrencePolicy,
    pub done: bool,
}

impl NormalizedTask {
    /// The request body for the task create/update endpoints.
    pub fn payload(&self) -> TaskPayload {
        TaskPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            deadline: self.deadline.to_wire(),
            priority: self.priority.code(),
            repeatable: self.policy.is_repeating(),
            repeatabletype: self.policy.code(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub name: String,
    pub description: String,
    pub start: Deadline,
    pub end: Deadline,
}

impl NormalizedEvent {
    pub fn payload(&self) -> EventPayload {
        EventPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            starttime: self.start.to_wire(),
            endtime: self.end.to_wire(),
        }
    }
}

/// Wire shape of the task create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    pub deadline: String,
    pub priority: i64,
    pub repeatable: bool,
    pub repeatabletype: i64,
}

/// Wire shape of the event create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    pub starttime: String,
    pub endtime: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(1), "Low");
        assert_eq!(priority_label(2), "Middle");
        assert_eq!(priority_label(3), "High");
    }

    #[test]
    fn test_priority_label_out_of_range() {
        assert_eq!(priority_label(5), "Unknown");
        assert_eq!(priority_label(0), "Unknown");
        assert_eq!(priority_label(-1), "Unknown");
    }

    #[test]
    fn test_priority_codes_round_trip() {
        for code in 1..=3 {
            let priority = Priority::from_code(code).unwrap();
            assert_eq!(priority.code(), code);
        }
        assert_eq!(Priority::from_code(4), None);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Middle);
        assert!(Priority::Middle > Priority::Low);
    }

    #[test]
    fn test_recurrence_labels() {
        assert_eq!(RecurrencePolicy::None.label(), "");
        assert_eq!(RecurrencePolicy::Daily.label(), "Daily");
        assert_eq!(RecurrencePolicy::Weekly.label(), "Weekly");
        assert_eq!(RecurrencePolicy::Monthly.label(), "Monthly");
    }

    #[test]
    fn test_recurrence_from_code_lossy_fallback() {
        assert_eq!(RecurrencePolicy::from_code_lossy(2), RecurrencePolicy::Weekly);
        assert_eq!(RecurrencePolicy::from_code_lossy(7), RecurrencePolicy::None);
        assert_eq!(RecurrencePolicy::from_code_lossy(-1), RecurrencePolicy::None);
    }

    #[test]
    fn test_task_payload_wire_shape() {
        let task = NormalizedTask {
            name: "Do homework".to_string(),
            description: String::new(),
            deadline: Deadline::new(
                NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
                NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
            ),
            priority: Priority::Middle,
            policy: RecurrencePolicy::Weekly,
            done: false,
        };
        let json = serde_json::to_value(task.payload()).unwrap();
        assert_eq!(json["deadline"], "2024-12-25T23:59:00");
        assert_eq!(json["priority"], 2);
        assert_eq!(json["repeatable"], true);
        assert_eq!(json["repeatabletype"], 2);
        // Empty description stays out of the request body
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_task_draft_defaults() {
        let draft: TaskDraft =
            serde_json::from_str(r#"{"name": "Water plants", "date": "2025-04-01"}"#).unwrap();
        assert_eq!(draft.priority, 1);
        assert_eq!(draft.repeatabletype, 0);
        assert!(!draft.repeatable);
        assert!(!draft.done);
        assert_eq!(draft.time, None);
    }
}
