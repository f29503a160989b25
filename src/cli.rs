use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for deadline-normalize
#[derive(Parser)]
#[command(name = "deadline-normalize")]
#[command(about = "Normalize task and event drafts into household planner API payloads")]
#[command(version)]
pub struct Cli {
    /// JSON draft file with raw picker input
    #[arg(long)]
    pub input: PathBuf,

    /// Draft kind: tasks, events
    #[arg(long, default_value = "tasks", value_parser = ["tasks", "events"])]
    pub mode: String,

    /// Task filter: deadline, priority, done
    #[arg(long, default_value = "deadline", value_parser = ["deadline", "priority", "done"])]
    pub filter: String,

    /// Output format: json, md
    #[arg(long, default_value = "json", value_parser = ["json", "md"])]
    pub format: String,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Mark the named task draft done and emit its next occurrence
    #[arg(long)]
    pub complete: Option<String>,

    /// Timezone "now" is resolved in (IANA timezone, e.g., "Europe/Kyiv")
    #[arg(long, default_value = "Europe/Kyiv", value_parser = validate_tz)]
    pub tz: String,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Validate an IANA timezone name
fn validate_tz(s: &str) -> Result<String, String> {
    s.parse::<Tz>()
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid timezone '{s}': {e}"))
}
