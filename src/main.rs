mod agenda;
mod cli;
mod clock;
mod date;
mod deadline;
mod error;
mod normalize;
mod recurrence;
mod render;
mod types;

use clap::Parser;
use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Write};

use crate::clock::{Clock, SystemClock};
use crate::types::{EventDraft, EventPayload, TaskDraft, TaskPayload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let tz: chrono_tz::Tz = cli.tz.parse()?;
    let now = SystemClock::new(tz).now();

    let raw = fs::read_to_string(&cli.input)?;

    let output = match cli.mode.as_str() {
        "tasks" => {
            let drafts: Vec<TaskDraft> = serde_json::from_str(&raw)?;
            let mut tasks = Vec::with_capacity(drafts.len());
            for draft in &drafts {
                tasks.push(normalize::normalize_task(draft)?);
            }
            debug!("normalized {} task drafts", tasks.len());

            if let Some(name) = &cli.complete {
                let task = tasks
                    .iter()
                    .find(|t| t.name == *name)
                    .ok_or_else(|| format!("No task draft named '{name}'"))?;
                // One-shot tasks have no follow-up occurrence; emit null
                let next = normalize::complete_task(task, now)?;
                serde_json::to_string_pretty(&next.map(|t| t.payload()))?
            } else {
                let tasks = agenda::filter_tasks(tasks, &cli.filter)?;
                match cli.format.as_str() {
                    "json" => {
                        let payloads: Vec<TaskPayload> =
                            tasks.iter().map(|t| t.payload()).collect();
                        serde_json::to_string_pretty(&payloads)?
                    }
                    "md" => render::render_tasks_markdown(&tasks, now),
                    _ => return Err("Invalid format".into()),
                }
            }
        }
        "events" => {
            let drafts: Vec<EventDraft> = serde_json::from_str(&raw)?;
            let mut events = Vec::with_capacity(drafts.len());
            for draft in &drafts {
                events.push(normalize::normalize_event(draft)?);
            }
            debug!("normalized {} event drafts", events.len());

            match cli.format.as_str() {
                "json" => {
                    let payloads: Vec<EventPayload> =
                        events.iter().map(|e| e.payload()).collect();
                    serde_json::to_string_pretty(&payloads)?
                }
                "md" => render::render_events_markdown(&events),
                _ => return Err("Invalid format".into()),
            }
        }
        _ => return Err("Invalid mode. Use: tasks, events".into()),
    };

    if let Some(out_path) = cli.output {
        fs::write(out_path, output)?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
