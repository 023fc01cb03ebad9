use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

fn status_marker(task: &Task) -> String {
    if task.is_completed {
        "done".green().to_string()
    } else {
        "open".yellow().to_string()
    }
}

pub fn print_task(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&task)?),
        Format::Pretty => {
            println!("[{}] {}  {}", status_marker(task), task.id, task.description);
            println!("  created: {}", task.created_date.to_rfc3339());
        }
        Format::Minimal => {
            println!(
                "{} {:4} {}",
                task.id,
                status_marker(task),
                truncate_description(&task.description, 60)
            );
        }
    }
    Ok(())
}

pub fn print_tasks(tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty => {
            for task in tasks {
                print_task(task, Format::Pretty)?;
            }
        }
        Format::Minimal => {
            for task in tasks {
                print_task(task, Format::Minimal)?;
            }
        }
    }
    Ok(())
}

pub fn truncate_description(description: &str, max_len: usize) -> String {
    if description.chars().count() > max_len {
        let truncated: String = description.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_descriptions_alone() {
        assert_eq!(truncate_description("Buy milk", 12), "Buy milk");
    }

    #[test]
    fn truncate_shortens_long_descriptions() {
        let long = "a".repeat(80);
        let out = truncate_description(&long, 60);
        assert_eq!(out.chars().count(), 60);
        assert!(out.ends_with("..."));
    }
}
