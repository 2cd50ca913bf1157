use crate::domain::models::{JsonOut, Outcome, RunReport, RunSummary};
use serde::Serialize;

pub fn summarize(outcomes: &[Outcome]) -> RunSummary {
    let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
    RunSummary {
        total: outcomes.len(),
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}

/// Emit one outcome line per task. Text mode writes `id,level,title`
/// to stdout; a failed task additionally gets an error line on stderr
/// before its outcome line. Titles are not comma-escaped (accepted
/// limitation). JSON mode emits a single aggregated report instead.
pub fn emit(json: bool, outcomes: &[Outcome]) -> anyhow::Result<RunSummary> {
    let summary = summarize(outcomes);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: RunReport { summary, outcomes },
            })?
        );
    } else {
        for o in outcomes {
            if let Some(detail) = &o.error {
                eprintln!("error {}: {}", o.task_id, detail);
            }
            println!("{},{},{}", o.task_id, o.level, o.title);
        }
    }
    Ok(summary)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}
