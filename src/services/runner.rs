use crate::domain::models::{Outcome, Task};
use crate::encoder::Encoder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub fn artifact_path(out_dir: &Path, task_id: &str) -> PathBuf {
    out_dir.join(format!("{task_id}.png"))
}

/// Execute one task. Any encoder failure is captured as a failed
/// outcome; nothing propagates past the task boundary.
pub fn run_task(task: &Task, encoder: &dyn Encoder, out_dir: &Path) -> Outcome {
    let path = artifact_path(out_dir, &task.id);
    let result = encoder.encode(&task.vector.segments, task.level, &path);
    match result {
        Ok(()) => Outcome {
            task_id: task.id.clone(),
            level: task.level,
            title: task.vector.title.clone(),
            succeeded: true,
            error: None,
        },
        Err(e) => Outcome {
            task_id: task.id.clone(),
            level: task.level,
            title: task.vector.title.clone(),
            succeeded: false,
            error: Some(e.to_string()),
        },
    }
}

/// Fan the whole matrix out over the rayon pool and join. Tasks share
/// nothing mutable: ids and paths were precomputed at expansion, so
/// no ordering or locking is needed between them. Outcomes come back
/// in expansion order, one per task.
pub fn run_matrix(tasks: &[Task], encoder: &dyn Encoder, out_dir: &Path) -> Vec<Outcome> {
    tasks
        .par_iter()
        .map(|task| run_task(task, encoder, out_dir))
        .collect()
}
