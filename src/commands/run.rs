use crate::cli::Cli;
use crate::domain::models::{PlanItem, Task, VectorItem};
use crate::encoder::QrPngEncoder;
use crate::services::{catalog, matrix, report, runner};
use anyhow::Context;

fn expand_catalog(cli: &Cli) -> anyhow::Result<Vec<Task>> {
    let vectors = catalog::resolve(cli.catalog.as_deref())?;
    matrix::expand(&vectors)
}

pub fn handle_run(cli: &Cli, jobs: Option<usize>, strict: bool) -> anyhow::Result<()> {
    let tasks = expand_catalog(cli)?;

    // Directory setup happens once up front; a missing or unwritable
    // output directory is one fatal diagnostic, not N identical task
    // failures.
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create output directory {}", cli.out_dir.display()))?;

    let encoder = QrPngEncoder;
    let outcomes = match jobs {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("cannot build worker pool")?
            .install(|| runner::run_matrix(&tasks, &encoder, &cli.out_dir)),
        None => runner::run_matrix(&tasks, &encoder, &cli.out_dir),
    };

    let summary = report::emit(cli.json, &outcomes)?;
    if strict && summary.failed > 0 {
        anyhow::bail!("{} of {} tasks failed", summary.failed, summary.total);
    }
    Ok(())
}

pub fn handle_plan(cli: &Cli) -> anyhow::Result<()> {
    let tasks = expand_catalog(cli)?;
    let items: Vec<PlanItem> = tasks
        .iter()
        .map(|t| PlanItem {
            id: t.id.clone(),
            level: t.level,
            title: t.vector.title.clone(),
        })
        .collect();
    report::print_out(cli.json, &items, |p| {
        format!("{}\t{}\t{}", p.id, p.level, p.title)
    })
}

pub fn handle_vectors(cli: &Cli) -> anyhow::Result<()> {
    let vectors = catalog::resolve(cli.catalog.as_deref())?;
    let items: Vec<VectorItem> = vectors
        .iter()
        .enumerate()
        .map(|(index, v)| VectorItem {
            index,
            title: v.title.clone(),
            segment_count: v.segments.len(),
        })
        .collect();
    report::print_out(cli.json, &items, |v| {
        format!("{}\t{}\t{}", v.index, v.title, v.segment_count)
    })
}
