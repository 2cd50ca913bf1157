use crate::domain::models::{CorrectionLevel, Task, TestVector};

/// The identifier format carries four digits, so the catalog cannot
/// address more vectors than this.
pub const MAX_VECTORS: usize = 10_000;

/// Deterministic task identifier: `<zero-padded index>-<level>`,
/// e.g. `0007-Q`. Pure function of its inputs; doubles as the
/// artifact's base filename.
pub fn task_id(vector_index: usize, level: CorrectionLevel) -> anyhow::Result<String> {
    if vector_index >= MAX_VECTORS {
        anyhow::bail!(
            "vector index {} exceeds the {}-vector identifier space",
            vector_index,
            MAX_VECTORS
        );
    }
    Ok(format!("{vector_index:04}-{level}"))
}

/// Ordered cross product of the catalog and the correction levels:
/// outer loop over vectors in catalog order, inner loop over
/// L, M, Q, H. Ids are assigned here and never mutated afterwards.
pub fn expand(vectors: &[TestVector]) -> anyhow::Result<Vec<Task>> {
    let mut tasks = Vec::with_capacity(vectors.len() * CorrectionLevel::ALL.len());
    for (vector_index, vector) in vectors.iter().enumerate() {
        for level in CorrectionLevel::ALL {
            tasks.push(Task {
                vector_index,
                vector: vector.clone(),
                level,
                id: task_id(vector_index, level)?,
            });
        }
    }
    Ok(tasks)
}
