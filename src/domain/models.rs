use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-packing scheme for a segment's content. Closed set; anything
/// else in a catalog file is a deserialization error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentMode::Numeric => "numeric",
            SegmentMode::Alphanumeric => "alphanumeric",
            SegmentMode::Byte => "byte",
            SegmentMode::Kanji => "kanji",
        };
        f.write_str(s)
    }
}

/// Error-correction redundancy tier. Iteration order is fixed as
/// L, M, Q, H via [`CorrectionLevel::ALL`]; task identifiers depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectionLevel {
    L,
    M,
    Q,
    H,
}

impl CorrectionLevel {
    pub const ALL: [CorrectionLevel; 4] = [
        CorrectionLevel::L,
        CorrectionLevel::M,
        CorrectionLevel::Q,
        CorrectionLevel::H,
    ];
}

impl fmt::Display for CorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CorrectionLevel::L => "L",
            CorrectionLevel::M => "M",
            CorrectionLevel::Q => "Q",
            CorrectionLevel::H => "H",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    pub mode: SegmentMode,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestVector {
    pub title: String,
    pub segments: Vec<Segment>,
}

/// One (vector, level) pair from the matrix expansion. The id is
/// assigned once during expansion and never recomputed.
#[derive(Clone, Debug, Serialize)]
pub struct Task {
    pub vector_index: usize,
    pub vector: TestVector,
    pub level: CorrectionLevel,
    pub id: String,
}

/// Terminal record of one executed task. `error` is present exactly
/// when `succeeded` is false.
#[derive(Clone, Debug, Serialize)]
pub struct Outcome {
    pub task_id: String,
    pub level: CorrectionLevel,
    pub title: String,
    pub succeeded: bool,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Serialize)]
pub struct RunReport<'a> {
    pub summary: RunSummary,
    pub outcomes: &'a [Outcome],
}

#[derive(Serialize)]
pub struct PlanItem {
    pub id: String,
    pub level: CorrectionLevel,
    pub title: String,
}

#[derive(Serialize)]
pub struct VectorItem {
    pub index: usize,
    pub title: String,
    pub segment_count: usize,
}
