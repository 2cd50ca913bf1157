use crate::domain::models::{Segment, SegmentMode, TestVector};
use crate::services::matrix::MAX_VECTORS;
use std::path::Path;

fn seg(content: &str, mode: SegmentMode) -> Segment {
    Segment {
        content: content.to_string(),
        mode,
    }
}

fn vector(title: &str, segments: Vec<Segment>) -> TestVector {
    TestVector {
        title: title.to_string(),
        segments,
    }
}

/// The builtin catalog: one vector per realistic encoding scenario,
/// covering every mode, mixed-script content, control characters and
/// multi-segment messages.
pub fn builtin() -> Vec<TestVector> {
    vec![
        vector(
            "number only / alphanumeric",
            vec![seg("123456", SegmentMode::Alphanumeric)],
        ),
        vector(
            "number only / numeric",
            vec![seg("123456", SegmentMode::Numeric)],
        ),
        vector("number only / byte", vec![seg("123456", SegmentMode::Byte)]),
        vector(
            "alphabets only / alphanumeric",
            vec![seg("ENGLISH", SegmentMode::Alphanumeric)],
        ),
        vector(
            "alphabets only / byte",
            vec![seg("english", SegmentMode::Byte)],
        ),
        vector("漢字 only / byte", vec![seg("漢字", SegmentMode::Byte)]),
        vector("漢字 only / SJIS", vec![seg("漢字", SegmentMode::Kanji)]),
        vector(
            "カタカナ only / byte",
            vec![seg("カタカナ", SegmentMode::Byte)],
        ),
        vector(
            "カタカナ only / SJIS",
            vec![seg("カタカナ", SegmentMode::Kanji)],
        ),
        vector(
            "半角カタカナ only / byte",
            vec![seg("ｶﾀｶﾅ", SegmentMode::Byte)],
        ),
        vector(
            "backspace only / byte",
            vec![seg("\u{0008}", SegmentMode::Byte)],
        ),
        vector("U+0000 only / byte", vec![seg("\u{0000}", SegmentMode::Byte)]),
        vector(
            "UTF-8 emoji only / byte",
            vec![seg("\u{263a}", SegmentMode::Byte)],
        ),
        vector(
            "URL / byte",
            vec![seg("https://google.com", SegmentMode::Byte)],
        ),
        vector(
            "URL / byte + 日本語 title / byte",
            vec![
                seg("グーグル", SegmentMode::Byte),
                seg("https://google.com", SegmentMode::Byte),
            ],
        ),
        vector(
            "URL / byte + 日本語 title / SJIS",
            vec![
                seg("グーグル", SegmentMode::Kanji),
                seg("https://google.com", SegmentMode::Byte),
            ],
        ),
        vector(
            "mailto: / byte",
            vec![seg("mailto:test@example.com", SegmentMode::Byte)],
        ),
        vector(
            "タイ語 / byte",
            vec![seg("สุขสันต์วันคริสต์มาส", SegmentMode::Byte)],
        ),
    ]
}

/// Load a catalog from a JSON file (same schema as the builtin set).
pub fn load(path: &Path) -> anyhow::Result<Vec<TestVector>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Resolve the catalog for a run: a custom file when given, otherwise
/// the builtin set. Either way the result is validated.
pub fn resolve(path: Option<&Path>) -> anyhow::Result<Vec<TestVector>> {
    let vectors = match path {
        Some(p) => load(p)?,
        None => builtin(),
    };
    validate(&vectors)?;
    Ok(vectors)
}

/// Structural validation only. Empty segment *content* is left for
/// the encoder to reject per task, so one bad vector cannot sink the
/// whole run.
pub fn validate(vectors: &[TestVector]) -> anyhow::Result<()> {
    if vectors.is_empty() {
        anyhow::bail!("catalog contains no test vectors");
    }
    if vectors.len() > MAX_VECTORS {
        anyhow::bail!(
            "catalog has {} vectors; the naming scheme addresses at most {}",
            vectors.len(),
            MAX_VECTORS
        );
    }
    for v in vectors {
        if v.segments.is_empty() {
            anyhow::bail!("vector {:?} has no segments", v.title);
        }
    }
    Ok(())
}
