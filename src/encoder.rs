//! External encoder boundary.
//!
//! Everything QR-specific lives behind the [`Encoder`] trait: segment
//! bit packing, version fitting, Shift-JIS transliteration for kanji
//! mode, and the PNG render. The task runner only sees `encode(...)`
//! succeed or fail; tests substitute failing implementations.

use crate::domain::models::{CorrectionLevel, Segment, SegmentMode};
use qrcode::bits::Bits;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};
use std::path::Path;

pub trait Encoder: Sync {
    fn encode(
        &self,
        segments: &[Segment],
        level: CorrectionLevel,
        path: &Path,
    ) -> Result<(), EncodeError>;
}

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("segment has empty content")]
    EmptyContent,
    #[error("content not representable in {mode} mode: {detail}")]
    ModeMismatch { mode: SegmentMode, detail: String },
    #[error("content not representable in Shift-JIS: {0}")]
    Transliteration(String),
    #[error("qr encoding rejected the input: {0:?}")]
    Qr(QrError),
    #[error("failed to write artifact: {0}")]
    Write(#[from] image::ImageError),
}

/// Production encoder: packs segments into the smallest QR version
/// that fits and writes a PNG at the requested path.
#[derive(Debug, Default)]
pub struct QrPngEncoder;

impl Encoder for QrPngEncoder {
    fn encode(
        &self,
        segments: &[Segment],
        level: CorrectionLevel,
        path: &Path,
    ) -> Result<(), EncodeError> {
        let payloads = segments
            .iter()
            .map(segment_payload)
            .collect::<Result<Vec<_>, _>>()?;
        let code = fit_symbol(&payloads, ec_level(level))?;
        let rendered = code.render::<image::Luma<u8>>().build();
        rendered.save(path)?;
        Ok(())
    }
}

fn ec_level(level: CorrectionLevel) -> EcLevel {
    match level {
        CorrectionLevel::L => EcLevel::L,
        CorrectionLevel::M => EcLevel::M,
        CorrectionLevel::Q => EcLevel::Q,
        CorrectionLevel::H => EcLevel::H,
    }
}

enum Payload {
    Numeric(Vec<u8>),
    Alphanumeric(Vec<u8>),
    Byte(Vec<u8>),
    Kanji(Vec<u8>),
}

fn segment_payload(segment: &Segment) -> Result<Payload, EncodeError> {
    if segment.content.is_empty() {
        return Err(EncodeError::EmptyContent);
    }
    match segment.mode {
        SegmentMode::Numeric => {
            if let Some(c) = segment.content.chars().find(|c| !c.is_ascii_digit()) {
                return Err(EncodeError::ModeMismatch {
                    mode: segment.mode,
                    detail: format!("{c:?} is not a decimal digit"),
                });
            }
            Ok(Payload::Numeric(segment.content.clone().into_bytes()))
        }
        SegmentMode::Alphanumeric => {
            if let Some(c) = segment.content.chars().find(|&c| !is_qr_alphanumeric(c)) {
                return Err(EncodeError::ModeMismatch {
                    mode: segment.mode,
                    detail: format!("{c:?} is outside the QR alphanumeric charset"),
                });
            }
            Ok(Payload::Alphanumeric(segment.content.clone().into_bytes()))
        }
        SegmentMode::Byte => Ok(Payload::Byte(segment.content.clone().into_bytes())),
        SegmentMode::Kanji => Ok(Payload::Kanji(to_shift_jis(&segment.content)?)),
    }
}

fn is_qr_alphanumeric(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
}

/// Kanji mode carries raw double-byte Shift-JIS. Characters that map
/// to a single byte (ASCII, half-width katakana) or fall outside the
/// character set cannot be carried in this mode.
fn to_shift_jis(content: &str) -> Result<Vec<u8>, EncodeError> {
    let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(content);
    if had_errors {
        return Err(EncodeError::Transliteration(format!(
            "{content:?} contains characters outside Shift-JIS"
        )));
    }
    if bytes.len() != content.chars().count() * 2 {
        return Err(EncodeError::Transliteration(format!(
            "{content:?} contains single-byte characters; kanji mode needs double-byte Shift-JIS"
        )));
    }
    Ok(bytes.into_owned())
}

fn fit_symbol(payloads: &[Payload], ec: EcLevel) -> Result<QrCode, EncodeError> {
    for version in 1..=40 {
        let mut bits = Bits::new(Version::Normal(version));
        match push_payloads(&mut bits, payloads).and_then(|()| bits.push_terminator(ec)) {
            Ok(()) => return QrCode::with_bits(bits, ec).map_err(EncodeError::Qr),
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(EncodeError::Qr(e)),
        }
    }
    Err(EncodeError::Qr(QrError::DataTooLong))
}

fn push_payloads(bits: &mut Bits, payloads: &[Payload]) -> Result<(), QrError> {
    for payload in payloads {
        match payload {
            Payload::Numeric(data) => bits.push_numeric_data(data)?,
            Payload::Alphanumeric(data) => bits.push_alphanumeric_data(data)?,
            Payload::Byte(data) => bits.push_byte_data(data)?,
            Payload::Kanji(data) => bits.push_kanji_data(data)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seg(content: &str, mode: SegmentMode) -> Segment {
        Segment {
            content: content.to_string(),
            mode,
        }
    }

    #[test]
    fn numeric_segment_produces_png() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("numeric.png");
        QrPngEncoder
            .encode(
                &[seg("123456", SegmentMode::Numeric)],
                CorrectionLevel::M,
                &path,
            )
            .expect("encode numeric");
        assert!(path.exists());
    }

    #[test]
    fn mixed_mode_segments_share_one_symbol() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("mixed.png");
        QrPngEncoder
            .encode(
                &[
                    seg("グーグル", SegmentMode::Kanji),
                    seg("https://google.com", SegmentMode::Byte),
                ],
                CorrectionLevel::Q,
                &path,
            )
            .expect("encode mixed segments");
        assert!(path.exists());
    }

    #[test]
    fn empty_content_is_rejected() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("empty.png");
        let err = QrPngEncoder
            .encode(&[seg("", SegmentMode::Byte)], CorrectionLevel::L, &path)
            .unwrap_err();
        assert!(matches!(err, EncodeError::EmptyContent));
        assert!(!path.exists());
    }

    #[test]
    fn lowercase_is_not_alphanumeric() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("lower.png");
        let err = QrPngEncoder
            .encode(
                &[seg("english", SegmentMode::Alphanumeric)],
                CorrectionLevel::L,
                &path,
            )
            .unwrap_err();
        assert!(matches!(err, EncodeError::ModeMismatch { .. }));
    }

    #[test]
    fn digits_are_valid_alphanumeric_content() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("digits.png");
        QrPngEncoder
            .encode(
                &[seg("123456", SegmentMode::Alphanumeric)],
                CorrectionLevel::H,
                &path,
            )
            .expect("digits fit the alphanumeric charset");
    }

    #[test]
    fn half_width_katakana_cannot_use_kanji_mode() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("halfwidth.png");
        let err = QrPngEncoder
            .encode(&[seg("ｶﾀｶﾅ", SegmentMode::Kanji)], CorrectionLevel::L, &path)
            .unwrap_err();
        assert!(matches!(err, EncodeError::Transliteration(_)));
    }

    #[test]
    fn thai_script_cannot_use_kanji_mode() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("thai.png");
        let err = QrPngEncoder
            .encode(
                &[seg("สุขสันต์", SegmentMode::Kanji)],
                CorrectionLevel::L,
                &path,
            )
            .unwrap_err();
        assert!(matches!(err, EncodeError::Transliteration(_)));
    }

    #[test]
    fn full_width_katakana_encodes_in_kanji_mode() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("katakana.png");
        QrPngEncoder
            .encode(
                &[seg("カタカナ", SegmentMode::Kanji)],
                CorrectionLevel::M,
                &path,
            )
            .expect("full-width katakana is double-byte Shift-JIS");
        assert!(path.exists());
    }

    #[test]
    fn oversized_payload_reports_data_too_long() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("huge.png");
        let err = QrPngEncoder
            .encode(
                &[seg(&"9".repeat(8000), SegmentMode::Numeric)],
                CorrectionLevel::L,
                &path,
            )
            .unwrap_err();
        assert!(matches!(err, EncodeError::Qr(QrError::DataTooLong)));
    }
}
