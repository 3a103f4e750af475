use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::{read_bytes, write_bytes};

/// Encode UTF-8 text as padded standard Base64
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode Base64 into UTF-8 text
pub fn decode_text(encoded: &str) -> Result<String> {
    let bytes = decode_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| {
        AppError::InvalidEncoding(format!("Decoded bytes are not valid UTF-8: {}", e))
    })
}

/// Encode a file's raw bytes
pub fn encode_file(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Encoding file");
    Ok(STANDARD.encode(bytes))
}

/// Decode Base64 and write the raw bytes to `output_path`. Nothing is
/// written when the input does not decode.
pub fn decode_to_file(encoded: &str, output_path: &Path) -> Result<usize> {
    let bytes = decode_bytes(encoded)?;
    write_bytes(output_path, &bytes)?;
    tracing::debug!(path = %output_path.display(), bytes = bytes.len(), "Decoded to file");
    Ok(bytes.len())
}

/// ASCII whitespace is dropped first so wrapped input decodes.
fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AppError::InvalidEncoding(format!("Invalid Base64 input: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_value() {
        assert_eq!(encode_text("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode_text(""), "");
    }

    #[test]
    fn test_text_round_trip() {
        for text in ["plain", "ünïcödé ✓", "line\nbreaks\tand tabs", "🦀"] {
            assert_eq!(decode_text(&encode_text(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode_text("not-valid-base64!").unwrap_err();
        assert!(matches!(err, AppError::InvalidEncoding(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_text("//79").unwrap_err();
        assert!(matches!(err, AppError::InvalidEncoding(_)));
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_decode_ignores_line_wrapping() {
        assert_eq!(decode_text("SGVsbG8s\nIFdvcmxk\r\nIQ==").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.bin");
        let target = dir.path().join("target.bin");
        let bytes: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
        std::fs::write(&source, &bytes).unwrap();

        let encoded = encode_file(&source).unwrap();
        let written = decode_to_file(&encoded, &target).unwrap();

        assert_eq!(written, bytes.len());
        assert_eq!(std::fs::read(&target).unwrap(), bytes);
    }

    #[test]
    fn test_encode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(&dir.path().join("nope.bin")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_decode_to_file_leaves_no_file_on_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.bin");
        let err = decode_to_file("%%%", &target).unwrap_err();
        assert!(matches!(err, AppError::InvalidEncoding(_)));
        assert!(!target.exists());
    }
}
