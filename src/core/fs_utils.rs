//! File system utility helpers (BOM-aware readers, BOM-free writers)
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::errors::{NormalizeError, NormalizeResult};

/// UTF-8 encoding of U+FEFF
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Text decoded from a file, with a note on whether a BOM was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub had_bom: bool,
}

/// Length of a leading UTF-8 BOM: 3 if present, 0 otherwise.
///
/// UTF-16 marks are deliberately not treated as removable; such files
/// fail UTF-8 decoding instead.
pub fn utf8_bom_len(bytes: &[u8]) -> usize {
    match Encoding::for_bom(bytes) {
        Some((encoding, len)) if encoding == UTF_8 => len,
        _ => 0,
    }
}

/// Strip a single leading UTF-8 BOM and decode the rest strictly.
pub fn decode_utf8_sig(mut bytes: Vec<u8>) -> Result<DecodedText, std::string::FromUtf8Error> {
    let bom_len = utf8_bom_len(&bytes);
    if bom_len > 0 {
        bytes.drain(..bom_len);
    }
    let text = String::from_utf8(bytes)?;
    Ok(DecodedText {
        text,
        had_bom: bom_len > 0,
    })
}

/// Read a text file as UTF-8, stripping a UTF-8 BOM if present.
pub fn read_text_strip_bom(path: &Path) -> NormalizeResult<DecodedText> {
    let bytes = fs::read(path).map_err(|e| NormalizeError::io(path, e))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_utf8_sig(bytes).map_err(|e| NormalizeError::decode(path, e))
}

/// Truncate `path` and write `text` as UTF-8 without a BOM.
///
/// A failure part way through can leave the file truncated.
pub fn write_text_in_place(path: &Path, text: &str) -> NormalizeResult<usize> {
    let mut file = fs::File::create(path).map_err(|e| NormalizeError::io(path, e))?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| NormalizeError::io(path, e))?;
    Ok(text.len())
}

/// Write `text` to a sibling temp file, then rename it over `path`.
///
/// The original file is untouched unless the rename succeeds. Permissions of
/// an existing target are carried over to the replacement.
pub fn write_text_atomic(path: &Path, text: &str) -> NormalizeResult<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| NormalizeError::io(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| NormalizeError::io(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| NormalizeError::io(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| NormalizeError::io(path, e.error))?;
    Ok(text.len())
}
