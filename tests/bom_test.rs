/*!
Tests for BOM handling on real files
*/

use bom_fix::core::{read_text_strip_bom, UTF8_BOM};
use bom_fix::normalize;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_reading_with_bom() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let content = "\u{FEFF}import React from 'react';\nexport default AdminDashboard;\n";
    temp_file.write_all(content.as_bytes())?;

    let decoded = read_text_strip_bom(temp_file.path()).unwrap();

    assert!(decoded.had_bom);
    assert!(!decoded.text.starts_with('\u{FEFF}'));
    assert!(decoded.text.starts_with("import React"));

    Ok(())
}

#[test]
fn test_bom_bytes_removed_exactly() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let body = "const title = 'Создать объявление';\n".as_bytes();
    let mut content = UTF8_BOM.to_vec();
    content.extend_from_slice(body);
    temp_file.write_all(&content)?;

    normalize(temp_file.path()).unwrap();

    let after = fs::read(temp_file.path())?;
    assert_eq!(after, body);
    assert!(!after.starts_with(&UTF8_BOM));

    Ok(())
}

#[test]
fn test_normalize_is_idempotent() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"\xEF\xBB\xBFline one\r\nline two")?;

    normalize(temp_file.path()).unwrap();
    let once = fs::read(temp_file.path())?;
    let second = normalize(temp_file.path()).unwrap();
    let twice = fs::read(temp_file.path())?;

    assert!(!second.had_bom);
    assert_eq!(once, twice);
    assert_eq!(twice, b"line one\r\nline two");

    Ok(())
}

#[test]
fn test_bom_in_middle_is_kept() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all("a\u{FEFF}b".as_bytes())?;

    let fixed = normalize(temp_file.path()).unwrap();

    assert!(!fixed.had_bom);
    assert_eq!(fs::read_to_string(temp_file.path())?, "a\u{FEFF}b");

    Ok(())
}
