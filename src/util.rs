use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn scan_id_for(ts: DateTime<Utc>) -> String {
    format!("scan-{}", ts.format("%Y%m%dT%H%M%SZ"))
}

pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Reads a UTF-8 document and returns its text with the SHA-256 of the raw bytes.
pub fn read_document(path: &Path) -> Result<(String, String)> {
    let raw =
        fs::read(path).with_context(|| format!("failed to read document: {}", path.display()))?;
    let sha256 = sha256_hex(&raw);
    let text = String::from_utf8(raw)
        .with_context(|| format!("document is not valid UTF-8: {}", path.display()))?;

    Ok((text, sha256))
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;
    writer
        .write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write json file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn scan_id_uses_compact_utc_stamp() {
        let ts = DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        assert_eq!(scan_id_for(ts), "scan-20240305T070809Z");
    }
}
