use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use lawcite::CitationParser;
use tracing::{info, warn};

use crate::cli::ScanArgs;
use crate::commands::build_parser;
use crate::model::{CitationIndexManifest, ScannedDocument};
use crate::util::{now_utc_string, read_document, scan_id_for, write_json_pretty};

#[cfg(test)]
mod tests;

const MANIFEST_VERSION: u32 = 1;
const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "md"];

pub fn run(args: ScanArgs) -> Result<()> {
    let parser = build_parser(args.no_bare_numeric)?;
    let manifest = build_manifest(&args.source_dir, &parser)?;

    if args.dry_run {
        info!(
            document_count = manifest.document_count,
            citation_count = manifest.citation_count,
            source = %manifest.source_directory,
            "scan dry-run complete"
        );
        return Ok(());
    }

    let manifest_path = args
        .manifest_path
        .unwrap_or_else(|| default_manifest_path(&args.source_dir));

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote citation index manifest");
    info!(
        document_count = manifest.document_count,
        citation_count = manifest.citation_count,
        "scan completed"
    );

    Ok(())
}

pub(crate) fn default_manifest_path(source_dir: &Path) -> PathBuf {
    source_dir.join("manifests").join("citation_index.json")
}

pub(crate) fn build_manifest(
    source_dir: &Path,
    parser: &CitationParser,
) -> Result<CitationIndexManifest> {
    let mut document_paths = discover_documents(source_dir)?;
    document_paths.sort();

    if document_paths.is_empty() {
        bail!("no .txt or .md documents found in {}", source_dir.display());
    }

    let mut documents = Vec::with_capacity(document_paths.len());
    for path in document_paths {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToOwned::to_owned)
            .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))?;

        let (text, sha256) = read_document(&path)?;
        let citations = parser.parse(&text);
        if citations.is_empty() {
            warn!(document = %filename, "no citations found in document");
        }

        let identifiers = parser.extract_unique_identifiers(&text);
        documents.push(ScannedDocument {
            filename,
            sha256,
            citation_count: citations.len(),
            identifiers,
            citations,
        });
    }

    let citation_count = documents.iter().map(|doc| doc.citation_count).sum();

    Ok(CitationIndexManifest {
        manifest_version: MANIFEST_VERSION,
        scan_id: scan_id_for(Utc::now()),
        generated_at: now_utc_string(),
        source_directory: source_dir.display().to_string(),
        bare_numeric: parser.options().bare_numeric,
        document_count: documents.len(),
        citation_count,
        documents,
    })
}

fn discover_documents(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    let entries = fs::read_dir(source_dir)
        .with_context(|| format!("failed to read {}", source_dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", source_dir.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        let is_document = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                DOCUMENT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);

        if is_document {
            documents.push(path);
        }
    }

    Ok(documents)
}
