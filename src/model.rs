use lawcite::ParsedCitation;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScannedDocument {
    pub filename: String,
    pub sha256: String,
    pub citation_count: usize,
    pub identifiers: Vec<String>,
    pub citations: Vec<ParsedCitation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitationIndexManifest {
    pub manifest_version: u32,
    pub scan_id: String,
    pub generated_at: String,
    pub source_directory: String,
    pub bare_numeric: bool,
    pub document_count: usize,
    pub citation_count: usize,
    pub documents: Vec<ScannedDocument>,
}
