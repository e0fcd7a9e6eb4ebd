use std::fs;
use std::path::PathBuf;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lawcite_scan_{}_{}_{}",
        name,
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

fn default_parser() -> CitationParser {
    CitationParser::new().expect("pattern table should compile")
}

#[test]
fn build_manifest_indexes_documents_in_filename_order() {
    let dir = scratch_dir("order");
    fs::write(dir.join("b_act.md"), "Part IV applies. See Part 4 again.").expect("write b");
    fs::write(dir.join("a_act.txt"), "Section 19(2)(a)(i) and Article 21.").expect("write a");
    fs::write(dir.join("notes.pdf"), "Section 1").expect("write ignored file");

    let manifest = build_manifest(&dir, &default_parser()).expect("manifest should build");

    assert_eq!(manifest.manifest_version, MANIFEST_VERSION);
    assert!(manifest.scan_id.starts_with("scan-"));
    assert!(manifest.bare_numeric);
    assert_eq!(manifest.document_count, 2);
    assert_eq!(manifest.citation_count, 4);

    let first = &manifest.documents[0];
    assert_eq!(first.filename, "a_act.txt");
    assert_eq!(
        first.identifiers,
        vec![
            "sec_19__subsec_2__para_a__subpara_1".to_string(),
            "art_21".to_string()
        ]
    );
    assert_eq!(first.sha256.len(), 64);

    let second = &manifest.documents[1];
    assert_eq!(second.filename, "b_act.md");
    assert_eq!(second.citation_count, 2);
    assert_eq!(second.identifiers, vec!["part_4".to_string()]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn build_manifest_fails_without_documents() {
    let dir = scratch_dir("empty");
    fs::write(dir.join("scan.pdf"), "Section 1").expect("write ignored file");

    let err = build_manifest(&dir, &default_parser()).expect_err("empty directory should fail");
    assert!(err.to_string().contains("no .txt or .md documents"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_writes_manifest_to_default_path() {
    let dir = scratch_dir("write");
    fs::write(dir.join("reg.txt"), "Regulation 12(4)(b) and 3(1)").expect("write doc");

    run(ScanArgs {
        source_dir: dir.clone(),
        manifest_path: None,
        dry_run: false,
        no_bare_numeric: true,
    })
    .expect("scan should succeed");

    let raw = fs::read_to_string(default_manifest_path(&dir)).expect("manifest should exist");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("manifest should be json");
    assert_eq!(value["bare_numeric"], false);
    assert_eq!(value["citation_count"], 1);
    assert_eq!(
        value["documents"][0]["citations"][0]["identifier"],
        "reg_12__subsec_4__para_b"
    );
    assert_eq!(value["documents"][0]["citations"][0]["kind"], "regulation");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn dry_run_leaves_no_manifest_behind() {
    let dir = scratch_dir("dry");
    fs::write(dir.join("doc.txt"), "Chapter 5").expect("write doc");

    run(ScanArgs {
        source_dir: dir.clone(),
        manifest_path: None,
        dry_run: true,
        no_bare_numeric: false,
    })
    .expect("dry run should succeed");

    assert!(!default_manifest_path(&dir).exists());

    fs::remove_dir_all(&dir).ok();
}
