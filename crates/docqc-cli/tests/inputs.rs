use std::fs;

use docqc_cli::inputs::resolve_submitted;
use docqc_ingest::DiscoveryOptions;

#[test]
fn directory_entries_precede_file_arguments() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("b.pdf"), b"").expect("write");
    fs::write(dir.path().join("a.dwg"), b"").expect("write");

    let files = vec!["drawings/c.dwg".to_string()];
    let names = resolve_submitted(Some(dir.path()), &files, &DiscoveryOptions::default())
        .expect("resolve");
    assert_eq!(names, vec!["a.dwg", "b.pdf", "c.dwg"]);
}

#[test]
fn file_arguments_alone_keep_their_order() {
    let files = vec!["z.pdf".to_string(), "out/a.pdf".to_string()];
    let names =
        resolve_submitted(None, &files, &DiscoveryOptions::default()).expect("resolve");
    assert_eq!(names, vec!["z.pdf", "a.pdf"]);
}

#[test]
fn no_inputs_is_an_error() {
    let error = resolve_submitted(None, &[], &DiscoveryOptions::default())
        .expect_err("nothing to check");
    assert!(error.to_string().contains("--dir"));
}

#[test]
fn missing_directory_is_reported_with_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent");
    let error = resolve_submitted(Some(&missing), &[], &DiscoveryOptions::default())
        .expect_err("missing directory");
    assert!(error.to_string().starts_with("list submitted files in"));
}
