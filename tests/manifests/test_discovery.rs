// Tests for manifest discovery over real directories.

use std::fs;

use crate::common::{decl, documented, manifest_json};

#[test]
fn nested_manifests_are_found_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("gen").join("api");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        dir.path().join("core.json"),
        manifest_json(&[decl("core_fn", documented(), vec![])]),
    )
    .unwrap();
    fs::write(
        nested.join("api.json"),
        manifest_json(&[decl("api_fn", documented(), vec![])]),
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "not a manifest").unwrap();

    let loaded = bindlint_manifest::load_all(&[dir.path().to_path_buf()], &[]).unwrap();
    assert_eq!(loaded.len(), 2);
    // Deterministic path order, not filesystem order.
    assert!(loaded[0].path < loaded[1].path);
}

#[test]
fn ignore_patterns_exclude_generated_trees() {
    let dir = tempfile::tempdir().unwrap();
    let vendored = dir.path().join("vendored");
    fs::create_dir_all(&vendored).unwrap();
    fs::write(
        dir.path().join("ours.json"),
        manifest_json(&[decl("ours", documented(), vec![])]),
    )
    .unwrap();
    fs::write(
        vendored.join("theirs.json"),
        manifest_json(&[decl("theirs", documented(), vec![])]),
    )
    .unwrap();

    let loaded = bindlint_manifest::load_all(
        &[dir.path().to_path_buf()],
        &["**/vendored/**".to_string()],
    )
    .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].manifest.callables[0].name, "ours");
}

#[test]
fn unreadable_manifest_is_a_typed_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{").unwrap();

    let err = bindlint_manifest::load_all(&[dir.path().to_path_buf()], &[]).unwrap_err();
    assert!(matches!(
        err,
        bindlint_manifest::ManifestError::Parse { .. }
    ));
}
