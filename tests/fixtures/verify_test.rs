//! Verify command tests.

use provider_fixtures::fixtures::{run_generate, run_verify};
use provider_fixtures::generator::Provider;
use provider_fixtures::populate::{provider_path, GenerateArgs};
use provider_fixtures::verify::VerifyArgs;
use std::path::Path;
use tempfile::TempDir;

fn populate(root: &Path, item_count: usize) {
    let mut args = GenerateArgs {
        seed: Some(42),
        create_dirs: true,
        ..GenerateArgs::default()
    };
    args.common.output_dir = root.to_path_buf();
    args.common.item_count = item_count;
    run_generate(&args).unwrap();
}

fn verify_args(root: &Path, item_count: usize) -> VerifyArgs {
    let mut args = VerifyArgs::default();
    args.common.output_dir = root.to_path_buf();
    args.common.item_count = item_count;
    args
}

#[test]
fn test_generate_then_verify() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), 50);

    let reports = run_verify(&verify_args(temp_dir.path(), 50)).unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.items_checked == 50));
}

#[test]
fn test_verify_custom_count() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), 120);

    let reports = run_verify(&verify_args(temp_dir.path(), 120)).unwrap();
    assert!(reports.iter().all(|r| r.is_success()));

    assert!(run_verify(&verify_args(temp_dir.path(), 50)).is_err());
}

#[test]
fn test_verify_detects_edited_name() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path(), 50);

    let path = provider_path(temp_dir.path(), Provider::TechStore);
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, content.replacen("Gaming Laptop Pro Pro", "Gaming Laptop", 1)).unwrap();

    let err = run_verify(&verify_args(temp_dir.path(), 50)).unwrap_err();
    assert!(err.to_string().contains("1 violations"));
}

#[test]
fn test_verify_missing_files() {
    let temp_dir = TempDir::new().unwrap();

    let err = run_verify(&verify_args(temp_dir.path(), 50)).unwrap_err();
    assert!(format!("{err:#}").contains("provider-1"));
}
