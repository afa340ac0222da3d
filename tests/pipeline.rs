//! End-to-end pipeline test: generate against a stub my-context binary,
//! then export panels and build the tutorial pages from seeded storage.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use mycontext_tutorials::{commands, config};

/// Shell stub standing in for the my-context binary. It only creates the
/// context home directory, mirroring the side effect the pipeline relies
/// on, and succeeds for every subcommand.
fn write_stub_bin(dir: &Path) -> std::path::PathBuf {
    let bin = dir.join("my-context");
    fs::write(&bin, "#!/bin/sh\nmkdir -p \"$MY_CONTEXT_HOME\"\nexit 0\n").unwrap();
    let mut perms = fs::metadata(&bin).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&bin, perms).unwrap();
    bin
}

/// Seed one context home the way my-context lays it out on disk
fn seed_backend_solo_home(homes: &Path) {
    let home = homes.join("tutorial-01-backend-solo");
    let ctx = home.join("payment-service:_payment-retry-logic");
    fs::create_dir_all(&ctx).unwrap();
    fs::write(
        ctx.join("meta.json"),
        r#"{"name":"payment-service: payment-retry-logic","start_time":"2025-01-15T14:00:00Z","status":"active","is_archived":false}"#,
    )
    .unwrap();
    fs::write(
        ctx.join("notes.log"),
        "2025-01-15T14:20:32Z|DECISION: Exponential backoff strategy - 1s, 2s, 4s, 8s\n\
         2025-01-15T14:28:15Z|Using exponential backoff to handle transient failures\n",
    )
    .unwrap();
    fs::write(
        ctx.join("files.log"),
        "2025-01-15T14:30:00Z|internal/payments/retry.go\n",
    )
    .unwrap();
    fs::write(
        home.join("state.json"),
        r#"{"active_context":"payment-service: payment-retry-logic","last_updated":"2025-01-15T14:00:00Z"}"#,
    )
    .unwrap();
}

#[test]
fn full_pipeline_produces_panels_and_pages() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("docs").join("tutorials");
    fs::create_dir_all(&base).unwrap();

    let bin = write_stub_bin(tmp.path());

    // Stage 1: run the demo scripts against the stub binary
    commands::generate::execute(&bin, &base).unwrap();

    // The stub records nothing, so overwrite one home with real storage
    let homes = config::context_homes_dir(&base);
    seed_backend_solo_home(&homes);

    // Stage 2: export panels
    commands::export::execute(&base).unwrap();

    let explorer = config::tutorial_dir(&base, "01").join("tutorial-01-backend-solo_explorer.html");
    assert!(explorer.exists());
    let explorer_html = fs::read_to_string(&explorer).unwrap();
    assert!(explorer_html.contains("CONTEXT HIERARCHY PANEL"));
    assert!(explorer_html.contains("payment-retry-logic"));
    assert!(explorer_html.contains("background-color: #1a1a1a"));

    // The seeded home has an active context, so a detail panel exists too
    let detail = config::tutorial_dir(&base, "01").join("tutorial-01-backend-solo_detail.html");
    assert!(detail.exists());
    let detail_html = fs::read_to_string(&detail).unwrap();
    assert!(detail_html.contains("DECISION: Exponential backoff strategy"));
    assert!(detail_html.contains("internal/payments/retry.go"));

    // Stage 3: build the pages
    commands::build::execute(&base).unwrap();

    for number in ["01", "02", "03", "04", "05", "06", "07", "08"] {
        let page = config::tutorial_page_path(&base, number);
        assert!(page.exists(), "missing tutorial page {}", number);
    }

    let page_01 = fs::read_to_string(config::tutorial_page_path(&base, "01")).unwrap();
    assert!(page_01.contains("Tutorial 1: Your First Context"));
    assert!(page_01.contains("<iframe src=\"tutorial-01-backend-solo_explorer.html\""));

    // Shared stylesheet materialized next to the pages
    assert!(config::theme_css_path(&base).exists());
}

#[test]
fn generate_fails_without_binary() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("no-such-binary");
    assert!(commands::generate::execute(&missing, tmp.path()).is_err());
}

#[test]
fn export_tolerates_missing_homes() {
    // No context homes at all: export still succeeds, producing nothing
    let tmp = tempfile::tempdir().unwrap();
    commands::export::execute(tmp.path()).unwrap();

    let explorer =
        config::tutorial_dir(tmp.path(), "01").join("tutorial-01-backend-solo_explorer.html");
    assert!(!explorer.exists());
}
