use std::path::PathBuf;

use super::*;
use crate::console::testing::{FakeGateway, console};

fn exts() -> Vec<String> {
    vec!["txt".to_string(), "mia".to_string()]
}

#[test]
fn extension_check_is_case_insensitive() {
    assert!(has_allowed_extension(Path::new("/x/setup.MIA"), &exts()));
    assert!(has_allowed_extension(Path::new("run.txt"), &exts()));
    assert!(!has_allowed_extension(Path::new("run.sh"), &exts()));
    assert!(!has_allowed_extension(Path::new("txt"), &exts()));
    assert!(!has_allowed_extension(Path::new("/x/"), &exts()));
}

#[test]
fn rejected_file_clears_selection_and_is_never_read() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("ok.mia");
    std::fs::write(&good, "mounted\n").unwrap();

    let mut c = console(FakeGateway::default());
    assert!(c.select_script(&good));
    assert_eq!(c.pending_script(), Some(good.as_path()));

    assert!(!c.select_script(&dir.path().join("bad.sh")));
    assert_eq!(c.pending_script(), None);
    let last = c.transcript().last().unwrap();
    assert_eq!(last.kind, EntryKind::Error);
    assert_eq!(last.text, "only .txt and .mia files are allowed");
    assert!(c.take_script_batch().is_none());
    assert!(c.gateway().calls().is_empty());
}

#[test]
fn script_runs_in_order_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.txt");
    std::fs::write(&path, "# create\nmkdisk -size=5\n\nfdisk -size=1\n").unwrap();

    let mut c = console(FakeGateway::default());
    let mut pauses = 0;
    let summary = c.run_script(&path, |_, _| pauses += 1).unwrap();

    assert_eq!(summary.executed, 2);
    assert_eq!(summary.comments, 1);
    assert_eq!(pauses, 2);
    assert_eq!(c.gateway().executed(), vec!["mkdisk -size=5", "fdisk -size=1"]);
    assert_eq!(c.transcript().entries()[0].text, "running script: setup.txt");
    assert_eq!(c.transcript().entries()[1].kind, EntryKind::Comment);
    assert_eq!(c.pending_script(), None);
}

#[test]
fn unreadable_script_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("gone.mia");

    let mut c = console(FakeGateway::default());
    assert!(c.select_script(&path));
    assert!(c.take_script_batch().is_none());
    let last = c.transcript().last().unwrap();
    assert_eq!(last.kind, EntryKind::Error);
    assert!(last.text.starts_with("failed to read script:"));
    assert_eq!(c.pending_script(), None);
}

#[test]
fn configured_extensions_drive_the_message() {
    let cfg = crate::config::ClientConfig {
        script_extensions: vec!["mia".to_string()],
        ..crate::config::ClientConfig::default()
    };
    let mut c = Console::new(FakeGateway::default(), &cfg);
    assert!(!c.select_script(Path::new("a.txt")));
    assert_eq!(
        c.transcript().last().unwrap().text,
        "only .mia files are allowed"
    );
}
