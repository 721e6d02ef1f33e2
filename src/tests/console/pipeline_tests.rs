use super::*;
use crate::console::testing::{FakeGateway, Reply, console, logged_in};

fn kinds<G: Gateway>(c: &Console<G>) -> Vec<EntryKind> {
    c.transcript().entries().iter().map(|e| e.kind).collect()
}

fn texts<G: Gateway>(c: &Console<G>) -> Vec<String> {
    c.transcript()
        .entries()
        .iter()
        .map(|e| e.text.clone())
        .collect()
}

#[test]
fn remote_command_logs_command_then_result() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("mounted");

    assert_eq!(kinds(&c), vec![EntryKind::Command, EntryKind::Success]);
    assert_eq!(texts(&c), vec!["MIA> mounted", "ok: mounted"]);
    assert_eq!(c.gateway().executed(), vec!["mounted"]);
    assert_eq!(c.history().entries(), ["mounted"]);
    assert_eq!(c.history().cursor(), None);
}

#[test]
fn gateway_error_is_surfaced_verbatim() {
    let gw = FakeGateway::default().reply("rmdisk", Reply::Error("disk not found".to_string()));
    let mut c = console(gw);
    c.submit_interactive("rmdisk -path=/tmp/x.mia");
    assert_eq!(kinds(&c), vec![EntryKind::Command, EntryKind::Error]);
    assert_eq!(texts(&c)[1], "disk not found");
}

#[test]
fn empty_output_gets_generic_success_message() {
    let gw = FakeGateway::default().reply("mkdisk", Reply::Output(String::new()));
    let mut c = console(gw);
    c.submit_interactive("mkdisk -size=5 -path=/tmp/a.mia");
    assert_eq!(texts(&c)[1], DEFAULT_SUCCESS);
}

#[test]
fn transport_failure_mentions_backend_location() {
    let gw = FakeGateway::default().reply("mounted", Reply::Transport("refused".to_string()));
    let mut c = console(gw);
    c.submit_interactive("mounted");
    let last = c.transcript().last().unwrap();
    assert_eq!(last.kind, EntryKind::Error);
    assert!(last.text.starts_with("connection error: refused"));
    assert!(last.text.contains("http://fake.invalid"));
}

#[test]
fn clear_wipes_transcript_without_network() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("mounted");
    c.submit_interactive("CLEAR");
    assert!(c.transcript().is_empty());
    assert_eq!(c.gateway().executed(), vec!["mounted"]);
}

#[test]
fn help_is_answered_locally() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("help");
    assert_eq!(kinds(&c), vec![EntryKind::Command, EntryKind::Success]);
    assert_eq!(texts(&c)[1], HELP_TEXT);
    assert!(c.gateway().calls().is_empty());
}

#[test]
fn interactive_comment_is_logged_not_sent() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("# just a note");
    assert_eq!(kinds(&c), vec![EntryKind::Comment]);
    assert!(c.gateway().calls().is_empty());
    assert!(c.history().entries().is_empty());
}

#[test]
fn blank_input_is_a_noop() {
    let mut c = console(FakeGateway::default());
    assert!(matches!(c.submit_interactive("   "), Submission::Handled));
    assert!(c.transcript().is_empty());
    assert!(c.history().entries().is_empty());
}

#[test]
fn multiline_input_becomes_a_batch() {
    let mut c = console(FakeGateway::default());
    match c.submit_interactive("mounted\nmounted") {
        Submission::Batch(q) => assert_eq!(q.total(), 2),
        Submission::Handled => panic!("expected a batch"),
    }
    assert!(c.transcript().is_empty());
}

#[test]
fn login_success_starts_session() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("login -user=root -pass=123 -id=681A");
    let s = c.session().unwrap();
    assert_eq!(s.username, "root");
    assert_eq!(s.mount_id, "681A");
}

#[test]
fn failed_login_leaves_session_inactive_but_logs_attempt() {
    let gw = FakeGateway::default().reply("login", Reply::Error("wrong password".to_string()));
    let mut c = console(gw);
    c.submit_interactive("login -user=root -pass=bad -id=681A");
    assert!(!c.is_logged_in());
    assert_eq!(kinds(&c), vec![EntryKind::Command, EntryKind::Error]);
}

#[test]
fn login_with_empty_credentials_never_reaches_gateway() {
    let mut c = console(FakeGateway::default());
    c.submit_interactive("login -user= -pass=123 -id=681A");
    assert!(!c.is_logged_in());
    assert_eq!(kinds(&c), vec![EntryKind::Command, EntryKind::Error]);
    assert!(c.gateway().calls().is_empty());
}

#[test]
fn logout_clears_session_even_when_gateway_fails() {
    let gw = FakeGateway::with_tree().reply("logout", Reply::Error("no active session".to_string()));
    let mut c = logged_in(gw);
    {
        let mut b = c.browse().unwrap();
        b.activate();
        b.select_disk(0).unwrap();
        b.select_partition(0).unwrap();
    }
    assert_eq!(c.navigator().state(), NavState::DirectoryBrowse);

    c.submit_interactive("logout");
    assert!(!c.is_logged_in());
    assert_eq!(c.navigator().state(), NavState::DiskList);
    assert!(!c.navigator().is_loaded());
    assert!(c.navigator().listing().is_empty());
    assert_eq!(c.transcript().last().unwrap().text, "no active session");
}

#[test]
fn logout_clears_session_on_transport_failure() {
    let gw = FakeGateway::default().reply("logout", Reply::Transport("reset".to_string()));
    let mut c = logged_in(gw);
    c.submit_interactive("logout");
    assert!(!c.is_logged_in());
}
