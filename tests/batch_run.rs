//! Tests for the sequential run loop (single and batch mode).

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

use hickory_resolver::error::ResolveError;

use host_lookup::{run_lookups, HostResolver, InputError, OutputSink, RunMode, Severity};

#[derive(Default)]
struct ScriptedResolver {
    forward_answers: HashMap<String, Vec<IpAddr>>,
    reverse_answers: HashMap<IpAddr, Vec<String>>,
    forward_calls: RefCell<Vec<String>>,
    reverse_calls: RefCell<Vec<IpAddr>>,
}

impl ScriptedResolver {
    fn with_forward(mut self, host: &str, addrs: &[&str]) -> Self {
        self.forward_answers.insert(
            host.to_string(),
            addrs.iter().map(|a| a.parse().unwrap()).collect(),
        );
        self
    }

    fn with_reverse(mut self, ip: &str, names: &[&str]) -> Self {
        self.reverse_answers.insert(
            ip.parse().unwrap(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    fn total_calls(&self) -> usize {
        self.forward_calls.borrow().len() + self.reverse_calls.borrow().len()
    }
}

impl HostResolver for ScriptedResolver {
    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.forward_calls.borrow_mut().push(host.to_string());
        self.forward_answers
            .get(host)
            .cloned()
            .ok_or_else(|| ResolveError::from("scripted forward failure"))
    }

    fn reverse(&self, ip: IpAddr) -> Result<Vec<String>, ResolveError> {
        self.reverse_calls.borrow_mut().push(ip);
        self.reverse_answers
            .get(&ip)
            .cloned()
            .ok_or_else(|| ResolveError::from("scripted reverse failure"))
    }
}

#[derive(Default)]
struct RecordingSink {
    lines: Vec<(Severity, String)>,
}

impl RecordingSink {
    fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == Severity::Error)
            .map(|(_, t)| t.as_str())
            .collect()
    }

    fn records(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == Severity::Record)
            .map(|(_, t)| t.as_str())
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn write_line(&mut self, severity: Severity, text: &str) {
        self.lines.push((severity, text.to_string()));
    }
}

fn batch_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_batch_skips_comments_and_padded_lines() {
    let file = batch_file("# comment\n skip-me\nexample.com\n");
    let resolver = ScriptedResolver::default().with_forward("example.com", &["93.184.216.34"]);
    let mut sink = RecordingSink::default();

    let report = run_lookups(
        RunMode::Batch(file.path().to_path_buf()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    // Only example.com triggered a resolution attempt
    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 0);
    assert_eq!(*resolver.forward_calls.borrow(), vec!["example.com"]);
    assert_eq!(sink.records(), vec!["93.184.216.34"]);
    assert!(sink.errors().is_empty());
}

#[test]
fn test_batch_continues_past_a_failed_line() {
    let file = batch_file("missing.example.com\nexample.com\n");
    let resolver = ScriptedResolver::default().with_forward("example.com", &["93.184.216.34"]);
    let mut sink = RecordingSink::default();

    let report = run_lookups(
        RunMode::Batch(file.path().to_path_buf()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    // The first line failed, the second still resolved
    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(sink.errors().len(), 1);
    assert!(sink.errors()[0].contains("lookup failed"));
    assert_eq!(sink.records(), vec!["93.184.216.34"]);
}

#[test]
fn test_batch_continues_past_a_loopback_line() {
    let file = batch_file("127.0.0.1\n8.8.8.8\n");
    let resolver = ScriptedResolver::default().with_reverse("8.8.8.8", &["dns.google."]);
    let mut sink = RecordingSink::default();

    let report = run_lookups(
        RunMode::Batch(file.path().to_path_buf()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.attempted, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(sink.errors(), vec!["IP is loopback"]);
    assert_eq!(sink.records(), vec!["dns.google."]);
}

#[test]
fn test_batch_processes_lines_in_file_order() {
    let file = batch_file("first.example.com\nsecond.example.com\n");
    let resolver = ScriptedResolver::default()
        .with_forward("first.example.com", &["192.0.2.1"])
        .with_forward("second.example.com", &["192.0.2.2"]);
    let mut sink = RecordingSink::default();

    run_lookups(
        RunMode::Batch(file.path().to_path_buf()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    assert_eq!(
        *resolver.forward_calls.borrow(),
        vec!["first.example.com", "second.example.com"]
    );
    assert_eq!(sink.records(), vec!["192.0.2.1", "192.0.2.2"]);
}

#[test]
fn test_missing_batch_file_aborts_before_any_resolution() {
    let resolver = ScriptedResolver::default();
    let mut sink = RecordingSink::default();

    let err = run_lookups(
        RunMode::Batch(PathBuf::from("/no/such/hosts.txt")),
        &resolver,
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, InputError::FileNotFound(_)));
    assert_eq!(resolver.total_calls(), 0);
    assert!(sink.lines.is_empty());
}

#[test]
fn test_directory_batch_path_aborts_before_any_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = ScriptedResolver::default();
    let mut sink = RecordingSink::default();

    let err = run_lookups(
        RunMode::Batch(dir.path().to_path_buf()),
        &resolver,
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, InputError::NotAFile(_)));
    assert_eq!(resolver.total_calls(), 0);
}

#[test]
fn test_single_mode_resolves_one_token() {
    let resolver = ScriptedResolver::default().with_reverse("8.8.8.8", &["dns.google."]);
    let mut sink = RecordingSink::default();

    let report = run_lookups(
        RunMode::Single("8.8.8.8".to_string()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 1);
    assert_eq!(sink.records(), vec!["dns.google."]);
}

#[test]
fn test_single_mode_reports_errors_without_failing_the_run() {
    let resolver = ScriptedResolver::default();
    let mut sink = RecordingSink::default();

    // The run itself succeeds; the failure shows up in the report and sink
    let report = run_lookups(
        RunMode::Single("127.0.0.1".to_string()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(sink.errors(), vec!["IP is loopback"]);
}

#[test]
fn test_reserved_token_counts_as_succeeded_with_empty_output() {
    let resolver = ScriptedResolver::default();
    let mut sink = RecordingSink::default();

    let report = run_lookups(
        RunMode::Single("169.254.1.1".to_string()),
        &resolver,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 1);
    assert!(sink.records().is_empty());
    assert!(sink.errors().is_empty());
    assert_eq!(resolver.total_calls(), 0);
}
