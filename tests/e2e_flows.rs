mod common;

use common::{DOCUMENT, Fixture, MockService, read};
use predicates::str::contains;

#[test]
fn compile_writes_mocked_bytes_with_default_extension() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args(["-u", &svc.url, "-t", "tmpl.odt"])
        .assert()
        .success();

    assert_eq!(read(&fx.path("result.pdf")), DOCUMENT);

    let requests = svc.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.endpoint, "compile");
    assert_eq!(req.query.get("format").map(String::as_str), Some("pdf"));
    assert!(!req.query.contains_key("error"));
    assert!(req.body_contains("filename=\"tmpl.odt\""));
    assert!(req.body_contains("fake odt template"));
    assert!(req.body_contains("filename=\"data.json\""));
}

#[test]
fn compile_keeps_explicit_extension() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args(["-u", &svc.url, "-t", "tmpl.odt", "-o", "result.pdf"])
        .assert()
        .success();

    assert_eq!(read(&fx.path("result.pdf")), DOCUMENT);
    assert!(!fx.path("result.pdf.pdf").exists());
}

#[test]
fn compile_uses_format_extension() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args(["-u", &svc.url, "-t", "tmpl.odt", "-f", "docx", "-o", "report"])
        .assert()
        .success()
        .stdout(contains("\"format\":\"docx\""));

    assert_eq!(read(&fx.path("report.docx")), DOCUMENT);
    assert_eq!(
        svc.requests()[0].query.get("format").map(String::as_str),
        Some("docx")
    );
}

#[test]
fn compile_sends_data_assets_and_error_flag() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args([
            "-u", &svc.url, "-t", "tmpl.odt", "-d", "data.json", "-e", "-a", "logo.jpg", "-a",
            "img",
        ])
        .assert()
        .success();

    let requests = svc.requests();
    let req = &requests[0];
    assert!(req.query.contains_key("error"));
    assert!(req.body_contains(r#"{"input":{"name":"Ada"}}"#));

    let logo = req.position("filename=\"logo.jpg\"").expect("logo part");
    let a = req.position("filename=\"a.png\"").expect("a.png part");
    let b = req.position("filename=\"b.png\"").expect("b.png part");
    assert!(logo < a && a < b, "assets out of order: {logo} {a} {b}");
}

#[test]
fn compile_with_malformed_data_sends_empty_object() {
    let fx = Fixture::new();
    let svc = MockService::start();
    std::fs::write(fx.path("broken.json"), "{ nope").expect("write broken data");
    fx.cmd()
        .args(["-u", &svc.url, "-t", "tmpl.odt", "-d", "broken.json"])
        .assert()
        .success();

    assert!(svc.requests()[0].body_contains("{}"));
    assert_eq!(read(&fx.path("result.pdf")), DOCUMENT);
}

#[test]
fn vars_prints_listing_for_prefix() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args(["-u", &svc.url, "-m", "vars", "-t", "tmpl.odt", "-p", "input."])
        .assert()
        .success()
        .stdout("[\"input.name\",\"input.age\"]\n");

    let requests = svc.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, "vars");
    assert_eq!(
        requests[0].query.get("prefix").map(String::as_str),
        Some("input.")
    );
    assert!(requests[0].body_contains("filename=\"tmpl.odt\""));
    assert!(!fx.path("result.pdf").exists());
}

#[test]
fn vars_without_prefix_sends_no_filter() {
    let fx = Fixture::new();
    let svc = MockService::start();
    fx.cmd()
        .args(["-u", &svc.url, "-m", "vars", "-t", "tmpl.odt", "--print", "lines"])
        .assert()
        .success()
        .stdout("input.name\ninput.age\nmeta.title\n");

    assert!(!svc.requests()[0].query.contains_key("prefix"));
}
