use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("capture-babel")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn url_for_capture_with_body() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("url")
        .arg(fixture_path("plain_text.json"))
        .arg("--url")
        .arg("https://example.com")
        .arg("--title")
        .arg("Names");

    cmd.assert().success().stdout(
        "org-protocol://capture?url=https%3A%2F%2Fexample.com&title=Names&template=c&body=mary%0A%0Ajane\n",
    );
}

#[test]
fn url_for_store_link() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("url")
        .arg("--protocol")
        .arg("store-link")
        .arg("--url")
        .arg("https://example.com")
        .arg("--template")
        .arg("w");

    cmd.assert()
        .success()
        .stdout("org-protocol://store-link?url=https%3A%2F%2Fexample.com\n");
}

#[test]
fn store_link_without_url_fails() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("url")
        .arg("--protocol")
        .arg("store-link")
        .arg("--title")
        .arg("Orphan");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("A URL is required for store-link"));
}

#[test]
fn invalid_url_is_dropped_with_warning() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("url")
        .arg("--url")
        .arg("ftp://example.com")
        .arg("--title")
        .arg("Kept");

    cmd.assert()
        .success()
        .stdout("org-protocol://capture?title=Kept&template=c\n")
        .stderr(predicate::str::contains("ignoring 'ftp://example.com'"));
}

#[test]
fn capture_message_in_markdown() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("message")
        .arg(fixture_path("semantic_kitchensink.json"))
        .arg("--url")
        .arg("https://example.com")
        .arg("--title")
        .arg("Shopping")
        .arg("--to")
        .arg("md");

    cmd.assert().success().stdout(predicate::str::starts_with(
        "# Shopping\n[Shopping](https://example.com)\n# Shopping notes\n\nBuy **fresh** bread",
    ));
}

#[test]
fn link_message_in_org() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("message")
        .arg("--payload")
        .arg("link")
        .arg("--url")
        .arg("https://example.com")
        .arg("--title")
        .arg("Example");

    cmd.assert()
        .success()
        .stdout("[[https://example.com][Example]]\n");
}

#[test]
fn empty_message_fails() {
    let mut cmd = cargo_bin_cmd!("capture");
    cmd.arg("message").arg("--payload").arg("link");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to send"));
}
