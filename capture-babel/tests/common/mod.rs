//! Shared helpers for the integration tests.

use capture_babel::StyledDocument;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a styled document fixture from `tests/fixtures/`.
pub fn load_fixture(name: &str) -> StyledDocument {
    let path = fixture_path(name);
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read fixture {}: {err}", path.display()));
    StyledDocument::from_json(&source)
        .unwrap_or_else(|err| panic!("Failed to decode fixture {}: {err}", path.display()))
}

#[test]
fn test_fixtures_decode() {
    for name in [
        "semantic_kitchensink.json",
        "appearance_list.json",
        "plain_text.json",
    ] {
        assert!(!load_fixture(name).is_empty(), "{name} should have runs");
    }
}
