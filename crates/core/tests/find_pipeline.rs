//! Scan-then-match pipeline against a real directory.

use notekit_core::search::find_matches;
use notekit_core::zettel::scanner::{scan_notes, ScanLimits};
use std::fs;
use tempfile::TempDir;

fn brain() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(
        root.join("202001011200.md"),
        "# Deep Work\nRules for focused success.\nCal Newport.\n",
    )
    .unwrap();
    fs::write(
        root.join("202001021330.md"),
        "# Shallow Work\nThe opposite of deep work.\n",
    )
    .unwrap();
    fs::write(root.join("202001031400.md"), "# Grocery List\nmilk\neggs\n").unwrap();
    fs::write(root.join("scratch.md"), "no title, not a zettel\n").unwrap();

    dir
}

#[test]
fn matching_titles_are_found_case_insensitively() {
    let dir = brain();
    let zettels = scan_notes(dir.path(), &ScanLimits::default()).unwrap();
    assert_eq!(zettels.len(), 3);

    let matches = find_matches("DEEP work", &zettels);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].uid, "202001011200");
}

#[test]
fn substring_query_matches_multiple_titles() {
    let dir = brain();
    let zettels = scan_notes(dir.path(), &ScanLimits::default()).unwrap();

    let matches = find_matches("work", &zettels);
    let uids: Vec<_> = matches.iter().map(|z| z.uid.as_str()).collect();
    assert_eq!(uids, vec!["202001011200", "202001021330"]);
}

#[test]
fn no_match_is_an_empty_result() {
    let dir = brain();
    let zettels = scan_notes(dir.path(), &ScanLimits::default()).unwrap();

    assert!(find_matches("quantum chromodynamics", &zettels).is_empty());
}

#[test]
fn chosen_zettel_emits_title_and_uid_reference() {
    let dir = brain();
    let zettels = scan_notes(dir.path(), &ScanLimits::default()).unwrap();

    let matches = find_matches("grocery", &zettels);
    assert_eq!(matches[0].insertion_line(), "Grocery List [[202001031400]]");
}

#[test]
fn option_labels_carry_the_excerpt() {
    let dir = brain();
    let zettels = scan_notes(dir.path(), &ScanLimits::default()).unwrap();

    let matches = find_matches("deep work", &zettels);
    let label = matches[0].option_label();
    assert!(label.starts_with("# Deep Work [[202001011200]]\n"));
    assert!(label.contains("Rules for focused success."));
    assert!(label.ends_with("..."));
}
