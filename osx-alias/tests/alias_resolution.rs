//! End-to-end alias resolution against a real directory tree.

#![cfg(unix)]

mod common;

use common::AliasTree;
use osx_alias::path::normalize::absolutize;
use osx_alias::{AliasResolver, Error};

#[test]
fn test_alias_to_file_resolves_to_recorded_path() {
    let tree = AliasTree::new();
    let report = tree.file("Documents/report.pdf");
    let link = tree.alias("Desktop/link.alias", &report, false);

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&link)).unwrap(), report);
}

#[test]
fn test_alias_to_directory_gets_trailing_slash() {
    let tree = AliasTree::new();
    let projects = tree.dir("Projects");
    let link = tree.alias("Desktop/projects.alias", &projects, true);

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&link)).unwrap(), format!("{projects}/"));
}

#[test]
fn test_alias_to_missing_target_still_resolves() {
    let tree = AliasTree::new();
    let gone = tree.path("Archive/old.txt");
    let link = tree.alias("Desktop/old.alias", &gone, false);

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&link)).unwrap(), gone);
}

#[test]
fn test_memory_layout_alias_resolves() {
    let tree = AliasTree::new();
    let projects = tree.dir("Projects");
    let link = tree.memory_alias("Desktop/projects.alias", &projects, true);

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&link)).unwrap(), format!("{projects}/"));
}

#[test]
fn test_relative_input_matches_absolute_input() {
    let tree = AliasTree::new();
    let report = tree.file("Documents/report.pdf");
    let link = tree.alias("Desktop/link.alias", &report, false);

    let resolver = AliasResolver::new(tree.root());
    let relative = resolver.resolve(Some("Desktop/link.alias")).unwrap();
    let absolute = resolver.resolve(Some(&link)).unwrap();
    assert_eq!(relative, absolute);
    assert_eq!(relative, report);
}

#[test]
fn test_non_alias_paths_pass_through() {
    let tree = AliasTree::new();
    let report = tree.file("Documents/report.pdf");
    let documents = tree.path("Documents");
    let resolver = AliasResolver::new(tree.root());

    assert_eq!(resolver.resolve(Some(&report)).unwrap(), report);
    assert_eq!(
        resolver.resolve(Some("Documents")).unwrap(),
        format!("{documents}/")
    );
    assert_eq!(
        resolver.resolve(Some("Documents/./../Documents/report.pdf")).unwrap(),
        report
    );
}

#[test]
fn test_missing_paths_are_standardized_only() {
    let tree = AliasTree::new();
    let resolver = AliasResolver::new(tree.root());

    for input in ["nothing", "a/b/../c.alias", "./x//y/"] {
        assert_eq!(
            resolver.resolve(Some(input)).unwrap(),
            absolutize(input, tree.root()),
            "input {input}"
        );
    }
}

#[test]
fn test_default_input_is_working_directory() {
    let tree = AliasTree::new();
    let resolver = AliasResolver::new(tree.root());
    let expected = format!("{}/", absolutize(".", tree.root()));

    assert_eq!(resolver.resolve(None).unwrap(), expected);
    assert_eq!(resolver.resolve(Some(".")).unwrap(), expected);
}

#[test]
fn test_resolution_is_idempotent_for_plain_paths() {
    let tree = AliasTree::new();
    tree.file("Documents/report.pdf");
    let resolver = AliasResolver::new(tree.root());

    for input in ["Documents", "Documents/report.pdf", "missing", "."] {
        let once = resolver.resolve(Some(input)).unwrap();
        assert_eq!(resolver.resolve(Some(&once)).unwrap(), once, "input {input}");
    }
}

#[test]
fn test_corrupt_alias_is_an_error() {
    let tree = AliasTree::new();
    let mut data = b"book\0\0\0\0mark\0\0\0\0".to_vec();
    data.extend_from_slice(&[0xff; 8]);
    let broken = tree.write("Desktop/broken.alias", &data);

    let resolver = AliasResolver::new(tree.root());
    let err = resolver.resolve(Some(&broken)).unwrap_err();
    assert!(matches!(err, Error::InvalidAlias { .. }), "got {err:?}");
    assert!(err.is_alias_failure());
}

#[test]
fn test_text_file_starting_with_book_passes_through() {
    let tree = AliasTree::new();
    let notes = tree.write("notes.txt", b"bookkeeping notes\n");
    let reading = tree.write("reading.txt", b"books to read this summer\n");

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&notes)).unwrap(), notes);
    assert_eq!(resolver.resolve(Some(&reading)).unwrap(), reading);
}

#[test]
fn test_symlink_to_alias_is_not_followed() {
    let tree = AliasTree::new();
    let report = tree.file("Documents/report.pdf");
    let link = tree.alias("Desktop/link.alias", &report, false);
    let symlink = tree.path("Desktop/shortcut");
    std::os::unix::fs::symlink(&link, &symlink).unwrap();

    let resolver = AliasResolver::new(tree.root());
    assert_eq!(resolver.resolve(Some(&symlink)).unwrap(), symlink);
}
