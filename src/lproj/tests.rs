// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    DirOutcome, LanguageCode, LanguageManifest, ensure_language_directory,
    list_supported_languages, scaffold,
};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn code(s: &str) -> LanguageCode {
    LanguageCode::from_manifest_line(s).expect("valid code")
}

fn codes(manifest: &LanguageManifest) -> Vec<String> {
    manifest.codes().map(|c| c.as_str().to_string()).collect()
}

#[test]
fn test_manifest_excludes_uppercase() {
    let manifest = LanguageManifest::parse("en\nfr # French\nXX\n");
    insta::assert_debug_snapshot!(codes(&manifest), @r#"
    [
        "en",
        "fr",
    ]
    "#);
}

#[test]
fn test_manifest_line_rules() {
    let text = "\
# Supported languages
en
  de
e
zh_CN   # Simplified Chinese
pt-BR#Brazil
Ja
ko\t
\u{e9}s

ru";
    let manifest = LanguageManifest::parse(text);
    assert_eq!(codes(&manifest), ["en", "zh_CN", "pt-BR", "ko", "ru"]);
}

#[test]
fn test_manifest_codes_restartable() {
    let manifest = LanguageManifest::parse("en\nfr\n");
    let first: Vec<_> = manifest.codes().collect();
    let second: Vec<_> = manifest.codes().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_manifest_windows_line_endings() {
    let manifest = LanguageManifest::parse("en\r\nfr # French\r\n");
    assert_eq!(codes(&manifest), ["en", "fr"]);
}

#[test]
fn test_list_supported_languages_missing_file() {
    let temp = temp_dir();
    let err = list_supported_languages(&temp.path().join("languages.txt")).unwrap_err();
    assert!(
        err.to_string()
            .starts_with("failed to read language manifest")
    );
}

#[test]
fn test_lproj_dir_name() {
    assert_eq!(code("zh_CN").lproj_dir_name(), "zh_CN.lproj");
    assert_eq!(code("en").to_string(), "en");
}

#[test]
fn test_ensure_language_directory_idempotent() {
    let temp = temp_dir();
    let en = code("en");

    let first = ensure_language_directory(temp.path(), &en, false).unwrap();
    let second = ensure_language_directory(temp.path(), &en, false).unwrap();

    assert_eq!(first, DirOutcome::Created);
    assert_eq!(second, DirOutcome::AlreadyExists);
    assert!(temp.path().join("en.lproj").is_dir());
}

#[test]
fn test_ensure_language_directory_missing_root_is_fatal() {
    let temp = temp_dir();
    let resources = temp.path().join("Contents/Resources");
    let result = ensure_language_directory(&resources, &code("en"), false);
    assert!(result.is_err());
    assert!(!resources.exists());
}

#[test]
fn test_ensure_language_directory_dry_run() {
    let temp = temp_dir();
    let fr = code("fr");

    let outcome = ensure_language_directory(temp.path(), &fr, true).unwrap();
    assert_eq!(outcome, DirOutcome::WouldCreate);
    assert!(!temp.path().join("fr.lproj").exists());

    std::fs::create_dir(temp.path().join("fr.lproj")).unwrap();
    let outcome = ensure_language_directory(temp.path(), &fr, true).unwrap();
    assert_eq!(outcome, DirOutcome::AlreadyExists);
}

#[test]
fn test_scaffold_creates_every_code() {
    let temp = temp_dir();
    let manifest = temp.path().join("languages.txt");
    let resources = temp.path().join("Resources");
    std::fs::write(&manifest, "en\nfr # French\nXX\nde\n").unwrap();
    std::fs::create_dir(&resources).unwrap();
    std::fs::create_dir(resources.join("fr.lproj")).unwrap();

    let report = scaffold(&manifest, &resources, false).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(
        report.created,
        [resources.join("en.lproj"), resources.join("de.lproj")]
    );
    assert_eq!(report.existing, [resources.join("fr.lproj")]);
    assert!(!resources.join("XX.lproj").exists());

    let again = scaffold(&manifest, &resources, false).unwrap();
    assert!(again.created.is_empty());
    assert_eq!(again.existing.len(), 3);
}
