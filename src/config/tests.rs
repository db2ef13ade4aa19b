// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{DEFAULT_CATEGORIES, TagRename, is_tag_name};
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert_eq!(
        config.lproj.manifest,
        PathBuf::from("build/shared/lib/languages/languages.txt")
    );
    assert_eq!(
        config.lproj.resources,
        PathBuf::from("work/Processing.app/Contents/Resources")
    );
    assert_eq!(config.rewrite.root, PathBuf::from("content/examples"));
    assert_eq!(config.rewrite.categories, DEFAULT_CATEGORIES);
    assert!(!config.rewrite.wrap_cdata && !config.rewrite.strip_cdata);
    assert!(!config.rewrite.relocate && config.rewrite.renames.is_empty());
}

#[test]
fn test_parse_rewrite_section() {
    let toml = r#"
[rewrite]
root = "web/content/examples"
pattern = "**/*.xml"
wrap_cdata = true
categories = ["Iteration"]

[[rewrite.renames]]
from = "desc"
to = "description"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.rewrite.root, PathBuf::from("web/content/examples"));
    assert_eq!(config.rewrite.pattern.as_deref(), Some("**/*.xml"));
    assert!(config.rewrite.wrap_cdata);
    assert_eq!(config.rewrite.categories, vec!["Iteration".to_string()]);
    assert_eq!(
        config.rewrite.renames,
        vec![TagRename {
            from: "desc".to_string(),
            to: "description".to_string(),
        }]
    );
}

#[test]
fn test_unknown_field_rejected() {
    let toml = r#"
[lproj]
manifesto = "languages.txt"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_invalid_rename_rejected() {
    let toml = r#"
[[rewrite.renames]]
from = "code"
to = "not a tag"
"#;
    let err = Config::parse(toml).unwrap_err();
    assert!(err.to_string().contains("'not a tag' is not a valid tag name"));
}

#[test]
fn test_empty_manifest_rejected() {
    let toml = r#"
[lproj]
manifest = ""
"#;
    let err = Config::parse(toml).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'manifest' in section '[lproj]'");
}

#[test]
fn test_set_option_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\ndry = false\n")
        .set_option("global/dry=true")
        .unwrap()
        .set_option("lproj/resources = /tmp/Resources")
        .unwrap()
        .set_option("global/output_log_level=5")
        .unwrap()
        .build()
        .unwrap();
    assert!(config.global.dry);
    assert_eq!(config.lproj.resources, PathBuf::from("/tmp/Resources"));
    assert_eq!(config.global.output_log_level, LogLevel::Trace);
}

#[test]
fn test_set_option_malformed() {
    for option in ["dry=true", "global/dry", "/dry=true", "global/=true"] {
        let result = ConfigLoader::new().set_option(option);
        assert!(result.is_err(), "'{option}' should be rejected");
    }
}

#[test]
fn test_tag_rename_from_str() {
    let rename: TagRename = "desc = description".parse().unwrap();
    assert_eq!(rename.from, "desc");
    assert_eq!(rename.to, "description");

    let err = "desc".parse::<TagRename>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'renames' in section '[rewrite]': expected OLD=NEW, got 'desc'");

    assert!("<b>=strong".parse::<TagRename>().is_err());
}

#[test]
fn test_is_tag_name() {
    for name in ["code", "sub-category", "xsl:template", "_x", "h1", "a.b"] {
        assert!(is_tag_name(name), "{name}");
    }
    for name in ["", "1st", "-x", "a b", "<a>", "a/b"] {
        assert!(!is_tag_name(name), "{name}");
    }
}

#[test]
fn test_format_options() {
    let mut config = Config::default();
    config.rewrite.renames.push(TagRename {
        from: "desc".to_string(),
        to: "description".to_string(),
    });
    let lines = config.format_options();

    assert!(lines[0].starts_with("global.dry "));
    assert!(lines.iter().all(|l| l.contains(" = ")));
    assert!(lines.iter().any(|l| l.ends_with("= desc=description")));
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("rewrite.root") && l.ends_with("= content/examples"))
    );
    assert!(!lines.iter().any(|l| l.starts_with("global.log_file")));
}

#[test]
fn test_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("definitely/not/here/pde.toml");
    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
    ]
    "#);
}

#[test]
fn test_missing_optional_file_is_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(temp.path().join("pde.toml"));
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}
