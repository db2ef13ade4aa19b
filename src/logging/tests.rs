// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use crate::config::types::GlobalConfig;
use std::path::Path;

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::Silent);
    assert_eq!(LogLevel::new(6).unwrap(), LogLevel::Dump);
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::Debug));
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(u8::from(LogLevel::Trace), 5);
    assert!(LogLevel::Warn < LogLevel::Info);
}

#[test]
fn test_log_level_directives() {
    let directives: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::directives)
        .collect();
    insta::assert_debug_snapshot!(directives, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,pde_tools=info,pde=info",
        "warn,pde_tools=debug,pde=debug",
        "warn,pde_tools=trace,pde=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::Debug);
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "2");
    let err = serde_json::from_str::<LogLevel>("12").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6, got 12"));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::Trace,
        file_log_level: LogLevel::Debug,
        log_file: Some("logs/pde.log".into()),
        ..GlobalConfig::default()
    };
    let config = LogConfig::from_global(&global);
    assert_eq!(config.console_level(), LogLevel::Trace);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert_eq!(config.log_file(), Some(Path::new("logs/pde.log")));
    assert!(config.show_target());

    assert!(!LogConfig::from_global(&GlobalConfig::default()).show_target());
}
