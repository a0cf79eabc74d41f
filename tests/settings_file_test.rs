#![cfg(feature = "cli")]

use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use wunderscore::app::commands::execute;
use wunderscore::utils::validation::Validate;
use wunderscore::{Command, Settings, WunderError};

/// 測試從檔案載入設定並套用到指令
#[test]
fn test_settings_file_drives_lpad_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("wunderscore.toml");
    std::fs::write(
        &config_path,
        r#"
[format]
pad_fill = "."
pad_width = 6

[random]
round = false
"#,
    )?;

    let settings = Settings::from_file(&config_path)?;
    settings.validate()?;
    assert!(!settings.random.round);

    let out = execute(
        &Command::Lpad {
            value: "42".to_string(),
            width: None,
            fill: None,
        },
        &settings,
    )?;
    assert_eq!(out, json!("....42"));

    let out = execute(
        &Command::Lpad {
            value: "42".to_string(),
            width: Some(3),
            fill: Some('0'),
        },
        &settings,
    )?;
    assert_eq!(out, json!("042"));
    Ok(())
}

#[test]
fn test_missing_settings_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Settings::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, WunderError::IoError(_)));
}

#[test]
fn test_command_errors_surface_invalid_arguments() -> Result<()> {
    let settings = Settings::default();

    let err = execute(
        &Command::Clamp {
            value: 50.0,
            low: 12.0,
            high: 2.0,
        },
        &settings,
    )
    .unwrap_err();
    assert!(matches!(err, WunderError::InvalidArgument { function: "clamp", .. }));

    let err = execute(
        &Command::Rand {
            low: Some(5.0),
            high: None,
            float: false,
        },
        &settings,
    )
    .unwrap_err();
    assert!(matches!(err, WunderError::InvalidArgument { function: "rand", .. }));

    let out = execute(
        &Command::Normalize {
            value: 5.0,
            low: 0.0,
            high: 10.0,
        },
        &settings,
    )?;
    assert_eq!(out, json!(0.5));
    Ok(())
}

#[test]
fn test_cli_parses_negative_range_bounds() {
    use clap::Parser;
    use wunderscore::CliConfig;

    let cli = CliConfig::parse_from(["wunderscore", "range", "10", "-10", "--step", "5"]);
    let out = execute(&cli.command, &Settings::default()).unwrap();
    assert_eq!(out, json!([10, 5, 0, -5, -10]));
}
