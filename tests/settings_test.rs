//! CLI設定ファイルのテスト

use hypernym_bench::config::Settings;
use hypernym_bench::error::BenchError;
use hypernym_bench_common::{Theme, WorkflowTiming};
use tempfile::tempdir;

/// ファイルがなければ既定値
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let settings = Settings::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.timing, WorkflowTiming::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let settings = Settings {
        theme: Theme::Dark,
        timing: WorkflowTiming { run_delay_ms: 0, ..Default::default() },
    };
    settings.save_to(&path).expect("設定保存失敗");

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

/// 一部だけ書かれた設定は残りを既定値で補う
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.timing.progress_step, 5);
}

/// 壊れた設定ファイルはJSONエラー
#[test]
fn test_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{theme").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, BenchError::JsonParse(_)));
}

/// BenchErrorのDisplay
#[test]
fn test_error_display() {
    let err = BenchError::FileNotFound("config.json".to_string());
    assert_eq!(format!("{}", err), "ファイルが見つかりません: config.json");

    let err: BenchError = hypernym_bench_common::Error::UnknownJob("job-9".to_string()).into();
    assert_eq!(format!("{}", err), "Unknown job: job-9");
}
