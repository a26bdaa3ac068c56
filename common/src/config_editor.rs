//! 設定エディタのワークフロー
//!
//! 生成された設定のJSONを1つのテキストバッファとして保持する。
//! 表示モード（生成/手動編集）を切り替えてもバッファは変わらない。
//! バッファは自動修正せず、保存・実行時にパースできるかだけを確認する。

use crate::error::{Error, Result};
use crate::notify::{Notification, Notifier};
use crate::provider::ResultsProvider;
use crate::route::{Navigator, Route};
use crate::timing::WorkflowTiming;
use crate::types::BenchmarkConfig;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigMode {
    /// 読み取り専用表示
    #[default]
    Generated,
    Manual,
}

impl ConfigMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigMode::Generated => "generated",
            ConfigMode::Manual => "manual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfigMode::Generated => "Generated Config",
            ConfigMode::Manual => "Edit Manually",
        }
    }
}

/// 遅延実行される画面遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredNavigation {
    pub route: Route,
    pub delay: Duration,
}

impl DeferredNavigation {
    /// 待ち時間経過後に呼び出す
    pub fn fire(self, navigator: &mut dyn Navigator) {
        log::debug!("navigating to {}", self.route.path());
        navigator.navigate(self.route);
    }
}

/// 設定の指標キーの表示名
pub fn metric_label(key: &str) -> &str {
    match key {
        "rouge" => "ROUGE",
        "compression_ratio" => "Compression %",
        "token_savings" => "Token Savings",
        "similarity_score" => "Similarity Score",
        other => other,
    }
}

fn invalid_json_notification() -> Notification {
    Notification::destructive("Invalid JSON", "Please check your configuration for syntax errors.")
}

#[derive(Debug, Clone)]
pub struct ConfigEditor {
    generated: BenchmarkConfig,
    buffer: String,
    mode: ConfigMode,
    run_delay: Duration,
}

impl ConfigEditor {
    pub fn new(provider: &dyn ResultsProvider, timing: &WorkflowTiming) -> Result<Self> {
        let generated = provider.generated_config();
        let buffer = serde_json::to_string_pretty(&generated)?;
        Ok(Self {
            generated,
            buffer,
            mode: ConfigMode::default(),
            run_delay: timing.run_delay(),
        })
    }

    pub fn generated(&self) -> &BenchmarkConfig {
        &self.generated
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn mode(&self) -> ConfigMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ConfigMode) {
        self.mode = mode;
    }

    /// バッファ全体を置き換える（手動編集モードのみ）
    pub fn edit_buffer(&mut self, text: impl Into<String>) -> Result<()> {
        if self.mode != ConfigMode::Manual {
            return Err(Error::ReadOnlyBuffer);
        }
        self.buffer = text.into();
        Ok(())
    }

    /// バッファがJSONとしてパースできるか確認する
    ///
    /// 値は組み立てずに読み飛ばすので、f64の範囲外の数値や対になっていない
    /// サロゲートのエスケープも構文として正しければ通る。ネストの深さ制限もない
    /// （極端に深い入力はスタックを使い切る）。
    pub fn validate(&self) -> Result<()> {
        let mut de = serde_json::Deserializer::from_str(&self.buffer);
        de.disable_recursion_limit();
        IgnoredAny::deserialize(&mut de)
            .and_then(|_| de.end())
            .map_err(|e| Error::MalformedConfig(e.to_string()))
    }

    fn guard(&self, operation: &str, notifier: &mut dyn Notifier) -> Result<()> {
        if let Err(e) = self.validate() {
            log::warn!("{} rejected: {}", operation, e);
            notifier.notify(invalid_json_notification());
            return Err(e);
        }
        Ok(())
    }

    /// 設定を保存する（永続化はしない）
    pub fn save_config(&self, notifier: &mut dyn Notifier) -> Result<()> {
        self.guard("save", notifier)?;
        log::info!("config saved ({} bytes)", self.buffer.len());
        notifier.notify(Notification::new(
            "Configuration saved",
            "Your benchmark configuration has been saved successfully.",
        ));
        Ok(())
    }

    /// ベンチマークを開始する
    ///
    /// 成功時はダッシュボードへの遅延遷移を返す。呼び出し側が
    /// `delay` 経過後に `DeferredNavigation::fire` を呼ぶ。
    pub fn run_benchmark(&self, notifier: &mut dyn Notifier) -> Result<DeferredNavigation> {
        self.guard("run", notifier)?;
        log::info!("benchmark started");
        notifier.notify(Notification::new(
            "Benchmark started",
            "Your benchmark is now running. Redirecting to dashboard...",
        ));
        Ok(DeferredNavigation {
            route: Route::Dashboard,
            delay: self.run_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockResults;

    fn editor() -> ConfigEditor {
        ConfigEditor::new(&MockResults, &WorkflowTiming::default()).expect("editor")
    }

    #[test]
    fn test_buffer_seeded_from_generated_config() {
        let ed = editor();
        assert_eq!(ed.mode(), ConfigMode::Generated);
        assert!(ed.buffer().contains("\"name\": \"Hypernym Benchmark\""));
        assert!(ed.buffer().contains("\"batch_size\": 10"));
        let parsed: BenchmarkConfig = serde_json::from_str(ed.buffer()).unwrap();
        assert_eq!(&parsed, ed.generated());
    }

    #[test]
    fn test_metric_label() {
        assert_eq!(metric_label("compression_ratio"), "Compression %");
        assert_eq!(metric_label("bleu"), "bleu");
    }

    #[test]
    fn test_mode_switch_keeps_buffer() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        ed.edit_buffer("{\"a\": 1}").unwrap();
        ed.set_mode(ConfigMode::Generated);
        assert_eq!(ed.buffer(), "{\"a\": 1}");
        ed.set_mode(ConfigMode::Manual);
        assert_eq!(ed.buffer(), "{\"a\": 1}");
    }

    #[test]
    fn test_generated_mode_is_read_only() {
        let mut ed = editor();
        let before = ed.buffer().to_string();
        assert!(matches!(ed.edit_buffer("{}"), Err(Error::ReadOnlyBuffer)));
        assert_eq!(ed.buffer(), before);
    }

    #[test]
    fn test_save_malformed_buffer() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        ed.edit_buffer("{not valid json").unwrap();

        let mut log = Vec::new();
        let err = ed.save_config(&mut log).unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
        assert_eq!(ed.buffer(), "{not valid json");
        assert_eq!(log.len(), 1);
        assert!(log[0].is_destructive());
        assert_eq!(log[0].title, "Invalid JSON");
    }

    #[test]
    fn test_save_valid_buffer() {
        let ed = editor();
        let mut log = Vec::new();
        ed.save_config(&mut log).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].title, "Configuration saved");
        assert!(!log[0].is_destructive());
    }

    #[test]
    fn test_any_json_value_is_accepted() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        for text in ["[]", "42", "\"text\"", "null", "{\"models\": []}"] {
            ed.edit_buffer(text).unwrap();
            assert!(ed.validate().is_ok(), "{}", text);
        }
    }

    /// 値として表現できなくても構文が正しければ保存できる
    #[test]
    fn test_out_of_range_number_is_accepted() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        ed.edit_buffer("{\"batch_size\": 1e400}").unwrap();

        let mut log = Vec::new();
        ed.save_config(&mut log).unwrap();
        assert_eq!(log[0].title, "Configuration saved");
    }

    #[test]
    fn test_lone_surrogate_escape_is_accepted() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        ed.edit_buffer(r#"{"name": "\ud800"}"#).unwrap();

        let mut log = Vec::new();
        ed.save_config(&mut log).unwrap();
        assert!(!log[0].is_destructive());
    }

    #[test]
    fn test_deep_nesting_is_accepted() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        let text = format!("{}{}", "[".repeat(200), "]".repeat(200));
        ed.edit_buffer(text).unwrap();

        let mut log = Vec::new();
        assert!(ed.run_benchmark(&mut log).is_ok());
        assert_eq!(log[0].title, "Benchmark started");
    }

    /// 末尾の余計な文字は不正
    #[test]
    fn test_trailing_characters_are_rejected() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        for text in ["{} {}", "[1]]", "{\"a\": 1} x"] {
            ed.edit_buffer(text).unwrap();
            assert!(matches!(ed.validate(), Err(Error::MalformedConfig(_))), "{}", text);
        }
    }

    #[test]
    fn test_run_malformed_buffer_does_not_navigate() {
        let mut ed = editor();
        ed.set_mode(ConfigMode::Manual);
        ed.edit_buffer("").unwrap();

        let mut log = Vec::new();
        assert!(ed.run_benchmark(&mut log).is_err());
        assert_eq!(ed.buffer(), "");
        assert!(log[0].is_destructive());
    }

    #[test]
    fn test_run_returns_deferred_dashboard_navigation() {
        let ed = editor();
        let mut log = Vec::new();
        let pending = ed.run_benchmark(&mut log).unwrap();
        assert_eq!(pending.route, Route::Dashboard);
        assert_eq!(pending.delay, Duration::from_millis(1500));
        assert_eq!(log[0].title, "Benchmark started");

        let mut routes: Vec<Route> = Vec::new();
        pending.fire(&mut routes);
        assert_eq!(routes, vec![Route::Dashboard]);
    }
}
