//! 表示モード（ライト/ダーク）
//!
//! 初回描画の後にクライアント側で初期化されるまでテーマは未確定。
//! テーマ依存の描画は `DisplayMode::Ready` のときだけ行う。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}. Use light or dark", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 表示モードのライフサイクル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Pending,
    Ready(Theme),
}

impl DisplayMode {
    /// クライアント初期化。2回目以降は現在のテーマを保持する。
    pub fn initialize(&mut self, theme: Theme) -> Theme {
        match *self {
            DisplayMode::Pending => {
                log::debug!("display mode ready: {}", theme);
                *self = DisplayMode::Ready(theme);
                theme
            }
            DisplayMode::Ready(current) => current,
        }
    }

    pub fn theme(&self) -> Option<Theme> {
        match self {
            DisplayMode::Pending => None,
            DisplayMode::Ready(theme) => Some(*theme),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DisplayMode::Ready(_))
    }

    /// 初期化前は何もしない
    pub fn toggle(&mut self) -> Option<Theme> {
        if let DisplayMode::Ready(theme) = self {
            *theme = theme.toggled();
            return Some(*theme);
        }
        None
    }
}
