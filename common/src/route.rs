//! 画面ルート

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Upload,
    Configure,
    Dashboard,
}

impl Route {
    /// ナビゲーションの表示順
    pub const ALL: [Route; 3] = [Route::Upload, Route::Configure, Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Upload => "/",
            Route::Configure => "/configure",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Upload => "Upload",
            Route::Configure => "Configure",
            Route::Dashboard => "Dashboard",
        }
    }

    /// 末尾スラッシュは無視する
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        Route::from_path(current_path) == Some(*self)
    }
}

/// 画面遷移を行う側
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// 遷移先を記録するだけの実装
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}
