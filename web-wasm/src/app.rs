//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use hypernym_bench_common::{DisplayMode, MockResults, SharedProvider, Theme, WorkflowTiming};
use crate::components::{
    config_screen::ConfigScreen,
    dashboard_screen::DashboardScreen,
    header::AppNav,
    toaster::{ToastViewport, Toaster},
    upload_area::UploadScreen,
};

/// 画面間で共有する依存（データは共有しない）
#[derive(Clone)]
pub struct AppContext {
    pub provider: SharedProvider,
    pub timing: WorkflowTiming,
    pub toaster: Toaster,
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// `<html>` のクラスにテーマを反映
fn apply_theme(theme: Theme) {
    let root = gloo::utils::document_element();
    if let Err(e) = root.class_list().toggle_with_force("dark", theme == Theme::Dark) {
        log::warn!("failed to apply theme: {:?}", e);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let timing = WorkflowTiming::default();
    let toaster = Toaster::new(timing.toast_duration_ms);
    provide_context(AppContext {
        provider: MockResults::shared(),
        timing,
        toaster,
    });

    // 表示モードは初回描画後に確定させる
    let display = RwSignal::new(DisplayMode::Pending);
    provide_context(display);
    Effect::new(move |_| {
        display.update(|mode| {
            mode.initialize(Theme::Light);
        });
    });
    Effect::new(move |_| {
        if let Some(theme) = display.get().theme() {
            apply_theme(theme);
        }
    });

    view! {
        <Router>
            <div class="app-shell">
                <AppNav />
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="text-muted">"Page not found"</p> }>
                        <Route path=path!("/") view=UploadScreen />
                        <Route path=path!("/configure") view=ConfigScreen />
                        <Route path=path!("/dashboard") view=DashboardScreen />
                    </Routes>
                </main>
            </div>
            <ToastViewport toaster=toaster />
        </Router>
    }
}
