//! ナビゲーションヘッダー

use hypernym_bench_common::{DisplayMode, Route, Theme};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn AppNav() -> impl IntoView {
    let pathname = use_location().pathname;
    let display = expect_context::<RwSignal<DisplayMode>>();

    let toggle_theme = move |_| {
        display.update(|mode| {
            if let Some(theme) = mode.toggle() {
                log::debug!("theme: {}", theme);
            }
        });
    };

    view! {
        <header class="app-nav">
            <div class="nav-brand">
                <A href="/">
                    <span class="gradient-text">"Hypernym Benchmarking"</span>
                </A>
            </div>
            <nav class="nav-links">
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        let is_active = move || pathname.with(|path| route.is_active(path));
                        view! {
                            <A href=route.path()>
                                <span class="nav-link" class:active=is_active>
                                    {route.label()}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="nav-actions">
                // テーマ確定前はボタンを出さない
                <Show when=move || display.get().is_ready()>
                    <button
                        class="btn btn-icon"
                        title="Toggle theme"
                        on:click=toggle_theme
                    >
                        {move || match display.get().theme() {
                            Some(Theme::Dark) => "☀",
                            _ => "☾",
                        }}
                    </button>
                </Show>
                <button class="btn btn-outline btn-small">"Documentation"</button>
            </div>
        </header>
    }
}
