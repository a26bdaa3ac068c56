//! 設定画面

use gloo::timers::callback::Timeout;
use hypernym_bench_common::{metric_label, BenchmarkConfig, ConfigEditor, ConfigMode};
use leptos::prelude::*;

use crate::app::use_app;
use crate::navigation::use_navigator;

#[component]
pub fn ConfigScreen() -> impl IntoView {
    let ctx = use_app();
    match ConfigEditor::new(ctx.provider.as_ref(), &ctx.timing) {
        Ok(editor) => {
            let counts = ctx.provider.category_counts();
            view! { <ConfigWorkspace editor=editor counts=counts /> }.into_any()
        }
        Err(e) => {
            log::error!("failed to build config editor: {}", e);
            view! {
                <div class="error-message">
                    <span>"⚠️"</span>
                    <span>{e.to_string()}</span>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn ConfigWorkspace(editor: ConfigEditor, counts: Vec<(String, u32)>) -> impl IntoView {
    let toaster = use_app().toaster;
    let generated = editor.generated().clone();
    let editor = RwSignal::new(editor);
    let (sidebar_open, set_sidebar_open) = signal(true);
    let navigator = use_navigator();

    let save = move |_| {
        let mut toaster = toaster;
        if let Err(e) = editor.with_untracked(|ed| ed.save_config(&mut toaster)) {
            log::warn!("save failed: {}", e);
        }
    };

    let run = move |_| {
        let mut toaster = toaster;
        match editor.with_untracked(|ed| ed.run_benchmark(&mut toaster)) {
            Ok(pending) => {
                let mut nav = navigator.clone();
                let delay_ms = u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX);
                Timeout::new(delay_ms, move || pending.fire(&mut nav)).forget();
            }
            Err(e) => log::warn!("run failed: {}", e),
        }
    };

    view! {
        <div class="config-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Configuration"</h1>
                    <p class="text-muted small">"Configure your hypernym benchmark settings"</p>
                </div>
                <div class="page-actions">
                    <button class="btn btn-outline btn-small" on:click=save>"Save Config"</button>
                    <button class="btn btn-primary btn-small" on:click=run>"Run Benchmark"</button>
                </div>
            </div>
            <div class="config-layout">
                <Show
                    when=move || sidebar_open.get()
                    fallback=move || view! {
                        <button
                            class="btn btn-outline btn-small sidebar-reopen"
                            on:click=move |_| set_sidebar_open.set(true)
                        >
                            "Catalog Structure"
                        </button>
                    }
                >
                    <CatalogSidebar
                        config=generated.clone()
                        counts=counts.clone()
                        on_close=move || set_sidebar_open.set(false)
                    />
                </Show>
                <ConfigEditorPanel editor=editor />
            </div>
        </div>
    }
}

#[component]
fn CatalogSidebar<F>(config: BenchmarkConfig, counts: Vec<(String, u32)>, on_close: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <aside class="card catalog-sidebar">
            <div class="card-header spread">
                <h2 class="card-title">"Catalog Structure"</h2>
                <button class="btn btn-icon" title="Close" on:click=move |_| on_close()>"×"</button>
            </div>
            <p class="section-label">"Categories"</p>
            <ul class="tree">
                {counts
                    .into_iter()
                    .map(|(name, count)| view! { <li>{format!("{} ({})", name, count)}</li> })
                    .collect_view()}
            </ul>
            <p class="section-label">"Models"</p>
            <ul class="tree">
                {config
                    .models
                    .iter()
                    .map(|model| view! { <li>{model.name.clone()}</li> })
                    .collect_view()}
            </ul>
            <p class="section-label">"Metrics"</p>
            <ul class="tree">
                {config
                    .metrics
                    .iter()
                    .map(|key| view! { <li>{metric_label(key).to_string()}</li> })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn ConfigEditorPanel(editor: RwSignal<ConfigEditor>) -> impl IntoView {
    let mode = move || editor.with(|ed| ed.mode());
    let buffer = move || editor.with(|ed| ed.buffer().to_string());

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        editor.update(|ed| {
            if let Err(e) = ed.edit_buffer(text) {
                log::warn!("edit ignored: {}", e);
            }
        });
    };

    view! {
        <section class="card editor-panel">
            <div class="card-header">
                <h2 class="card-title">"Configuration Editor"</h2>
            </div>
            <div class="tabs">
                {[ConfigMode::Generated, ConfigMode::Manual]
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || mode() == tab
                                on:click=move |_| editor.update(|ed| ed.set_mode(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match mode() {
                ConfigMode::Generated => view! {
                    <div class="tab-content">
                        <p class="text-muted small">"Auto-generated configuration"</p>
                        <pre class="code-view">{buffer()}</pre>
                    </div>
                }
                .into_any(),
                ConfigMode::Manual => view! {
                    <div class="tab-content">
                        <p class="text-muted small">"Edit configuration manually"</p>
                        <textarea
                            class="code-editor"
                            spellcheck="false"
                            prop:value=buffer
                            on:input=on_input
                        />
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
