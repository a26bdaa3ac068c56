//! ダッシュボード画面

use hypernym_bench_common::{DashboardState, ExportFormat, Navigator, Route};
use leptos::prelude::*;

use crate::app::use_app;
use crate::components::{
    benchmark_charts::BenchmarkCharts, dashboard_charts::DashboardCharts,
    export_buttons::ExportMenu, job_sidebar::JobSidebar,
};
use crate::navigation::use_navigator;

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let ctx = use_app();
    let provider = ctx.provider.clone();
    let toaster = ctx.toaster;
    let state = RwSignal::new(DashboardState::new(provider.as_ref()));
    let navigator = use_navigator();

    let on_select = move |job_id: String| {
        if let Err(e) = state.try_update(|s| s.select_job(Some(&job_id))).transpose() {
            log::warn!("selection failed: {}", e);
        }
    };

    let on_export = move |format: ExportFormat| {
        let mut notifier = toaster;
        if let Err(e) = state.with_untracked(|s| s.export_report(format, &mut notifier)) {
            log::warn!("export failed: {}", e);
        }
    };

    // 選択中のジョブは維持したまま読み直す
    let refresh = {
        let provider = provider.clone();
        move |_| {
            state.update(|s| {
                let selected = s.selected_job_id().map(str::to_string);
                *s = DashboardState::new(provider.as_ref());
                if let Err(e) = s.select_job(selected.as_deref()) {
                    log::warn!("selection lost on refresh: {}", e);
                }
            });
        }
    };

    let configure = move |_| {
        let mut nav = navigator.clone();
        nav.navigate(Route::Configure);
    };

    let selected_id = move || state.with(|s| s.selected_job_id().map(str::to_string));

    view! {
        <div class="dashboard-layout">
            <JobSidebar state=state on_select=on_select />
            <div class="dashboard-main">
                <div class="dashboard-header">
                    <div>
                        <h1 class="page-title gradient-text">{move || state.with(|s| s.title())}</h1>
                        <p class="text-muted small">{move || state.with(|s| s.subtitle())}</p>
                    </div>
                    <Show when=move || selected_id().is_some()>
                        <div class="page-actions">
                            <button class="btn btn-outline btn-small" on:click=refresh.clone()>"Refresh"</button>
                            <ExportMenu on_export=on_export />
                            <button class="btn btn-primary btn-small" on:click=configure.clone()>"Configure"</button>
                        </div>
                    </Show>
                </div>
                <div class="dashboard-content">
                    {move || match selected_id() {
                        Some(job_id) => {
                            let provider = provider.clone();
                            view! {
                                <DashboardCharts data=provider.batch_metrics(&job_id) />
                                <BenchmarkCharts
                                    savings=provider.token_savings()
                                    rouge=provider.rouge_comparison()
                                    similarity=provider.semantic_similarity()
                                />
                            }
                            .into_any()
                        }
                        None => view! { <NoJobSelected /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NoJobSelected() -> impl IntoView {
    view! {
        <div class="card empty-card">
            <h2 class="card-title">"No Job Selected"</h2>
            <p class="text-muted">
                "Choose a benchmark job from the sidebar to view detailed results and analytics."
            </p>
            <div class="icon-container icon-purple large">"⚙"</div>
            <p class="text-muted small">
                "Select from in-progress or completed benchmark runs to explore performance metrics, token savings, and semantic similarity analysis."
            </p>
        </div>
    }
}
