//! ジョブ一覧サイドバー

use hypernym_bench_common::{BenchmarkJob, DashboardState};
use leptos::prelude::*;

#[component]
pub fn JobSidebar<F>(state: RwSignal<DashboardState>, on_select: F) -> impl IntoView
where
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let in_progress = move || {
        state.with(|s| s.in_progress_jobs().into_iter().cloned().collect::<Vec<_>>())
    };
    let completed = move || {
        state.with(|s| s.completed_jobs().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <aside class="job-sidebar">
            <div class="sidebar-section">
                <h3 class="section-label">
                    {move || format!("In Progress ({})", in_progress().len())}
                </h3>
                <Show
                    when=move || !in_progress().is_empty()
                    fallback=|| view! { <p class="text-muted small">"No jobs in progress"</p> }
                >
                    <For
                        each=in_progress
                        key=|job| job.id.clone()
                        children=move |job| view! { <JobItem job=job state=state on_select=on_select /> }
                    />
                </Show>
            </div>
            <div class="sidebar-section">
                <h3 class="section-label">
                    {move || format!("Completed ({})", completed().len())}
                </h3>
                <For
                    each=completed
                    key=|job| job.id.clone()
                    children=move |job| view! { <JobItem job=job state=state on_select=on_select /> }
                />
            </div>
        </aside>
    }
}

#[component]
fn JobItem<F>(job: BenchmarkJob, state: RwSignal<DashboardState>, on_select: F) -> impl IntoView
where
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let id = job.id.clone();
    let is_selected = {
        let id = id.clone();
        move || state.with(|s| s.is_selected(&id))
    };
    let meta = format!("{} • {} samples", job.model, job.sample_count);

    let detail = match (job.progress(), job.end_time()) {
        (Some(progress), _) => view! {
            <div class="job-progress">
                <div class="progress-bar small">
                    <div class="progress-fill" style=format!("width: {}%", progress) />
                </div>
                <span class="badge">{format!("{}% complete", progress)}</span>
            </div>
        }
        .into_any(),
        (None, Some(end)) => view! {
            <p class="text-muted small">{format!("{} - {}", job.start_time, end)}</p>
        }
        .into_any(),
        (None, None) => ().into_any(),
    };

    view! {
        <button
            class="job-item"
            class:selected=is_selected
            on:click=move |_| on_select(id.clone())
        >
            <span class="job-name">{job.name.clone()}</span>
            <span class="text-muted small">{meta}</span>
            {detail}
        </button>
    }
}
