//! エクスポートメニュー

use hypernym_bench_common::ExportFormat;
use leptos::prelude::*;

#[component]
pub fn ExportMenu<F>(on_export: F) -> impl IntoView
where
    F: Fn(ExportFormat) + Copy + Send + Sync + 'static,
{
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="dropdown">
            <button
                class="btn btn-outline btn-small"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                "Export"
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown-menu">
                    {ExportFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <button
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        set_is_open.set(false);
                                        on_export(format);
                                    }
                                >
                                    {format.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
