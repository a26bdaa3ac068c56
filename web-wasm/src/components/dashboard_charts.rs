//! バッチ別指標のタブ付きチャート

use hypernym_bench_common::{BatchMetrics, ChartKind, Metric, Series};
use leptos::prelude::*;

use crate::components::charts::{BarChart, LineChart};

#[component]
pub fn DashboardCharts(data: Vec<BatchMetrics>) -> impl IntoView {
    let active = RwSignal::new(Metric::Rouge);
    let labels: Vec<String> = data.iter().map(|b| b.name.clone()).collect();

    view! {
        <div class="dashboard-charts">
            <div class="tabs tabs-4">
                {Metric::ALL
                    .into_iter()
                    .map(|metric| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || active.get() == metric
                                on:click=move |_| active.set(metric)
                            >
                                {metric.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let metric = active.get();
                let series = vec![Series::from_metric(metric, &data)];
                let chart = match metric.kind() {
                    ChartKind::Bar => view! {
                        <BarChart
                            labels=labels.clone()
                            series=series
                            domain=metric.domain()
                            tick_count=metric.tick_count()
                            suffix=metric.suffix()
                            value_label=metric.tooltip_label()
                        />
                    }
                    .into_any(),
                    _ => view! {
                        <LineChart
                            labels=labels.clone()
                            series=series
                            domain=metric.domain()
                            tick_count=metric.tick_count()
                            suffix=metric.suffix()
                            value_label=metric.tooltip_label()
                        />
                    }
                    .into_any(),
                };
                view! {
                    <div class="card chart-card">
                        <h3 class="chart-title">{metric.title()}</h3>
                        {chart}
                    </div>
                }
            }}
        </div>
    }
}
