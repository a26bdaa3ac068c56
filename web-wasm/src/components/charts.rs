//! SVGチャート
//!
//! 座標計算は `PlotArea` に任せ、ここでは要素を並べるだけ。

use hypernym_bench_common::{format_tick, Domain, PlotArea, Series, SimilarityPoint};
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

fn view_box(area: &PlotArea) -> String {
    format!("0 0 {} {}", area.width, area.height)
}

/// 目盛り・グリッド・カテゴリラベル
#[component]
fn Axes(area: PlotArea, domain: Domain, tick_count: usize, labels: Vec<String>) -> impl IntoView {
    let count = labels.len();
    view! {
        <g class="axes">
            {domain
                .ticks(tick_count)
                .into_iter()
                .map(|tick| {
                    let y = area.y_for(tick, &domain);
                    view! {
                        <line
                            class="grid-line"
                            x1=px(area.left())
                            x2=px(area.right())
                            y1=px(y)
                            y2=px(y)
                        />
                        <text class="tick-label" x=px(area.left() - 8.0) y=px(y + 4.0) text-anchor="end">
                            {format_tick(tick, &domain)}
                        </text>
                    }
                })
                .collect_view()}
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <text
                            class="tick-label"
                            x=px(area.band_center(i, count))
                            y=px(area.bottom() + 20.0)
                            text-anchor="middle"
                        >
                            {label}
                        </text>
                    }
                })
                .collect_view()}
            <line
                class="axis-line"
                x1=px(area.left())
                x2=px(area.right())
                y1=px(area.bottom())
                y2=px(area.bottom())
            />
        </g>
    }
}

#[component]
fn Legend(series: Vec<Series>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {series
                .into_iter()
                .map(|s| {
                    view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", s.color) />
                            {s.name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// ホバー中のカテゴリの値一覧
///
/// `value_label` があれば系列名の代わりに使う。
fn tooltip_text(
    label: &str,
    series: &[Series],
    index: usize,
    suffix: &str,
    value_label: Option<&str>,
) -> String {
    let values = series
        .iter()
        .filter_map(|s| {
            let name = value_label.unwrap_or(&s.name);
            s.values.get(index).map(|v| format!("{}: {}{}", name, v, suffix))
        })
        .collect::<Vec<_>>()
        .join(" / ");
    format!("{} | {}", label, values)
}

#[component]
fn Tooltip(#[prop(into)] text: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="chart-tooltip" class:visible=move || text.with(|t| t.is_some())>
            {move || text.get().unwrap_or_default()}
        </div>
    }
}

/// 折れ線グラフ
#[component]
pub fn LineChart(
    labels: Vec<String>,
    series: Vec<Series>,
    domain: Domain,
    tick_count: usize,
    #[prop(default = "")] suffix: &'static str,
    #[prop(optional)] value_label: Option<&'static str>,
) -> impl IntoView {
    let area = PlotArea::new(WIDTH, HEIGHT);
    let hovered = RwSignal::new(None::<usize>);
    let count = labels.len();

    let tooltip = {
        let labels = labels.clone();
        let series = series.clone();
        Signal::derive(move || {
            hovered.get().and_then(|i| {
                labels.get(i).map(|label| tooltip_text(label, &series, i, suffix, value_label))
            })
        })
    };

    let lines = series
        .iter()
        .map(|s| {
            let points = area.line_points(&s.values, &domain);
            view! {
                <path class="series-line" d=area.line_path(&s.values, &domain) stroke=s.color.clone() fill="none" />
                {points
                    .into_iter()
                    .enumerate()
                    .map(|(i, (x, y))| {
                        view! {
                            <circle
                                class="series-point"
                                cx=px(x)
                                cy=px(y)
                                r=move || if hovered.get() == Some(i) { "6" } else { "4" }
                                fill=s.color.clone()
                            />
                        }
                    })
                    .collect_view()}
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=view_box(&area)>
                <Axes area=area domain=domain tick_count=tick_count labels=labels />
                {lines}
                <HoverBands area=area count=count hovered=hovered />
            </svg>
            <Tooltip text=tooltip />
            <Legend series=series />
        </div>
    }
}

/// カテゴリごとの透明なホバー領域
#[component]
fn HoverBands(area: PlotArea, count: usize, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let band = area.band_width(count);
    (0..count)
        .map(|i| {
            view! {
                <rect
                    class="hover-band"
                    x=px(area.left() + band * i as f64)
                    y=px(area.top())
                    width=px(band)
                    height=px(area.inner_height())
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view()
}

/// 縦棒グラフ（複数系列は並べて表示）
#[component]
pub fn BarChart(
    labels: Vec<String>,
    series: Vec<Series>,
    domain: Domain,
    tick_count: usize,
    #[prop(default = "")] suffix: &'static str,
    #[prop(optional)] value_label: Option<&'static str>,
) -> impl IntoView {
    let area = PlotArea::new(WIDTH, HEIGHT);
    let hovered = RwSignal::new(None::<usize>);
    let count = labels.len();
    let group_count = series.len();

    let tooltip = {
        let labels = labels.clone();
        let series = series.clone();
        Signal::derive(move || {
            hovered.get().and_then(|i| {
                labels.get(i).map(|label| tooltip_text(label, &series, i, suffix, value_label))
            })
        })
    };

    let bars = series
        .iter()
        .enumerate()
        .map(|(group, s)| {
            area.bars(&s.values, &domain, group, group_count)
                .into_iter()
                .enumerate()
                .map(|(i, rect)| {
                    view! {
                        <rect
                            class="series-bar"
                            class:hovered=move || hovered.get() == Some(i)
                            x=px(rect.x)
                            y=px(rect.y)
                            width=px(rect.width)
                            height=px(rect.height)
                            rx="4"
                            fill=s.color.clone()
                        />
                    }
                })
                .collect_view()
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=view_box(&area)>
                <Axes area=area domain=domain tick_count=tick_count labels=labels />
                {bars}
                <HoverBands area=area count=count hovered=hovered />
            </svg>
            <Tooltip text=tooltip />
            <Legend series=series />
        </div>
    }
}

/// 横棒1本（割合表示）
#[component]
pub fn HorizontalBarChart(
    label: String,
    value: f64,
    domain: Domain,
    color: &'static str,
    #[prop(default = "")] suffix: &'static str,
) -> impl IntoView {
    let area = PlotArea::new(WIDTH, 120.0);
    let rect = area.horizontal_bar(value, &domain);
    let ticks = domain.ticks(6);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=view_box(&area)>
                {ticks
                    .into_iter()
                    .map(|tick| {
                        let x = area.x_for(tick, &domain);
                        view! {
                            <line class="grid-line" x1=px(x) x2=px(x) y1=px(area.top()) y2=px(area.bottom()) />
                            <text class="tick-label" x=px(x) y=px(area.bottom() + 16.0) text-anchor="middle">
                                {format_tick(tick, &domain)}
                            </text>
                        }
                    })
                    .collect_view()}
                <text
                    class="tick-label"
                    x=px(area.left() - 8.0)
                    y=px(rect.y + rect.height / 2.0 + 4.0)
                    text-anchor="end"
                >
                    {label}
                </text>
                <rect
                    class="series-bar"
                    x=px(rect.x)
                    y=px(rect.y)
                    width=px(rect.width)
                    height=px(rect.height)
                    rx="4"
                    fill=color
                />
                <text
                    class="bar-value"
                    x=px(rect.x + rect.width + 6.0)
                    y=px(rect.y + rect.height / 2.0 + 4.0)
                >
                    {format!("{:.1}{}", value, suffix)}
                </text>
            </svg>
        </div>
    }
}

/// 散布図（閾値線と対角線つき）
#[component]
pub fn ScatterChart(
    points: Vec<SimilarityPoint>,
    threshold: f64,
    color: &'static str,
    x_label: &'static str,
    y_label: &'static str,
) -> impl IntoView {
    let area = PlotArea::new(WIDTH, HEIGHT);
    let domain = Domain::UNIT;
    let hovered = RwSignal::new(None::<usize>);

    let tooltip = {
        let points = points.clone();
        Signal::derive(move || {
            hovered.get().and_then(|i| {
                points
                    .get(i)
                    .map(|p| format!("{} | {}: {} / {}: {}", p.name, x_label, p.x, y_label, p.y))
            })
        })
    };

    let (tx, ty) = area.point(threshold, threshold, &domain, &domain);
    let (x0, y0) = area.point(domain.min, domain.min, &domain, &domain);
    let (x1, y1) = area.point(domain.max, domain.max, &domain, &domain);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=view_box(&area)>
                {domain
                    .ticks(6)
                    .into_iter()
                    .map(|tick| {
                        let (x, y) = area.point(tick, tick, &domain, &domain);
                        view! {
                            <line class="grid-line" x1=px(area.left()) x2=px(area.right()) y1=px(y) y2=px(y) />
                            <text class="tick-label" x=px(area.left() - 8.0) y=px(y + 4.0) text-anchor="end">
                                {format_tick(tick, &domain)}
                            </text>
                            <text class="tick-label" x=px(x) y=px(area.bottom() + 16.0) text-anchor="middle">
                                {format_tick(tick, &domain)}
                            </text>
                        }
                    })
                    .collect_view()}
                <line class="reference-line" x1=px(tx) x2=px(tx) y1=px(area.top()) y2=px(area.bottom()) />
                <line class="reference-line" x1=px(area.left()) x2=px(area.right()) y1=px(ty) y2=px(ty) />
                <line class="diagonal-line" x1=px(x0) y1=px(y0) x2=px(x1) y2=px(y1) />
                <text class="reference-label" x=px(tx + 4.0) y=px(area.top() + 12.0)>
                    {format!("Threshold: {:.2}", threshold)}
                </text>
                {points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let (cx, cy) = area.point(p.x, p.y, &domain, &domain);
                        view! {
                            <circle
                                class="series-point"
                                cx=px(cx)
                                cy=px(cy)
                                r=move || if hovered.get() == Some(i) { "8" } else { "6" }
                                fill=color
                                on:mouseenter=move |_| hovered.set(Some(i))
                                on:mouseleave=move |_| hovered.set(None)
                            />
                        }
                    })
                    .collect_view()}
                <text class="axis-title" x=px(area.left() + area.inner_width() / 2.0) y=px(area.height - 4.0) text-anchor="middle">
                    {x_label}
                </text>
            </svg>
            <Tooltip text=tooltip />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_tooltip_lists_every_series_value() {
        let series = vec![
            Series::new("Standard RAG", "#4A90E2", vec![0.33, 0.11]),
            Series::new("Hypernym RAG", "#F5A623", vec![0.32, 0.09]),
        ];
        let text = tooltip_text("ROUGE-2", &series, 1, "", None);
        assert_eq!(text, "ROUGE-2 | Standard RAG: 0.11 / Hypernym RAG: 0.09");
    }

    #[wasm_bindgen_test]
    fn wasm_tooltip_carries_suffix() {
        let series = vec![Series::new("Compression Rate", "#47FFAE", vec![42.0])];
        assert_eq!(
            tooltip_text("Batch 1", &series, 0, "%", None),
            "Batch 1 | Compression Rate: 42%"
        );
    }

    #[wasm_bindgen_test]
    fn wasm_tooltip_uses_metric_label() {
        let metric = hypernym_bench_common::Metric::Compression;
        let series = vec![Series::new(metric.series_name(), metric.color(), vec![42.0])];
        assert_eq!(
            tooltip_text("Batch 1", &series, 0, metric.suffix(), Some(metric.tooltip_label())),
            "Batch 1 | Compression: 42%"
        );
    }
}
