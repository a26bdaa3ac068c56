//! 標準RAGとの比較チャート

use hypernym_bench_common::{Domain, RougeComparison, Series, SimilarityPoint, TokenSavings};
use leptos::prelude::*;

use crate::components::charts::{BarChart, HorizontalBarChart, ScatterChart};

const STANDARD_COLOR: &str = "#4A90E2";
const HYPERNYM_COLOR: &str = "#F5A623";
const SIMILARITY_THRESHOLD: f64 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComparisonTab {
    TokenSavings,
    RougeScores,
    SemanticSimilarity,
}

impl ComparisonTab {
    const ALL: [ComparisonTab; 3] = [
        ComparisonTab::TokenSavings,
        ComparisonTab::RougeScores,
        ComparisonTab::SemanticSimilarity,
    ];

    fn label(&self) -> &'static str {
        match self {
            ComparisonTab::TokenSavings => "Token Savings",
            ComparisonTab::RougeScores => "ROUGE Scores",
            ComparisonTab::SemanticSimilarity => "Semantic Similarity",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ComparisonTab::TokenSavings => "Token Savings",
            ComparisonTab::RougeScores => "ROUGE Scores Comparison",
            ComparisonTab::SemanticSimilarity => "Semantic Similarity Metrics",
        }
    }
}

#[component]
pub fn BenchmarkCharts(
    savings: TokenSavings,
    rouge: Vec<RougeComparison>,
    similarity: Vec<SimilarityPoint>,
) -> impl IntoView {
    let active = RwSignal::new(ComparisonTab::TokenSavings);
    let labels: Vec<String> = rouge.iter().map(|r| r.metric.clone()).collect();
    let rouge_series = vec![
        Series::new("Standard RAG", STANDARD_COLOR, rouge.iter().map(|r| r.standard_rag).collect()),
        Series::new("Hypernym RAG", HYPERNYM_COLOR, rouge.iter().map(|r| r.hypernym_rag).collect()),
    ];

    view! {
        <div class="benchmark-charts">
            <div class="tabs tabs-3">
                {ComparisonTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || active.get() == tab
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let tab = active.get();
                let chart = match tab {
                    ComparisonTab::TokenSavings => view! {
                        <HorizontalBarChart
                            label=savings.category.clone()
                            value=savings.value
                            domain=Domain::new(0.0, 100.0)
                            color=HYPERNYM_COLOR
                            suffix="%"
                        />
                    }
                    .into_any(),
                    ComparisonTab::RougeScores => view! {
                        <BarChart
                            labels=labels.clone()
                            series=rouge_series.clone()
                            domain=Domain::UNIT
                            tick_count=6
                        />
                    }
                    .into_any(),
                    ComparisonTab::SemanticSimilarity => view! {
                        <ScatterChart
                            points=similarity.clone()
                            threshold=SIMILARITY_THRESHOLD
                            color=STANDARD_COLOR
                            x_label="Cosine"
                            y_label="Jaccard"
                        />
                    }
                    .into_any(),
                };
                view! {
                    <div class="card chart-card">
                        <h3 class="chart-title centered">{tab.title()}</h3>
                        {chart}
                    </div>
                }
            }}
        </div>
    }
}
