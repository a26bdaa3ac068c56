//! 結果データの提供元
//!
//! 画面はこのトレイト越しにデータを取得する。現状は固定データの
//! `MockResults` のみで、実バックエンドへの差し替えを想定している。

use crate::types::{
    BatchMetrics, BenchmarkConfig, BenchmarkJob, JobStatus, ModelParameters, ModelSpec,
    PreviewRecord, RougeComparison, SampleEntry, SimilarityPoint, TokenSavings, UploadedFile,
};
use std::sync::Arc;

/// ジョブ一覧・チャート・生成設定・プレビューの提供元
pub trait ResultsProvider: Send + Sync + std::fmt::Debug {
    fn jobs(&self) -> Vec<BenchmarkJob>;

    /// ジョブのバッチ別評価値
    fn batch_metrics(&self, job_id: &str) -> Vec<BatchMetrics>;

    fn rouge_comparison(&self) -> Vec<RougeComparison>;

    fn token_savings(&self) -> TokenSavings;

    fn semantic_similarity(&self) -> Vec<SimilarityPoint>;

    fn generated_config(&self) -> BenchmarkConfig;

    /// カテゴリごとの件数（設定画面のサイドバー）
    fn category_counts(&self) -> Vec<(String, u32)>;

    /// アップロード完了時のプレビュー。ファイルから拾うのは名前とサイズのみ。
    fn preview_for(&self, file: &UploadedFile) -> PreviewRecord;
}

pub type SharedProvider = Arc<dyn ResultsProvider>;

/// 固定データの提供元
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResults;

impl MockResults {
    pub fn shared() -> SharedProvider {
        Arc::new(MockResults)
    }
}

const CATEGORIES: [&str; 3] = ["Product", "Service", "Feature"];

fn in_progress(id: &str, name: &str, progress: u8, start: &str, model: &str, samples: u32) -> BenchmarkJob {
    BenchmarkJob {
        id: id.to_string(),
        name: name.to_string(),
        status: JobStatus::InProgress { progress },
        start_time: start.to_string(),
        model: model.to_string(),
        sample_count: samples,
    }
}

fn completed(id: &str, name: &str, start: &str, end: &str, model: &str, samples: u32) -> BenchmarkJob {
    BenchmarkJob {
        id: id.to_string(),
        name: name.to_string(),
        status: JobStatus::Completed { end_time: end.to_string() },
        start_time: start.to_string(),
        model: model.to_string(),
        sample_count: samples,
    }
}

fn batch(index: u32, rouge: f64, compression: f64, tokens: f64, similarity: f64) -> BatchMetrics {
    BatchMetrics {
        name: format!("Batch {}", index),
        rouge,
        compression,
        tokens,
        similarity,
    }
}

impl ResultsProvider for MockResults {
    fn jobs(&self) -> Vec<BenchmarkJob> {
        vec![
            in_progress("job-1", "Product Catalog Benchmark", 65, "2024-01-15 10:30", "GPT-4", 128),
            in_progress("job-2", "Service Descriptions Test", 23, "2024-01-15 11:45", "Claude-3", 96),
            completed("job-3", "Feature Analysis Run", "2024-01-14 14:20", "2024-01-14 16:45", "GPT-4", 200),
            completed("job-4", "Mixed Category Benchmark", "2024-01-14 09:15", "2024-01-14 11:30", "Claude-3", 150),
            completed("job-5", "Large Scale Test", "2024-01-13 16:00", "2024-01-13 18:45", "GPT-4", 500),
        ]
    }

    // 全ジョブ共通の固定データ
    fn batch_metrics(&self, _job_id: &str) -> Vec<BatchMetrics> {
        vec![
            batch(1, 0.78, 41.2, 720.0, 0.82),
            batch(2, 0.75, 43.5, 680.0, 0.79),
            batch(3, 0.77, 42.8, 700.0, 0.81),
            batch(4, 0.79, 44.1, 650.0, 0.83),
            batch(5, 0.76, 41.9, 710.0, 0.80),
            batch(6, 0.74, 43.2, 690.0, 0.78),
            batch(7, 0.77, 42.5, 705.0, 0.81),
            batch(8, 0.80, 44.5, 640.0, 0.84),
            batch(9, 0.76, 42.1, 695.0, 0.79),
            batch(10, 0.78, 43.0, 675.0, 0.82),
        ]
    }

    fn rouge_comparison(&self) -> Vec<RougeComparison> {
        [("ROUGE-1", 0.33, 0.32), ("ROUGE-2", 0.11, 0.09), ("ROUGE-L", 0.19, 0.17)]
            .into_iter()
            .map(|(metric, standard_rag, hypernym_rag)| RougeComparison {
                metric: metric.to_string(),
                standard_rag,
                hypernym_rag,
            })
            .collect()
    }

    fn token_savings(&self) -> TokenSavings {
        TokenSavings {
            category: "Token Reduction".to_string(),
            value: 5.0,
        }
    }

    fn semantic_similarity(&self) -> Vec<SimilarityPoint> {
        vec![
            SimilarityPoint { name: "Standard RAG".to_string(), x: 0.49, y: 0.12 },
            SimilarityPoint { name: "Hypernym RAG".to_string(), x: 0.42, y: 0.115 },
        ]
    }

    fn generated_config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            name: "Hypernym Benchmark".to_string(),
            version: "1.0.0".to_string(),
            description: "Configuration for hypernym benchmarking".to_string(),
            models: vec![
                ModelSpec {
                    name: "gpt-4".to_string(),
                    provider: "openai".to_string(),
                    parameters: ModelParameters { temperature: 0.7, max_tokens: 100 },
                },
                ModelSpec {
                    name: "claude-3".to_string(),
                    provider: "anthropic".to_string(),
                    parameters: ModelParameters { temperature: 0.5, max_tokens: 100 },
                },
            ],
            metrics: ["rouge", "compression_ratio", "token_savings", "similarity_score"]
                .into_iter()
                .map(String::from)
                .collect(),
            categories: CATEGORIES.into_iter().map(String::from).collect(),
            batch_size: 10,
            output_format: "json".to_string(),
        }
    }

    fn category_counts(&self) -> Vec<(String, u32)> {
        CATEGORIES
            .into_iter()
            .zip([42, 36, 50])
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }

    fn preview_for(&self, file: &UploadedFile) -> PreviewRecord {
        let sample_entries = [
            (1, "Cloud Storage Solution", "Product"),
            (2, "API Integration", "Service"),
            (3, "Real-time Analytics", "Feature"),
        ]
        .into_iter()
        .map(|(id, name, category)| SampleEntry {
            id,
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect();

        PreviewRecord {
            file_name: file.name.clone(),
            file_size_label: file.size_label(),
            entry_count: 128,
            categories: CATEGORIES.into_iter().map(String::from).collect(),
            sample_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_job_ids_are_unique() {
        let jobs = MockResults.jobs();
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(jobs.len(), 5);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_progress_only_on_running_jobs() {
        for job in MockResults.jobs() {
            assert_eq!(job.is_in_progress(), job.progress().is_some());
            assert_eq!(job.is_in_progress(), job.end_time().is_none());
            if let Some(p) = job.progress() {
                assert!(p <= 100);
            }
        }
    }

    #[test]
    fn test_batch_metrics_fixed() {
        let data = MockResults.batch_metrics("job-3");
        assert_eq!(data.len(), 10);
        assert_eq!(data[0].name, "Batch 1");
        assert_eq!(data[9].name, "Batch 10");
        assert_eq!(data[7].tokens, 640.0);
    }

    #[test]
    fn test_preview_ignores_file_type_and_echoes_name() {
        let a = MockResults.preview_for(&UploadedFile::new("a.csv", 2048, "text/csv"));
        let b = MockResults.preview_for(&UploadedFile::new("b.pdf", 10, "application/pdf"));
        assert_eq!(a.file_name, "a.csv");
        assert_eq!(a.file_size_label, "2.00 KB");
        assert_eq!(b.file_name, "b.pdf");
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.sample_entries, b.sample_entries);
        assert_eq!(a.entry_count, 128);
    }

    #[test]
    fn test_generated_config_round_trips_as_json() {
        let config = MockResults.generated_config();
        let text = serde_json::to_string_pretty(&config).unwrap();
        let parsed: BenchmarkConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.models.len(), 2);
    }

    #[test]
    fn test_category_counts() {
        let counts = MockResults.category_counts();
        assert_eq!(counts[0], ("Product".to_string(), 42));
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<u32>(), 128);
    }
}
