//! ワークフローで扱う型の定義
//!
//! Web(WASM)とCLIで共有される型:
//! - UploadedFile / PreviewRecord: アップロード画面
//! - BenchmarkConfig: 設定画面
//! - BenchmarkJob: ダッシュボードのジョブ一覧
//! - BatchMetrics ほか: チャート用の固定データ

use serde::{Deserialize, Serialize};

/// アップロードを受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "text/csv",
    "application/pdf",
    "text/plain",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// MIMEタイプが許可リストに含まれるか
pub fn is_allowed_mime(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// 拡張子からMIMEタイプを推定（ブラウザを介さない場合に使用）
pub fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_lowercase();
    let mime = match ext.as_str() {
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(mime)
}

/// バイト数を "2.00 KB" 形式に整形
///
/// 小数第2位への丸めは四捨五入（0.125 → 0.13）。
pub fn format_size_label(size_bytes: u64) -> String {
    let hundredths = (size_bytes as u128 * 100 + 512) / 1024;
    format!("{}.{:02} KB", hundredths / 100, hundredths % 100)
}

/// 選択されたファイル（中身は読まない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn has_allowed_type(&self) -> bool {
        is_allowed_mime(&self.mime_type)
    }

    pub fn size_label(&self) -> String {
        format_size_label(self.size_bytes)
    }
}

/// プレビューのサンプル行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
}

/// アップロード完了後に表示する要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRecord {
    pub file_name: String,
    pub file_size_label: String,
    pub entry_count: u32,
    pub categories: Vec<String>,
    pub sample_entries: Vec<SampleEntry>,
}

/// モデルごとの生成パラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub provider: String,
    pub parameters: ModelParameters,
}

/// ベンチマーク設定
///
/// JSONのキーはsnake_case（設定エディタにそのまま表示される）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub name: String,
    pub version: String,
    pub description: String,
    pub models: Vec<ModelSpec>,
    pub metrics: Vec<String>,
    pub categories: Vec<String>,
    pub batch_size: u32,
    pub output_format: String,
}

/// ジョブの進行状態
///
/// 進捗は実行中のみ、終了時刻は完了時のみ持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum JobStatus {
    InProgress {
        progress: u8,
    },
    Completed {
        #[serde(rename = "endTime")]
        end_time: String,
    },
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::InProgress { .. } => "in-progress",
            JobStatus::Completed { .. } => "completed",
        }
    }
}

/// ベンチマークジョブ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkJob {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub status: JobStatus,
    pub start_time: String,
    pub model: String,
    pub sample_count: u32,
}

impl BenchmarkJob {
    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, JobStatus::InProgress { .. })
    }

    pub fn progress(&self) -> Option<u8> {
        match self.status {
            JobStatus::InProgress { progress } => Some(progress),
            JobStatus::Completed { .. } => None,
        }
    }

    pub fn end_time(&self) -> Option<&str> {
        match &self.status {
            JobStatus::Completed { end_time } => Some(end_time),
            JobStatus::InProgress { .. } => None,
        }
    }
}

/// バッチ単位の評価値（ダッシュボードのチャート用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    pub name: String,
    pub rouge: f64,
    pub compression: f64,
    pub tokens: f64,
    pub similarity: f64,
}

/// 標準RAGとHypernym RAGのROUGE比較
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RougeComparison {
    pub metric: String,
    #[serde(rename = "standardRAG")]
    pub standard_rag: f64,
    #[serde(rename = "hypernymRAG")]
    pub hypernym_rag: f64,
}

/// 類似度散布図の1点（x: cosine, y: jaccard）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSavings {
    pub category: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_mime_types() {
        assert!(is_allowed_mime("text/csv"));
        assert!(is_allowed_mime("application/vnd.ms-excel"));
        assert!(!is_allowed_mime("image/png"));
        assert!(!is_allowed_mime(""));
        assert!(!is_allowed_mime("TEXT/CSV"));
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension("catalog.csv"), Some("text/csv"));
        assert_eq!(mime_from_extension("Report.PDF"), Some("application/pdf"));
        assert_eq!(mime_from_extension("photo.png"), Some("image/png"));
        assert_eq!(mime_from_extension("archive.tar.gz"), None);
        assert_eq!(mime_from_extension("README"), None);
    }

    #[test]
    fn test_format_size_label() {
        assert_eq!(format_size_label(2048), "2.00 KB");
        assert_eq!(format_size_label(0), "0.00 KB");
        assert_eq!(format_size_label(1536), "1.50 KB");
        assert_eq!(format_size_label(100), "0.10 KB");
    }

    /// ちょうど半分の値は切り上げる
    #[test]
    fn test_format_size_label_rounds_half_up() {
        assert_eq!(format_size_label(128), "0.13 KB");
        assert_eq!(format_size_label(640), "0.63 KB");
        assert_eq!(format_size_label(1_048_576), "1024.00 KB");
    }

    #[test]
    fn test_job_serialize_in_progress() {
        let job = BenchmarkJob {
            id: "job-1".to_string(),
            name: "Product Catalog Benchmark".to_string(),
            status: JobStatus::InProgress { progress: 65 },
            start_time: "2024-01-15 10:30".to_string(),
            model: "GPT-4".to_string(),
            sample_count: 128,
        };

        let json = serde_json::to_string(&job).expect("シリアライズ失敗");
        assert!(json.contains("\"status\":\"in-progress\""));
        assert!(json.contains("\"progress\":65"));
        assert!(json.contains("\"sampleCount\":128"));
        assert!(!json.contains("endTime"));
    }

    #[test]
    fn test_job_deserialize_completed() {
        let json = r#"{
            "id": "job-3",
            "name": "Feature Analysis Run",
            "status": "completed",
            "endTime": "2024-01-14 16:45",
            "startTime": "2024-01-14 14:20",
            "model": "GPT-4",
            "sampleCount": 200
        }"#;

        let job: BenchmarkJob = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!job.is_in_progress());
        assert_eq!(job.progress(), None);
        assert_eq!(job.end_time(), Some("2024-01-14 16:45"));
    }

    #[test]
    fn test_config_uses_snake_case_keys() {
        let config = BenchmarkConfig {
            name: "x".to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            models: vec![ModelSpec {
                name: "gpt-4".to_string(),
                provider: "openai".to_string(),
                parameters: ModelParameters { temperature: 0.7, max_tokens: 100 },
            }],
            metrics: vec![],
            categories: vec![],
            batch_size: 10,
            output_format: "json".to_string(),
        };

        let json = serde_json::to_string(&config).expect("シリアライズ失敗");
        assert!(json.contains("\"max_tokens\":100"));
        assert!(json.contains("\"batch_size\":10"));
        assert!(json.contains("\"output_format\":\"json\""));
    }
}
