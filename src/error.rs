use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("設定エラー: {0}")]
    Settings(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Workflow(#[from] hypernym_bench_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
