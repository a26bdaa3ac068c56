//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// ワークフロー上の失敗はすべて「拒否されたユーザー操作」であり、
/// 呼び出し側は通知を出して状態を据え置く。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid file type: {mime}")]
    InvalidFileType { mime: String },

    #[error("Malformed config: {0}")]
    MalformedConfig(String),

    #[error("`{operation}` is not allowed while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Config buffer is read-only in generated mode")]
    ReadOnlyBuffer,

    #[error("Unknown job: {0}")]
    UnknownJob(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
