//! Hypernym Benchmarking Common Library
//!
//! Web(WASM)とCLIで共有されるワークフロー・固定データ・チャート計算

pub mod types;
pub mod error;
pub mod timing;
pub mod notify;
pub mod route;
pub mod theme;
pub mod provider;
pub mod upload;
pub mod config_editor;
pub mod dashboard;
pub mod chart;

pub use types::{
    BatchMetrics, BenchmarkConfig, BenchmarkJob, JobStatus, ModelParameters, ModelSpec,
    PreviewRecord, RougeComparison, SampleEntry, SimilarityPoint, TokenSavings, UploadedFile,
    ALLOWED_MIME_TYPES, format_size_label, is_allowed_mime, mime_from_extension,
};
pub use error::{Error, Result};
pub use timing::WorkflowTiming;
pub use notify::{Notification, Notifier, Severity};
pub use route::{Navigator, Route};
pub use theme::{DisplayMode, Theme};
pub use provider::{MockResults, ResultsProvider, SharedProvider};
pub use upload::{TickOutcome, UploadState, UploadWorkflow};
pub use config_editor::{ConfigEditor, ConfigMode, DeferredNavigation, metric_label};
pub use dashboard::{DashboardState, DashboardView, ExportFormat, DEFAULT_JOB_ID};
pub use chart::{ChartKind, Domain, Metric, PlotArea, Rect, Series, format_tick};
