//! ダッシュボードのワークフロー
//!
//! 固定のジョブ一覧に対する選択状態だけを持つ。ジョブ名やチャートの
//! 表示は選択IDから導出する。

use crate::error::{Error, Result};
use crate::notify::{Notification, Notifier};
use crate::provider::ResultsProvider;
use crate::types::BenchmarkJob;

/// 初期表示するジョブ（完了済み）
pub const DEFAULT_JOB_ID: &str = "job-3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Pdf, ExportFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }

    /// メニュー表示名
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV Report",
            ExportFormat::Pdf => "PDF Report",
            ExportFormat::Json => "JSON Data",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "json" => Ok(ExportFormat::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 選択状態から導出される表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView<'a> {
    /// 未選択時のプレースホルダー
    Empty,
    Results { job: &'a BenchmarkJob },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    jobs: Vec<BenchmarkJob>,
    selected_job_id: Option<String>,
}

impl DashboardState {
    pub fn new(provider: &dyn ResultsProvider) -> Self {
        let jobs = provider.jobs();
        let selected_job_id = jobs
            .iter()
            .find(|j| j.id == DEFAULT_JOB_ID)
            .map(|j| j.id.clone());
        Self { jobs, selected_job_id }
    }

    pub fn jobs(&self) -> &[BenchmarkJob] {
        &self.jobs
    }

    pub fn in_progress_jobs(&self) -> Vec<&BenchmarkJob> {
        self.jobs.iter().filter(|j| j.is_in_progress()).collect()
    }

    pub fn completed_jobs(&self) -> Vec<&BenchmarkJob> {
        self.jobs.iter().filter(|j| !j.is_in_progress()).collect()
    }

    pub fn selected_job_id(&self) -> Option<&str> {
        self.selected_job_id.as_deref()
    }

    pub fn selected_job(&self) -> Option<&BenchmarkJob> {
        let id = self.selected_job_id.as_deref()?;
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn selected_job_name(&self) -> Option<&str> {
        self.selected_job().map(|j| j.name.as_str())
    }

    pub fn is_selected(&self, job_id: &str) -> bool {
        self.selected_job_id.as_deref() == Some(job_id)
    }

    /// ジョブを選択する。`None` で選択解除。
    ///
    /// 一覧にないIDは拒否する。戻り値は選択が変わったかどうか。
    pub fn select_job(&mut self, job_id: Option<&str>) -> Result<bool> {
        if let Some(id) = job_id {
            if !self.jobs.iter().any(|j| j.id == id) {
                return Err(Error::UnknownJob(id.to_string()));
            }
        }
        if self.selected_job_id.as_deref() == job_id {
            return Ok(false);
        }
        log::debug!("selected job: {:?}", job_id);
        self.selected_job_id = job_id.map(String::from);
        Ok(true)
    }

    pub fn view(&self) -> DashboardView<'_> {
        match self.selected_job() {
            Some(job) => DashboardView::Results { job },
            None => DashboardView::Empty,
        }
    }

    pub fn title(&self) -> String {
        match self.selected_job_name() {
            Some(name) => format!("Results: {}", name),
            None => "Benchmark Dashboard".to_string(),
        }
    }

    pub fn subtitle(&self) -> &'static str {
        if self.selected_job().is_some() {
            "Detailed analysis and performance metrics for this benchmark run"
        } else {
            "Select a benchmark job from the sidebar to view detailed results"
        }
    }

    /// レポート出力の通知を出す（ファイルは生成しない）
    pub fn export_report(&self, format: ExportFormat, notifier: &mut dyn Notifier) -> Result<()> {
        let Some(job) = self.selected_job() else {
            return Err(Error::InvalidTransition {
                operation: "export_report",
                state: "no job is selected",
            });
        };
        log::info!("export requested: {} as {}", job.id, format);
        notifier.notify(Notification::new(
            format!("Downloading {} report", format.as_str().to_uppercase()),
            "Your report is being generated and will download shortly.",
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockResults;

    fn state() -> DashboardState {
        DashboardState::new(&MockResults)
    }

    #[test]
    fn test_default_selection() {
        let s = state();
        assert_eq!(s.selected_job_id(), Some("job-3"));
        assert_eq!(s.selected_job_name(), Some("Feature Analysis Run"));
        assert_eq!(s.title(), "Results: Feature Analysis Run");
    }

    #[test]
    fn test_select_each_job() {
        let names = [
            ("job-1", "Product Catalog Benchmark"),
            ("job-2", "Service Descriptions Test"),
            ("job-3", "Feature Analysis Run"),
            ("job-4", "Mixed Category Benchmark"),
            ("job-5", "Large Scale Test"),
        ];
        let mut s = state();
        for (id, name) in names {
            s.select_job(Some(id)).unwrap();
            assert_eq!(s.selected_job_id(), Some(id));
            assert_eq!(s.selected_job_name(), Some(name));
            assert!(matches!(s.view(), DashboardView::Results { job } if job.id == id));
        }
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut s = state();
        let before = s.clone();
        assert_eq!(s.select_job(Some("job-3")).unwrap(), false);
        assert_eq!(s, before);
    }

    #[test]
    fn test_no_selection_renders_placeholder() {
        let mut s = state();
        assert!(s.select_job(None).unwrap());
        assert_eq!(s.view(), DashboardView::Empty);
        assert_eq!(s.title(), "Benchmark Dashboard");
        assert!(s.subtitle().starts_with("Select a benchmark job"));
    }

    #[test]
    fn test_unknown_job_is_rejected() {
        let mut s = state();
        let err = s.select_job(Some("job-9")).unwrap_err();
        assert!(matches!(err, Error::UnknownJob(ref id) if id == "job-9"));
        assert_eq!(s.selected_job_id(), Some("job-3"));
    }

    #[test]
    fn test_job_sections() {
        let s = state();
        let running: Vec<_> = s.in_progress_jobs().iter().map(|j| j.id.as_str()).collect();
        let done: Vec<_> = s.completed_jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(running, vec!["job-1", "job-2"]);
        assert_eq!(done, vec!["job-3", "job-4", "job-5"]);
    }

    #[test]
    fn test_export_report_notification() {
        let s = state();
        for format in ExportFormat::ALL {
            let mut log = Vec::new();
            s.export_report(format, &mut log).unwrap();
            assert_eq!(
                log[0].title,
                format!("Downloading {} report", format.as_str().to_uppercase())
            );
            assert!(!log[0].is_destructive());
        }
    }

    #[test]
    fn test_export_requires_selection() {
        let mut s = state();
        s.select_job(None).unwrap();
        let mut log = Vec::new();
        assert!(s.export_report(ExportFormat::Csv, &mut log).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
