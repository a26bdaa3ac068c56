//! アップロードワークフロー
//!
//! `Idle → Uploading → Previewed`、`Previewed` からの削除で `Idle` に戻る。
//! 進捗は外部のタイマーが `tick` を呼んで進める。`tick` が
//! `TickOutcome::InProgress` 以外を返したらタイマーを破棄すること。

use crate::error::{Error, Result};
use crate::notify::{Notification, Notifier};
use crate::provider::SharedProvider;
use crate::route::{Navigator, Route};
use crate::timing::WorkflowTiming;
use crate::types::{PreviewRecord, UploadedFile};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Uploading { file: UploadedFile, progress: u8 },
    Previewed { file: UploadedFile, preview: PreviewRecord },
}

impl UploadState {
    pub fn name(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Uploading { .. } => "uploading",
            UploadState::Previewed { .. } => "previewed",
        }
    }
}

/// `tick` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    InProgress(u8),
    Completed,
    /// アップロード中ではない（タイマーを止める）
    Stopped,
}

impl TickOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, TickOutcome::InProgress(_))
    }
}

#[derive(Debug, Clone)]
pub struct UploadWorkflow {
    state: UploadState,
    step: u8,
    provider: SharedProvider,
}

impl UploadWorkflow {
    pub fn new(provider: SharedProvider, timing: &WorkflowTiming) -> Self {
        Self {
            state: UploadState::Idle,
            step: timing.step(),
            provider,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn progress(&self) -> u8 {
        match &self.state {
            UploadState::Idle => 0,
            UploadState::Uploading { progress, .. } => *progress,
            UploadState::Previewed { .. } => 100,
        }
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::Uploading { file, .. } | UploadState::Previewed { file, .. } => Some(file),
        }
    }

    pub fn preview(&self) -> Option<&PreviewRecord> {
        match &self.state {
            UploadState::Previewed { preview, .. } => Some(preview),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// ファイルを受け付けてアップロードを開始する
    ///
    /// 許可されていないMIMEタイプは通知を出して拒否し、状態は変えない。
    pub fn submit_file(&mut self, file: UploadedFile, notifier: &mut dyn Notifier) -> Result<()> {
        if !matches!(self.state, UploadState::Idle) {
            return Err(Error::InvalidTransition {
                operation: "submit_file",
                state: self.state.name(),
            });
        }

        if !file.has_allowed_type() {
            log::warn!("rejected {} ({})", file.name, file.mime_type);
            notifier.notify(Notification::destructive(
                "Invalid file type",
                "Please upload a CSV, PDF, or text file.",
            ));
            return Err(Error::InvalidFileType { mime: file.mime_type });
        }

        log::debug!("upload started: {} ({} bytes)", file.name, file.size_bytes);
        self.state = UploadState::Uploading { file, progress: 0 };
        Ok(())
    }

    /// 進捗を1ステップ進める。100%でプレビューを生成する。
    pub fn tick(&mut self, notifier: &mut dyn Notifier) -> TickOutcome {
        let (file, progress) = match &mut self.state {
            UploadState::Uploading { file, progress } => {
                *progress = progress.saturating_add(self.step).min(100);
                if *progress < 100 {
                    return TickOutcome::InProgress(*progress);
                }
                (file.clone(), *progress)
            }
            _ => return TickOutcome::Stopped,
        };

        debug_assert_eq!(progress, 100);
        let preview = self.provider.preview_for(&file);
        log::info!("upload complete: {} ({})", preview.file_name, preview.file_size_label);
        self.state = UploadState::Previewed { file, preview };
        notifier.notify(Notification::new(
            "Upload complete",
            "Your file has been processed successfully.",
        ));
        TickOutcome::Completed
    }

    /// プレビュー済みのファイルを破棄する
    pub fn remove_file(&mut self) -> Result<()> {
        if !matches!(self.state, UploadState::Previewed { .. }) {
            return Err(Error::InvalidTransition {
                operation: "remove_file",
                state: self.state.name(),
            });
        }
        log::debug!("upload cleared");
        self.state = UploadState::Idle;
        Ok(())
    }

    /// 設定画面へ進む（ローカル状態は変えない）
    pub fn proceed_to_config(&self, navigator: &mut dyn Navigator) -> Result<()> {
        if !matches!(self.state, UploadState::Previewed { .. }) {
            return Err(Error::InvalidTransition {
                operation: "proceed_to_config",
                state: self.state.name(),
            });
        }
        navigator.navigate(Route::Configure);
        Ok(())
    }
}
