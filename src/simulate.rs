//! ワークフローの非同期駆動
//!
//! ブラウザのタイマーの代わりに tokio のインターバルで `tick` を呼ぶ。

use crate::error::Result;
use hypernym_bench_common::{
    ConfigEditor, Navigator, Notifier, Route, TickOutcome, UploadWorkflow, UploadedFile,
    WorkflowTiming,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// アップロードを受け付け、完了（またはタイマー停止）まで進捗を進める
pub async fn simulate_upload(
    workflow: &mut UploadWorkflow,
    file: UploadedFile,
    timing: &WorkflowTiming,
    notifier: &mut dyn Notifier,
    show_progress: bool,
) -> Result<()> {
    let name = file.name.clone();
    workflow.submit_file(file, notifier)?;

    let bar = if show_progress {
        ProgressBar::new(100)
    } else {
        ProgressBar::hidden()
    };
    let style = ProgressStyle::with_template("{spinner} {msg} [{bar:40}] {pos}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(format!("Processing {}", name));

    // tokio のインターバルは0msを受け付けない
    let period = timing.progress_interval().max(Duration::from_millis(1));
    let mut interval = tokio::time::interval(period);
    interval.tick().await;

    loop {
        interval.tick().await;
        let outcome = workflow.tick(notifier);
        match outcome {
            TickOutcome::InProgress(progress) => bar.set_position(progress as u64),
            TickOutcome::Completed => bar.finish_and_clear(),
            TickOutcome::Stopped => bar.abandon(),
        }
        if outcome.is_finished() {
            break;
        }
    }
    Ok(())
}

/// ベンチマーク開始。待ち時間の後にダッシュボードへ遷移する。
pub async fn run_benchmark(
    editor: &ConfigEditor,
    notifier: &mut dyn Notifier,
    navigator: &mut dyn Navigator,
) -> Result<Route> {
    let pending = editor.run_benchmark(notifier)?;
    tokio::time::sleep(pending.delay).await;
    pending.fire(navigator);
    Ok(pending.route)
}
