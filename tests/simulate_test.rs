//! 非同期駆動のテスト（待ち時間は最小にする）

use hypernym_bench::console::{ConsoleNavigator, ConsoleNotifier};
use hypernym_bench::error::BenchError;
use hypernym_bench::simulate::{run_benchmark, simulate_upload};
use hypernym_bench_common::{
    ConfigEditor, ConfigMode, Error, MockResults, Route, UploadWorkflow, UploadedFile,
    WorkflowTiming,
};

fn fast_timing() -> WorkflowTiming {
    WorkflowTiming {
        progress_interval_ms: 0,
        run_delay_ms: 0,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_simulated_upload_reaches_preview() {
    let timing = fast_timing();
    let mut wf = UploadWorkflow::new(MockResults::shared(), &timing);
    let mut notifier = ConsoleNotifier::default();

    simulate_upload(
        &mut wf,
        UploadedFile::new("catalog.csv", 2048, "text/csv"),
        &timing,
        &mut notifier,
        false,
    )
    .await
    .expect("アップロード失敗");

    assert_eq!(wf.progress(), 100);
    assert_eq!(wf.preview().map(|p| p.file_size_label.as_str()), Some("2.00 KB"));
    assert_eq!(notifier.history.len(), 1);
}

#[tokio::test]
async fn test_simulated_upload_rejects_png() {
    let timing = fast_timing();
    let mut wf = UploadWorkflow::new(MockResults::shared(), &timing);
    let mut notifier = ConsoleNotifier::default();

    let err = simulate_upload(
        &mut wf,
        UploadedFile::new("photo.png", 100, "image/png"),
        &timing,
        &mut notifier,
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BenchError::Workflow(Error::InvalidFileType { .. })));
    assert_eq!(wf.progress(), 0);
    assert!(notifier.history[0].is_destructive());
}

#[tokio::test]
async fn test_run_benchmark_navigates_to_dashboard() {
    let editor = ConfigEditor::new(&MockResults, &fast_timing()).unwrap();
    let mut notifier = ConsoleNotifier::default();
    let mut navigator = ConsoleNavigator::new(Route::Configure);

    let route = run_benchmark(&editor, &mut notifier, &mut navigator).await.unwrap();
    assert_eq!(route, Route::Dashboard);
    assert_eq!(navigator.current, Route::Dashboard);
}

#[tokio::test]
async fn test_run_benchmark_invalid_json_stays() {
    let mut editor = ConfigEditor::new(&MockResults, &fast_timing()).unwrap();
    editor.set_mode(ConfigMode::Manual);
    editor.edit_buffer("{not valid json").unwrap();
    let mut notifier = ConsoleNotifier::default();
    let mut navigator = ConsoleNavigator::new(Route::Configure);

    assert!(run_benchmark(&editor, &mut notifier, &mut navigator).await.is_err());
    assert_eq!(navigator.current, Route::Configure);
    assert_eq!(notifier.history[0].title, "Invalid JSON");
}
