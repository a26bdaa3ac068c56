//! 端末表示用の整形

use hypernym_bench_common::{
    BenchmarkJob, DashboardState, DashboardView, Metric, PreviewRecord, ResultsProvider,
};

/// 行を改行区切りで連結（末尾にも改行）
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_preview(preview: &PreviewRecord) -> String {
    let mut lines = vec![
        "Catalog Uploaded".to_string(),
        format!(
            "  {} • {} • {} entries",
            preview.file_name, preview.file_size_label, preview.entry_count
        ),
        format!("  Categories: {}", preview.categories.join(", ")),
        "Sample Entries".to_string(),
    ];
    lines.extend(
        preview
            .sample_entries
            .iter()
            .map(|entry| format!("  {:>2}. {} [{}]", entry.id, entry.name, entry.category)),
    );
    join_lines(lines)
}

fn job_lines(job: &BenchmarkJob, selected: bool) -> Vec<String> {
    let marker = if selected { "▶" } else { " " };
    let mut lines = vec![
        format!("{} {:<6} {}", marker, job.id, job.name),
        format!("         {} • {} samples", job.model, job.sample_count),
    ];
    match (job.progress(), job.end_time()) {
        (Some(progress), _) => lines.push(format!("         {} • {}% complete", job.start_time, progress)),
        (None, Some(end)) => lines.push(format!("         {} - {}", job.start_time, end)),
        (None, None) => {}
    }
    lines
}

/// サイドバー相当のジョブ一覧
pub fn render_job_list(state: &DashboardState) -> String {
    let running = state.in_progress_jobs();
    let done = state.completed_jobs();

    let mut lines = vec![format!("In Progress ({})", running.len())];
    if running.is_empty() {
        lines.push("  No jobs in progress".to_string());
    }
    for job in running {
        lines.extend(job_lines(job, state.is_selected(&job.id)));
    }

    lines.push(format!("Completed ({})", done.len()));
    for job in done {
        lines.extend(job_lines(job, state.is_selected(&job.id)));
    }
    join_lines(lines)
}

/// 選択ジョブの結果表（未選択ならプレースホルダー）
pub fn render_results(state: &DashboardState, provider: &dyn ResultsProvider) -> String {
    let mut lines = vec![state.title(), state.subtitle().to_string(), String::new()];

    let job = match state.view() {
        DashboardView::Empty => {
            lines.push("No Job Selected".to_string());
            return join_lines(lines);
        }
        DashboardView::Results { job } => job,
    };

    let header: String = Metric::ALL
        .iter()
        .map(|metric| format!(" {:>14}", metric.label()))
        .collect();
    lines.push(format!("{:<10}{}", "Batch", header));

    for point in provider.batch_metrics(&job.id) {
        let cells: String = Metric::ALL
            .iter()
            .map(|metric| format!(" {:>14}", metric.format_value(metric.value(&point))))
            .collect();
        lines.push(format!("{:<10}{}", point.name, cells));
    }
    join_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypernym_bench_common::{MockResults, UploadedFile};

    #[test]
    fn test_render_preview() {
        let preview = MockResults.preview_for(&UploadedFile::new("catalog.csv", 2048, "text/csv"));
        let text = render_preview(&preview);
        assert!(text.contains("catalog.csv • 2.00 KB • 128 entries"));
        assert!(text.contains("Categories: Product, Service, Feature"));
        assert!(text.contains("1. Cloud Storage Solution [Product]"));
    }

    #[test]
    fn test_render_job_list_marks_selection() {
        let state = DashboardState::new(&MockResults);
        let text = render_job_list(&state);
        assert!(text.contains("In Progress (2)"));
        assert!(text.contains("Completed (3)"));
        assert!(text.contains("▶ job-3"));
        assert!(text.contains("65% complete"));
        assert!(text.contains("2024-01-14 14:20 - 2024-01-14 16:45"));
    }

    #[test]
    fn test_render_results_table() {
        let state = DashboardState::new(&MockResults);
        let text = render_results(&state, &MockResults);
        assert!(text.starts_with("Results: Feature Analysis Run"));
        assert!(text.contains("Batch 10"));
        assert!(text.contains("41.2%"));
    }

    #[test]
    fn test_render_results_placeholder() {
        let mut state = DashboardState::new(&MockResults);
        state.select_job(None).unwrap();
        let text = render_results(&state, &MockResults);
        assert!(text.contains("No Job Selected"));
        assert!(!text.contains("Batch 1"));
    }

    /// 各行は改行で終わり、空行は見出しと本文の間だけ
    #[test]
    fn test_render_results_line_layout() {
        let state = DashboardState::new(&MockResults);
        let text = render_results(&state, &MockResults);
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Batch"));
        assert!(lines[3].contains("Compression %"));
        // 見出し + 空行 + ヘッダ + 10バッチ
        assert_eq!(lines.len(), 3 + 1 + 10);
    }
}
