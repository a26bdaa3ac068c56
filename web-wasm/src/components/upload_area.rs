//! アップロード画面
//!
//! ドロップゾーン → 擬似進捗 → プレビューの順に表示が切り替わる。

use gloo_timers::future::TimeoutFuture;
use hypernym_bench_common::{PreviewRecord, UploadWorkflow, UploadedFile};
use leptos::prelude::*;
use web_sys::{DragEvent, FileList};

use crate::app::use_app;
use crate::components::progress_bar::ProgressBar;
use crate::components::toaster::Toaster;
use crate::navigation::use_navigator;

/// カテゴリチップの配色（順番に繰り返す）
const CHIP_CLASSES: [&str; 3] = ["chip chip-blue", "chip chip-purple", "chip chip-pink"];
const ENTRY_CLASSES: [&str; 3] = ["entry border-blue", "entry border-purple", "entry border-pink"];

fn category_chip_class(category: &str) -> &'static str {
    match category {
        "Product" => CHIP_CLASSES[0],
        "Service" => CHIP_CLASSES[1],
        _ => CHIP_CLASSES[2],
    }
}

/// mime typeはブラウザの報告をそのまま使う（空なら許可リストで弾かれる）
fn to_uploaded_file(file: &web_sys::File) -> UploadedFile {
    UploadedFile::new(file.name(), file.size() as u64, file.type_())
}

/// 進捗が終わるまで一定間隔で `tick` を呼ぶ
///
/// 画面を離れるとシグナルが破棄され `try_update` が `None` を返すので、そこでも止まる。
fn spawn_progress(workflow: RwSignal<UploadWorkflow>, mut toaster: Toaster, interval_ms: u32) {
    leptos::task::spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            match workflow.try_update(|wf| wf.tick(&mut toaster)) {
                Some(outcome) if !outcome.is_finished() => {}
                Some(outcome) => {
                    log::debug!("progress loop finished: {:?}", outcome);
                    break;
                }
                None => break,
            }
        }
    });
}

#[component]
pub fn UploadScreen() -> impl IntoView {
    let ctx = use_app();
    let workflow = RwSignal::new(UploadWorkflow::new(ctx.provider.clone(), &ctx.timing));
    let toaster = ctx.toaster;
    let interval_ms = ctx.timing.progress_interval_ms;

    let submit = move |files: FileList| {
        // 1件目のみ扱う
        let Some(file) = files.get(0) else {
            return;
        };
        let uploaded = to_uploaded_file(&file);
        let mut notifier = toaster;
        let result = workflow.try_update(|wf| wf.submit_file(uploaded, &mut notifier));
        match result {
            Some(Ok(())) => spawn_progress(workflow, toaster, interval_ms),
            Some(Err(e)) => log::warn!("upload rejected: {}", e),
            None => {}
        }
    };

    let preview = move || workflow.with(|wf| wf.preview().cloned());

    view! {
        <div class="upload-page">
            <div class="page-intro">
                <h1 class="gradient-text">"Hypernym Benchmarking"</h1>
                <p class="text-muted">
                    "Perfect semantic compression for AI systems that scale. Upload your catalog to begin benchmarking."
                </p>
            </div>
            <Show
                when=move || preview().is_none()
                fallback=move || {
                    preview().map(|record| view! { <PreviewPanel workflow=workflow record=record /> })
                }
            >
                <DropZone workflow=workflow on_files=submit />
            </Show>
        </div>
    }
}

#[component]
fn DropZone<F>(workflow: RwSignal<UploadWorkflow>, on_files: F) -> impl IntoView
where
    F: Fn(FileList) + Copy + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files(files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            on_files(files);
        }
        // 同じファイルを選び直せるように
        input.set_value("");
    };

    let progress = Signal::derive(move || workflow.with(|wf| wf.progress()));
    let label = Signal::derive(move || {
        workflow.with(|wf| {
            wf.file()
                .map(|f| format!("Processing {}", f.name))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="card upload-card">
            <div class="card-header">
                <div class="icon-container icon-purple">"⇪"</div>
                <h2 class="card-title">"Upload Your Catalog"</h2>
            </div>
            <div
                class="upload-zone"
                class:dragging=move || is_dragover.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                <p class="upload-text">
                    <strong>"Click to upload"</strong>
                    " or drag and drop"
                </p>
                <p class="upload-hint">"CSV, PDF, or TXT (Max size: 10MB)"</p>
                <input
                    node_ref=input_ref
                    type="file"
                    class="hidden"
                    accept=".csv,.pdf,.txt,.xls,.xlsx"
                    on:change=on_change
                />
            </div>
            <Show when=move || workflow.with(|wf| wf.is_uploading())>
                <ProgressBar progress=progress label=label />
            </Show>
        </div>
    }
}

#[component]
fn PreviewPanel(workflow: RwSignal<UploadWorkflow>, record: PreviewRecord) -> impl IntoView {
    let navigator = use_navigator();

    let remove = move |_| {
        if let Some(Err(e)) = workflow.try_update(|wf| wf.remove_file()) {
            log::warn!("remove failed: {}", e);
        }
    };

    let proceed = move |_| {
        let mut nav = navigator.clone();
        let snapshot = workflow.get_untracked();
        if let Err(e) = snapshot.proceed_to_config(&mut nav) {
            log::warn!("cannot proceed: {}", e);
        }
    };

    let summary = format!("{} • {} entries", record.file_size_label, record.entry_count);

    view! {
        <div class="preview-grid">
            <div class="card">
                <div class="card-header spread">
                    <div class="card-header">
                        <div class="icon-container icon-green">"✓"</div>
                        <h2 class="card-title">"Catalog Uploaded"</h2>
                    </div>
                    <button class="btn btn-icon" title="Remove file" on:click=remove>"×"</button>
                </div>
                <div class="file-row">
                    <div class="icon-container icon-blue">"▤"</div>
                    <div>
                        <p class="file-name">{record.file_name.clone()}</p>
                        <p class="text-muted small">{summary}</p>
                    </div>
                </div>
                <p class="section-label">"Categories"</p>
                <div class="chip-row">
                    {record
                        .categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <span class=CHIP_CLASSES[i % CHIP_CLASSES.len()]>{category.clone()}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="card">
                <div class="card-header">
                    <div class="icon-container icon-purple">"✦"</div>
                    <h2 class="card-title">"Sample Entries"</h2>
                </div>
                <div class="entry-list">
                    {record
                        .sample_entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! {
                                <div class=ENTRY_CLASSES[i % ENTRY_CLASSES.len()]>
                                    <span class="entry-name">{entry.name.clone()}</span>
                                    <span class=category_chip_class(&entry.category)>
                                        {entry.category.clone()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card-footer">
                    <button class="btn btn-primary" on:click=proceed.clone()>"Generate Config"</button>
                    <button class="btn btn-outline" on:click=proceed>"Use Existing"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_browser_file_becomes_uploaded_file() {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str("name,category\n"));
        let file = web_sys::File::new_with_str_sequence(&parts, "catalog.csv").expect("file");
        let uploaded = to_uploaded_file(&file);
        assert_eq!(uploaded.name, "catalog.csv");
        assert_eq!(uploaded.size_bytes, 14);
        assert_eq!(uploaded.mime_type, "");
    }

    /// type未指定のFileは拡張子がcsvでも受け付けない
    #[wasm_bindgen_test]
    fn wasm_untyped_browser_file_is_rejected() {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str("name,category\n"));
        let file = web_sys::File::new_with_str_sequence(&parts, "catalog.csv").expect("file");

        let mut wf = UploadWorkflow::new(
            hypernym_bench_common::MockResults::shared(),
            &hypernym_bench_common::WorkflowTiming::default(),
        );
        let mut log: Vec<hypernym_bench_common::Notification> = Vec::new();
        let result = wf.submit_file(to_uploaded_file(&file), &mut log);
        assert!(matches!(result, Err(hypernym_bench_common::Error::InvalidFileType { .. })));
        assert_eq!(wf.state(), &hypernym_bench_common::UploadState::Idle);
        assert_eq!(log[0].title, "Invalid file type");
    }

    #[wasm_bindgen_test]
    fn wasm_entry_chip_follows_category() {
        assert_eq!(category_chip_class("Product"), "chip chip-blue");
        assert_eq!(category_chip_class("Service"), "chip chip-purple");
        assert_eq!(category_chip_class("Feature"), "chip chip-pink");
    }
}
