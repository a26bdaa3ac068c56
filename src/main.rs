use clap::Parser;
use hypernym_bench::{cli, config, console, error, report, simulate};
use cli::{Cli, Commands, ConfigAction};
use config::Settings;
use console::{ConsoleNavigator, ConsoleNotifier};
use error::{BenchError, Result};
use hypernym_bench_common::{
    mime_from_extension, ConfigEditor, ConfigMode, DashboardState, DisplayMode, MockResults,
    Route, UploadedFile, UploadWorkflow, DEFAULT_JOB_ID,
};
use std::path::Path;

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(BenchError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let settings = Settings::load()?;
    let provider = MockResults::shared();
    let mut notifier = ConsoleNotifier::default();

    match cli.command {
        Commands::Upload { file, mime } => {
            println!("📤 hypernym-bench - アップロード\n");

            let meta = std::fs::metadata(&file)
                .map_err(|_| BenchError::FileNotFound(file.display().to_string()))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            let mime = mime
                .or_else(|| mime_from_extension(&name).map(String::from))
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let mut workflow = UploadWorkflow::new(provider.clone(), &settings.timing);
            let upload = UploadedFile::new(name, meta.len(), mime);
            simulate::simulate_upload(&mut workflow, upload, &settings.timing, &mut notifier, true).await?;

            if let Some(preview) = workflow.preview() {
                println!();
                print!("{}", report::render_preview(preview));
                println!("\n次の手順: hypernym-bench config show");
            }
        }

        Commands::Config { action } => {
            let mut editor = ConfigEditor::new(provider.as_ref(), &settings.timing)?;

            match action {
                ConfigAction::Show => {
                    println!("{}", editor.buffer());
                }
                ConfigAction::Validate { file } => {
                    editor.set_mode(ConfigMode::Manual);
                    editor.edit_buffer(read_text(&file)?)?;
                    editor.save_config(&mut notifier)?;
                }
                ConfigAction::Run { file } => {
                    if let Some(file) = file {
                        editor.set_mode(ConfigMode::Manual);
                        editor.edit_buffer(read_text(&file)?)?;
                    }
                    println!("🚀 開始: {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
                    let mut navigator = ConsoleNavigator::new(Route::Configure);
                    simulate::run_benchmark(&editor, &mut notifier, &mut navigator).await?;

                    let dashboard = DashboardState::new(provider.as_ref());
                    println!();
                    print!("{}", report::render_job_list(&dashboard));
                    println!();
                    print!("{}", report::render_results(&dashboard, provider.as_ref()));
                }
            }
        }

        Commands::Jobs { select, none } => {
            let mut dashboard = DashboardState::new(provider.as_ref());
            if none {
                dashboard.select_job(None)?;
            } else if let Some(id) = select.as_deref() {
                dashboard.select_job(Some(id))?;
            }
            print!("{}", report::render_job_list(&dashboard));
            println!();
            print!("{}", report::render_results(&dashboard, provider.as_ref()));
        }

        Commands::Export { format, job } => {
            let mut dashboard = DashboardState::new(provider.as_ref());
            dashboard.select_job(Some(job.as_deref().unwrap_or(DEFAULT_JOB_ID)))?;
            dashboard.export_report(format, &mut notifier)?;
        }

        Commands::Settings { show, theme } => {
            let mut settings = settings;

            if let Some(theme) = theme {
                settings.theme = theme;
                settings.save()?;
                println!("✔ テーマを設定しました: {}", theme);
            }

            if show || theme.is_none() {
                let mut display = DisplayMode::default();
                let theme = display.initialize(settings.theme);
                println!("設定:");
                println!("  テーマ: {}", theme);
                println!("  進捗ステップ: {}%", settings.timing.step());
                println!("  進捗間隔: {}ms", settings.timing.progress_interval_ms);
                println!("  遷移待ち: {}ms", settings.timing.run_delay_ms);
                println!("  パス: {}", Settings::config_path()?.display());
            }
        }
    }

    Ok(())
}
