use clap::{Parser, Subcommand};
use hypernym_bench_common::{ExportFormat, Theme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hypernym-bench")]
#[command(about = "Hypernym Benchmarkingのワークフローを端末から操作する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログファイルを擬似アップロードしてプレビューを表示
    Upload {
        /// アップロードするファイル
        #[arg(required = true)]
        file: PathBuf,

        /// MIMEタイプを明示（省略時は拡張子から推定）
        #[arg(long)]
        mime: Option<String>,
    },

    /// ベンチマーク設定
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// ジョブ一覧と選択ジョブの結果を表示
    Jobs {
        /// 選択するジョブID（省略時はjob-3）
        #[arg(short, long, conflicts_with = "none")]
        select: Option<String>,

        /// 選択を解除して表示
        #[arg(long)]
        none: bool,
    },

    /// レポート出力（通知のみ）
    Export {
        /// 出力形式 (csv/pdf/json)
        #[arg(required = true)]
        format: ExportFormat,

        /// 対象ジョブID（省略時はjob-3）
        #[arg(short, long)]
        job: Option<String>,
    },

    /// CLI設定を表示/編集
    Settings {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定のテーマ (light/dark)
        #[arg(long)]
        theme: Option<Theme>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// 生成された設定を表示
    Show,

    /// 設定ファイルがJSONとして読めるか確認
    Validate {
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を検証してベンチマークを開始（省略時は生成設定）
    Run {
        file: Option<PathBuf>,
    },
}
