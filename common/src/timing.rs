//! 擬似処理のタイミング設定

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// アップロード進捗・遷移待ち・トースト表示時間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowTiming {
    /// 1tickあたりの進捗（%）
    pub progress_step: u8,
    pub progress_interval_ms: u32,
    /// ベンチマーク開始からダッシュボード遷移までの待ち時間
    pub run_delay_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for WorkflowTiming {
    fn default() -> Self {
        Self {
            progress_step: 5,
            progress_interval_ms: 100,
            run_delay_ms: 1500,
            toast_duration_ms: 5000,
        }
    }
}

impl WorkflowTiming {
    /// 0や100超を丸めた進捗ステップ
    pub fn step(&self) -> u8 {
        self.progress_step.clamp(1, 100)
    }

    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms as u64)
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms as u64)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms as u64)
    }

    /// 100%到達までのtick数
    pub fn ticks_to_complete(&self) -> u32 {
        let step = self.step() as u32;
        100u32.div_ceil(step)
    }
}
