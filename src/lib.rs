//! Hypernym Benchmarking CLI
//!
//! 共通ライブラリのワークフローを端末から駆動する

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod report;
pub mod simulate;
