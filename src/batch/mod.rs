//! # 批量处理模块
//!
//! 提供 Trial 目录下多个 Run 的批量处理能力。
//!
//! ## 功能
//! - 收集匹配的 Run 目录
//! - 并行处理
//! - 进度反馈与失败汇总
//!
//! ## 依赖关系
//! - 被 `kappa/trial.rs`, `commands/trial.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::RunCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
