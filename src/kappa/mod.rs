//! # Green-Kubo 热导率计算模块
//!
//! 从热流自相关积分计算热导率。
//!
//! ## 子模块
//! - `conductivity`: 单位换算（及原始自相关的累积积分）
//! - `window`: 平台窗口估计
//! - `average`: 方向平均与系综平均共用的逐元素平均
//! - `run`: 单个 Run 目录的读取
//! - `trial`: 多个 Run 的读取与系综平均
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/flux.rs`, `models/`

pub mod average;
pub mod conductivity;
pub mod export;
pub mod run;
pub mod trial;
pub mod window;

pub use average::{average_scalars, average_series};
pub use conductivity::{calculate_k, integrate_flux};
pub use run::read_run;
pub use trial::{average_runs, read_trial};
pub use window::estimate_k;
