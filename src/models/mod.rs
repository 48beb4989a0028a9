//! # 数据模型模块
//!
//! 定义热流序列、分析参数以及 Run/Trial 结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `kappa/` 和 `commands/` 使用
//! - 子模块: axis, parameters, series, run

pub mod axis;
pub mod parameters;
pub mod run;
pub mod series;

pub use axis::Axis;
pub use parameters::{AnalysisConfig, FluxFormat, PhysicalParameters, TimeWindow};
pub use run::{RunResult, TrialAverage, TrialResult};
pub use series::FluxSeries;
