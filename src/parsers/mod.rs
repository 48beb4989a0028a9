//! # 解析器模块
//!
//! 提供 LAMMPS 热流输出文件的解析器。
//!
//! ## 依赖关系
//! - 被 `kappa/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: flux

pub mod flux;

pub use flux::{parse_flux_content, read_thermal_flux};
