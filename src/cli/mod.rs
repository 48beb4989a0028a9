//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 分析单个 Run 目录
//! - `trial`: 分析多个 Run 并做系综平均
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: params, run, trial

pub mod params;
pub mod run;
pub mod trial;

use clap::{Parser, Subcommand};

/// thermok - Green-Kubo 热导率分析工具
#[derive(Parser)]
#[command(name = "thermok")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Green-Kubo thermal conductivity from LAMMPS heat-flux autocorrelation data",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute conductivity series and plateau estimates for one run directory
    Run(run::RunArgs),

    /// Read every run of a trial directory and average them
    Trial(trial::TrialArgs),
}
