//! # trial 子命令 CLI 定义
//!
//! 分析 Trial 目录中的多个 Run 并做系综平均
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/trial.rs`

use super::params::KParamArgs;
use clap::Args;
use std::path::PathBuf;

/// trial 子命令参数
#[derive(Args, Debug)]
pub struct TrialArgs {
    /// Trial directory containing one subdirectory per run
    pub trial_dir: PathBuf,

    #[command(flatten)]
    pub params: KParamArgs,

    /// Glob pattern for run directory names (comma separated, e.g. "Run*")
    #[arg(long, default_value = "*")]
    pub pattern: String,

    /// Recurse into nested directories when collecting runs
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Skip the ensemble average across runs
    #[arg(long, default_value_t = false)]
    pub no_average: bool,

    /// Report failed runs and continue with the remaining ones
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Write per-run plateau estimates (and the average) to this CSV file
    #[arg(long)]
    pub estimates_csv: Option<PathBuf>,

    /// Write the ensemble-averaged conductivity series to this CSV file
    #[arg(long)]
    pub average_csv: Option<PathBuf>,
}
