//! # run 子命令 CLI 定义
//!
//! 分析单个 Run 目录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::params::KParamArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run directory containing <prefix><x|y|z>.dat flux files
    pub run_dir: PathBuf,

    #[command(flatten)]
    pub params: KParamArgs,

    /// Write the conductivity series (time, k per axis) to this CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
