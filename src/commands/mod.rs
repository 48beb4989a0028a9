//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `kappa/`, `batch/`, `utils/`
//! - 子模块: run, trial, report

pub mod report;
pub mod run;
pub mod trial;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::AnalysisConfig;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Trial(args) => trial::execute(args),
    }
}

/// 打印本次分析使用的物理参数
fn print_parameters(config: &AnalysisConfig) {
    let p = &config.params;
    output::print_info(&format!(
        "kb = {}, conv = {}, dt = {}, V = {}, T = {}{}",
        p.kb(),
        p.conv(),
        p.dt(),
        p.volume(),
        p.temp(),
        if config.integrate { " (integrating raw flux)" } else { "" }
    ));
}

/// 辅助文件读取器不在本工具范围内，仅提示
fn warn_auxiliary(config: &AnalysisConfig) {
    if config.read_info {
        output::print_warning("--read-info: simulation info files are not read by thermok");
    }
    if config.read_thermo {
        output::print_warning("--read-thermo: thermo output is not read by thermok");
    }
}
