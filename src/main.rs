//! # thermok - Green-Kubo 热导率分析工具
//!
//! 将 LAMMPS 输出的热流自相关数据换算为热导率，
//! 在平台窗口内取平均，并在方向之间、重复 Run 之间做平均。
//!
//! ## 子命令
//! - `run`   - 分析单个 Run 目录
//! - `trial` - 分析一组重复 Run 并做系综平均
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── kappa/     (换算、窗口估计、平均)
//!   │     ├── parsers/   (热流文件解析器)
//!   │     ├── batch/     (Run 收集与并行处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod kappa;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error_chain(&e);
        std::process::exit(1);
    }
}
