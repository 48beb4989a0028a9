//! # 终端输出工具
//!
//! 统一的带颜色前缀输出。thermok 不使用日志框架，所有面向用户的消息都经过这里；
//! 数值核心模块从不打印。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::error::Error;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印错误及其完整的 source 链
pub fn print_error_chain(err: &dyn Error) {
    print_error(&err.to_string());
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(64);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(64).dimmed());
}
