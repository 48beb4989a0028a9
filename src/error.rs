//! # 统一错误处理模块
//!
//! 定义 thermok 的所有错误类型，使用 `thiserror` 派生。
//!
//! 数值核心（读取、换算、窗口平均、平均）在检测到问题的位置直接返回错误，
//! 不做任何默认值替换；是否跳过失败的 Run 由上层的批量流程决定。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/axis.rs` 的 Axis

use crate::models::Axis;
use thiserror::Error;

/// thermok 统一错误类型
#[derive(Error, Debug)]
pub enum ThermokError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No run directories matching '{pattern}' found in: {path}")]
    NoRunsFound { path: String, pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 数值流程错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed flux data in {source_name}, line {line}\nReason: {reason}")]
    FormatError {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid physical parameter: {0}")]
    ParameterError(String),

    #[error("Invalid time window: {0}")]
    RangeError(String),

    #[error("Shape mismatch: expected length {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Time axis of {source_name} is misaligned at sample {sample}: expected {expected}, found {found}")]
    TimeMismatch {
        source_name: String,
        sample: usize,
        expected: f64,
        found: f64,
    },

    #[error("Missing {axis} flux data for run '{run}'")]
    MissingAxis { axis: Axis, run: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ThermokError>;
