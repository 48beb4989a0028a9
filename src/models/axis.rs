//! # 热流方向
//!
//! 用封闭枚举表示 X/Y/Z 三个笛卡尔方向以及由三者平均得到的各向同性方向。
//!
//! ## 依赖关系
//! - 被 `kappa/`、`parsers/`、`error.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 热流方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    /// 由 X/Y/Z 平均得到，永远不会直接从文件读取
    Isotropic,
}

impl Axis {
    /// 三个笛卡尔方向（按文件后缀顺序）
    pub const CARTESIAN: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 热流文件名后缀；各向同性方向没有对应文件
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            Axis::X => Some("x"),
            Axis::Y => Some("y"),
            Axis::Z => Some("z"),
            Axis::Isotropic => None,
        }
    }

    /// 表格和 CSV 中使用的短标签
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Isotropic => "iso",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
            Axis::Isotropic => write!(f, "isotropic"),
        }
    }
}
