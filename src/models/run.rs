//! # Run / Trial 结果数据模型
//!
//! `RunResult` 保存单个 Run 各方向的热导率序列与平台估计值；
//! `TrialResult` 汇总同一条件下重复的多个 Run 以及它们的系综平均。
//!
//! ## 依赖关系
//! - 被 `kappa/run.rs`, `kappa/trial.rs` 构造
//! - 被 `kappa/export.rs`, `commands/` 使用

use super::Axis;

use serde::Serialize;
use std::collections::BTreeMap;

/// 单个 Run 的分析结果
///
/// `k` 与 `k_est` 的键集合始终一致。
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Run 名称（目录名）
    pub name: String,
    /// 所有方向共享的时间向量
    pub time: Vec<f64>,
    /// 各方向的累积热导率序列
    pub k: BTreeMap<Axis, Vec<f64>>,
    /// 各方向的平台估计值
    pub k_est: BTreeMap<Axis, f64>,
}

impl RunResult {
    /// 结果中包含的方向
    pub fn axes(&self) -> Vec<Axis> {
        self.k.keys().copied().collect()
    }

    /// 给定方向的平台估计值
    pub fn estimate(&self, axis: Axis) -> Option<f64> {
        self.k_est.get(&axis).copied()
    }

    /// 给定方向的热导率序列
    pub fn series(&self, axis: Axis) -> Option<&[f64]> {
        self.k.get(&axis).map(|v| v.as_slice())
    }
}

/// 多个 Run 的系综平均
#[derive(Debug, Clone, Serialize)]
pub struct TrialAverage {
    /// 参与平均的 Run 数
    pub n_runs: usize,
    pub time: Vec<f64>,
    pub k: BTreeMap<Axis, Vec<f64>>,
    pub k_est: BTreeMap<Axis, f64>,
}

/// 一组重复 Run 的分析结果
#[derive(Debug, Clone, Serialize)]
pub struct TrialResult {
    /// Trial 名称（目录名）
    pub name: String,
    /// 按自然顺序排列的 Run
    pub runs: Vec<RunResult>,
    /// 系综平均（配置关闭平均时为 None）
    pub average: Option<TrialAverage>,
}
