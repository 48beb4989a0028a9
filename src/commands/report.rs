//! # 结果汇总表
//!
//! 在终端以表格形式输出各 Run 的平台估计值。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/trial.rs` 使用
//! - 使用 `tabled` crate

use crate::models::{Axis, RunResult, TrialAverage};

use std::collections::BTreeMap;
use tabled::{Table, Tabled};

/// 估计值表格行
#[derive(Debug, Clone, Tabled)]
pub struct EstimateRow {
    #[tabled(rename = "Run")]
    pub run: String,
    #[tabled(rename = "k_x (W/mK)")]
    pub x: String,
    #[tabled(rename = "k_y (W/mK)")]
    pub y: String,
    #[tabled(rename = "k_z (W/mK)")]
    pub z: String,
    #[tabled(rename = "k_iso (W/mK)")]
    pub iso: String,
}

impl EstimateRow {
    fn new(name: &str, k_est: &BTreeMap<Axis, f64>) -> Self {
        let cell = |axis: Axis| {
            k_est
                .get(&axis)
                .map(|v| format!("{:.6}", v))
                .unwrap_or_else(|| "-".to_string())
        };
        EstimateRow {
            run: name.to_string(),
            x: cell(Axis::X),
            y: cell(Axis::Y),
            z: cell(Axis::Z),
            iso: cell(Axis::Isotropic),
        }
    }
}

/// 生成估计值表格
pub fn estimates_table(runs: &[RunResult], average: Option<&TrialAverage>) -> Table {
    let mut rows: Vec<EstimateRow> = runs
        .iter()
        .map(|r| EstimateRow::new(&r.name, &r.k_est))
        .collect();
    if let Some(avg) = average {
        rows.push(EstimateRow::new(
            &format!("Average ({} runs)", avg.n_runs),
            &avg.k_est,
        ));
    }
    Table::new(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimates_table() {
        let mut k_est = BTreeMap::new();
        k_est.insert(Axis::X, 0.8778570946468635);
        let run = RunResult {
            name: "Run1".to_string(),
            time: vec![0.0, 1.0],
            k: BTreeMap::new(),
            k_est,
        };
        let table = estimates_table(&[run], None).to_string();
        assert!(table.contains("Run1"));
        assert!(table.contains("0.877857"));
        assert!(table.contains("k_iso (W/mK)"));
    }
}
