//! # 热导率数据导出
//!
//! 导出热导率序列与平台估计值到 CSV，供外部绘图工具使用。
//!
//! ## 支持格式
//! - 序列 CSV: `time,k_x,k_y,k_z,k_iso`（只包含存在的方向）
//! - 估计值 CSV: 每个 Run 一行 `run,x,y,z,iso`，可附加 `average` 行
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/trial.rs` 调用
//! - 使用 `models/run.rs` 的 RunResult, TrialAverage
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, ThermokError};
use crate::models::{Axis, RunResult, TrialAverage};

use std::collections::BTreeMap;
use std::path::Path;

const ALL_AXES: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::Isotropic];

/// 导出单个 Run 的热导率序列
pub fn run_to_csv(run: &RunResult, output_path: &Path) -> Result<()> {
    series_to_csv(&run.time, &run.k, output_path)
}

/// 导出系综平均后的热导率序列
pub fn average_to_csv(average: &TrialAverage, output_path: &Path) -> Result<()> {
    series_to_csv(&average.time, &average.k, output_path)
}

/// 导出各 Run 的平台估计值
pub fn estimates_to_csv(
    runs: &[RunResult],
    average: Option<&TrialAverage>,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["run".to_string()];
    header.extend(ALL_AXES.iter().map(|a| a.label().to_string()));
    wtr.write_record(&header)?;

    for run in runs {
        wtr.write_record(&estimate_row(&run.name, &run.k_est))?;
    }
    if let Some(avg) = average {
        wtr.write_record(&estimate_row("average", &avg.k_est))?;
    }

    wtr.flush().map_err(|e| ThermokError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn estimate_row(name: &str, k_est: &BTreeMap<Axis, f64>) -> Vec<String> {
    let mut row = vec![name.to_string()];
    row.extend(
        ALL_AXES
            .iter()
            .map(|a| k_est.get(a).map(|v| format!("{:.10}", v)).unwrap_or_default()),
    );
    row
}

fn series_to_csv(time: &[f64], k: &BTreeMap<Axis, Vec<f64>>, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["time".to_string()];
    header.extend(k.keys().map(|a| format!("k_{}", a.label())));
    wtr.write_record(&header)?;

    for (i, t) in time.iter().enumerate() {
        let mut row = vec![t.to_string()];
        for series in k.values() {
            let value = series.get(i).ok_or(ThermokError::ShapeMismatch {
                expected: time.len(),
                found: series.len(),
            })?;
            row.push(format!("{:.10e}", value));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| ThermokError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
