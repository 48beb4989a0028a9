//! # Trial 读取与系综平均
//!
//! 一个 Trial 目录包含同一条件下重复的多个 Run（Run1, Run2, ...）。
//! 逐个读取 Run，并可对各方向的热导率序列与平台估计值做系综平均。
//!
//! ## 依赖关系
//! - 被 `commands/trial.rs` 调用
//! - 使用 `batch/collector.rs` 查找 Run 目录
//! - 使用 `kappa/run.rs`, `kappa/average.rs`

use crate::batch::RunCollector;
use crate::error::{Result, ThermokError};
use crate::kappa::run::check_time_alignment;
use crate::kappa::{average_scalars, average_series, read_run};
use crate::models::{AnalysisConfig, RunResult, TrialAverage, TrialResult};

use std::collections::BTreeMap;
use std::path::Path;

/// 读取 Trial 目录；任一 Run 出错即返回该错误
pub fn read_trial(trial_dir: &Path, config: &AnalysisConfig, pattern: &str) -> Result<TrialResult> {
    if !trial_dir.is_dir() {
        return Err(ThermokError::DirectoryNotFound {
            path: trial_dir.display().to_string(),
        });
    }

    let run_dirs = RunCollector::new(trial_dir.to_path_buf())
        .with_pattern(pattern)
        .collect()?;

    if run_dirs.is_empty() {
        return Err(ThermokError::NoRunsFound {
            path: trial_dir.display().to_string(),
            pattern: pattern.to_string(),
        });
    }

    let runs = run_dirs
        .iter()
        .map(|dir| read_run(dir, config))
        .collect::<Result<Vec<_>>>()?;

    let average = if config.average {
        Some(average_runs(&runs)?)
    } else {
        None
    };

    Ok(TrialResult {
        name: dir_name(trial_dir),
        runs,
        average,
    })
}

/// 对多个 Run 做系综平均
///
/// 平均的方向取第一个 Run 的方向集合，其余 Run 必须都包含这些方向，
/// 并且与第一个 Run 共享同一时间向量。
pub fn average_runs(runs: &[RunResult]) -> Result<TrialAverage> {
    let first = runs.first().ok_or_else(|| {
        ThermokError::InsufficientData("no runs to average".to_string())
    })?;

    for run in &runs[1..] {
        check_time_alignment(&first.time, &run.time, &run.name)?;
    }

    let mut k = BTreeMap::new();
    let mut k_est = BTreeMap::new();

    for axis in first.axes() {
        let mut series = Vec::with_capacity(runs.len());
        let mut estimates = Vec::with_capacity(runs.len());
        for run in runs {
            match (run.series(axis), run.estimate(axis)) {
                (Some(s), Some(e)) => {
                    series.push(s);
                    estimates.push(e);
                }
                _ => {
                    return Err(ThermokError::MissingAxis {
                        axis,
                        run: run.name.clone(),
                    })
                }
            }
        }

        k.insert(axis, average_series(&series)?);
        k_est.insert(axis, average_scalars(&estimates)?);
    }

    Ok(TrialAverage {
        n_runs: runs.len(),
        time: first.time.clone(),
        k,
        k_est,
    })
}

/// 目录名
pub fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
