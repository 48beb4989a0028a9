//! # 单个 Run 的读取
//!
//! 在 Run 目录中查找 `<prefix><x|y|z>.dat`，逐方向完成
//! 读取 -> (可选积分) -> Green-Kubo 换算 -> 平台窗口估计，
//! 并在需要时把三个方向合并为各向同性结果。
//!
//! ## 各向同性估计
//! 先对三个方向的序列逐元素平均，再对平均序列做窗口估计；
//! 不是对三个方向的标量估计值取平均。
//!
//! ## 依赖关系
//! - 被 `kappa/trial.rs`, `commands/` 调用
//! - 使用 `parsers/flux.rs` 读取热流
//! - 使用 `kappa/conductivity.rs`, `kappa/window.rs`, `kappa/average.rs`

use crate::error::{Result, ThermokError};
use crate::kappa::{average_series, calculate_k, estimate_k, integrate_flux};
use crate::models::{AnalysisConfig, Axis, RunResult};
use crate::parsers;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Run 目录中存在的热流文件
pub fn discover_axes(run_dir: &Path, config: &AnalysisConfig) -> Vec<(Axis, PathBuf)> {
    Axis::CARTESIAN
        .iter()
        .filter_map(|&axis| {
            let suffix = axis.file_suffix()?;
            let path = run_dir.join(config.flux_file_name(suffix));
            path.is_file().then_some((axis, path))
        })
        .collect()
}

/// 读取单个 Run 目录
pub fn read_run(run_dir: &Path, config: &AnalysisConfig) -> Result<RunResult> {
    if !run_dir.is_dir() {
        return Err(ThermokError::DirectoryNotFound {
            path: run_dir.display().to_string(),
        });
    }

    let name = run_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let files = discover_axes(run_dir, config);
    if files.is_empty() {
        return Err(ThermokError::MissingAxis {
            axis: Axis::X,
            run: name,
        });
    }

    if config.isotropic {
        for axis in Axis::CARTESIAN {
            if !files.iter().any(|(a, _)| *a == axis) {
                return Err(ThermokError::MissingAxis { axis, run: name });
            }
        }
    }

    let window = config.window;
    let mut time: Option<Vec<f64>> = None;
    let mut k = BTreeMap::new();
    let mut k_est = BTreeMap::new();

    for (axis, path) in files {
        let series = parsers::read_thermal_flux(&path, &config.format)?;
        let (axis_time, flux) = series.into_parts();
        if let Some(reference) = time.as_deref() {
            check_time_alignment(reference, &axis_time, &path.display().to_string())?;
        }

        let flux = if config.integrate {
            integrate_flux(&flux)
        } else {
            flux
        };
        let k_axis = calculate_k(&flux, &config.params)?;
        let est = estimate_k(&k_axis, &axis_time, window.t0, window.t1)?;

        if time.is_none() {
            time = Some(axis_time);
        }

        k.insert(axis, k_axis);
        k_est.insert(axis, est);
    }

    let time = time.unwrap_or_default();

    if config.isotropic {
        let cartesian: Vec<&Vec<f64>> = Axis::CARTESIAN.iter().filter_map(|a| k.get(a)).collect();
        let k_iso = average_series(&cartesian)?;
        let est_iso = estimate_k(&k_iso, &time, window.t0, window.t1)?;
        k.insert(Axis::Isotropic, k_iso);
        k_est.insert(Axis::Isotropic, est_iso);
    }

    Ok(RunResult {
        name,
        time,
        k,
        k_est,
    })
}

/// 检查时间向量与参考时间向量逐点相同
///
/// 同一 Run 的各方向、同一 Trial 的各 Run 都以第一个读到的时间向量为参考。
pub(crate) fn check_time_alignment(reference: &[f64], time: &[f64], source: &str) -> Result<()> {
    if reference.len() != time.len() {
        return Err(ThermokError::ShapeMismatch {
            expected: reference.len(),
            found: time.len(),
        });
    }
    match reference.iter().zip(time).position(|(a, b)| a != b) {
        Some(sample) => Err(ThermokError::TimeMismatch {
            source_name: source.to_string(),
            sample,
            expected: reference[sample],
            found: time[sample],
        }),
        None => Ok(()),
    }
}
