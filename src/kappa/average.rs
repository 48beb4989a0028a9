//! # 逐元素平均
//!
//! 方向平均（X/Y/Z -> 各向同性）与系综平均（多个 Run）共用的唯一平均实现。
//! 标量平均同样经由序列平均完成，两种粒度的数值行为完全一致。
//!
//! ## 算法
//! 以第一条序列为参考值：`mean = x0 + Σ(xi - x0) / n`。
//! 输入完全相同时结果逐位等于输入。
//! 偏差和溢出（例如 `[1e308, -1e308]`）的元素改用 `Σxi / n`。
//!
//! ## 依赖关系
//! - 被 `kappa/run.rs`, `kappa/trial.rs` 调用

use crate::error::{Result, ThermokError};

/// 多条等长序列的逐元素算术平均
pub fn average_series<S: AsRef<[f64]>>(series: &[S]) -> Result<Vec<f64>> {
    let first = series
        .first()
        .ok_or_else(|| ThermokError::InsufficientData("nothing to average".to_string()))?
        .as_ref();

    for s in &series[1..] {
        if s.as_ref().len() != first.len() {
            return Err(ThermokError::ShapeMismatch {
                expected: first.len(),
                found: s.as_ref().len(),
            });
        }
    }

    let n = series.len() as f64;
    let mut deviation = vec![0.0; first.len()];
    for s in &series[1..] {
        for ((d, x), x0) in deviation.iter_mut().zip(s.as_ref()).zip(first) {
            *d += x - x0;
        }
    }

    Ok(first
        .iter()
        .zip(&deviation)
        .enumerate()
        .map(|(i, (x0, d))| {
            if d.is_finite() {
                x0 + d / n
            } else {
                plain_mean(series, i)
            }
        })
        .collect())
}

/// 第 i 个元素的直接平均
fn plain_mean<S: AsRef<[f64]>>(series: &[S], i: usize) -> f64 {
    let n = series.len() as f64;
    series.iter().map(|s| s.as_ref()[i] / n).sum()
}

/// 标量平均（视为长度为 1 的序列）
pub fn average_scalars(values: &[f64]) -> Result<f64> {
    let wrapped: Vec<[f64; 1]> = values.iter().map(|v| [*v]).collect();
    let mean = average_series(&wrapped)?;
    Ok(mean[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_identical_is_identity() {
        let a = vec![0.1, 0.7, 1.3, 2.9, -4.2, 1e-300, 3.3e12];
        for k in 1..=7 {
            let inputs = vec![a.clone(); k];
            assert_eq!(average_series(&inputs).unwrap(), a);
        }
        assert_eq!(average_scalars(&[0.8778570946468635; 5]).unwrap(), 0.8778570946468635);
    }

    #[test]
    fn test_average_values() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![3.0, 4.0, 5.0];
        let z = vec![2.0, 0.0, 7.0];
        let avg = average_series(&[&x, &y, &z]).unwrap();
        assert!((avg[0] - 2.0).abs() < 1e-12);
        assert!((avg[1] - 2.0).abs() < 1e-12);
        assert!((avg[2] - 5.0).abs() < 1e-12);

        let s = average_scalars(&[0.5, 1.0, 1.5, 3.0]).unwrap();
        assert!((s - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_average_extreme_magnitudes() {
        let avg = average_series(&[[1e308, 1.0], [-1e308, 3.0]]).unwrap();
        assert_eq!(avg[0], 0.0);
        assert_eq!(avg[1], 2.0);
        assert_eq!(average_scalars(&[f64::MAX, f64::MAX, -f64::MAX]).unwrap(), f64::MAX / 3.0);
    }

    #[test]
    fn test_average_shape_mismatch() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0];
        assert!(matches!(
            average_series(&[a, b]),
            Err(ThermokError::ShapeMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_average_empty() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            average_series(&empty),
            Err(ThermokError::InsufficientData(_))
        ));
        assert!(average_scalars(&[]).is_err());
    }
}
