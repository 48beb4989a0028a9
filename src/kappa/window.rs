//! # 平台窗口估计
//!
//! 在给定时间窗口内对累积热导率序列取算术平均，得到单个热导率估计值。
//!
//! ## 窗口约定
//! - t0、t1 分别定位到时间最接近的采样点 i0、i1（距离相同时取较早的点）
//! - 平均区间为半开区间 `[i0, i1)`
//! - t1 超出最后一个采样时间时报错，不做截断；调用方需要截断时自行处理
//!
//! ## 依赖关系
//! - 被 `kappa/run.rs` 调用

use crate::error::{Result, ThermokError};

/// 计算窗口 [t0, t1) 内的平均热导率
pub fn estimate_k(k: &[f64], time: &[f64], t0: f64, t1: f64) -> Result<f64> {
    if k.len() != time.len() {
        return Err(ThermokError::ShapeMismatch {
            expected: time.len(),
            found: k.len(),
        });
    }
    let (i0, i1) = resolve_window(time, t0, t1)?;

    let window = &k[i0..i1];
    Ok(window.iter().sum::<f64>() / window.len() as f64)
}

/// 将时间窗口解析为采样下标 (i0, i1)
pub fn resolve_window(time: &[f64], t0: f64, t1: f64) -> Result<(usize, usize)> {
    if !t0.is_finite() || !t1.is_finite() {
        return Err(ThermokError::RangeError(format!(
            "window bounds must be finite (t0={}, t1={})",
            t0, t1
        )));
    }
    if time.len() < 2 {
        return Err(ThermokError::InsufficientData(format!(
            "window estimate needs at least 2 samples, found {}",
            time.len()
        )));
    }

    let last = time[time.len() - 1];
    if t1 > last {
        return Err(ThermokError::RangeError(format!(
            "t1 = {} exceeds the last sample time {} ({} samples)",
            t1,
            last,
            time.len()
        )));
    }

    let i0 = nearest_index(time, t0);
    let i1 = nearest_index(time, t1);
    if i0 >= i1 {
        return Err(ThermokError::RangeError(format!(
            "window [{}, {}) resolves to empty sample range [{}, {})",
            t0, t1, i0, i1
        )));
    }

    Ok((i0, i1))
}

/// 时间最接近 t 的采样下标（time 单调不减）
fn nearest_index(time: &[f64], t: f64) -> usize {
    let upper = time.partition_point(|&x| x < t);
    if upper == 0 {
        return 0;
    }
    if upper == time.len() {
        return time.len() - 1;
    }

    // 精确命中时 time[upper] == t，距离为 0
    let below = upper - 1;
    if (t - time[below]) <= (time[upper] - t) {
        below
    } else {
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_time(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_estimate_k_plateau() {
        let time = index_time(20);
        let k: Vec<f64> = (0..20).map(|i| i as f64 * 0.1).collect();
        // 下标 5..10 的平均：(0.5 + 0.6 + 0.7 + 0.8 + 0.9) / 5
        let est = estimate_k(&k, &time, 5.0, 10.0).unwrap();
        assert!((est - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_window_nearest() {
        let time = vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        assert_eq!(resolve_window(&time, 0.6, 2.1).unwrap(), (1, 4));
        // 距离相同取较早的点
        assert_eq!(resolve_window(&time, 0.25, 2.25).unwrap(), (0, 4));
        assert_eq!(resolve_window(&time, -3.0, 1.0).unwrap(), (0, 2));
    }

    #[test]
    fn test_resolve_window_repeated_time() {
        let time = vec![0.0, 1.0, 1.0, 2.0, 3.0];
        assert_eq!(resolve_window(&time, 1.0, 3.0).unwrap(), (1, 4));
    }

    #[test]
    fn test_upper_bound_beyond_samples() {
        let time = index_time(8);
        let k = vec![1.0; 8];
        assert!(matches!(
            estimate_k(&k, &time, 5.0, 10.0),
            Err(ThermokError::RangeError(_))
        ));
    }

    #[test]
    fn test_inverted_window() {
        let time = index_time(20);
        let k = vec![1.0; 20];
        assert!(matches!(
            estimate_k(&k, &time, 10.0, 5.0),
            Err(ThermokError::RangeError(_))
        ));
        // 两个边界落在同一采样点
        assert!(matches!(
            estimate_k(&k, &time, 5.1, 5.2),
            Err(ThermokError::RangeError(_))
        ));
        assert!(matches!(
            estimate_k(&k, &time, f64::NAN, 5.0),
            Err(ThermokError::RangeError(_))
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let time = index_time(20);
        let k = vec![1.0; 19];
        assert!(matches!(
            estimate_k(&k, &time, 5.0, 10.0),
            Err(ThermokError::ShapeMismatch {
                expected: 20,
                found: 19
            })
        ));
        // 长度检查先于窗口解析
        assert!(matches!(
            estimate_k(&[1.0], &time, 5.0, 30.0),
            Err(ThermokError::ShapeMismatch { found: 1, .. })
        ));
        assert!(matches!(
            estimate_k(&[1.0, 2.0], &[0.0], 0.0, 1.0),
            Err(ThermokError::ShapeMismatch { .. })
        ));
    }
}
