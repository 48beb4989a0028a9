//! # 热流时间序列数据模型
//!
//! 单个 Run 单个方向的 (时间, 热流) 采样。读取后不可变。
//!
//! ## 依赖关系
//! - 被 `parsers/flux.rs` 构造
//! - 被 `kappa/run.rs` 使用

use crate::error::{Result, ThermokError};

use serde::Serialize;

/// 热流时间序列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluxSeries {
    time: Vec<f64>,
    flux: Vec<f64>,
}

impl FluxSeries {
    /// 创建热流序列
    ///
    /// 要求两列等长、至少 2 个采样点且时间单调不减。
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Result<Self> {
        if time.len() != flux.len() {
            return Err(ThermokError::ShapeMismatch {
                expected: time.len(),
                found: flux.len(),
            });
        }
        if time.len() < 2 {
            return Err(ThermokError::InsufficientData(format!(
                "flux series needs at least 2 samples, found {}",
                time.len()
            )));
        }
        if let Some(i) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(ThermokError::FormatError {
                source_name: "flux series".to_string(),
                line: i + 2,
                reason: format!("time decreases from {} to {}", time[i], time[i + 1]),
            });
        }
        Ok(Self { time, flux })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// 拆分为 (时间, 热流)
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.flux)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flux_series_valid() {
        let s = FluxSeries::new(vec![0.0, 1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.time().len(), 4);
        assert_eq!(s.flux()[2], 3.0);
    }

    #[test]
    fn test_flux_series_rejects_short_and_unordered() {
        assert!(matches!(
            FluxSeries::new(vec![0.0], vec![1.0]),
            Err(ThermokError::InsufficientData(_))
        ));
        assert!(matches!(
            FluxSeries::new(vec![0.0, 2.0, 1.0], vec![1.0, 1.0, 1.0]),
            Err(ThermokError::FormatError { line: 3, .. })
        ));
        assert!(matches!(
            FluxSeries::new(vec![0.0, 1.0], vec![1.0]),
            Err(ThermokError::ShapeMismatch { .. })
        ));
    }
}
