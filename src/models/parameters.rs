//! # 分析参数数据模型
//!
//! 物理常数、热流文件格式、平台窗口以及完整的分析配置。
//! 所有默认值在构造时确定，调用方不再按键名临时查找。
//!
//! ## 默认值
//! ```text
//! kb = 0.001987 kcal/mol/K   conv = 69443.84   dt = 5 fs
//! volume = 80 * 80 * 80 Å³   temp = 300 K      prefix = J0Jt_t
//! t0 = 5   t1 = 10
//! ```
//!
//! ## 依赖关系
//! - 被 `kappa/`、`parsers/flux.rs`、`commands/` 使用
//! - 使用 `error.rs`

use crate::error::{Result, ThermokError};

use serde::{Deserialize, Serialize};

/// Green-Kubo 换算所需的物理参数（构造后不可变）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    kb: f64,
    conv: f64,
    dt: f64,
    volume: f64,
    temp: f64,
}

impl PhysicalParameters {
    /// 创建物理参数，拒绝会导致分母为零的取值
    ///
    /// kb 与 conv 的符号不做检查，它们由调用方给出。
    pub fn new(kb: f64, conv: f64, dt: f64, volume: f64, temp: f64) -> Result<Self> {
        let params = Self {
            kb,
            conv,
            dt,
            volume,
            temp,
        };
        params.validate()?;
        Ok(params)
    }

    /// 检查 kb * T^2 * V 是否为非零有限值
    pub fn validate(&self) -> Result<()> {
        if self.temp == 0.0 {
            return Err(ThermokError::ParameterError(
                "temperature must be non-zero".to_string(),
            ));
        }
        if self.volume == 0.0 {
            return Err(ThermokError::ParameterError(
                "volume must be non-zero".to_string(),
            ));
        }
        if self.kb == 0.0 {
            return Err(ThermokError::ParameterError(
                "Boltzmann constant must be non-zero".to_string(),
            ));
        }
        if !self.denominator().is_finite() {
            return Err(ThermokError::ParameterError(format!(
                "kb * T^2 * V is not finite (kb={}, T={}, V={})",
                self.kb, self.temp, self.volume
            )));
        }
        Ok(())
    }

    pub fn kb(&self) -> f64 {
        self.kb
    }

    pub fn conv(&self) -> f64 {
        self.conv
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn temp(&self) -> f64 {
        self.temp
    }

    /// kb * T^2 * V
    pub fn denominator(&self) -> f64 {
        self.kb * self.temp * self.temp * self.volume
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        PhysicalParameters {
            kb: 0.001987,
            conv: 69443.84,
            dt: 5.0,
            volume: 80.0 * 80.0 * 80.0,
            temp: 300.0,
        }
    }
}

/// 热流文件的列布局与表头策略
///
/// 空行和以 `#` 开头的行总是被忽略；`skip_rows` 额外跳过文件开头的若干物理行
/// （例如 LAMMPS `fix ave/correlate` 的块头）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxFormat {
    /// 时间列（从 0 开始）
    pub time_column: usize,
    /// 累积热流列（从 0 开始）
    pub flux_column: usize,
    /// 开头跳过的行数
    pub skip_rows: usize,
    /// 时间列乘以的系数
    pub time_scale: f64,
}

impl FluxFormat {
    /// 一行数据至少需要的列数
    pub fn required_columns(&self) -> usize {
        self.time_column.max(self.flux_column) + 1
    }
}

impl Default for FluxFormat {
    fn default() -> Self {
        FluxFormat {
            time_column: 0,
            flux_column: 3,
            skip_rows: 0,
            time_scale: 1.0,
        }
    }
}

/// 平台窗口 [t0, t1)，单位与时间列相同
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub t0: f64,
    pub t1: f64,
}

impl TimeWindow {
    pub fn new(t0: f64, t1: f64) -> Result<Self> {
        if !t0.is_finite() || !t1.is_finite() {
            return Err(ThermokError::RangeError(format!(
                "window bounds must be finite (t0={}, t1={})",
                t0, t1
            )));
        }
        if t0 >= t1 {
            return Err(ThermokError::RangeError(format!(
                "t0 ({}) must be smaller than t1 ({})",
                t0, t1
            )));
        }
        Ok(Self { t0, t1 })
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow { t0: 5.0, t1: 10.0 }
    }
}

/// 一次分析的完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 物理参数
    pub params: PhysicalParameters,
    /// 热流文件名前缀，完整文件名为 `<prefix><x|y|z>.dat`
    pub prefix: String,
    /// 是否把三个方向平均为各向同性结果
    pub isotropic: bool,
    /// 是否对多个 Run 做系综平均
    pub average: bool,
    /// 是否读取模拟信息文件（辅助读取器不在本工具范围内）
    pub read_info: bool,
    /// 是否读取 thermo 输出（辅助读取器不在本工具范围内）
    pub read_thermo: bool,
    /// 平台窗口
    pub window: TimeWindow,
    /// 热流文件格式
    pub format: FluxFormat,
    /// 输入为原始自相关函数时先做累积积分
    pub integrate: bool,
}

impl AnalysisConfig {
    /// 给定方向对应的热流文件名
    pub fn flux_file_name(&self, suffix: &str) -> String {
        format!("{}{}.dat", self.prefix, suffix)
    }

    /// 校验所有字段
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        TimeWindow::new(self.window.t0, self.window.t1)?;
        if self.prefix.is_empty() {
            return Err(ThermokError::InvalidArgument(
                "flux file prefix must not be empty".to_string(),
            ));
        }
        if !self.format.time_scale.is_finite() || self.format.time_scale == 0.0 {
            return Err(ThermokError::InvalidArgument(format!(
                "time scale must be a non-zero finite number, got {}",
                self.format.time_scale
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            params: PhysicalParameters::default(),
            prefix: "J0Jt_t".to_string(),
            isotropic: false,
            average: true,
            read_info: false,
            read_thermo: false,
            window: TimeWindow::default(),
            format: FluxFormat::default(),
            integrate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let p = PhysicalParameters::default();
        assert_eq!(p.volume(), 512000.0);
        assert_eq!(p.temp(), 300.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(matches!(
            PhysicalParameters::new(0.001987, 1.0, 5.0, 1000.0, 0.0),
            Err(ThermokError::ParameterError(_))
        ));
        assert!(matches!(
            PhysicalParameters::new(0.001987, 1.0, 5.0, 0.0, 300.0),
            Err(ThermokError::ParameterError(_))
        ));
        assert!(matches!(
            PhysicalParameters::new(0.0, 1.0, 5.0, 1000.0, 300.0),
            Err(ThermokError::ParameterError(_))
        ));
    }

    #[test]
    fn test_negative_constants_accepted() {
        let p = PhysicalParameters::new(-0.001987, -2.0, 5.0, 1000.0, 300.0).unwrap();
        assert_eq!(p.kb(), -0.001987);
        assert_eq!(p.conv(), -2.0);
    }

    #[test]
    fn test_inverted_window() {
        assert!(matches!(
            TimeWindow::new(10.0, 5.0),
            Err(ThermokError::RangeError(_))
        ));
        assert!(TimeWindow::new(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_flux_file_name() {
        let config = AnalysisConfig::default();
        assert_eq!(config.flux_file_name("x"), "J0Jt_tx.dat");
        assert_eq!(config.format.required_columns(), 4);
        assert!(!config.isotropic);
        assert!(config.average);
    }
}
