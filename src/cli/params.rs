//! # 分析参数 CLI 定义
//!
//! `run` 与 `trial` 共用的物理参数、文件格式和窗口参数。
//! 每个参数都可以通过 `THERMOK_*` 环境变量给出。
//!
//! ## 依赖关系
//! - 被 `cli/run.rs`, `cli/trial.rs` 通过 `#[command(flatten)]` 使用
//! - 转换为 `models/parameters.rs` 的 AnalysisConfig

use crate::error::Result;
use crate::models::{AnalysisConfig, FluxFormat, PhysicalParameters, TimeWindow};

use clap::Args;

/// Green-Kubo 分析参数
#[derive(Args, Debug, Clone)]
pub struct KParamArgs {
    // ─────────────────────────────────────────────────────────────
    // 物理参数
    // ─────────────────────────────────────────────────────────────
    /// Boltzmann constant (kcal/mol/K for LAMMPS 'real' units)
    #[arg(long, env = "THERMOK_KB", default_value_t = 0.001987, allow_negative_numbers = true)]
    pub kb: f64,

    /// Unit conversion factor to W/mK
    #[arg(long, env = "THERMOK_CONV", default_value_t = 69443.84, allow_negative_numbers = true)]
    pub conv: f64,

    /// Integration timestep (fs)
    #[arg(long, env = "THERMOK_DT", default_value_t = 5.0)]
    pub dt: f64,

    /// Simulation cell volume (Å³)
    #[arg(long, env = "THERMOK_VOLUME", default_value_t = 512000.0)]
    pub volume: f64,

    /// Temperature (K)
    #[arg(long, env = "THERMOK_TEMP", default_value_t = 300.0)]
    pub temp: f64,

    // ─────────────────────────────────────────────────────────────
    // 文件与方向
    // ─────────────────────────────────────────────────────────────
    /// Flux filename prefix; files are named <prefix><x|y|z>.dat
    #[arg(long, env = "THERMOK_PREFIX", default_value = "J0Jt_t")]
    pub prefix: String,

    /// Average the x/y/z directions into an isotropic result
    #[arg(long, env = "THERMOK_ISOTROPIC", default_value_t = false)]
    pub isotropic: bool,

    /// Column holding the time value (0-based)
    #[arg(long, env = "THERMOK_TIME_COLUMN", default_value_t = 0)]
    pub time_column: usize,

    /// Column holding the cumulative flux value (0-based)
    #[arg(long, env = "THERMOK_FLUX_COLUMN", default_value_t = 3)]
    pub flux_column: usize,

    /// Number of leading lines to skip in each flux file
    #[arg(long, env = "THERMOK_SKIP_ROWS", default_value_t = 0)]
    pub skip_rows: usize,

    /// Factor applied to the time column
    #[arg(long, env = "THERMOK_TIME_SCALE", default_value_t = 1.0)]
    pub time_scale: f64,

    /// Flux files hold raw autocorrelation samples; integrate them first
    #[arg(long, env = "THERMOK_INTEGRATE", default_value_t = false)]
    pub integrate: bool,

    // ─────────────────────────────────────────────────────────────
    // 平台窗口
    // ─────────────────────────────────────────────────────────────
    /// Start of the plateau window (time column units)
    #[arg(long, env = "THERMOK_T0", default_value_t = 5.0, allow_negative_numbers = true)]
    pub t0: f64,

    /// End of the plateau window (time column units, exclusive)
    #[arg(long, env = "THERMOK_T1", default_value_t = 10.0)]
    pub t1: f64,

    // ─────────────────────────────────────────────────────────────
    // 辅助文件
    // ─────────────────────────────────────────────────────────────
    /// Read the simulation info file (not supported, ignored with a warning)
    #[arg(long, env = "THERMOK_READ_INFO", default_value_t = false)]
    pub read_info: bool,

    /// Read LAMMPS thermo output (not supported, ignored with a warning)
    #[arg(long, env = "THERMOK_READ_THERMO", default_value_t = false)]
    pub read_thermo: bool,
}

impl KParamArgs {
    /// 构造并校验分析配置
    pub fn to_config(&self, average: bool) -> Result<AnalysisConfig> {
        let config = AnalysisConfig {
            params: PhysicalParameters::new(self.kb, self.conv, self.dt, self.volume, self.temp)?,
            prefix: self.prefix.clone(),
            isotropic: self.isotropic,
            average,
            read_info: self.read_info,
            read_thermo: self.read_thermo,
            window: TimeWindow::new(self.t0, self.t1)?,
            format: FluxFormat {
                time_column: self.time_column,
                flux_column: self.flux_column,
                skip_rows: self.skip_rows,
                time_scale: self.time_scale,
            },
            integrate: self.integrate,
        };
        config.validate()?;
        Ok(config)
    }
}
