//! # Green-Kubo 热导率换算
//!
//! 将累积热流自相关积分换算为热导率序列：
//!
//! ```text
//! k(t_i) = flux(t_i) * conv * dt / (kb * T^2 * V)
//! ```
//!
//! 换算是逐点线性的，不做数值积分。输入为原始自相关采样时，
//! 先用 [`integrate_flux`] 得到累积值。
//!
//! ## 依赖关系
//! - 被 `kappa/run.rs` 调用
//! - 使用 `models/parameters.rs` 的 PhysicalParameters

use crate::error::Result;
use crate::models::PhysicalParameters;

/// 累积热流 -> 热导率序列（与输入等长、逐点对齐）
pub fn calculate_k(flux: &[f64], params: &PhysicalParameters) -> Result<Vec<f64>> {
    params.validate()?;

    let scale = params.conv() * params.dt() / params.denominator();
    Ok(flux.iter().map(|j| j * scale).collect())
}

/// 原始自相关采样的累积和，首项取一半（梯形起点）
pub fn integrate_flux(raw: &[f64]) -> Vec<f64> {
    let mut cumulative = Vec::with_capacity(raw.len());
    let mut acc = 0.0;
    for (i, j) in raw.iter().enumerate() {
        acc += if i == 0 { j / 2.0 } else { *j };
        cumulative.push(acc);
    }
    cumulative
}
