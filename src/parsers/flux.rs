//! # LAMMPS 热流自相关文件解析器
//!
//! 解析空白分隔的热流表格，得到时间向量和累积热流向量。
//!
//! ## 文件格式
//! ```text
//! # Time-correlated data for fix JJ
//! # Index TimeDelta Ncount c_flux[1]*c_flux[1] ...
//! 0 0 200001 1.8393e-05 ...
//! 1 1 200000 1.8011e-05 ...
//! ...
//! ```
//! - 第 `time_column` 列为时间（模拟原生单位），乘以 `time_scale`
//! - 第 `flux_column` 列为热流自相关的累积值
//! - 空行和 `#` 注释行被忽略，另外可跳过开头 `skip_rows` 行
//!
//! ## 依赖关系
//! - 被 `kappa/run.rs` 使用
//! - 使用 `models/series.rs`, `models/parameters.rs`

use crate::error::{Result, ThermokError};
use crate::models::{FluxFormat, FluxSeries};

use std::fs;
use std::path::Path;

/// 读取热流文件
pub fn read_thermal_flux(path: &Path, format: &FluxFormat) -> Result<FluxSeries> {
    let content = fs::read_to_string(path).map_err(|e| ThermokError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_flux_content(&content, format, &path.display().to_string())
}

/// 从字符串内容解析热流表格
pub fn parse_flux_content(content: &str, format: &FluxFormat, source: &str) -> Result<FluxSeries> {
    let required = format.required_columns();
    let mut time = Vec::new();
    let mut flux = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(format.skip_rows) {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < required {
            return Err(ThermokError::FormatError {
                source_name: source.to_string(),
                line: line_no,
                reason: format!(
                    "expected at least {} columns, found {}",
                    required,
                    parts.len()
                ),
            });
        }

        let t = parse_field(parts[format.time_column], source, line_no)?;
        let j = parse_field(parts[format.flux_column], source, line_no)?;

        let t = t * format.time_scale;
        if !t.is_finite() {
            return Err(ThermokError::FormatError {
                source_name: source.to_string(),
                line: line_no,
                reason: format!(
                    "scaled time overflows ({} * {})",
                    parts[format.time_column], format.time_scale
                ),
            });
        }
        if let Some(&prev) = time.last() {
            if t < prev {
                return Err(ThermokError::FormatError {
                    source_name: source.to_string(),
                    line: line_no,
                    reason: format!("time decreases from {} to {}", prev, t),
                });
            }
        }

        time.push(t);
        flux.push(j);
    }

    if time.len() < 2 {
        return Err(ThermokError::InsufficientData(format!(
            "{} contains {} data rows, at least 2 are required",
            source,
            time.len()
        )));
    }

    FluxSeries::new(time, flux)
}

/// 解析单个数值字段（`nan`、`inf` 同样视为格式错误）
fn parse_field(field: &str, source: &str, line: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ThermokError::FormatError {
            source_name: source.to_string(),
            line,
            reason: format!("non-finite value '{}'", field),
        }),
        Err(_) => Err(ThermokError::FormatError {
            source_name: source.to_string(),
            line,
            reason: format!("cannot parse '{}' as a number", field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column() -> FluxFormat {
        FluxFormat {
            flux_column: 1,
            ..FluxFormat::default()
        }
    }

    #[test]
    fn test_parse_flux_basic() {
        let content = r#"
# Time-correlated data for fix JJ
# Index TimeDelta Ncount c_flux[1]*c_flux[1]
0 0 2001 1.5
1 1 2000 2.5
2 2 1999 3.0
"#;
        let series = parse_flux_content(content, &FluxFormat::default(), "test").unwrap();
        assert_eq!(series.time(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.flux(), &[1.5, 2.5, 3.0]);
    }

    #[test]
    fn test_parse_flux_skip_rows_and_scale() {
        let content = "200000 20001\n1 0.5\n2 0.75\n3 1.0\n";
        let format = FluxFormat {
            skip_rows: 1,
            time_scale: 0.005,
            ..two_column()
        };
        let series = parse_flux_content(content, &format, "test").unwrap();
        assert_eq!(series.time().len(), 3);
        assert!((series.time()[2] - 0.015).abs() < 1e-12);
        assert_eq!(series.flux()[0], 0.5);
    }

    #[test]
    fn test_parse_flux_block_header_is_format_error() {
        // 未跳过的 LAMMPS 块头只有两列
        let content = "200000 20001\n0 0 1 0.5\n1 1 1 0.7\n";
        let err = parse_flux_content(content, &FluxFormat::default(), "J0Jt_tx.dat").unwrap_err();
        assert!(matches!(err, ThermokError::FormatError { line: 1, .. }));
    }

    #[test]
    fn test_parse_flux_bad_number() {
        let content = "0 1.0\n1 abc\n";
        let err = parse_flux_content(content, &two_column(), "test").unwrap_err();
        match err {
            ThermokError::FormatError { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_flux_non_finite_values() {
        for bad in ["nan", "NaN", "inf", "-inf"] {
            let time_bad = format!("0 0.0\n1 1.0\n{} 2.0\n3 3.0\n", bad);
            let flux_bad = format!("0 0.0\n1 1.0\n2 {}\n3 3.0\n", bad);
            for content in [time_bad, flux_bad] {
                match parse_flux_content(&content, &two_column(), "test") {
                    Err(ThermokError::FormatError { line, reason, .. }) => {
                        assert_eq!(line, 3);
                        assert!(reason.contains(bad), "{}", reason);
                    }
                    other => panic!("'{}' accepted: {:?}", bad, other),
                }
            }
        }
    }

    #[test]
    fn test_parse_flux_scaled_time_overflow() {
        let format = FluxFormat {
            time_scale: 1e300,
            ..two_column()
        };
        assert!(matches!(
            parse_flux_content("0 1.0\n1e10 2.0\n", &format, "test"),
            Err(ThermokError::FormatError { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_flux_insufficient_rows() {
        assert!(matches!(
            parse_flux_content("", &two_column(), "empty"),
            Err(ThermokError::InsufficientData(_))
        ));
        assert!(matches!(
            parse_flux_content("# only header\n0 1.0\n", &two_column(), "one"),
            Err(ThermokError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_parse_flux_decreasing_time() {
        let content = "0 1.0\n2 1.0\n1 1.0\n";
        assert!(matches!(
            parse_flux_content(content, &two_column(), "test"),
            Err(ThermokError::FormatError { line: 3, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_thermal_flux(Path::new("/nonexistent/J0Jt_tx.dat"), &two_column());
        assert!(matches!(err, Err(ThermokError::FileReadError { .. })));
    }
}
