//! # trial 命令实现
//!
//! 分析 Trial 目录下的全部 Run 并做系综平均。
//!
//! ## 功能
//! - 收集匹配的 Run 目录（自然排序）
//! - 严格模式：任一 Run 失败即中止
//! - `--keep-going`：并行读取，报告失败的 Run，用其余 Run 做平均
//! - 终端表格输出，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/trial.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `kappa/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, RunCollector};
use crate::cli::trial::TrialArgs;
use crate::commands::{print_parameters, report, warn_auxiliary};
use crate::error::{Result, ThermokError};
use crate::kappa::{self, export, trial::dir_name};
use crate::models::{AnalysisConfig, TrialResult};
use crate::utils::output;

/// 执行 trial 命令
pub fn execute(args: TrialArgs) -> Result<()> {
    output::print_header("Green-Kubo Thermal Conductivity (trial)");

    let config = args.params.to_config(!args.no_average)?;
    print_parameters(&config);
    warn_auxiliary(&config);

    let result = if args.keep_going {
        read_trial_keep_going(&args, &config)?
    } else {
        if args.recursive {
            output::print_warning("--recursive only applies together with --keep-going");
        }
        kappa::read_trial(&args.trial_dir, &config, &args.pattern)?
    };

    output::print_info(&format!(
        "Trial '{}': {} runs analyzed",
        result.name,
        result.runs.len()
    ));

    output::print_header("Plateau Estimates");
    println!(
        "{}",
        report::estimates_table(&result.runs, result.average.as_ref())
    );

    if let Some(ref path) = args.estimates_csv {
        export::estimates_to_csv(&result.runs, result.average.as_ref(), path)?;
        output::print_success(&format!("Estimates saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.average_csv {
        match result.average {
            Some(ref avg) => {
                export::average_to_csv(avg, path)?;
                output::print_success(&format!(
                    "Averaged series saved to '{}'",
                    path.display()
                ));
            }
            None => output::print_warning("Averaging disabled, --average-csv ignored"),
        }
    }

    output::print_done(&format!("Trial '{}' analyzed", result.name));
    Ok(())
}

/// 并行读取所有 Run，跳过失败的 Run
fn read_trial_keep_going(args: &TrialArgs, config: &AnalysisConfig) -> Result<TrialResult> {
    let run_dirs = RunCollector::new(args.trial_dir.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if run_dirs.is_empty() {
        return Err(ThermokError::NoRunsFound {
            path: args.trial_dir.display().to_string(),
            pattern: args.pattern.clone(),
        });
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Found {} run directories, reading with {} threads",
        run_dirs.len(),
        runner.jobs()
    ));

    let batch = runner.run(run_dirs, |dir| kappa::read_run(dir, config))?;

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {}/{} runs read, {} failed",
        batch.success(),
        batch.total(),
        batch.failed()
    ));

    if !batch.failures.is_empty() {
        output::print_warning("Failed runs:");
        for (path, err) in batch.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if batch.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", batch.failures.len() - 10));
        }
    }

    if batch.outputs.is_empty() {
        return Err(ThermokError::Other("Every run failed, nothing to analyze".to_string()));
    }

    let average = if config.average {
        Some(kappa::average_runs(&batch.outputs)?)
    } else {
        None
    };

    Ok(TrialResult {
        name: dir_name(&args.trial_dir),
        runs: batch.outputs,
        average,
    })
}
