//! # run 命令实现
//!
//! 分析单个 Run 目录。
//!
//! ## 功能
//! - 读取各方向热流文件并换算为热导率
//! - 计算平台窗口估计值（可选各向同性平均）
//! - 终端表格输出，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `kappa/`
//! - 使用 `utils/output.rs`

use crate::cli::run::RunArgs;
use crate::commands::{print_parameters, report, warn_auxiliary};
use crate::error::Result;
use crate::kappa::{self, export};
use crate::utils::output;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Green-Kubo Thermal Conductivity (single run)");

    let config = args.params.to_config(false)?;
    print_parameters(&config);
    warn_auxiliary(&config);

    output::print_info(&format!(
        "Reading '{}' (prefix '{}', window [{}, {}))",
        args.run_dir.display(),
        config.prefix,
        config.window.t0,
        config.window.t1
    ));

    let run = kappa::read_run(&args.run_dir, &config)?;

    let axes: Vec<&str> = run.axes().iter().map(|a| a.label()).collect();
    output::print_info(&format!(
        "{} samples, directions: {}",
        run.time.len(),
        axes.join(", ")
    ));

    println!("{}", report::estimates_table(std::slice::from_ref(&run), None));

    if let Some(ref path) = args.output_csv {
        export::run_to_csv(&run, path)?;
        output::print_success(&format!(
            "Conductivity series saved to '{}'",
            path.display()
        ));
    }

    output::print_done(&format!("Run '{}' analyzed", run.name));
    Ok(())
}
