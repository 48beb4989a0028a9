//! # 批量执行器
//!
//! 并行处理多个 Run 目录。各 Run 互相独立，单个 Run 的错误被记录下来，
//! 其余 Run 继续处理；数值核心本身从不吞掉错误。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/trial.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{Result, ThermokError};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个 Run 处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 处理失败
    Failed(String, String), // (目录路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功的输出（保持输入顺序）
    pub outputs: Vec<T>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(output) => self.outputs.push(output),
            ProcessResult::Failed(path, err) => self.failures.push((path, err)),
        }
    }

    pub fn success(&self) -> usize {
        self.outputs.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success() + self.failed()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用全部 CPU）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理目录列表
    pub fn run<T, F>(&self, dirs: Vec<PathBuf>, processor: F) -> Result<BatchResult<T>>
    where
        T: Send,
        F: Fn(&PathBuf) -> Result<T> + Sync + Send,
    {
        let total = dirs.len();
        let pb = progress::create_progress_bar(total as u64, "Reading runs");

        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ThermokError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            dirs.par_iter()
                .map(|dir| {
                    let result = match processor(dir) {
                        Ok(output) => ProcessResult::Success(output),
                        Err(e) => {
                            failed_count.fetch_add(1, Ordering::Relaxed);
                            ProcessResult::Failed(dir.display().to_string(), e.to_string())
                        }
                    };

                    pb.inc(1);
                    pb.set_message(format!(
                        "Reading runs ({} failed)",
                        failed_count.load(Ordering::Relaxed)
                    ));
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_keeps_order_and_failures() {
        let dirs: Vec<PathBuf> = (1..=6).map(|i| PathBuf::from(format!("Run{}", i))).collect();
        let runner = BatchRunner::new(3);
        assert_eq!(runner.jobs(), 3);

        let result = runner
            .run(dirs, |dir| {
                let name = dir.display().to_string();
                if name == "Run4" {
                    Err(ThermokError::InsufficientData("empty flux file".to_string()))
                } else {
                    Ok(name)
                }
            })
            .unwrap();

        assert_eq!(result.total(), 6);
        assert_eq!(result.success(), 5);
        assert_eq!(result.outputs, vec!["Run1", "Run2", "Run3", "Run5", "Run6"]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "Run4");
        assert!(result.failures[0].1.contains("empty flux file"));
    }

    #[test]
    fn test_batch_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
