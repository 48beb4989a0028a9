//! # Run 目录收集器
//!
//! 在 Trial 目录下收集符合命名模式的 Run 子目录。
//!
//! ## 功能
//! - glob 模式匹配目录名（逗号分隔多模式）
//! - 可选递归搜索（嵌套的 Trial）
//! - 自然排序：Run2 排在 Run10 之前
//!
//! ## 依赖关系
//! - 被 `kappa/trial.rs`, `commands/trial.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式，`regex` 拆分数字

use crate::error::{Result, ThermokError};

use regex::Regex;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Run 目录收集器
pub struct RunCollector {
    /// Trial 目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl RunCollector {
    /// 创建新的收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的 Run 目录（自然排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(ThermokError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let patterns = self
            .patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    ThermokError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut dirs: Vec<PathBuf> = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter(|e| Self::matches_patterns(&patterns, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        let splitter = Regex::new(r"\d+|\D+").map_err(|e| ThermokError::Other(e.to_string()))?;
        dirs.sort_by(|a, b| natural_cmp(&splitter, &a.to_string_lossy(), &b.to_string_lossy()));

        Ok(dirs)
    }

    /// 检查目录名是否匹配任一模式
    fn matches_patterns(patterns: &[glob::Pattern], path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        patterns.iter().any(|p| p.matches(name))
    }
}

/// 自然顺序比较：数字片段按数值比较
fn natural_cmp(splitter: &Regex, a: &str, b: &str) -> Ordering {
    let mut left = splitter.find_iter(a).map(|m| m.as_str());
    let mut right = splitter.find_iter(b).map(|m| m.as_str());

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny).then_with(|| x.len().cmp(&y.len())),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_natural_cmp() {
        let re = Regex::new(r"\d+|\D+").unwrap();
        assert_eq!(natural_cmp(&re, "Run2", "Run10"), Ordering::Less);
        assert_eq!(natural_cmp(&re, "Run10", "Run9"), Ordering::Greater);
        assert_eq!(natural_cmp(&re, "Run1", "Run1"), Ordering::Equal);
        assert_eq!(natural_cmp(&re, "Run1", "Run1b"), Ordering::Less);
        assert_eq!(natural_cmp(&re, "A1", "B1"), Ordering::Less);
    }

    #[test]
    fn test_collect_runs() {
        let trial = tempfile::tempdir().unwrap();
        for name in ["Run10", "Run2", "Run1", "analysis"] {
            fs::create_dir(trial.path().join(name)).unwrap();
        }
        fs::write(trial.path().join("Run3"), "not a directory").unwrap();

        let runs = RunCollector::new(trial.path().to_path_buf())
            .with_pattern("Run*")
            .collect()
            .unwrap();
        let names: Vec<_> = runs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Run1", "Run2", "Run10"]);

        let all = RunCollector::new(trial.path().to_path_buf())
            .collect()
            .unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_collect_invalid_pattern() {
        let trial = tempfile::tempdir().unwrap();
        let result = RunCollector::new(trial.path().to_path_buf())
            .with_pattern("Run[")
            .collect();
        assert!(matches!(result, Err(ThermokError::InvalidArgument(_))));
    }
}
