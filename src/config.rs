//! 图配置
//!
//! 有向 / 无向、有权 / 无权的设置，可从 JSON 文件加载

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 图的构造设置
///
/// 默认为无向、无权图。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 是否为有向图
    #[serde(default)]
    pub directed: bool,
    /// 边是否带权
    #[serde(default)]
    pub weighted: bool,
}

impl GraphConfig {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    /// 有向有权图
    pub fn directed_weighted() -> Self {
        Self::new(true, true)
    }

    /// 无向有权图
    pub fn undirected_weighted() -> Self {
        Self::new(false, true)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析，缺失字段取默认值
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 设置描述，例如 "undirected and weighted"
    pub fn describe(&self) -> String {
        format!(
            "{} and {}",
            if self.directed { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" }
        )
    }
}
