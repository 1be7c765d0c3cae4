//! 错误类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边已存在: {0}")]
    EdgeAlreadyExists(String),

    /// 并查集中未经 make_set 注册的元素
    #[error("未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("存在负权边 {source_vertex} -> {target_vertex} (权重 {weight})，Dijkstra 不支持负权")]
    NegativeWeight {
        source_vertex: String,
        target_vertex: String,
        weight: i64,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// 非致命诊断：操作已完成，但输入的一部分被策略性忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyWarning {
    /// 无权图收到了权重，权重已被丢弃
    WeightDiscarded { weight: i64 },
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyWarning::WeightDiscarded { weight } => {
                write!(f, "无权图，给定的权重 ({}) 未被采用", weight)
            }
        }
    }
}
