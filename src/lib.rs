//! adjgraph - 内存图结构与经典图算法
//!
//! 以邻接表表示的有向 / 无向、加权 / 无权图，支持：
//! - 广度优先与深度优先遍历（白 / 灰 / 黑着色）
//! - Dijkstra 单源最短路径
//! - 并查集与 Kruskal 最小生成树
//! - 邻接矩阵文本的导入、导出与随机生成

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    Dijkstra, DisjointSet, Kruskal, ShortestPaths, SpanningForest, Traversal, TraversalResult,
    TreeEdge,
};
pub use config::GraphConfig;
pub use error::{Error, PolicyWarning, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use import::AdjacencyMatrix;
pub use types::{Color, DfsGuard, Distance, Weight, INFINITY};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
