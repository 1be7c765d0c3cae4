//! 图算法模块
//!
//! 包含遍历、最短路径、并查集和最小生成树算法

mod dijkstra;
mod disjoint_set;
mod kruskal;
mod traversal;

pub use dijkstra::{Dijkstra, ShortestPaths};
pub use disjoint_set::DisjointSet;
pub use kruskal::{Kruskal, SpanningForest, TreeEdge};
pub use traversal::{Traversal, TraversalResult};
