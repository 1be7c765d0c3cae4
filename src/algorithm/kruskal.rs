//! Kruskal 最小生成树
//!
//! 边按权重升序稳定排序，借助并查集跳过会成环的边。
//! 图不连通时得到最小生成森林。有向图的边按无向处理。

use super::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph, VertexId};
use crate::types::Weight;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 生成树中的一条边
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge<T> {
    /// 原图中的边 ID
    pub id: EdgeId,
    pub source: T,
    pub target: T,
    pub weight: Option<Weight>,
}

/// 最小生成树 / 森林
#[derive(Debug, Clone, Serialize)]
pub struct SpanningForest<T> {
    /// 入选的边（按选取顺序）
    pub edges: Vec<TreeEdge<T>>,
    /// 总权重（无权边计 1）
    pub total_weight: Weight,
    /// 原图顶点数
    pub vertex_count: usize,
}

impl<T> SpanningForest<T> {
    /// 是否覆盖全部顶点的一棵树（恰好 V-1 条边）
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count.max(1)
    }

    /// 连通分量数
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }
}

/// Kruskal 算法
pub struct Kruskal<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Kruskal<'a, T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建算法实例
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 计算最小生成森林
    ///
    /// 权重相同的边保持其在图中的插入顺序。总权重超出 `i64` 范围时返回
    /// `InvalidInput`。
    pub fn run(&self) -> Result<SpanningForest<T>> {
        let mut sets: DisjointSet<VertexId> = DisjointSet::new();
        for id in self.graph.vertex_ids() {
            sets.make_set(id);
        }

        let mut sorted: Vec<&Edge> = self.graph.edges().collect();
        sorted.sort_by_key(|e| e.cost());

        let mut edges = Vec::new();
        let mut total_weight: Weight = 0;
        for edge in sorted {
            let (src, dst) = (edge.src(), edge.dst());
            if sets.find(&src)? == sets.find(&dst)? {
                trace!(edge = %edge, "跳过成环边");
                continue;
            }
            total_weight = total_weight.checked_add(edge.cost()).ok_or_else(|| {
                Error::InvalidInput(format!("生成树总权重溢出: {} + {}", total_weight, edge.cost()))
            })?;
            sets.union(&src, &dst)?;

            if let (Some(source), Some(target)) = (self.graph.data_of(src), self.graph.data_of(dst)) {
                edges.push(TreeEdge {
                    id: edge.id(),
                    source: source.clone(),
                    target: target.clone(),
                    weight: edge.weight(),
                });
            }
        }

        debug!(
            edges = edges.len(),
            total_weight,
            components = sets.set_count(),
            "最小生成树计算完成"
        );

        Ok(SpanningForest {
            edges,
            total_weight,
            vertex_count: self.graph.vertex_count(),
        })
    }
}
