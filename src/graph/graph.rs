//! 图数据结构
//!
//! 顶点与边存放在按插入顺序排列的扁平存储中，边只通过 ID 引用顶点。

use super::edge::{Edge, EdgeId, EdgeKey};
use super::index::{EdgeIndex, VertexIndex};
use super::vertex::{Vertex, VertexId};
use crate::config::GraphConfig;
use crate::error::{Error, PolicyWarning, Result};
use crate::types::Weight;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;
use tracing::{trace, warn};

/// 内存图
///
/// 对无向图，每条边只按调用方给定的方向存储一次，邻接查询时再做对称处理。
pub struct Graph<T> {
    /// 是否有向
    directed: bool,
    /// 是否有权
    weighted: bool,
    /// 顶点存储（按插入顺序）
    vertices: IndexMap<VertexId, Vertex<T>>,
    /// 边存储（按插入顺序）
    edges: IndexMap<EdgeId, Edge>,
    /// 顶点索引
    vertex_index: VertexIndex<T>,
    /// 边索引
    edge_index: EdgeIndex,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 按配置创建空图
    pub fn new(config: GraphConfig) -> Self {
        Self {
            directed: config.directed,
            weighted: config.weighted,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            vertex_index: VertexIndex::new(),
            edge_index: EdgeIndex::new(),
            next_vertex_id: 0,
            next_edge_id: 0,
        }
    }

    /// 创建空图
    pub fn with_settings(directed: bool, weighted: bool) -> Self {
        Self::new(GraphConfig::new(directed, weighted))
    }

    /// 获取图的配置
    pub fn config(&self) -> GraphConfig {
        GraphConfig::new(self.directed, self.weighted)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 已存在相同数据的顶点时返回 `VertexAlreadyExists`。
    pub fn add_vertex(&mut self, data: T) -> Result<VertexId> {
        if self.vertex_index.contains(&data) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", data)));
        }

        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        self.vertex_index.add(data.clone(), id);
        self.vertices.insert(id, Vertex::new(id, data));

        Ok(id)
    }

    /// 删除顶点及其所有相关边
    pub fn remove_vertex(&mut self, data: &T) -> Result<()> {
        let id = self.require_vertex(data)?;

        for edge_id in self.edge_index.get_incident(id) {
            self.detach_edge(edge_id);
        }
        self.edge_index.remove_vertex(id);
        self.vertex_index.remove(data);
        self.vertices.shift_remove(&id);

        Ok(())
    }

    /// 按数据查找顶点 ID
    pub fn vertex_id(&self, data: &T) -> Option<VertexId> {
        self.vertex_index.get(data)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&id)
    }

    /// 获取顶点数据
    pub fn data_of(&self, id: VertexId) -> Option<&T> {
        self.vertices.get(&id).map(|v| v.data())
    }

    /// 顶点在集合中的位置
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.vertices.get_index_of(&id)
    }

    pub fn contains_vertex(&self, data: &T) -> bool {
        self.vertex_index.contains(data)
    }

    /// 所有顶点（按集合顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertices.values()
    }

    /// 所有顶点 ID（按集合顺序）
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertex_index.vertex_count()
    }

    // ==================== 边操作 ====================

    /// 添加边 `v -> u`
    ///
    /// 无权图中给定的权重会被丢弃，并以 `PolicyWarning` 返回给调用方。
    pub fn put_edge(&mut self, v: &T, u: &T, weight: Option<Weight>) -> Result<Option<PolicyWarning>> {
        let src = self.require_vertex(v)?;
        let dst = self.require_vertex(u)?;

        let (weight, warning) = self.normalize_weight(weight);
        if let Some(w) = &warning {
            warn!(source = ?v, target = ?u, "{}", w);
        }

        let key: EdgeKey = (src, dst, weight);
        if self.edge_index.find(&key).is_some() {
            return Err(Error::EdgeAlreadyExists(describe_edge(v, u, weight)));
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        self.edge_index.add_edge(id, key);
        self.edges
            .insert(id, Edge::new(id, src, dst, weight, self.directed));
        trace!(edge = %describe_edge(v, u, weight), "添加边");

        Ok(warning)
    }

    /// 删除恰好为 (v, u, weight) 的边
    pub fn remove_edge(&mut self, v: &T, u: &T, weight: Option<Weight>) -> Result<()> {
        let src = self.require_vertex(v)?;
        let dst = self.require_vertex(u)?;
        let weight = if self.weighted { weight } else { None };

        let edge_id = self
            .edge_index
            .find(&(src, dst, weight))
            .ok_or_else(|| Error::EdgeNotFound(describe_edge(v, u, weight)))?;
        self.detach_edge(edge_id);

        Ok(())
    }

    /// 是否存在恰好为 (v, u, weight) 的边
    pub fn contains_edge(&self, v: &T, u: &T, weight: Option<Weight>) -> bool {
        match (self.vertex_id(v), self.vertex_id(u)) {
            (Some(src), Some(dst)) => {
                let weight = if self.weighted { weight } else { None };
                self.edge_index.find(&(src, dst, weight)).is_some()
            }
            _ => false,
        }
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// 所有边（按插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// 可从 v 直接走到 u 的所有边
    pub fn edges_between(&self, v: &T, u: &T) -> Result<Vec<&Edge>> {
        let src = self.require_vertex(v)?;
        let dst = self.require_vertex(u)?;
        Ok(self
            .adjacent_edges(src)
            .filter(|(to, _)| *to == dst)
            .map(|(_, e)| e)
            .collect())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_index.edge_count()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻域
    ///
    /// 以该顶点为源的边的目标都是邻居；无向图中以该顶点为目标的边的源也是邻居。
    pub fn neighborhood(&self, data: &T) -> Result<Vec<&T>> {
        let id = self.require_vertex(data)?;
        Ok(self
            .neighbor_ids(id)
            .into_iter()
            .filter_map(|n| self.data_of(n))
            .collect())
    }

    /// 按 ID 获取邻居（去重，按边插入顺序）
    pub fn neighbor_ids(&self, id: VertexId) -> Vec<VertexId> {
        let neighbors: IndexSet<VertexId> = self.adjacent_edges(id).map(|(to, _)| to).collect();
        neighbors.into_iter().collect()
    }

    /// 从顶点出发可走的边及其另一端
    pub fn adjacent_edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        let candidates = if self.directed {
            self.edge_index.get_outgoing(id)
        } else {
            self.edge_index.get_incident(id)
        };
        candidates
            .into_iter()
            .filter_map(move |edge_id| self.edges.get(&edge_id))
            .filter_map(move |edge| edge.other_end(id).map(|to| (to, edge)))
    }

    /// u 是否与 v 相邻
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacent_edges(u).any(|(to, _)| to == v)
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, data: &T) -> Result<usize> {
        let id = self.require_vertex(data)?;
        Ok(self.edge_index.out_degree(id))
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, data: &T) -> Result<usize> {
        let id = self.require_vertex(data)?;
        Ok(self.edge_index.in_degree(id))
    }

    /// 清空所有顶点与边（保留配置）
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.vertex_index.clear();
        self.edge_index.clear();
    }

    // ==================== 内部辅助 ====================

    fn require_vertex(&self, data: &T) -> Result<VertexId> {
        self.vertex_index
            .get(data)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", data)))
    }

    fn normalize_weight(&self, weight: Option<Weight>) -> (Option<Weight>, Option<PolicyWarning>) {
        match weight {
            Some(w) if !self.weighted => (None, Some(PolicyWarning::WeightDiscarded { weight: w })),
            other => (other, None),
        }
    }

    fn detach_edge(&mut self, edge_id: EdgeId) {
        if let Some(edge) = self.edges.shift_remove(&edge_id) {
            self.edge_index.remove(edge_id, &edge.key());
        }
    }
}

impl<T> Default for Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<T> fmt::Display for Graph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices().map(|v| format!("{:?}", v.data())).collect();
        let edges: Vec<String> = self
            .edges()
            .filter_map(|e| {
                let src = self.data_of(e.src())?;
                let dst = self.data_of(e.dst())?;
                Some(describe_edge(src, dst, e.weight()))
            })
            .collect();
        write!(
            f,
            "Graph G {} such as G = (V, E):\n(V = [{}],\n E = [{}])",
            self.config().describe(),
            vertices.join(", "),
            edges.join(", ")
        )
    }
}

fn describe_edge<T: fmt::Debug>(v: &T, u: &T, weight: Option<Weight>) -> String {
    match weight {
        Some(w) => format!("({:?}, {:?}, {})", v, u, w),
        None => format!("({:?}, {:?})", v, u),
    }
}
