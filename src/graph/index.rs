//! 图索引
//!
//! 顶点数据与边端点的内存索引，支持按值查找和 O(度) 的邻接查询

use crate::graph::edge::{EdgeId, EdgeKey};
use crate::graph::vertex::VertexId;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::hash::Hash;

/// 顶点索引
pub(crate) struct VertexIndex<T> {
    /// 顶点数据到顶点 ID 的映射
    data_to_id: HashMap<T, VertexId>,
}

impl<T: Eq + Hash> VertexIndex<T> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            data_to_id: HashMap::new(),
        }
    }

    /// 添加数据索引
    pub fn add(&mut self, data: T, vertex_id: VertexId) {
        self.data_to_id.insert(data, vertex_id);
    }

    /// 通过数据查找顶点
    pub fn get(&self, data: &T) -> Option<VertexId> {
        self.data_to_id.get(data).copied()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.data_to_id.contains_key(data)
    }

    /// 移除顶点
    pub fn remove(&mut self, data: &T) -> Option<VertexId> {
        self.data_to_id.remove(data)
    }

    pub fn clear(&mut self) {
        self.data_to_id.clear();
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.data_to_id.len()
    }
}

impl<T: Eq + Hash> Default for VertexIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 边索引
#[derive(Default)]
pub(crate) struct EdgeIndex {
    /// 源顶点到出边的映射
    outgoing: HashMap<VertexId, IndexSet<EdgeId>>,
    /// 目标顶点到入边的映射
    incoming: HashMap<VertexId, IndexSet<EdgeId>>,
    /// (src, dst, weight) 到边 ID 的映射
    key_to_id: HashMap<EdgeKey, EdgeId>,
}

impl EdgeIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加边
    pub fn add_edge(&mut self, edge_id: EdgeId, key: EdgeKey) {
        let (src, dst, _) = key;
        self.outgoing.entry(src).or_default().insert(edge_id);
        self.incoming.entry(dst).or_default().insert(edge_id);
        self.key_to_id.insert(key, edge_id);
    }

    /// 按 (src, dst, weight) 查找边
    pub fn find(&self, key: &EdgeKey) -> Option<EdgeId> {
        self.key_to_id.get(key).copied()
    }

    /// 获取顶点的出边
    pub fn get_outgoing(&self, vertex_id: VertexId) -> Vec<EdgeId> {
        self.outgoing
            .get(&vertex_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// 获取顶点的入边
    pub fn get_incoming(&self, vertex_id: VertexId) -> Vec<EdgeId> {
        self.incoming
            .get(&vertex_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// 获取与顶点相连的所有边（按插入顺序，自环只出现一次）
    pub fn get_incident(&self, vertex_id: VertexId) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self.get_outgoing(vertex_id);
        ids.extend(self.get_incoming(vertex_id));
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// 移除边
    pub fn remove(&mut self, edge_id: EdgeId, key: &EdgeKey) {
        let (src, dst, _) = *key;
        if let Some(edges) = self.outgoing.get_mut(&src) {
            edges.shift_remove(&edge_id);
        }
        if let Some(edges) = self.incoming.get_mut(&dst) {
            edges.shift_remove(&edge_id);
        }
        self.key_to_id.remove(key);
    }

    /// 移除顶点的索引项（调用方需先移除其相关边）
    pub fn remove_vertex(&mut self, vertex_id: VertexId) {
        self.outgoing.remove(&vertex_id);
        self.incoming.remove(&vertex_id);
    }

    pub fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
        self.key_to_id.clear();
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.key_to_id.len()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex_id: VertexId) -> usize {
        self.outgoing.get(&vertex_id).map(|s| s.len()).unwrap_or(0)
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex_id: VertexId) -> usize {
        self.incoming.get(&vertex_id).map(|s| s.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_index() {
        let mut index = VertexIndex::new();
        let vid = VertexId::new(1);

        index.add("A".to_string(), vid);

        assert_eq!(index.get(&"A".to_string()), Some(vid));
        assert!(!index.contains(&"B".to_string()));
        assert_eq!(index.remove(&"A".to_string()), Some(vid));
        assert_eq!(index.vertex_count(), 0);
    }

    #[test]
    fn test_edge_index() {
        let mut index = EdgeIndex::new();
        let src = VertexId::new(100);
        let dst = VertexId::new(200);
        let e1 = EdgeId::new(1);
        let e2 = EdgeId::new(2);

        index.add_edge(e1, (src, dst, Some(3)));
        index.add_edge(e2, (dst, src, None));

        assert_eq!(index.get_outgoing(src), vec![e1]);
        assert_eq!(index.get_incoming(dst), vec![e1]);
        assert_eq!(index.get_incident(src), vec![e1, e2]);
        assert_eq!(index.find(&(src, dst, Some(3))), Some(e1));
        assert_eq!(index.find(&(src, dst, None)), None);
        assert_eq!(index.out_degree(src), 1);
        assert_eq!(index.in_degree(src), 1);

        index.remove(e1, &(src, dst, Some(3)));
        assert_eq!(index.edge_count(), 1);
        assert!(index.get_outgoing(src).is_empty());
        assert_eq!(index.get_incident(src), vec![e2]);
    }

    #[test]
    fn test_self_loop_incident_once() {
        let mut index = EdgeIndex::new();
        let v = VertexId::new(1);
        let e = EdgeId::new(1);
        index.add_edge(e, (v, v, None));
        assert_eq!(index.get_incident(v), vec![e]);
    }
}
