//! Dijkstra 单源最短路径
//!
//! 默认实现以线性扫描选取最小距离顶点，复杂度 O(V²)；
//! `run_with_heap` 使用优先队列，复杂度 O(E log V)，结果距离相同。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{Distance, INFINITY};
use indexmap::{IndexMap, IndexSet};
use priority_queue::PriorityQueue;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 最短路径结果
///
/// `vertices`、`distances`、`predecessors` 按图的顶点集合顺序一一对应，
/// 不可达顶点的距离为 `INFINITY`。
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<T> {
    /// 源点
    pub root: T,
    /// 顶点（集合顺序）
    pub vertices: Vec<T>,
    /// 到源点的距离
    pub distances: Vec<Distance>,
    /// 最短路径树中的前驱
    pub predecessors: Vec<Option<T>>,
    #[serde(skip)]
    positions: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> ShortestPaths<T> {
    /// 到目标顶点的距离；顶点不在图中时返回 None
    pub fn distance_to(&self, target: &T) -> Option<Distance> {
        self.positions.get(target).map(|&i| self.distances[i])
    }

    pub fn is_reachable(&self, target: &T) -> bool {
        self.distance_to(target).is_some_and(|d| d != INFINITY)
    }

    /// 获取顶点的前驱
    pub fn predecessor_of(&self, target: &T) -> Option<&T> {
        self.positions
            .get(target)
            .and_then(|&i| self.predecessors[i].as_ref())
    }

    /// 沿前驱链重构从源点到目标的路径
    pub fn path_to(&self, target: &T) -> Option<Vec<T>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.root {
            current = self.predecessor_of(current)?;
            path.push(current.clone());
            if path.len() > self.vertices.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra 最短路径求解器
pub struct Dijkstra<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Dijkstra<'a, T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建求解器
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 线性扫描版本
    ///
    /// 距离相同时选取集合顺序中第一个出现的顶点。
    pub fn run(&self, root: &T) -> Result<ShortestPaths<T>> {
        let root_id = self.prepare(root)?;
        let mut distance = self.initial_distances(root_id);
        let mut predecessor: HashMap<VertexId, VertexId> = HashMap::new();
        let mut unsettled: IndexSet<VertexId> = self.graph.vertex_ids().collect();

        while !unsettled.is_empty() {
            let mut best: Option<(VertexId, Distance)> = None;
            for &v in &unsettled {
                let d = distance.get(&v).copied().unwrap_or(INFINITY);
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((v, d));
                }
            }
            let Some((u, du)) = best else { break };
            unsettled.shift_remove(&u);

            if du == INFINITY {
                continue;
            }
            trace!(vertex = ?self.graph.data_of(u), distance = du, "确定顶点");

            for (v, edge) in self.graph.adjacent_edges(u) {
                let candidate = du.saturating_add(edge.cost() as Distance);
                if distance.get(&v).copied().unwrap_or(INFINITY) > candidate {
                    distance.insert(v, candidate);
                    predecessor.insert(v, u);
                }
            }
        }

        Ok(self.collect(root, distance, predecessor))
    }

    /// 优先队列版本
    pub fn run_with_heap(&self, root: &T) -> Result<ShortestPaths<T>> {
        let root_id = self.prepare(root)?;
        let mut distance = self.initial_distances(root_id);
        let mut predecessor: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue: PriorityQueue<VertexId, Reverse<Distance>> = PriorityQueue::new();
        queue.push(root_id, Reverse(0));

        while let Some((u, Reverse(du))) = queue.pop() {
            for (v, edge) in self.graph.adjacent_edges(u) {
                let candidate = du.saturating_add(edge.cost() as Distance);
                if distance.get(&v).copied().unwrap_or(INFINITY) > candidate {
                    distance.insert(v, candidate);
                    predecessor.insert(v, u);
                    queue.push_increase(v, Reverse(candidate));
                }
            }
        }

        Ok(self.collect(root, distance, predecessor))
    }

    /// 校验源点存在且没有负权边
    fn prepare(&self, root: &T) -> Result<VertexId> {
        let root_id = self
            .graph
            .vertex_id(root)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", root)))?;

        if let Some(edge) = self.graph.edges().find(|e| e.cost() < 0) {
            let name = |id: VertexId| {
                self.graph
                    .data_of(id)
                    .map(|d| format!("{:?}", d))
                    .unwrap_or_else(|| id.to_string())
            };
            return Err(Error::NegativeWeight {
                source_vertex: name(edge.src()),
                target_vertex: name(edge.dst()),
                weight: edge.cost(),
            });
        }

        Ok(root_id)
    }

    fn initial_distances(&self, root: VertexId) -> IndexMap<VertexId, Distance> {
        let mut distance: IndexMap<VertexId, Distance> =
            self.graph.vertex_ids().map(|id| (id, INFINITY)).collect();
        distance.insert(root, 0);
        distance
    }

    fn collect(
        &self,
        root: &T,
        distance: IndexMap<VertexId, Distance>,
        predecessor: HashMap<VertexId, VertexId>,
    ) -> ShortestPaths<T> {
        let data = |id: &VertexId| self.graph.data_of(*id).cloned();

        let mut vertices = Vec::with_capacity(distance.len());
        let mut distances = Vec::with_capacity(distance.len());
        let mut predecessors = Vec::with_capacity(distance.len());
        for (id, d) in &distance {
            if let Some(v) = data(id) {
                vertices.push(v);
                distances.push(*d);
                predecessors.push(predecessor.get(id).and_then(data));
            }
        }
        let positions = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        debug!(
            root = ?root,
            reachable = distances.iter().filter(|d| **d != INFINITY).count(),
            "最短路径计算完成"
        );

        ShortestPaths {
            root: root.clone(),
            vertices,
            distances,
            predecessors,
            positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(directed: bool, edges: &[(&'static str, &'static str, i64)]) -> Graph<&'static str> {
        let mut g = Graph::with_settings(directed, true);
        for (a, b, _) in edges {
            if !g.contains_vertex(a) {
                g.add_vertex(*a).unwrap();
            }
            if !g.contains_vertex(b) {
                g.add_vertex(*b).unwrap();
            }
        }
        for (a, b, w) in edges {
            g.put_edge(a, b, Some(*w)).unwrap();
        }
        g
    }

    #[test]
    fn test_dijkstra_directed() {
        //   S -1-> A -1-> T
        //   S ----5-----> T
        let g = weighted(true, &[("S", "A", 1), ("A", "T", 1), ("S", "T", 5)]);
        let paths = Dijkstra::new(&g).run(&"S").unwrap();

        assert_eq!(paths.distances, vec![0, 1, 2]);
        assert_eq!(paths.predecessors, vec![None, Some("S"), Some("A")]);
        assert_eq!(paths.path_to(&"T"), Some(vec!["S", "A", "T"]));
    }

    #[test]
    fn test_dijkstra_unreachable_keeps_sentinel() {
        let mut g = weighted(true, &[("A", "B", 3)]);
        g.add_vertex("C").unwrap();

        let paths = Dijkstra::new(&g).run(&"B").unwrap();
        assert_eq!(paths.distance_to(&"B"), Some(0));
        assert_eq!(paths.distance_to(&"A"), Some(INFINITY));
        assert_eq!(paths.distance_to(&"C"), Some(INFINITY));
        assert!(!paths.is_reachable(&"A"));
        assert_eq!(paths.path_to(&"A"), None);
        assert_eq!(paths.path_to(&"B"), Some(vec!["B"]));
    }

    #[test]
    fn test_dijkstra_undirected_uses_both_orientations() {
        let g = weighted(false, &[("B", "A", 2), ("C", "B", 3), ("A", "C", 10)]);
        let paths = Dijkstra::new(&g).run(&"A").unwrap();

        assert_eq!(paths.distance_to(&"C"), Some(5));
        assert_eq!(paths.predecessor_of(&"C"), Some(&"B"));
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let g = weighted(true, &[("A", "B", -1)]);
        assert!(matches!(
            Dijkstra::new(&g).run(&"A"),
            Err(Error::NegativeWeight { weight: -1, .. })
        ));
        assert!(Dijkstra::new(&g).run_with_heap(&"A").is_err());
    }

    #[test]
    fn test_dijkstra_unknown_root() {
        let g = weighted(true, &[("A", "B", 1)]);
        assert!(matches!(
            Dijkstra::new(&g).run(&"Q"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_heap_variant_matches_linear_scan() {
        let g = weighted(
            false,
            &[
                ("A", "B", 4),
                ("A", "C", 1),
                ("C", "B", 2),
                ("B", "D", 1),
                ("C", "D", 5),
                ("D", "E", 3),
                ("E", "F", 0),
            ],
        );
        let linear = Dijkstra::new(&g).run(&"A").unwrap();
        let heap = Dijkstra::new(&g).run_with_heap(&"A").unwrap();

        assert_eq!(linear.distances, heap.distances);
        assert_eq!(linear.distance_to(&"F"), Some(7));
    }

    #[test]
    fn test_sentinel_does_not_wrap() {
        let g = weighted(true, &[("A", "B", i64::MAX), ("B", "C", i64::MAX), ("C", "D", i64::MAX)]);
        let paths = Dijkstra::new(&g).run(&"A").unwrap();
        assert!(paths.distance_to(&"D").unwrap() >= paths.distance_to(&"C").unwrap());
    }
}
