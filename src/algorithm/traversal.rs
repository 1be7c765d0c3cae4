//! 广度 / 深度优先遍历
//!
//! 着色状态保存在每次调用独立的旁表中，不写回图。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{Color, DfsGuard};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 遍历结果
///
/// `vertices`、`colors`、`predecessors` 按图的顶点集合顺序一一对应。
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult<T> {
    /// 顶点（集合顺序）
    pub vertices: Vec<T>,
    /// 最终着色
    pub colors: Vec<Color>,
    /// 遍历树中的前驱
    pub predecessors: Vec<Option<T>>,
    /// 顶点被着为 Gray 的先后顺序
    pub discovery_order: Vec<T>,
    #[serde(skip)]
    positions: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> TraversalResult<T> {
    /// 获取顶点的最终着色
    pub fn color_of(&self, vertex: &T) -> Option<Color> {
        self.positions.get(vertex).map(|&i| self.colors[i])
    }

    /// 获取顶点的前驱
    pub fn predecessor_of(&self, vertex: &T) -> Option<&T> {
        self.positions
            .get(vertex)
            .and_then(|&i| self.predecessors[i].as_ref())
    }

    /// 所有着为 Black 的顶点
    pub fn finished(&self) -> Vec<&T> {
        self.vertices
            .iter()
            .zip(&self.colors)
            .filter(|(_, c)| **c == Color::Black)
            .map(|(v, _)| v)
            .collect()
    }
}

/// 单次遍历的着色旁表
struct VisitState {
    colors: IndexMap<VertexId, Color>,
    predecessors: HashMap<VertexId, VertexId>,
    discovery: Vec<VertexId>,
}

impl VisitState {
    fn new<T>(graph: &Graph<T>) -> Self
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        Self {
            colors: graph.vertex_ids().map(|id| (id, Color::White)).collect(),
            predecessors: HashMap::new(),
            discovery: Vec::new(),
        }
    }

    fn color(&self, id: VertexId) -> Color {
        self.colors.get(&id).copied().unwrap_or(Color::White)
    }

    fn set_color(&mut self, id: VertexId, color: Color) {
        self.colors.insert(id, color);
    }

    /// 着为 Gray 并记录发现顺序
    fn discover(&mut self, id: VertexId, predecessor: Option<VertexId>) {
        self.set_color(id, Color::Gray);
        if let Some(p) = predecessor {
            self.predecessors.insert(id, p);
        }
        self.discovery.push(id);
    }

    fn finish<T>(self, graph: &Graph<T>) -> TraversalResult<T>
    where
        T: Clone + Eq + Hash + fmt::Debug,
    {
        let data = |id: &VertexId| graph.data_of(*id).cloned();

        let mut vertices = Vec::with_capacity(self.colors.len());
        let mut colors = Vec::with_capacity(self.colors.len());
        let mut predecessors = Vec::with_capacity(self.colors.len());
        for (id, color) in &self.colors {
            if let Some(v) = data(id) {
                vertices.push(v);
                colors.push(*color);
                predecessors.push(self.predecessors.get(id).and_then(data));
            }
        }
        let positions = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        TraversalResult {
            vertices,
            colors,
            predecessors,
            discovery_order: self.discovery.iter().filter_map(data).collect(),
            positions,
        }
    }
}

/// 图遍历器
pub struct Traversal<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Traversal<'a, T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建遍历器
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 从 root 出发的广度优先搜索
    ///
    /// 可达顶点最终为 Black，其余保持 White。
    pub fn bfs(&self, root: &T) -> Result<TraversalResult<T>> {
        let root_id = self
            .graph
            .vertex_id(root)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", root)))?;

        let mut state = VisitState::new(self.graph);
        let mut queue = VecDeque::new();

        state.discover(root_id, None);
        queue.push_back(root_id);

        while let Some(u) = queue.pop_front() {
            for v in self.graph.neighbor_ids(u) {
                if state.color(v) == Color::White {
                    state.discover(v, Some(u));
                    queue.push_back(v);
                }
            }
            state.set_color(u, Color::Black);
        }

        debug!(root = ?root, reached = state.discovery.len(), "BFS 完成");
        Ok(state.finish(self.graph))
    }

    /// 深度优先搜索（只进入未访问的邻居）
    pub fn dfs(&self) -> TraversalResult<T> {
        self.dfs_with(DfsGuard::default())
    }

    /// 按指定的进入条件做深度优先搜索
    ///
    /// `DfsGuard::Finished` 下已完成的顶点会被重新进入，`discovery_order`
    /// 中同一顶点可能出现多次。每条不经过 Gray 顶点的简单路径都会被走一遍，
    /// 稠密图上的耗时随顶点数阶乘增长（完全图超过十来个顶点即不可用）。
    pub fn dfs_with(&self, guard: DfsGuard) -> TraversalResult<T> {
        let mut state = VisitState::new(self.graph);
        let roots: Vec<VertexId> = self.graph.vertex_ids().collect();

        for root in roots {
            if state.color(root) == Color::White {
                self.visit(root, guard, &mut state);
            }
        }

        debug!(?guard, entered = state.discovery.len(), "DFS 完成");
        state.finish(self.graph)
    }

    /// 以显式栈展开递归访问
    fn visit(&self, root: VertexId, guard: DfsGuard, state: &mut VisitState) {
        state.discover(root, None);
        let mut stack = vec![(root, self.graph.neighbor_ids(root), 0usize)];

        while let Some((u, neighbors, next)) = stack.last_mut() {
            let u = *u;
            match neighbors.get(*next).copied() {
                Some(v) => {
                    *next += 1;
                    if guard.admits(state.color(v)) {
                        state.discover(v, Some(u));
                        stack.push((v, self.graph.neighbor_ids(v), 0));
                    }
                }
                None => {
                    stack.pop();
                    state.set_color(u, Color::Black);
                }
            }
        }
    }
}
