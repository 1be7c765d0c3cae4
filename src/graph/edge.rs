//! 边定义

use crate::graph::vertex::VertexId;
use crate::types::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 边 ID（图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 边的唯一键：(源顶点, 目标顶点, 权重)
pub(crate) type EdgeKey = (VertexId, VertexId, Option<Weight>);

/// 边
///
/// 相等性只比较源、目标与权重；方向由所属图决定，不参与比较。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 源顶点 ID
    src: VertexId,
    /// 目标顶点 ID
    dst: VertexId,
    /// 权重（无权图为 None）
    weight: Option<Weight>,
    /// 是否有向（与所属图一致）
    directed: bool,
}

impl Edge {
    /// 创建新边
    pub fn new(
        id: EdgeId,
        src: VertexId,
        dst: VertexId,
        weight: Option<Weight>,
        directed: bool,
    ) -> Self {
        Self {
            id,
            src,
            dst,
            weight,
            directed,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 获取权重
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// 算法使用的权重，无权边取 1
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 边是否与顶点相连
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.src == vertex || self.dst == vertex
    }

    /// 从 `from` 出发沿此边到达的另一端
    ///
    /// 有向边只能从源顶点出发；无向边两端均可。
    pub fn other_end(&self, from: VertexId) -> Option<VertexId> {
        if self.src == from {
            Some(self.dst)
        } else if self.dst == from && !self.directed {
            Some(self.src)
        } else {
            None
        }
    }

    pub(crate) fn key(&self) -> EdgeKey {
        (self.src, self.dst, self.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        match self.weight {
            Some(w) => write!(f, "({} {} {}, {})", self.src, arrow, self.dst, w),
            None => write!(f, "({} {} {})", self.src, arrow, self.dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: u64, src: u64, dst: u64, weight: Option<Weight>, directed: bool) -> Edge {
        Edge::new(
            EdgeId::new(id),
            VertexId::new(src),
            VertexId::new(dst),
            weight,
            directed,
        )
    }

    #[test]
    fn test_edge_equality_ignores_id_and_direction() {
        assert_eq!(edge(1, 1, 2, Some(5), true), edge(9, 1, 2, Some(5), false));
        assert_ne!(edge(1, 1, 2, Some(5), true), edge(1, 1, 2, Some(6), true));
        assert_ne!(edge(1, 1, 2, None, true), edge(1, 2, 1, None, true));
    }

    #[test]
    fn test_edge_cost() {
        assert_eq!(edge(1, 1, 2, Some(7), true).cost(), 7);
        assert_eq!(edge(1, 1, 2, None, true).cost(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_other_end() {
        let directed = edge(1, 1, 2, None, true);
        assert_eq!(directed.other_end(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(directed.other_end(VertexId::new(2)), None);

        let undirected = edge(2, 1, 2, None, false);
        assert_eq!(undirected.other_end(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(undirected.other_end(VertexId::new(3)), None);
        assert!(undirected.touches(VertexId::new(2)));
    }
}
