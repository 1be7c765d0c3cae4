//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = i64;

/// 最短路径距离
pub type Distance = u64;

/// 不可达距离的哨兵值（+∞）
pub const INFINITY: Distance = Distance::MAX;

/// 无权边在最短路径与生成树中的默认权重
pub const DEFAULT_WEIGHT: Weight = 1;

/// 遍历过程中顶点的着色状态
///
/// White（未访问）→ Gray（前沿 / 处理中）→ Black（已完成）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Gray,
    Black,
}

impl Color {
    /// 单字符表示: W / G / B
    pub fn as_char(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Gray => 'G',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// DFS 递归进入邻居的条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DfsGuard {
    /// 只进入未访问（White）的邻居
    #[default]
    Unvisited,
    /// 只进入已完成（Black）的邻居，复现旧实现的行为
    Finished,
}

impl DfsGuard {
    pub(crate) fn admits(&self, color: Color) -> bool {
        match self {
            DfsGuard::Unvisited => color == Color::White,
            DfsGuard::Finished => color == Color::Black,
        }
    }
}
