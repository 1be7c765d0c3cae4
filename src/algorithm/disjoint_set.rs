//! 并查集（不相交集合）
//!
//! 按秩合并 + 路径压缩，`find` 均摊接近 O(1)。

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// 并查集
///
/// 元素必须先经 `make_set` 注册；对未注册元素调用 `find` / `union`
/// 返回 `Error::NotFound`。
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
}

impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// 注册只含 `x` 的新集合；已注册的元素保持不变
    pub fn make_set(&mut self, x: T) {
        if self.parent.contains_key(&x) {
            return;
        }
        self.parent.insert(x.clone(), x.clone());
        self.rank.insert(x, 0);
    }

    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    /// 查找 `x` 所在集合的根，并把路径上的每个节点直接挂到根下
    pub fn find(&mut self, x: &T) -> Result<T> {
        let mut root = x.clone();
        loop {
            let parent = self
                .parent
                .get(&root)
                .ok_or_else(|| Error::NotFound(format!("并查集元素 {:?}", root)))?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut current = x.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(root)
    }

    /// 合并 `x` 与 `y` 所在的集合
    ///
    /// 已在同一集合时返回 `false`。秩相同时 `y` 的根挂到 `x` 的根下。
    pub fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank.get(&root_x).copied().unwrap_or(0);
        let rank_y = self.rank.get(&root_y).copied().unwrap_or(0);

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x.clone());
            self.rank.insert(root_x, rank_x + 1);
        }

        Ok(true)
    }

    /// `x` 与 `y` 是否在同一集合
    pub fn same_set(&mut self, x: &T, y: &T) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// 直接父节点（不做路径压缩）
    pub fn parent_of(&self, x: &T) -> Option<&T> {
        self.parent.get(x)
    }

    pub fn rank_of(&self, x: &T) -> Option<u32> {
        self.rank.get(x).copied()
    }

    /// 已注册元素数量
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 当前不相交集合的数量
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(k, v)| k == v).count()
    }
}

impl<T> Default for DisjointSet<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
