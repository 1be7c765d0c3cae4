//! 邻接矩阵导入 / 导出
//!
//! 文本格式：第一个整数为维度 n，随后是按行优先排列、以空白分隔的 n*n 个整数。
//! 非零值表示一条以该值为权重的边，零表示无边。

mod generator;

pub use generator::{
    generate_matrix, generate_symmetric_matrix, load_matrix_set, read_matrix_set, write_matrix_set,
    MATRIX_SET_INDEX,
};

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// n×n 邻接矩阵（行优先存储）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// 由维度和 n*n 个值构造
    pub fn new(n: usize, cells: Vec<Weight>) -> Result<Self> {
        let expected = cell_count(n)?;
        if cells.len() != expected {
            return Err(Error::InvalidInput(format!(
                "期望 {} 个值 ({}x{}), 实际为 {} 个",
                expected,
                n,
                n,
                cells.len()
            )));
        }
        Ok(Self { n, cells })
    }

    /// 全零矩阵
    pub fn zeros(n: usize) -> Result<Self> {
        Ok(Self {
            n,
            cells: vec![0; cell_count(n)?],
        })
    }

    /// 由行构造，要求为方阵
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::InvalidInput(format!(
                "非方阵: 第 {} 行有 {} 个值, 期望 {} 个",
                i,
                row.len(),
                n
            )));
        }
        Ok(Self {
            n,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// 解析矩阵文本
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let header = tokens
            .next()
            .ok_or_else(|| Error::InvalidInput("输入为空，缺少矩阵维度".to_string()))?;
        let n: usize = header
            .parse()
            .map_err(|_| Error::Parse(format!("无效的矩阵维度: {}", header)))?;

        let cells = tokens
            .map(|t| {
                t.parse::<Weight>()
                    .map_err(|_| Error::Parse(format!("无效的整数值: {}", t)))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(n, cells)
    }

    /// 矩阵维度
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// 获取 (i, j) 的值
    pub fn get(&self, i: usize, j: usize) -> Option<Weight> {
        if i < self.n && j < self.n {
            Some(self.cells[i * self.n + j])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: Weight) {
        self.cells[i * self.n + j] = value;
    }

    /// 按行迭代
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.cells.chunks(self.n.max(1)).take(self.n)
    }

    /// 非零值的个数
    pub fn non_zero_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or_else(|| Error::InvalidInput(format!("矩阵维度过大: {}", n)))
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// 读取矩阵文件
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let matrix = AdjacencyMatrix::parse(&text)?;
    debug!(path = %path.display(), n = matrix.dimension(), "读取邻接矩阵");
    Ok(matrix)
}

/// 写出矩阵文件
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &AdjacencyMatrix) -> Result<()> {
    fs::write(path, matrix.to_string())?;
    Ok(())
}

impl Graph<usize> {
    /// 由邻接矩阵构建图
    ///
    /// 顶点为 `0..n`；每个非零单元 (i, j) 生成一条 i -> j 的边。
    /// 无权图不传入权重，因此不会产生权重被丢弃的诊断。
    pub fn from_matrix(matrix: &AdjacencyMatrix, config: GraphConfig) -> Result<Self> {
        let mut graph = Graph::new(config);
        let n = matrix.dimension();
        for i in 0..n {
            graph.add_vertex(i)?;
        }

        for (i, row) in matrix.rows().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0 {
                    let weight = if config.weighted { Some(value) } else { None };
                    graph.put_edge(&i, &j, weight)?;
                }
            }
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            settings = %config.describe(),
            "由邻接矩阵构建图"
        );
        Ok(graph)
    }

    /// 从矩阵文件加载图
    pub fn load_matrix_file<P: AsRef<Path>>(path: P, config: GraphConfig) -> Result<Self> {
        let matrix = read_matrix_file(path)?;
        Self::from_matrix(&matrix, config)
    }

    /// 由图的边重新导出邻接矩阵
    ///
    /// 顶点数据必须恰好为 `0..n`；无权边写为 1。权重为 0 的边，以及同一有序
    /// 顶点对上的多条边无法用矩阵表示，返回 `InvalidInput`。
    pub fn to_matrix(&self) -> Result<AdjacencyMatrix> {
        let n = self.vertex_count();
        if let Some(v) = self.vertices().find(|v| *v.data() >= n) {
            return Err(Error::InvalidInput(format!(
                "顶点 {} 超出矩阵范围 0..{}",
                v.data(),
                n
            )));
        }

        let mut matrix = AdjacencyMatrix::zeros(n)?;
        for edge in self.edges() {
            let (Some(&i), Some(&j)) = (self.data_of(edge.src()), self.data_of(edge.dst())) else {
                continue;
            };
            if edge.cost() == 0 {
                return Err(Error::InvalidInput(format!(
                    "边 ({}, {}) 的权重为 0, 矩阵中 0 表示无边",
                    i, j
                )));
            }
            if matrix.get(i, j) != Some(0) {
                return Err(Error::InvalidInput(format!("顶点对 ({}, {}) 上存在多条边", i, j)));
            }
            matrix.set(i, j, edge.cost());
        }
        Ok(matrix)
    }
}
