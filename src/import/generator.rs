//! 随机邻接矩阵生成
//!
//! 生成测试用的矩阵文件，以及记录这些文件名的索引文件（每行一个 `adj<n>.txt`）。

use super::{read_matrix_file, write_matrix, AdjacencyMatrix};
use crate::error::{Error, Result};
use crate::types::Weight;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 索引文件名
pub const MATRIX_SET_INDEX: &str = "adjSet.txt";

/// 生成随机矩阵：对角线为 0，其余值均匀取自 `0..boundary`
pub fn generate_matrix<R: Rng>(n: usize, boundary: Weight, rng: &mut R) -> Result<AdjacencyMatrix> {
    check_boundary(boundary)?;
    let mut matrix = AdjacencyMatrix::zeros(n)?;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                matrix.set(i, j, rng.gen_range(0..boundary));
            }
        }
    }
    Ok(matrix)
}

/// 生成对称随机矩阵，适用于无向图
pub fn generate_symmetric_matrix<R: Rng>(
    n: usize,
    boundary: Weight,
    rng: &mut R,
) -> Result<AdjacencyMatrix> {
    check_boundary(boundary)?;
    let mut matrix = AdjacencyMatrix::zeros(n)?;
    for i in 0..n {
        for j in 0..i {
            let value = rng.gen_range(0..boundary);
            matrix.set(i, j, value);
            matrix.set(j, i, value);
        }
    }
    Ok(matrix)
}

/// 为每个维度生成一个 `adj<n>.txt`，并把文件名写入目录下的索引文件
pub fn write_matrix_set<R: Rng>(
    dir: &Path,
    dimensions: &[usize],
    boundary: Weight,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut names = Vec::with_capacity(dimensions.len());
    let mut paths = Vec::with_capacity(dimensions.len());
    for &n in dimensions {
        let name = format!("adj{}.txt", n);
        let path = dir.join(&name);
        write_matrix(&path, &generate_matrix(n, boundary, rng)?)?;
        names.push(name);
        paths.push(path);
    }

    let mut index = names.join("\n");
    index.push('\n');
    fs::write(dir.join(MATRIX_SET_INDEX), index)?;

    info!(dir = %dir.display(), count = paths.len(), "生成随机邻接矩阵集合");
    Ok(paths)
}

/// 读取索引文件，返回其中合法的矩阵文件路径（相对索引文件所在目录）
pub fn read_matrix_set(index_path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(index_path)?;
    let base = index_path.parent().unwrap_or_else(|| Path::new("."));

    let mut paths = Vec::new();
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_matrix_file_name(line) {
            paths.push(base.join(line));
        } else {
            warn!(entry = line, "忽略不符合 adj<n>.txt 的索引项");
        }
    }
    Ok(paths)
}

/// 依次读取索引中的所有矩阵
pub fn load_matrix_set(index_path: &Path) -> Result<Vec<(PathBuf, AdjacencyMatrix)>> {
    read_matrix_set(index_path)?
        .into_iter()
        .map(|p| read_matrix_file(&p).map(|m| (p, m)))
        .collect()
}

fn is_matrix_file_name(name: &str) -> bool {
    name.strip_prefix("adj")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn check_boundary(boundary: Weight) -> Result<()> {
    if boundary <= 0 {
        return Err(Error::InvalidInput(format!(
            "随机值上界必须为正数, 实际为 {}",
            boundary
        )));
    }
    Ok(())
}
