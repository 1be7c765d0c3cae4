//! 子命令执行
//!
//! 在已加载的图上运行一个算法，并把结果渲染为表格、垂直列表或 JSON

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::printer::{PrintMode, Printer};
use crate::algorithm::{Dijkstra, Kruskal, Traversal};
use crate::error::Result;
use crate::graph::Graph;
use crate::types::DfsGuard;

/// 在图上执行的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphCommand {
    /// 显示图的统计信息和邻接表
    Show,
    /// 从 root 开始的广度优先遍历
    Bfs { root: usize },
    /// 深度优先遍历
    Dfs { guard: DfsGuard },
    /// 从 root 开始的单源最短路径
    Dijkstra { root: usize, heap: bool },
    /// 最小生成树
    Mst,
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Vertical,
    Json,
}

impl OutputFormat {
    fn printer(self) -> Printer {
        match self {
            OutputFormat::Vertical => Printer::new(PrintMode::Vertical),
            _ => Printer::new(PrintMode::Table),
        }
    }
}

/// 执行命令并返回渲染后的报告
pub fn execute(graph: &Graph<usize>, command: &GraphCommand, format: OutputFormat) -> Result<String> {
    let printer = format.printer();

    let report = match command {
        GraphCommand::Show => {
            if format == OutputFormat::Json {
                to_json(&graph_summary(graph)?)?
            } else {
                format!("{}\n{}", printer.print_stats(graph), printer.print_adjacency(graph))
            }
        }
        GraphCommand::Bfs { root } => {
            let result = Traversal::new(graph).bfs(root)?;
            render(format, &result, || printer.print_traversal(&result))?
        }
        GraphCommand::Dfs { guard } => {
            let result = Traversal::new(graph).dfs_with(*guard);
            render(format, &result, || printer.print_traversal(&result))?
        }
        GraphCommand::Dijkstra { root, heap } => {
            let solver = Dijkstra::new(graph);
            let paths = if *heap {
                solver.run_with_heap(root)?
            } else {
                solver.run(root)?
            };
            render(format, &paths, || printer.print_shortest_paths(&paths))?
        }
        GraphCommand::Mst => {
            let forest = Kruskal::new(graph).run()?;
            render(format, &forest, || printer.print_spanning_forest(&forest))?
        }
    };

    info!(command = ?command, "命令执行完成");
    Ok(report)
}

fn render<S, F>(format: OutputFormat, value: &S, table: F) -> Result<String>
where
    S: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => to_json(value),
        _ => Ok(table()),
    }
}

fn to_json<S: Serialize>(value: &S) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn graph_summary(graph: &Graph<usize>) -> Result<serde_json::Value> {
    let mut adjacency = serde_json::Map::new();
    for vertex in graph.vertices() {
        let neighbors = graph.neighborhood(vertex.data())?;
        adjacency.insert(vertex.data().to_string(), json!(neighbors));
    }

    Ok(json!({
        "config": graph.config(),
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "adjacency": adjacency,
    }))
}

/// 输出目标
///
/// 报告总是写到 stdout；设置了输出文件时同时写入文件。
#[derive(Default)]
pub struct OutputSink {
    /// 输出到文件
    pub tee_file: Option<File>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同时写入指定文件
    pub fn with_file(path: &Path, append: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self {
            tee_file: Some(file),
        })
    }

    /// 写入输出（同时写入 stdout 和 tee 文件）
    pub fn write_output(&mut self, content: &str) -> Result<()> {
        print!("{}", content);
        if let Some(ref mut file) = self.tee_file {
            file.write_all(content.as_bytes())?;
        }
        Ok(())
    }
}
