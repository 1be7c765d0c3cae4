//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::algorithm::{ShortestPaths, SpanningForest, TraversalResult};
use crate::graph::Graph;
use crate::types::{Distance, INFINITY};
use prettytable::{format, row, Cell, Row, Table};
use std::fmt;
use std::hash::Hash;

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

/// 距离的展示形式，哨兵值显示为 ∞
pub fn format_distance(distance: Distance) -> String {
    if distance == INFINITY {
        "∞".to_string()
    } else {
        distance.to_string()
    }
}

fn format_optional<T: fmt::Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印通用结果
    pub fn print_result(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}\n{} row(s) in set\n", output, rows.len())
    }

    /// 打印遍历着色
    pub fn print_traversal<T: fmt::Display>(&self, result: &TraversalResult<T>) -> String {
        let columns = columns(&["Vertex", "Color", "Predecessor"]);
        let rows: Vec<Vec<String>> = result
            .vertices
            .iter()
            .zip(&result.colors)
            .zip(&result.predecessors)
            .map(|((v, c), p)| vec![v.to_string(), c.to_string(), format_optional(p.as_ref())])
            .collect();

        let order: Vec<String> = result.discovery_order.iter().map(|v| v.to_string()).collect();
        format!(
            "{}Discovery order: {}\n",
            self.print_result(&columns, &rows),
            order.join(" ")
        )
    }

    /// 打印最短路径
    pub fn print_shortest_paths<T>(&self, paths: &ShortestPaths<T>) -> String
    where
        T: fmt::Display + Clone + Eq + Hash,
    {
        let columns = columns(&["Vertex", "Distance", "Predecessor", "Path"]);
        let rows: Vec<Vec<String>> = paths
            .vertices
            .iter()
            .zip(&paths.distances)
            .zip(&paths.predecessors)
            .map(|((v, d), p)| {
                let path = paths
                    .path_to(v)
                    .map(|p| p.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" -> "))
                    .unwrap_or_else(|| "-".to_string());
                vec![v.to_string(), format_distance(*d), format_optional(p.as_ref()), path]
            })
            .collect();

        format!("Root: {}\n{}", paths.root, self.print_result(&columns, &rows))
    }

    /// 打印最小生成树
    pub fn print_spanning_forest<T: fmt::Display>(&self, forest: &SpanningForest<T>) -> String {
        let columns = columns(&["Source", "Target", "Weight"]);
        let rows: Vec<Vec<String>> = forest
            .edges
            .iter()
            .map(|e| {
                vec![
                    e.source.to_string(),
                    e.target.to_string(),
                    format_optional(e.weight.as_ref()),
                ]
            })
            .collect();

        let kind = if forest.is_spanning_tree() {
            "spanning tree".to_string()
        } else {
            format!("spanning forest ({} components)", forest.component_count())
        };
        format!(
            "{}Total weight: {} ({})\n",
            self.print_result(&columns, &rows),
            forest.total_weight,
            kind
        )
    }

    /// 打印邻接表，每行形如 `0: -> 1 -> 2`
    pub fn print_adjacency<T>(&self, graph: &Graph<T>) -> String
    where
        T: fmt::Display + fmt::Debug + Clone + Eq + Hash,
    {
        let mut output = String::new();
        for vertex in graph.vertices() {
            output.push_str(&format!("{}:", vertex.data()));
            for (to, edge) in graph.adjacent_edges(vertex.id()) {
                if let Some(data) = graph.data_of(to) {
                    match edge.weight() {
                        Some(w) => output.push_str(&format!(" -> {} ({})", data, w)),
                        None => output.push_str(&format!(" -> {}", data)),
                    }
                }
            }
            output.push('\n');
        }
        output
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印图统计信息
    pub fn print_stats<T>(&self, graph: &Graph<T>) -> String
    where
        T: fmt::Debug + Clone + Eq + Hash,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Settings", graph.config().describe()]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Dijkstra, Kruskal, Traversal};

    fn sample() -> Graph<usize> {
        let mut g = Graph::with_settings(true, true);
        for v in 0..3 {
            g.add_vertex(v).unwrap();
        }
        g.put_edge(&0, &1, Some(4)).unwrap();
        g
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0), "0");
        assert_eq!(format_distance(INFINITY), "∞");
    }

    #[test]
    fn test_print_shortest_paths_renders_infinity() {
        let g = sample();
        let paths = Dijkstra::new(&g).run(&0).unwrap();
        let text = Printer::default().print_shortest_paths(&paths);

        assert!(text.contains("Root: 0"));
        assert!(text.contains('∞'));
        assert!(text.contains("0 -> 1"));
        assert!(!text.contains(&INFINITY.to_string()));
    }

    #[test]
    fn test_print_traversal_vertical() {
        let g = sample();
        let result = Traversal::new(&g).bfs(&0).unwrap();
        let text = Printer::new(PrintMode::Vertical).print_traversal(&result);

        assert!(text.contains("1. row"));
        assert!(text.contains("Discovery order: 0 1"));
        assert!(text.contains("3 row(s) in set"));
    }

    #[test]
    fn test_print_spanning_forest() {
        let g = sample();
        let forest = Kruskal::new(&g).run().unwrap();
        let text = Printer::default().print_spanning_forest(&forest);
        assert!(text.contains("Total weight: 4 (spanning forest (2 components))"));
    }

    #[test]
    fn test_print_adjacency_and_stats() {
        let g = sample();
        let printer = Printer::default();
        assert_eq!(printer.print_adjacency(&g), "0: -> 1 (4)\n1:\n2:\n");
        assert!(printer.print_stats(&g).contains("directed and weighted"));
    }

    #[test]
    fn test_empty_result() {
        let printer = Printer::default();
        assert_eq!(printer.print_result(&[], &[]), "Empty set\n");
    }
}
