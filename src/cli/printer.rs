//! 结果打印器
//!
//! 提供表格和垂直格式的邻接表输出

use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;

const COLUMNS: [&str; 3] = ["Index", "Vertex", "Adjacent"];

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq)]
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

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印每个顶点及其邻居
    pub fn print_adjacency<V: Display>(&self, graph: &Graph<V>) -> String {
        if graph.vertex_count() == 0 {
            return "Empty graph\n".to_string();
        }

        let rows: Vec<[String; 3]> = graph
            .entries()
            .iter()
            .enumerate()
            .map(|(i, v)| [i.to_string(), v.to_string(), join(&graph.adjacent_vertices(i))])
            .collect();

        match self.mode {
            PrintMode::Table => self.format_table(&rows),
            PrintMode::Vertical => self.format_vertical(&rows),
        }
    }

    /// 表格格式
    fn format_table(&self, rows: &[[String; 3]]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = COLUMNS.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, rows: &[[String; 3]]) -> String {
        let max_col_width = COLUMNS.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (col, value) in COLUMNS.iter().zip(row_data) {
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats<V>(&self, graph: &Graph<V>) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Kind", graph.kind().to_string()]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str> {
        let mut graph = Graph::new_directed(vec!["admin", "editor", "viewer"]);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph
    }

    #[test]
    fn test_print_vertical() {
        let output = Printer::new(PrintMode::Vertical).print_adjacency(&sample());

        assert!(output.contains("1. row"));
        assert!(output.contains("   Index: 0\n"));
        assert!(output.contains("  Vertex: admin\n"));
        assert!(output.contains("Adjacent: 1, 2\n"));
        assert!(output.contains("  Vertex: viewer\nAdjacent: \n"));
    }

    #[test]
    fn test_print_table() {
        let mut printer = Printer::default();
        let output = printer.print_adjacency(&sample());
        assert!(output.contains("editor"));
        assert!(output.contains("1, 2"));

        printer.set_mode(PrintMode::Vertical);
        assert!(printer.print_adjacency(&sample()).contains("3. row"));
    }

    #[test]
    fn test_print_empty_and_stats() {
        let empty: Graph<&str> = Graph::new(Vec::new());
        assert_eq!(Printer::default().print_adjacency(&empty), "Empty graph\n");

        let stats = Printer::default().print_stats(&sample());
        assert!(stats.contains("directed"));
        assert!(stats.contains("Edge Count"));
    }
}
