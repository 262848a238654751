//! 图核心模块
//!
//! 定义边和图的核心数据结构

mod edge;
mod graph;

pub use edge::{Edge, EdgeKind};
pub use graph::Graph;
