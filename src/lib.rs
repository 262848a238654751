//! PermissionsGraph - 权限继承图的基础图结构
//!
//! 提供：
//! - 固定顶点序列上的有向/无向边
//! - 插入时的端点与边类型校验
//! - 连通与邻接查询、图反转、文本渲染

pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Endpoint, Error, Result};
pub use graph::{Edge, EdgeKind, Graph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
