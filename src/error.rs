//! 错误类型定义

use crate::graph::EdgeKind;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 边的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// 起点
    Origin,
    /// 终点
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => write!(f, "起点"),
            Endpoint::Destination => write!(f, "终点"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效的{endpoint}索引: {index}（顶点数为 {vertex_count}）")]
    InvalidIndex {
        endpoint: Endpoint,
        index: usize,
        vertex_count: usize,
    },

    #[error("无效的边类型: 期望 {expected} 边, 实际为 {actual} 边")]
    InvalidEdgeType { expected: EdgeKind, actual: EdgeKind },

    #[error("参数数量错误: 期望 {expected} 个, 实际 {actual} 个")]
    InvalidArguments { expected: usize, actual: usize },

    #[error("解析错误: {0}")]
    Parse(String),
}
