//! 图数据结构
//!
//! 固定的有序顶点序列加上按插入顺序保存的边集合

use super::edge::{Edge, EdgeKind};
use crate::error::{Endpoint, Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// `add_edge_args` 接受的参数个数
const EDGE_ARITY: usize = 2;

/// 图
///
/// 方向性在构造时确定，之后不可更改。图只通过索引引用顶点，从不检查顶点内容。
/// 不提供内部同步，并发修改需要调用方自行加锁。
#[derive(Debug)]
pub struct Graph<V> {
    /// 顶点序列（构造后不可变，反转出的图与原图共享）
    vertices: Arc<[V]>,
    /// 边集合，保持插入顺序，允许重复
    edges: Vec<Edge>,
    /// 是否为有向图
    directed: bool,
}

impl<V> Graph<V> {
    /// 创建无向图
    pub fn new(vertices: Vec<V>) -> Self {
        Self::with_directed(vertices, false)
    }

    /// 创建有向图
    pub fn new_directed(vertices: Vec<V>) -> Self {
        Self::with_directed(vertices, true)
    }

    /// 创建指定方向性的图
    pub fn with_directed(vertices: Vec<V>, directed: bool) -> Self {
        Self {
            vertices: vertices.into(),
            edges: Vec::new(),
            directed,
        }
    }

    /// 获取顶点序列
    pub fn entries(&self) -> &[V] {
        &self.vertices
    }

    /// 按索引获取顶点
    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 本图接受的边类型
    pub fn kind(&self) -> EdgeKind {
        EdgeKind::from_directed(self.directed)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按插入顺序获取所有边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    // ==================== 边操作 ====================

    /// 用两个顶点索引添加一条与图同类型的边
    pub fn add_edge(&mut self, origin: usize, destination: usize) -> Result<()> {
        self.insert_edge(Edge::new(self.kind(), origin, destination))
    }

    /// 添加一条已构造好的边
    ///
    /// 先校验类型，再依次校验起点和终点；失败时边集合不变
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if let Err(e) = self.validate(&edge) {
            debug!(%edge, error = %e, "拒绝添加边");
            return Err(e);
        }

        debug!(%edge, "添加边");
        self.edges.push(edge);
        Ok(())
    }

    /// 用运行时长度的索引列表添加边，列表必须恰好包含起点和终点
    pub fn add_edge_args(&mut self, args: &[usize]) -> Result<()> {
        match *args {
            [origin, destination] => self.add_edge(origin, destination),
            _ => Err(Error::InvalidArguments {
                expected: EDGE_ARITY,
                actual: args.len(),
            }),
        }
    }

    fn validate(&self, edge: &Edge) -> Result<()> {
        if edge.kind() != self.kind() {
            return Err(Error::InvalidEdgeType {
                expected: self.kind(),
                actual: edge.kind(),
            });
        }
        self.check_index(Endpoint::Origin, edge.origin())?;
        self.check_index(Endpoint::Destination, edge.destination())
    }

    fn check_index(&self, endpoint: Endpoint, index: usize) -> Result<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                endpoint,
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }

    // ==================== 连通查询 ====================

    /// 是否存在连接两个顶点的边（按本图的方向性）
    pub fn connected(&self, origin: usize, destination: usize) -> bool {
        self.edges.iter().any(|e| e.connects(origin, destination))
    }

    /// 以给定边的端点作为查询，忽略该边自身的类型
    pub fn connected_edge(&self, edge: &Edge) -> bool {
        self.connected(edge.origin(), edge.destination())
    }

    /// 获取顶点的邻居索引，按边的插入顺序
    ///
    /// 有向图只看出边；无向图两侧都算
    pub fn adjacent_vertices(&self, vertex: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|e| e.opposite(vertex))
            .collect()
    }

    /// 返回所有边反向后的新图，原图不变
    pub fn reverse(&self) -> Self {
        debug!(edges = self.edges.len(), directed = self.directed, "反转图");
        Self {
            vertices: Arc::clone(&self.vertices),
            edges: self.edges.iter().map(Edge::reversed).collect(),
            directed: self.directed,
        }
    }
}

impl<V> Clone for Graph<V> {
    fn clone(&self) -> Self {
        Self {
            vertices: Arc::clone(&self.vertices),
            edges: self.edges.clone(),
            directed: self.directed,
        }
    }
}

/// 依插入顺序拼接每条边的渲染结果，中间没有分隔符
impl<V> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}
