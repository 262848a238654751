//! 边定义
//!
//! 有向边与无向边，二者共享同一组能力，按标签分派

use std::fmt;

/// 边的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Directed,
    Undirected,
}

impl EdgeKind {
    /// 由图的方向性得到对应的边类型
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, EdgeKind::Directed)
    }

    /// 渲染时端点之间的连接符
    fn connector(&self) -> &'static str {
        match self {
            EdgeKind::Directed => "->",
            EdgeKind::Undirected => "--",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Directed => write!(f, "directed"),
            EdgeKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// 边（不可变值）
///
/// 端点是顶点在图中的索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// 有向边：起点和终点的顺序有意义
    Directed { origin: usize, destination: usize },
    /// 无向边：保留插入顺序，但连通性是对称的
    Undirected { origin: usize, destination: usize },
}

impl Edge {
    /// 创建指定类型的边
    pub fn new(kind: EdgeKind, origin: usize, destination: usize) -> Self {
        match kind {
            EdgeKind::Directed => Edge::Directed {
                origin,
                destination,
            },
            EdgeKind::Undirected => Edge::Undirected {
                origin,
                destination,
            },
        }
    }

    /// 创建有向边
    pub fn directed(origin: usize, destination: usize) -> Self {
        Self::new(EdgeKind::Directed, origin, destination)
    }

    /// 创建无向边
    pub fn undirected(origin: usize, destination: usize) -> Self {
        Self::new(EdgeKind::Undirected, origin, destination)
    }

    /// 获取起点索引
    pub fn origin(&self) -> usize {
        match *self {
            Edge::Directed { origin, .. } | Edge::Undirected { origin, .. } => origin,
        }
    }

    /// 获取终点索引
    pub fn destination(&self) -> usize {
        match *self {
            Edge::Directed { destination, .. } | Edge::Undirected { destination, .. } => {
                destination
            }
        }
    }

    /// 获取边类型
    pub fn kind(&self) -> EdgeKind {
        match self {
            Edge::Directed { .. } => EdgeKind::Directed,
            Edge::Undirected { .. } => EdgeKind::Undirected,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.kind().is_directed()
    }

    /// 判断这条边是否连接 `origin` 与 `destination`
    ///
    /// 有向边要求顺序一致；无向边两种顺序都算
    pub fn connects(&self, origin: usize, destination: usize) -> bool {
        match *self {
            Edge::Directed {
                origin: o,
                destination: d,
            } => o == origin && d == destination,
            Edge::Undirected {
                origin: o,
                destination: d,
            } => (o, d) == (origin, destination) || (o, d) == (destination, origin),
        }
    }

    /// 从 `vertex` 出发经过这条边能到达的另一个端点
    ///
    /// 有向边只能从起点出发；`vertex` 不在边上时返回 `None`
    pub fn opposite(&self, vertex: usize) -> Option<usize> {
        match *self {
            Edge::Directed {
                origin,
                destination,
            } => (origin == vertex).then_some(destination),
            Edge::Undirected {
                origin,
                destination,
            } => {
                if origin == vertex {
                    Some(destination)
                } else if destination == vertex {
                    Some(origin)
                } else {
                    None
                }
            }
        }
    }

    /// 交换起点和终点，类型不变
    pub fn reversed(&self) -> Self {
        Self::new(self.kind(), self.destination(), self.origin())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.origin(),
            self.kind().connector(),
            self.destination()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let e = Edge::directed(2, 3);

        assert_eq!(e.origin(), 2);
        assert_eq!(e.destination(), 3);
        assert_eq!(e.kind(), EdgeKind::Directed);
        assert!(e.is_directed());
        assert!(!Edge::undirected(2, 3).is_directed());
        assert_eq!(Edge::new(EdgeKind::Undirected, 1, 4), Edge::undirected(1, 4));
    }

    #[test]
    fn test_directed_connects_in_order_only() {
        let e = Edge::directed(0, 4);

        assert!(e.connects(0, 4));
        assert!(!e.connects(4, 0));
        assert!(!e.connects(0, 3));
    }

    #[test]
    fn test_undirected_connects_either_order() {
        let e = Edge::undirected(0, 2);

        assert!(e.connects(0, 2));
        assert!(e.connects(2, 0));
        assert!(!e.connects(0, 1));
    }

    #[test]
    fn test_edge_opposite() {
        let d = Edge::directed(2, 0);
        assert_eq!(d.opposite(2), Some(0));
        assert_eq!(d.opposite(0), None);
        assert_eq!(d.opposite(3), None);

        let u = Edge::undirected(2, 0);
        assert_eq!(u.opposite(2), Some(0));
        assert_eq!(u.opposite(0), Some(2));
        assert_eq!(u.opposite(3), None);

        // 自环
        assert_eq!(Edge::undirected(1, 1).opposite(1), Some(1));
    }

    #[test]
    fn test_edge_reversed() {
        assert_eq!(Edge::directed(2, 4).reversed(), Edge::directed(4, 2));
        assert_eq!(Edge::undirected(2, 4).reversed(), Edge::undirected(4, 2));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::directed(2, 3).to_string(), "(2 -> 3)");
        assert_eq!(Edge::undirected(2, 3).to_string(), "(2 -- 3)");
        assert_eq!(EdgeKind::Directed.to_string(), "directed");
        assert_eq!(EdgeKind::from_directed(false), EdgeKind::Undirected);
    }
}
