//! 命令行支持
//!
//! 解析命令行上的边描述，并格式化图的输出

mod printer;

pub use printer::{PrintMode, Printer};

use crate::error::{Error, Result};

/// 解析 `O:D` 形式的边描述为索引列表
///
/// 不检查索引个数，交给 `Graph::add_edge_args` 处理
pub fn parse_indices(spec: &str) -> Result<Vec<usize>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(Error::Parse("边描述为空".to_string()));
    }

    spec.split(':')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| Error::Parse(format!("无效的顶点索引 '{}': {}", part, e)))
        })
        .collect()
}

/// 解析逗号分隔的顶点列表
pub fn parse_vertices(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indices() {
        assert_eq!(parse_indices("2:3").unwrap(), vec![2, 3]);
        assert_eq!(parse_indices(" 0 : 4 ").unwrap(), vec![0, 4]);
        assert_eq!(parse_indices("0:2:4").unwrap(), vec![0, 2, 4]);
        assert_eq!(parse_indices("7").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_indices_invalid() {
        assert!(matches!(parse_indices(""), Err(Error::Parse(_))));
        assert!(matches!(parse_indices("a:1"), Err(Error::Parse(_))));
        assert!(matches!(parse_indices("-1:2"), Err(Error::Parse(_))));
        assert!(matches!(parse_indices("1:"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_vertices() {
        assert_eq!(parse_vertices("admin, editor,viewer"), vec!["admin", "editor", "viewer"]);
        assert_eq!(parse_vertices("a,,b,"), vec!["a", "b"]);
        assert!(parse_vertices("").is_empty());
    }
}
