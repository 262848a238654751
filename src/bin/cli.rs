//! PermissionsGraph CLI 工具
//!
//! 由命令行参数构造一张图并执行查询

use clap::Parser;
use permissions_graph::cli::{parse_indices, parse_vertices, PrintMode, Printer};
use permissions_graph::Graph;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "permissions-graph-cli")]
#[command(about = "PermissionsGraph 命令行工具")]
#[command(version = permissions_graph::VERSION)]
struct Args {
    /// 顶点列表，逗号分隔
    #[arg(short, long)]
    vertices: String,

    /// 构造有向图
    #[arg(short, long)]
    directed: bool,

    /// 边，格式为 起点:终点，可重复
    #[arg(short, long = "edge")]
    edges: Vec<String>,

    /// 查询两个顶点是否连通，格式为 起点:终点
    #[arg(short, long)]
    connected: Option<String>,

    /// 查询顶点的邻居
    #[arg(short, long)]
    adjacent: Option<usize>,

    /// 同时输出反转后的图
    #[arg(short, long)]
    reverse: bool,

    /// 以垂直格式输出邻接表
    #[arg(long)]
    vertical: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::with_directed(parse_vertices(&args.vertices), args.directed);

    for spec in &args.edges {
        graph.add_edge_args(&parse_indices(spec)?)?;
    }

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let printer = Printer::new(mode);

    print!("{}", printer.print_stats(&graph));
    println!("边: {}", graph);
    print!("{}", printer.print_adjacency(&graph));

    if let Some(spec) = &args.connected {
        match parse_indices(spec)?.as_slice() {
            &[origin, destination] => {
                println!(
                    "connected({}, {}) = {}",
                    origin,
                    destination,
                    graph.connected(origin, destination)
                );
            }
            other => {
                return Err(permissions_graph::Error::InvalidArguments {
                    expected: 2,
                    actual: other.len(),
                }
                .into())
            }
        }
    }

    if let Some(vertex) = args.adjacent {
        println!(
            "adjacent_vertices({}) = {:?}",
            vertex,
            graph.adjacent_vertices(vertex)
        );
    }

    if args.reverse {
        println!("反转: {}", graph.reverse());
    }

    Ok(())
}
