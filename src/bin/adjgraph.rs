//! adjgraph 命令行工具
//!
//! 从邻接矩阵文件加载图并运行遍历、最短路径和最小生成树算法

use adjgraph::cli::{execute, GraphCommand, OutputFormat, OutputSink};
use adjgraph::config::GraphConfig;
use adjgraph::graph::Graph;
use adjgraph::import::{generate_symmetric_matrix, write_matrix, write_matrix_set};
use adjgraph::types::{DfsGuard, Weight};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph")]
#[command(about = "邻接表图算法工具", version)]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 显示图的统计信息和邻接表
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// 广度优先遍历
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// 起始顶点
        #[arg(short, long, default_value = "0")]
        root: usize,
    },
    /// 深度优先遍历
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// 允许重新进入已完成（Black）的顶点
        ///
        /// 稠密图上耗时随顶点数阶乘增长，只适用于很小的图
        #[arg(long)]
        reenter_finished: bool,
    },
    /// Dijkstra 单源最短路径
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,
        /// 源点
        #[arg(short, long, default_value = "0")]
        root: usize,
        /// 使用优先队列实现
        #[arg(long)]
        heap: bool,
    },
    /// Kruskal 最小生成树
    Mst {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// 生成随机邻接矩阵文件
    Generate {
        /// 输出目录
        #[arg(short, long, default_value = "./data")]
        dir: PathBuf,
        /// 矩阵维度列表，例如 3,5,8
        #[arg(short = 'n', long, value_delimiter = ',', default_value = "5")]
        dimensions: Vec<usize>,
        /// 随机值上界（不含）
        #[arg(short, long, default_value = "10")]
        boundary: Weight,
        /// 生成单个对称矩阵到指定文件（用于无向图）
        #[arg(long)]
        symmetric: Option<PathBuf>,
        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// 图加载参数
#[derive(Args, Debug)]
struct GraphArgs {
    /// 邻接矩阵文件
    #[arg(short, long)]
    input: PathBuf,

    /// 有向图
    #[arg(long)]
    directed: bool,

    /// 带权图
    #[arg(long)]
    weighted: bool,

    /// 从 JSON 文件读取图设置（覆盖 --directed / --weighted）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// 同时把结果写入文件
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 追加到输出文件而不是覆盖
    #[arg(long)]
    append: bool,
}

impl GraphArgs {
    fn graph_config(&self) -> Result<GraphConfig> {
        match &self.config {
            Some(path) => GraphConfig::from_json_file(path)
                .with_context(|| format!("无法读取配置文件 {}", path.display())),
            None => Ok(GraphConfig::new(self.directed, self.weighted)),
        }
    }

    fn load(&self) -> Result<Graph<usize>> {
        let config = self.graph_config()?;
        Graph::load_matrix_file(&self.input, config)
            .with_context(|| format!("无法加载邻接矩阵 {}", self.input.display()))
    }

    fn sink(&self) -> Result<OutputSink> {
        match &self.output {
            Some(path) => OutputSink::with_file(path, self.append)
                .with_context(|| format!("无法打开输出文件 {}", path.display())),
            None => Ok(OutputSink::new()),
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("adjgraph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("adjgraph=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_on_graph(args: &GraphArgs, command: GraphCommand) -> Result<()> {
    let graph = args.load()?;
    let report = execute(&graph, &command, args.format)?;
    args.sink()?.write_output(&report)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Show { graph } => run_on_graph(&graph, GraphCommand::Show),
        Commands::Bfs { graph, root } => run_on_graph(&graph, GraphCommand::Bfs { root }),
        Commands::Dfs {
            graph,
            reenter_finished,
        } => {
            let guard = if reenter_finished {
                DfsGuard::Finished
            } else {
                DfsGuard::Unvisited
            };
            run_on_graph(&graph, GraphCommand::Dfs { guard })
        }
        Commands::Dijkstra { graph, root, heap } => {
            run_on_graph(&graph, GraphCommand::Dijkstra { root, heap })
        }
        Commands::Mst { graph } => run_on_graph(&graph, GraphCommand::Mst),
        Commands::Generate {
            dir,
            dimensions,
            boundary,
            symmetric,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            if let Some(path) = symmetric {
                let n = dimensions.first().copied().unwrap_or(5);
                let matrix = generate_symmetric_matrix(n, boundary, &mut rng)?;
                write_matrix(&path, &matrix)
                    .with_context(|| format!("无法写入 {}", path.display()))?;
                info!(path = %path.display(), n, "已生成对称矩阵");
                return Ok(());
            }

            let paths = write_matrix_set(&dir, &dimensions, boundary, &mut rng)
                .with_context(|| format!("无法写入目录 {}", dir.display()))?;
            for path in paths {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}
