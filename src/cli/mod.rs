//! 命令行支持
//!
//! 结果打印与子命令执行

pub mod commands;
pub mod printer;

pub use commands::{execute, GraphCommand, OutputFormat, OutputSink};
pub use printer::{format_distance, PrintMode, Printer};
