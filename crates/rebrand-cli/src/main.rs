use anyhow::{Context, Result};
use clap::Parser;
use rebrand_core::{rewrite_tree, SOURCE_TOKEN, TARGET_TOKEN};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "rebrand", version, about = "DominoNext → Lumino 字面量重写工具")]
struct Cli {
    /// 遍历根目录（默认当前工作目录）
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    info!(root = %cli.root.display(), source = SOURCE_TOKEN, target = TARGET_TOKEN, "starting rewrite");

    let stats = rewrite_tree(&cli.root).context("rewrite failed")?;

    info!(
        files_visited = stats.files_visited,
        files_rewritten = stats.files_rewritten,
        files_skipped = stats.files_skipped,
        occurrences_replaced = stats.occurrences_replaced,
        "rewrite finished"
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
