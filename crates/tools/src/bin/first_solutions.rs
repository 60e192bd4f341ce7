use anyhow::{Context, Result, bail};
use clap::Parser;
use nqueens_core::MAX_BOARD_SIZE;
use tools::{format_queens, run_search};

#[derive(Parser, Debug)]
#[command(author, version, about = "n = m の各盤について最初に見つかる解を出力する")]
struct Cli {
    /// 最小の盤サイズ
    #[arg(long, default_value_t = 11)]
    from: u32,

    /// 最大の盤サイズ
    #[arg(long, default_value_t = MAX_BOARD_SIZE)]
    to: u32,

    /// 解をJSONで出力する
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.from > cli.to {
        bail!("--from ({}) must not be greater than --to ({})", cli.from, cli.to);
    }

    for n in cli.from..=cli.to {
        let mut first = None;
        let report = run_search(n, n, Some(1), |view| first = Some(view.to_json()))?;
        log::debug!("n = m = {n}: {} iterations", report.iterations);

        let Some(solution) = first else {
            println!("no solution for n = m = {n}");
            continue;
        };
        if cli.json {
            let line = serde_json::to_string(&solution)
                .with_context(|| format!("failed to serialize solution for n = {n}"))?;
            println!("{line}");
        } else {
            println!("first solution for n = m = {n}: {}", format_queens(&solution.queens));
        }
    }
    Ok(())
}
