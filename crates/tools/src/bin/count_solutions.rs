use anyhow::{Result, bail};
use clap::Parser;
use tools::{format_queens, run_search};

#[derive(Parser, Debug)]
#[command(author, version, about = "(n, m)-Queens の解の数とステップ数を数える")]
struct Cli {
    /// クイーンの数
    #[arg(short = 'n', long)]
    queens: u32,

    /// 盤の一辺の長さ（未指定時はクイーンの数と同じ）
    #[arg(short = 'm', long)]
    size: Option<u32>,

    /// n = m を queens から指定値まで順に数える
    #[arg(long, conflicts_with = "size")]
    up_to: Option<u32>,

    /// この数の解を見つけたら停止する
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// 見つけた解をすべて出力する
    #[arg(long)]
    print_solutions: bool,

    /// 集計結果を1行1オブジェクトのJSONで出力する
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let boards: Vec<(u32, u32)> = match cli.up_to {
        Some(up_to) => {
            if up_to < cli.queens {
                bail!("--up-to ({up_to}) must not be less than --queens ({})", cli.queens);
            }
            (cli.queens..=up_to).map(|n| (n, n)).collect()
        }
        None => vec![(cli.queens, cli.size.unwrap_or(cli.queens))],
    };

    for (n, m) in boards {
        let report = run_search(n, m, cli.limit, |view| {
            if cli.print_solutions {
                println!("{}", format_queens(&view.queens()));
            }
        })?;
        if cli.json {
            println!("{}", serde_json::to_string(&report.to_json())?);
        } else {
            println!("{}", report.summary_line());
        }
    }
    Ok(())
}
