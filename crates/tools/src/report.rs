//! 探索結果の集計と出力

use std::ops::ControlFlow;

use anyhow::{Context, Result};
use nqueens_core::json::SearchSummaryJson;
use nqueens_core::{Board, SolutionView, Transition};

/// 1回の探索の集計結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// クイーンの数
    pub n: u32,
    /// 盤の一辺の長さ
    pub m: u32,
    /// 報告された解の数
    pub solutions: u64,
    /// 実行したステップ数
    pub iterations: u64,
    /// 解の数の上限に達して途中停止したか
    pub stopped_early: bool,
    /// 最初に見つかった解
    pub first: Option<Vec<u32>>,
}

impl SearchReport {
    /// `n=8, m=8 => 92 solutions in <ステップ数> iterations` 形式の1行
    pub fn summary_line(&self) -> String {
        format!(
            "n={}, m={} => {} solution{} in {} iterations",
            self.n,
            self.m,
            self.solutions,
            if self.solutions == 1 { "" } else { "s" },
            self.iterations
        )
    }

    pub fn to_json(&self) -> SearchSummaryJson {
        SearchSummaryJson {
            n: self.n,
            m: self.m,
            solutions: self.solutions,
            iterations: self.iterations,
            stopped_early: self.stopped_early,
        }
    }
}

/// (n, m) の探索を実行し、各解について `on_solution` を呼ぶ
///
/// `limit` を指定すると、その数の解を報告した時点で停止する。
pub fn run_search<F>(n: u32, m: u32, limit: Option<u64>, mut on_solution: F) -> Result<SearchReport>
where
    F: FnMut(&SolutionView<'_>),
{
    let mut board = Board::new(n, m).with_context(|| format!("invalid board n={n}, m={m}"))?;
    let mut solutions = 0u64;
    let mut first = None;
    let last = board.run(|view| {
        solutions += 1;
        if first.is_none() {
            first = Some(view.queens());
        }
        on_solution(view);
        if limit.is_some_and(|limit| solutions >= limit) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    log::debug!("n={n}, m={m}: last transition {last:?}");

    #[cfg(feature = "search-stats")]
    log::info!("n={n}, m={m}: {}", board.stats().format_report());

    Ok(SearchReport {
        n,
        m,
        solutions,
        iterations: board.iteration_count(),
        stopped_early: last == Transition::SolutionStop,
        first,
    })
}

/// 解をカンマ区切りの列リストとして整形する
pub fn format_queens(queens: &[u32]) -> String {
    let columns: Vec<String> = queens.iter().map(u32::to_string).collect();
    format!("[{}]", columns.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let report = run_search(8, 8, None, |_| {}).unwrap();
        assert_eq!(report.solutions, 92);
        assert!(!report.stopped_early);
        assert_eq!(
            report.summary_line(),
            format!("n=8, m=8 => 92 solutions in {} iterations", report.iterations)
        );
    }

    #[test]
    fn test_summary_line_singular() {
        let report = run_search(1, 1, None, |_| {}).unwrap();
        assert_eq!(report.summary_line(), "n=1, m=1 => 1 solution in 3 iterations");
        assert_eq!(report.first, Some(vec![0]));
    }

    #[test]
    fn test_limit_stops_search() {
        let mut seen = 0;
        let report = run_search(8, 8, Some(3), |_| seen += 1).unwrap();
        assert_eq!(seen, 3);
        assert_eq!(report.solutions, 3);
        assert!(report.stopped_early);
        assert!(report.to_json().stopped_early);
        assert_eq!(report.first, Some(vec![0, 4, 7, 5, 2, 6, 1, 3]));
    }

    #[test]
    fn test_limit_larger_than_solution_count() {
        let report = run_search(4, 4, Some(5), |_| {}).unwrap();
        assert_eq!(report.solutions, 2);
        assert!(!report.stopped_early);
    }

    #[test]
    fn test_invalid_board_is_reported() {
        let err = run_search(5, 4, None, |_| {}).unwrap_err();
        assert!(err.to_string().contains("n=5, m=4"));
    }

    #[test]
    fn test_format_queens() {
        assert_eq!(format_queens(&[2, 0, 3, 1]), "[2, 0, 3, 1]");
        assert_eq!(format_queens(&[]), "[]");
    }
}
