//! (n, m)-Queens 探索の計測・確認用ツール
//!
//! `count_solutions` / `first_solutions` バイナリが共有する集計と出力の処理。

pub mod report;

pub use report::{SearchReport, format_queens, run_search};
