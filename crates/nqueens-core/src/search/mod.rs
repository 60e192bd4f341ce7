//! 探索モジュール
//!
//! 再帰を使わないバックトラッキング。`Board` の行単位配列を明示的なスタックとし、
//! `Board::step` が状態機械を1遷移ずつ進める。
//!
//! - `Transition`: 1ステップで起きた遷移
//! - `SolutionView`: 解のコールバックに渡す読み取り専用ビュー
//! - `Board::run` / `enumerate`: 終端遷移まで繰り返す
//! - `SearchStats`: 遷移の統計（`search-stats` feature 有効時のみ）
//!
//! 探索中はヒープ割り当てもネイティブのコールスタックの伸長も起きない。

mod stats;

use std::fmt;
use std::ops::ControlFlow;

use log::debug;

use crate::board::Board;
use crate::error::BoardResult;
use crate::json::SolutionJson;

#[cfg(feature = "search-stats")]
pub use stats::SearchStats;

/// 状態機械の1ステップで起きた遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// 合法な列にクイーンを置いた（k → k + 1）
    Advance,
    /// 解を報告し、探索を続ける（k → k - 1）
    SolutionContinue,
    /// 解を報告し、コールバックの指示で停止した（終端）
    SolutionStop,
    /// 合法な列が残っていないので親の行へ戻った（k → k - 1）
    Retreat,
    /// 1行目にも合法な列が残っていない（終端）
    Exhausted,
}

impl Transition {
    /// 探索がこの遷移で終わったか
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Transition::SolutionStop | Transition::Exhausted)
    }
}

/// 解のコールバックに渡す読み取り専用ビュー
///
/// 借用はコールバックの呼び出し中に限られる。次のステップで配列は上書きされるため、
/// 解を保持したい場合は `queens()` でコピーを取る。
#[derive(Clone, Copy)]
pub struct SolutionView<'a> {
    board: &'a Board,
}

impl<'a> SolutionView<'a> {
    /// 各行のクイーンの列（0-based）のコピー
    pub fn queens(&self) -> Vec<u32> {
        self.board.queens()
    }

    /// 各行のクイーンの列を割り当てなしで走査する
    pub fn columns(&self) -> impl Iterator<Item = u32> + 'a {
        self.board.columns()
    }

    /// クイーンの数（n）
    pub fn queen_count(&self) -> u32 {
        self.board.queen_count()
    }

    /// 盤の一辺の長さ（m）
    pub fn size(&self) -> u32 {
        self.board.size()
    }

    /// この解に到達するまでのステップ数
    pub fn iteration_count(&self) -> u64 {
        self.board.iteration_count()
    }

    pub fn to_json(&self) -> SolutionJson {
        SolutionJson {
            n: self.queen_count(),
            m: self.size(),
            queens: self.queens(),
        }
    }
}

impl fmt::Debug for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionView")
            .field("n", &self.queen_count())
            .field("m", &self.size())
            .field("queens", &format_args!("{}", self.board))
            .finish()
    }
}

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.board, f)
    }
}

impl Board {
    /// 状態機械を1ステップ進める
    ///
    /// 1. 全クイーン配置済みなら解としてコールバックを呼ぶ。`Break` なら停止、
    ///    `Continue` なら最後のクイーンを外して探索を続ける。
    /// 2. そうでなければ次の行の未試行の合法な列を探す。見つからなければ、
    ///    1行目なら探索空間を使い切ったので停止、それ以外は親の行へ後退する。
    /// 3. 見つかればその列に置く。
    ///
    /// どの遷移でもステップ数を1増やす。
    #[inline]
    pub fn step<F>(&mut self, on_solution: &mut F) -> Transition
    where
        F: FnMut(&SolutionView<'_>) -> ControlFlow<()>,
    {
        self.iteration += 1;
        let transition = if self.is_complete() {
            match on_solution(&SolutionView { board: self }) {
                ControlFlow::Break(()) => Transition::SolutionStop,
                ControlFlow::Continue(()) => {
                    self.undo_last();
                    Transition::SolutionContinue
                }
            }
        } else {
            match self.next_legal_column() {
                Some(column) => {
                    self.place_unchecked(column);
                    Transition::Advance
                }
                None if self.placed_count() == 0 => Transition::Exhausted,
                None => {
                    self.retreat();
                    Transition::Retreat
                }
            }
        };
        #[cfg(feature = "search-stats")]
        self.stats.record(transition, self.placed_count());
        transition
    }

    /// 終端遷移に達するまでステップを繰り返し、終端遷移を返す
    ///
    /// `SolutionStop` で止まった場合、盤は報告した解をそのまま保持している。
    pub fn run<F>(&mut self, mut on_solution: F) -> Transition
    where
        F: FnMut(&SolutionView<'_>) -> ControlFlow<()>,
    {
        debug!("search started: n={}, m={}", self.queen_count(), self.size());
        let mut solutions = 0u64;
        let mut counting = |view: &SolutionView<'_>| {
            solutions += 1;
            on_solution(view)
        };
        let last = loop {
            let transition = self.step(&mut counting);
            if transition.is_terminal() {
                break transition;
            }
        };
        debug!(
            "search finished ({last:?}): n={}, m={} => {solutions} solutions in {} iterations",
            self.queen_count(),
            self.size(),
            self.iteration_count()
        );
        last
    }

    /// 探索統計
    #[cfg(feature = "search-stats")]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// m×m の盤に n 個のクイーンを置く全ての解についてコールバックを呼ぶ
///
/// コールバックが `ControlFlow::Break(())` を返すとその場で停止する。
/// 実行したステップ数を返す。
pub fn enumerate<F>(n: u32, m: u32, on_solution: F) -> BoardResult<u64>
where
    F: FnMut(&SolutionView<'_>) -> ControlFlow<()>,
{
    let mut board = Board::new(n, m)?;
    board.run(on_solution);
    Ok(board.iteration_count())
}

/// 解の数だけを数える
///
/// `(解の数, ステップ数)` を返す。
pub fn count_solutions(n: u32, m: u32) -> BoardResult<(u64, u64)> {
    let mut solutions = 0u64;
    let iterations = enumerate(n, m, |_| {
        solutions += 1;
        ControlFlow::Continue(())
    })?;
    Ok((solutions, iterations))
}
