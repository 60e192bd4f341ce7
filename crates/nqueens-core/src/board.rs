//! 盤（Board）
//!
//! n 個のクイーンを m×m の盤に置く探索の状態を保持する。
//! 各配列は行番号（= 再帰の深さ）で添字付けされ、明示的なスタックとして働く。
//! 添字 0 は空の盤、添字 i は 1..=i 行目までのクイーンを反映した値を持つ。
//!
//! 配列はすべて `MAX_BOARD_SIZE` を上限とする固定長で、構築後に
//! ヒープ割り当ても伸縮も行わない。

use std::fmt;

use crate::bitmask::{self, MAX_FIELD_BITS, Mask};
use crate::error::{BoardError, BoardResult};
#[cfg(feature = "search-stats")]
use crate::search::SearchStats;

/// 盤の一辺の最大長
pub const MAX_BOARD_SIZE: u32 = MAX_FIELD_BITS;

/// 行単位配列の長さ（添字 0 + 最大 31 行）
pub(crate) const ROWS: usize = MAX_BOARD_SIZE as usize + 1;

/// (n, m)-Queens の探索状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 置くべきクイーンの数
    n: u32,
    /// 盤の一辺の長さ
    m: u32,
    /// 配置済みのクイーンの数
    k: u32,
    /// i 行目のクイーンの列（`None` は未設定）
    queen_column: [Option<u32>; ROWS],
    /// 1..=i 行目のクイーンが占める列
    column_bit_mask: [Mask; ROWS],
    /// 1..=i 行目のクイーンの左斜め方向の利き（1行ごとに1ビット上へずれる）
    left_diagonal_bit_mask: [Mask; ROWS],
    /// 1..=i 行目のクイーンの右斜め方向の利き（1行ごとに1ビット下へずれる）
    right_diagonal_bit_mask: [Mask; ROWS],
    /// i 行目に置くクイーンが避けるべき列（i-1 行目までの利きの合併）
    coverage_bit_mask: [Mask; ROWS + 1],
    pub(crate) iteration: u64,
    #[cfg(feature = "search-stats")]
    pub(crate) stats: SearchStats,
}

impl Board {
    /// n 個のクイーンを m×m の盤に置く空の盤を作る
    ///
    /// `1 <= m <= MAX_BOARD_SIZE` かつ `1 <= n <= m` でなければエラー。
    pub fn new(n: u32, m: u32) -> BoardResult<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&m) {
            return Err(BoardError::InvalidBoardSize {
                size: m,
                max: MAX_BOARD_SIZE,
            });
        }
        if !(1..=m).contains(&n) {
            return Err(BoardError::InvalidQueenCount { queens: n, size: m });
        }
        Ok(Self {
            n,
            m,
            k: 0,
            queen_column: [None; ROWS],
            column_bit_mask: [0; ROWS],
            left_diagonal_bit_mask: [0; ROWS],
            right_diagonal_bit_mask: [0; ROWS],
            coverage_bit_mask: [0; ROWS + 1],
            iteration: 0,
            #[cfg(feature = "search-stats")]
            stats: SearchStats::default(),
        })
    }

    /// 置くべきクイーンの数（n）
    #[inline]
    pub fn queen_count(&self) -> u32 {
        self.n
    }

    /// 盤の一辺の長さ（m）
    #[inline]
    pub fn size(&self) -> u32 {
        self.m
    }

    /// 配置済みのクイーンの数（k）
    #[inline]
    pub fn placed_count(&self) -> u32 {
        self.k
    }

    /// 全クイーンが配置済みか
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.k == self.n
    }

    /// これまでに実行した探索ステップ数
    #[inline]
    pub fn iteration_count(&self) -> u64 {
        self.iteration
    }

    /// `row` 行目（1-based）のクイーンの列
    ///
    /// 未配置の行、および盤外の行は `None`。
    #[inline]
    pub fn column_of(&self, row: u32) -> Option<u32> {
        if row == 0 || row > self.k {
            return None;
        }
        self.queen_column[row as usize]
    }

    /// 配置済みのクイーンの列を1行目から順に返す（割り当てなし）
    pub fn columns(&self) -> impl Iterator<Item = u32> + '_ {
        self.queen_column[1..=self.k as usize].iter().flatten().copied()
    }

    /// 配置済みのクイーンの列（0-based）を1行目から順に並べたコピー
    ///
    /// 解の報告時は常に n 個すべてを含む。
    pub fn queens(&self) -> Vec<u32> {
        self.columns().collect()
    }

    /// 次の行（k + 1 行目）に対する利き
    #[inline]
    pub fn coverage_mask(&self) -> Mask {
        self.coverage_bit_mask[self.k as usize + 1]
    }

    /// 次の行に対する利きの文字列表現（LSB 先頭、診断用）
    pub fn coverage_bit_string(&self) -> String {
        bitmask::to_bit_string(self.coverage_mask(), self.m)
    }

    /// k + 1 行目について、まだ試していない合法な列のうち最小のものを返す
    ///
    /// 直前に試した列より右側だけを探す。未設定の行は 0 列目から探す。
    /// 残りがなければ `None`。全クイーン配置済みの場合も `None`。
    #[inline]
    pub fn next_legal_column(&self) -> Option<u32> {
        if self.k == self.n {
            return None;
        }
        let row = self.k as usize + 1;
        let from_bit = self.queen_column[row].map_or(0, |column| column + 1);
        bitmask::first_zero_bit(self.coverage_bit_mask[row], self.m, from_bit)
    }

    /// k + 1 行目の `column` にクイーンを置き、各マスクを更新する
    ///
    /// 列が利きに入っていないことは呼び出し側の責任（`next_legal_column` の結果を渡す）。
    /// 全クイーン配置済み、または盤外の列の場合はエラーで、状態は変更しない。
    pub fn place(&mut self, column: u32) -> BoardResult<()> {
        if self.k == self.n {
            return Err(BoardError::BoardFull { capacity: self.n });
        }
        if column >= self.m {
            return Err(BoardError::ColumnOutOfRange {
                column,
                size: self.m,
            });
        }
        self.place_unchecked(column);
        Ok(())
    }

    #[inline]
    pub(crate) fn place_unchecked(&mut self, column: u32) {
        debug_assert!(self.k < self.n && column < self.m);
        let prev = self.k as usize;
        let row = prev + 1;
        let queen = bitmask::bit_for(column);

        self.queen_column[row] = Some(column);
        self.column_bit_mask[row] = self.column_bit_mask[prev] | queen;
        self.left_diagonal_bit_mask[row] = (self.left_diagonal_bit_mask[prev] << 1) | queen;
        self.right_diagonal_bit_mask[row] = (self.right_diagonal_bit_mask[prev] >> 1) | queen;
        self.k += 1;
        self.coverage_bit_mask[row + 1] = self.column_bit_mask[row]
            | (self.left_diagonal_bit_mask[row] << 1)
            | (self.right_diagonal_bit_mask[row] >> 1);
    }

    /// 最後の解を記録した後の巻き戻し（列はそのまま残し、次はその右から探す）
    #[inline]
    pub(crate) fn undo_last(&mut self) {
        debug_assert!(self.k > 0);
        self.k -= 1;
    }

    /// k + 1 行目を未設定に戻し、親の行へ後退する
    #[inline]
    pub(crate) fn retreat(&mut self) {
        debug_assert!(self.k > 0 && self.k < self.n);
        self.queen_column[self.k as usize + 1] = None;
        self.k -= 1;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, column) in self.columns().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "]")
    }
}
