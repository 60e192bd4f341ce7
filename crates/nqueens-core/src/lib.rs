//! (n, m)-Queens の全解列挙エンジン
//!
//! m×m の盤（m <= 31）に互いに利きの当たらない n 個のクイーンを置く全ての解を、
//! ちょうど1回ずつコールバックへ渡す。
//!
//! 探索は再帰を使わないバックトラッキングで、行ごとの固定長配列と
//! ビット演算だけで状態を管理する。探索中はヒープ割り当てを行わない。
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! let mut solutions = 0;
//! nqueens_core::enumerate(8, 8, |_| {
//!     solutions += 1;
//!     ControlFlow::Continue(())
//! })
//! .unwrap();
//! assert_eq!(solutions, 92);
//! ```

pub mod bitmask;
pub mod board;
pub mod error;
pub mod json;
pub mod search;

pub use board::{Board, MAX_BOARD_SIZE};
pub use error::{BoardError, BoardResult, ErrorKind};
pub use search::{SolutionView, Transition, count_solutions, enumerate};
#[cfg(feature = "search-stats")]
pub use search::SearchStats;
