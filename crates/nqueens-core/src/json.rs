use serde::{Deserialize, Serialize};

/// 1つの解のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolutionJson {
    /// クイーンの数
    pub n: u32,
    /// 盤の一辺の長さ
    pub m: u32,
    /// 1行目から順に各クイーンの列（0-based）
    pub queens: Vec<u32>,
}

/// 1回の探索の集計結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSummaryJson {
    pub n: u32,
    pub m: u32,
    /// 報告した解の数
    pub solutions: u64,
    /// 実行したステップ数
    pub iterations: u64,
    /// コールバックの指示で途中停止したか
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stopped_early: bool,
}
