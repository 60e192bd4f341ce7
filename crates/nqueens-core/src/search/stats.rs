//! 探索統計（search-stats feature有効時のみ）
//!
//! 遷移の種類ごとの発生回数と、深さ別の配置回数を記録する。
//! 枝刈りの効き具合やベンチマークの比較に使用する。

#[cfg(feature = "search-stats")]
use super::Transition;
#[cfg(feature = "search-stats")]
use crate::board::ROWS;

/// 探索統計カウンタ
///
/// `search-stats` featureが有効な場合のみコンパイルされる。
#[cfg(feature = "search-stats")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// クイーンを置いた回数
    pub advances: u64,
    /// 報告した解の数（停止した解を含む）
    pub solutions: u64,
    /// 合法な列が尽きて親の行へ戻った回数
    pub retreats: u64,
    /// 深さ別の配置回数（添字 i は i 個目のクイーンを置いた回数）
    pub placements_by_depth: [u64; ROWS],
}

#[cfg(feature = "search-stats")]
impl SearchStats {
    /// 遷移を1回分記録する（`depth` は遷移後の配置済みクイーン数）
    #[inline]
    pub(crate) fn record(&mut self, transition: Transition, depth: u32) {
        match transition {
            Transition::Advance => {
                self.advances += 1;
                self.placements_by_depth[depth as usize] += 1;
            }
            Transition::SolutionContinue | Transition::SolutionStop => self.solutions += 1,
            Transition::Retreat => self.retreats += 1,
            Transition::Exhausted => {}
        }
    }

    /// 統計をリセット
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 統計をフォーマットして出力用文字列を返す
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "advances={} solutions={} retreats={}",
            self.advances, self.solutions, self.retreats
        );
        for (depth, &count) in self.placements_by_depth.iter().enumerate().skip(1) {
            if count > 0 {
                report.push_str(&format!("\n  depth {depth:2}: {count} placements"));
            }
        }
        report
    }
}
