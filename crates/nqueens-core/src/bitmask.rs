//! ビットマスク操作
//!
//! 盤の1行分の列集合を `u32` の下位ビットで表現し、探索に必要な
//! ビット走査を提供する。すべて状態を持たない純粋関数で、割り当ても行わない。
//!
//! - `bit_for`: 指定インデックスのビットだけを立てたマスク
//! - `ones_in_range`: `[from, to)` のビットを立てたマスク
//! - `first_one_bit` / `first_zero_bit`: フィールド内の最下位の 1 / 0 ビット
//! - `to_bit_string` / `from_bit_string`: LSB 先頭の文字列表現（診断用）
//!
//! フィールド幅は最大 `MAX_FIELD_BITS`（31）。符号なし整数で扱うため、
//! フィールド外の上位ビットの値は結果に影響しない。

/// 列集合を表すビットマスク
pub type Mask = u32;

/// フィールド幅の上限（ワード幅 - 1）
pub const MAX_FIELD_BITS: u32 = Mask::BITS - 1;

/// `index` 番目のビットだけを立てたマスクを返す
#[inline]
pub const fn bit_for(index: u32) -> Mask {
    debug_assert!(index < MAX_FIELD_BITS);
    1 << index
}

/// `[from_bit, to_bit)` のビットを立てたマスクを返す
#[inline]
pub const fn ones_in_range(from_bit: u32, to_bit: u32) -> Mask {
    debug_assert!(from_bit <= to_bit && to_bit <= MAX_FIELD_BITS);
    ((1 << (to_bit - from_bit)) - 1) << from_bit
}

/// `mask` の下位 `nr_bits` ビットのうち、最下位の 1 ビットの位置を返す
///
/// フィールド内に 1 ビットがなければ `None`。
#[inline]
pub const fn first_one_bit(mask: Mask, nr_bits: u32) -> Option<u32> {
    debug_assert!(nr_bits <= MAX_FIELD_BITS);
    let field = mask & ones_in_range(0, nr_bits);
    if field == 0 {
        None
    } else {
        Some(field.trailing_zeros())
    }
}

/// `nr_bits` 幅のフィールドで、位置 `from_bit` 以上の最下位の 0 ビットを返す
///
/// フィールドを反転し `from_bit` 未満を落としてから `first_one_bit` で探す。
/// `from_bit == nr_bits`（走査範囲が空）の場合は `None`。
#[inline]
pub const fn first_zero_bit(mask: Mask, nr_bits: u32, from_bit: u32) -> Option<u32> {
    debug_assert!(from_bit <= nr_bits && nr_bits <= MAX_FIELD_BITS);
    let effective = nr_bits - from_bit;
    if effective == 0 {
        return None;
    }
    match first_one_bit(!(mask >> from_bit) & ones_in_range(0, effective), effective) {
        Some(index) => Some(index + from_bit),
        None => None,
    }
}

/// 下位 `nr_bits` ビットを LSB から順に '0' / '1' で並べた文字列を返す（診断用）
pub fn to_bit_string(mask: Mask, nr_bits: u32) -> String {
    debug_assert!(nr_bits <= MAX_FIELD_BITS);
    (0..nr_bits)
        .map(|bit| if mask & (1 << bit) != 0 { '1' } else { '0' })
        .collect()
}

/// `to_bit_string` の逆変換
///
/// '0' / '1' 以外の文字を含む場合、または長さが `MAX_FIELD_BITS` を超える場合は `None`。
pub fn from_bit_string(s: &str) -> Option<Mask> {
    if s.len() > MAX_FIELD_BITS as usize {
        return None;
    }
    s.bytes().enumerate().try_fold(0, |mask, (bit, c)| match c {
        b'0' => Some(mask),
        b'1' => Some(mask | (1 << bit)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1ビットずつ調べる素朴な実装（オラクル）
    fn first_zero_bit_linear(mask: Mask, nr_bits: u32, from_bit: u32) -> Option<u32> {
        (from_bit..nr_bits).find(|&bit| mask & (1 << bit) == 0)
    }

    fn first_one_bit_linear(mask: Mask, nr_bits: u32) -> Option<u32> {
        (0..nr_bits).find(|&bit| mask & (1 << bit) != 0)
    }

    #[test]
    fn test_bit_for() {
        assert_eq!(bit_for(0), 1);
        assert_eq!(bit_for(1), 2);
        assert_eq!(bit_for(2), 4);
        assert_eq!(bit_for(3), 8);
        assert_eq!(bit_for(15), 32768);
        assert_eq!(bit_for(30), 1_073_741_824);
    }

    #[test]
    fn test_ones_in_range() {
        for i in 0..=MAX_FIELD_BITS {
            assert_eq!(ones_in_range(i, i), 0);
        }
        assert_eq!(ones_in_range(0, 1), bit_for(0));
        assert_eq!(ones_in_range(1, 3), bit_for(1) | bit_for(2));
        assert_eq!(ones_in_range(0, 31), i32::MAX as Mask);
    }

    #[test]
    fn test_first_one_bit() {
        assert_eq!(first_one_bit(0, 31), None);
        assert_eq!(first_one_bit(1, 31), Some(0));
        assert_eq!(first_one_bit(bit_for(2) | bit_for(30), 31), Some(2));
        for i in 0..31 {
            assert_eq!(first_one_bit(bit_for(i), 31), Some(i));
        }
        // フィールド外のビットは無視される
        assert_eq!(first_one_bit(bit_for(5), 5), None);
    }

    #[test]
    fn test_first_zero_bit() {
        let nr_bits = 2;
        assert_eq!(first_zero_bit(0, nr_bits, 0), Some(0));
        assert_eq!(first_zero_bit(0, nr_bits, 1), Some(1));
        assert_eq!(first_zero_bit(0, nr_bits, 2), None);
        assert_eq!(first_zero_bit(2, nr_bits, 0), Some(0));
        assert_eq!(first_zero_bit(2, nr_bits, 1), None);
        assert_eq!(first_zero_bit(3, nr_bits, 0), None);
        assert_eq!(first_zero_bit(3, 8, 0), Some(2));
    }

    #[test]
    fn test_first_zero_bit_matches_linear_scan() {
        for nr_bits in 1..=10 {
            for mask in 0..(1 << nr_bits) {
                for from_bit in 0..=nr_bits {
                    assert_eq!(
                        first_zero_bit(mask, nr_bits, from_bit),
                        first_zero_bit_linear(mask, nr_bits, from_bit),
                        "mask={mask:#b}, nr_bits={nr_bits}, from_bit={from_bit}"
                    );
                }
                assert_eq!(
                    first_one_bit(mask, nr_bits),
                    first_one_bit_linear(mask, nr_bits),
                    "mask={mask:#b}, nr_bits={nr_bits}"
                );
            }
        }
    }

    /// 上位ビット（i32 として見たときの符号ビットを含む）が結果に影響しないこと
    #[test]
    fn test_scan_ignores_bits_above_field() {
        let high = !ones_in_range(0, 10);
        for mask in 0..(1 << 10) {
            for from_bit in 0..=10 {
                assert_eq!(
                    first_zero_bit(mask | high, 10, from_bit),
                    first_zero_bit(mask, 10, from_bit)
                );
            }
            assert_eq!(first_one_bit(mask | high, 10), first_one_bit(mask, 10));
        }
        // 全ビットが立ったフィールドは「空」と誤認されない
        assert_eq!(first_one_bit(Mask::MAX, 31), Some(0));
        assert_eq!(first_zero_bit(Mask::MAX, 31, 0), None);
        assert_eq!(first_zero_bit(ones_in_range(0, 31), 31, 3), None);
    }

    #[test]
    fn test_to_bit_string() {
        assert_eq!(to_bit_string(0, 1), "0");
        assert_eq!(to_bit_string(1, 1), "1");
        assert_eq!(to_bit_string(0, 2), "00");
        assert_eq!(to_bit_string(1, 2), "10");
        assert_eq!(to_bit_string(2, 2), "01");
        assert_eq!(to_bit_string(3, 2), "11");
        assert_eq!(to_bit_string(0, 0), "");
    }

    #[test]
    fn test_bit_string_reparse_truncates_to_field() {
        for nr_bits in 0..=8 {
            for mask in [0, 1, 0b1010_0101, 0xFFFF, Mask::MAX] {
                let s = to_bit_string(mask, nr_bits);
                assert_eq!(s.len(), nr_bits as usize);
                assert_eq!(from_bit_string(&s), Some(mask & ones_in_range(0, nr_bits)));
            }
        }
    }

    #[test]
    fn test_from_bit_string_rejects_invalid() {
        assert_eq!(from_bit_string("01x"), None);
        assert_eq!(from_bit_string(&"1".repeat(32)), None);
        assert_eq!(from_bit_string(&"1".repeat(31)), Some(ones_in_range(0, 31)));
    }
}
