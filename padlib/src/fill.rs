// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::unit_len;

/// Default fill text: a single space.
pub const DEFAULT_FILL: &str = " ";

/// Returns exactly `count` units made by repeating `arg_fill` and cutting the last copy
/// short. Returns an empty string if `count` is `0` or the fill is empty.
///
/// ```text
/// count: 5, fill: "xy"   ->  "xy" "xy" "x"  ->  "xyxyx"
/// count: 2, fill: "abcd" ->  "ab"
/// ```
///
/// Truncation is done on [`char`] boundaries, so a multi-byte fill is never split in the
/// middle of a code point.
#[must_use]
pub fn build_fill(count: usize, arg_fill: impl AsRef<str>) -> String {
    let fill = arg_fill.as_ref();
    if count == 0 || fill.is_empty() {
        return String::new();
    }

    let fill_len = unit_len(fill);
    let whole_copies = count / fill_len;
    let remainder = count % fill_len;

    let mut acc = String::with_capacity(
        fill.len().saturating_mul(whole_copies.saturating_add(1)),
    );
    for _ in 0..whole_copies {
        acc.push_str(fill);
    }
    acc.extend(fill.chars().take(remainder));
    acc
}
