// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three directional primitives. They share one contract:
//!
//! 1. The input is converted with [`IntoPadText`] (absent input is `""`).
//! 2. An empty fill means no padding is possible, so the input comes back unchanged.
//! 3. If the input is already at least `width` units long it comes back unchanged. These
//!    functions only ever extend, they never truncate.
//! 4. Otherwise the missing units are built with [`build_fill`] and placed before, after,
//!    or around the input.
//!
//! Here's where the fill goes for `"ab"` padded to `7` with `"xy"`:
//!
//! ```text
//! left_pad   │xyxyxab│
//! right_pad  │abxyxyx│
//! center_pad │xyabxyx│  <- floor(5/2) = 2 before, ceil(5/2) = 3 after
//! ```

use crate::{IntoPadText, TargetWidth, build_fill, unit_len};

/// Prepends fill so the result is at least `arg_width` units wide.
///
/// ```
/// use padlib::{DEFAULT_FILL, left_pad};
///
/// assert_eq!(left_pad("42", 5, DEFAULT_FILL), "   42");
/// assert_eq!(left_pad("ab", 7, "xy"), "xyxyxab");
/// assert_eq!(left_pad("toolong", 3, "*"), "toolong");
/// assert_eq!(left_pad(None::<&str>, 2, "-"), "--");
/// ```
#[must_use]
pub fn left_pad(
    arg_input: impl IntoPadText,
    arg_width: impl Into<TargetWidth>,
    arg_fill: impl AsRef<str>,
) -> String {
    let input = arg_input.into_pad_text();
    let fill = arg_fill.as_ref();
    match padding_needed(&input, arg_width.into(), fill) {
        0 => input,
        count => {
            let mut acc = build_fill(count, fill);
            acc.push_str(&input);
            acc
        }
    }
}

/// Appends fill so the result is at least `arg_width` units wide.
///
/// ```
/// use padlib::right_pad;
///
/// assert_eq!(right_pad("name", 8, "."), "name....");
/// ```
#[must_use]
pub fn right_pad(
    arg_input: impl IntoPadText,
    arg_width: impl Into<TargetWidth>,
    arg_fill: impl AsRef<str>,
) -> String {
    let mut input = arg_input.into_pad_text();
    let fill = arg_fill.as_ref();
    match padding_needed(&input, arg_width.into(), fill) {
        0 => input,
        count => {
            input.push_str(&build_fill(count, fill));
            input
        }
    }
}

/// Splits the fill around the input. When the amount of fill is odd, the extra unit goes
/// on the right.
///
/// ```
/// use padlib::center_pad;
///
/// assert_eq!(center_pad("x", 5, "*"), "**x**");
/// assert_eq!(center_pad("x", 4, "*"), "*x**");
/// ```
#[must_use]
pub fn center_pad(
    arg_input: impl IntoPadText,
    arg_width: impl Into<TargetWidth>,
    arg_fill: impl AsRef<str>,
) -> String {
    let input = arg_input.into_pad_text();
    let fill = arg_fill.as_ref();
    match padding_needed(&input, arg_width.into(), fill) {
        0 => input,
        count => {
            let left_count = count / 2;
            let right_count = count - left_count;
            let mut acc = build_fill(left_count, fill);
            acc.push_str(&input);
            acc.push_str(&build_fill(right_count, fill));
            acc
        }
    }
}

/// `0` means "return the input as is", either because there's nothing to pad with or
/// because the input is already wide enough.
fn padding_needed(input: &str, width: TargetWidth, fill: &str) -> usize {
    if fill.is_empty() {
        return 0;
    }
    width.padding_needed_for(unit_len(input))
}
