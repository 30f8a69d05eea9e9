// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{IntoPadText, TargetWidth, left_pad};

const ZERO_FILL: &str = "0";
const MINUS_SIGN: char = '-';

/// Left pads the textual form of `arg_number` with `0`s up to `arg_width`. A leading
/// `-` stays in front of the zeros and counts toward the width.
///
/// ```
/// use padlib::zero_pad;
///
/// assert_eq!(zero_pad(5, 4), "0005");
/// assert_eq!(zero_pad(-5, 4), "-005");
/// assert_eq!(zero_pad(123, 2), "123");
/// assert_eq!(zero_pad(3.5, 6), "0003.5");
/// assert_eq!(zero_pad("-42", 5), "-0042");
/// ```
///
/// The text is not checked to be numeric, the sign rule is applied to whatever
/// [`IntoPadText`] produces.
#[must_use]
pub fn zero_pad(arg_number: impl IntoPadText, arg_width: impl Into<TargetWidth>) -> String {
    let text = arg_number.into_pad_text();
    let width: TargetWidth = arg_width.into();

    match text.strip_prefix(MINUS_SIGN) {
        Some(digits) => {
            let mut acc = String::from(MINUS_SIGN);
            acc.push_str(&left_pad(digits, width.saturating_sub(1), ZERO_FILL));
            acc
        }
        None => left_pad(text, width, ZERO_FILL),
    }
}

#[cfg(test)]
mod tests_zero_pad {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(5, 4, "0005" ; "positive")]
    #[test_case(-5, 4, "-005" ; "negative")]
    #[test_case(123, 2, "123" ; "never truncates")]
    #[test_case(-123, 3, "-123" ; "negative never truncates")]
    #[test_case(0, 3, "000" ; "zero")]
    #[test_case(-5, 1, "-5" ; "negative width one")]
    #[test_case(-5, 0, "-5" ; "negative width zero")]
    #[test_case(7, -3, "7" ; "negative width")]
    #[test_case(-7, -3, "-7" ; "negative number negative width")]
    fn test_zero_pad_integers(number: i64, width: i64, expected: &str) {
        assert_eq!(zero_pad(number, width), expected);
    }

    #[test]
    fn test_zero_pad_floats() {
        assert_eq!(zero_pad(3.5, 6), "0003.5");
        assert_eq!(zero_pad(-3.5, 6), "-003.5");
        assert_eq!(zero_pad(2.0, 5), "002.0");
        assert_eq!(zero_pad(-0.0, 5), "-00.0");
    }

    #[test]
    fn test_zero_pad_strings() {
        assert_eq!(zero_pad("42", 5), "00042");
        assert_eq!(zero_pad("-42", 5), "-0042");
        assert_eq!(zero_pad("+42", 5), "00+42");
        assert_eq!(zero_pad("", 2), "00");
        assert_eq!(zero_pad("-", 3), "-00");
    }

    #[test]
    fn test_width_includes_sign() {
        for number in [-1_i64, -9, -10, -999, -12345] {
            for width in 0..10_usize {
                let padded = zero_pad(number, width);
                assert!(padded.starts_with('-'));
                assert_eq!(padded.len(), number.to_string().len().max(width));
            }
        }
    }
}
