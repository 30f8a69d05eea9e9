// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Deref};

/// The width a padded string should reach, in elementary text units (see
/// [`unit_len`](crate::unit_len)).
///
/// Every primitive integer converts into a [`TargetWidth`], so callers can pass whatever
/// integer type they have on hand:
/// - Negative values clamp to `0`, which means "no padding".
/// - Unsigned values too large for `usize` saturate at [`usize::MAX`].
///
/// ```
/// use padlib::TargetWidth;
///
/// assert_eq!(*TargetWidth::from(-3), 0);
/// assert_eq!(*TargetWidth::from(7_u8), 7);
/// assert_eq!(TargetWidth::from(5).saturating_sub(6), TargetWidth::from(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetWidth(usize);

#[must_use]
pub fn width(arg_width: impl Into<TargetWidth>) -> TargetWidth { arg_width.into() }

impl TargetWidth {
    #[must_use]
    pub fn new(value: usize) -> Self { Self(value) }

    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    /// Units still missing once `current_len` units are present. `0` when nothing is
    /// missing, so padding never truncates.
    #[must_use]
    pub fn padding_needed_for(&self, current_len: usize) -> usize {
        self.0.saturating_sub(current_len)
    }

    #[must_use]
    pub fn saturating_sub(&self, rhs: usize) -> Self { Self(self.0.saturating_sub(rhs)) }
}

impl Deref for TargetWidth {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Display for TargetWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

macro_rules! impl_from_signed_for_target_width {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl From<$int_type> for TargetWidth {
                fn from(value: $int_type) -> Self {
                    if value <= 0 {
                        Self(0)
                    } else {
                        Self(usize::try_from(value).unwrap_or(usize::MAX))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned_for_target_width {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl From<$int_type> for TargetWidth {
                fn from(value: $int_type) -> Self {
                    Self(usize::try_from(value).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

impl_from_signed_for_target_width!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned_for_target_width!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests_target_width {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(width(-1), width(0));
        assert_eq!(width(i64::MIN), TargetWidth::new(0));
        assert_eq!(width(-128_i8).as_usize(), 0);
    }

    #[test]
    fn test_positive_values_pass_through() {
        assert_eq!(*width(42), 42);
        assert_eq!(*width(42_u16), 42);
        assert_eq!(*width(42_isize), 42);
    }

    #[test]
    fn test_oversized_values_saturate() {
        assert_eq!(*width(u128::MAX), usize::MAX);
        assert_eq!(*width(i128::MAX), usize::MAX);
    }

    #[test]
    fn test_padding_needed_never_goes_negative() {
        assert_eq!(width(5).padding_needed_for(2), 3);
        assert_eq!(width(5).padding_needed_for(5), 0);
        assert_eq!(width(5).padding_needed_for(9), 0);
        assert_eq!(width(0).saturating_sub(1), width(0));
        assert_eq!(width(4).to_string(), "4");
    }
}
