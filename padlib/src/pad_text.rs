// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion of padding inputs into text. Every operation in this crate runs its input
//! through [`IntoPadText`] before measuring it, so the rules here decide what a number
//! or an absent value looks like once padded.
//!
//! | Input type                           | Text                                        |
//! | ------------------------------------ | ------------------------------------------- |
//! | `&str`, `String`, `&String`, `Cow`   | Verbatim.                                   |
//! | `char`                               | The one character string.                   |
//! | `Option<T>`                          | `None` is `""`, `Some(t)` converts `t`.     |
//! | `i8` .. `i128`, `u8` .. `u128`, etc. | Decimal, eg: `-5` is `"-5"`.                |
//! | `f32`, `f64`                         | See [`float_to_pad_text`].                  |

use std::borrow::Cow;

/// Converts a value into the text that gets measured and padded.
///
/// Implemented for the string types, [`char`], [`Option`], and the primitive numbers.
/// Implement it for your own types if they have a canonical textual form.
pub trait IntoPadText {
    fn into_pad_text(self) -> String;
}

/// Number of elementary text units (Unicode scalar values) in `text`.
#[must_use]
pub fn unit_len(text: &str) -> usize {
    // ASCII fast path.
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

impl IntoPadText for &str {
    fn into_pad_text(self) -> String { self.to_owned() }
}

impl IntoPadText for String {
    fn into_pad_text(self) -> String { self }
}

impl IntoPadText for &String {
    fn into_pad_text(self) -> String { self.clone() }
}

impl IntoPadText for Cow<'_, str> {
    fn into_pad_text(self) -> String { self.into_owned() }
}

impl IntoPadText for char {
    fn into_pad_text(self) -> String { self.to_string() }
}

impl<T: IntoPadText> IntoPadText for Option<T> {
    fn into_pad_text(self) -> String {
        match self {
            Some(it) => it.into_pad_text(),
            None => String::new(),
        }
    }
}

macro_rules! impl_into_pad_text_for_ints {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl IntoPadText for $int_type {
                fn into_pad_text(self) -> String { self.to_string() }
            }
        )*
    };
}

impl_into_pad_text_for_ints!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl IntoPadText for f64 {
    fn into_pad_text(self) -> String { float_to_pad_text(self) }
}

impl IntoPadText for f32 {
    fn into_pad_text(self) -> String {
        // Format at `f32` precision, so `0.1_f32` stays `"0.1"`.
        finish_float_text(self.to_string(), self.is_nan(), self.is_infinite())
    }
}

/// Pinned textual form of a float:
/// - Finite values use [`Display`](std::fmt::Display), which never prints an exponent,
///   plus a trailing `".0"` when there is no fractional part. So `3.0` is `"3.0"`,
///   `-0.0` is `"-0.0"`, and `2.5` is `"2.5"`.
/// - `NaN` is `"nan"`.
/// - Infinities are `"inf"` and `"-inf"`.
#[must_use]
pub fn float_to_pad_text(value: f64) -> String {
    finish_float_text(value.to_string(), value.is_nan(), value.is_infinite())
}

fn finish_float_text(display: String, is_nan: bool, is_infinite: bool) -> String {
    if is_nan {
        return "nan".into();
    }
    if is_infinite {
        return if display.starts_with('-') {
            "-inf".into()
        } else {
            "inf".into()
        };
    }
    if display.contains('.') {
        display
    } else {
        display + ".0"
    }
}
