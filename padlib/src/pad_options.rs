// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_FILL, IntoPadText, PadPosition, TargetWidth, pad_at};

/// The fill and position to pad with, so call sites that pad many values don't have to
/// repeat them. Defaults are a single space and [`PadPosition::Left`].
///
/// Instead of a constructor with lots of arguments, anything that converts
/// [`Into<PadOptions>`] can be used, and the `with_*` methods override one field:
///
/// ```
/// use padlib::{PadOptions, PadPosition};
///
/// let options_1: PadOptions = PadPosition::Center.into();
/// let options_2: PadOptions = "-".into();
/// let options_3 = PadOptions::from("0").with_position(PadPosition::Right);
///
/// assert_eq!(options_1.apply("ab", 6), "  ab  ");
/// assert_eq!(options_2.apply("ab", 4), "--ab");
/// assert_eq!(options_3.apply(7, 3), "700");
/// assert_eq!(PadOptions::default().apply("ab", 4), "  ab");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PadOptions {
    pub fill: String,
    pub position: PadPosition,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            position: PadPosition::default(),
        }
    }
}

impl PadOptions {
    #[must_use]
    pub fn new(arg_fill: impl Into<String>, position: PadPosition) -> Self {
        Self {
            fill: arg_fill.into(),
            position,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, arg_fill: impl Into<String>) -> Self {
        self.fill = arg_fill.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: PadPosition) -> Self {
        self.position = position;
        self
    }

    /// Pads `arg_input` to `arg_width` using these options.
    #[must_use]
    pub fn apply(
        &self,
        arg_input: impl IntoPadText,
        arg_width: impl Into<TargetWidth>,
    ) -> String {
        pad_at(arg_input, arg_width, &self.fill, self.position)
    }
}

mod pad_options_conversions {
    use super::*;

    impl From<PadPosition> for PadOptions {
        fn from(position: PadPosition) -> Self {
            Self {
                position,
                ..Self::default()
            }
        }
    }

    impl From<&str> for PadOptions {
        fn from(fill: &str) -> Self {
            Self {
                fill: fill.to_string(),
                ..Self::default()
            }
        }
    }

    impl From<String> for PadOptions {
        fn from(fill: String) -> Self {
            Self {
                fill,
                ..Self::default()
            }
        }
    }
}
