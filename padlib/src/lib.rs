// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # padlib
//!
//! Deterministic string padding for fixed-width text: tabular output, reports, and
//! fixed-width protocol fields.
//!
//! There are five operations, all built on one fill primitive ([`build_fill`]):
//!
//! | Operation      | Placement of the fill                                        |
//! | -------------- | ------------------------------------------------------------ |
//! | [`left_pad`]   | Before the input.                                            |
//! | [`right_pad`]  | After the input.                                             |
//! | [`center_pad`] | Split around the input, the odd unit goes to the right side. |
//! | [`pad`]        | Dispatch on a `"left"`, `"right"`, or `"center"` tag.        |
//! | [`zero_pad`]   | Leading `0`s after an optional `-` sign.                     |
//!
//! ```
//! use padlib::{center_pad, left_pad, pad, zero_pad};
//!
//! assert_eq!(left_pad("ab", 7, "xy"), "xyxyxab");
//! assert_eq!(center_pad("x", 4, "*"), "*x**");
//! assert_eq!(pad("x", 5, "*", "center").unwrap(), "**x**");
//! assert_eq!(zero_pad(-5, 4), "-005");
//! assert!(pad("x", 3, " ", "diagonal").is_err());
//! ```
//!
//! ## Units
//!
//! Lengths are counted in Unicode scalar values ([`char`]s), not bytes and not display
//! columns. `"é"` (precomposed) is one unit, an emoji is one unit, and a base letter
//! followed by a combining accent is two units. Padding never splits a `char`.
//!
//! ## Inputs
//!
//! Anything that implements [`IntoPadText`] can be padded: string types, `char`,
//! integers, floats, and `Option<T>` (where `None` is the empty string). Widths are
//! anything that converts into a [`TargetWidth`], and negative widths clamp to `0`.
//!
//! ## Errors
//!
//! Only [`pad`] can fail, when it is handed a position tag that is not one of
//! `"left"`, `"right"`, or `"center"`. See [`PadError`]. Everything else is total.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod directional;
pub mod dispatch;
pub mod fill;
pub mod pad_error;
pub mod pad_options;
pub mod pad_position;
pub mod pad_text;
pub mod target_width;
pub mod zero_pad;

// Re-export.
pub use directional::*;
pub use dispatch::*;
pub use fill::*;
pub use pad_error::*;
pub use pad_options::*;
pub use pad_position::*;
pub use pad_text::*;
pub use target_width::*;
pub use zero_pad::*;
