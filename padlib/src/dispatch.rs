// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{IntoPadText, PadError, PadPosition, TargetWidth, center_pad, left_pad,
            right_pad};

/// Pads `arg_input` on the side named by `arg_position`: `"left"`, `"right"`, or
/// `"center"`. Use [`PadPosition::default`] (`"left"`) when you don't care.
///
/// ```
/// use padlib::pad;
///
/// assert_eq!(pad("x", 5, "*", "center").unwrap(), "**x**");
/// assert_eq!(pad("x", 3, "-", "right").unwrap(), "x--");
/// ```
///
/// # Errors
///
/// Returns [`PadError::InvalidArgument`] if `arg_position` isn't one of the three tags.
/// This is checked before anything else, so it fails even if no padding would be needed.
pub fn pad(
    arg_input: impl IntoPadText,
    arg_width: impl Into<TargetWidth>,
    arg_fill: impl AsRef<str>,
    arg_position: impl AsRef<str>,
) -> Result<String, PadError> {
    let tag = arg_position.as_ref();
    let position = PadPosition::try_from_tag(tag).inspect_err(|_| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🚫 Rejected pad position", position = ?tag);
    })?;
    Ok(pad_at(arg_input, arg_width, arg_fill, position))
}

/// Typed form of [`pad`]. The position has already been validated, so this can't fail.
#[must_use]
pub fn pad_at(
    arg_input: impl IntoPadText,
    arg_width: impl Into<TargetWidth>,
    arg_fill: impl AsRef<str>,
    position: PadPosition,
) -> String {
    tracing::trace!(message = "📐 Dispatch pad", position = %position);
    match position {
        PadPosition::Left => left_pad(arg_input, arg_width, arg_fill),
        PadPosition::Right => right_pad(arg_input, arg_width, arg_fill),
        PadPosition::Center => center_pad(arg_input, arg_width, arg_fill),
    }
}
