// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The tags accepted by [`pad`](crate::pad), as shown to users in error messages.
pub const ACCEPTED_POSITION_TAGS: &str = "'left', 'right', or 'center'";

/// The only way padding can fail: [`pad`](crate::pad) (or one of the
/// [`PadPosition`](crate::PadPosition) parsers) got a position tag that isn't one of
/// [`ACCEPTED_POSITION_TAGS`]. Matching is case sensitive, so `"Left"` is rejected too.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum PadError {
    #[error("Invalid position: '{value}'. Must be {accepted}.", accepted = ACCEPTED_POSITION_TAGS)]
    #[diagnostic(
        code(padlib::invalid_position),
        help("Use one of the position tags: 'left', 'right', or 'center'")
    )]
    InvalidArgument { value: String },
}

impl PadError {
    #[must_use]
    pub fn invalid_position(arg_value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: arg_value.into(),
        }
    }
}
