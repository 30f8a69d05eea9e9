// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;

use crate::PadError;

/// Where the fill goes relative to the input. The lowercase variant name is the tag that
/// [`pad`](crate::pad) accepts, eg: [`PadPosition::Center`] is `"center"`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PadPosition {
    /// Fill before the input.
    #[default]
    Left,
    /// Fill after the input.
    Right,
    /// Fill on both sides, with the odd unit after the input.
    Center,
}

impl PadPosition {
    /// Parses one of the literal tags `"left"`, `"right"`, `"center"`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidArgument`] naming `tag` if it isn't one of the three
    /// tags.
    pub fn try_from_tag(tag: &str) -> Result<Self, PadError> {
        // strum's ParseError doesn't carry the rejected value.
        <Self as FromStr>::from_str(tag).map_err(|_| PadError::invalid_position(tag))
    }

    /// All tags in declaration order.
    #[must_use]
    pub fn tags() -> Vec<&'static str> {
        Self::iter().map(|it| -> &'static str { it.into() }).collect()
    }
}
