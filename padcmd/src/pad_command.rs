// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write};

use miette::{Context, IntoDiagnostic};
use padlib::{PadOptions, PadPosition, zero_pad};

use crate::CLIArg;

/// What to do with each piece of text, decided once from the [`CLIArg`] before any
/// input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadMode {
    Zero,
    Fill(PadOptions),
}

impl PadMode {
    /// # Errors
    ///
    /// Returns [`padlib::PadError`] if `cli_arg.position` isn't a valid position tag.
    pub fn try_from_cli_arg(cli_arg: &CLIArg) -> miette::Result<Self> {
        if cli_arg.zero {
            return Ok(Self::Zero);
        }
        let position = PadPosition::try_from_tag(&cli_arg.position)?;
        Ok(Self::Fill(PadOptions::new(cli_arg.fill.as_str(), position)))
    }

    #[must_use]
    pub fn apply(&self, text: &str, width: i64) -> String {
        match self {
            Self::Zero => zero_pad(text, width),
            Self::Fill(options) => options.apply(text, width),
        }
    }
}

pub mod pad_command_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum PadCommandErrorCouldNot {
        #[error("🔼 Could not read line {line_number} from input")]
        ReadInputLine { line_number: usize },

        #[error("🔽 Could not write padded text to output")]
        WriteOutput,
    }
}
use pad_command_error::PadCommandErrorCouldNot;

/// Pads the text given on the command line, or every line of `input` if there was none,
/// writing one result per line to `output`.
///
/// # Errors
///
/// Returns an error if:
/// - The position tag is invalid (checked before `input` is touched).
/// - Reading a line from `input` or writing to `output` fails.
pub fn run(
    cli_arg: &CLIArg,
    input: impl BufRead,
    mut output: impl Write,
) -> miette::Result<()> {
    let mode = PadMode::try_from_cli_arg(cli_arg)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "📐 Pad mode", mode = ?mode, width = %cli_arg.width);

    if cli_arg.text.is_empty() {
        let mut line_count = 0_usize;
        for (index, line) in input.lines().enumerate() {
            let line = line
                .into_diagnostic()
                .wrap_err(PadCommandErrorCouldNot::ReadInputLine {
                    line_number: index + 1,
                })?;
            write_line(&mut output, &mode.apply(&line, cli_arg.width))?;
            line_count += 1;
        }
        tracing::debug!(message = "📐 Padded lines from input", line_count = %line_count);
    } else {
        let text = cli_arg.text.join(" ");
        write_line(&mut output, &mode.apply(&text, cli_arg.width))?;
    }

    output
        .flush()
        .into_diagnostic()
        .wrap_err(PadCommandErrorCouldNot::WriteOutput)
}

fn write_line(output: &mut impl Write, padded: &str) -> miette::Result<()> {
    writeln!(output, "{padded}")
        .into_diagnostic()
        .wrap_err(PadCommandErrorCouldNot::WriteOutput)
}
