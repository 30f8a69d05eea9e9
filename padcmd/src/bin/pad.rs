// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use padcmd::{CLIArg, LoggingConfig, run, try_initialize_logging};

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    try_initialize_logging(LoggingConfig::from(&cli_arg.global_options))?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    run(&cli_arg, stdin, stdout)?;

    tracing::debug!(message = "Stop logging...");

    Ok(())
}
