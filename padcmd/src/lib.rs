// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Library half of the `pad` binary. The binary only parses [`CliArg`], installs logging
//! with [`try_initialize_logging`], and hands stdin / stdout to [`run`]. Keeping the rest
//! here makes it testable without spawning a process.
//!
//! ```text
//! $ pad 8 42
//!       42
//! $ pad 8 -p center -f '*' hi
//! ***hi***
//! $ pad 5 -z -- -7
//! -0007
//! $ printf 'a\nbbb\n' | pad 4 -p right -f .
//! a...
//! bbb.
//! ```

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod logging;
pub mod pad_command;

// Re-export.
pub use clap_config::*;
pub use logging::*;
pub use pad_command::*;
