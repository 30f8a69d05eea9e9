// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "pad")]
#[command(about = "📐 Pad text to a fixed width, on the left, right, or both sides")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
#[command(allow_negative_numbers = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(
        value_name = "WIDTH",
        help = "Target width in characters; negative values mean no padding"
    )]
    pub width: i64,

    #[arg(
        value_name = "TEXT",
        help = "Text to pad, words are joined with single spaces; each stdin line is padded when omitted"
    )]
    pub text: Vec<String>,

    #[arg(
        long,
        short = 'f',
        default_value = " ",
        help = "Fill text, repeated and truncated to fit"
    )]
    pub fill: String,

    #[arg(
        long,
        short = 'p',
        default_value = "left",
        help = "Where the fill goes: `left`, `right`, or `center`"
    )]
    pub position: String,

    #[arg(
        long,
        short = 'z',
        conflicts_with_all = ["fill", "position"],
        help = "Zero pad numerically, keeping a leading `-` in front of the zeros"
    )]
    pub zero: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log what the command does to stderr for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level that is logged when logging is enabled"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
