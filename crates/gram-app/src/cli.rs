use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gram_config::log::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "gram-translate")]
#[command(version)]
#[command(about = "Dictionary translator for Gram Panchayat site text")]
pub struct Cli {
    /// Config file, defaults to the user config dir
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the learned words store
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Translate a single text
    Translate {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Source language, defaults to the configured one
        #[arg(long)]
        from: Option<String>,

        /// Target language, defaults to the configured one
        #[arg(long)]
        to: Option<String>,
    },

    /// Translate stdin line by line
    Batch {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },

    /// Teach the translator a new phrase
    Learn {
        #[arg(value_name = "SOURCE")]
        source: String,

        #[arg(value_name = "TARGET")]
        target: String,
    },

    /// Print the dictionary as JSON
    Dump {
        /// Only the learned entries
        #[arg(long)]
        learned: bool,
    },

    /// Answer a proxy-style JSON request read from stdin
    Request,

    /// Write the default config file to the user config dir
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
