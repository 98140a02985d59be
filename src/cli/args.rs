//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "schema-profiler",
    version,
    about = "Infer a record schema and enum catalog from a tab-delimited file",
    long_about = "Profile every column of a tab-delimited file with a header row.\n\n\
                  Writes one value report per column and a schema document \
                  (datatypes, enum catalog) for record-class renderers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level for the log file.
    #[arg(long = "log-level", value_enum, default_value = "info", global = true)]
    pub log_level: LogLevelArg,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "compact",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to this file (profile default: <OUTDIR>/schema-profiler.log).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile a file and write column reports plus the schema document.
    Profile(ProfileArgs),

    /// List the header columns with their derived attribute and class names.
    Headers(HeadersArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// The primary input file (.tsv).
    #[arg(long = "infile", value_name = "PATH")]
    pub infile: PathBuf,

    /// The type of the file, used to label the generated record class.
    #[arg(long = "file-type", value_name = "NAME")]
    pub file_type: String,

    /// YAML configuration file providing `max_equality_values`.
    #[arg(long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Output directory (default: <TMP>/schema-profiler/<TIMESTAMP>).
    #[arg(long = "outdir", value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Schema document format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: SchemaFormatArg,

    /// Override the configured enum threshold.
    #[arg(long = "max-equality-values", value_name = "N")]
    pub max_equality_values: Option<usize>,

    /// Print every file written.
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// The input file (.tsv).
    #[arg(long = "infile", value_name = "PATH")]
    pub infile: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaFormatArg {
    Json,
    Yaml,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
