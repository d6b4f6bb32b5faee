/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const USAGE_EXAMPLES: &str = "\
Compile:
  doccli -t tmpl.odt -o my.pdf
  doccli -u http://123.12.12.111:8888 -f pdf -t my/tmpl.odt -d data.json -a myImage.png -a my/images/dir -o output.pdf

Print vars:
  doccli -m vars -t my/tmpl.odt -p input.";

/// doccli — compile document templates with a remote document service.
#[derive(Debug, Parser)]
#[command(
    name = "doccli",
    about = "Compile document templates with a remote document service",
    version,
    after_help = USAGE_EXAMPLES
)]
pub struct Cli {
    /// Document service URL.
    #[arg(short = 'u', long, value_name = "URL", default_value = "http://localhost:2115")]
    pub url: String,

    /// Method to run: compile or vars.
    #[arg(short = 'm', long, value_name = "METHOD", default_value = "compile")]
    pub method: String,

    /// ODT or DOCX template path. An empty value counts as missing.
    #[arg(short = 't', long, value_name = "PATH")]
    pub template: Option<String>,

    /// Result format: pdf, odt, docx or doc.
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "pdf")]
    pub format: String,

    /// JSON data file path.
    #[arg(short = 'd', long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Embed the compilation error into the returned document.
    #[arg(short = 'e', long)]
    pub embed_error: bool,

    /// Asset file or directory; repeat for more (-a file1 -a file2 -a dir1).
    #[arg(short = 'a', long = "asset", value_name = "PATH")]
    pub assets: Vec<PathBuf>,

    /// Variable prefix to filter vars.
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Output path; the format's extension is attached if the name has none.
    #[arg(short = 'o', long = "out", value_name = "PATH", default_value = "result")]
    pub out: PathBuf,

    /// How results are printed. Auto-detects: table when TTY, compact json when piped.
    #[arg(long = "print", value_name = "MODE", default_value = "auto")]
    pub print: OutputFormat,

    /// Shorthand for --print json.
    #[arg(long, conflicts_with = "print")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Log at debug level and print stage timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, compact json when piped.
    #[default]
    Auto,
    /// Pretty-printed JSON.
    Json,
    /// Compact single-line JSON.
    Compact,
    /// One value per line.
    Lines,
    /// Aligned table with headers (human-readable).
    Table,
}

/// Methods understood by `-m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Render the template into a document.
    Compile,
    /// List the template's variables.
    Vars,
}
