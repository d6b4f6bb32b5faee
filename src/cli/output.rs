/// Output formatting: JSON, table and line modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use crate::service::VarListing;
use crate::types::{CompileOutput, ErrorOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Compact
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, log stage timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Vars ---

/// Write a variable listing to stdout.
pub fn write_vars(listing: &VarListing, ctx: &OutputCtx) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_vars(&mut out, listing, ctx) {
        debug!(error = %e, "stdout closed while printing vars");
    }
}

fn render_vars(out: &mut impl Write, listing: &VarListing, ctx: &OutputCtx) -> std::io::Result<()> {
    let names = match listing {
        VarListing::Raw(body) => return writeln!(out, "{body}"),
        VarListing::Names(names) => names,
    };
    match ctx.format {
        OutputFormat::Json => write_json(out, names),
        OutputFormat::Compact => write_compact_json(out, names),
        OutputFormat::Lines => {
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["VARIABLE"]);
            }
            for name in names {
                table.add_row([name.as_str()]);
            }
            writeln!(out, "{table}")
        }
    }
}

// --- Compile ---

/// Write a compile summary to stdout.
pub fn write_compile(result: &CompileOutput, ctx: &OutputCtx) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = match ctx.format {
        OutputFormat::Json => write_json(&mut out, result),
        OutputFormat::Compact => write_compact_json(&mut out, result),
        _ => writeln!(out, "{}", result.path),
    };
    if let Err(e) = written {
        debug!(error = %e, "stdout closed while printing compile summary");
    }
}

// --- Error output ---

/// Write an error to stderr: a JSON envelope in the JSON modes, `Error: …` otherwise.
///
/// Written regardless of the log filter, so a fatal error is never silent.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = render_error(&mut out, err, ctx);
}

fn render_error(out: &mut impl Write, err: &ErrorOutput, ctx: &OutputCtx) -> std::io::Result<()> {
    match ctx.format {
        OutputFormat::Compact => write_compact_json(out, err),
        OutputFormat::Json => write_json(out, err),
        _ => writeln!(out, "Error: {}", err.error.message),
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(stage = self.label, "took {ms:.2}ms");
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> std::io::Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(out, "{s}")
}

fn write_compact_json<T: Serialize + ?Sized>(
    out: &mut impl Write,
    value: &T,
) -> std::io::Result<()> {
    let s = serde_json::to_string(value).map_err(std::io::Error::other)?;
    writeln!(out, "{s}")
}
