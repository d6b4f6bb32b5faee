/// `compile` method: render the template and write the document to disk.
use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::output::write_compile;
use crate::cli::{Cli, OutputCtx};
use crate::request::{ClientError, Format, TemplateRequest};
use crate::service::DocumentService;
use crate::types::CompileOutput;

/// Run `doccli -m compile`.
///
/// # Errors
///
/// Returns `ClientError` when an asset cannot be resolved (before any request
/// is sent), when the service call fails, or when the result cannot be
/// written. A partially written file is left in place.
pub fn run(
    args: &Cli,
    template: &Path,
    service: &dyn DocumentService,
    ctx: &OutputCtx,
) -> Result<(), ClientError> {
    let Ok(format) = args.format.parse::<Format>();
    if !format.is_known() {
        warn!(%format, "unrecognized format, the service may reject it");
    }

    let path = output_path(&args.out, &format)?;

    let t_build = ctx.timer("build_request");
    let request = TemplateRequest::build(
        format,
        args.data.as_deref(),
        template,
        &args.assets,
        args.embed_error,
    )?;
    drop(t_build);

    let t_compile = ctx.timer("compile");
    let stream = service.compile(&request)?;
    drop(t_compile);

    let t_write = ctx.timer("write_result");
    let bytes = write_stream(stream, &path)?;
    drop(t_write);

    info!(path = %path.display(), bytes, "document written");
    write_compile(
        &CompileOutput {
            path: path.display().to_string(),
            format: request.format.to_string(),
            bytes,
        },
        ctx,
    );
    Ok(())
}

/// Attach the format's extension when the output base name has no `.`.
///
/// # Errors
///
/// Returns `ClientError::Output` when `out` names a directory (`.`, `..`, a
/// trailing separator, or an existing directory) instead of a file.
pub fn output_path(out: &Path, format: &Format) -> Result<PathBuf, ClientError> {
    let raw = out.as_os_str().to_string_lossy();
    let dir_like = raw.is_empty()
        || raw.ends_with('/')
        || raw.ends_with(std::path::MAIN_SEPARATOR)
        || out.file_name().is_none()
        || out.is_dir();
    if dir_like {
        return Err(ClientError::Output {
            path: out.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "output path names a directory"),
        });
    }

    let has_extension = out
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains('.'));
    if has_extension {
        return Ok(out.to_path_buf());
    }
    let mut name = out.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    Ok(PathBuf::from(name))
}

/// Copy the whole response into `path`, truncating any previous content.
///
/// Both the stream and the file are closed when this returns, on every path.
/// A failing response body is reported apart from a failing file.
fn write_stream(stream: Box<dyn Read>, path: &Path) -> Result<u64, ClientError> {
    let output_err = |source| ClientError::Output {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_output(path).map_err(output_err)?;
    let mut body = ResponseBody {
        inner: stream,
        failed: false,
    };
    io::copy(&mut body, &mut file).map_err(|source| {
        if body.failed {
            ClientError::ResponseRead { source }
        } else {
            output_err(source)
        }
    })
}

/// Remembers whether an error came from the response side of a copy.
struct ResponseBody {
    inner: Box<dyn Read>,
    failed: bool,
}

impl Read for ResponseBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).inspect_err(|e| {
            if e.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
        })
    }
}

fn open_output(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    opts.open(path)
}
