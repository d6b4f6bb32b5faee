/// `vars` method: list the variables a template uses.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::write_vars;
use crate::request::ClientError;
use crate::service::DocumentService;

/// Run `doccli -m vars`.
///
/// # Errors
///
/// Returns `ClientError::Service` when the query fails.
pub fn run(
    template: &Path,
    prefix: Option<&str>,
    service: &dyn DocumentService,
    ctx: &OutputCtx,
) -> Result<(), ClientError> {
    let _t = ctx.timer("vars");
    let listing = service.vars(template, prefix)?;
    write_vars(&listing, ctx);
    Ok(())
}
