/// Command dispatch: routes the `-m` method to its implementation.
pub mod compile;
pub mod vars;

use std::path::Path;

use clap::ValueEnum;

use crate::cli::{Cli, Method, OutputCtx};
use crate::request::ClientError;
use crate::service::HttpDocumentService;

/// Validate the invocation and run the selected method against the service.
///
/// # Errors
///
/// Returns `ClientError::MissingTemplate` before any other work when `-t` is
/// absent, `ClientError::UnknownMethod` for anything but compile/vars, and the
/// method's own error otherwise.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ClientError> {
    let template = cli
        .template
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(Path::new)
        .ok_or(ClientError::MissingTemplate)?;
    let method = parse_method(&cli.method)?;
    let service = HttpDocumentService::new(&cli.url)?;

    match method {
        Method::Compile => compile::run(cli, template, &service, ctx),
        Method::Vars => vars::run(template, cli.prefix.as_deref(), &service, ctx),
    }
}

fn parse_method(method: &str) -> Result<Method, ClientError> {
    <Method as ValueEnum>::from_str(method, false).map_err(|_| ClientError::UnknownMethod {
        method: method.to_owned(),
    })
}
