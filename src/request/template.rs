/// The compile request sent to the document service.
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::assets::resolve_assets;
use super::data::load_data;
use super::errors::ClientError;
use super::format::Format;

/// A fully normalized compile request.
#[derive(Debug, Clone)]
pub struct TemplateRequest {
    /// Requested result format.
    pub format: Format,
    /// Data the template is resolved with. Always an object, possibly empty.
    pub data: Map<String, Value>,
    /// Local path of the ODT/DOCX template.
    pub template_path: PathBuf,
    /// Regular files only; directories have already been expanded.
    pub assets: Vec<PathBuf>,
    /// Ask the service to render compilation errors into the document.
    pub embed_error: bool,
}

impl TemplateRequest {
    /// Assemble a request from raw CLI inputs.
    ///
    /// The data file is loaded tolerantly; asset paths are resolved before the
    /// request exists, so no request is ever built around a missing asset.
    ///
    /// # Errors
    ///
    /// Returns the asset resolution error when an asset is missing or a
    /// directory cannot be listed.
    pub fn build(
        format: Format,
        data_path: Option<&Path>,
        template_path: &Path,
        assets: &[PathBuf],
        embed_error: bool,
    ) -> Result<Self, ClientError> {
        let assets = resolve_assets(assets)?;
        Ok(Self {
            format,
            data: load_data(data_path),
            template_path: template_path.to_path_buf(),
            assets,
            embed_error,
        })
    }
}
