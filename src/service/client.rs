/// The document service contract and its blocking HTTP implementation.
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use super::errors::ServiceError;
use crate::request::TemplateRequest;

/// Remote operations offered by the document service.
pub trait DocumentService {
    /// Render a template. The returned stream is the document, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on transport failure or a non-success status.
    fn compile(&self, request: &TemplateRequest) -> Result<Box<dyn Read>, ServiceError>;

    /// List the variables used by a template, optionally filtered by prefix.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on transport failure or a non-success status.
    fn vars(&self, template: &Path, prefix: Option<&str>) -> Result<VarListing, ServiceError>;
}

/// Variable listing returned by the `vars` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarListing {
    /// A JSON array of variable names.
    Names(Vec<String>),
    /// Any other body, printed as-is.
    Raw(String),
}

impl VarListing {
    /// Interpret a response body.
    #[must_use]
    pub fn parse(body: String) -> Self {
        match serde_json::from_str::<Vec<String>>(&body) {
            Ok(names) => Self::Names(names),
            Err(_) => Self::Raw(body),
        }
    }
}

/// `DocumentService` over HTTP, one blocking round trip per call.
pub struct HttpDocumentService {
    base_url: String,
    client: Client,
}

impl HttpDocumentService {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// No request timeout is configured: a hung service blocks the call.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Option::<Duration>::None)
            .user_agent(concat!("doccli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url)
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, ServiceError> {
        let resp = builder.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().unwrap_or_default().trim().to_owned();
        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl DocumentService for HttpDocumentService {
    fn compile(&self, request: &TemplateRequest) -> Result<Box<dyn Read>, ServiceError> {
        let url = self.endpoint("compile");
        debug!(%url, format = %request.format, assets = request.assets.len(), "submitting template");

        let data = Value::Object(request.data.clone()).to_string().into_bytes();
        let mut form = Form::new()
            .part("template", file_part(&request.template_path)?)
            .part(
                "data",
                Part::bytes(data)
                    .file_name("data.json")
                    .mime_str("application/json")?,
            );
        for asset in &request.assets {
            form = form.part(base_name(asset), file_part(asset)?);
        }

        let mut builder = self
            .client
            .post(url)
            .query(&[("format", request.format.as_str())])
            .multipart(form);
        if request.embed_error {
            builder = builder.query(&[("error", "true")]);
        }

        let resp = self.send(builder)?;
        Ok(Box::new(resp))
    }

    fn vars(&self, template: &Path, prefix: Option<&str>) -> Result<VarListing, ServiceError> {
        let url = self.endpoint("vars");
        debug!(%url, ?prefix, "querying template variables");

        let form = Form::new().part("template", file_part(template)?);
        let mut builder = self.client.post(url).multipart(form);
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            builder = builder.query(&[("prefix", prefix)]);
        }

        let body = self.send(builder)?.text()?;
        Ok(VarListing::parse(body))
    }
}

/// Streamed file part; the submitted file name is the path's base name.
fn file_part(path: &Path) -> Result<Part, ServiceError> {
    Part::file(path).map_err(|source| ServiceError::Upload {
        path: path.to_path_buf(),
        source,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
        .into_owned()
}
