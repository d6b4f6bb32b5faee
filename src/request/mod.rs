/// Request layer: input normalization, asset resolution, request assembly.
pub mod assets;
pub mod data;
pub mod errors;
pub mod format;
pub mod template;

pub use errors::ClientError;
pub use format::Format;
pub use template::TemplateRequest;
