/// Document service layer: the remote contract and its HTTP implementation.
pub mod client;
pub mod errors;

pub use client::{DocumentService, HttpDocumentService, VarListing};
pub use errors::ServiceError;
