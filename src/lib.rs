//! # TJS 1.0
//!
//! Typed data model and XML encoding for the OGC Table Joining Service
//! (TJS) 1.0 standard (OGC 10-070r2).
//!
//! TJS joins tabular attribute data to spatial framework datasets via XML
//! request/response documents. This crate provides:
//!
//! - A typed model of every TJS 1.0 document: the eight operation requests
//!   (GetCapabilities through JoinData) and their responses (Capabilities,
//!   FrameworkDescriptions, DatasetDescriptions, DataDescriptions,
//!   FrameworkKeyDescription, GDAS, JoinAbilities, JoinDataResponse).
//! - XML reading and writing for all of them ([`xml::Document`]).
//! - The KVP (HTTP GET) request bindings ([`kvp`]).
//! - Schema cardinality and content validation ([`validation`]).
//!
//! ## Examples
//!
//! ```rust
//! use tjs10::xml::Document;
//!
//! # fn main() -> tjs10::Result<()> {
//! let xml = r#"<DescribeFrameworks xmlns="http://www.opengis.net/tjs/1.0"
//!                                  service="TJS" version="1.0"/>"#;
//! let doc = Document::parse(xml)?;
//! assert!(matches!(doc, Document::DescribeFrameworks(_)));
//! # Ok(())
//! # }
//! ```

pub mod kvp;
pub mod model;
pub mod validation;
pub mod vocabulary;
pub mod xml;

// Re-export the model for convenience
pub use model::*;

/// Core error type for TJS operations
#[derive(Debug, thiserror::Error)]
pub enum TjsError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("KVP error: {0}")]
    Kvp(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TJS operations
pub type Result<T> = std::result::Result<T, TjsError>;

/// Version information for this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
