//! OWS Common 1.1 subset referenced by the TJS schema
//!
//! Only the elements TJS documents actually embed: service metadata for the
//! capabilities document, the language list, and exception reporting.

use serde::{Deserialize, Serialize};

/// `ows:ServiceIdentification`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceIdentification {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: Option<String>,
    pub keywords: Vec<String>,
    /// Always "TJS" for this service
    pub service_type: String,
    pub service_type_versions: Vec<String>,
    pub fees: Option<String>,
    pub access_constraints: Option<String>,
}

/// `ows:ServiceProvider`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub provider_name: String,
    pub provider_site: Option<String>,
    pub service_contact: Option<ServiceContact>,
}

/// `ows:ServiceContact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceContact {
    pub individual_name: Option<String>,
    pub position_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// `ows:OperationsMetadata`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationsMetadata {
    pub operations: Vec<Operation>,
}

/// `ows:Operation`: one operation with its HTTP endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub get_urls: Vec<String>,
    pub post_urls: Vec<String>,
    pub parameters: Vec<OwsParameter>,
}

/// `ows:Parameter` with its allowed values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwsParameter {
    pub name: String,
    pub allowed_values: Vec<String>,
}

/// `ows:Exception`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwsException {
    pub exception_code: String,
    pub locator: Option<String>,
    pub text: Vec<String>,
}

/// `ows:ExceptionReport` error document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwsExceptionReport {
    pub version: String,
    pub lang: Option<String>,
    pub exceptions: Vec<OwsException>,
}

impl OwsExceptionReport {
    /// Standard report for a single error condition
    pub fn single(code: impl Into<String>, locator: Option<String>, text: impl Into<String>) -> Self {
        Self {
            version: "1.1.0".to_string(),
            lang: None,
            exceptions: vec![OwsException {
                exception_code: code.into(),
                locator,
                text: vec![text.into()],
            }],
        }
    }
}

/// Exception codes defined by OWS Common and used by TJS servers
pub mod exception_code {
    pub const OPERATION_NOT_SUPPORTED: &str = "OperationNotSupported";
    pub const MISSING_PARAMETER_VALUE: &str = "MissingParameterValue";
    pub const INVALID_PARAMETER_VALUE: &str = "InvalidParameterValue";
    pub const VERSION_NEGOTIATION_FAILED: &str = "VersionNegotiationFailed";
    pub const INVALID_UPDATE_SEQUENCE: &str = "InvalidUpdateSequence";
    pub const OPTION_NOT_SUPPORTED: &str = "OptionNotSupported";
    pub const NO_APPLICABLE_CODE: &str = "NoApplicableCode";
}
