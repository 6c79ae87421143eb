//! Capabilities document (`TjsCapabilitiesType`)

use crate::model::common::Version;
use crate::model::ows::{OperationsMetadata, ServiceIdentification, ServiceProvider};
use serde::{Deserialize, Serialize};

/// GetCapabilities response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub service: String,
    pub version: Version,
    pub update_sequence: Option<String>,
    pub lang: Option<String>,
    pub service_identification: Option<ServiceIdentification>,
    pub service_provider: Option<ServiceProvider>,
    pub operations_metadata: Option<OperationsMetadata>,
    /// RFC 4646 identifiers of languages the server supports
    pub languages: Vec<String>,
    /// URL of the service's WSDL document (`WSDLType`)
    pub wsdl: Option<String>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            service: crate::vocabulary::SERVICE.to_string(),
            version: Version::V1_0,
            update_sequence: None,
            lang: None,
            service_identification: None,
            service_provider: None,
            operations_metadata: None,
            languages: Vec::new(),
            wsdl: None,
        }
    }
}
