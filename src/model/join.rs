//! Join advertisement and execution documents
//!
//! `JoinAbilities` answers DescribeJoinAbilities; `JoinDataResponse`
//! reports on a (possibly still running) JoinData operation.

use crate::model::common::ResponseBase;
use crate::model::framework::Framework;
use crate::model::ows::OwsException;
use serde::{Deserialize, Serialize};

/// DescribeJoinAbilities response (`JoinAbilitiesType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinAbilities {
    pub base: ResponseBase,
    /// Frameworks to which attribute data can be joined
    pub spatial_frameworks: Vec<Framework>,
    /// Maximum number of attributes joinable in one JoinData request
    pub attribute_limit: Option<u64>,
    pub output_mechanisms: Vec<Mechanism>,
    pub output_stylings: Vec<Styling>,
    /// Schema for classification files accepted via ClassificationURL
    pub classification_schema_url: Option<String>,
    /// Server honours the `update` flag of JoinData
    pub update_supported: bool,
}

/// A data access mechanism offered for joined outputs (`MechanismType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mechanism {
    pub identifier: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    /// URL defining the access mechanism
    pub reference: String,
}

/// A styling-instruction form supported by the server (`StylingType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Styling {
    pub identifier: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    /// URL defining the styling instructions
    pub reference: String,
    /// XSD the styling payload validates against, when XML encoded
    pub schema: Option<String>,
}

/// JoinData response (`JoinDataResponseType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinDataResponse {
    pub base: ResponseBase,
    pub status: Status,
    /// Echo of the joined inputs (`DataInputsType`)
    pub data_inputs: DataInputs,
    /// Outputs produced or promised by the operation (`JoinedOutputsType`)
    pub joined_outputs: Vec<Output>,
}

/// Execution state of a JoinData operation (`StatusType`)
///
/// The schema spells this as three optional elements of which servers emit
/// exactly one; an enum keeps illegal combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// UTC time the operation finished, or this document was created
    pub creation_time: String,
    /// Location where the current response document is stored
    pub href: String,
    pub state: StatusState,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            creation_time: String::new(),
            href: String::new(),
            state: StatusState::Accepted(String::new()),
        }
    }
}

/// The Accepted / Completed / Failed alternatives of [`Status`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusState {
    /// Request accepted but not yet complete; text is server-defined
    Accepted(String),
    /// Request completed with at least partial success
    Completed(String),
    /// Operation failed entirely; no outputs were produced
    Failed,
}

/// Inputs the join was performed against (`DataInputsType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataInputs {
    /// Framework/dataset/data description of the joined input
    pub framework: Framework,
}

/// One produced output (`OutputType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub mechanism: Mechanism,
    /// Populated once the output has been successfully produced
    pub resource: Option<Resource>,
    /// Errors encountered producing this output (`ExceptionReportType`)
    pub exception_report: Vec<OwsException>,
}

/// A web-accessible resource created by JoinData (`ResourceType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// For OGC web services, the complete GetCapabilities URL
    pub url: String,
    pub parameters: Vec<Parameter>,
}

/// Extra request parameter for the resource service (`ParameterType`)
///
/// A WMS output carries one parameter named "layers" holding the produced
/// layer name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}
