//! TJS operation requests
//!
//! XML encodings of the eight TJS operations. In the XML binding the root
//! element name selects the operation, so no `request` field appears here;
//! the KVP binding in [`crate::kvp`] adds it back.

use crate::model::common::{RequestBase, Section};
use serde::{Deserialize, Serialize};

/// GetCapabilities request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCapabilities {
    /// Always "TJS"
    pub service: String,
    /// Versions the client accepts, in order of preference
    pub accept_versions: Vec<String>,
    pub sections: Vec<Section>,
    /// Output MIME types the client accepts
    pub accept_formats: Vec<String>,
    /// RFC 4646 language codes the client accepts
    pub accept_languages: Vec<String>,
    pub update_sequence: Option<String>,
}

impl GetCapabilities {
    pub fn new() -> Self {
        Self {
            service: crate::vocabulary::SERVICE.to_string(),
            ..Default::default()
        }
    }
}

/// DescribeFrameworks request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeFrameworks {
    pub base: RequestBase,
    pub framework_uri: Option<String>,
}

/// DescribeDatasets request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeDatasets {
    pub base: RequestBase,
    pub framework_uri: Option<String>,
    pub dataset_uri: Option<String>,
}

/// DescribeData request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeData {
    pub base: RequestBase,
    pub framework_uri: Option<String>,
    pub dataset_uri: Option<String>,
    /// Comma-delimited attribute names to describe
    pub attributes: Option<String>,
}

/// DescribeKey request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeKey {
    pub base: RequestBase,
    pub framework_uri: String,
}

/// DescribeJoinAbilities request (bare request base)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeJoinAbilities {
    pub base: RequestBase,
}

/// GetData request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetData {
    pub base: RequestBase,
    pub framework_uri: String,
    pub dataset_uri: String,
    /// Comma-delimited attribute names
    pub attributes: Option<String>,
    /// Comma-delimited key identifiers, ranges as "min-max"
    pub linkage_keys: Option<String>,
    /// Nominal or ordinal column to filter on
    pub filter_column: Option<String>,
    /// Value the filter column must match
    pub filter_value: Option<String>,
    /// XSL document to reference from the response
    pub xsl: Option<String>,
    /// Request an "aid" attribute on each V element of the response
    pub aid: bool,
}

/// JoinData request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinData {
    pub base: RequestBase,
    pub attribute_data: AttributeData,
    /// Styling applied when the requested output includes WMS
    pub map_styling: Option<MapStyling>,
    /// URL of a data classification for the output
    pub classification_url: Option<String>,
    /// Replace equivalent attribute data already held by the server
    pub update: bool,
}

/// Attribute data to be joined (`AttributeDataType`)
///
/// The schema offers a GetDataURL / GetDataXML choice; exactly one must be
/// populated (enforced by [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeData {
    /// URL returning a valid GetData response
    pub get_data_url: Option<String>,
    /// Inline GetData request to be issued by the server
    pub get_data_xml: Option<GetDataXml>,
}

/// Inline GetData request within JoinData (`GetDataXMLType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDataXml {
    /// Base URL of the TJS server to pass the request to
    pub get_data_host: Option<String>,
    pub language: Option<String>,
    pub framework_uri: String,
    pub dataset_uri: String,
    pub attributes: Option<String>,
    pub linkage_keys: Option<String>,
}

/// WMS styling instructions for JoinData (`MapStylingType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapStyling {
    /// Styling identifier listed in the DescribeJoinAbilities response
    pub styling_identifier: String,
    pub styling_url: String,
}
