//! XML encoding of TJS 1.0 documents
//!
//! [`Document`] covers every global root element of the schema: the eight
//! operation requests, their responses, and the OWS exception report.
//! Parsing dispatches on the root's local name, so any namespace prefix is
//! accepted; output always uses the default TJS namespace with `ows` and
//! `xlink` prefixes declared on the root.

mod reader;
mod tree;
mod writer;

use crate::model::*;
use crate::{Result, TjsError};
use tree::Element;

/// Any TJS 1.0 document, keyed by its root element
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    // Requests
    GetCapabilities(GetCapabilities),
    DescribeFrameworks(DescribeFrameworks),
    DescribeDatasets(DescribeDatasets),
    DescribeData(DescribeData),
    DescribeKey(DescribeKey),
    DescribeJoinAbilities(DescribeJoinAbilities),
    GetData(GetData),
    JoinData(JoinData),
    // Responses
    Capabilities(Capabilities),
    FrameworkDescriptions(FrameworkDescriptions),
    DatasetDescriptions(DatasetDescriptions),
    DataDescriptions(DataDescriptions),
    FrameworkKeyDescription(FrameworkKeyDescription),
    Gdas(Gdas),
    JoinAbilities(JoinAbilities),
    JoinDataResponse(JoinDataResponse),
    ExceptionReport(OwsExceptionReport),
}

impl Document {
    /// Parse any TJS document, deciding its kind from the root element.
    pub fn parse(input: &str) -> Result<Document> {
        let root = Element::parse(input)?;
        tracing::debug!(root = %root.name, "parsing TJS document");
        match root.name.as_str() {
            "GetCapabilities" => Ok(Document::GetCapabilities(reader::get_capabilities(&root)?)),
            "DescribeFrameworks" => Ok(Document::DescribeFrameworks(reader::describe_frameworks(
                &root,
            )?)),
            "DescribeDatasets" => Ok(Document::DescribeDatasets(reader::describe_datasets(&root)?)),
            "DescribeData" => Ok(Document::DescribeData(reader::describe_data(&root)?)),
            "DescribeKey" => Ok(Document::DescribeKey(reader::describe_key(&root)?)),
            "DescribeJoinAbilities" => Ok(Document::DescribeJoinAbilities(
                reader::describe_join_abilities(&root)?,
            )),
            "GetData" => Ok(Document::GetData(reader::get_data(&root)?)),
            "JoinData" => Ok(Document::JoinData(reader::join_data(&root)?)),
            "Capabilities" => Ok(Document::Capabilities(reader::capabilities(&root)?)),
            "FrameworkDescriptions" => Ok(Document::FrameworkDescriptions(
                reader::framework_descriptions(&root)?,
            )),
            "DatasetDescriptions" => Ok(Document::DatasetDescriptions(reader::dataset_descriptions(
                &root,
            )?)),
            "DataDescriptions" => Ok(Document::DataDescriptions(reader::data_descriptions(&root)?)),
            "FrameworkKeyDescription" => Ok(Document::FrameworkKeyDescription(
                reader::framework_key_description(&root)?,
            )),
            "GDAS" => Ok(Document::Gdas(reader::gdas(&root)?)),
            "JoinAbilities" => Ok(Document::JoinAbilities(reader::join_abilities(&root)?)),
            "JoinDataResponse" => Ok(Document::JoinDataResponse(reader::join_data_response(
                &root,
            )?)),
            "ExceptionReport" => Ok(Document::ExceptionReport(reader::ows_exception_report(
                &root,
            )?)),
            other => Err(TjsError::Parse(format!(
                "unknown TJS document root: {other}"
            ))),
        }
    }

    /// Serialize to an XML string with declaration and namespace bindings.
    pub fn to_xml(&self) -> Result<String> {
        writer::document(|w| match self {
            Document::GetCapabilities(d) => writer::get_capabilities(w, d),
            Document::DescribeFrameworks(d) => writer::describe_frameworks(w, d),
            Document::DescribeDatasets(d) => writer::describe_datasets(w, d),
            Document::DescribeData(d) => writer::describe_data(w, d),
            Document::DescribeKey(d) => writer::describe_key(w, d),
            Document::DescribeJoinAbilities(d) => writer::describe_join_abilities(w, d),
            Document::GetData(d) => writer::get_data(w, d),
            Document::JoinData(d) => writer::join_data(w, d),
            Document::Capabilities(d) => writer::capabilities(w, d),
            Document::FrameworkDescriptions(d) => writer::framework_descriptions(w, d),
            Document::DatasetDescriptions(d) => writer::dataset_descriptions(w, d),
            Document::DataDescriptions(d) => writer::data_descriptions(w, d),
            Document::FrameworkKeyDescription(d) => writer::framework_key_description(w, d),
            Document::Gdas(d) => writer::gdas(w, d),
            Document::JoinAbilities(d) => writer::join_abilities(w, d),
            Document::JoinDataResponse(d) => writer::join_data_response(w, d),
            Document::ExceptionReport(d) => writer::ows_exception_report(w, d),
        })
    }

    /// Root element name this document serializes under
    pub fn root_name(&self) -> &'static str {
        match self {
            Document::GetCapabilities(_) => "GetCapabilities",
            Document::DescribeFrameworks(_) => "DescribeFrameworks",
            Document::DescribeDatasets(_) => "DescribeDatasets",
            Document::DescribeData(_) => "DescribeData",
            Document::DescribeKey(_) => "DescribeKey",
            Document::DescribeJoinAbilities(_) => "DescribeJoinAbilities",
            Document::GetData(_) => "GetData",
            Document::JoinData(_) => "JoinData",
            Document::Capabilities(_) => "Capabilities",
            Document::FrameworkDescriptions(_) => "FrameworkDescriptions",
            Document::DatasetDescriptions(_) => "DatasetDescriptions",
            Document::DataDescriptions(_) => "DataDescriptions",
            Document::FrameworkKeyDescription(_) => "FrameworkKeyDescription",
            Document::Gdas(_) => "GDAS",
            Document::JoinAbilities(_) => "JoinAbilities",
            Document::JoinDataResponse(_) => "JoinDataResponse",
            Document::ExceptionReport(_) => "ExceptionReport",
        }
    }

    /// True for the eight operation requests
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Document::GetCapabilities(_)
                | Document::DescribeFrameworks(_)
                | Document::DescribeDatasets(_)
                | Document::DescribeData(_)
                | Document::DescribeKey(_)
                | Document::DescribeJoinAbilities(_)
                | Document::GetData(_)
                | Document::JoinData(_)
        )
    }
}

macro_rules! document_xml_impls {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl $ty {
                /// Parse from XML, requiring the matching root element.
                pub fn from_xml(input: &str) -> Result<Self> {
                    match Document::parse(input)? {
                        Document::$variant(doc) => Ok(doc),
                        other => Err(TjsError::Parse(format!(
                            concat!("expected ", stringify!($variant), " document, found {}"),
                            other.root_name()
                        ))),
                    }
                }

                /// Serialize to an XML string.
                pub fn to_xml(&self) -> Result<String> {
                    Document::$variant(self.clone()).to_xml()
                }
            }
        )+
    };
}

document_xml_impls! {
    Capabilities => Capabilities,
    FrameworkDescriptions => FrameworkDescriptions,
    DatasetDescriptions => DatasetDescriptions,
    DataDescriptions => DataDescriptions,
    FrameworkKeyDescription => FrameworkKeyDescription,
    Gdas => Gdas,
    JoinAbilities => JoinAbilities,
    JoinDataResponse => JoinDataResponse,
    OwsExceptionReport => ExceptionReport,
}
