//! Shared simple types and small complex types
//!
//! The enums here carry the exact lexical forms of the schema's simple
//! types; `FromStr`/`Display` round-trip through them.

use crate::vocabulary::datatype;
use crate::TjsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level of measurement of an attribute column (`DataClassType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataClass {
    Nominal,
    Ordinal,
    Measure,
    Count,
}

impl fmt::Display for DataClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataClass::Nominal => "nominal",
            DataClass::Ordinal => "ordinal",
            DataClass::Measure => "measure",
            DataClass::Count => "count",
        })
    }
}

impl FromStr for DataClass {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nominal" => Ok(DataClass::Nominal),
            "ordinal" => Ok(DataClass::Ordinal),
            "measure" => Ok(DataClass::Measure),
            "count" => Ok(DataClass::Count),
            other => Err(TjsError::Parse(format!("unknown data class: {other}"))),
        }
    }
}

/// Column datatype, identified by an XML Schema datatype URI (`typeType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    String,
    Boolean,
    Integer,
    Decimal,
    Float,
    Double,
    DateTime,
}

impl DataType {
    /// The `http://www.w3.org/TR/xmlschema-2/#…` URI form used on the wire
    pub fn as_uri(&self) -> &'static str {
        match self {
            DataType::String => datatype::STRING,
            DataType::Boolean => datatype::BOOLEAN,
            DataType::Integer => datatype::INTEGER,
            DataType::Decimal => datatype::DECIMAL,
            DataType::Float => datatype::FLOAT,
            DataType::Double => datatype::DOUBLE,
            DataType::DateTime => datatype::DATETIME,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_uri())
    }
}

impl FromStr for DataType {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            datatype::STRING => Ok(DataType::String),
            datatype::BOOLEAN => Ok(DataType::Boolean),
            datatype::INTEGER => Ok(DataType::Integer),
            datatype::DECIMAL => Ok(DataType::Decimal),
            datatype::FLOAT => Ok(DataType::Float),
            datatype::DOUBLE => Ok(DataType::Double),
            datatype::DATETIME => Ok(DataType::DateTime),
            other => Err(TjsError::Parse(format!("unknown column datatype: {other}"))),
        }
    }
}

/// Role a column plays in the dataset (`purposeType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    SpatialComponentIdentifier,
    SpatialComponentProportion,
    SpatialComponentPercentage,
    TemporalIdentifier,
    TemporalValue,
    VerticalIdentifier,
    VerticalValue,
    OtherSpatialIdentifier,
    NonSpatialIdentifier,
    Attribute,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Purpose::SpatialComponentIdentifier => "SpatialComponentIdentifier",
            Purpose::SpatialComponentProportion => "SpatialComponentProportion",
            Purpose::SpatialComponentPercentage => "SpatialComponentPercentage",
            Purpose::TemporalIdentifier => "TemporalIdentifier",
            Purpose::TemporalValue => "TemporalValue",
            Purpose::VerticalIdentifier => "VerticalIdentifier",
            Purpose::VerticalValue => "VerticalValue",
            Purpose::OtherSpatialIdentifier => "OtherSpatialIdentifier",
            Purpose::NonSpatialIdentifier => "NonSpatialIdentifier",
            Purpose::Attribute => "Attribute",
        })
    }
}

impl FromStr for Purpose {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SpatialComponentIdentifier" => Ok(Purpose::SpatialComponentIdentifier),
            "SpatialComponentProportion" => Ok(Purpose::SpatialComponentProportion),
            "SpatialComponentPercentage" => Ok(Purpose::SpatialComponentPercentage),
            "TemporalIdentifier" => Ok(Purpose::TemporalIdentifier),
            "TemporalValue" => Ok(Purpose::TemporalValue),
            "VerticalIdentifier" => Ok(Purpose::VerticalIdentifier),
            "VerticalValue" => Ok(Purpose::VerticalValue),
            "OtherSpatialIdentifier" => Ok(Purpose::OtherSpatialIdentifier),
            "NonSpatialIdentifier" => Ok(Purpose::NonSpatialIdentifier),
            "Attribute" => Ok(Purpose::Attribute),
            other => Err(TjsError::Parse(format!("unknown column purpose: {other}"))),
        }
    }
}

/// Whether measurement uncertainty is Gaussian (`gaussianType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gaussian {
    True,
    False,
    Unknown,
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gaussian::True => "true",
            Gaussian::False => "false",
            Gaussian::Unknown => "unknown",
        })
    }
}

impl FromStr for Gaussian {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Gaussian::True),
            "false" => Ok(Gaussian::False),
            "unknown" => Ok(Gaussian::Unknown),
            other => Err(TjsError::Parse(format!("unknown gaussian flag: {other}"))),
        }
    }
}

/// Protocol version identifier (`versionType`)
///
/// TJS 1.0 accepts "1", "1.0" and "1.0.0" as equivalent spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    V1,
    #[default]
    V1_0,
    V1_0_0,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Version::V1 => "1",
            Version::V1_0 => "1.0",
            Version::V1_0_0 => "1.0.0",
        })
    }
}

impl FromStr for Version {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Version::V1),
            "1.0" => Ok(Version::V1_0),
            "1.0.0" => Ok(Version::V1_0_0),
            other => Err(TjsError::Parse(format!("unsupported version: {other}"))),
        }
    }
}

/// Capabilities document section names (`SectionsType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    ServiceIdentification,
    ServiceProvider,
    OperationsMetadata,
    Contents,
    Themes,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::ServiceIdentification => "ServiceIdentification",
            Section::ServiceProvider => "ServiceProvider",
            Section::OperationsMetadata => "OperationsMetadata",
            Section::Contents => "Contents",
            Section::Themes => "Themes",
        })
    }
}

impl FromStr for Section {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ServiceIdentification" => Ok(Section::ServiceIdentification),
            "ServiceProvider" => Ok(Section::ServiceProvider),
            "OperationsMetadata" => Ok(Section::OperationsMetadata),
            "Contents" => Ok(Section::Contents),
            "Themes" => Ok(Section::Themes),
            other => Err(TjsError::Parse(format!("unknown section: {other}"))),
        }
    }
}

/// Cardinality of the attribute-to-framework key relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// At most one attribute record per framework key
    One,
    /// Possibly several attribute records per framework key
    Many,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relationship::One => "one",
            Relationship::Many => "many",
        })
    }
}

impl FromStr for Relationship {
    type Err = TjsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Relationship::One),
            "many" => Ok(Relationship::Many),
            other => Err(TjsError::Parse(format!("unknown relationship: {other}"))),
        }
    }
}

/// Point (or range) in time to which a framework/dataset applies
/// (`ReferenceDateType`)
///
/// Lexical forms follow XML Schema gYear, gYearMonth, date or dateTime, so
/// values stay strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDate {
    pub value: String,
    /// Start of a time range ending at `value`
    pub start_date: Option<String>,
}

impl ReferenceDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            start_date: None,
        }
    }
}

/// WGS84 bounding box of a spatial framework (`BoundingCoordinatesType`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingCoordinates {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Common attributes of every TJS request (`RequestBaseType`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBase {
    /// Always "TJS"
    pub service: String,
    pub version: Option<Version>,
    /// RFC 4646 language code requested for human-readable text
    pub language: Option<String>,
}

impl Default for RequestBase {
    fn default() -> Self {
        Self {
            service: crate::vocabulary::SERVICE.to_string(),
            version: Some(Version::V1_0),
            language: None,
        }
    }
}

/// Common attributes of every TJS response document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBase {
    pub service: String,
    pub version: Version,
    pub lang: Option<String>,
    /// GetCapabilities URL of the server that produced the document
    pub capabilities: Option<String>,
}

impl Default for ResponseBase {
    fn default() -> Self {
        Self {
            service: crate::vocabulary::SERVICE.to_string(),
            version: Version::V1_0,
            lang: None,
            capabilities: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_class_round_trips() {
        for s in ["nominal", "ordinal", "measure", "count"] {
            assert_eq!(DataClass::from_str(s).unwrap().to_string(), s);
        }
        assert!(DataClass::from_str("interval").is_err());
    }

    #[test]
    fn data_type_uses_xml_schema_uris() {
        let dt = DataType::from_str("http://www.w3.org/TR/xmlschema-2/#integer").unwrap();
        assert_eq!(dt, DataType::Integer);
        assert_eq!(dt.as_uri(), "http://www.w3.org/TR/xmlschema-2/#integer");
        assert!(DataType::from_str("integer").is_err());
    }

    #[test]
    fn version_accepts_all_three_spellings() {
        assert_eq!(Version::from_str("1").unwrap(), Version::V1);
        assert_eq!(Version::from_str("1.0").unwrap(), Version::V1_0);
        assert_eq!(Version::from_str("1.0.0").unwrap(), Version::V1_0_0);
        assert!(Version::from_str("2.0").is_err());
    }

    #[test]
    fn request_base_defaults_to_tjs() {
        let base = RequestBase::default();
        assert_eq!(base.service, "TJS");
        assert_eq!(base.version, Some(Version::V1_0));
    }
}
