//! Namespace URIs and constant tables for TJS 1.0 documents

/// TJS 1.0 namespace
pub const TJS_NS: &str = "http://www.opengis.net/tjs/1.0";

/// OWS Common 1.1 namespace
pub const OWS_NS: &str = "http://www.opengis.net/ows/1.1";

/// XLink namespace
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// XML Schema instance namespace
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Schema location hint written on response roots
pub const TJS_SCHEMA_LOCATION: &str =
    "http://www.opengis.net/tjs/1.0 http://schemas.opengis.net/tjs/1.0/tjsAll.xsd";

/// Service type identifier carried by every request ("service" parameter)
pub const SERVICE: &str = "TJS";

/// XML Schema datatype URIs used by the `typeType` column datatype
pub mod datatype {
    pub const STRING: &str = "http://www.w3.org/TR/xmlschema-2/#string";
    pub const BOOLEAN: &str = "http://www.w3.org/TR/xmlschema-2/#boolean";
    pub const INTEGER: &str = "http://www.w3.org/TR/xmlschema-2/#integer";
    pub const DECIMAL: &str = "http://www.w3.org/TR/xmlschema-2/#decimal";
    pub const FLOAT: &str = "http://www.w3.org/TR/xmlschema-2/#float";
    pub const DOUBLE: &str = "http://www.w3.org/TR/xmlschema-2/#double";
    pub const DATETIME: &str = "http://www.w3.org/TR/xmlschema-2/#datetime";
}
