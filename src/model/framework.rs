//! Spatial frameworks, attribute datasets and their table structures
//!
//! Covers the framework/dataset description family shared by the
//! DescribeFrameworks, DescribeDatasets, DescribeData, DescribeKey and
//! GetData responses. The schema declares a numbered framework/dataset
//! variant per document; here a single [`Framework`] and [`Dataset`] carry
//! optional parts and [`crate::validation`] enforces what each document
//! requires.

use crate::model::common::{
    BoundingCoordinates, DataType, Gaussian, Purpose, ReferenceDate, Relationship, ResponseBase,
};
use serde::{Deserialize, Serialize};

/// Description of a spatial framework (`FrameworkType` and its variants)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    /// URI of the spatial framework, normally a resolvable URL or a URN
    pub framework_uri: String,
    /// Organization responsible for maintaining the framework
    pub organization: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub reference_date: ReferenceDate,
    pub version: String,
    pub documentation: Option<String>,
    /// Key columns through which attribute data joins to the framework
    pub framework_key: Option<FrameworkKey>,
    pub bounding_coordinates: Option<BoundingCoordinates>,
    /// URL of the DescribeDatasets request for this framework
    pub describe_datasets_request: Option<String>,
    pub datasets: Vec<Dataset>,
    /// Key rowset; present only in the DescribeKey response
    pub rowset: Option<Rowset>,
}

/// Description of an attribute dataset (`DatasetType` and its variants)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub dataset_uri: String,
    pub organization: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub reference_date: ReferenceDate,
    pub version: String,
    pub documentation: Option<String>,
    /// URL of the DescribeData request for this dataset
    pub describe_data_request: Option<String>,
    /// Table structure; required in DescribeData and GetData responses
    pub columnset: Option<Columnset>,
    /// Table contents; required in the GetData response
    pub rowset: Option<Rowset>,
}

/// Framework key columns as listed in framework descriptions
/// (`FrameworkKeyType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkKey {
    pub columns: Vec<KeyColumn>,
}

/// A key column: name and storage type only (`ColumnType`/`ColumnType2`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyColumn {
    pub name: String,
    pub data_type: DataType,
    /// Field length in characters
    pub length: u64,
    /// Digits after the decimal point, for fixed-precision decimals
    pub decimals: Option<u64>,
}

/// Table structure of a dataset (`ColumnsetType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columnset {
    pub framework_key: ColumnsetKey,
    /// Attribute columns (`AttributesType`)
    pub attributes: Vec<Column>,
}

/// Key columns within a columnset, with join metadata (`FrameworkKeyType1`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnsetKey {
    /// Every framework record has at least one attribute record
    pub complete: bool,
    pub relationship: Relationship,
    pub columns: Vec<KeyColumn>,
}

impl Default for ColumnsetKey {
    fn default() -> Self {
        Self {
            complete: true,
            relationship: Relationship::One,
            columns: Vec::new(),
        }
    }
}

/// A described attribute column (`ColumnType1`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub length: u64,
    pub decimals: Option<u64>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub documentation: Option<String>,
    pub purpose: Purpose,
    /// URL of a GetData request returning this column
    pub get_data_request: Option<String>,
    pub values: Option<Values>,
}

/// Value semantics of a column, one per data class (`ValuesType` choice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Values {
    Nominal(Nominal),
    Ordinal(Ordinal),
    Count(Count),
    Measure(Measure),
}

/// Valid classes of a nominal column (`NominalType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nominal {
    pub classes: Option<Classes>,
    pub exceptions: Option<Exceptions>,
}

/// Valid, rank-ordered classes of an ordinal column (`OrdinalType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ordinal {
    pub classes: Option<Classes>,
    pub exceptions: Option<Exceptions>,
}

/// Valid (non-null) values of a nominal or ordinal column
/// (`ClassesType`/`Classes1Type`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classes {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub documentation: Option<String>,
    pub values: Vec<ValueClass>,
}

/// One valid value of a nominal or ordinal column
/// (`ValueType`/`Value1Type`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueClass {
    /// Text string found in the V elements of this column
    pub identifier: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub documentation: Option<String>,
    /// Hex color suggested for cartographic portrayal, e.g. "CCFFCC"
    pub color: Option<String>,
    /// Rank order from lowest = 1; required for ordinal columns
    pub rank: Option<u64>,
}

/// Valid null values of a column (`NominalOrdinalExceptions` /
/// `MeasureCountExceptions`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exceptions {
    pub nulls: Vec<NullValue>,
}

/// One recognised null marker (`NullType`/`Null1Type`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NullValue {
    pub identifier: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: String,
    pub documentation: Option<String>,
    pub color: Option<String>,
}

/// Value semantics of a count column (`CountType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Count {
    pub uom: Uom,
    pub uncertainty: Option<Uncertainty>,
    pub exceptions: Option<Exceptions>,
}

/// Value semantics of a measure column (`MeasureType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub uom: Uom,
    pub uncertainty: Option<Uncertainty>,
    pub exceptions: Option<Exceptions>,
}

/// Unit of measure (`UOMType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uom {
    /// E.g. "km"
    pub short_form: Option<String>,
    /// E.g. "kilometre"
    pub long_form: Option<String>,
    /// URL defining the unit
    pub reference: Option<String>,
}

/// Measurement uncertainty of a column (`UncertaintyType`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uncertainty {
    pub value: String,
    pub gaussian: Gaussian,
}

/// Table contents (`RowsetType`/`Rowset1Type`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rowset {
    pub rows: Vec<Row>,
}

/// One table row (`RowType`/`Row1Type`)
///
/// DescribeKey rows carry keys and an optional title; GetData rows carry
/// keys and values, ordered like the columnset's key columns and attribute
/// columns respectively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub keys: Vec<K>,
    pub title: Option<String>,
    pub values: Vec<V>,
}

/// Spatial key cell (`KType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct K {
    pub value: String,
    /// Attribute identifier echo, present when the request asked for it
    pub aid: Option<String>,
}

impl K {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            aid: None,
        }
    }
}

/// Attribute value cell (`VType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V {
    pub value: String,
    pub aid: Option<String>,
    /// True when the value is missing; content then names the reason
    pub null: bool,
}

impl V {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            aid: None,
            null: false,
        }
    }

    /// A null cell carrying an optional reason marker
    pub fn null(reason: impl Into<String>) -> Self {
        Self {
            value: reason.into(),
            aid: None,
            null: true,
        }
    }
}

/// DescribeFrameworks response (`FrameworkDescriptionsType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkDescriptions {
    pub base: ResponseBase,
    pub frameworks: Vec<Framework>,
}

/// DescribeDatasets response (`DatasetDescriptionsType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptions {
    pub base: ResponseBase,
    pub frameworks: Vec<Framework>,
}

/// DescribeData response (`DataDescriptionsType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDescriptions {
    pub base: ResponseBase,
    pub frameworks: Vec<Framework>,
}

/// DescribeKey response (`FrameworkKeyDescriptionType`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworkKeyDescription {
    pub base: ResponseBase,
    pub framework: Framework,
}

/// GetData response (`GDASType`), a Geographic Data Attribute Set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gdas {
    pub base: ResponseBase,
    pub framework: Framework,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v_null_marker() {
        let v = V::null("x");
        assert!(v.null);
        assert_eq!(v.value, "x");
        assert!(!V::new("42").null);
    }

    #[test]
    fn cells_round_trip_through_serde() {
        let row = Row {
            keys: vec![K::new("3506008")],
            title: None,
            values: vec![V::new("883391"), V::null("x")],
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn columnset_key_defaults_to_one_to_one() {
        let key = ColumnsetKey::default();
        assert!(key.complete);
        assert_eq!(key.relationship, Relationship::One);
    }
}
