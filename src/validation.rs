//! Content and cardinality rules beyond what parsing enforces
//!
//! The schema reuses one framework/dataset shape across several documents
//! and tightens it per document; those per-document rules live here, along
//! with the value-level checks XML Schema cannot express (linkage key
//! syntax, ordinal ranks, service identifiers).

use crate::model::*;
use crate::vocabulary::SERVICE;
use crate::xml::Document;
use crate::{Result, TjsError};

/// Validate any TJS document against the rules of its kind.
pub fn validate(doc: &Document) -> Result<()> {
    match doc {
        Document::GetCapabilities(req) => check_service(&req.service),
        Document::DescribeFrameworks(req) => check_service(&req.base.service),
        Document::DescribeDatasets(req) => check_service(&req.base.service),
        Document::DescribeData(req) => check_service(&req.base.service),
        Document::DescribeKey(req) => validate_describe_key(req),
        Document::DescribeJoinAbilities(req) => check_service(&req.base.service),
        Document::GetData(req) => validate_get_data(req),
        Document::JoinData(req) => validate_join_data(req),
        Document::Capabilities(doc) => check_service(&doc.service),
        Document::FrameworkDescriptions(doc) => validate_framework_descriptions(doc),
        Document::DatasetDescriptions(doc) => validate_dataset_descriptions(doc),
        Document::DataDescriptions(doc) => validate_data_descriptions(doc),
        Document::FrameworkKeyDescription(doc) => validate_framework_key_description(doc),
        Document::Gdas(doc) => validate_gdas(doc),
        Document::JoinAbilities(doc) => validate_join_abilities(doc),
        Document::JoinDataResponse(doc) => check_service(&doc.base.service),
        Document::ExceptionReport(doc) => validate_exception_report(doc),
    }
}

fn fail(msg: impl Into<String>) -> Result<()> {
    Err(TjsError::Validation(msg.into()))
}

fn check_service(service: &str) -> Result<()> {
    if service != SERVICE {
        return fail(format!("service must be {SERVICE}, found {service}"));
    }
    Ok(())
}

fn require(condition: bool, msg: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        fail(msg)
    }
}

pub fn validate_describe_key(req: &DescribeKey) -> Result<()> {
    check_service(&req.base.service)?;
    require(!req.framework_uri.is_empty(), "DescribeKey requires FrameworkURI")
}

pub fn validate_get_data(req: &GetData) -> Result<()> {
    check_service(&req.base.service)?;
    require(!req.framework_uri.is_empty(), "GetData requires FrameworkURI")?;
    require(!req.dataset_uri.is_empty(), "GetData requires DatasetURI")?;
    if let Some(keys) = &req.linkage_keys {
        validate_linkage_keys(keys)?;
    }
    // FilterValue is meaningless without the column it filters
    if req.filter_value.is_some() && req.filter_column.is_none() {
        return fail("FilterValue requires FilterColumn");
    }
    Ok(())
}

pub fn validate_join_data(req: &JoinData) -> Result<()> {
    check_service(&req.base.service)?;
    match (
        &req.attribute_data.get_data_url,
        &req.attribute_data.get_data_xml,
    ) {
        (Some(_), None) => Ok(()),
        (None, Some(gdx)) => {
            require(
                !gdx.framework_uri.is_empty(),
                "GetDataXML requires FrameworkURI",
            )?;
            require(!gdx.dataset_uri.is_empty(), "GetDataXML requires DatasetURI")?;
            if let Some(keys) = &gdx.linkage_keys {
                validate_linkage_keys(keys)?;
            }
            Ok(())
        }
        (Some(_), Some(_)) => fail("AttributeData allows only one of GetDataURL and GetDataXML"),
        (None, None) => fail("AttributeData requires GetDataURL or GetDataXML"),
    }
}

/// Comma-separated key identifiers, each a single key or a "min-max" range.
/// Identifiers may not repeat across the list.
pub fn validate_linkage_keys(keys: &str) -> Result<()> {
    if keys.trim().is_empty() {
        return fail("LinkageKeys must not be empty");
    }
    let mut seen = std::collections::HashSet::new();
    for token in keys.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return fail("LinkageKeys contains an empty entry");
        }
        let parts: Vec<&str> = token.split('-').collect();
        match parts.as_slice() {
            [single] => {
                if !seen.insert(single.to_string()) {
                    return fail(format!("LinkageKeys repeats key {single}"));
                }
            }
            [min, max] if !min.is_empty() && !max.is_empty() => {
                for bound in [min, max] {
                    if !seen.insert(bound.to_string()) {
                        return fail(format!("LinkageKeys repeats key {bound}"));
                    }
                }
            }
            _ => return fail(format!("malformed LinkageKeys entry: {token}")),
        }
    }
    Ok(())
}

pub fn validate_framework_descriptions(doc: &FrameworkDescriptions) -> Result<()> {
    check_service(&doc.base.service)?;
    for fr in &doc.frameworks {
        framework_core(fr)?;
        let key = fr
            .framework_key
            .as_ref()
            .ok_or_else(|| TjsError::Validation(format!(
                "framework {} requires a FrameworkKey",
                fr.framework_uri
            )))?;
        require(
            !key.columns.is_empty(),
            "FrameworkKey requires at least one Column",
        )?;
        require(
            fr.bounding_coordinates.is_some(),
            "framework descriptions require BoundingCoordinates",
        )?;
    }
    Ok(())
}

pub fn validate_dataset_descriptions(doc: &DatasetDescriptions) -> Result<()> {
    check_service(&doc.base.service)?;
    for fr in &doc.frameworks {
        framework_core(fr)?;
        require(
            !fr.datasets.is_empty(),
            "dataset descriptions require at least one Dataset per framework",
        )?;
        for ds in &fr.datasets {
            dataset_core(ds)?;
        }
    }
    Ok(())
}

pub fn validate_data_descriptions(doc: &DataDescriptions) -> Result<()> {
    check_service(&doc.base.service)?;
    for fr in &doc.frameworks {
        framework_core(fr)?;
        for ds in &fr.datasets {
            dataset_core(ds)?;
            let cs = ds.columnset.as_ref().ok_or_else(|| {
                TjsError::Validation(format!(
                    "data description of {} requires a Columnset",
                    ds.dataset_uri
                ))
            })?;
            columnset_rules(cs)?;
        }
    }
    Ok(())
}

pub fn validate_framework_key_description(doc: &FrameworkKeyDescription) -> Result<()> {
    check_service(&doc.base.service)?;
    let fr = &doc.framework;
    framework_core(fr)?;
    let key = fr.framework_key.as_ref().ok_or_else(|| {
        TjsError::Validation("key description requires a FrameworkKey".to_string())
    })?;
    require(
        !key.columns.is_empty(),
        "FrameworkKey requires at least one Column",
    )?;
    let rowset = fr
        .rowset
        .as_ref()
        .ok_or_else(|| TjsError::Validation("key description requires a Rowset".to_string()))?;
    for row in &rowset.rows {
        require(
            row.keys.len() == key.columns.len(),
            "key rows must carry one K per key column",
        )?;
    }
    Ok(())
}

pub fn validate_gdas(doc: &Gdas) -> Result<()> {
    check_service(&doc.base.service)?;
    let fr = &doc.framework;
    framework_core(fr)?;
    require(!fr.datasets.is_empty(), "GDAS requires a Dataset")?;
    for ds in &fr.datasets {
        dataset_core(ds)?;
        let cs = ds.columnset.as_ref().ok_or_else(|| {
            TjsError::Validation(format!("GDAS dataset {} requires a Columnset", ds.dataset_uri))
        })?;
        columnset_rules(cs)?;
        let rowset = ds.rowset.as_ref().ok_or_else(|| {
            TjsError::Validation(format!("GDAS dataset {} requires a Rowset", ds.dataset_uri))
        })?;
        for row in &rowset.rows {
            require(
                row.keys.len() == cs.framework_key.columns.len(),
                "rows must carry one K per key column",
            )?;
            require(
                row.values.len() == cs.attributes.len(),
                "rows must carry one V per attribute column",
            )?;
        }
    }
    Ok(())
}

pub fn validate_join_abilities(doc: &JoinAbilities) -> Result<()> {
    check_service(&doc.base.service)?;
    require(
        !doc.output_mechanisms.is_empty(),
        "JoinAbilities requires at least one output Mechanism",
    )?;
    for fr in &doc.spatial_frameworks {
        framework_core(fr)?;
    }
    Ok(())
}

pub fn validate_exception_report(doc: &OwsExceptionReport) -> Result<()> {
    require(
        !doc.exceptions.is_empty(),
        "ExceptionReport requires at least one Exception",
    )
}

fn framework_core(fr: &Framework) -> Result<()> {
    require(!fr.framework_uri.is_empty(), "Framework requires FrameworkURI")?;
    require(!fr.organization.is_empty(), "Framework requires Organization")?;
    require(!fr.title.is_empty(), "Framework requires Title")
}

fn dataset_core(ds: &Dataset) -> Result<()> {
    require(!ds.dataset_uri.is_empty(), "Dataset requires DatasetURI")?;
    require(!ds.organization.is_empty(), "Dataset requires Organization")?;
    require(!ds.title.is_empty(), "Dataset requires Title")
}

fn columnset_rules(cs: &Columnset) -> Result<()> {
    require(
        !cs.framework_key.columns.is_empty(),
        "Columnset FrameworkKey requires at least one Column",
    )?;
    for col in &cs.attributes {
        column_rules(col)?;
    }
    Ok(())
}

/// Rank is what distinguishes ordinal from nominal classes, so ordinal
/// value classes must carry it and nominal ones must not.
fn column_rules(col: &Column) -> Result<()> {
    match &col.values {
        Some(Values::Ordinal(ordinal)) => {
            if let Some(classes) = &ordinal.classes {
                for value in &classes.values {
                    if value.rank.is_none() {
                        return fail(format!(
                            "ordinal column {} requires a rank on value {}",
                            col.name, value.identifier
                        ));
                    }
                }
            }
        }
        Some(Values::Nominal(nominal)) => {
            if let Some(classes) = &nominal.classes {
                for value in &classes.values {
                    if value.rank.is_some() {
                        return fail(format!(
                            "nominal column {} must not rank value {}",
                            col.name, value.identifier
                        ));
                    }
                }
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framework() -> Framework {
        Framework {
            framework_uri: "http://example.com/fw".to_string(),
            organization: "Example Org".to_string(),
            title: "Example Framework".to_string(),
            abstract_: "A framework".to_string(),
            reference_date: ReferenceDate::new("2011"),
            version: "1".to_string(),
            ..Default::default()
        }
    }

    fn key_column() -> KeyColumn {
        KeyColumn {
            name: "GEO".to_string(),
            data_type: DataType::String,
            length: 4,
            decimals: None,
        }
    }

    #[test]
    fn linkage_key_syntax() {
        assert!(validate_linkage_keys("1,2,3").is_ok());
        assert!(validate_linkage_keys("1-10,12").is_ok());
        assert!(validate_linkage_keys("").is_err());
        assert!(validate_linkage_keys("1,,3").is_err());
        assert!(validate_linkage_keys("1-").is_err());
        assert!(validate_linkage_keys("1,1").is_err());
        assert!(validate_linkage_keys("1-5,5").is_err());
    }

    #[test]
    fn filter_value_needs_filter_column() {
        let req = GetData {
            base: RequestBase::default(),
            framework_uri: "http://example.com/fw".to_string(),
            dataset_uri: "http://example.com/ds".to_string(),
            filter_value: Some("urban".to_string()),
            ..Default::default()
        };
        assert!(validate_get_data(&req).is_err());
    }

    #[test]
    fn join_data_needs_exactly_one_attribute_data_form() {
        let mut req = JoinData::default();
        assert!(validate_join_data(&req).is_err());
        req.attribute_data.get_data_url = Some("http://example.com/getdata".to_string());
        assert!(validate_join_data(&req).is_ok());
        req.attribute_data.get_data_xml = Some(GetDataXml {
            framework_uri: "http://example.com/fw".to_string(),
            dataset_uri: "http://example.com/ds".to_string(),
            ..Default::default()
        });
        assert!(validate_join_data(&req).is_err());
    }

    #[test]
    fn framework_descriptions_require_key_and_bounds() {
        let mut doc = FrameworkDescriptions {
            base: ResponseBase::default(),
            frameworks: vec![framework()],
        };
        assert!(validate_framework_descriptions(&doc).is_err());

        doc.frameworks[0].framework_key = Some(FrameworkKey { columns: Vec::new() });
        assert!(validate_framework_descriptions(&doc).is_err());

        doc.frameworks[0].framework_key = Some(FrameworkKey {
            columns: vec![key_column()],
        });
        assert!(validate_framework_descriptions(&doc).is_err());

        doc.frameworks[0].bounding_coordinates = Some(BoundingCoordinates {
            north: 83.1,
            south: 41.7,
            east: -52.6,
            west: -141.0,
        });
        assert!(validate_framework_descriptions(&doc).is_ok());
    }

    #[test]
    fn dataset_descriptions_require_a_dataset() {
        let mut doc = DatasetDescriptions {
            base: ResponseBase::default(),
            frameworks: vec![framework()],
        };
        assert!(validate_dataset_descriptions(&doc).is_err());

        doc.frameworks[0].datasets.push(Dataset {
            dataset_uri: "http://example.com/ds".to_string(),
            organization: "Example Org".to_string(),
            title: "Example Dataset".to_string(),
            ..Default::default()
        });
        assert!(validate_dataset_descriptions(&doc).is_ok());
    }

    #[test]
    fn data_descriptions_require_a_columnset() {
        let mut fr = framework();
        fr.datasets.push(Dataset {
            dataset_uri: "http://example.com/ds".to_string(),
            organization: "Example Org".to_string(),
            title: "Example Dataset".to_string(),
            ..Default::default()
        });
        let mut doc = DataDescriptions {
            base: ResponseBase::default(),
            frameworks: vec![fr],
        };
        assert!(validate_data_descriptions(&doc).is_err());

        doc.frameworks[0].datasets[0].columnset = Some(Columnset {
            framework_key: ColumnsetKey {
                columns: vec![key_column()],
                ..Default::default()
            },
            attributes: Vec::new(),
        });
        assert!(validate_data_descriptions(&doc).is_ok());
    }

    #[test]
    fn gdas_requires_columnset_and_rowset() {
        let mut fr = framework();
        fr.datasets.push(Dataset {
            dataset_uri: "http://example.com/ds".to_string(),
            organization: "Example Org".to_string(),
            title: "Example Dataset".to_string(),
            ..Default::default()
        });
        let mut doc = Gdas {
            base: ResponseBase::default(),
            framework: fr,
        };
        assert!(validate_gdas(&doc).is_err());

        let ds = &mut doc.framework.datasets[0];
        ds.columnset = Some(Columnset {
            framework_key: ColumnsetKey {
                columns: vec![key_column()],
                ..Default::default()
            },
            attributes: Vec::new(),
        });
        ds.rowset = Some(Rowset {
            rows: vec![Row {
                keys: vec![K::new("3510")],
                title: None,
                values: Vec::new(),
            }],
        });
        assert!(validate_gdas(&doc).is_ok());
    }

    #[test]
    fn gdas_row_shape_must_match_columnset() {
        let mut fr = framework();
        fr.datasets.push(Dataset {
            dataset_uri: "http://example.com/ds".to_string(),
            organization: "Example Org".to_string(),
            title: "Example Dataset".to_string(),
            columnset: Some(Columnset {
                framework_key: ColumnsetKey {
                    columns: vec![key_column()],
                    ..Default::default()
                },
                attributes: Vec::new(),
            }),
            rowset: Some(Rowset {
                rows: vec![Row {
                    keys: Vec::new(),
                    title: None,
                    values: Vec::new(),
                }],
            }),
            ..Default::default()
        });
        let doc = Gdas {
            base: ResponseBase::default(),
            framework: fr,
        };
        assert!(validate_gdas(&doc).is_err());
    }

    #[test]
    fn ordinal_values_need_ranks() {
        let column = Column {
            name: "density_class".to_string(),
            data_type: DataType::String,
            length: 10,
            decimals: None,
            title: "Density class".to_string(),
            abstract_: "Population density class".to_string(),
            documentation: None,
            purpose: Purpose::Attribute,
            get_data_request: None,
            values: Some(Values::Ordinal(Ordinal {
                classes: Some(Classes {
                    title: "Classes".to_string(),
                    abstract_: "Density classes".to_string(),
                    documentation: None,
                    values: vec![ValueClass {
                        identifier: "low".to_string(),
                        title: "Low".to_string(),
                        abstract_: "Low density".to_string(),
                        documentation: None,
                        color: None,
                        rank: None,
                    }],
                }),
                exceptions: None,
            })),
        };
        assert!(column_rules(&column).is_err());
    }

    #[test]
    fn wrong_service_is_rejected() {
        let req = DescribeFrameworks {
            base: RequestBase {
                service: "WFS".to_string(),
                ..Default::default()
            },
            framework_uri: None,
        };
        assert!(validate(&Document::DescribeFrameworks(req)).is_err());
    }
}
