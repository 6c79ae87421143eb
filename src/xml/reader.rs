//! Typed readers: element tree to model structs
//!
//! One function per schema type, matching elements by local name. Unknown
//! elements and attributes are skipped so documents from servers with
//! vendor extensions still read.

use super::tree::Element;
use crate::model::*;
use crate::{Result, TjsError};
use std::str::FromStr;

fn parse_attr<T: FromStr<Err = TjsError>>(el: &Element, name: &str) -> Result<Option<T>> {
    el.attr(name).map(T::from_str).transpose()
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1")
}

fn parse_u64(el: &Element, name: &str) -> Result<Option<u64>> {
    el.attr(name)
        .map(|v| {
            v.parse::<u64>()
                .map_err(|_| TjsError::Parse(format!("{name} is not an integer: {v}")))
        })
        .transpose()
}

fn parse_decimal(el: &Element, name: &str) -> Result<f64> {
    let text = el.require_child_text(name)?;
    text.parse::<f64>()
        .map_err(|_| TjsError::Parse(format!("{name} is not a decimal: {text}")))
}

/// Child element whose only payload is an `xlink:href` attribute
/// (`GetDataRequestType` and friends)
fn href_child(el: &Element, name: &str) -> Result<Option<String>> {
    el.child(name).map(|c| c.require_attr("href")).transpose()
}

pub(super) fn request_base(el: &Element) -> Result<RequestBase> {
    Ok(RequestBase {
        service: el
            .attr("service")
            .unwrap_or(crate::vocabulary::SERVICE)
            .to_string(),
        version: parse_attr(el, "version")?,
        language: el.attr("language").map(str::to_string),
    })
}

pub(super) fn response_base(el: &Element) -> Result<ResponseBase> {
    Ok(ResponseBase {
        service: el
            .attr("service")
            .unwrap_or(crate::vocabulary::SERVICE)
            .to_string(),
        version: parse_attr(el, "version")?.unwrap_or_default(),
        lang: el.attr("lang").map(str::to_string),
        capabilities: el.attr("capabilities").map(str::to_string),
    })
}

fn reference_date(el: &Element) -> Result<ReferenceDate> {
    let rd = el.require_child("ReferenceDate")?;
    Ok(ReferenceDate {
        value: rd.text(),
        start_date: rd.attr("startDate").map(str::to_string),
    })
}

fn bounding_coordinates(el: &Element) -> Result<BoundingCoordinates> {
    Ok(BoundingCoordinates {
        north: parse_decimal(el, "North")?,
        south: parse_decimal(el, "South")?,
        east: parse_decimal(el, "East")?,
        west: parse_decimal(el, "West")?,
    })
}

fn key_column(el: &Element) -> Result<KeyColumn> {
    Ok(KeyColumn {
        name: el.require_attr("name")?,
        data_type: DataType::from_str(&el.require_attr("type")?)?,
        length: parse_u64(el, "length")?
            .ok_or_else(|| TjsError::Parse("missing required attribute length on Column".into()))?,
        decimals: parse_u64(el, "decimals")?,
    })
}

fn framework_key(el: &Element) -> Result<FrameworkKey> {
    Ok(FrameworkKey {
        columns: el
            .children_named("Column")
            .map(key_column)
            .collect::<Result<_>>()?,
    })
}

fn columnset_key(el: &Element) -> Result<ColumnsetKey> {
    Ok(ColumnsetKey {
        complete: parse_bool(&el.require_attr("complete")?),
        relationship: Relationship::from_str(&el.require_attr("relationship")?)?,
        columns: el
            .children_named("Column")
            .map(key_column)
            .collect::<Result<_>>()?,
    })
}

fn column(el: &Element) -> Result<Column> {
    Ok(Column {
        name: el.require_attr("name")?,
        data_type: DataType::from_str(&el.require_attr("type")?)?,
        length: parse_u64(el, "length")?
            .ok_or_else(|| TjsError::Parse("missing required attribute length on Column".into()))?,
        decimals: parse_u64(el, "decimals")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        documentation: el.child_text("Documentation"),
        purpose: Purpose::from_str(&el.require_attr("purpose")?)?,
        get_data_request: href_child(el, "GetDataRequest")?,
        values: el.child("Values").map(values).transpose()?,
    })
}

fn values(el: &Element) -> Result<Values> {
    if let Some(n) = el.child("Nominal") {
        Ok(Values::Nominal(Nominal {
            classes: n.child("Classes").map(classes).transpose()?,
            exceptions: n.child("Exceptions").map(exceptions).transpose()?,
        }))
    } else if let Some(o) = el.child("Ordinal") {
        Ok(Values::Ordinal(Ordinal {
            classes: o.child("Classes").map(classes).transpose()?,
            exceptions: o.child("Exceptions").map(exceptions).transpose()?,
        }))
    } else if let Some(c) = el.child("Count") {
        Ok(Values::Count(Count {
            uom: uom(c.require_child("UOM")?)?,
            uncertainty: c.child("Uncertainty").map(uncertainty).transpose()?,
            exceptions: c.child("Exceptions").map(exceptions).transpose()?,
        }))
    } else if let Some(m) = el.child("Measure") {
        Ok(Values::Measure(Measure {
            uom: uom(m.require_child("UOM")?)?,
            uncertainty: m.child("Uncertainty").map(uncertainty).transpose()?,
            exceptions: m.child("Exceptions").map(exceptions).transpose()?,
        }))
    } else {
        Err(TjsError::Parse(
            "Values requires one of Nominal, Ordinal, Count, Measure".to_string(),
        ))
    }
}

fn classes(el: &Element) -> Result<Classes> {
    Ok(Classes {
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        documentation: el.child_text("Documentation"),
        values: el
            .children_named("Value")
            .map(value_class)
            .collect::<Result<_>>()?,
    })
}

fn value_class(el: &Element) -> Result<ValueClass> {
    Ok(ValueClass {
        identifier: el.require_child_text("Identifier")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        documentation: el.child_text("Documentation"),
        color: el.attr("color").map(str::to_string),
        rank: parse_u64(el, "rank")?,
    })
}

fn exceptions(el: &Element) -> Result<Exceptions> {
    Ok(Exceptions {
        nulls: el
            .children_named("Null")
            .map(null_value)
            .collect::<Result<_>>()?,
    })
}

fn null_value(el: &Element) -> Result<NullValue> {
    Ok(NullValue {
        identifier: el.require_child_text("Identifier")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        documentation: el.child_text("Documentation"),
        color: el.attr("color").map(str::to_string),
    })
}

fn uom(el: &Element) -> Result<Uom> {
    Ok(Uom {
        short_form: el.child_text("ShortForm"),
        long_form: el.child_text("LongForm"),
        reference: el.child_text("Reference"),
    })
}

fn uncertainty(el: &Element) -> Result<Uncertainty> {
    Ok(Uncertainty {
        value: el.text(),
        gaussian: Gaussian::from_str(&el.require_attr("gaussian")?)?,
    })
}

fn rowset(el: &Element) -> Result<Rowset> {
    Ok(Rowset {
        rows: el.children_named("Row").map(row).collect::<Result<_>>()?,
    })
}

fn row(el: &Element) -> Result<Row> {
    Ok(Row {
        keys: el.children_named("K").map(k_cell).collect::<Result<_>>()?,
        title: el.child_text("Title"),
        values: el.children_named("V").map(v_cell).collect::<Result<_>>()?,
    })
}

fn k_cell(el: &Element) -> Result<K> {
    Ok(K {
        value: el.text(),
        aid: el.attr("aid").map(str::to_string),
    })
}

fn v_cell(el: &Element) -> Result<V> {
    Ok(V {
        value: el.text(),
        aid: el.attr("aid").map(str::to_string),
        null: el.attr("null").map(parse_bool).unwrap_or(false),
    })
}

fn columnset(el: &Element) -> Result<Columnset> {
    Ok(Columnset {
        framework_key: columnset_key(el.require_child("FrameworkKey")?)?,
        attributes: el
            .require_child("Attributes")?
            .children_named("Column")
            .map(column)
            .collect::<Result<_>>()?,
    })
}

pub(super) fn dataset(el: &Element) -> Result<Dataset> {
    Ok(Dataset {
        dataset_uri: el.require_child_text("DatasetURI")?,
        organization: el.require_child_text("Organization")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        reference_date: reference_date(el)?,
        version: el.require_child_text("Version")?,
        documentation: el.child_text("Documentation"),
        describe_data_request: href_child(el, "DescribeDataRequest")?,
        columnset: el.child("Columnset").map(columnset).transpose()?,
        rowset: el.child("Rowset").map(rowset).transpose()?,
    })
}

pub(super) fn framework(el: &Element) -> Result<Framework> {
    Ok(Framework {
        framework_uri: el.require_child_text("FrameworkURI")?,
        organization: el.require_child_text("Organization")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        reference_date: reference_date(el)?,
        version: el.require_child_text("Version")?,
        documentation: el.child_text("Documentation"),
        framework_key: el.child("FrameworkKey").map(framework_key).transpose()?,
        bounding_coordinates: el
            .child("BoundingCoordinates")
            .map(bounding_coordinates)
            .transpose()?,
        describe_datasets_request: href_child(el, "DescribeDatasetsRequest")?,
        datasets: el
            .children_named("Dataset")
            .map(dataset)
            .collect::<Result<_>>()?,
        rowset: el.child("Rowset").map(rowset).transpose()?,
    })
}

fn frameworks_of(el: &Element) -> Result<Vec<Framework>> {
    el.children_named("Framework").map(framework).collect()
}

pub(super) fn framework_descriptions(el: &Element) -> Result<FrameworkDescriptions> {
    Ok(FrameworkDescriptions {
        base: response_base(el)?,
        frameworks: frameworks_of(el)?,
    })
}

pub(super) fn dataset_descriptions(el: &Element) -> Result<DatasetDescriptions> {
    Ok(DatasetDescriptions {
        base: response_base(el)?,
        frameworks: frameworks_of(el)?,
    })
}

pub(super) fn data_descriptions(el: &Element) -> Result<DataDescriptions> {
    Ok(DataDescriptions {
        base: response_base(el)?,
        frameworks: frameworks_of(el)?,
    })
}

pub(super) fn framework_key_description(el: &Element) -> Result<FrameworkKeyDescription> {
    Ok(FrameworkKeyDescription {
        base: response_base(el)?,
        framework: framework(el.require_child("Framework")?)?,
    })
}

pub(super) fn gdas(el: &Element) -> Result<Gdas> {
    Ok(Gdas {
        base: response_base(el)?,
        framework: framework(el.require_child("Framework")?)?,
    })
}

fn mechanism(el: &Element) -> Result<Mechanism> {
    Ok(Mechanism {
        identifier: el.require_child_text("Identifier")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        reference: el.require_child_text("Reference")?,
    })
}

fn styling(el: &Element) -> Result<Styling> {
    Ok(Styling {
        identifier: el.require_child_text("Identifier")?,
        title: el.require_child_text("Title")?,
        abstract_: el.require_child_text("Abstract")?,
        reference: el.require_child_text("Reference")?,
        schema: el.child_text("Schema"),
    })
}

pub(super) fn join_abilities(el: &Element) -> Result<JoinAbilities> {
    Ok(JoinAbilities {
        base: response_base(el)?,
        spatial_frameworks: match el.child("SpatialFrameworks") {
            Some(sf) => frameworks_of(sf)?,
            None => Vec::new(),
        },
        attribute_limit: el
            .child_text("AttributeLimit")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| TjsError::Parse(format!("AttributeLimit is not an integer: {v}")))
            })
            .transpose()?,
        output_mechanisms: match el.child("OutputMechanisms") {
            Some(om) => om
                .children_named("Mechanism")
                .map(mechanism)
                .collect::<Result<_>>()?,
            None => Vec::new(),
        },
        output_stylings: match el.child("OutputStylings") {
            Some(os) => os
                .children_named("Styling")
                .map(styling)
                .collect::<Result<_>>()?,
            None => Vec::new(),
        },
        classification_schema_url: el.child_text("ClassificationSchemaURL"),
        update_supported: el.attr("updateSupported").map(parse_bool).unwrap_or(false),
    })
}

fn status(el: &Element) -> Result<Status> {
    let state = if let Some(a) = el.child("Accepted") {
        StatusState::Accepted(a.text())
    } else if let Some(c) = el.child("Completed") {
        StatusState::Completed(c.text())
    } else if el.child("Failed").is_some() {
        StatusState::Failed
    } else {
        return Err(TjsError::Parse(
            "Status requires one of Accepted, Completed, Failed".to_string(),
        ));
    };
    Ok(Status {
        creation_time: el.require_attr("creationTime")?,
        href: el.require_attr("href")?,
        state,
    })
}

fn output(el: &Element) -> Result<Output> {
    Ok(Output {
        mechanism: mechanism(el.require_child("Mechanism")?)?,
        resource: el.child("Resource").map(resource).transpose()?,
        exception_report: match el.child("ExceptionReport") {
            Some(er) => er
                .children_named("Exception")
                .map(ows_exception)
                .collect::<Result<_>>()?,
            None => Vec::new(),
        },
    })
}

fn resource(el: &Element) -> Result<Resource> {
    Ok(Resource {
        url: el.require_child_text("URL")?,
        parameters: el
            .children_named("Parameter")
            .map(|p| {
                Ok(Parameter {
                    name: p.require_attr("name")?,
                    value: p.text(),
                })
            })
            .collect::<Result<_>>()?,
    })
}

pub(super) fn join_data_response(el: &Element) -> Result<JoinDataResponse> {
    Ok(JoinDataResponse {
        base: response_base(el)?,
        status: status(el.require_child("Status")?)?,
        data_inputs: DataInputs {
            framework: framework(el.require_child("DataInputs")?.require_child("Framework")?)?,
        },
        joined_outputs: match el.child("JoinedOutputs") {
            Some(jo) => jo
                .children_named("Output")
                .map(output)
                .collect::<Result<_>>()?,
            None => Vec::new(),
        },
    })
}

pub(super) fn capabilities(el: &Element) -> Result<Capabilities> {
    Ok(Capabilities {
        service: el
            .attr("service")
            .unwrap_or(crate::vocabulary::SERVICE)
            .to_string(),
        version: parse_attr(el, "version")?.unwrap_or_default(),
        update_sequence: el.attr("updateSequence").map(str::to_string),
        lang: el.attr("lang").map(str::to_string),
        service_identification: el
            .child("ServiceIdentification")
            .map(service_identification)
            .transpose()?,
        service_provider: el
            .child("ServiceProvider")
            .map(service_provider)
            .transpose()?,
        operations_metadata: el
            .child("OperationsMetadata")
            .map(operations_metadata)
            .transpose()?,
        languages: match el.child("Languages") {
            Some(langs) => langs
                .children_named("Language")
                .map(|l| Ok(l.text()))
                .collect::<Result<_>>()?,
            None => Vec::new(),
        },
        wsdl: href_child(el, "WSDL")?,
    })
}

fn service_identification(el: &Element) -> Result<ServiceIdentification> {
    Ok(ServiceIdentification {
        title: el.require_child_text("Title")?,
        abstract_: el.child_text("Abstract"),
        keywords: match el.child("Keywords") {
            Some(kw) => kw.children_named("Keyword").map(|k| k.text()).collect(),
            None => Vec::new(),
        },
        service_type: el.require_child_text("ServiceType")?,
        service_type_versions: el
            .children_named("ServiceTypeVersion")
            .map(|v| v.text())
            .collect(),
        fees: el.child_text("Fees"),
        access_constraints: el.child_text("AccessConstraints"),
    })
}

fn service_provider(el: &Element) -> Result<ServiceProvider> {
    Ok(ServiceProvider {
        provider_name: el.require_child_text("ProviderName")?,
        provider_site: href_child(el, "ProviderSite")?,
        service_contact: el
            .child("ServiceContact")
            .map(|sc| -> Result<ServiceContact> {
                let contact_info = sc.child("ContactInfo");
                Ok(ServiceContact {
                    individual_name: sc.child_text("IndividualName"),
                    position_name: sc.child_text("PositionName"),
                    phone: contact_info
                        .and_then(|ci| ci.child("Phone"))
                        .and_then(|p| p.child_text("Voice")),
                    email: contact_info
                        .and_then(|ci| ci.child("Address"))
                        .and_then(|a| a.child_text("ElectronicMailAddress")),
                })
            })
            .transpose()?,
    })
}

fn operations_metadata(el: &Element) -> Result<OperationsMetadata> {
    let mut operations = Vec::new();
    for op in el.children_named("Operation") {
        let mut get_urls = Vec::new();
        let mut post_urls = Vec::new();
        for dcp in op.children_named("DCP") {
            if let Some(http) = dcp.child("HTTP") {
                for get in http.children_named("Get") {
                    get_urls.push(get.require_attr("href")?);
                }
                for post in http.children_named("Post") {
                    post_urls.push(post.require_attr("href")?);
                }
            }
        }
        let parameters = op
            .children_named("Parameter")
            .map(|p| {
                Ok(OwsParameter {
                    name: p.require_attr("name")?,
                    allowed_values: match p.child("AllowedValues") {
                        Some(av) => av.children_named("Value").map(|v| v.text()).collect(),
                        None => Vec::new(),
                    },
                })
            })
            .collect::<Result<_>>()?;
        operations.push(Operation {
            name: op.require_attr("name")?,
            get_urls,
            post_urls,
            parameters,
        });
    }
    Ok(OperationsMetadata { operations })
}

fn ows_exception(el: &Element) -> Result<OwsException> {
    Ok(OwsException {
        exception_code: el.require_attr("exceptionCode")?,
        locator: el.attr("locator").map(str::to_string),
        text: el.children_named("ExceptionText").map(|t| t.text()).collect(),
    })
}

pub(super) fn ows_exception_report(el: &Element) -> Result<OwsExceptionReport> {
    Ok(OwsExceptionReport {
        version: el.attr("version").unwrap_or("1.1.0").to_string(),
        lang: el.attr("lang").map(str::to_string),
        exceptions: el
            .children_named("Exception")
            .map(ows_exception)
            .collect::<Result<_>>()?,
    })
}

pub(super) fn get_capabilities(el: &Element) -> Result<GetCapabilities> {
    Ok(GetCapabilities {
        service: el
            .attr("service")
            .unwrap_or(crate::vocabulary::SERVICE)
            .to_string(),
        accept_versions: match el.child("AcceptVersions") {
            Some(av) => av.children_named("Version").map(|v| v.text()).collect(),
            None => Vec::new(),
        },
        sections: el
            .child_text("Sections")
            .map(|s| {
                s.split(',')
                    .map(|part| Section::from_str(part.trim()))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default(),
        accept_formats: el
            .child_text("AcceptFormats")
            .map(|s| s.split(',').map(|f| f.trim().to_string()).collect())
            .unwrap_or_default(),
        accept_languages: el
            .child_text("AcceptLanguages")
            .map(|s| s.split(',').map(|l| l.trim().to_string()).collect())
            .unwrap_or_default(),
        update_sequence: el.attr("updateSequence").map(str::to_string),
    })
}

pub(super) fn describe_frameworks(el: &Element) -> Result<DescribeFrameworks> {
    Ok(DescribeFrameworks {
        base: request_base(el)?,
        framework_uri: el.child_text("FrameworkURI"),
    })
}

pub(super) fn describe_datasets(el: &Element) -> Result<DescribeDatasets> {
    Ok(DescribeDatasets {
        base: request_base(el)?,
        framework_uri: el.child_text("FrameworkURI"),
        dataset_uri: el.child_text("DatasetURI"),
    })
}

pub(super) fn describe_data(el: &Element) -> Result<DescribeData> {
    Ok(DescribeData {
        base: request_base(el)?,
        framework_uri: el.child_text("FrameworkURI"),
        dataset_uri: el.child_text("DatasetURI"),
        attributes: el.child_text("Attributes"),
    })
}

pub(super) fn describe_key(el: &Element) -> Result<DescribeKey> {
    Ok(DescribeKey {
        base: request_base(el)?,
        framework_uri: el.require_child_text("FrameworkURI")?,
    })
}

pub(super) fn describe_join_abilities(el: &Element) -> Result<DescribeJoinAbilities> {
    Ok(DescribeJoinAbilities {
        base: request_base(el)?,
    })
}

pub(super) fn get_data(el: &Element) -> Result<GetData> {
    Ok(GetData {
        base: request_base(el)?,
        framework_uri: el.require_child_text("FrameworkURI")?,
        dataset_uri: el.require_child_text("DatasetURI")?,
        attributes: el.child_text("Attributes"),
        linkage_keys: el.child_text("LinkageKeys"),
        filter_column: el.child_text("FilterColumn"),
        filter_value: el.child_text("FilterValue"),
        xsl: el.child_text("XSL"),
        aid: el.attr("aid").map(parse_bool).unwrap_or(false),
    })
}

pub(super) fn join_data(el: &Element) -> Result<JoinData> {
    let ad = el.require_child("AttributeData")?;
    Ok(JoinData {
        base: request_base(el)?,
        attribute_data: AttributeData {
            get_data_url: ad.child_text("GetDataURL"),
            get_data_xml: ad.child("GetDataXML").map(get_data_xml).transpose()?,
        },
        map_styling: el
            .child("MapStyling")
            .map(|ms| -> Result<MapStyling> {
                Ok(MapStyling {
                    styling_identifier: ms.require_child_text("StylingIdentifier")?,
                    styling_url: ms.require_child_text("StylingURL")?,
                })
            })
            .transpose()?,
        classification_url: el.child_text("ClassificationURL"),
        update: el.attr("update").map(parse_bool).unwrap_or(false),
    })
}

fn get_data_xml(el: &Element) -> Result<GetDataXml> {
    Ok(GetDataXml {
        get_data_host: el.attr("getDataHost").map(str::to_string),
        language: el.attr("language").map(str::to_string),
        framework_uri: el.require_child_text("FrameworkURI")?,
        dataset_uri: el.require_child_text("DatasetURI")?,
        attributes: el.child_text("Attributes"),
        linkage_keys: el.child_text("LinkageKeys"),
    })
}
