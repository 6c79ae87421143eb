//! Typed writers: model structs to XML
//!
//! Emits documents in the schema's canonical child order. Root elements
//! carry the namespace declarations and a schemaLocation hint; nested
//! elements stay in the default (TJS) namespace, OWS elements take the
//! `ows` prefix.

use crate::model::*;
use crate::vocabulary::{OWS_NS, TJS_NS, TJS_SCHEMA_LOCATION, XLINK_NS, XSI_NS};
use crate::{Result, TjsError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

type W = Writer<Vec<u8>>;

fn emit(w: &mut W, event: Event<'_>) -> Result<()> {
    w.write_event(event)
        .map_err(|e| TjsError::Serialize(e.to_string()))
}

fn start(w: &mut W, el: BytesStart<'_>) -> Result<()> {
    emit(w, Event::Start(el))
}

fn end(w: &mut W, name: &str) -> Result<()> {
    emit(w, Event::End(BytesEnd::new(name)))
}

fn text_el(w: &mut W, name: &str, value: &str) -> Result<()> {
    start(w, BytesStart::new(name))?;
    emit(w, Event::Text(BytesText::new(value)))?;
    end(w, name)
}

fn opt_text_el(w: &mut W, name: &str, value: Option<&String>) -> Result<()> {
    match value {
        Some(v) => text_el(w, name, v),
        None => Ok(()),
    }
}

/// Element whose only payload is an `xlink:href` attribute
fn href_el(w: &mut W, name: &str, href: &str) -> Result<()> {
    let mut el = BytesStart::new(name);
    el.push_attribute(("xlink:href", href));
    emit(w, Event::Empty(el))
}

fn opt_href_el(w: &mut W, name: &str, href: Option<&String>) -> Result<()> {
    match href {
        Some(h) => href_el(w, name, h.as_str()),
        None => Ok(()),
    }
}

/// Response root carrying the full namespace set
fn response_root(name: &str, base: &ResponseBase) -> BytesStart<'static> {
    let mut el = root(name);
    el.push_attribute(("service", base.service.as_str()));
    el.push_attribute(("version", base.version.to_string().as_str()));
    if let Some(lang) = &base.lang {
        el.push_attribute(("xml:lang", lang.as_str()));
    }
    if let Some(cap) = &base.capabilities {
        el.push_attribute(("capabilities", cap.as_str()));
    }
    el
}

fn root(name: &str) -> BytesStart<'static> {
    let mut el = BytesStart::new(name.to_string());
    el.push_attribute(("xmlns", TJS_NS));
    el.push_attribute(("xmlns:ows", OWS_NS));
    el.push_attribute(("xmlns:xlink", XLINK_NS));
    el.push_attribute(("xmlns:xsi", XSI_NS));
    el.push_attribute(("xsi:schemaLocation", TJS_SCHEMA_LOCATION));
    el
}

fn request_root(name: &str, base: &RequestBase) -> BytesStart<'static> {
    let mut el = root(name);
    el.push_attribute(("service", base.service.as_str()));
    if let Some(version) = base.version {
        el.push_attribute(("version", version.to_string().as_str()));
    }
    if let Some(language) = &base.language {
        el.push_attribute(("language", language.as_str()));
    }
    el
}

pub(super) fn document(body: impl FnOnce(&mut W) -> Result<()>) -> Result<String> {
    let mut w = Writer::new(Vec::new());
    emit(&mut w, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    body(&mut w)?;
    String::from_utf8(w.into_inner()).map_err(|e| TjsError::Serialize(e.to_string()))
}

fn reference_date(w: &mut W, rd: &ReferenceDate) -> Result<()> {
    let mut el = BytesStart::new("ReferenceDate");
    if let Some(start_date) = &rd.start_date {
        el.push_attribute(("startDate", start_date.as_str()));
    }
    start(w, el)?;
    emit(w, Event::Text(BytesText::new(&rd.value)))?;
    end(w, "ReferenceDate")
}

fn bounding_coordinates(w: &mut W, bc: &BoundingCoordinates) -> Result<()> {
    start(w, BytesStart::new("BoundingCoordinates"))?;
    text_el(w, "North", &bc.north.to_string())?;
    text_el(w, "South", &bc.south.to_string())?;
    text_el(w, "East", &bc.east.to_string())?;
    text_el(w, "West", &bc.west.to_string())?;
    end(w, "BoundingCoordinates")
}

fn key_column(w: &mut W, col: &KeyColumn) -> Result<()> {
    let mut el = BytesStart::new("Column");
    el.push_attribute(("name", col.name.as_str()));
    el.push_attribute(("type", col.data_type.as_uri()));
    el.push_attribute(("length", col.length.to_string().as_str()));
    if let Some(decimals) = col.decimals {
        el.push_attribute(("decimals", decimals.to_string().as_str()));
    }
    emit(w, Event::Empty(el))
}

fn framework_key(w: &mut W, key: &FrameworkKey) -> Result<()> {
    start(w, BytesStart::new("FrameworkKey"))?;
    for col in &key.columns {
        key_column(w, col)?;
    }
    end(w, "FrameworkKey")
}

fn columnset(w: &mut W, cs: &Columnset) -> Result<()> {
    start(w, BytesStart::new("Columnset"))?;
    let mut key = BytesStart::new("FrameworkKey");
    key.push_attribute(("complete", if cs.framework_key.complete { "true" } else { "false" }));
    key.push_attribute(("relationship", cs.framework_key.relationship.to_string().as_str()));
    start(w, key)?;
    for col in &cs.framework_key.columns {
        key_column(w, col)?;
    }
    end(w, "FrameworkKey")?;
    start(w, BytesStart::new("Attributes"))?;
    for col in &cs.attributes {
        column(w, col)?;
    }
    end(w, "Attributes")?;
    end(w, "Columnset")
}

fn column(w: &mut W, col: &Column) -> Result<()> {
    let mut el = BytesStart::new("Column");
    el.push_attribute(("name", col.name.as_str()));
    el.push_attribute(("type", col.data_type.as_uri()));
    el.push_attribute(("length", col.length.to_string().as_str()));
    if let Some(decimals) = col.decimals {
        el.push_attribute(("decimals", decimals.to_string().as_str()));
    }
    el.push_attribute(("purpose", col.purpose.to_string().as_str()));
    start(w, el)?;
    text_el(w, "Title", &col.title)?;
    text_el(w, "Abstract", &col.abstract_)?;
    opt_text_el(w, "Documentation", col.documentation.as_ref())?;
    if let Some(v) = &col.values {
        values(w, v)?;
    }
    opt_href_el(w, "GetDataRequest", col.get_data_request.as_ref())?;
    end(w, "Column")
}

fn values(w: &mut W, v: &Values) -> Result<()> {
    start(w, BytesStart::new("Values"))?;
    match v {
        Values::Nominal(n) => {
            start(w, BytesStart::new("Nominal"))?;
            if let Some(c) = &n.classes {
                classes(w, c)?;
            }
            if let Some(e) = &n.exceptions {
                exceptions(w, e)?;
            }
            end(w, "Nominal")?;
        }
        Values::Ordinal(o) => {
            start(w, BytesStart::new("Ordinal"))?;
            if let Some(c) = &o.classes {
                classes(w, c)?;
            }
            if let Some(e) = &o.exceptions {
                exceptions(w, e)?;
            }
            end(w, "Ordinal")?;
        }
        Values::Count(c) => {
            start(w, BytesStart::new("Count"))?;
            uom(w, &c.uom)?;
            if let Some(u) = &c.uncertainty {
                uncertainty(w, u)?;
            }
            if let Some(e) = &c.exceptions {
                exceptions(w, e)?;
            }
            end(w, "Count")?;
        }
        Values::Measure(m) => {
            start(w, BytesStart::new("Measure"))?;
            uom(w, &m.uom)?;
            if let Some(u) = &m.uncertainty {
                uncertainty(w, u)?;
            }
            if let Some(e) = &m.exceptions {
                exceptions(w, e)?;
            }
            end(w, "Measure")?;
        }
    }
    end(w, "Values")
}

fn classes(w: &mut W, c: &Classes) -> Result<()> {
    start(w, BytesStart::new("Classes"))?;
    text_el(w, "Title", &c.title)?;
    text_el(w, "Abstract", &c.abstract_)?;
    opt_text_el(w, "Documentation", c.documentation.as_ref())?;
    for v in &c.values {
        let mut el = BytesStart::new("Value");
        if let Some(rank) = v.rank {
            el.push_attribute(("rank", rank.to_string().as_str()));
        }
        if let Some(color) = &v.color {
            el.push_attribute(("color", color.as_str()));
        }
        start(w, el)?;
        text_el(w, "Identifier", &v.identifier)?;
        text_el(w, "Title", &v.title)?;
        text_el(w, "Abstract", &v.abstract_)?;
        opt_text_el(w, "Documentation", v.documentation.as_ref())?;
        end(w, "Value")?;
    }
    end(w, "Classes")
}

fn exceptions(w: &mut W, e: &Exceptions) -> Result<()> {
    start(w, BytesStart::new("Exceptions"))?;
    for n in &e.nulls {
        let mut el = BytesStart::new("Null");
        if let Some(color) = &n.color {
            el.push_attribute(("color", color.as_str()));
        }
        start(w, el)?;
        text_el(w, "Identifier", &n.identifier)?;
        text_el(w, "Title", &n.title)?;
        text_el(w, "Abstract", &n.abstract_)?;
        opt_text_el(w, "Documentation", n.documentation.as_ref())?;
        end(w, "Null")?;
    }
    end(w, "Exceptions")
}

fn uom(w: &mut W, u: &Uom) -> Result<()> {
    start(w, BytesStart::new("UOM"))?;
    opt_text_el(w, "ShortForm", u.short_form.as_ref())?;
    opt_text_el(w, "LongForm", u.long_form.as_ref())?;
    opt_text_el(w, "Reference", u.reference.as_ref())?;
    end(w, "UOM")
}

fn uncertainty(w: &mut W, u: &Uncertainty) -> Result<()> {
    let mut el = BytesStart::new("Uncertainty");
    el.push_attribute(("gaussian", u.gaussian.to_string().as_str()));
    start(w, el)?;
    emit(w, Event::Text(BytesText::new(&u.value)))?;
    end(w, "Uncertainty")
}

fn rowset(w: &mut W, rs: &Rowset) -> Result<()> {
    start(w, BytesStart::new("Rowset"))?;
    for row in &rs.rows {
        start(w, BytesStart::new("Row"))?;
        for k in &row.keys {
            let mut el = BytesStart::new("K");
            if let Some(aid) = &k.aid {
                el.push_attribute(("aid", aid.as_str()));
            }
            start(w, el)?;
            emit(w, Event::Text(BytesText::new(&k.value)))?;
            end(w, "K")?;
        }
        opt_text_el(w, "Title", row.title.as_ref())?;
        for v in &row.values {
            let mut el = BytesStart::new("V");
            if let Some(aid) = &v.aid {
                el.push_attribute(("aid", aid.as_str()));
            }
            if v.null {
                el.push_attribute(("null", "true"));
            }
            start(w, el)?;
            emit(w, Event::Text(BytesText::new(&v.value)))?;
            end(w, "V")?;
        }
        end(w, "Row")?;
    }
    end(w, "Rowset")
}

fn dataset(w: &mut W, ds: &Dataset) -> Result<()> {
    start(w, BytesStart::new("Dataset"))?;
    text_el(w, "DatasetURI", &ds.dataset_uri)?;
    text_el(w, "Organization", &ds.organization)?;
    text_el(w, "Title", &ds.title)?;
    text_el(w, "Abstract", &ds.abstract_)?;
    reference_date(w, &ds.reference_date)?;
    text_el(w, "Version", &ds.version)?;
    opt_text_el(w, "Documentation", ds.documentation.as_ref())?;
    opt_href_el(w, "DescribeDataRequest", ds.describe_data_request.as_ref())?;
    if let Some(cs) = &ds.columnset {
        columnset(w, cs)?;
    }
    if let Some(rs) = &ds.rowset {
        rowset(w, rs)?;
    }
    end(w, "Dataset")
}

fn framework(w: &mut W, fr: &Framework) -> Result<()> {
    start(w, BytesStart::new("Framework"))?;
    text_el(w, "FrameworkURI", &fr.framework_uri)?;
    text_el(w, "Organization", &fr.organization)?;
    text_el(w, "Title", &fr.title)?;
    text_el(w, "Abstract", &fr.abstract_)?;
    reference_date(w, &fr.reference_date)?;
    text_el(w, "Version", &fr.version)?;
    opt_text_el(w, "Documentation", fr.documentation.as_ref())?;
    if let Some(key) = &fr.framework_key {
        framework_key(w, key)?;
    }
    if let Some(bc) = &fr.bounding_coordinates {
        bounding_coordinates(w, bc)?;
    }
    opt_href_el(
        w,
        "DescribeDatasetsRequest",
        fr.describe_datasets_request.as_ref(),
    )?;
    for ds in &fr.datasets {
        dataset(w, ds)?;
    }
    if let Some(rs) = &fr.rowset {
        rowset(w, rs)?;
    }
    end(w, "Framework")
}

fn framework_list_doc(
    w: &mut W,
    name: &str,
    base: &ResponseBase,
    frameworks: &[Framework],
) -> Result<()> {
    start(w, response_root(name, base))?;
    for fr in frameworks {
        framework(w, fr)?;
    }
    end(w, name)
}

pub(super) fn framework_descriptions(w: &mut W, doc: &FrameworkDescriptions) -> Result<()> {
    framework_list_doc(w, "FrameworkDescriptions", &doc.base, &doc.frameworks)
}

pub(super) fn dataset_descriptions(w: &mut W, doc: &DatasetDescriptions) -> Result<()> {
    framework_list_doc(w, "DatasetDescriptions", &doc.base, &doc.frameworks)
}

pub(super) fn data_descriptions(w: &mut W, doc: &DataDescriptions) -> Result<()> {
    framework_list_doc(w, "DataDescriptions", &doc.base, &doc.frameworks)
}

pub(super) fn framework_key_description(w: &mut W, doc: &FrameworkKeyDescription) -> Result<()> {
    start(w, response_root("FrameworkKeyDescription", &doc.base))?;
    framework(w, &doc.framework)?;
    end(w, "FrameworkKeyDescription")
}

pub(super) fn gdas(w: &mut W, doc: &Gdas) -> Result<()> {
    start(w, response_root("GDAS", &doc.base))?;
    framework(w, &doc.framework)?;
    end(w, "GDAS")
}

fn mechanism(w: &mut W, m: &Mechanism) -> Result<()> {
    start(w, BytesStart::new("Mechanism"))?;
    text_el(w, "Identifier", &m.identifier)?;
    text_el(w, "Title", &m.title)?;
    text_el(w, "Abstract", &m.abstract_)?;
    text_el(w, "Reference", &m.reference)?;
    end(w, "Mechanism")
}

fn styling(w: &mut W, s: &Styling) -> Result<()> {
    start(w, BytesStart::new("Styling"))?;
    text_el(w, "Identifier", &s.identifier)?;
    text_el(w, "Title", &s.title)?;
    text_el(w, "Abstract", &s.abstract_)?;
    text_el(w, "Reference", &s.reference)?;
    opt_text_el(w, "Schema", s.schema.as_ref())?;
    end(w, "Styling")
}

pub(super) fn join_abilities(w: &mut W, doc: &JoinAbilities) -> Result<()> {
    let mut el = response_root("JoinAbilities", &doc.base);
    el.push_attribute((
        "updateSupported",
        if doc.update_supported { "true" } else { "false" },
    ));
    start(w, el)?;
    if !doc.spatial_frameworks.is_empty() {
        start(w, BytesStart::new("SpatialFrameworks"))?;
        for fr in &doc.spatial_frameworks {
            framework(w, fr)?;
        }
        end(w, "SpatialFrameworks")?;
    }
    if let Some(limit) = doc.attribute_limit {
        text_el(w, "AttributeLimit", &limit.to_string())?;
    }
    start(w, BytesStart::new("OutputMechanisms"))?;
    for m in &doc.output_mechanisms {
        mechanism(w, m)?;
    }
    end(w, "OutputMechanisms")?;
    if !doc.output_stylings.is_empty() {
        start(w, BytesStart::new("OutputStylings"))?;
        for s in &doc.output_stylings {
            styling(w, s)?;
        }
        end(w, "OutputStylings")?;
    }
    opt_text_el(
        w,
        "ClassificationSchemaURL",
        doc.classification_schema_url.as_ref(),
    )?;
    end(w, "JoinAbilities")
}

fn status(w: &mut W, s: &Status) -> Result<()> {
    let mut el = BytesStart::new("Status");
    el.push_attribute(("creationTime", s.creation_time.as_str()));
    el.push_attribute(("href", s.href.as_str()));
    start(w, el)?;
    match &s.state {
        StatusState::Accepted(text) => text_el(w, "Accepted", text)?,
        StatusState::Completed(text) => text_el(w, "Completed", text)?,
        StatusState::Failed => emit(w, Event::Empty(BytesStart::new("Failed")))?,
    }
    end(w, "Status")
}

pub(super) fn join_data_response(w: &mut W, doc: &JoinDataResponse) -> Result<()> {
    start(w, response_root("JoinDataResponse", &doc.base))?;
    status(w, &doc.status)?;
    start(w, BytesStart::new("DataInputs"))?;
    framework(w, &doc.data_inputs.framework)?;
    end(w, "DataInputs")?;
    if !doc.joined_outputs.is_empty() {
        start(w, BytesStart::new("JoinedOutputs"))?;
        for out in &doc.joined_outputs {
            start(w, BytesStart::new("Output"))?;
            mechanism(w, &out.mechanism)?;
            if let Some(res) = &out.resource {
                start(w, BytesStart::new("Resource"))?;
                text_el(w, "URL", &res.url)?;
                for p in &res.parameters {
                    let mut el = BytesStart::new("Parameter");
                    el.push_attribute(("name", p.name.as_str()));
                    start(w, el)?;
                    emit(w, Event::Text(BytesText::new(&p.value)))?;
                    end(w, "Parameter")?;
                }
                end(w, "Resource")?;
            }
            if !out.exception_report.is_empty() {
                start(w, BytesStart::new("ExceptionReport"))?;
                for e in &out.exception_report {
                    ows_exception(w, e)?;
                }
                end(w, "ExceptionReport")?;
            }
            end(w, "Output")?;
        }
        end(w, "JoinedOutputs")?;
    }
    end(w, "JoinDataResponse")
}

pub(super) fn capabilities(w: &mut W, doc: &Capabilities) -> Result<()> {
    let mut el = root("Capabilities");
    el.push_attribute(("service", doc.service.as_str()));
    el.push_attribute(("version", doc.version.to_string().as_str()));
    if let Some(seq) = &doc.update_sequence {
        el.push_attribute(("updateSequence", seq.as_str()));
    }
    if let Some(lang) = &doc.lang {
        el.push_attribute(("xml:lang", lang.as_str()));
    }
    start(w, el)?;
    if let Some(si) = &doc.service_identification {
        service_identification(w, si)?;
    }
    if let Some(sp) = &doc.service_provider {
        service_provider(w, sp)?;
    }
    if let Some(om) = &doc.operations_metadata {
        operations_metadata(w, om)?;
    }
    if !doc.languages.is_empty() {
        start(w, BytesStart::new("Languages"))?;
        for lang in &doc.languages {
            text_el(w, "ows:Language", lang)?;
        }
        end(w, "Languages")?;
    }
    if let Some(wsdl) = &doc.wsdl {
        href_el(w, "WSDL", wsdl)?;
    }
    end(w, "Capabilities")
}

fn service_identification(w: &mut W, si: &ServiceIdentification) -> Result<()> {
    start(w, BytesStart::new("ows:ServiceIdentification"))?;
    text_el(w, "ows:Title", &si.title)?;
    opt_text_el(w, "ows:Abstract", si.abstract_.as_ref())?;
    if !si.keywords.is_empty() {
        start(w, BytesStart::new("ows:Keywords"))?;
        for kw in &si.keywords {
            text_el(w, "ows:Keyword", kw)?;
        }
        end(w, "ows:Keywords")?;
    }
    text_el(w, "ows:ServiceType", &si.service_type)?;
    for v in &si.service_type_versions {
        text_el(w, "ows:ServiceTypeVersion", v)?;
    }
    opt_text_el(w, "ows:Fees", si.fees.as_ref())?;
    opt_text_el(w, "ows:AccessConstraints", si.access_constraints.as_ref())?;
    end(w, "ows:ServiceIdentification")
}

fn service_provider(w: &mut W, sp: &ServiceProvider) -> Result<()> {
    start(w, BytesStart::new("ows:ServiceProvider"))?;
    text_el(w, "ows:ProviderName", &sp.provider_name)?;
    opt_href_el(w, "ows:ProviderSite", sp.provider_site.as_ref())?;
    if let Some(sc) = &sp.service_contact {
        start(w, BytesStart::new("ows:ServiceContact"))?;
        opt_text_el(w, "ows:IndividualName", sc.individual_name.as_ref())?;
        opt_text_el(w, "ows:PositionName", sc.position_name.as_ref())?;
        if sc.phone.is_some() || sc.email.is_some() {
            start(w, BytesStart::new("ows:ContactInfo"))?;
            if let Some(phone) = &sc.phone {
                start(w, BytesStart::new("ows:Phone"))?;
                text_el(w, "ows:Voice", phone)?;
                end(w, "ows:Phone")?;
            }
            if let Some(email) = &sc.email {
                start(w, BytesStart::new("ows:Address"))?;
                text_el(w, "ows:ElectronicMailAddress", email)?;
                end(w, "ows:Address")?;
            }
            end(w, "ows:ContactInfo")?;
        }
        end(w, "ows:ServiceContact")?;
    }
    end(w, "ows:ServiceProvider")
}

fn operations_metadata(w: &mut W, om: &OperationsMetadata) -> Result<()> {
    start(w, BytesStart::new("ows:OperationsMetadata"))?;
    for op in &om.operations {
        let mut el = BytesStart::new("ows:Operation");
        el.push_attribute(("name", op.name.as_str()));
        start(w, el)?;
        if !op.get_urls.is_empty() || !op.post_urls.is_empty() {
            start(w, BytesStart::new("ows:DCP"))?;
            start(w, BytesStart::new("ows:HTTP"))?;
            for url in &op.get_urls {
                href_el(w, "ows:Get", url)?;
            }
            for url in &op.post_urls {
                href_el(w, "ows:Post", url)?;
            }
            end(w, "ows:HTTP")?;
            end(w, "ows:DCP")?;
        }
        for p in &op.parameters {
            let mut el = BytesStart::new("ows:Parameter");
            el.push_attribute(("name", p.name.as_str()));
            start(w, el)?;
            if !p.allowed_values.is_empty() {
                start(w, BytesStart::new("ows:AllowedValues"))?;
                for v in &p.allowed_values {
                    text_el(w, "ows:Value", v)?;
                }
                end(w, "ows:AllowedValues")?;
            }
            end(w, "ows:Parameter")?;
        }
        end(w, "ows:Operation")?;
    }
    end(w, "ows:OperationsMetadata")
}

fn ows_exception(w: &mut W, e: &OwsException) -> Result<()> {
    let mut el = BytesStart::new("Exception");
    el.push_attribute(("exceptionCode", e.exception_code.as_str()));
    if let Some(locator) = &e.locator {
        el.push_attribute(("locator", locator.as_str()));
    }
    start(w, el)?;
    for text in &e.text {
        text_el(w, "ExceptionText", text)?;
    }
    end(w, "Exception")
}

pub(super) fn ows_exception_report(w: &mut W, doc: &OwsExceptionReport) -> Result<()> {
    let mut el = BytesStart::new("ExceptionReport");
    el.push_attribute(("xmlns", OWS_NS));
    el.push_attribute(("version", doc.version.as_str()));
    if let Some(lang) = &doc.lang {
        el.push_attribute(("xml:lang", lang.as_str()));
    }
    start(w, el)?;
    for e in &doc.exceptions {
        ows_exception(w, e)?;
    }
    end(w, "ExceptionReport")
}

pub(super) fn get_capabilities(w: &mut W, req: &GetCapabilities) -> Result<()> {
    let mut el = root("GetCapabilities");
    el.push_attribute(("service", req.service.as_str()));
    if let Some(seq) = &req.update_sequence {
        el.push_attribute(("updateSequence", seq.as_str()));
    }
    start(w, el)?;
    if !req.accept_versions.is_empty() {
        start(w, BytesStart::new("AcceptVersions"))?;
        for v in &req.accept_versions {
            text_el(w, "Version", v)?;
        }
        end(w, "AcceptVersions")?;
    }
    if !req.sections.is_empty() {
        let sections = req
            .sections
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        text_el(w, "Sections", &sections)?;
    }
    if !req.accept_formats.is_empty() {
        text_el(w, "AcceptFormats", &req.accept_formats.join(","))?;
    }
    if !req.accept_languages.is_empty() {
        text_el(w, "AcceptLanguages", &req.accept_languages.join(","))?;
    }
    end(w, "GetCapabilities")
}

pub(super) fn describe_frameworks(w: &mut W, req: &DescribeFrameworks) -> Result<()> {
    start(w, request_root("DescribeFrameworks", &req.base))?;
    opt_text_el(w, "FrameworkURI", req.framework_uri.as_ref())?;
    end(w, "DescribeFrameworks")
}

pub(super) fn describe_datasets(w: &mut W, req: &DescribeDatasets) -> Result<()> {
    start(w, request_root("DescribeDatasets", &req.base))?;
    opt_text_el(w, "FrameworkURI", req.framework_uri.as_ref())?;
    opt_text_el(w, "DatasetURI", req.dataset_uri.as_ref())?;
    end(w, "DescribeDatasets")
}

pub(super) fn describe_data(w: &mut W, req: &DescribeData) -> Result<()> {
    start(w, request_root("DescribeData", &req.base))?;
    opt_text_el(w, "FrameworkURI", req.framework_uri.as_ref())?;
    opt_text_el(w, "DatasetURI", req.dataset_uri.as_ref())?;
    opt_text_el(w, "Attributes", req.attributes.as_ref())?;
    end(w, "DescribeData")
}

pub(super) fn describe_key(w: &mut W, req: &DescribeKey) -> Result<()> {
    start(w, request_root("DescribeKey", &req.base))?;
    text_el(w, "FrameworkURI", &req.framework_uri)?;
    end(w, "DescribeKey")
}

pub(super) fn describe_join_abilities(w: &mut W, req: &DescribeJoinAbilities) -> Result<()> {
    emit(
        w,
        Event::Empty(request_root("DescribeJoinAbilities", &req.base)),
    )
}

pub(super) fn get_data(w: &mut W, req: &GetData) -> Result<()> {
    let mut el = request_root("GetData", &req.base);
    if req.aid {
        el.push_attribute(("aid", "true"));
    }
    start(w, el)?;
    text_el(w, "FrameworkURI", &req.framework_uri)?;
    text_el(w, "DatasetURI", &req.dataset_uri)?;
    opt_text_el(w, "Attributes", req.attributes.as_ref())?;
    opt_text_el(w, "LinkageKeys", req.linkage_keys.as_ref())?;
    opt_text_el(w, "FilterColumn", req.filter_column.as_ref())?;
    opt_text_el(w, "FilterValue", req.filter_value.as_ref())?;
    opt_text_el(w, "XSL", req.xsl.as_ref())?;
    end(w, "GetData")
}

pub(super) fn join_data(w: &mut W, req: &JoinData) -> Result<()> {
    let mut el = request_root("JoinData", &req.base);
    if req.update {
        el.push_attribute(("update", "true"));
    }
    start(w, el)?;
    start(w, BytesStart::new("AttributeData"))?;
    opt_text_el(w, "GetDataURL", req.attribute_data.get_data_url.as_ref())?;
    if let Some(gdx) = &req.attribute_data.get_data_xml {
        let mut el = BytesStart::new("GetDataXML");
        if let Some(host) = &gdx.get_data_host {
            el.push_attribute(("getDataHost", host.as_str()));
        }
        if let Some(language) = &gdx.language {
            el.push_attribute(("language", language.as_str()));
        }
        start(w, el)?;
        text_el(w, "FrameworkURI", &gdx.framework_uri)?;
        text_el(w, "DatasetURI", &gdx.dataset_uri)?;
        opt_text_el(w, "Attributes", gdx.attributes.as_ref())?;
        opt_text_el(w, "LinkageKeys", gdx.linkage_keys.as_ref())?;
        end(w, "GetDataXML")?;
    }
    end(w, "AttributeData")?;
    if let Some(ms) = &req.map_styling {
        start(w, BytesStart::new("MapStyling"))?;
        text_el(w, "StylingIdentifier", &ms.styling_identifier)?;
        text_el(w, "StylingURL", &ms.styling_url)?;
        end(w, "MapStyling")?;
    }
    opt_text_el(w, "ClassificationURL", req.classification_url.as_ref())?;
    end(w, "JoinData")
}
