//! KVP (HTTP GET) request binding
//!
//! Encodes and decodes the eight TJS requests as URL query strings. OGC
//! KVP parameter names are case-insensitive on input; output uses the
//! spellings of the standard. The `request` parameter selects the
//! operation, where the XML binding uses the root element name instead.

use crate::model::*;
use crate::xml::Document;
use crate::{Result, TjsError};
use std::str::FromStr;
use url::form_urlencoded;

/// Decoded KVP parameters with case-insensitive lookup
struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.to_lowercase(), v.into_owned()))
                .collect(),
        }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    fn require(&self, name: &str) -> Result<String> {
        self.owned(name)
            .ok_or_else(|| TjsError::Kvp(format!("missing required parameter {name}")))
    }

    fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some("true") | Some("1"))
    }

    fn base(&self) -> Result<RequestBase> {
        Ok(RequestBase {
            service: self.require("service")?,
            version: self.get("version").map(Version::from_str).transpose()?,
            language: self.owned("language"),
        })
    }
}

/// Parse a TJS request from a URL query string (with or without a leading
/// `?`).
pub fn parse_request(query: &str) -> Result<Document> {
    let params = Params::parse(query);
    let request = params.require("request")?;
    tracing::debug!(request = %request, "parsing KVP request");
    match request.as_str() {
        "GetCapabilities" => Ok(Document::GetCapabilities(GetCapabilities {
            service: params.require("service")?,
            accept_versions: list(params.get("acceptversions")),
            sections: params
                .get("sections")
                .map(|s| {
                    s.split(',')
                        .map(|part| Section::from_str(part.trim()))
                        .collect::<Result<Vec<_>>>()
                })
                .transpose()?
                .unwrap_or_default(),
            accept_formats: list(params.get("acceptformats")),
            accept_languages: list(params.get("acceptlanguages")),
            update_sequence: params.owned("updatesequence"),
        })),
        "DescribeFrameworks" => Ok(Document::DescribeFrameworks(DescribeFrameworks {
            base: params.base()?,
            framework_uri: params.owned("frameworkuri"),
        })),
        "DescribeDatasets" => Ok(Document::DescribeDatasets(DescribeDatasets {
            base: params.base()?,
            framework_uri: params.owned("frameworkuri"),
            dataset_uri: params.owned("dataseturi"),
        })),
        "DescribeData" => Ok(Document::DescribeData(DescribeData {
            base: params.base()?,
            framework_uri: params.owned("frameworkuri"),
            dataset_uri: params.owned("dataseturi"),
            attributes: params.owned("attributes"),
        })),
        "DescribeKey" => Ok(Document::DescribeKey(DescribeKey {
            base: params.base()?,
            framework_uri: params.require("frameworkuri")?,
        })),
        "DescribeJoinAbilities" => Ok(Document::DescribeJoinAbilities(DescribeJoinAbilities {
            base: params.base()?,
        })),
        "GetData" => Ok(Document::GetData(GetData {
            base: params.base()?,
            framework_uri: params.require("frameworkuri")?,
            dataset_uri: params.require("dataseturi")?,
            attributes: params.owned("attributes"),
            linkage_keys: params.owned("linkagekeys"),
            filter_column: params.owned("filtercolumn"),
            filter_value: params.owned("filtervalue"),
            xsl: params.owned("xsl"),
            aid: params.flag("aid"),
        })),
        "JoinData" => Ok(Document::JoinData(join_data(&params)?)),
        other => Err(TjsError::Kvp(format!("unknown request: {other}"))),
    }
}

/// The GetDataURL / inline-GetData alternatives of the JoinData binding
fn join_data(params: &Params) -> Result<JoinData> {
    let mut base = params.base()?;
    let attribute_data = if let Some(url) = params.owned("getdataurl") {
        AttributeData {
            get_data_url: Some(url),
            get_data_xml: None,
        }
    } else {
        // The shared language parameter governs the GetData the server
        // will issue, so the inline form carries it.
        AttributeData {
            get_data_url: None,
            get_data_xml: Some(GetDataXml {
                get_data_host: params.owned("getdatahost"),
                language: base.language.take(),
                framework_uri: params.require("frameworkuri")?,
                dataset_uri: params.require("dataseturi")?,
                attributes: params.owned("attributes"),
                linkage_keys: params.owned("linkagekeys"),
            }),
        }
    };
    let map_styling = match (
        params.owned("mapstylingidentifier"),
        params.owned("mapstylingurl"),
    ) {
        (Some(styling_identifier), Some(styling_url)) => Some(MapStyling {
            styling_identifier,
            styling_url,
        }),
        (None, None) => None,
        _ => {
            return Err(TjsError::Kvp(
                "MapStylingIdentifier and MapStylingURL must be given together".to_string(),
            ))
        }
    };
    Ok(JoinData {
        base,
        attribute_data,
        map_styling,
        classification_url: params.owned("classificationurl"),
        update: params.flag("update"),
    })
}

fn list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| v.split(',').map(|part| part.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Encode a TJS request as a URL query string (without a leading `?`).
///
/// Only the eight operation requests have a KVP binding; responses return
/// an error.
pub fn encode_request(doc: &Document) -> Result<String> {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    let mut push = |name: &str, value: &str| {
        ser.append_pair(name, value);
    };
    match doc {
        Document::GetCapabilities(req) => {
            push("service", &req.service);
            push("request", "GetCapabilities");
            if !req.accept_versions.is_empty() {
                push("AcceptVersions", &req.accept_versions.join(","));
            }
            if !req.sections.is_empty() {
                let sections = req
                    .sections
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                push("Sections", &sections);
            }
            if !req.accept_formats.is_empty() {
                push("AcceptFormats", &req.accept_formats.join(","));
            }
            if !req.accept_languages.is_empty() {
                push("AcceptLanguages", &req.accept_languages.join(","));
            }
            if let Some(seq) = &req.update_sequence {
                push("updateSequence", seq);
            }
        }
        Document::DescribeFrameworks(req) => {
            base(&mut push, &req.base, "DescribeFrameworks");
            opt(&mut push, "FrameworkURI", req.framework_uri.as_ref());
        }
        Document::DescribeDatasets(req) => {
            base(&mut push, &req.base, "DescribeDatasets");
            opt(&mut push, "FrameworkURI", req.framework_uri.as_ref());
            opt(&mut push, "DatasetURI", req.dataset_uri.as_ref());
        }
        Document::DescribeData(req) => {
            base(&mut push, &req.base, "DescribeData");
            opt(&mut push, "FrameworkURI", req.framework_uri.as_ref());
            opt(&mut push, "DatasetURI", req.dataset_uri.as_ref());
            opt(&mut push, "Attributes", req.attributes.as_ref());
        }
        Document::DescribeKey(req) => {
            base(&mut push, &req.base, "DescribeKey");
            push("FrameworkURI", &req.framework_uri);
        }
        Document::DescribeJoinAbilities(req) => {
            base(&mut push, &req.base, "DescribeJoinAbilities");
        }
        Document::GetData(req) => {
            base(&mut push, &req.base, "GetData");
            push("FrameworkURI", &req.framework_uri);
            push("DatasetURI", &req.dataset_uri);
            opt(&mut push, "Attributes", req.attributes.as_ref());
            opt(&mut push, "LinkageKeys", req.linkage_keys.as_ref());
            opt(&mut push, "FilterColumn", req.filter_column.as_ref());
            opt(&mut push, "FilterValue", req.filter_value.as_ref());
            opt(&mut push, "XSL", req.xsl.as_ref());
            if req.aid {
                push("Aid", "true");
            }
        }
        Document::JoinData(req) => {
            base(&mut push, &req.base, "JoinData");
            if let Some(url) = &req.attribute_data.get_data_url {
                push("GetDataURL", url);
            }
            if let Some(gdx) = &req.attribute_data.get_data_xml {
                opt(&mut push, "GetDataHost", gdx.get_data_host.as_ref());
                if req.base.language.is_none() {
                    opt(&mut push, "language", gdx.language.as_ref());
                }
                push("FrameworkURI", &gdx.framework_uri);
                push("DatasetURI", &gdx.dataset_uri);
                opt(&mut push, "Attributes", gdx.attributes.as_ref());
                opt(&mut push, "LinkageKeys", gdx.linkage_keys.as_ref());
            }
            if let Some(ms) = &req.map_styling {
                push("MapStylingIdentifier", &ms.styling_identifier);
                push("MapStylingURL", &ms.styling_url);
            }
            opt(
                &mut push,
                "ClassificationURL",
                req.classification_url.as_ref(),
            );
            if req.update {
                push("Update", "true");
            }
        }
        other => {
            return Err(TjsError::Kvp(format!(
                "{} has no KVP binding",
                other.root_name()
            )))
        }
    }
    Ok(ser.finish())
}

fn base(push: &mut impl FnMut(&str, &str), base: &RequestBase, request: &str) {
    push("service", &base.service);
    if let Some(version) = base.version {
        push("version", &version.to_string());
    }
    push("request", request);
    if let Some(language) = &base.language {
        push("language", language);
    }
}

fn opt(push: &mut impl FnMut(&str, &str), name: &str, value: Option<&String>) {
    if let Some(v) = value {
        push(name, v);
    }
}
