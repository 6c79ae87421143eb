//! Response document parsing and writing against realistic samples

use tjs10::validation::validate;
use tjs10::xml::Document;
use tjs10::*;

const GDAS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tjs:GDAS xmlns:tjs="http://www.opengis.net/tjs/1.0"
          xmlns:xlink="http://www.w3.org/1999/xlink"
          service="TJS" version="1.0" xml:lang="en"
          capabilities="http://tjs.example.org/tjs?service=TJS&amp;request=GetCapabilities">
  <tjs:Framework>
    <tjs:FrameworkURI>http://stats.example.org/frameworks/municipalities</tjs:FrameworkURI>
    <tjs:Organization>National Statistics Office</tjs:Organization>
    <tjs:Title>Municipalities</tjs:Title>
    <tjs:Abstract>Municipal boundaries of the country</tjs:Abstract>
    <tjs:ReferenceDate>2011-01-01</tjs:ReferenceDate>
    <tjs:Version>2011</tjs:Version>
    <tjs:FrameworkKey>
      <tjs:Column name="MUNI_ID" type="http://www.w3.org/TR/xmlschema-2/#string" length="7"/>
    </tjs:FrameworkKey>
    <tjs:BoundingCoordinates>
      <tjs:North>83.1</tjs:North>
      <tjs:South>41.7</tjs:South>
      <tjs:East>-52.6</tjs:East>
      <tjs:West>-141.0</tjs:West>
    </tjs:BoundingCoordinates>
    <tjs:Dataset>
      <tjs:DatasetURI>http://stats.example.org/datasets/census2011</tjs:DatasetURI>
      <tjs:Organization>National Statistics Office</tjs:Organization>
      <tjs:Title>2011 Census</tjs:Title>
      <tjs:Abstract>Population counts from the 2011 census</tjs:Abstract>
      <tjs:ReferenceDate>2011-05-10</tjs:ReferenceDate>
      <tjs:Version>1.1</tjs:Version>
      <tjs:Columnset>
        <tjs:FrameworkKey complete="true" relationship="one">
          <tjs:Column name="MUNI_ID" type="http://www.w3.org/TR/xmlschema-2/#string" length="7"/>
        </tjs:FrameworkKey>
        <tjs:Attributes>
          <tjs:Column name="POP2011" type="http://www.w3.org/TR/xmlschema-2/#integer"
                      length="9" purpose="Attribute">
            <tjs:Title>Population, 2011</tjs:Title>
            <tjs:Abstract>Total usual residents counted in 2011</tjs:Abstract>
            <tjs:Values>
              <tjs:Count>
                <tjs:UOM>
                  <tjs:ShortForm>persons</tjs:ShortForm>
                </tjs:UOM>
                <tjs:Exceptions>
                  <tjs:Null>
                    <tjs:Identifier>x</tjs:Identifier>
                    <tjs:Title>Suppressed</tjs:Title>
                    <tjs:Abstract>Value suppressed for confidentiality</tjs:Abstract>
                  </tjs:Null>
                </tjs:Exceptions>
              </tjs:Count>
            </tjs:Values>
          </tjs:Column>
        </tjs:Attributes>
      </tjs:Columnset>
      <tjs:Rowset>
        <tjs:Row>
          <tjs:K>3506008</tjs:K>
          <tjs:V>883391</tjs:V>
        </tjs:Row>
        <tjs:Row>
          <tjs:K>3501012</tjs:K>
          <tjs:V null="true">x</tjs:V>
        </tjs:Row>
      </tjs:Rowset>
    </tjs:Dataset>
  </tjs:Framework>
</tjs:GDAS>"#;

#[test]
fn parses_gdas_sample() {
    let gdas = Gdas::from_xml(GDAS_SAMPLE).unwrap();
    assert_eq!(gdas.base.version, Version::V1_0);
    assert_eq!(gdas.base.lang.as_deref(), Some("en"));
    assert!(gdas.base.capabilities.as_deref().unwrap().contains("GetCapabilities"));

    let fr = &gdas.framework;
    assert_eq!(fr.framework_uri, "http://stats.example.org/frameworks/municipalities");
    assert_eq!(fr.framework_key.as_ref().unwrap().columns[0].name, "MUNI_ID");
    assert_eq!(fr.bounding_coordinates.unwrap().west, -141.0);

    let ds = &fr.datasets[0];
    let cs = ds.columnset.as_ref().unwrap();
    assert!(cs.framework_key.complete);
    assert_eq!(cs.framework_key.relationship, Relationship::One);
    let col = &cs.attributes[0];
    assert_eq!(col.data_type, DataType::Integer);
    assert_eq!(col.purpose, Purpose::Attribute);
    let Some(Values::Count(count)) = &col.values else {
        panic!("expected count values");
    };
    assert_eq!(count.uom.short_form.as_deref(), Some("persons"));
    assert_eq!(count.exceptions.as_ref().unwrap().nulls[0].identifier, "x");

    let rows = &ds.rowset.as_ref().unwrap().rows;
    assert_eq!(rows[0].keys[0].value, "3506008");
    assert_eq!(rows[0].values[0].value, "883391");
    assert!(!rows[0].values[0].null);
    assert!(rows[1].values[0].null);
    assert_eq!(rows[1].values[0].value, "x");
}

#[test]
fn gdas_sample_passes_validation() {
    let doc = Document::parse(GDAS_SAMPLE).unwrap();
    validate(&doc).unwrap();
}

#[test]
fn written_gdas_reparses_identically() {
    let gdas = Gdas::from_xml(GDAS_SAMPLE).unwrap();
    let xml = gdas.to_xml().unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"xmlns="http://www.opengis.net/tjs/1.0""#));
    assert_eq!(Gdas::from_xml(&xml).unwrap(), gdas);
}

#[test]
fn parses_framework_descriptions() {
    let xml = r#"<FrameworkDescriptions xmlns="http://www.opengis.net/tjs/1.0"
                                        xmlns:xlink="http://www.w3.org/1999/xlink"
                                        service="TJS" version="1.0" xml:lang="en">
      <Framework>
        <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
        <Organization>National Statistics Office</Organization>
        <Title>Municipalities</Title>
        <Abstract>Municipal boundaries of the country</Abstract>
        <ReferenceDate>2011-01-01</ReferenceDate>
        <Version>2011</Version>
        <Documentation>http://stats.example.org/docs/municipalities</Documentation>
        <FrameworkKey>
          <Column name="MUNI_ID" type="http://www.w3.org/TR/xmlschema-2/#string" length="7"/>
        </FrameworkKey>
        <BoundingCoordinates>
          <North>83.1</North>
          <South>41.7</South>
          <East>-52.6</East>
          <West>-141.0</West>
        </BoundingCoordinates>
        <DescribeDatasetsRequest
            xlink:href="http://stats.example.org/tjs?service=TJS&amp;request=DescribeDatasets&amp;FrameworkURI=http://stats.example.org/frameworks/municipalities"/>
      </Framework>
    </FrameworkDescriptions>"#;

    let desc = FrameworkDescriptions::from_xml(xml).unwrap();
    let fr = &desc.frameworks[0];
    assert_eq!(fr.organization, "National Statistics Office");
    assert_eq!(fr.documentation.as_deref(), Some("http://stats.example.org/docs/municipalities"));
    assert_eq!(fr.framework_key.as_ref().unwrap().columns.len(), 1);
    assert_eq!(fr.bounding_coordinates.unwrap().north, 83.1);
    assert!(fr
        .describe_datasets_request
        .as_deref()
        .unwrap()
        .contains("request=DescribeDatasets"));
    validate(&Document::FrameworkDescriptions(desc.clone())).unwrap();

    let rewritten = desc.to_xml().unwrap();
    assert_eq!(FrameworkDescriptions::from_xml(&rewritten).unwrap(), desc);
}

#[test]
fn parses_dataset_and_data_descriptions() {
    let datasets = r#"<DatasetDescriptions xmlns="http://www.opengis.net/tjs/1.0"
                                           xmlns:xlink="http://www.w3.org/1999/xlink"
                                           service="TJS" version="1.0">
      <Framework>
        <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
        <Organization>National Statistics Office</Organization>
        <Title>Municipalities</Title>
        <Abstract>Municipal boundaries</Abstract>
        <ReferenceDate>2011-01-01</ReferenceDate>
        <Version>2011</Version>
        <Dataset>
          <DatasetURI>http://stats.example.org/datasets/census2011</DatasetURI>
          <Organization>National Statistics Office</Organization>
          <Title>2011 Census</Title>
          <Abstract>Population counts from the 2011 census</Abstract>
          <ReferenceDate>2011-05-10</ReferenceDate>
          <Version>1.1</Version>
          <DescribeDataRequest
              xlink:href="http://stats.example.org/tjs?service=TJS&amp;request=DescribeData&amp;DatasetURI=http://stats.example.org/datasets/census2011"/>
        </Dataset>
      </Framework>
    </DatasetDescriptions>"#;

    let desc = DatasetDescriptions::from_xml(datasets).unwrap();
    let ds = &desc.frameworks[0].datasets[0];
    assert!(ds.describe_data_request.as_deref().unwrap().contains("request=DescribeData"));
    assert!(ds.columnset.is_none());
    validate(&Document::DatasetDescriptions(desc.clone())).unwrap();

    let data = r#"<DataDescriptions xmlns="http://www.opengis.net/tjs/1.0"
                                    service="TJS" version="1.0">
      <Framework>
        <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
        <Organization>National Statistics Office</Organization>
        <Title>Municipalities</Title>
        <Abstract>Municipal boundaries</Abstract>
        <ReferenceDate>2011-01-01</ReferenceDate>
        <Version>2011</Version>
        <Dataset>
          <DatasetURI>http://stats.example.org/datasets/census2011</DatasetURI>
          <Organization>National Statistics Office</Organization>
          <Title>2011 Census</Title>
          <Abstract>Population counts from the 2011 census</Abstract>
          <ReferenceDate>2011-05-10</ReferenceDate>
          <Version>1.1</Version>
          <Columnset>
            <FrameworkKey complete="true" relationship="one">
              <Column name="MUNI_ID" type="http://www.w3.org/TR/xmlschema-2/#string" length="7"/>
            </FrameworkKey>
            <Attributes>
              <Column name="POP2011" type="http://www.w3.org/TR/xmlschema-2/#integer"
                      length="9" purpose="Attribute">
                <Title>Population, 2011</Title>
                <Abstract>Total usual residents counted in 2011</Abstract>
              </Column>
            </Attributes>
          </Columnset>
        </Dataset>
      </Framework>
    </DataDescriptions>"#;

    let desc = DataDescriptions::from_xml(data).unwrap();
    let cs = desc.frameworks[0].datasets[0].columnset.as_ref().unwrap();
    assert_eq!(cs.attributes[0].name, "POP2011");
    validate(&Document::DataDescriptions(desc.clone())).unwrap();

    let rewritten = desc.to_xml().unwrap();
    assert_eq!(DataDescriptions::from_xml(&rewritten).unwrap(), desc);
}

#[test]
fn parses_capabilities_with_ows_prefixes() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
    <Capabilities xmlns="http://www.opengis.net/tjs/1.0"
                  xmlns:ows="http://www.opengis.net/ows/1.1"
                  xmlns:xlink="http://www.w3.org/1999/xlink"
                  service="TJS" version="1.0" updateSequence="42" xml:lang="en">
      <ows:ServiceIdentification>
        <ows:Title>Example TJS</ows:Title>
        <ows:Abstract>Joins attribute tables to frameworks</ows:Abstract>
        <ows:Keywords>
          <ows:Keyword>TJS</ows:Keyword>
          <ows:Keyword>statistics</ows:Keyword>
        </ows:Keywords>
        <ows:ServiceType>TJS</ows:ServiceType>
        <ows:ServiceTypeVersion>1.0</ows:ServiceTypeVersion>
        <ows:Fees>NONE</ows:Fees>
      </ows:ServiceIdentification>
      <ows:ServiceProvider>
        <ows:ProviderName>Example Org</ows:ProviderName>
        <ows:ProviderSite xlink:href="http://example.org"/>
        <ows:ServiceContact>
          <ows:IndividualName>A. Maintainer</ows:IndividualName>
          <ows:ContactInfo>
            <ows:Address>
              <ows:ElectronicMailAddress>tjs@example.org</ows:ElectronicMailAddress>
            </ows:Address>
          </ows:ContactInfo>
        </ows:ServiceContact>
      </ows:ServiceProvider>
      <ows:OperationsMetadata>
        <ows:Operation name="GetCapabilities">
          <ows:DCP>
            <ows:HTTP>
              <ows:Get xlink:href="http://example.org/tjs?"/>
              <ows:Post xlink:href="http://example.org/tjs"/>
            </ows:HTTP>
          </ows:DCP>
          <ows:Parameter name="AcceptFormats">
            <ows:AllowedValues>
              <ows:Value>text/xml</ows:Value>
            </ows:AllowedValues>
          </ows:Parameter>
        </ows:Operation>
        <ows:Operation name="GetData">
          <ows:DCP>
            <ows:HTTP>
              <ows:Get xlink:href="http://example.org/tjs?"/>
            </ows:HTTP>
          </ows:DCP>
        </ows:Operation>
      </ows:OperationsMetadata>
      <Languages>
        <ows:Language>en</ows:Language>
        <ows:Language>fr</ows:Language>
      </Languages>
      <WSDL xlink:href="http://example.org/tjs/wsdl"/>
    </Capabilities>"#;

    let caps = Capabilities::from_xml(xml).unwrap();
    assert_eq!(caps.update_sequence.as_deref(), Some("42"));
    let si = caps.service_identification.as_ref().unwrap();
    assert_eq!(si.service_type, "TJS");
    assert_eq!(si.keywords, vec!["TJS", "statistics"]);
    let sp = caps.service_provider.as_ref().unwrap();
    assert_eq!(sp.provider_site.as_deref(), Some("http://example.org"));
    assert_eq!(
        sp.service_contact.as_ref().unwrap().email.as_deref(),
        Some("tjs@example.org")
    );
    let om = caps.operations_metadata.as_ref().unwrap();
    assert_eq!(om.operations.len(), 2);
    assert_eq!(om.operations[0].post_urls, vec!["http://example.org/tjs"]);
    assert_eq!(om.operations[0].parameters[0].allowed_values, vec!["text/xml"]);
    assert_eq!(caps.languages, vec!["en", "fr"]);
    assert_eq!(caps.wsdl.as_deref(), Some("http://example.org/tjs/wsdl"));

    let rewritten = caps.to_xml().unwrap();
    assert_eq!(Capabilities::from_xml(&rewritten).unwrap(), caps);
}

#[test]
fn parses_join_abilities() {
    let xml = r#"<JoinAbilities xmlns="http://www.opengis.net/tjs/1.0"
                                service="TJS" version="1.0" updateSupported="true">
      <SpatialFrameworks>
        <Framework>
          <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
          <Organization>National Statistics Office</Organization>
          <Title>Municipalities</Title>
          <Abstract>Municipal boundaries</Abstract>
          <ReferenceDate>2011-01-01</ReferenceDate>
          <Version>2011</Version>
        </Framework>
      </SpatialFrameworks>
      <AttributeLimit>20</AttributeLimit>
      <OutputMechanisms>
        <Mechanism>
          <Identifier>WMS</Identifier>
          <Title>Web Map Service</Title>
          <Abstract>Joined data portrayed as a map layer</Abstract>
          <Reference>http://www.opengeospatial.org/standards/wms</Reference>
        </Mechanism>
      </OutputMechanisms>
      <OutputStylings>
        <Styling>
          <Identifier>SLD</Identifier>
          <Title>Styled Layer Descriptor</Title>
          <Abstract>SLD styling documents</Abstract>
          <Reference>http://www.opengeospatial.org/standards/sld</Reference>
        </Styling>
      </OutputStylings>
      <ClassificationSchemaURL>http://example.org/classification.xsd</ClassificationSchemaURL>
    </JoinAbilities>"#;

    let ja = JoinAbilities::from_xml(xml).unwrap();
    assert!(ja.update_supported);
    assert_eq!(ja.attribute_limit, Some(20));
    assert_eq!(ja.spatial_frameworks[0].title, "Municipalities");
    assert_eq!(ja.output_mechanisms[0].identifier, "WMS");
    assert_eq!(ja.output_stylings[0].identifier, "SLD");
    validate(&Document::JoinAbilities(ja.clone())).unwrap();

    let rewritten = ja.to_xml().unwrap();
    assert_eq!(JoinAbilities::from_xml(&rewritten).unwrap(), ja);
}

#[test]
fn join_data_response_states() {
    let accepted = r#"<JoinDataResponse xmlns="http://www.opengis.net/tjs/1.0"
                                        service="TJS" version="1.0">
      <Status creationTime="2026-08-29T10:00:00Z"
              href="http://example.org/tjs/jobs/17">
        <Accepted>Join queued for processing</Accepted>
      </Status>
      <DataInputs>
        <Framework>
          <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
          <Organization>National Statistics Office</Organization>
          <Title>Municipalities</Title>
          <Abstract>Municipal boundaries</Abstract>
          <ReferenceDate>2011-01-01</ReferenceDate>
          <Version>2011</Version>
        </Framework>
      </DataInputs>
    </JoinDataResponse>"#;
    let resp = JoinDataResponse::from_xml(accepted).unwrap();
    assert_eq!(
        resp.status.state,
        StatusState::Accepted("Join queued for processing".to_string())
    );
    assert_eq!(resp.status.href, "http://example.org/tjs/jobs/17");
    assert!(resp.joined_outputs.is_empty());

    let completed = r#"<JoinDataResponse xmlns="http://www.opengis.net/tjs/1.0"
                                         service="TJS" version="1.0">
      <Status creationTime="2026-08-29T10:05:00Z"
              href="http://example.org/tjs/jobs/17">
        <Completed>Join complete</Completed>
      </Status>
      <DataInputs>
        <Framework>
          <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
          <Organization>National Statistics Office</Organization>
          <Title>Municipalities</Title>
          <Abstract>Municipal boundaries</Abstract>
          <ReferenceDate>2011-01-01</ReferenceDate>
          <Version>2011</Version>
        </Framework>
      </DataInputs>
      <JoinedOutputs>
        <Output>
          <Mechanism>
            <Identifier>WMS</Identifier>
            <Title>Web Map Service</Title>
            <Abstract>Joined data portrayed as a map layer</Abstract>
            <Reference>http://www.opengeospatial.org/standards/wms</Reference>
          </Mechanism>
          <Resource>
            <URL>http://example.org/wms?service=WMS&amp;request=GetCapabilities</URL>
            <Parameter name="layers">census2011_pop</Parameter>
          </Resource>
        </Output>
      </JoinedOutputs>
    </JoinDataResponse>"#;
    let resp = JoinDataResponse::from_xml(completed).unwrap();
    assert_eq!(resp.status.state, StatusState::Completed("Join complete".to_string()));
    let output = &resp.joined_outputs[0];
    let resource = output.resource.as_ref().unwrap();
    assert!(resource.url.contains("GetCapabilities"));
    assert_eq!(resource.parameters[0].name, "layers");
    assert_eq!(resource.parameters[0].value, "census2011_pop");

    let rewritten = resp.to_xml().unwrap();
    assert_eq!(JoinDataResponse::from_xml(&rewritten).unwrap(), resp);
}

#[test]
fn failed_status_writes_an_empty_element() {
    let resp = JoinDataResponse {
        base: ResponseBase::default(),
        status: Status {
            creation_time: "2026-08-29T10:00:00Z".to_string(),
            href: "http://example.org/tjs/jobs/18".to_string(),
            state: StatusState::Failed,
        },
        data_inputs: DataInputs {
            framework: Framework {
                framework_uri: "http://stats.example.org/frameworks/municipalities".to_string(),
                organization: "National Statistics Office".to_string(),
                title: "Municipalities".to_string(),
                abstract_: "Municipal boundaries".to_string(),
                reference_date: ReferenceDate::new("2011-01-01"),
                version: "2011".to_string(),
                ..Default::default()
            },
        },
        joined_outputs: Vec::new(),
    };
    let xml = resp.to_xml().unwrap();
    assert!(xml.contains("<Failed/>"));
    assert_eq!(JoinDataResponse::from_xml(&xml).unwrap().status.state, StatusState::Failed);
}

#[test]
fn parses_framework_key_description() {
    let xml = r#"<FrameworkKeyDescription xmlns="http://www.opengis.net/tjs/1.0"
                                          service="TJS" version="1.0">
      <Framework>
        <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
        <Organization>National Statistics Office</Organization>
        <Title>Municipalities</Title>
        <Abstract>Municipal boundaries</Abstract>
        <ReferenceDate>2011-01-01</ReferenceDate>
        <Version>2011</Version>
        <FrameworkKey>
          <Column name="MUNI_ID" type="http://www.w3.org/TR/xmlschema-2/#string" length="7"/>
        </FrameworkKey>
        <Rowset>
          <Row>
            <K>3506008</K>
            <Title>Ottawa</Title>
          </Row>
          <Row>
            <K>2466023</K>
            <Title>Montreal</Title>
          </Row>
        </Rowset>
      </Framework>
    </FrameworkKeyDescription>"#;

    let desc = FrameworkKeyDescription::from_xml(xml).unwrap();
    let rows = &desc.framework.rowset.as_ref().unwrap().rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title.as_deref(), Some("Ottawa"));
    validate(&Document::FrameworkKeyDescription(desc)).unwrap();
}

#[test]
fn parses_ows_exception_report() {
    let xml = r#"<ExceptionReport xmlns="http://www.opengis.net/ows/1.1"
                                  version="1.1.0" xml:lang="en">
      <Exception exceptionCode="InvalidParameterValue" locator="FrameworkURI">
        <ExceptionText>Unknown framework</ExceptionText>
      </Exception>
    </ExceptionReport>"#;
    let report = OwsExceptionReport::from_xml(xml).unwrap();
    assert_eq!(report.exceptions[0].exception_code, "InvalidParameterValue");
    assert_eq!(report.exceptions[0].locator.as_deref(), Some("FrameworkURI"));
    assert_eq!(report.exceptions[0].text, vec!["Unknown framework"]);

    let built = OwsExceptionReport::single(
        exception_code::MISSING_PARAMETER_VALUE,
        Some("DatasetURI".to_string()),
        "DatasetURI is required",
    );
    let rewritten = built.to_xml().unwrap();
    assert_eq!(OwsExceptionReport::from_xml(&rewritten).unwrap(), built);
}

#[test]
fn unknown_vendor_elements_are_skipped() {
    let xml = r#"<DescribeFrameworks xmlns="http://www.opengis.net/tjs/1.0"
                                     service="TJS" version="1.0">
      <FrameworkURI>http://stats.example.org/frameworks/municipalities</FrameworkURI>
      <VendorHint>ignore me</VendorHint>
    </DescribeFrameworks>"#;
    let Document::DescribeFrameworks(req) = Document::parse(xml).unwrap() else {
        panic!("expected DescribeFrameworks");
    };
    assert_eq!(
        req.framework_uri.as_deref(),
        Some("http://stats.example.org/frameworks/municipalities")
    );
}
