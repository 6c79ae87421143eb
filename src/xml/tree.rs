//! Minimal element tree over quick-xml events
//!
//! TJS documents are small (the bulky part, rowsets, still fits in memory
//! comfortably), so readers materialise the document into a tree and the
//! typed readers in [`super::reader`] walk it. Names are matched on their
//! local part; prefixes and namespace declarations are dropped on input.

use crate::{Result, TjsError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Parse a whole document; returns its root element.
    pub fn parse(input: &str) -> Result<Element> {
        let mut reader = Reader::from_str(input);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => stack.push(element_from_start(&e)?),
                Ok(Event::Empty(e)) => {
                    let el = element_from_start(&e)?;
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::Text(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        let raw = String::from_utf8_lossy(e.as_ref()).to_string();
                        let text = quick_xml::escape::unescape(&raw)
                            .map_err(|e| TjsError::Parse(format!("bad character data: {e}")))?;
                        parent.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
                // Text events stop at entity references; the reference
                // arrives separately and resolves into the same text run.
                Ok(Event::GeneralRef(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        let resolved = e
                            .resolve_char_ref()
                            .map_err(|e| TjsError::Parse(format!("bad character reference: {e}")))?;
                        if let Some(ch) = resolved {
                            parent.text.push(ch);
                        } else {
                            match e.as_ref() {
                                b"lt" => parent.text.push('<'),
                                b"gt" => parent.text.push('>'),
                                b"amp" => parent.text.push('&'),
                                b"apos" => parent.text.push('\''),
                                b"quot" => parent.text.push('"'),
                                other => {
                                    return Err(TjsError::Parse(format!(
                                        "unknown entity reference: {}",
                                        String::from_utf8_lossy(other)
                                    )))
                                }
                            }
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| TjsError::Parse("unbalanced end tag".to_string()))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(TjsError::Parse(format!("XML parsing error: {e}"))),
            }
        }

        if !stack.is_empty() {
            return Err(TjsError::Parse("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| TjsError::Parse("empty document".to_string()))
    }

    /// First child with the given local name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn require_child(&self, name: &str) -> Result<&Element> {
        self.child(name).ok_or_else(|| {
            TjsError::Parse(format!("missing required element {name} in {}", self.name))
        })
    }

    /// Trimmed text content of the first child with the given name
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text.trim().to_string())
    }

    pub fn require_child_text(&self, name: &str) -> Result<String> {
        Ok(self.require_child(name)?.text.trim().to_string())
    }

    /// Attribute value by local name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn require_attr(&self, name: &str) -> Result<String> {
        self.attr(name)
            .map(str::to_string)
            .ok_or_else(|| {
                TjsError::Parse(format!("missing required attribute {name} on {}", self.name))
            })
    }

    pub fn text(&self) -> String {
        self.text.trim().to_string()
    }
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(el);
    } else if root.is_none() {
        *root = Some(el);
    } else {
        return Err(TjsError::Parse("multiple root elements".to_string()));
    }
    Ok(())
}

fn element_from_start(e: &BytesStart<'_>) -> Result<Element> {
    let name = local_name(e.name().as_ref());
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| TjsError::Parse(format!("bad attribute: {e}")))?;
        let key = local_name(attr.key.as_ref());
        // Drop namespace declarations; everything else keeps its local name
        // (so xlink:href is addressed as "href").
        if key == "xmlns" || attr.key.as_ref().starts_with(b"xmlns:") {
            continue;
        }
        let raw = String::from_utf8_lossy(&attr.value).to_string();
        let value = quick_xml::escape::unescape(&raw)
            .map_err(|e| TjsError::Parse(format!("bad attribute value: {e}")))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn local_name(qname: &[u8]) -> String {
    let name = String::from_utf8_lossy(qname);
    match name.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.into_owned(),
    }
}
