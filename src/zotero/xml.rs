//! Namespace-aware XML tree built with `quick_xml::NsReader`
//!
//! Zotero responses are small Atom documents, so the whole body is read into
//! an owned element tree once; all lookups afterwards are pure.

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

use crate::error::{Result, ZoteroError};

/// A node inside an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its resolved namespace URI
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Namespace URI the element belongs to, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name, without prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by (unprefixed) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace() == Some(namespace) && self.name == name
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First direct child matching namespace and local name
    pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is(namespace, name))
    }

    /// This element and all descendants, in document order
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            out.push(element);
            let children: Vec<&Element> = element.child_elements().collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// First element in document order matching namespace and local name
    pub fn find(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|e| e.is(namespace, name))
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Parse a complete document and return its root element.
///
/// Fails on anything that is not a single well-formed root element:
/// mismatched or unclosed tags, unbound prefixes, stray text, empty input.
pub fn parse_document(content: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(content);
    reader.config_mut().expand_empty_elements = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (ns, event) = reader.read_resolved_event().map_err(ZoteroError::parse)?;
        match event {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(ZoteroError::parse("more than one root element"));
                }
                let namespace = resolve_namespace(ns)?;
                stack.push(start_element(e, namespace)?);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ZoteroError::parse("unexpected closing tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::Text(ref t) => {
                let text = t.unescape().map_err(ZoteroError::parse)?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(ref c) => {
                let text = String::from_utf8_lossy(c).into_owned();
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ZoteroError::parse(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| ZoteroError::parse("document has no root element"))
}

fn resolve_namespace(ns: ResolveResult) -> Result<Option<String>> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(String::from_utf8_lossy(uri).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(ZoteroError::parse(format!(
            "unbound namespace prefix '{}'",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

fn start_element(e: &BytesStart, namespace: Option<String>) -> Result<Element> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(ZoteroError::parse)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(ZoteroError::parse)?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        namespace,
        name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    })
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(current) => {
            current.children.push(Node::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ZoteroError::parse("text outside the root element")),
    }
}
