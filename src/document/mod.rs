//! # Print Document
//!
//! A [`Document`] is two ordered, append-only lists of elements:
//!
//! - **parameters**: rendered inside `<parameter>`
//! - **body**: the print commands, rendered inside `<epos-print>`
//!
//! Elements print in the order they were added. There is no way to remove
//! or reorder them.
//!
//! ```
//! use epos::document::Document;
//! use epos::protocol::{Cut, Feed, Text};
//!
//! let mut doc = Document::new();
//! doc.add_body(Text::new("Hello"));
//! doc.add_body(Feed::lines(2).unwrap());
//! doc.add_body(Cut::default());
//!
//! assert_eq!(
//!     doc.serialize_body().unwrap(),
//!     concat!(
//!         r#"<epos-print xmlns="http://www.epson-pos.com/schemas/2011/03/epos-print">"#,
//!         r#"<text>Hello</text><feed line="2"/><cut/></epos-print>"#
//!     )
//! );
//! ```
//!
//! ## Newlines
//!
//! Some SOAP stacks fold raw line breaks in text content. With
//! [`Document::serialize_body_with`] and `escape_newlines` set, every `\n`
//! is written as the character reference `&#10;` instead.

use quick_xml::Writer;

use crate::error::EposError;
use crate::protocol::{EPOS_NS, Element, Node};

/// Root tag of the print body
pub const BODY_ROOT: &str = "epos-print";

/// Root tag of the parameter block
pub const PARAMETER_ROOT: &str = "parameter";

/// Ordered print job content.
#[derive(Debug, Default)]
pub struct Document {
    parameters: Vec<Box<dyn Element>>,
    body: Vec<Box<dyn Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the parameter block.
    pub fn add_parameter(&mut self, element: impl Element + 'static) {
        self.parameters.push(Box::new(element));
    }

    /// Append an element to the print body.
    pub fn add_body(&mut self, element: impl Element + 'static) {
        self.body.push(Box::new(element));
    }

    pub fn parameters(&self) -> &[Box<dyn Element>] {
        &self.parameters
    }

    pub fn body(&self) -> &[Box<dyn Element>] {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.body.is_empty()
    }

    /// Render the body as `<epos-print>` markup.
    pub fn serialize_body(&self) -> Result<String, EposError> {
        self.serialize_body_with(false)
    }

    /// Render the body, optionally writing newlines as `&#10;`.
    pub fn serialize_body_with(&self, escape_newlines: bool) -> Result<String, EposError> {
        let markup = serialize(BODY_ROOT, &self.body, false)?;
        // Self-closing tags must not carry a space before the slash.
        let markup = markup.replace(" />", "/>");
        if escape_newlines {
            Ok(markup.replace('\n', "&#10;"))
        } else {
            Ok(markup)
        }
    }

    /// Render the parameter block as `<parameter>` markup. Empty elements
    /// are written with an explicit closing tag.
    pub fn serialize_parameters(&self) -> Result<String, EposError> {
        serialize(PARAMETER_ROOT, &self.parameters, true)
    }
}

fn serialize(
    root_tag: &'static str,
    elements: &[Box<dyn Element>],
    expand_empty: bool,
) -> Result<String, EposError> {
    let mut root = Node::new(root_tag);
    root.attrs.push(("xmlns", EPOS_NS.to_string()));
    root.children = elements.iter().map(|e| e.render()).collect();

    let mut writer = Writer::new(Vec::new());
    root.write(&mut writer, expand_empty)?;
    String::from_utf8(writer.into_inner()).map_err(|e| EposError::Xml(e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
