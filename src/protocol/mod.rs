//! # ePOS-Print XML Protocol
//!
//! This module implements the element vocabulary of Epson's ePOS-Print XML
//! command set, the markup understood by network-attached TM receipt
//! printers.
//!
//! ## Element Model
//!
//! Each print command is a struct implementing [`Element`]. Attributes are
//! held in validated fields ([`attributes::Ranged`], [`attributes::Choice`],
//! [`attributes::Flag`]) so an invalid value can never be stored. Rendering
//! rebuilds the attribute list from the current field values on every call:
//!
//! ```
//! use epos::protocol::{Align, Element, Text};
//!
//! let mut text = Text::new("Hello\n");
//! text.align.set(Align::Center);
//! text.width.set(2).unwrap();
//! text.em.set(true);
//!
//! let xml = text.render().to_xml().unwrap();
//! assert_eq!(xml, "<text width=\"2\" em=\"true\" align=\"center\">Hello\n</text>");
//! ```
//!
//! ## Wire Rules
//!
//! - Unset attributes are omitted
//! - Booleans are written as `true` / `false`
//! - Enumerations are written as their token
//! - Empty elements self-close as `<tag/>` with no space before the slash
//!
//! ## Reference
//!
//! Epson ePOS-Print XML User's Manual, "XML for controlling printer".

pub mod attributes;
pub mod barcode;
pub mod commands;
pub mod constants;
pub mod graphics;
pub mod placeholder;
pub mod response;
pub mod soap;
pub mod text;

pub use attributes::{AttrValue, Choice, Flag, Ranged, Token, WireValue};
pub use barcode::Barcode;
pub use commands::{Cut, Feed, Recovery, Reset};
pub use constants::{Align, BarcodeType, Color, CutType, EPOS_NS, Font, Hri, Lang, Mode, SOAP_NS};
pub use graphics::{Image, Logo};
pub use response::Response;
pub use text::Text;

use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::EposError;

// ============================================================================
// ELEMENT CONTRACT
// ============================================================================

/// A print command that renders to a single XML node.
pub trait Element: fmt::Debug {
    /// Fixed tag name on the wire.
    fn tag(&self) -> &'static str;

    /// Push every attribute in wire order. Unset values are pushed too and
    /// dropped by [`AttrMap`].
    fn load_attrs(&self, attrs: &mut AttrMap);

    /// Assign an attribute by wire name from untyped input.
    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError>;

    /// Text payload written inside the element.
    fn text(&self) -> &str {
        ""
    }

    /// Text written after the closing tag.
    fn tail(&self) -> &str {
        ""
    }

    /// Build the XML node from the current field values.
    fn render(&self) -> Node {
        let mut attrs = AttrMap::default();
        self.load_attrs(&mut attrs);
        Node {
            tag: self.tag(),
            attrs: attrs.into_entries(),
            text: self.text().to_string(),
            tail: self.tail().to_string(),
            children: Vec::new(),
        }
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn tag(&self) -> &'static str {
        (**self).tag()
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        (**self).load_attrs(attrs)
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        (**self).set_attr(name, value)
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn tail(&self) -> &str {
        (**self).tail()
    }

    fn render(&self) -> Node {
        (**self).render()
    }
}

/// Attribute list collected during rendering.
#[derive(Debug, Default)]
pub struct AttrMap {
    entries: Vec<(&'static str, String)>,
}

impl AttrMap {
    /// Push a validated value; unset values are skipped.
    pub fn put(&mut self, name: &'static str, value: &impl WireValue) {
        self.put_raw(name, value.wire());
    }

    /// Push a pre-rendered value; `None` is skipped.
    pub fn put_raw(&mut self, name: &'static str, value: Option<String>) {
        if let Some(v) = value {
            self.entries.push((name, v));
        }
    }

    pub fn into_entries(self) -> Vec<(&'static str, String)> {
        self.entries
    }
}

// ============================================================================
// XML NODE
// ============================================================================

/// A rendered element, ready to be written as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: String,
    pub tail: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with no attributes.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: String::new(),
            tail: String::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize this node (and its children) to a markup string.
    pub fn to_xml(&self) -> Result<String, EposError> {
        let mut writer = Writer::new(Vec::new());
        self.write(&mut writer, false)?;
        String::from_utf8(writer.into_inner()).map_err(|e| EposError::Xml(e.to_string()))
    }

    /// Write this node. With `expand_empty` set, childless nodes without
    /// text are written as `<tag></tag>` instead of `<tag/>`.
    pub fn write<W: Write>(&self, writer: &mut Writer<W>, expand_empty: bool) -> Result<(), EposError> {
        let mut start = BytesStart::new(self.tag);
        for (key, value) in &self.attrs {
            start.push_attribute((*key, value.as_str()));
        }

        if self.text.is_empty() && self.children.is_empty() && !expand_empty {
            write_event(writer, Event::Empty(start))?;
        } else {
            write_event(writer, Event::Start(start))?;
            write_text(writer, &self.text)?;
            for child in &self.children {
                child.write(writer, expand_empty)?;
            }
            write_event(writer, Event::End(BytesEnd::new(self.tag)))?;
        }

        write_text(writer, &self.tail)
    }
}

fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), EposError> {
    if text.is_empty() {
        return Ok(());
    }
    write_event(writer, Event::Text(BytesText::from_escaped(partial_escape(text))))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), EposError> {
    writer
        .write_event(event)
        .map_err(|e| EposError::Xml(e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
