//! Conversion from JSON schema types to protocol elements.

use crate::document::Document;
use crate::error::EposError;
use crate::protocol::placeholder;
use crate::protocol::{
    AttrValue, Barcode, BarcodeType, Cut, Element, Feed, Image, Logo, Recovery, Reset, Text,
};

use super::schema::{JsonElement, JsonJob};

impl JsonJob {
    /// Build a document from this job. The `autocut` flag is left to the
    /// caller.
    pub fn to_document(&self) -> Result<Document, EposError> {
        let mut document = Document::new();
        for element in &self.parameters {
            document.add_parameter(element.to_element()?);
        }
        for element in &self.body {
            document.add_body(element.to_element()?);
        }
        Ok(document)
    }
}

impl JsonElement {
    /// Construct the named element and assign every attribute through
    /// [`Element::set_attr`].
    pub fn to_element(&self) -> Result<Box<dyn Element>, EposError> {
        match self.element.as_str() {
            "text" => {
                let mut text = Text::new(self.text.as_str());
                text.tail = self.tail.clone();
                self.finish(text)
            }
            "image" => {
                let mut image = Image::default();
                image.text = self.text.clone();
                image.tail = self.tail.clone();
                self.finish(image)
            }
            "barcode" => {
                let mut barcode = Barcode::new(BarcodeType::Code128, self.text.as_str());
                barcode.tail = self.tail.clone();
                // Required: an absent type is rejected here.
                barcode.set_attr("type", self.attr("type"))?;
                self.finish(barcode)
            }
            "feed" => {
                let mut feed = Feed::new();
                feed.tail = self.tail.clone();
                self.finish_without_text(feed)
            }
            "logo" => {
                let mut logo = Logo::default();
                logo.tail = self.tail.clone();
                self.finish_without_text(logo)
            }
            "cut" => {
                let mut cut = Cut::default();
                cut.tail = self.tail.clone();
                self.finish_without_text(cut)
            }
            "recovery" => {
                let mut recovery = Recovery::new();
                recovery.tail = self.tail.clone();
                self.finish_without_text(recovery)
            }
            "reset" => {
                let mut reset = Reset::new();
                reset.tail = self.tail.clone();
                self.finish_without_text(reset)
            }
            other => match placeholder::construct(other) {
                Some(err) => Err(err),
                None => Err(EposError::UnknownElement(other.to_string())),
            },
        }
    }

    fn attr(&self, name: &str) -> AttrValue {
        self.attrs
            .get(name)
            .cloned()
            .map_or(AttrValue::Unset, AttrValue::from)
    }

    fn finish(&self, mut element: impl Element + 'static) -> Result<Box<dyn Element>, EposError> {
        for (name, value) in &self.attrs {
            element.set_attr(name, AttrValue::from(value.clone()))?;
        }
        Ok(Box::new(element))
    }

    fn finish_without_text(
        &self,
        element: impl Element + 'static,
    ) -> Result<Box<dyn Element>, EposError> {
        if !self.text.is_empty() {
            return Err(EposError::UnknownAttribute {
                element: element.tag(),
                attribute: "text".to_string(),
            });
        }
        self.finish(element)
    }
}

/// Parse a JSON job from a string.
pub fn parse_job(json: &str) -> Result<JsonJob, EposError> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// TESTS
// ============================================================================
