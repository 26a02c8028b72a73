//! # Barcode Element
//!
//! Prints a 1D barcode. The element text is the data to encode; the
//! symbology is chosen with [`BarcodeType`].
//!
//! ```
//! use epos::protocol::{Barcode, BarcodeType, Element, Hri};
//!
//! let mut barcode = Barcode::new(BarcodeType::Code39, "BARCODE");
//! barcode.hri.set(Hri::Below);
//! assert_eq!(
//!     barcode.render().to_xml().unwrap(),
//!     r#"<barcode type="code39" hri="below">BARCODE</barcode>"#
//! );
//! ```
//!
//! ## Module Size
//!
//! | Attribute | Range | Meaning |
//! |-----------|-------|---------|
//! | width | 2..=6 | narrow module width in dots |
//! | height | 0..=255 | bar height in dots |

use super::attributes::{AttrValue, Choice, Flag, Ranged};
use super::constants::{Align, BarcodeType, Font, Hri};
use super::{AttrMap, Element};
use crate::error::{EposError, ValidationError};

/// 1D barcode.
#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    /// Data to encode
    pub text: String,
    pub tail: String,
    pub barcode_type: Choice<BarcodeType>,
    pub hri: Choice<Hri>,
    /// HRI font
    pub font: Choice<Font>,
    pub width: Ranged,
    pub height: Ranged,
    pub align: Choice<Align>,
    pub rotate: Flag,
}

impl Barcode {
    pub fn new(barcode_type: BarcodeType, data: impl Into<String>) -> Self {
        Self {
            text: data.into(),
            tail: String::new(),
            barcode_type: Choice::with_value("type", barcode_type),
            hri: Choice::new("hri"),
            font: Choice::new("font"),
            width: Ranged::new("width", 2, 6),
            height: Ranged::new("height", 0, 255),
            align: Choice::new("align"),
            rotate: Flag::new("rotate"),
        }
    }
}

impl Element for Barcode {
    fn tag(&self) -> &'static str {
        "barcode"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("type", &self.barcode_type);
        attrs.put("hri", &self.hri);
        attrs.put("font", &self.font);
        attrs.put("width", &self.width);
        attrs.put("height", &self.height);
        attrs.put("align", &self.align);
        attrs.put("rotate", &self.rotate);
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            // The symbology is mandatory on the wire
            "type" if value == AttrValue::Unset => {
                return Err(ValidationError::NotInSet {
                    field: "type",
                    allowed: "a barcode type".to_string(),
                    value: value.to_string(),
                }
                .into());
            }
            "type" => self.barcode_type.assign(value)?,
            "hri" => self.hri.assign(value)?,
            "font" => self.font.assign(value)?,
            "width" => self.width.set(value)?,
            "height" => self.height.set(value)?,
            "align" => self.align.assign(value)?,
            "rotate" => self.rotate.assign(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "barcode",
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn tail(&self) -> &str {
        &self.tail
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_attrs_in_wire_order() {
        let mut b = Barcode::new(BarcodeType::Ean13, "4901234567894");
        b.hri.set(Hri::None);
        b.font.set(Font::A);
        b.width.set(3).unwrap();
        b.height.set(64).unwrap();
        b.align.set(Align::Center);
        b.rotate.set(true);
        assert_eq!(
            b.render().to_xml().unwrap(),
            concat!(
                r#"<barcode type="ean13" hri="none" font="font_a" width="3" height="64" "#,
                r#"align="center" rotate="true">4901234567894</barcode>"#
            )
        );
    }

    #[test]
    fn test_width_bounds() {
        let mut b = Barcode::new(BarcodeType::Code128, "x");
        assert!(b.width.set(2).is_ok());
        assert!(b.width.set(6).is_ok());
        assert!(b.width.set(1).is_err());
        assert!(b.width.set(7).is_err());
    }

    #[test]
    fn test_height_bounds() {
        let mut b = Barcode::new(BarcodeType::Code128, "x");
        assert!(b.height.set(0).is_ok());
        assert!(b.height.set(255).is_ok());
        assert!(b.height.set(-1).is_err());
        assert!(b.height.set(256).is_err());
    }

    #[test]
    fn test_type_from_token() {
        let mut b = Barcode::new(BarcodeType::Code39, "x");
        b.set_attr("type", AttrValue::from("gs1_databar_omnidirectional"))
            .unwrap();
        assert_eq!(
            b.barcode_type.get(),
            Some(BarcodeType::Gs1DatabarOmnidirectional)
        );
    }

    #[test]
    fn test_type_cannot_be_cleared() {
        let mut b = Barcode::new(BarcodeType::Code39, "x");
        assert!(b.set_attr("type", AttrValue::Unset).is_err());
        assert!(b.set_attr("type", AttrValue::from("qr")).is_err());
        assert_eq!(b.barcode_type.get(), Some(BarcodeType::Code39));
    }
}
