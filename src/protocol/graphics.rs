//! # Graphics Elements
//!
//! - [`Image`]: raster image sent inline, payload is base64 raster data
//! - [`Logo`]: a logo stored in the printer's NV memory, addressed by two
//!   key codes
//!
//! ## Raster Width
//!
//! An 80mm TM printer prints 576 dots per line, which bounds `Image.width`.

use super::attributes::{AttrValue, Choice, Ranged};
use super::constants::{Align, Color, Mode};
use super::{AttrMap, Element};
use crate::error::{EposError, ValidationError};

/// Maximum printable width in dots
pub const MAX_WIDTH_DOTS: i64 = 576;

// ============================================================================
// IMAGE
// ============================================================================

/// Inline raster image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Base64 encoded raster data
    pub text: String,
    pub tail: String,
    pub width: Ranged,
    pub height: Ranged,
    pub color: Choice<Color>,
    pub align: Choice<Align>,
    pub mode: Choice<Mode>,
}

impl Image {
    pub fn new(
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        data: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            text: data.into(),
            tail: String::new(),
            width: Ranged::with_value("width", 0, MAX_WIDTH_DOTS, width)?,
            height: Ranged::with_value("height", 0, 65535, height)?,
            color: Choice::new("color"),
            align: Choice::new("align"),
            mode: Choice::with_value("mode", Mode::Mono),
        })
    }
}

impl Default for Image {
    fn default() -> Self {
        Self {
            text: String::new(),
            tail: String::new(),
            width: Ranged::with_default("width", 0, MAX_WIDTH_DOTS, 0),
            height: Ranged::with_default("height", 0, 65535, 0),
            color: Choice::new("color"),
            align: Choice::new("align"),
            mode: Choice::with_value("mode", Mode::Mono),
        }
    }
}

impl Element for Image {
    fn tag(&self) -> &'static str {
        "image"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("width", &self.width);
        attrs.put("height", &self.height);
        attrs.put("color", &self.color);
        attrs.put("align", &self.align);
        if self.mode.get().unwrap_or_default() != Mode::Mono {
            attrs.put("mode", &self.mode);
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "width" => self.width.set(value)?,
            "height" => self.height.set(value)?,
            "color" => self.color.assign(value)?,
            "align" => self.align.assign(value)?,
            "mode" => self.mode.assign(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "image",
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
// LOGO
// ============================================================================

/// NV logo print.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub tail: String,
    pub key1: Ranged,
    pub key2: Ranged,
    pub align: Choice<Align>,
}

impl Logo {
    pub fn new(
        key1: impl Into<AttrValue>,
        key2: impl Into<AttrValue>,
    ) -> Result<Self, ValidationError> {
        let mut logo = Self::default();
        set_key(&mut logo.key1, key1.into())?;
        set_key(&mut logo.key2, key2.into())?;
        Ok(logo)
    }
}

/// Key codes are mandatory; they can be changed but not unset.
fn set_key(key: &mut Ranged, value: AttrValue) -> Result<(), ValidationError> {
    if value == AttrValue::Unset {
        return Err(ValidationError::NotAnInteger {
            field: key.name(),
            value: value.to_string(),
        });
    }
    key.set(value)
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            tail: String::new(),
            key1: Ranged::with_default("key1", 0, 255, 0),
            key2: Ranged::with_default("key2", 0, 255, 0),
            align: Choice::new("align"),
        }
    }
}

impl Element for Logo {
    fn tag(&self) -> &'static str {
        "logo"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("key1", &self.key1);
        attrs.put("key2", &self.key2);
        attrs.put("align", &self.align);
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "key1" => set_key(&mut self.key1, value)?,
            "key2" => set_key(&mut self.key2, value)?,
            "align" => self.align.assign(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "logo",
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn tail(&self) -> &str {
        &self.tail
    }
}

// ============================================================================
// TESTS
// ============================================================================
