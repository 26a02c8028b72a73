//! # Paper and Device Control Elements
//!
//! | Element | Tag | Attributes |
//! |---------|-----|------------|
//! | [`Feed`] | `feed` | unit, line, linespc (each 0..=255) |
//! | [`Cut`] | `cut` | type ([`CutType`]) |
//! | [`Recovery`] | `recovery` | none |
//! | [`Reset`] | `reset` | none |
//!
//! ## Cutting
//!
//! A `<cut/>` without a type lets the printer apply its default (feed to the
//! cut position, then cut). The `type` attribute is only written when a type
//! has been chosen.

use super::attributes::{AttrValue, Choice, Ranged};
use super::constants::CutType;
use super::{AttrMap, Element};
use crate::error::{EposError, ValidationError};

// ============================================================================
// FEED
// ============================================================================

/// Paper feed, by dots (`unit`), by lines (`line`), or a line spacing
/// change (`linespc`).
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub tail: String,
    pub unit: Ranged,
    pub line: Ranged,
    pub linespc: Ranged,
}

impl Feed {
    /// A feed with nothing set; the printer feeds one line.
    pub fn new() -> Self {
        Self {
            tail: String::new(),
            unit: Ranged::new("unit", 0, 255),
            line: Ranged::new("line", 0, 255),
            linespc: Ranged::new("linespc", 0, 255),
        }
    }

    /// Feed `n` lines.
    pub fn lines(n: impl Into<AttrValue>) -> Result<Self, ValidationError> {
        let mut feed = Self::new();
        feed.line.set(n)?;
        Ok(feed)
    }

    /// Feed `n` dots.
    pub fn units(n: impl Into<AttrValue>) -> Result<Self, ValidationError> {
        let mut feed = Self::new();
        feed.unit.set(n)?;
        Ok(feed)
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Feed {
    fn tag(&self) -> &'static str {
        "feed"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("unit", &self.unit);
        attrs.put("line", &self.line);
        attrs.put("linespc", &self.linespc);
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "unit" => self.unit.set(value)?,
            "line" => self.line.set(value)?,
            "linespc" => self.linespc.set(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "feed",
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
// CUT
// ============================================================================

/// Paper cut.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    pub tail: String,
    pub cut_type: Choice<CutType>,
}

impl Cut {
    pub fn new(cut_type: impl Into<Option<CutType>>) -> Self {
        Self {
            tail: String::new(),
            cut_type: Choice::with_value("type", cut_type),
        }
    }
}

impl Default for Cut {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Element for Cut {
    fn tag(&self) -> &'static str {
        "cut"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("type", &self.cut_type);
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "type" => self.cut_type.assign(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "cut",
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
// RECOVERY / RESET
// ============================================================================

macro_rules! bare_element {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub tail: String,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Element for $name {
            fn tag(&self) -> &'static str {
                $tag
            }

            fn load_attrs(&self, _attrs: &mut AttrMap) {}

            fn set_attr(&mut self, name: &str, _value: AttrValue) -> Result<(), EposError> {
                Err(EposError::UnknownAttribute {
                    element: $tag,
                    attribute: name.to_string(),
                })
            }

            fn tail(&self) -> &str {
                &self.tail
            }
        }
    };
}

bare_element!(
    /// Recover the printer from a recoverable error state.
    Recovery,
    "recovery"
);

bare_element!(
    /// Reset the printer to its initial settings.
    Reset,
    "reset"
);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_lines() {
        let feed = Feed::lines(2).unwrap();
        assert_eq!(feed.render().to_xml().unwrap(), r#"<feed line="2"/>"#);
    }

    #[test]
    fn test_feed_all_attrs() {
        let mut feed = Feed::units(30).unwrap();
        feed.line.set(1).unwrap();
        feed.linespc.set(24).unwrap();
        assert_eq!(
            feed.render().to_xml().unwrap(),
            r#"<feed unit="30" line="1" linespc="24"/>"#
        );
    }

    #[test]
    fn test_feed_bounds() {
        let mut feed = Feed::new();
        for field in [&mut feed.unit, &mut feed.line, &mut feed.linespc] {
            assert!(field.set(0).is_ok());
            assert!(field.set(255).is_ok());
            assert!(field.set(-1).is_err());
            assert!(field.set(256).is_err());
            assert_eq!(field.get(), Some(255));
        }
        assert!(Feed::lines(256).is_err());
    }

    #[test]
    fn test_feed_numeric_string() {
        let mut feed = Feed::new();
        feed.set_attr("line", AttrValue::from("3")).unwrap();
        assert_eq!(feed.line.get(), Some(3));
    }

    #[test]
    fn test_cut_without_type_omits_attribute() {
        assert_eq!(Cut::default().render().to_xml().unwrap(), "<cut/>");
    }

    #[test]
    fn test_cut_with_type() {
        let cut = Cut::new(CutType::NoFeed);
        assert_eq!(cut.render().to_xml().unwrap(), r#"<cut type="no_feed"/>"#);
    }

    #[test]
    fn test_cut_set_attr() {
        let mut cut = Cut::default();
        cut.set_attr("type", AttrValue::from("feed")).unwrap();
        assert_eq!(cut.cut_type.get(), Some(CutType::Feed));
        assert!(cut.set_attr("type", AttrValue::from("partial")).is_err());
        assert_eq!(cut.cut_type.get(), Some(CutType::Feed));
    }

    #[test]
    fn test_recovery_and_reset() {
        assert_eq!(Recovery::new().render().to_xml().unwrap(), "<recovery/>");
        assert_eq!(Reset::new().render().to_xml().unwrap(), "<reset/>");
    }

    #[test]
    fn test_reset_has_no_attributes() {
        let mut reset = Reset::new();
        assert!(reset.set_attr("type", AttrValue::from("x")).is_err());
    }
}
