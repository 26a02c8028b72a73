//! # Text Element
//!
//! The `<text>` element prints a string with optional styling. Styling set
//! on one element stays in effect on the device for following text until it
//! is changed again.
//!
//! ## Attributes
//!
//! | Wire | Field | Accepts |
//! |------|-------|---------|
//! | lang | `lang` | [`Lang`] |
//! | font | `font` | [`Font`] |
//! | dw | `double_width` | bool |
//! | dh | `double_height` | bool |
//! | width | `width` | 1..=8 |
//! | height | `height` | 1..=8 |
//! | reverse | `reverse` | bool |
//! | em | `em` | bool |
//! | color | `color` | [`Color`] |
//! | x | `x` | 0..=576 |
//! | y | `y` | 0..=65535 |
//! | align | `align` | [`Align`] |
//! | rotate | `rotate` | bool |
//! | linespc | `linespc` | 0..=255 |
//! | smooth | `smooth` | bool |
//! | ul | `underline` | bool |

use super::attributes::{AttrValue, Choice, Flag, Ranged};
use super::constants::{Align, Color, Font, Lang};
use super::{AttrMap, Element};
use crate::error::EposError;

/// Styled text.
///
/// ```
/// use epos::protocol::{Element, Text};
///
/// let mut text = Text::new("Inverted?");
/// text.reverse.set(true);
/// assert_eq!(text.render().to_xml().unwrap(), r#"<text reverse="true">Inverted?</text>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub tail: String,
    pub lang: Choice<Lang>,
    pub font: Choice<Font>,
    pub smooth: Flag,
    pub double_width: Flag,
    pub double_height: Flag,
    pub width: Ranged,
    pub height: Ranged,
    pub reverse: Flag,
    pub underline: Flag,
    /// Emphasized (bold)
    pub em: Flag,
    pub color: Choice<Color>,
    pub x: Ranged,
    pub y: Ranged,
    pub align: Choice<Align>,
    pub rotate: Flag,
    pub linespc: Ranged,
}

impl Text {
    /// Create a text element with every attribute unset.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tail: String::new(),
            lang: Choice::new("lang"),
            font: Choice::new("font"),
            smooth: Flag::new("smooth"),
            double_width: Flag::new("dw"),
            double_height: Flag::new("dh"),
            width: Ranged::new("width", 1, 8),
            height: Ranged::new("height", 1, 8),
            reverse: Flag::new("reverse"),
            underline: Flag::new("ul"),
            em: Flag::new("em"),
            color: Choice::new("color"),
            x: Ranged::new("x", 0, 576),
            y: Ranged::new("y", 0, 65535),
            align: Choice::new("align"),
            rotate: Flag::new("rotate"),
            linespc: Ranged::new("linespc", 0, 255),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new("")
    }
}

impl Element for Text {
    fn tag(&self) -> &'static str {
        "text"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put("lang", &self.lang);
        attrs.put("font", &self.font);
        attrs.put("dw", &self.double_width);
        attrs.put("dh", &self.double_height);
        attrs.put("width", &self.width);
        attrs.put("height", &self.height);
        attrs.put("reverse", &self.reverse);
        attrs.put("em", &self.em);
        attrs.put("color", &self.color);
        attrs.put("x", &self.x);
        attrs.put("y", &self.y);
        attrs.put("align", &self.align);
        attrs.put("rotate", &self.rotate);
        attrs.put("linespc", &self.linespc);
        attrs.put("smooth", &self.smooth);
        attrs.put("ul", &self.underline);
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "lang" => self.lang.assign(value)?,
            "font" => self.font.assign(value)?,
            "dw" | "double_width" => self.double_width.assign(value)?,
            "dh" | "double_height" => self.double_height.assign(value)?,
            "width" => self.width.set(value)?,
            "height" => self.height.set(value)?,
            "reverse" => self.reverse.assign(value)?,
            "em" | "bold" => self.em.assign(value)?,
            "color" => self.color.assign(value)?,
            "x" => self.x.set(value)?,
            "y" => self.y.set(value)?,
            "align" => self.align.assign(value)?,
            "rotate" => self.rotate.assign(value)?,
            "linespc" => self.linespc.set(value)?,
            "smooth" => self.smooth.assign(value)?,
            "ul" | "underline" => self.underline.assign(value)?,
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "text",
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
    use crate::error::ValidationError;

    #[test]
    fn test_plain_text_has_no_attrs() {
        let text = Text::new("hello");
        assert_eq!(text.render().to_xml().unwrap(), "<text>hello</text>");
    }

    #[test]
    fn test_empty_text_self_closes() {
        let mut text = Text::default();
        text.em.set(false);
        assert_eq!(text.render().to_xml().unwrap(), r#"<text em="false"/>"#);
    }

    #[test]
    fn test_all_attrs_in_wire_order() {
        let mut t = Text::new("x");
        t.lang.set(Lang::De);
        t.font.set(Font::B);
        t.double_width.set(true);
        t.double_height.set(false);
        t.width.set(3).unwrap();
        t.height.set(4).unwrap();
        t.reverse.set(true);
        t.em.set(true);
        t.color.set(Color::Color1);
        t.x.set(10).unwrap();
        t.y.set(20).unwrap();
        t.align.set(Align::Right);
        t.rotate.set(false);
        t.linespc.set(30).unwrap();
        t.smooth.set(true);
        t.underline.set(true);

        let names: Vec<&str> = t.render().attrs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "lang", "font", "dw", "dh", "width", "height", "reverse", "em", "color", "x", "y",
                "align", "rotate", "linespc", "smooth", "ul"
            ]
        );
        assert_eq!(
            t.render().to_xml().unwrap(),
            concat!(
                r#"<text lang="de" font="font_b" dw="true" dh="false" width="3" height="4" "#,
                r#"reverse="true" em="true" color="color_1" x="10" y="20" align="right" "#,
                r#"rotate="false" linespc="30" smooth="true" ul="true">x</text>"#
            )
        );
    }

    #[test]
    fn test_x_bounds() {
        let mut t = Text::new("");
        assert!(t.x.set(0).is_ok());
        assert!(t.x.set(576).is_ok());
        assert!(t.x.set(-1).is_err());
        assert!(t.x.set(577).is_err());
        assert_eq!(t.x.get(), Some(576));
    }

    #[test]
    fn test_y_bounds() {
        let mut t = Text::new("");
        assert!(t.y.set(0).is_ok());
        assert!(t.y.set(65535).is_ok());
        assert!(t.y.set(-1).is_err());
        assert!(t.y.set(65536).is_err());
    }

    #[test]
    fn test_width_height_linespc_bounds() {
        let mut t = Text::new("");
        for field in [&mut t.width, &mut t.height] {
            assert!(field.set(1).is_ok());
            assert!(field.set(8).is_ok());
            assert!(field.set(0).is_err());
            assert!(field.set(9).is_err());
        }
        assert!(t.linespc.set(0).is_ok());
        assert!(t.linespc.set(255).is_ok());
        assert!(t.linespc.set(-1).is_err());
        assert!(t.linespc.set(256).is_err());
    }

    #[test]
    fn test_set_attr_aliases_and_string_bools() {
        let mut t = Text::new("");
        t.set_attr("bold", AttrValue::from("true")).unwrap();
        t.set_attr("ul", AttrValue::from(true)).unwrap();
        t.set_attr("double_width", AttrValue::from("false")).unwrap();
        assert_eq!(t.em.get(), Some(true));
        assert_eq!(t.underline.get(), Some(true));
        assert_eq!(t.double_width.get(), Some(false));
    }

    #[test]
    fn test_set_attr_names_offending_field() {
        let mut t = Text::new("");
        let err = t.set_attr("width", AttrValue::from(9)).unwrap_err();
        match err {
            EposError::Validation(v) => {
                assert_eq!(v.field(), "width");
                assert_eq!(
                    v,
                    ValidationError::OutOfRange {
                        field: "width",
                        min: 1,
                        max: 8,
                        value: 9
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_set_attr_unknown_name() {
        let mut t = Text::new("");
        assert!(matches!(
            t.set_attr("size", AttrValue::from(2)),
            Err(EposError::UnknownAttribute { element: "text", .. })
        ));
    }

    #[test]
    fn test_set_attr_bad_lang() {
        let mut t = Text::new("");
        t.set_attr("lang", AttrValue::from("en")).unwrap();
        assert!(t.set_attr("lang", AttrValue::from("xx")).is_err());
        assert_eq!(t.lang.get(), Some(Lang::En));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut t = Text::new("same");
        t.align.set(Align::Center);
        t.width.set(2).unwrap();
        let first = t.render().to_xml().unwrap();
        let second = t.render().to_xml().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_reflects_later_changes() {
        let mut t = Text::new("x");
        t.width.set(2).unwrap();
        assert!(t.render().to_xml().unwrap().contains("width=\"2\""));
        t.width.clear();
        assert_eq!(t.render().to_xml().unwrap(), "<text>x</text>");
    }
}
