//! # Unsupported Elements
//!
//! ePOS-Print XML defines more commands than this crate can build today
//! (2D symbols, page mode, ruled lines, drawer pulses, buzzer, raw commands,
//! label layout). Each has a type here so callers can name it, but every
//! constructor fails with [`EposError::Unimplemented`] and the types have no
//! values. Nothing partial is ever written to the wire.

use std::convert::Infallible;

use super::attributes::AttrValue;
use super::{AttrMap, Element};
use crate::error::EposError;

macro_rules! placeholder_element {
    ($($(#[$meta:meta])* $name:ident => $tag:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name(Infallible);

            impl $name {
                /// Always fails: this element is not supported yet.
                pub fn new() -> Result<Self, EposError> {
                    Err(EposError::Unimplemented { element: $tag })
                }
            }

            impl Element for $name {
                fn tag(&self) -> &'static str {
                    match self.0 {}
                }

                fn load_attrs(&self, _attrs: &mut AttrMap) {
                    match self.0 {}
                }

                fn set_attr(&mut self, _name: &str, _value: AttrValue) -> Result<(), EposError> {
                    match self.0 {}
                }
            }
        )+

        /// Tags of every unsupported element.
        pub const UNSUPPORTED_TAGS: &[&str] = &[$($tag),+];
    };
}

placeholder_element! {
    /// 2D symbol (PDF417, QR Code, MaxiCode, ...)
    Symbol => "symbol",
    /// Horizontal ruled line
    HLine => "hline",
    /// Start of a vertical ruled line
    VLineBegin => "vline-begin",
    /// End of a vertical ruled line
    VLineEnd => "vline-end",
    /// Page mode block
    Page => "page",
    /// Page mode print area
    Area => "area",
    /// Page mode print direction
    Direction => "direction",
    /// Page mode print position
    Position => "position",
    /// Page mode line
    Line => "line",
    /// Page mode rectangle
    Rectangle => "rectangle",
    /// Drawer kick pulse
    Pulse => "pulse",
    /// Buzzer
    Sound => "sound",
    /// Raw ESC/POS command
    Command => "command",
    /// Label and black mark paper layout
    Layout => "layout",
    /// Start of a batch
    BatchBegin => "batch-begin",
    /// End of a batch
    BatchEnd => "batch-end",
    /// Start of 90 degree rotated printing
    RotateBegin => "rotate-begin",
    /// End of 90 degree rotated printing
    RotateEnd => "rotate-end",
}

/// Try to construct the unsupported element with the given tag.
///
/// Returns `None` when the tag is not one of [`UNSUPPORTED_TAGS`], otherwise
/// the construction error.
pub fn construct(tag: &str) -> Option<EposError> {
    let result = match tag {
        "symbol" => Symbol::new().map(|_| ()),
        "hline" => HLine::new().map(|_| ()),
        "vline-begin" => VLineBegin::new().map(|_| ()),
        "vline-end" => VLineEnd::new().map(|_| ()),
        "page" => Page::new().map(|_| ()),
        "area" => Area::new().map(|_| ()),
        "direction" => Direction::new().map(|_| ()),
        "position" => Position::new().map(|_| ()),
        "line" => Line::new().map(|_| ()),
        "rectangle" => Rectangle::new().map(|_| ()),
        "pulse" => Pulse::new().map(|_| ()),
        "sound" => Sound::new().map(|_| ()),
        "command" => Command::new().map(|_| ()),
        "layout" => Layout::new().map(|_| ()),
        "batch-begin" => BatchBegin::new().map(|_| ()),
        "batch-end" => BatchEnd::new().map(|_| ()),
        "rotate-begin" => RotateBegin::new().map(|_| ()),
        "rotate-end" => RotateEnd::new().map(|_| ()),
        _ => return None,
    };
    result.err()
}

// ============================================================================
// TESTS
// ============================================================================
