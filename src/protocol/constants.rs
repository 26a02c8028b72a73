//! # Protocol Vocabulary
//!
//! Closed token sets used by ePOS-Print XML attributes, plus the namespace
//! URIs the wire format depends on.
//!
//! | Enum | Attribute | Tokens |
//! |------|-----------|--------|
//! | [`Align`] | `align` | left, center, right |
//! | [`Font`] | `font` | font_a, font_b |
//! | [`Color`] | `color` | color_1 .. color_4 |
//! | [`Lang`] | `lang` | en, de, fr, it, es |
//! | [`Mode`] | `mode` | mono, gray16 |
//! | [`CutType`] | `type` (cut) | no_feed, feed, reserve |
//! | [`Hri`] | `hri` | none, above, below, both |
//! | [`BarcodeType`] | `type` (barcode) | upc_a .. gs1_databar_expanded |

use std::fmt;

use super::attributes::Token;

/// ePOS-Print XML namespace
pub const EPOS_NS: &str = "http://www.epson-pos.com/schemas/2011/03/epos-print";

/// SOAP 1.1 envelope namespace
pub const SOAP_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Token for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

token_enum! {
    /// Horizontal alignment
    Align {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

token_enum! {
    /// Character font
    Font {
        /// Font A (12x24 dots)
        A => "font_a",
        /// Font B (9x17 dots)
        B => "font_b",
    }
}

token_enum! {
    /// Print color on two-color capable models
    Color {
        Color1 => "color_1",
        Color2 => "color_2",
        Color3 => "color_3",
        Color4 => "color_4",
    }
}

token_enum! {
    /// Text language
    Lang {
        En => "en",
        De => "de",
        Fr => "fr",
        It => "it",
        Es => "es",
    }
}

token_enum! {
    /// Raster image mode
    Mode {
        /// Monochrome, the device default
        Mono => "mono",
        /// 16-level grayscale
        Gray16 => "gray16",
    }
}

token_enum! {
    /// Paper cut behavior
    CutType {
        /// Cut without feeding
        NoFeed => "no_feed",
        /// Feed to the cut position, then cut
        Feed => "feed",
        /// Cut once the next print reaches the cut position
        Reserve => "reserve",
    }
}

token_enum! {
    /// Human Readable Interpretation position
    Hri {
        None => "none",
        Above => "above",
        Below => "below",
        Both => "both",
    }
}

token_enum! {
    /// 1D barcode symbology
    BarcodeType {
        UpcA => "upc_a",
        UpcE => "upc_e",
        Ean13 => "ean13",
        Jan13 => "jan13",
        Ean8 => "ean8",
        Jan8 => "jan8",
        Code39 => "code39",
        Itf => "itf",
        Codabar => "codabar",
        Code93 => "code93",
        Code128 => "code128",
        Gs1128 => "gs1_128",
        Gs1DatabarOmnidirectional => "gs1_databar_omnidirectional",
        Gs1DatabarTruncated => "gs1_databar_truncated",
        Gs1DatabarLimited => "gs1_databar_limited",
        Gs1DatabarExpanded => "gs1_databar_expanded",
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Mono
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_lookup() {
        for t in BarcodeType::ALL {
            assert_eq!(BarcodeType::from_token(t.token()), Some(*t));
        }
        for t in CutType::ALL {
            assert_eq!(CutType::from_token(t.token()), Some(*t));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Align::from_token("center"), Some(Align::Center));
        assert_eq!(Align::from_token("Center"), None);
        assert_eq!(Hri::from_token("None"), None);
        assert_eq!(Hri::from_token("none"), Some(Hri::None));
    }

    #[test]
    fn test_display_is_token() {
        assert_eq!(Font::B.to_string(), "font_b");
        assert_eq!(Color::Color1.to_string(), "color_1");
    }

    #[test]
    fn test_mode_default_is_mono() {
        assert_eq!(Mode::default(), Mode::Mono);
    }
}
