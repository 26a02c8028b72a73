//! # Device Response
//!
//! After every print request the printer answers with a `<response>`
//! element:
//!
//! ```text
//! <response success="true" code="" status="251658262" battery="0"/>
//! ```
//!
//! - **success**: whether the job printed
//! - **code**: error code when it did not (e.g. `EPTR_COVER_OPEN`)
//! - **status**: ASB bitmask, see [`crate::status`]
//! - **battery**: battery level on portable models
//!
//! The client also produces a `Response` for replies it cannot interpret,
//! using one of the fixed codes below with `success == false`.

use super::attributes::{AttrValue, Ranged};
use super::constants::EPOS_NS;
use super::{AttrMap, Element};
use crate::error::EposError;
use crate::status;

/// The reply body could not be parsed as XML
pub const PARSING_ERROR: &str = "PARSING_ERROR";

/// The reply has no SOAP `Body`
pub const NO_BODY_FOUND: &str = "NO_BODY_FOUND";

/// The SOAP body has no response element
pub const NO_RESPONSE_FOUND: &str = "NO_RESPONSE_FOUND";

/// Attributes read from a device reply, in assignment order.
pub const REPLY_ATTRIBUTES: [&str; 4] = ["success", "code", "status", "battery"];

/// Result of one print exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub success: bool,
    pub code: String,
    pub status: u32,
    pub battery: i32,
}

impl Response {
    /// A successful response with empty code and status.
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    /// A failed response carrying a diagnostic code.
    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            ..Default::default()
        }
    }

    /// Human-readable conditions from the status bitmask.
    pub fn statuses(&self) -> Vec<&'static str> {
        status::decode(self.status)
    }
}

impl Element for Response {
    fn tag(&self) -> &'static str {
        "response"
    }

    fn load_attrs(&self, attrs: &mut AttrMap) {
        attrs.put_raw("xmlns", Some(EPOS_NS.to_string()));
        attrs.put_raw("success", Some(self.success.to_string()));
        if !self.code.is_empty() {
            attrs.put_raw("code", Some(self.code.clone()));
        }
        attrs.put_raw("status", Some(self.status.to_string()));
        attrs.put_raw("battery", Some(self.battery.to_string()));
    }

    /// Assign a reply attribute. `success` is true only for a boolean `true`
    /// or the exact string `"true"`; any other value reads as false. `Unset`
    /// resets a field to its default, the same as an absent attribute.
    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), EposError> {
        match name {
            "success" => {
                self.success = match value {
                    AttrValue::Bool(b) => b,
                    AttrValue::Str(s) => s == "true",
                    _ => false,
                }
            }
            "code" => {
                self.code = match value {
                    AttrValue::Unset => String::new(),
                    other => other.to_string(),
                }
            }
            "status" => self.status = int_attr("status", value, 0, u32::MAX as i64)? as u32,
            "battery" => {
                self.battery = int_attr("battery", value, i32::MIN as i64, i32::MAX as i64)? as i32
            }
            _ => {
                return Err(EposError::UnknownAttribute {
                    element: "response",
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn int_attr(field: &'static str, value: AttrValue, min: i64, max: i64) -> Result<i64, EposError> {
    let mut ranged = Ranged::new(field, min, max);
    ranged.set(value)?;
    Ok(ranged.get().unwrap_or(0))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_success() {
        let mut r = Response::ok();
        r.battery = 3;
        assert_eq!(
            r.render().to_xml().unwrap(),
            format!(r#"<response xmlns="{EPOS_NS}" success="true" status="0" battery="3"/>"#)
        );
    }

    #[test]
    fn test_render_with_code() {
        let mut r = Response::failure("EPTR_COVER_OPEN");
        r.status = 0x20;
        assert_eq!(
            r.render().to_xml().unwrap(),
            format!(
                r#"<response xmlns="{EPOS_NS}" success="false" code="EPTR_COVER_OPEN" status="32" battery="0"/>"#
            )
        );
    }

    #[test]
    fn test_statuses() {
        let mut r = Response::ok();
        r.status = 0x02;
        assert_eq!(r.statuses(), vec!["Printing is successfully completed"]);
    }

    #[test]
    fn test_set_attr_from_strings() {
        let mut r = Response::default();
        r.set_attr("success", AttrValue::from("true")).unwrap();
        r.set_attr("status", AttrValue::from("251658262")).unwrap();
        r.set_attr("battery", AttrValue::from("3")).unwrap();
        assert!(r.success);
        assert_eq!(r.status, 251658262);
        assert_eq!(r.battery, 3);
        assert!(r.set_attr("status", AttrValue::from("busy")).is_err());
        assert!(r.set_attr("status", AttrValue::from("-1")).is_err());
    }

    #[test]
    fn test_set_attr_success_is_exact() {
        let mut r = Response::ok();
        r.set_attr("success", AttrValue::from("TRUE")).unwrap();
        assert!(!r.success);
        r.set_attr("success", AttrValue::from("true")).unwrap();
        assert!(r.success);
        r.set_attr("success", AttrValue::from("1")).unwrap();
        assert!(!r.success);
    }

    #[test]
    fn test_set_attr_unset_matches_absent() {
        let mut r = Response::default();
        for name in REPLY_ATTRIBUTES {
            r.set_attr(name, AttrValue::from("7")).unwrap();
        }
        for name in REPLY_ATTRIBUTES {
            r.set_attr(name, AttrValue::Unset).unwrap();
        }
        assert_eq!(r, Response::default());
    }
}
