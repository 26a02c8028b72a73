//! # SOAP Framing
//!
//! ePOS-Print requests travel inside a SOAP 1.1 envelope:
//!
//! ```text
//! <s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
//!   <s:Body>
//!     <epos-print xmlns="http://www.epson-pos.com/schemas/2011/03/epos-print">...</epos-print>
//!   </s:Body>
//! </s:Envelope>
//! ```
//!
//! The reply uses the same envelope with a `<response>` element in the body.
//! [`parse_response`] never fails: replies it cannot interpret become a
//! [`Response`] with `success == false` and one of the codes
//! [`PARSING_ERROR`], [`NO_BODY_FOUND`], [`NO_RESPONSE_FOUND`].

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use tracing::warn;

use super::attributes::AttrValue;
use super::constants::SOAP_NS;
use super::response::{
    NO_BODY_FOUND, NO_RESPONSE_FOUND, PARSING_ERROR, REPLY_ATTRIBUTES, Response,
};
use super::Element;

/// `Content-Type` request header
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// `If-Modified-Since` request header; keeps intermediaries from caching
pub const IF_MODIFIED_SINCE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// `SOAPAction` request header (an empty quoted string)
pub const SOAP_ACTION: &str = "\"\"";

// ============================================================================
// ENVELOPE
// ============================================================================

/// Wrap a body fragment in a SOAP envelope.
pub fn envelope(body: &str) -> String {
    envelope_with_header("", body)
}

/// Wrap a body fragment in a SOAP envelope with an optional header block.
/// An empty header is left out entirely.
pub fn envelope_with_header(header: &str, body: &str) -> String {
    let mut soap = String::with_capacity(body.len() + header.len() + 128);
    soap.push_str("<s:Envelope xmlns:s=\"");
    soap.push_str(SOAP_NS);
    soap.push_str("\">");
    if !header.is_empty() {
        soap.push_str("<s:Header>");
        soap.push_str(header);
        soap.push_str("</s:Header>");
    }
    soap.push_str("<s:Body>");
    soap.push_str(body);
    soap.push_str("</s:Body>");
    soap.push_str("</s:Envelope>");
    soap
}

// ============================================================================
// REPLY PARSING
// ============================================================================

/// Interpret a device reply.
pub fn parse_response(reply: &str) -> Response {
    let root = match XmlElement::parse(reply) {
        Ok(root) => root,
        Err(reason) => {
            warn!(%reason, "device reply is not well-formed XML");
            return Response::failure(PARSING_ERROR);
        }
    };

    let is_body = |e: &XmlElement| e.local_name == "Body" && e.namespace.as_deref() == Some(SOAP_NS);
    let Some(body) = root.find(&is_body) else {
        warn!("device reply has no SOAP body");
        return Response::failure(NO_BODY_FOUND);
    };

    let Some(element) = body.children.iter().find(|c| c.local_name.contains("response")) else {
        warn!("SOAP body has no response element");
        return Response::failure(NO_RESPONSE_FOUND);
    };

    let mut response = Response::default();
    for name in REPLY_ATTRIBUTES {
        let Some(raw) = element.attr(name) else {
            continue;
        };
        if let Err(err) = response.set_attr(name, AttrValue::from(raw)) {
            warn!(attribute = name, value = %raw, %err, "response attribute is malformed");
            return Response::failure(PARSING_ERROR);
        }
    }
    response
}

/// Minimal element tree of a parsed reply.
#[derive(Debug, Default)]
struct XmlElement {
    namespace: Option<String>,
    local_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a complete document, requiring exactly one root element and
    /// nothing but whitespace outside it.
    fn parse(xml: &str) -> Result<Self, String> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let (ns, event) = reader.read_resolved_event().map_err(|e| e.to_string())?;
            let namespace = namespace_uri(ns)?;
            match event {
                Event::Start(e) => {
                    let element = Self::from_start(&reader, namespace, &e)?;
                    if stack.is_empty() && root.is_some() {
                        return Err("multiple root elements".to_string());
                    }
                    stack.push(element);
                }
                Event::Empty(e) => {
                    let element = Self::from_start(&reader, namespace, &e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or("unexpected closing tag")?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(t) => {
                    if stack.is_empty() && !t.iter().all(u8::is_ascii_whitespace) {
                        return Err("text outside the root element".to_string());
                    }
                }
                Event::CData(_) if stack.is_empty() => {
                    return Err("CDATA outside the root element".to_string());
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err("unclosed element".to_string());
        }
        root.ok_or_else(|| "no root element".to_string())
    }

    fn from_start(
        reader: &NsReader<&[u8]>,
        namespace: Option<String>,
        start: &BytesStart<'_>,
    ) -> Result<Self, String> {
        let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attr.key) {
                return Err(format!(
                    "unbound namespace prefix {:?} on attribute",
                    String::from_utf8_lossy(&prefix)
                ));
            }
            let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|e| e.to_string())?.into_owned();
            attributes.push((name, value));
        }

        Ok(Self {
            namespace,
            local_name,
            attributes,
            children: Vec::new(),
        })
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search including `self`.
    fn find(&self, pred: &dyn Fn(&XmlElement) -> bool) -> Option<&XmlElement> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }
}

/// Owned namespace URI of an event's name. An undeclared prefix makes the
/// document not namespace-well-formed.
fn namespace_uri(ns: ResolveResult<'_>) -> Result<Option<String>, String> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(String::from_utf8_lossy(uri).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(format!(
            "unbound namespace prefix {:?}",
            String::from_utf8_lossy(&prefix)
        )),
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err("multiple root elements".to_string()),
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply(body: &str) -> String {
        envelope(body)
    }

    #[test]
    fn test_envelope() {
        assert_eq!(
            envelope("<x/>"),
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><x/></s:Body></s:Envelope>"#
        );
    }

    #[test]
    fn test_envelope_with_header() {
        assert_eq!(
            envelope_with_header("<h/>", "<x/>"),
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Header><h/></s:Header><s:Body><x/></s:Body></s:Envelope>"#
        );
    }

    #[test]
    fn test_parse_success() {
        let r = parse_response(&reply(
            r#"<response success="true" code="" status="0" battery="3"/>"#,
        ));
        assert_eq!(
            r,
            Response {
                success: true,
                code: String::new(),
                status: 0,
                battery: 3
            }
        );
    }

    #[test]
    fn test_parse_namespaced_response() {
        let r = parse_response(&reply(
            r#"<response success="false" code="EPTR_COVER_OPEN" status="252641308" battery="0" xmlns="http://www.epson-pos.com/schemas/2011/03/epos-print"></response>"#,
        ));
        assert!(!r.success);
        assert_eq!(r.code, "EPTR_COVER_OPEN");
        assert_eq!(r.status, 252641308);
    }

    #[test]
    fn test_parse_with_declaration_and_whitespace() {
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n{}\n",
            reply(r#"<response success="true" code="" status="2" battery="0"/>"#)
        );
        let r = parse_response(&xml);
        assert!(r.success);
        assert_eq!(r.status, 2);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_response("not xml"), Response::failure(PARSING_ERROR));
        assert_eq!(parse_response(""), Response::failure(PARSING_ERROR));
        assert_eq!(
            parse_response("<s:Envelope xmlns:s=\"x\"><s:Body>"),
            Response::failure(PARSING_ERROR)
        );
        assert_eq!(parse_response("<a></b>"), Response::failure(PARSING_ERROR));
    }

    #[test]
    fn test_parse_undeclared_prefix() {
        let xml = r#"<s:Envelope><s:Body><response success="true" status="0" battery="0"/></s:Body></s:Envelope>"#;
        assert_eq!(parse_response(xml), Response::failure(PARSING_ERROR));
    }

    #[test]
    fn test_parse_undeclared_attribute_prefix() {
        let r = parse_response(&reply(r#"<response success="true" x:status="0"/>"#));
        assert_eq!(r, Response::failure(PARSING_ERROR));
    }

    #[test]
    fn test_parse_no_body() {
        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Header/></s:Envelope>"#;
        assert_eq!(parse_response(xml), Response::failure(NO_BODY_FOUND));
    }

    #[test]
    fn test_parse_body_in_wrong_namespace() {
        let xml = r#"<Envelope><Body><response success="true"/></Body></Envelope>"#;
        assert_eq!(parse_response(xml), Response::failure(NO_BODY_FOUND));
    }

    #[test]
    fn test_parse_no_response_child() {
        let r = parse_response(&reply(r#"<other success="true"/>"#));
        assert_eq!(r, Response::failure(NO_RESPONSE_FOUND));
    }

    #[test]
    fn test_parse_response_must_be_direct_child() {
        let r = parse_response(&reply(r#"<wrap><response success="true"/></wrap>"#));
        assert_eq!(r, Response::failure(NO_RESPONSE_FOUND));
    }

    #[test]
    fn test_parse_missing_attributes_default() {
        let r = parse_response(&reply("<response/>"));
        assert_eq!(r, Response::failure(""));
    }

    #[test]
    fn test_parse_success_other_than_true_is_false() {
        let r = parse_response(&reply(r#"<response success="TRUE"/>"#));
        assert!(!r.success);
    }

    #[test]
    fn test_parse_integer_attributes_share_validation() {
        let r = parse_response(&reply(r#"<response success="true" status=" 2 " battery="-1"/>"#));
        assert_eq!(r.status, 2);
        assert_eq!(r.battery, -1);
        let r = parse_response(&reply(r#"<response success="true" battery="full"/>"#));
        assert_eq!(r, Response::failure(PARSING_ERROR));
    }

    #[test]
    fn test_parse_non_integer_status() {
        let r = parse_response(&reply(r#"<response success="true" status="busy"/>"#));
        assert_eq!(r, Response::failure(PARSING_ERROR));
    }
}
