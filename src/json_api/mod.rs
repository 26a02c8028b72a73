//! # JSON API
//!
//! Deserialize JSON print jobs into a [`Document`](crate::document::Document).
//!
//! Each element names its kind under `element`; every other key except
//! `text` and `tail` is assigned as an attribute by its wire name. Values
//! may be JSON numbers and booleans or their string forms (`"2"`,
//! `"true"`), which lets form-encoded or loosely typed producers submit
//! jobs without conversion.
//!
//! ## Example
//!
//! ```
//! use epos::json_api::JsonJob;
//!
//! let json = r#"{
//!     "body": [
//!         {"element": "text", "text": "HELLO\n", "align": "center", "dw": "true"},
//!         {"element": "feed", "line": 2},
//!         {"element": "barcode", "type": "code128", "text": "{B12345", "hri": "below"}
//!     ]
//! }"#;
//!
//! let job: JsonJob = serde_json::from_str(json).unwrap();
//! assert!(job.autocut);
//! let doc = job.to_document().unwrap();
//! assert_eq!(doc.body().len(), 3);
//! ```

mod convert;
mod schema;

pub use convert::parse_job;
pub use schema::{JsonElement, JsonJob};
