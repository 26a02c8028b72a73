//! # Attribute Validators
//!
//! Small validated values shared by the element types. Every assignment is
//! checked when it happens; a rejected assignment leaves the stored value as
//! it was and returns a [`ValidationError`].
//!
//! | Validator | Stores | Accepts |
//! |-----------|--------|---------|
//! | [`Ranged`] | `Option<i64>` | integers (or numeric strings) in `[min, max]` |
//! | [`Choice`] | `Option<E>` | members of a closed [`Token`] set |
//! | [`Flag`] | `Option<bool>` | booleans, or the literals `"true"` / `"false"` |
//!
//! ```
//! use epos::protocol::attributes::Ranged;
//!
//! let mut width = Ranged::new("width", 1, 8);
//! width.set(4).unwrap();
//! assert!(width.set(9).is_err());
//! assert_eq!(width.get(), Some(4));
//! ```

use std::fmt;

use crate::error::ValidationError;

// ============================================================================
// UNTYPED INPUT
// ============================================================================

/// A raw attribute value as it arrives from untyped input (JSON, config,
/// string maps) before a validator has looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    #[default]
    Unset,
    Int(i64),
    Bool(bool),
    Str(String),
}

impl AttrValue {
    /// Normalize to a boolean.
    ///
    /// This is the only place where the string literals `"true"` and
    /// `"false"` are accepted in place of a native boolean.
    pub fn as_flag(&self, field: &'static str) -> Result<Option<bool>, ValidationError> {
        match self {
            AttrValue::Unset => Ok(None),
            AttrValue::Bool(b) => Ok(Some(*b)),
            AttrValue::Str(s) if s == "true" => Ok(Some(true)),
            AttrValue::Str(s) if s == "false" => Ok(Some(false)),
            other => Err(ValidationError::NotABool {
                field,
                value: other.to_string(),
            }),
        }
    }

    /// Coerce to an integer. `Unset` stays absent; anything present that
    /// does not convert is an error.
    pub fn as_int(&self, field: &'static str) -> Result<Option<i64>, ValidationError> {
        match self {
            AttrValue::Unset => Ok(None),
            AttrValue::Int(n) => Ok(Some(*n)),
            AttrValue::Str(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ValidationError::NotAnInteger {
                    field,
                    value: s.clone(),
                }),
            AttrValue::Bool(b) => Err(ValidationError::NotAnInteger {
                field,
                value: b.to_string(),
            }),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Unset => f.write_str("unset"),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! attr_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Int(i64::from(value))
                }
            }
        )*
    };
}

attr_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Unset, Into::into)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => AttrValue::Unset,
            Value::Bool(b) => AttrValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttrValue::Int(i),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        AttrValue::Int(f as i64)
                    }
                    _ => AttrValue::Str(n.to_string()),
                },
            },
            Value::String(s) => AttrValue::Str(s),
            other => AttrValue::Str(other.to_string()),
        }
    }
}

// ============================================================================
// WIRE RENDERING
// ============================================================================

/// Anything that can produce an attribute value for the wire.
///
/// `None` means the attribute is unset and must be left out of the markup.
pub trait WireValue {
    fn wire(&self) -> Option<String>;
}

// ============================================================================
// RANGED INTEGER
// ============================================================================

/// Integer attribute constrained to an inclusive interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranged {
    name: &'static str,
    min: i64,
    max: i64,
    value: Option<i64>,
}

impl Ranged {
    /// Create an unset value accepting `[min, max]`.
    pub const fn new(name: &'static str, min: i64, max: i64) -> Self {
        Self {
            name,
            min,
            max,
            value: None,
        }
    }

    /// Create a value holding `default`, clamped into `[min, max]`.
    pub const fn with_default(name: &'static str, min: i64, max: i64, default: i64) -> Self {
        let value = if default < min {
            min
        } else if default > max {
            max
        } else {
            default
        };
        Self {
            name,
            min,
            max,
            value: Some(value),
        }
    }

    /// Create a value with an initial setting, validated like any other
    /// assignment.
    pub fn with_value(
        name: &'static str,
        min: i64,
        max: i64,
        value: impl Into<AttrValue>,
    ) -> Result<Self, ValidationError> {
        let mut ranged = Self::new(name, min, max);
        ranged.set(value)?;
        Ok(ranged)
    }

    /// Assign a new value. `Unset` clears the value.
    pub fn set(&mut self, value: impl Into<AttrValue>) -> Result<(), ValidationError> {
        let value = value.into().as_int(self.name)?;
        if let Some(n) = value {
            if n < self.min || n > self.max {
                return Err(ValidationError::OutOfRange {
                    field: self.name,
                    min: self.min,
                    max: self.max,
                    value: n,
                });
            }
        }
        self.value = value;
        Ok(())
    }

    pub fn get(&self) -> Option<i64> {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Inclusive bounds as `(min, max)`.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

impl WireValue for Ranged {
    fn wire(&self) -> Option<String> {
        self.value.map(|n| n.to_string())
    }
}

// ============================================================================
// CLOSED ENUMERATION
// ============================================================================

/// A closed set of wire tokens.
pub trait Token: Copy + PartialEq + fmt::Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The token written to the wire.
    fn token(self) -> &'static str;

    /// Look up a member by its exact wire token.
    fn from_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.token() == s)
    }
}

/// Attribute restricted to the members of a [`Token`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<E: Token> {
    name: &'static str,
    value: Option<E>,
}

impl<E: Token> Choice<E> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn with_value(name: &'static str, value: impl Into<Option<E>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Typed assignment. The type already guarantees membership.
    pub fn set(&mut self, value: impl Into<Option<E>>) {
        self.value = value.into();
    }

    /// Untyped assignment from a wire token.
    pub fn assign(&mut self, value: AttrValue) -> Result<(), ValidationError> {
        let parsed = match &value {
            AttrValue::Unset => None,
            AttrValue::Str(s) => Some(E::from_token(s).ok_or_else(|| self.not_in_set(&value))?),
            _ => return Err(self.not_in_set(&value)),
        };
        self.value = parsed;
        Ok(())
    }

    pub fn get(&self) -> Option<E> {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    fn not_in_set(&self, value: &AttrValue) -> ValidationError {
        ValidationError::NotInSet {
            field: self.name,
            allowed: E::ALL
                .iter()
                .map(|t| t.token())
                .collect::<Vec<_>>()
                .join(", "),
            value: value.to_string(),
        }
    }
}

impl<E: Token> WireValue for Choice<E> {
    fn wire(&self) -> Option<String> {
        self.value.map(|t| t.token().to_string())
    }
}

// ============================================================================
// BOOLEAN
// ============================================================================

/// Boolean attribute, written as lowercase `true` / `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: &'static str,
    value: Option<bool>,
}

impl Flag {
    pub const fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn set(&mut self, value: impl Into<Option<bool>>) {
        self.value = value.into();
    }

    /// Untyped assignment; see [`AttrValue::as_flag`].
    pub fn assign(&mut self, value: AttrValue) -> Result<(), ValidationError> {
        self.value = value.as_flag(self.name)?;
        Ok(())
    }

    pub fn get(&self) -> Option<bool> {
        self.value
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl WireValue for Flag {
    fn wire(&self) -> Option<String> {
        self.value
            .map(|b| if b { "true" } else { "false" }.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Side {
        Top,
        Bottom,
    }

    impl Token for Side {
        const ALL: &'static [Self] = &[Side::Top, Side::Bottom];

        fn token(self) -> &'static str {
            match self {
                Side::Top => "top",
                Side::Bottom => "bottom",
            }
        }
    }

    #[test]
    fn test_ranged_accepts_bounds() {
        let mut r = Ranged::new("x", 0, 576);
        assert!(r.set(0).is_ok());
        assert_eq!(r.get(), Some(0));
        assert!(r.set(576).is_ok());
        assert_eq!(r.get(), Some(576));
    }

    #[test]
    fn test_ranged_rejects_outside_and_keeps_prior() {
        let mut r = Ranged::new("x", 0, 576);
        r.set(10).unwrap();

        let err = r.set(-1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "x",
                min: 0,
                max: 576,
                value: -1
            }
        );
        assert!(r.set(577).is_err());
        assert_eq!(r.get(), Some(10));
    }

    #[test]
    fn test_ranged_coerces_numeric_strings() {
        let mut r = Ranged::new("line", 0, 255);
        r.set("12").unwrap();
        assert_eq!(r.get(), Some(12));
        r.set(" 7 ").unwrap();
        assert_eq!(r.get(), Some(7));
    }

    #[test]
    fn test_ranged_non_numeric_string_fails() {
        let mut r = Ranged::new("line", 0, 255);
        r.set(3).unwrap();
        let err = r.set("three").unwrap_err();
        assert_eq!(err.field(), "line");
        assert!(matches!(err, ValidationError::NotAnInteger { .. }));
        assert_eq!(r.get(), Some(3));
    }

    #[test]
    fn test_ranged_unset_clears() {
        let mut r = Ranged::new("line", 0, 255);
        r.set(3).unwrap();
        r.set(None::<i64>).unwrap();
        assert_eq!(r.get(), None);
        assert_eq!(r.wire(), None);
    }

    #[test]
    fn test_ranged_default_is_stored_and_clearable() {
        let mut r = Ranged::with_default("width", 0, 576, 0);
        assert_eq!(r.get(), Some(0));
        assert_eq!(r.wire().as_deref(), Some("0"));
        r.clear();
        assert_eq!(r.wire(), None);
        assert_eq!(Ranged::with_default("key1", 0, 255, 300).get(), Some(255));
    }

    #[test]
    fn test_ranged_error_message_names_range() {
        let mut r = Ranged::new("width", 1, 8);
        let msg = r.set(9).unwrap_err().to_string();
        assert_eq!(msg, "\"width\" must be between 1 and 8 inclusive, got 9");
    }

    #[test]
    fn test_choice_assign_token() {
        let mut c: Choice<Side> = Choice::new("side");
        c.assign(AttrValue::from("bottom")).unwrap();
        assert_eq!(c.get(), Some(Side::Bottom));
        assert_eq!(c.wire().as_deref(), Some("bottom"));
    }

    #[test]
    fn test_choice_rejects_unknown_and_keeps_prior() {
        let mut c: Choice<Side> = Choice::new("side");
        c.set(Side::Top);
        let err = c.assign(AttrValue::from("middle")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"side\" must be one of [top, bottom], got \"middle\""
        );
        assert!(c.assign(AttrValue::Int(1)).is_err());
        assert_eq!(c.get(), Some(Side::Top));
    }

    #[test]
    fn test_flag_string_literals() {
        let mut f = Flag::new("em");
        f.assign(AttrValue::from("true")).unwrap();
        assert_eq!(f.get(), Some(true));
        f.assign(AttrValue::from("false")).unwrap();
        assert_eq!(f.get(), Some(false));
        assert_eq!(f.wire().as_deref(), Some("false"));
    }

    #[test]
    fn test_flag_rejects_other_strings() {
        let mut f = Flag::new("em");
        f.set(true);
        assert!(f.assign(AttrValue::from("True")).is_err());
        assert!(f.assign(AttrValue::from("1")).is_err());
        assert!(f.assign(AttrValue::Int(1)).is_err());
        assert_eq!(f.get(), Some(true));
    }

    #[test]
    fn test_flag_wire_lowercase() {
        let mut f = Flag::new("ul");
        f.set(true);
        assert_eq!(f.wire().as_deref(), Some("true"));
        f.set(None);
        assert_eq!(f.wire(), None);
    }

    #[test]
    fn test_attr_value_from_json() {
        assert_eq!(AttrValue::from(serde_json::json!(null)), AttrValue::Unset);
        assert_eq!(AttrValue::from(serde_json::json!(4)), AttrValue::Int(4));
        assert_eq!(AttrValue::from(serde_json::json!(4.0)), AttrValue::Int(4));
        assert_eq!(
            AttrValue::from(serde_json::json!(4.5)),
            AttrValue::Str("4.5".to_string())
        );
        assert_eq!(
            AttrValue::from(serde_json::json!("true")),
            AttrValue::Str("true".to_string())
        );
    }
}
