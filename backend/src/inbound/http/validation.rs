//! Shared validation helpers for inbound HTTP adapters.
//!
//! Numeric fields are checked here so the estimate calculator can assume
//! finite, range-checked inputs. Errors carry `{field, code}` details for
//! inline display next to the offending form field.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    NotFinite,
    Negative,
    OutOfRange,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::NotFinite => "not_finite",
            Self::Negative => "negative",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Require a finite, non-negative number.
pub(crate) fn require_non_negative(field: FieldName, value: f64) -> Result<f64, Error> {
    if !value.is_finite() {
        return Err(field_error(
            field,
            format!("{} must be a finite number", field.as_str()),
            ErrorCode::NotFinite,
        ));
    }
    if value < 0.0 {
        return Err(field_error(
            field,
            format!("{} must not be negative", field.as_str()),
            ErrorCode::Negative,
        ));
    }
    Ok(value)
}

/// Require an integer within an inclusive range.
pub(crate) fn require_in_range(
    field: FieldName,
    value: i32,
    range: std::ops::RangeInclusive<i32>,
) -> Result<i32, Error> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(field_error(
            field,
            format!(
                "{} must be between {} and {}",
                field.as_str(),
                range.start(),
                range.end()
            ),
            ErrorCode::OutOfRange,
        ))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn detail_code(err: &Error) -> String {
        err.details
            .as_ref()
            .and_then(|d| d.get("code"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    #[rstest]
    #[case(f64::NAN, "not_finite")]
    #[case(f64::INFINITY, "not_finite")]
    #[case(-1.0, "negative")]
    fn non_negative_rejects(#[case] value: f64, #[case] code: &str) {
        let err = require_non_negative(FieldName::new("squareFootage"), value)
            .expect_err("invalid value");
        assert_eq!(detail_code(&err), code);
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(
            require_non_negative(FieldName::new("lotSize"), 0.0).expect("zero is valid"),
            0.0
        );
    }

    #[test]
    fn range_check_includes_bounds() {
        let field = FieldName::new("yearBuilt");
        assert!(require_in_range(field, 1800, 1800..=2100).is_ok());
        assert!(require_in_range(field, 2100, 1800..=2100).is_ok());
        let err = require_in_range(field, 1799, 1800..=2100).expect_err("below range");
        assert_eq!(detail_code(&err), "out_of_range");
    }
}
