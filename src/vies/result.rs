//! Build a [`ValidationResult`] from a non-fault response.

use serde_json::Value;

use super::response::ResponseData;
use crate::core::{ValidationResult, VatNumber, ViesError};

/// Wire field name followed by the accepted alias.
const COUNTRY_CODE: [&str; 2] = ["countryCode", "country_code"];
const VAT_NUMBER: [&str; 2] = ["vatNumber", "vat_number"];
const REQUEST_DATE: [&str; 2] = ["requestDate", "request_date"];
const VALID: [&str; 1] = ["valid"];
const NAME: [&str; 1] = ["name"];
const ADDRESS: [&str; 1] = ["address"];

/// Convert a success response into a [`ValidationResult`].
///
/// All six attributes are required; the first one missing (in wire order)
/// is reported as [`ViesError::AttributeNotFound`]. camelCase keys win over
/// their snake_case aliases. `valid` is only `true` for a JSON `true`.
///
/// `requested` is the number that was sent; the result carries the number
/// VIES echoed back.
pub fn build_result(data: &ResponseData, requested: &VatNumber) -> Result<ValidationResult, ViesError> {
    let country_code = text(required(data, &COUNTRY_CODE)?);
    let vat_number = text(required(data, &VAT_NUMBER)?);
    let request_date = text(required(data, &REQUEST_DATE)?);
    let is_valid = matches!(required(data, &VALID)?, Value::Bool(true));
    let name = optional_text(required(data, &NAME)?);
    let address = optional_text(required(data, &ADDRESS)?);

    let vat_number = VatNumber::new(country_code, vat_number);
    if &vat_number != requested {
        tracing::debug!(%requested, echoed = %vat_number, "VIES echoed a different VAT number");
    }

    Ok(ValidationResult {
        vat_number,
        request_date,
        is_valid,
        name,
        address,
    })
}

fn required<'a>(data: &'a ResponseData, keys: &[&'static str]) -> Result<&'a Value, ViesError> {
    data.get_any(keys)
        .ok_or(ViesError::AttributeNotFound { field: keys[0] })
}

fn text(value: &Value) -> String {
    optional_text(value).unwrap_or_default()
}

fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de() -> VatNumber {
        VatNumber::new("DE", "12312312")
    }

    fn build(body: &str) -> Result<ValidationResult, ViesError> {
        build_result(&ResponseData::from_body(body), &de())
    }

    fn missing_field(body: &str) -> &'static str {
        match build(body) {
            Err(ViesError::AttributeNotFound { field }) => field,
            other => panic!("expected AttributeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn camel_case_success() {
        let r = build(
            r#"{"countryCode":"DE","vatNumber":"12312312","requestDate":"2023-11-11 23:23:23","valid":true,"name":"foo","address":"bar"}"#,
        )
        .unwrap();
        assert_eq!(
            r,
            ValidationResult {
                vat_number: de(),
                request_date: "2023-11-11 23:23:23".into(),
                is_valid: true,
                name: Some("foo".into()),
                address: Some("bar".into()),
            }
        );
    }

    #[test]
    fn snake_case_success() {
        let r = build(
            r#"{"country_code":"DE","vat_number":"12312312","request_date":"2023-11-11","valid":false,"name":"foo","address":"bar"}"#,
        )
        .unwrap();
        assert_eq!(r.vat_number, de());
        assert_eq!(r.request_date, "2023-11-11");
        assert!(!r.is_valid);
    }

    #[test]
    fn camel_case_preferred_over_snake_case() {
        let r = build(
            r#"{"countryCode":"DE","country_code":"AT","vatNumber":"1","vat_number":"2","requestDate":"a","request_date":"b","valid":true,"name":"","address":""}"#,
        )
        .unwrap();
        assert_eq!(r.vat_number, VatNumber::new("DE", "1"));
        assert_eq!(r.request_date, "a");
    }

    #[test]
    fn empty_strings_pass_through() {
        let r = build(
            r#"{"countryCode":"","vatNumber":"","requestDate":"","valid":true,"name":"","address":""}"#,
        )
        .unwrap();
        assert_eq!(r.vat_number, VatNumber::new("", ""));
        assert_eq!(r.name.as_deref(), Some(""));
        assert_eq!(r.address.as_deref(), Some(""));
    }

    #[test]
    fn null_name_and_address_are_none() {
        let r = build(
            r#"{"countryCode":"DE","vatNumber":"12312312","requestDate":"d","valid":false,"name":null,"address":null}"#,
        )
        .unwrap();
        assert!(r.name.is_none());
        assert!(r.address.is_none());
    }

    #[test]
    fn non_bool_valid_is_false() {
        for valid in ["1", "\"true\"", "null", "{}", "[true]"] {
            let body = format!(
                r#"{{"countryCode":"DE","vatNumber":"1","requestDate":"d","valid":{valid},"name":"n","address":"a"}}"#
            );
            assert!(!build(&body).unwrap().is_valid, "valid={valid}");
        }
    }

    #[test]
    fn each_missing_field_is_reported() {
        let full = [
            ("countryCode", "\"DE\""),
            ("vatNumber", "\"1\""),
            ("requestDate", "\"d\""),
            ("valid", "true"),
            ("name", "\"n\""),
            ("address", "\"a\""),
        ];
        for (skip, _) in full {
            let body = full
                .iter()
                .filter(|(k, _)| *k != skip)
                .map(|(k, v)| format!("\"{k}\":{v}"))
                .collect::<Vec<_>>()
                .join(",");
            assert_eq!(missing_field(&format!("{{{body}}}")), skip);
        }
    }

    #[test]
    fn empty_object_reports_country_code_first() {
        assert_eq!(missing_field("{}"), "countryCode");
        assert_eq!(missing_field("[1,2]"), "countryCode");
    }

    #[test]
    fn numeric_vat_number_keeps_digits() {
        let r = build(
            r#"{"countryCode":"DE","vatNumber":12312312,"requestDate":"d","valid":true,"name":"n","address":"a"}"#,
        )
        .unwrap();
        assert_eq!(r.vat_number, de());
    }
}
