use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A VAT number as submitted to VIES.
///
/// Neither part is validated here; VIES itself reports malformed input
/// through the `INVALID_INPUT` fault.
///
/// The serialized form is the VIES request body:
///
/// ```
/// use vies_rest::VatNumber;
///
/// let vat = VatNumber::new("DE", "123456789");
/// let json = serde_json::to_string(&vat).unwrap();
/// assert_eq!(json, r#"{"countryCode":"DE","vatNumber":"123456789"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatNumber {
    /// ISO 3166-1 alpha-2 country code (VIES uses "EL" for Greece, "XI" for Northern Ireland).
    country_code: String,
    /// Number part without the country prefix.
    vat_number: String,
}

impl VatNumber {
    pub fn new(country_code: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            vat_number: vat_number.into(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn vat_number(&self) -> &str {
        &self.vat_number
    }
}

impl std::fmt::Display for VatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.country_code, self.vat_number)
    }
}

/// Result of a successful VIES check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The VAT number as echoed back by VIES.
    pub vat_number: VatNumber,
    /// Request date as returned by VIES (date or timestamp, unparsed).
    pub request_date: String,
    /// Whether the VAT number is currently valid.
    pub is_valid: bool,
    /// Registered name, `None` if VIES sent `null`.
    pub name: Option<String>,
    /// Registered address, `None` if VIES sent `null`.
    pub address: Option<String>,
}

impl ValidationResult {
    /// Calendar day of the request, taken from the leading `YYYY-MM-DD`
    /// of [`request_date`](Self::request_date).
    ///
    /// ```
    /// use vies_rest::{ValidationResult, VatNumber};
    ///
    /// let result = ValidationResult {
    ///     vat_number: VatNumber::new("DE", "12312312"),
    ///     request_date: "2023-11-11T23:23:23.000Z".into(),
    ///     is_valid: true,
    ///     name: None,
    ///     address: None,
    /// };
    /// assert_eq!(
    ///     result.request_day(),
    ///     chrono::NaiveDate::from_ymd_opt(2023, 11, 11)
    /// );
    /// ```
    pub fn request_day(&self) -> Option<NaiveDate> {
        let day = self.request_date.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}
