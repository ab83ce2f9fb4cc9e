//! Sensitive-data categories recognised by the masking pipeline.

use std::fmt;

use serde::Serialize;

use crate::pipeline::builtin_matchers;

/// One kind of sensitive data the pipeline recognises and masks.
///
/// Every category except [`Category::Custom`] has exactly one built-in
/// matcher. `Custom` stands for a caller-supplied pattern and has no built-in
/// rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 12-digit national identity number (Aadhaar).
    NationalId,
    /// 10-digit mobile number starting with 6, 7, 8 or 9.
    Mobile,
    /// Permanent Account Number (`AAAPA1234A` shape).
    PermanentAccountNumber,
    /// `DD/MM/YYYY` or `YYYY/MM/DD`, `/` or `-` separated.
    DateOfBirth,
    /// 6-digit postal (PIN) code.
    PostalCode,
    /// Passport number: one letter followed by seven digits.
    PassportNumber,
    /// `DDD-DD-DDDD` tax or social security number.
    TaxId,
    /// 16-digit payment card, optionally dash separated.
    PaymentCard,
    /// Driver's license: uppercase letter followed by seven digits.
    DriversLicense,
    /// 9 to 18 digit bank account number.
    BankAccount,
    /// International Bank Account Number.
    Iban,
    /// Health insurance number: uppercase letter followed by nine digits.
    HealthInsuranceId,
    /// Employee identifier: 2-4 uppercase letters followed by 3-5 digits.
    EmployeeId,
    Email,
    IpAddress,
    UrlQueryParam,
    MacAddress,
    /// Time of day in an ISO-8601 timestamp (`T12:34:56`).
    Timestamp,
    GeoCoordinate,
    Username,
    SocialHandle,
    FilePath,
    /// Caller-supplied pattern.
    Custom,
}

impl Category {
    /// Returns the stable snake_case name used in logs and serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::Mobile => "mobile",
            Self::PermanentAccountNumber => "permanent_account_number",
            Self::DateOfBirth => "date_of_birth",
            Self::PostalCode => "postal_code",
            Self::PassportNumber => "passport_number",
            Self::TaxId => "tax_id",
            Self::PaymentCard => "payment_card",
            Self::DriversLicense => "drivers_license",
            Self::BankAccount => "bank_account",
            Self::Iban => "iban",
            Self::HealthInsuranceId => "health_insurance_id",
            Self::EmployeeId => "employee_id",
            Self::Email => "email",
            Self::IpAddress => "ip_address",
            Self::UrlQueryParam => "url_query_param",
            Self::MacAddress => "mac_address",
            Self::Timestamp => "timestamp",
            Self::GeoCoordinate => "geo_coordinate",
            Self::Username => "username",
            Self::SocialHandle => "social_handle",
            Self::FilePath => "file_path",
            Self::Custom => "custom",
        }
    }

    /// Runs only this category's built-in matcher over `text`.
    ///
    /// [`Category::Custom`] has no built-in matcher and returns `text`
    /// unchanged.
    ///
    /// ```rust
    /// use logmask::Category;
    ///
    /// assert_eq!(Category::TaxId.mask("ssn 123-45-6789"), "ssn XXX-XX-XXXX");
    /// ```
    #[must_use]
    pub fn mask(self, text: &str) -> String {
        builtin_matchers()
            .iter()
            .find(|matcher| matcher.category() == self)
            .map_or_else(|| text.to_string(), |matcher| matcher.mask(text))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
