//! Registration credential format checks
//!
//! Opaque predicates: callers only learn whether the input is acceptable,
//! never why.

use once_cell::sync::Lazy;
use regex::Regex;

static GOV_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GOV\d{6}$").expect("gov id pattern"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Government ids look like `GOV123456`.
pub fn validate_gov_id(input: &str) -> bool {
    GOV_ID_PATTERN.is_match(input)
}

/// Shape check only; deliverability is out of scope.
pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}
