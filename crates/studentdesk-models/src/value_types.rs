//! Validated domain primitives.
//!
//! # Example
//!
//! ```ignore
//! use studentdesk_models::value_types::EnrollmentNumber;
//!
//! let num: EnrollmentNumber = "EN0001234".parse().unwrap();
//! assert_eq!(num.as_str(), "EN0001234");
//! assert!("en0001234".parse::<EnrollmentNumber>().is_err());
//! ```

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static ENROLLMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{7}$").expect("valid enrollment regex"));

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    InvalidEnrollmentNumber(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnrollmentNumber(msg) => write!(f, "Invalid enrollment number: {}", msg),
        }
    }
}

/// Two upper-case letters followed by seven digits, e.g. `EN0001234`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnrollmentNumber(String);

impl EnrollmentNumber {
    /// Prefix used for generated numbers.
    pub const PREFIX: &'static str = "EN";

    pub fn new(value: impl Into<String>) -> Result<Self, ValueTypeError> {
        let value = value.into();
        if !Self::is_valid_format(&value) {
            return Err(ValueTypeError::InvalidEnrollmentNumber(format!(
                "'{}' must be 2 uppercase letters followed by 7 digits",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn is_valid_format(value: &str) -> bool {
        ENROLLMENT_PATTERN.is_match(value)
    }

    /// Generates `EN` followed by seven random digits.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let digits: u32 = rng.gen_range(0..10_000_000);
        Self(format!("{}{:07}", Self::PREFIX, digits))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for EnrollmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnrollmentNumber({})", self.0)
    }
}

impl fmt::Display for EnrollmentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EnrollmentNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EnrollmentNumber {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnrollmentNumber> for String {
    fn from(num: EnrollmentNumber) -> String {
        num.0
    }
}

impl PartialEq<str> for EnrollmentNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
