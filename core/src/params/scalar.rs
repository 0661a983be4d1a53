//! # Scalar Canonicalization
//!
//! Every scalar enters the codec as a string. Client encode and server decode
//! share these impls, so both sides agree on the canonical text.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use uuid::Uuid;

/// A value with a fixed canonical string form.
pub trait ToParam {
    /// Canonical text.
    fn to_param(&self) -> String;
}

/// A value that parses back from its canonical string form.
pub trait FromParam: Sized {
    /// Parses canonical text. The error is a human readable reason.
    fn from_param(raw: &str) -> Result<Self, String>;
}

impl ToParam for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ToParam for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl FromParam for String {
    fn from_param(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

impl ToParam for bool {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl FromParam for bool {
    fn from_param(raw: &str) -> Result<Self, String> {
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err("expected 'true' or 'false'".to_string()),
        }
    }
}

impl ToParam for char {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl FromParam for char {
    fn from_param(raw: &str) -> Result<Self, String> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err("expected exactly one character".to_string()),
        }
    }
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl ToParam for $ty {
                fn to_param(&self) -> String {
                    self.to_string()
                }
            }

            impl FromParam for $ty {
                fn from_param(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>()
                        .map_err(|e| format!("expected {}: {}", $what, e))
                }
            }
        )*
    };
}

impl_numeric_scalar!(
    i8 => "an integer",
    i16 => "an integer",
    i32 => "an integer",
    i64 => "an integer",
    i128 => "an integer",
    isize => "an integer",
    u8 => "a non-negative integer",
    u16 => "a non-negative integer",
    u32 => "a non-negative integer",
    u64 => "a non-negative integer",
    u128 => "a non-negative integer",
    usize => "a non-negative integer",
    f32 => "a number",
    f64 => "a number",
);

impl ToParam for NaiveDate {
    fn to_param(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl FromParam for NaiveDate {
    fn from_param(raw: &str) -> Result<Self, String> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| format!("expected a full-date (YYYY-MM-DD): {}", e))
    }
}

impl ToParam for DateTime<Utc> {
    fn to_param(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl FromParam for DateTime<Utc> {
    fn from_param(raw: &str) -> Result<Self, String> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("expected an RFC 3339 date-time: {}", e))
    }
}

impl ToParam for Uuid {
    fn to_param(&self) -> String {
        self.hyphenated().to_string()
    }
}

impl FromParam for Uuid {
    fn from_param(raw: &str) -> Result<Self, String> {
        Uuid::parse_str(raw).map_err(|e| format!("expected a UUID: {}", e))
    }
}
