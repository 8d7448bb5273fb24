use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Aliyun `AccessKeyId`.
///
/// Invariant: non-empty after trimming.
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Query field name (`AccessKeyId`).
    pub const FIELD: &'static str = "AccessKeyId";

    /// Create a validated [`AccessKeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Aliyun access key secret, used only as HMAC key material.
///
/// Invariant: must not be empty (whitespace is preserved). Never printed by `Debug`.
pub struct AccessKeySecret(String);

impl AccessKeySecret {
    pub const FIELD: &'static str = "AccessKeySecret";

    /// Create a validated [`AccessKeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKeySecret(***)")
    }
}

/// Format `time` as the `Timestamp` parameter: `YYYY-MM-DDThh:mm:ssZ` in UTC.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Join phone numbers into the comma-delimited `PhoneNumbers` value.
pub fn join_phone_numbers<S: AsRef<str>>(numbers: &[S]) -> String {
    numbers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn access_key_id_is_trimmed() {
        let id = AccessKeyId::new("  LTAI123 ").unwrap();
        assert_eq!(id.as_str(), "LTAI123");
    }

    #[test]
    fn access_key_secret_is_redacted_in_debug() {
        let secret = AccessKeySecret::new("very-secret").unwrap();
        assert_eq!(format!("{secret:?}"), "AccessKeySecret(***)");
        assert_eq!(secret.expose(), "very-secret");
    }

    #[test]
    fn timestamp_is_zero_padded_utc_without_fraction() {
        let time = Utc
            .with_ymd_and_hms(2017, 1, 2, 3, 4, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(789))
            .unwrap();
        assert_eq!(format_timestamp(time), "2017-01-02T03:04:05Z");
    }

    #[test]
    fn timestamp_converts_offsets_to_utc() {
        let beijing = chrono::FixedOffset::east_opt(8 * 3600).unwrap();
        let local = beijing.with_ymd_and_hms(2017, 7, 12, 10, 42, 19).unwrap();
        assert_eq!(
            format_timestamp(local.with_timezone(&Utc)),
            "2017-07-12T02:42:19Z"
        );
    }

    #[test]
    fn phone_numbers_are_comma_joined() {
        assert_eq!(
            join_phone_numbers(&["13800138000", "13900139000"]),
            "13800138000,13900139000"
        );
        assert_eq!(join_phone_numbers(&["13800138000"]), "13800138000");
        assert_eq!(join_phone_numbers::<&str>(&[]), "");
    }
}
