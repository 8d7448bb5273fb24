use chrono::{DateTime, Utc};

use crate::domain::value::format_timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-call override of a common request parameter.
///
/// Overrides are applied in the order given, after the defaults and before the
/// operation's required fields, so a later override for the same key wins but
/// can never replace a required business field. `Format` and `AccessKeyId`
/// are not overridable.
pub enum Param {
    /// `Timestamp`, defaults to the current time.
    Timestamp(DateTime<Utc>),
    /// `SignatureMethod`, defaults to `HMAC-SHA1`.
    SignatureMethod(String),
    /// `SignatureVersion`, defaults to `1.0`.
    SignatureVersion(String),
    /// `SignatureNonce`, defaults to a freshly generated UUID.
    SignatureNonce(String),
    /// `Action`, defaults to the operation name (`SendSms`, `SingleCallByTts`).
    Action(String),
    /// `Version`, defaults to `2017-05-25`.
    Version(String),
    /// `RegionId`, defaults to `cn-hangzhou`.
    RegionId(String),
    /// `OutId`, an opaque caller reference echoed back in delivery reports.
    OutId(String),
}

impl Param {
    pub fn timestamp(time: DateTime<Utc>) -> Self {
        Self::Timestamp(time)
    }

    pub fn signature_method(value: impl Into<String>) -> Self {
        Self::SignatureMethod(value.into())
    }

    pub fn signature_version(value: impl Into<String>) -> Self {
        Self::SignatureVersion(value.into())
    }

    pub fn signature_nonce(value: impl Into<String>) -> Self {
        Self::SignatureNonce(value.into())
    }

    pub fn action(value: impl Into<String>) -> Self {
        Self::Action(value.into())
    }

    pub fn version(value: impl Into<String>) -> Self {
        Self::Version(value.into())
    }

    pub fn region_id(value: impl Into<String>) -> Self {
        Self::RegionId(value.into())
    }

    pub fn out_id(value: impl Into<String>) -> Self {
        Self::OutId(value.into())
    }

    /// Query field name this override writes.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Timestamp(_) => "Timestamp",
            Self::SignatureMethod(_) => "SignatureMethod",
            Self::SignatureVersion(_) => "SignatureVersion",
            Self::SignatureNonce(_) => "SignatureNonce",
            Self::Action(_) => "Action",
            Self::Version(_) => "Version",
            Self::RegionId(_) => "RegionId",
            Self::OutId(_) => "OutId",
        }
    }

    /// Wire value this override writes.
    pub fn value(&self) -> String {
        match self {
            Self::Timestamp(time) => format_timestamp(*time),
            Self::SignatureMethod(v)
            | Self::SignatureVersion(v)
            | Self::SignatureNonce(v)
            | Self::Action(v)
            | Self::Version(v)
            | Self::RegionId(v)
            | Self::OutId(v) => v.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_param_uses_wire_format() {
        let time = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let param = Param::timestamp(time);
        assert_eq!(param.key(), "Timestamp");
        assert_eq!(param.value(), "2017-01-01T00:00:00Z");
    }

    #[test]
    fn string_params_map_to_protocol_fields() {
        let cases = [
            (Param::signature_method("HMAC-SHA1"), "SignatureMethod"),
            (Param::signature_version("1.0"), "SignatureVersion"),
            (Param::signature_nonce("abc"), "SignatureNonce"),
            (Param::action("SendSms"), "Action"),
            (Param::version("2017-05-25"), "Version"),
            (Param::region_id("cn-beijing"), "RegionId"),
            (Param::out_id("order-1"), "OutId"),
        ];
        for (param, key) in cases {
            assert_eq!(param.key(), key);
        }
        assert_eq!(Param::region_id("cn-beijing").value(), "cn-beijing");
    }
}
