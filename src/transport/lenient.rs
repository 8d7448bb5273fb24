use serde::Deserialize;
use serde::de::Error as DeError;

/// Text field that the service normally sends as a JSON string.
///
/// Numbers keep their raw JSON token (`134523` stays `"134523"`) and `null`
/// becomes an empty string, so a loosely typed reply still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientString(String);

impl LenientString {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for LenientString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            Some(b'n') if token == "null" => Ok(Self::default()),
            _ => Err(D::Error::custom(
                "expected text field to be JSON string, number or null",
            )),
        }
    }
}

/// Unwrap an optional lenient field into a plain string (missing => empty).
pub fn text(value: Option<LenientString>) -> String {
    value.map(LenientString::into_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        value: Option<LenientString>,
    }

    fn decode(json: &str) -> String {
        let probe: Probe = serde_json::from_str(json).unwrap();
        text(probe.value)
    }

    #[test]
    fn accepts_string_number_null_and_missing() {
        assert_eq!(decode(r#"{"value":"abc"}"#), "abc");
        assert_eq!(decode(r#"{"value":134523}"#), "134523");
        assert_eq!(decode(r#"{"value":null}"#), "");
        assert_eq!(decode("{}"), "");
    }

    #[test]
    fn rejects_objects() {
        assert!(serde_json::from_str::<Probe>(r#"{"value":{"a":1}}"#).is_err());
    }
}
