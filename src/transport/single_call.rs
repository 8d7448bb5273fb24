use serde::Deserialize;

use super::TransportError;
use super::lenient::{LenientString, text};
use crate::domain::{SingleCallByTts, SingleCallResponse};
use crate::signing::ParameterSet;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SingleCallJsonResponse {
    #[serde(default)]
    request_id: Option<LenientString>,
    #[serde(default)]
    code: Option<LenientString>,
    #[serde(default)]
    message: Option<LenientString>,
    #[serde(default)]
    call_id: Option<LenientString>,
}

pub fn encode_single_call_params(request: &SingleCallByTts, params: &mut ParameterSet) {
    params.set(
        SingleCallByTts::CALLED_SHOW_NUMBER_FIELD,
        request.called_show_number(),
    );
    params.set(SingleCallByTts::CALLED_NUMBER_FIELD, request.called_number());
    params.set(SingleCallByTts::TTS_CODE_FIELD, request.tts_code());
    params.set(SingleCallByTts::TTS_PARAM_FIELD, request.tts_param());
}

pub fn decode_single_call_json_response(
    json: &str,
) -> Result<SingleCallResponse, TransportError> {
    let parsed: SingleCallJsonResponse = serde_json::from_str(json)?;

    Ok(SingleCallResponse {
        request_id: text(parsed.request_id),
        code: text(parsed.code),
        message: text(parsed.message),
        call_id: text(parsed.call_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_required_fields() {
        let request = SingleCallByTts::new("057188773344", "13800138000", "TTS_10001", "{}");
        let mut params = ParameterSet::new();
        encode_single_call_params(&request, &mut params);

        assert_eq!(params.get("CalledShowNumber"), Some("057188773344"));
        assert_eq!(params.get("CalledNumber"), Some("13800138000"));
        assert_eq!(params.get("TtsCode"), Some("TTS_10001"));
        assert_eq!(params.get("TtsParam"), Some("{}"));
    }

    #[test]
    fn decode_maps_call_id() {
        let json = r#"{"RequestId":"R1","Code":"OK","Message":"OK","CallId":"116012354148^10281378"}"#;
        let resp = decode_single_call_json_response(json).unwrap();
        assert_eq!(resp.request_id, "R1");
        assert_eq!(resp.code, "OK");
        assert_eq!(resp.call_id, "116012354148^10281378");
    }

    #[test]
    fn decode_rejects_truncated_body() {
        assert!(decode_single_call_json_response(r#"{"Code":"OK""#).is_err());
    }
}
