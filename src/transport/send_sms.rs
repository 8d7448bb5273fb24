use serde::Deserialize;

use super::TransportError;
use super::lenient::{LenientString, text};
use crate::domain::{SendSms, SendSmsResponse};
use crate::signing::ParameterSet;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendSmsJsonResponse {
    #[serde(default)]
    request_id: Option<LenientString>,
    #[serde(default)]
    code: Option<LenientString>,
    #[serde(default)]
    message: Option<LenientString>,
    #[serde(default)]
    biz_id: Option<LenientString>,
}

/// Write the required business fields; they overwrite any earlier value.
pub fn encode_send_sms_params(request: &SendSms, params: &mut ParameterSet) {
    params.set(SendSms::PHONE_NUMBERS_FIELD, request.joined_phone_numbers());
    params.set(SendSms::SIGN_NAME_FIELD, request.sign_name());
    params.set(SendSms::TEMPLATE_CODE_FIELD, request.template_code());
    params.set(SendSms::TEMPLATE_PARAM_FIELD, request.template_param());
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    Ok(SendSmsResponse {
        request_id: text(parsed.request_id),
        code: text(parsed.code),
        message: text(parsed.message),
        biz_id: text(parsed.biz_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_required_fields() {
        let request = SendSms::new(
            ["13800138000", "13900139000"],
            "阿里云短信测试专用",
            "SMS_71390007",
            r#"{"code":"1234"}"#,
        );
        let mut params = ParameterSet::new();
        encode_send_sms_params(&request, &mut params);

        assert_eq!(
            params.snapshot(),
            vec![
                ("PhoneNumbers".to_owned(), "13800138000,13900139000".to_owned()),
                ("SignName".to_owned(), "阿里云短信测试专用".to_owned()),
                ("TemplateCode".to_owned(), "SMS_71390007".to_owned()),
                ("TemplateParam".to_owned(), r#"{"code":"1234"}"#.to_owned()),
            ]
        );
    }

    #[test]
    fn encode_overwrites_previous_values() {
        let request = SendSms::new(["13800138000"], "sign", "SMS_1", "{}");
        let mut params = ParameterSet::new();
        params.set("TemplateCode", "SMS_stray");
        encode_send_sms_params(&request, &mut params);

        assert_eq!(params.get("TemplateCode"), Some("SMS_1"));
    }

    #[test]
    fn decode_ok_response() {
        let json = r#"
        {
          "RequestId": "8906582E-6722",
          "Code": "OK",
          "Message": "OK",
          "BizId": "134523^4351232"
        }
        "#;

        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(
            resp,
            SendSmsResponse {
                request_id: "8906582E-6722".to_owned(),
                code: "OK".to_owned(),
                message: "OK".to_owned(),
                biz_id: "134523^4351232".to_owned(),
            }
        );
    }

    #[test]
    fn decode_tolerates_missing_and_unknown_fields() {
        let json = r#"
        {
          "RequestId": "ABC",
          "Code": "SignatureDoesNotMatch",
          "Recommend": "https://error-center.aliyun.com/"
        }
        "#;

        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(resp.code, "SignatureDoesNotMatch");
        assert_eq!(resp.message, "");
        assert_eq!(resp.biz_id, "");
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = decode_send_sms_json_response("<Error/>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
