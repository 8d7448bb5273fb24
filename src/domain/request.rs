use crate::domain::value::join_phone_numbers;

/// `Version` shared by the SMS and voice APIs.
pub const API_VERSION: &str = "2017-05-25";

/// Default `RegionId`.
pub const DEFAULT_REGION_ID: &str = "cn-hangzhou";

#[derive(Debug, Clone, PartialEq, Eq)]
/// `SendSms`: send a template SMS to one or more phone numbers.
///
/// Business fields are not validated locally; the service rejects bad values
/// with a non-`OK` code.
pub struct SendSms {
    phone_numbers: Vec<String>,
    sign_name: String,
    template_code: String,
    template_param: String,
}

impl SendSms {
    pub const ACTION: &'static str = "SendSms";

    pub const PHONE_NUMBERS_FIELD: &'static str = "PhoneNumbers";
    pub const SIGN_NAME_FIELD: &'static str = "SignName";
    pub const TEMPLATE_CODE_FIELD: &'static str = "TemplateCode";
    pub const TEMPLATE_PARAM_FIELD: &'static str = "TemplateParam";

    /// `template_param` is the JSON object used to render the template,
    /// e.g. `{"code":"1234"}`.
    pub fn new<I, S>(
        phone_numbers: I,
        sign_name: impl Into<String>,
        template_code: impl Into<String>,
        template_param: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phone_numbers: phone_numbers.into_iter().map(Into::into).collect(),
            sign_name: sign_name.into(),
            template_code: template_code.into(),
            template_param: template_param.into(),
        }
    }

    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    /// Comma-joined `PhoneNumbers` wire value.
    pub fn joined_phone_numbers(&self) -> String {
        join_phone_numbers(&self.phone_numbers)
    }

    pub fn sign_name(&self) -> &str {
        &self.sign_name
    }

    pub fn template_code(&self) -> &str {
        &self.template_code
    }

    pub fn template_param(&self) -> &str {
        &self.template_param
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `SingleCallByTts`: place a text-to-speech voice call to one number.
pub struct SingleCallByTts {
    called_show_number: String,
    called_number: String,
    tts_code: String,
    tts_param: String,
}

impl SingleCallByTts {
    pub const ACTION: &'static str = "SingleCallByTts";

    pub const CALLED_SHOW_NUMBER_FIELD: &'static str = "CalledShowNumber";
    pub const CALLED_NUMBER_FIELD: &'static str = "CalledNumber";
    pub const TTS_CODE_FIELD: &'static str = "TtsCode";
    pub const TTS_PARAM_FIELD: &'static str = "TtsParam";

    /// `called_show_number` is the caller id shown to the callee; it must be
    /// registered with the account.
    pub fn new(
        called_show_number: impl Into<String>,
        called_number: impl Into<String>,
        tts_code: impl Into<String>,
        tts_param: impl Into<String>,
    ) -> Self {
        Self {
            called_show_number: called_show_number.into(),
            called_number: called_number.into(),
            tts_code: tts_code.into(),
            tts_param: tts_param.into(),
        }
    }

    pub fn called_show_number(&self) -> &str {
        &self.called_show_number
    }

    pub fn called_number(&self) -> &str {
        &self.called_number
    }

    pub fn tts_code(&self) -> &str {
        &self.tts_code
    }

    pub fn tts_param(&self) -> &str {
        &self.tts_param
    }
}
