/// `Code` value reported for an accepted request.
pub const OK_CODE: &str = "OK";

/// Whether a response `Code` means success (`OK`, compared case-insensitively).
pub fn is_success_code(code: &str) -> bool {
    code.eq_ignore_ascii_case(OK_CODE)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// e.g. `8906582E-6722`.
    pub request_id: String,
    /// e.g. `OK`, `SignatureDoesNotMatch`.
    pub code: String,
    pub message: String,
    /// Business id, usable to query delivery status, e.g. `134523^4351232`.
    pub biz_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleCallResponse {
    pub request_id: String,
    pub code: String,
    pub message: String,
    /// Id of the placed call.
    pub call_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded reply of a transported call.
///
/// `success == false` is a business failure (bad signature, unknown template,
/// ...), not an error: `response` still carries the diagnostic fields.
pub struct Outcome<T> {
    pub success: bool,
    pub response: T,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_response(self) -> T {
        self.response
    }
}
