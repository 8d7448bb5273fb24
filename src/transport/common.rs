use crate::domain::{API_VERSION, AccessKeyId, DEFAULT_REGION_ID, Param};
use crate::signing::ParameterSet;

pub const FORMAT: &str = "Format";
pub const FORMAT_JSON: &str = "JSON";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE_METHOD_HMAC_SHA1: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE_VERSION_1_0: &str = "1.0";
pub const SIGNATURE_NONCE: &str = "SignatureNonce";
pub const ACTION: &str = "Action";
pub const VERSION: &str = "Version";
pub const REGION_ID: &str = "RegionId";

/// Fresh, call-local parameter set holding the credential and every default.
pub fn seed_common_params(
    access_key_id: &AccessKeyId,
    timestamp: String,
    nonce: String,
    action: &str,
) -> ParameterSet {
    let mut params = ParameterSet::new();
    params.set(AccessKeyId::FIELD, access_key_id.as_str());

    params.set(TIMESTAMP, timestamp);
    params.set(FORMAT, FORMAT_JSON);
    params.set(SIGNATURE_METHOD, SIGNATURE_METHOD_HMAC_SHA1);
    params.set(SIGNATURE_VERSION, SIGNATURE_VERSION_1_0);
    params.set(SIGNATURE_NONCE, nonce);

    params.set(ACTION, action);
    params.set(VERSION, API_VERSION);
    params.set(REGION_ID, DEFAULT_REGION_ID);
    params
}

/// Apply caller overrides in order; later entries win.
pub fn apply_overrides(params: &mut ParameterSet, overrides: &[Param]) {
    for param in overrides {
        params.set(param.key(), param.value());
    }
}
