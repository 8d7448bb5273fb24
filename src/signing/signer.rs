use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::signing::encode::{canonical_query_string, special_url_encode};
use crate::signing::params::ParameterSet;

/// Query parameter carrying the computed signature.
pub const SIGNATURE: &str = "Signature";

/// The only method the POP endpoints are called with.
pub const HTTP_METHOD: &str = "GET";

/// Resource path covered by the signature.
pub const RESOURCE_PATH: &str = "/";

/// Build the string-to-sign: `METHOD&%2F&<encoded canonical query>`.
pub fn string_to_sign(method: &str, canonical_query: &str) -> String {
    format!(
        "{method}&{}&{}",
        special_url_encode(RESOURCE_PATH),
        special_url_encode(canonical_query)
    )
}

/// HMAC-SHA1 over `string_to_sign`, keyed by `<secret>&`, base64 then POP-encoded.
///
/// The result can be placed into a query string as-is.
pub fn sign(secret: &str, string_to_sign: &str) -> String {
    let key = format!("{secret}&");
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("invalid key length");
    mac.update(string_to_sign.as_bytes());

    let digest = BASE64_STANDARD.encode(mac.finalize().into_bytes());
    special_url_encode(&digest)
}

/// Sign `params` and return the full outgoing query: `Signature=<sig>&<canonical query>`.
pub fn signed_query(secret: &str, params: &ParameterSet) -> String {
    let canonical = canonical_query_string(params);
    let to_sign = string_to_sign(HTTP_METHOD, &canonical);
    log::trace!("string to sign: {to_sign}");

    let signature = sign(secret, &to_sign);
    format!("{SIGNATURE}={signature}&{canonical}")
}
