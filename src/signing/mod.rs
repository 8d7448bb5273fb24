//! POP request signing: parameter store, canonical query encoding and HMAC-SHA1 signatures.
//!
//! Everything here is a pure function of its inputs, so a signature computed
//! locally can be compared byte-for-byte with what the service recomputes.
//!
//! ```rust
//! use aliyun_sms::signing::{ParameterSet, signed_query};
//!
//! let mut params = ParameterSet::new();
//! params.set("AccessKeyId", "id1");
//! params.set("Action", "SendSms");
//! let query = signed_query("secret", &params);
//! assert!(query.starts_with("Signature="));
//! ```

mod encode;
mod params;
mod signer;

pub use encode::{canonical_query_string, special_url_encode};
pub use params::ParameterSet;
pub use signer::{HTTP_METHOD, RESOURCE_PATH, SIGNATURE, sign, signed_query, string_to_sign};
