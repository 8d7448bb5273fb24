//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod common;
mod lenient;
mod send_sms;
mod single_call;

pub use common::{apply_overrides, seed_common_params};
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_params};
pub use single_call::{decode_single_call_json_response, encode_single_call_params};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
