//! Typed Rust client for the Aliyun SMS (`dysmsapi`) and voice (`dyvmsapi`) HTTP APIs.
//!
//! Requests are authenticated with POP-style signing: every parameter is
//! percent-encoded, sorted and signed with HMAC-SHA1 (see [`signing`]). The
//! crate is split into a domain layer of strong types, a signing layer, a
//! transport layer for wire-format quirks, and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use aliyun_sms::{AliyunClient, Credential, Param, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aliyun_sms::AliyunError> {
//!     let client = AliyunClient::new(Credential::new("LTAI...", "...")?);
//!     let request = SendSms::new(["13800138000"], "my_product", "SMS_0000", r#"{"code":"1234"}"#);
//!     let outcome = client.send_sms(request, &[Param::out_id("order-1")]).await?;
//!     if !outcome.success {
//!         eprintln!("rejected: {}", outcome.response.code);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod signing;
mod transport;

pub use client::{
    AliyunClient, AliyunClientBuilder, AliyunError, BoxError, Clock, Credential, NonceGenerator,
    SystemClock, UuidNonce,
};
pub use domain::{
    API_VERSION, AccessKeyId, AccessKeySecret, DEFAULT_REGION_ID, OK_CODE, Outcome, Param,
    SendSms, SendSmsResponse, SingleCallByTts, SingleCallResponse, ValidationError,
    format_timestamp, is_success_code, join_phone_numbers,
};
pub use signing::ParameterSet;
