//! Domain layer: strong types with validation and invariants (no I/O).

mod param;
mod request;
mod response;
mod validation;
mod value;

pub use param::Param;
pub use request::{API_VERSION, DEFAULT_REGION_ID, SendSms, SingleCallByTts};
pub use response::{
    OK_CODE, Outcome, SendSmsResponse, SingleCallResponse, is_success_code,
};
pub use validation::ValidationError;
pub use value::{AccessKeyId, AccessKeySecret, format_timestamp, join_phone_numbers};
