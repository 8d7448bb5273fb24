//! Client layer: builds call-local parameter sets, signs them and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::{
    AccessKeyId, AccessKeySecret, Outcome, Param, SendSms, SendSmsResponse, SingleCallByTts,
    SingleCallResponse, ValidationError, format_timestamp, is_success_code,
};
use crate::signing::{ParameterSet, signed_query};
use crate::transport::TransportError;

const DEFAULT_SMS_ENDPOINT: &str = "http://dysmsapi.aliyuncs.com/";
const DEFAULT_VOICE_ENDPOINT: &str = "http://dyvmsapi.aliyuncs.com/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Boxed error produced by a pluggable collaborator.
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Source of `SignatureNonce` values.
///
/// Only uniqueness across calls matters. A failing generator aborts the call
/// with [`AliyunError::Nonce`] instead of sending an empty nonce.
pub trait NonceGenerator: fmt::Debug + Send + Sync {
    fn generate(&self) -> Result<String, BoxError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Random (v4) UUID nonces.
pub struct UuidNonce;

impl NonceGenerator for UuidNonce {
    fn generate(&self) -> Result<String, BoxError> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// Wall clock used for the default `Timestamp`.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
/// Access key pair issued in the Aliyun console.
pub struct Credential {
    access_key_id: AccessKeyId,
    access_key_secret: AccessKeySecret,
}

impl Credential {
    /// Validate both parts: the id must be non-empty after trimming, the secret non-empty.
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            access_key_id: AccessKeyId::new(access_key_id)?,
            access_key_secret: AccessKeySecret::new(access_key_secret)?,
        })
    }

    pub fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AliyunClient`].
///
/// A reply whose `Code` is not `OK` is not an error; it comes back as an
/// [`Outcome`] with `success == false`.
pub enum AliyunError {
    /// HTTP client / transport failure (request build, connection, body read).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Non-successful HTTP status whose body is not a service reply.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The nonce generator failed; nothing was sent.
    #[error("failed to generate signature nonce: {0}")]
    Nonce(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`AliyunClient`].
///
/// Use this when you need to customize endpoints, timeout, user-agent, or the
/// nonce and clock sources.
pub struct AliyunClientBuilder {
    credential: Credential,
    sms_endpoint: String,
    voice_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    nonce: Arc<dyn NonceGenerator>,
    clock: Arc<dyn Clock>,
}

impl AliyunClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            sms_endpoint: DEFAULT_SMS_ENDPOINT.to_owned(),
            voice_endpoint: DEFAULT_VOICE_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            nonce: Arc::new(UuidNonce),
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the SMS API endpoint (`SendSms`).
    pub fn sms_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sms_endpoint = endpoint.into();
        self
    }

    /// Override the voice API endpoint (`SingleCallByTts`).
    pub fn voice_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.voice_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the default UUID nonce source.
    pub fn nonce_generator(mut self, nonce: impl NonceGenerator + 'static) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Replace the system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build an [`AliyunClient`].
    pub fn build(self) -> Result<AliyunClient, AliyunError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| AliyunError::Transport(Box::new(err)))?;

        Ok(AliyunClient {
            credential: self.credential,
            sms_endpoint: self.sms_endpoint,
            voice_endpoint: self.voice_endpoint,
            http: Arc::new(ReqwestTransport { client }),
            nonce: self.nonce,
            clock: self.clock,
        })
    }
}

#[derive(Clone)]
/// High-level Aliyun SMS / voice client.
///
/// Every call builds its own parameter set from defaults, caller overrides and
/// required fields (applied in that order), signs it and issues one `GET`. Only
/// the credential, endpoints and HTTP handle live on the client, so a single
/// instance can serve concurrent calls. By default it uses:
/// - `http://dysmsapi.aliyuncs.com/` for SMS
/// - `http://dyvmsapi.aliyuncs.com/` for voice calls
pub struct AliyunClient {
    credential: Credential,
    sms_endpoint: String,
    voice_endpoint: String,
    http: Arc<dyn HttpTransport>,
    nonce: Arc<dyn NonceGenerator>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for AliyunClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliyunClient")
            .field("credential", &self.credential)
            .field("sms_endpoint", &self.sms_endpoint)
            .field("voice_endpoint", &self.voice_endpoint)
            .finish_non_exhaustive()
    }
}

impl AliyunClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`AliyunClient::builder`].
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            sms_endpoint: DEFAULT_SMS_ENDPOINT.to_owned(),
            voice_endpoint: DEFAULT_VOICE_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            nonce: Arc::new(UuidNonce),
            clock: Arc::new(SystemClock),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credential: Credential) -> AliyunClientBuilder {
        AliyunClientBuilder::new(credential)
    }

    /// Send a template SMS.
    ///
    /// `overrides` replace common defaults (timestamp, nonce, region, ...) in
    /// order; they never replace the fields taken from `request`.
    ///
    /// Errors:
    /// - [`AliyunError::Nonce`] if no nonce could be generated,
    /// - [`AliyunError::Url`] for a malformed endpoint,
    /// - [`AliyunError::Transport`] for connection or body-read failures,
    /// - [`AliyunError::HttpStatus`] / [`AliyunError::Parse`] for undecodable replies.
    pub async fn send_sms(
        &self,
        request: SendSms,
        overrides: &[Param],
    ) -> Result<Outcome<SendSmsResponse>, AliyunError> {
        let mut params = self.common_params(SendSms::ACTION, overrides)?;
        crate::transport::encode_send_sms_params(&request, &mut params);

        let response = self.call(&self.sms_endpoint, &params).await?;
        let parsed = decode_reply(response, crate::transport::decode_send_sms_json_response)?;

        let success = is_success_code(&parsed.code);
        if !success {
            log::warn!(
                "SendSms rejected: code={} message={} request_id={}",
                parsed.code,
                parsed.message,
                parsed.request_id
            );
        }
        Ok(Outcome {
            success,
            response: parsed,
        })
    }

    /// Place a text-to-speech voice call.
    ///
    /// Same parameter precedence and error semantics as [`AliyunClient::send_sms`].
    pub async fn single_call_by_tts(
        &self,
        request: SingleCallByTts,
        overrides: &[Param],
    ) -> Result<Outcome<SingleCallResponse>, AliyunError> {
        let mut params = self.common_params(SingleCallByTts::ACTION, overrides)?;
        crate::transport::encode_single_call_params(&request, &mut params);

        let response = self.call(&self.voice_endpoint, &params).await?;
        let parsed = decode_reply(response, crate::transport::decode_single_call_json_response)?;

        let success = is_success_code(&parsed.code);
        if !success {
            log::warn!(
                "SingleCallByTts rejected: code={} message={} request_id={}",
                parsed.code,
                parsed.message,
                parsed.request_id
            );
        }
        Ok(Outcome {
            success,
            response: parsed,
        })
    }

    fn common_params(&self, action: &str, overrides: &[Param]) -> Result<ParameterSet, AliyunError> {
        let nonce = self.nonce.generate().map_err(AliyunError::Nonce)?;
        let timestamp = format_timestamp(self.clock.now());

        let mut params = crate::transport::seed_common_params(
            &self.credential.access_key_id,
            timestamp,
            nonce,
            action,
        );
        crate::transport::apply_overrides(&mut params, overrides);
        Ok(params)
    }

    fn signed_url(&self, endpoint: &str, params: &ParameterSet) -> Result<Url, AliyunError> {
        let mut url = Url::parse(endpoint)?;
        let query = signed_query(self.credential.access_key_secret.expose(), params);
        url.set_query(Some(&query));
        Ok(url)
    }

    async fn call(&self, endpoint: &str, params: &ParameterSet) -> Result<HttpResponse, AliyunError> {
        let url = self.signed_url(endpoint, params)?;
        log::debug!(
            "calling {} on {endpoint}",
            params.get("Action").unwrap_or_default()
        );

        self.http
            .get(url.as_str())
            .await
            .map_err(AliyunError::Transport)
    }
}

/// Decode a reply body regardless of HTTP status: the service reports business
/// failures (bad signature, throttling, ...) with 4xx codes and a JSON body.
fn decode_reply<T>(
    response: HttpResponse,
    decode: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, AliyunError> {
    match decode(&response.body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(AliyunError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(AliyunError::Parse(Box::new(err))),
    }
}
