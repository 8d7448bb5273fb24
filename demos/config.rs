use std::io;
use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_ENV: &str = "ALIYUN_SMS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Demo settings, read from `config.json` (or the path in `ALIYUN_SMS_CONFIG`):
///
/// ```json
/// {
///   "access_key_id": "testId",
///   "access_key_secret": "testSecret",
///   "phone_numbers": ["15300000001"],
///   "sign_name": "阿里云短信测试专用",
///   "template_code": "SMS_71390007",
///   "template_param": "{\"code\":\"888888\"}",
///   "called_show_number": "057188773344",
///   "tts_code": "TTS_10001",
///   "tts_param": "{\"code\":\"888888\"}"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Config {
    pub access_key_id: String,
    pub access_key_secret: String,
    pub phone_numbers: Vec<String>,
    pub sign_name: String,
    pub template_code: String,
    pub template_param: String,
    #[serde(default)]
    pub called_show_number: Option<String>,
    #[serde(default)]
    pub tts_code: Option<String>,
    #[serde(default)]
    pub tts_param: Option<String>,
}

pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
    let path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let raw = std::fs::read_to_string(&path).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("load config file {}: {err}", path.display()),
        )
    })?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}
