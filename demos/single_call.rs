mod config;

use std::io;

use aliyun_sms::{AliyunClient, Credential, SingleCallByTts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = config::load()?;

    let missing = |field: &str| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("config field {field} is required for voice calls"),
        )
    };
    let called_show_number = config
        .called_show_number
        .ok_or_else(|| missing("called_show_number"))?;
    let tts_code = config.tts_code.ok_or_else(|| missing("tts_code"))?;
    let called_number = config
        .phone_numbers
        .into_iter()
        .next()
        .ok_or_else(|| missing("phone_numbers"))?;

    let client = AliyunClient::new(Credential::new(
        config.access_key_id,
        config.access_key_secret,
    )?);
    let request = SingleCallByTts::new(
        called_show_number,
        called_number,
        tts_code,
        config.tts_param.unwrap_or_else(|| "{}".to_owned()),
    );

    let outcome = client.single_call_by_tts(request, &[]).await?;
    log::info!("single_call finished: success={}", outcome.success);
    println!(
        "success: {}, code: {}, message: {}, call_id: {}",
        outcome.success, outcome.response.code, outcome.response.message, outcome.response.call_id
    );

    Ok(())
}
