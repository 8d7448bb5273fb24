mod config;

use aliyun_sms::{AliyunClient, Credential, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = config::load()?;

    let client = AliyunClient::new(Credential::new(
        config.access_key_id,
        config.access_key_secret,
    )?);
    let request = SendSms::new(
        config.phone_numbers,
        config.sign_name,
        config.template_code,
        config.template_param,
    );

    let outcome = client.send_sms(request, &[]).await?;
    log::info!("send_sms finished: success={}", outcome.success);
    println!(
        "success: {}, code: {}, message: {}, biz_id: {}, request_id: {}",
        outcome.success,
        outcome.response.code,
        outcome.response.message,
        outcome.response.biz_id,
        outcome.response.request_id
    );

    Ok(())
}
