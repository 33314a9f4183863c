use std::io;

use infobip::{InfobipClient, Message};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let username = required_env("INFOBIP_USERNAME")?;
    let password = required_env("INFOBIP_PASSWORD")?;
    let to = required_env("INFOBIP_TO")?;
    let from = std::env::var("INFOBIP_FROM").unwrap_or_else(|_| "InfoSMS".to_owned());
    let text = std::env::var("INFOBIP_TEXT")
        .unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    let mut builder = InfobipClient::builder(username, password);
    if let Ok(base_url) = std::env::var("INFOBIP_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let response = client.single_message(&Message::new(from, to, text)).await?;
    for sent in &response.messages {
        println!(
            "to: {}, message_id: {}, status: {} ({}), sms_count: {}",
            sent.to, sent.message_id, sent.status.name, sent.status.group_name, sent.sms_count
        );
    }

    Ok(())
}
