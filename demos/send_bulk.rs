use std::io;

use infobip::{BulkMessage, Destination, InfobipClient, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let username = std::env::var("INFOBIP_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("INFOBIP_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_PASSWORD environment variable is required",
        )
    })?;
    let recipients_raw = std::env::var("INFOBIP_RECIPIENTS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_RECIPIENTS environment variable is required (comma-separated numbers)",
        )
    })?;

    let destinations = recipients_raw
        .split(',')
        .map(str::trim)
        .filter(|to| !to.is_empty())
        .map(Destination::new)
        .collect::<Vec<_>>();
    let bulk = BulkMessage::new(vec![Message::to_destinations(
        "InfoSMS",
        destinations,
        "Hello from the infobip bulk demo.",
    )]);

    let client = InfobipClient::new(username, password)?;
    let response = client.advanced_message(&bulk).await?;

    println!("bulk_id: {:?}", response.bulk_id);
    for sent in &response.messages {
        println!("{} -> {} ({})", sent.to, sent.message_id, sent.status.name);
    }

    Ok(())
}
