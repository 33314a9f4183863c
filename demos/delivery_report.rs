use std::io;

use infobip::InfobipClient;

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
    let message_id = std::env::var("INFOBIP_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = InfobipClient::new(username, password)?;
    let response = client.get_delivery_report(&message_id).await?;

    for report in &response.results {
        println!(
            "{} to {}: {} (group {:?}), price {} {}, done at {}",
            report.message_id,
            report.to,
            report.status.name,
            report.status.known_group(),
            report.price.price_per_message,
            report.price.currency,
            report.done_at,
        );
        if let Some(error) = &report.error {
            println!("  error: {} (permanent: {})", error.name, error.permanent);
        }
    }

    Ok(())
}
