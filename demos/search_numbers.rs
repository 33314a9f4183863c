use std::io;

use infobip::{InfobipClient, SearchNumberParams};

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

    let params = SearchNumberParams {
        capabilities: Some("SMS".to_owned()),
        country: std::env::var("INFOBIP_COUNTRY").ok(),
        limit: Some(10),
        ..Default::default()
    };

    let client = InfobipClient::new(username, password)?;
    let response = client.search_number(&params).await?;

    println!("found {} numbers", response.number_count);
    for number in &response.numbers {
        println!(
            "{} ({}, {}) capabilities: {}",
            number.number,
            number.country,
            number.number_type,
            number.capabilities.join(",")
        );
    }

    Ok(())
}
