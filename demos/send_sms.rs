use std::io;

use gosms::{ClientOptions, GoSmsClient, SendOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("gosms=debug")
        .init();

    let api_key = std::env::var("GOSMS_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_API_KEY environment variable is required",
        )
    })?;
    let to = std::env::var("GOSMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_TO environment variable is required",
        )
    })?;
    let sender = std::env::var("GOSMS_SENDER").unwrap_or_else(|_| "GOSMS".to_owned());

    let options = ClientOptions {
        debug: true,
        retries: 3,
        ..Default::default()
    };
    let client = GoSmsClient::with_options(api_key, options)?;
    let response = client
        .send(&to, "hello from gosms", &sender, SendOptions::default())
        .await?;

    println!(
        "success: {}, message_id: {}, segments: {:?}, balance: {:?}",
        response.success, response.message_id, response.segment, response.balance
    );

    Ok(())
}
