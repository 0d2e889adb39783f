use std::io;

use gosms::GoSmsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message_id = std::env::var("GOSMS_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOSMS_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = GoSmsClient::from_env()?;
    let response = client.status(&message_id).await?;

    println!(
        "status: {}, to: {:?}, sent at: {:?}",
        response.status, response.to, response.send_at
    );

    Ok(())
}
